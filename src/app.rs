use dioxus::document;
use dioxus::prelude::*;
use folio_core::effects::{navbar_scrolled, TouchParallax, LOADER_DELAY};
use folio_core::{KeyChord, Router, SectionState, SiteConfig, ThemePreference, Toasts};

use crate::browser::{self, BrowserHistory, LocalStore, WindowEvent, WINDOW_EVENTS_JS};
use crate::components::{Loader, NavHeader, ToastHost};
use crate::context::{schedule_reveals, sleep, HeroShift, SiteRouter, SiteTheme};
use crate::pages::{self, About, Contact, Cv, Home, Projects};
use crate::theme::GLOBAL_STYLES;

/// Site config compiled into the bundle.
const SITE_JSON: &str = include_str!("../site.json");

fn site_config() -> SiteConfig {
    SiteConfig::from_json_str(SITE_JSON).unwrap_or_else(|e| {
        tracing::warn!("Invalid site.json, using built-in profile: {}", e);
        SiteConfig::default()
    })
}

/// Root application component.
///
/// Owns the router, toast queue and theme, provides them as context, and
/// forwards window events (history, keyboard, scroll, touch) to them.
#[component]
pub fn App() -> Element {
    let config = use_hook(site_config);

    let mut router: Signal<SiteRouter> = use_signal({
        let config = config.clone();
        move || {
            let view = SectionState::new().with_reveal_slots(pages::reveal_slots(&config));
            Router::new(view, BrowserHistory)
        }
    });
    let toasts = use_signal(Toasts::new);
    let theme: Signal<SiteTheme> = use_signal(|| ThemePreference::load(LocalStore));
    let mut hero_shift = use_signal(HeroShift::default);
    let mut scrolled = use_signal(|| false);
    let mut loading = use_signal(|| true);

    use_context_provider(|| router);
    use_context_provider(|| toasts);
    use_context_provider(|| theme);
    use_context_provider(|| hero_shift);
    use_context_provider({
        let config = config.clone();
        move || config
    });

    // Startup: replace the initial history entry and show the first page
    use_hook({
        let policy = config.initial_page;
        move || {
            let fragment = browser::current_fragment();
            let reveals = router.write().initialize_from(fragment.as_deref(), policy);
            schedule_reveals(router, reveals);
        }
    });

    // Hide the loading overlay
    use_future(move || async move {
        sleep(LOADER_DELAY).await;
        loading.set(false);
    });

    // Window events
    use_future(move || async move {
        let mut events = document::eval(WINDOW_EVENTS_JS);
        let mut touch = TouchParallax::default();

        loop {
            let event = match events.recv::<WindowEvent>().await {
                Ok(event) => event,
                Err(e) => {
                    tracing::warn!("Window event channel closed: {:?}", e);
                    break;
                }
            };

            match event {
                WindowEvent::Pop { page, fragment } => {
                    let entry = WindowEvent::history_entry(page.as_deref(), &fragment);
                    let reveals = router.write().restore_from_history(Some(&entry));
                    schedule_reveals(router, reveals);
                }
                WindowEvent::Key { alt, key } => {
                    let transition = router.write().handle_key(&KeyChord::new(alt, key));
                    if let Some(transition) = transition {
                        schedule_reveals(router, transition.into_reveals());
                    }
                }
                WindowEvent::Scroll { y } => {
                    let now = navbar_scrolled(y);
                    if scrolled() != now {
                        scrolled.set(now);
                    }
                }
                WindowEvent::TouchStart { y } => touch.start(y),
                WindowEvent::TouchMove { y } => {
                    if let Some(shift) = touch.track(y) {
                        hero_shift.set(HeroShift(shift));
                    }
                }
            }
        }
    });

    // Mirror the theme onto <body>
    use_effect(move || {
        let light = theme.read().body_class().is_some();
        let _ = document::eval(&format!(
            "document.body.classList.toggle('light-theme', {light});"
        ));
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        document::Link {
            rel: "stylesheet",
            href: "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css",
        }

        Loader { hidden: !loading() }
        NavHeader { scrolled: scrolled() }
        ToastHost {}

        main { class: "pages",
            Home {}
            About {}
            Projects {}
            Cv {}
            Contact {}
        }
    }
}
