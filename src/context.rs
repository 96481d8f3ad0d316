//! Shared state for Folio components.
//!
//! The router, toast queue, theme preference and site config are created
//! once in `App` and handed to every component through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! let router = use_router();
//! let toasts = use_toasts();
//!
//! go_to(router, PageId::Contact);
//! notify(toasts, "CV download started!", ToastKind::Info);
//! ```

use std::time::Duration;

use dioxus::prelude::*;
use folio_core::notify::TOAST_STEPS;
use folio_core::{PageId, RevealTicket, Router, SectionState, SiteConfig, ThemePreference, ToastKind, Toasts};
use gloo::timers::future::TimeoutFuture;

use crate::browser::{BrowserHistory, LocalStore};

/// Router type used by the web frontend.
pub type SiteRouter = Router<SectionState, BrowserHistory>;

pub type SiteTheme = ThemePreference<LocalStore>;

/// Hero translation driven by touch parallax, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HeroShift(pub f64);

pub fn use_router() -> Signal<SiteRouter> {
    use_context::<Signal<SiteRouter>>()
}

pub fn use_toasts() -> Signal<Toasts> {
    use_context::<Signal<Toasts>>()
}

pub fn use_theme() -> Signal<SiteTheme> {
    use_context::<Signal<SiteTheme>>()
}

pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}

pub fn use_hero_shift() -> Signal<HeroShift> {
    use_context::<Signal<HeroShift>>()
}

/// Sleep on the browser event loop.
pub async fn sleep(duration: Duration) {
    TimeoutFuture::new(duration.as_millis() as u32).await;
}

/// Run each reveal ticket after its delay.
///
/// Tickets for sections that were hidden in the meantime are rejected by the
/// router, so nothing needs cancelling here.
pub fn schedule_reveals(mut router: Signal<SiteRouter>, tickets: Vec<RevealTicket>) {
    for ticket in tickets {
        spawn(async move {
            sleep(ticket.delay).await;
            router.write().complete_reveal(&ticket);
        });
    }
}

/// Navigate and start the reveal animation of the new page.
pub fn go_to(mut router: Signal<SiteRouter>, page: PageId) {
    let reveals = router.write().navigate_to(page).into_reveals();
    schedule_reveals(router, reveals);
}

/// Queue a toast and drive it through slide-in, display and removal.
pub fn notify(mut toasts: Signal<Toasts>, message: impl Into<String>, kind: ToastKind) {
    let id = toasts.write().push(message, kind);
    let [show, dismiss, remove] = TOAST_STEPS;
    spawn(async move {
        sleep(show).await;
        toasts.write().show(id);
        sleep(dismiss).await;
        toasts.write().begin_dismiss(id);
        sleep(remove).await;
        toasts.write().remove(id);
    });
}
