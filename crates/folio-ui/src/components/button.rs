//! Button Components
//!
//! Button styles used across the site:
//! - Primary: filled accent button for the main call to action
//! - Secondary: outlined button
//! - Download: compact button in the download panel
//!
//! Every button plays a ripple from the click position.

use dioxus::html::geometry::{ElementPoint, PixelsRect};
use dioxus::html::MountedResult;
use dioxus::prelude::*;
use folio_core::effects::{Ripple, RIPPLE_LIFETIME};
use gloo::timers::future::TimeoutFuture;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Download,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Secondary => "btn btn-secondary",
            ButtonVariant::Download => "btn btn-download",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button with a click ripple
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Secondary,
///         onclick: move |_| router.write().navigate_to(PageId::Contact),
///         "Get in touch"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let mut mounted: Signal<Option<std::rc::Rc<MountedData>>> = use_signal(|| None);
    let mut ripples: Signal<Vec<(u64, Ripple)>> = use_signal(Vec::new);
    let mut next_ripple = use_signal(|| 0u64);

    let full_class = match props.class.as_deref() {
        Some(extra) if !extra.is_empty() => format!("{} {}", props.variant.class(), extra),
        _ => props.variant.class().to_string(),
    };

    let onclick = move |evt: MouseEvent| {
        if let Some(handler) = &props.onclick {
            handler.call(());
        }

        let click = evt.element_coordinates();
        let id = next_ripple();
        next_ripple.set(id + 1);

        spawn(async move {
            let Some(element) = mounted() else { return };
            let Some(ripple) = ripple_at(element.get_client_rect().await, click) else { return };

            ripples.write().push((id, ripple));
            TimeoutFuture::new(RIPPLE_LIFETIME.as_millis() as u32).await;
            ripples.write().retain(|(rid, _)| *rid != id);
        });
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onmounted: move |evt| mounted.set(Some(evt.data())),
            onclick: onclick,
            {props.children}
            for (id, ripple) in ripples() {
                span { key: "{id}", class: "ripple", style: "{ripple.style()}" }
            }
        }
    }
}

/// Ripple for a click at `click`, or `None` when the button could not be
/// measured.
fn ripple_at(rect: MountedResult<PixelsRect>, click: ElementPoint) -> Option<Ripple> {
    match rect {
        Ok(rect) => Some(Ripple::from_click(rect.size.width, rect.size.height, click.x, click.y)),
        Err(e) => {
            tracing::debug!(error = ?e, "Skipping ripple, button not measurable");
            None
        }
    }
}

/// Icon button for compact actions (menu toggle, theme switch)
#[derive(Clone, PartialEq, Props)]
pub struct IconButtonProps {
    /// Font Awesome icon name without the `fa-` prefix
    pub icon: String,
    /// Click handler
    pub onclick: EventHandler<()>,
    /// Accessible label for screen readers
    pub aria_label: String,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

#[component]
pub fn IconButton(props: IconButtonProps) -> Element {
    let extra_class = props.class.as_deref().unwrap_or("");
    let full_class = if extra_class.is_empty() {
        "icon-btn".to_string()
    } else {
        format!("icon-btn {}", extra_class)
    };

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            "aria-label": "{props.aria_label}",
            onclick: move |_| props.onclick.call(()),
            i { class: "fas fa-{props.icon}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::html::geometry::PixelsSize;
    use dioxus::html::MountedError;

    #[test]
    fn button_variant_classes() {
        assert_eq!(ButtonVariant::Primary.class(), "btn btn-primary");
        assert_eq!(ButtonVariant::Secondary.class(), "btn btn-secondary");
        assert_eq!(ButtonVariant::Download.class(), "btn btn-download");
    }

    #[test]
    fn ripple_uses_measured_size() {
        let rect = PixelsRect::new(Default::default(), PixelsSize::new(120.0, 40.0));
        let ripple = ripple_at(Ok(rect), ElementPoint::new(30.0, 20.0)).unwrap();
        assert_eq!(ripple, Ripple::from_click(120.0, 40.0, 30.0, 20.0));
    }

    #[test]
    fn unmeasurable_button_has_no_ripple() {
        assert!(ripple_at(Err(MountedError::NotSupported), ElementPoint::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn button_variant_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
