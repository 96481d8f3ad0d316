//! Contact Form Component
//!
//! Controlled inputs feeding `folio_core::ContactForm`. Submission is
//! simulated: the button shows a spinner for `SUBMIT_DELAY`, then a success
//! toast appears and the fields are cleared.

use dioxus::prelude::*;
use folio_core::contact::{SENDING_LABEL, SUBMIT_DELAY};
use folio_core::{ContactForm, ContactMessage, ToastKind};

use crate::context::{notify, sleep, use_toasts};

#[component]
pub fn ContactFormView() -> Element {
    let toasts = use_toasts();
    let mut form = use_signal(ContactForm::new);

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);

    let sending = form.read().is_sending();

    let handle_submit = move |e: FormEvent| {
        e.prevent_default();

        let draft = ContactMessage {
            name: name(),
            email: email(),
            subject: subject(),
            message: message(),
        };

        let result = form.write().submit(draft);
        if let Err(err) = result {
            notify(toasts, err.to_string(), ToastKind::Error);
            return;
        }

        spawn(async move {
            sleep(SUBMIT_DELAY).await;
            let notice = form.write().finish();
            if let Some(notice) = notice {
                notify(toasts, notice, ToastKind::Success);
            }
            name.set(String::new());
            email.set(String::new());
            subject.set(String::new());
            message.set(String::new());
        });
    };

    rsx! {
        form { class: "contact-form", onsubmit: handle_submit,
            div { class: "form-row",
                div { class: "form-group",
                    label { r#for: "contact-name", "Name" }
                    input {
                        id: "contact-name",
                        name: "name",
                        r#type: "text",
                        required: true,
                        value: "{name}",
                        disabled: sending,
                        oninput: move |e| name.set(e.value()),
                    }
                }
                div { class: "form-group",
                    label { r#for: "contact-email", "Email" }
                    input {
                        id: "contact-email",
                        name: "email",
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        disabled: sending,
                        oninput: move |e| email.set(e.value()),
                    }
                }
            }
            div { class: "form-group",
                label { r#for: "contact-subject", "Subject" }
                input {
                    id: "contact-subject",
                    name: "subject",
                    r#type: "text",
                    value: "{subject}",
                    disabled: sending,
                    oninput: move |e| subject.set(e.value()),
                }
            }
            div { class: "form-group",
                label { r#for: "contact-message", "Message" }
                textarea {
                    id: "contact-message",
                    name: "message",
                    rows: 5,
                    required: true,
                    value: "{message}",
                    disabled: sending,
                    oninput: move |e| message.set(e.value()),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: sending,
                if sending {
                    i { class: "fas fa-spinner fa-spin" }
                    " {SENDING_LABEL}"
                } else {
                    i { class: "fas fa-paper-plane" }
                    " Send Message"
                }
            }
        }
    }
}
