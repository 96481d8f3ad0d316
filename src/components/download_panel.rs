//! Download Panel Component
//!
//! CV and business card buttons. The vCard is generated in place; the other
//! formats use a configured asset path, or only announce the download when
//! none is set.

use dioxus::prelude::*;
use folio_core::{Artifact, CardFormat, DownloadPlan, Payload};
use folio_ui::{Button, ButtonVariant};

use crate::browser;
use crate::context::{notify, use_site_config, use_toasts};

#[component]
pub fn DownloadPanel() -> Element {
    let toasts = use_toasts();
    let config = use_site_config();

    let download = use_callback(move |artifact: Artifact| {
        let plan = DownloadPlan::for_artifact(artifact, &config.profile, &config.assets);
        tracing::info!(file = %plan.file_name, "Download requested");

        spawn(async move {
            match &plan.payload {
                Payload::Generated(body) => browser::save_text(&plan.file_name, plan.mime, body).await,
                Payload::Asset(path) => browser::click_download(path, &plan.file_name).await,
                Payload::Unavailable => {
                    tracing::debug!(file = %plan.file_name, "No asset configured, download simulated");
                }
            }
            notify(toasts, plan.notice, plan.notice_kind);
        });
    });

    rsx! {
        div { class: "download-panel",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| download.call(Artifact::Cv),
                i { class: "fas fa-file-pdf" }
                " Download CV"
            }

            div { class: "business-card-downloads",
                h4 { "Business card" }
                div { class: "download-buttons",
                    for (format, icon, label) in CARD_BUTTONS {
                        Button {
                            key: "{format}",
                            variant: ButtonVariant::Download,
                            onclick: move |_| download.call(Artifact::BusinessCard(format)),
                            i { class: "fas fa-{icon}" }
                            " {label}"
                        }
                    }
                }
            }
        }
    }
}

/// Format, icon and label of each business card button.
const CARD_BUTTONS: [(CardFormat, &str, &str); 3] = [
    (CardFormat::Pdf, "file-pdf", "PDF"),
    (CardFormat::Jpg, "file-image", "JPG"),
    (CardFormat::VCard, "address-card", "vCard"),
];
