//! Downloadable artifacts: CV and business card in three formats.
//!
//! Only the vCard is generated here. PDF and JPG downloads point at a
//! configured asset path; without one they are simulated (nothing is saved,
//! the notice is still shown).

use std::fmt;
use std::str::FromStr;

use crate::error::FolioError;
use crate::notify::ToastKind;
use crate::profile::{AssetPaths, Profile};
use crate::vcard::{ContactCard, VCARD_MIME};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardFormat {
    Pdf,
    Jpg,
    VCard,
}

impl CardFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardFormat::Pdf => "pdf",
            CardFormat::Jpg => "jpg",
            CardFormat::VCard => "vcard",
        }
    }
}

impl FromStr for CardFormat {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pdf" => Ok(CardFormat::Pdf),
            "jpg" => Ok(CardFormat::Jpg),
            "vcard" => Ok(CardFormat::VCard),
            other => Err(FolioError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for CardFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Artifact {
    Cv,
    BusinessCard(CardFormat),
}

/// Where the bytes of a download come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// Text generated on the spot
    Generated(String),
    /// A file served at this path
    Asset(String),
    /// No file behind the button
    Unavailable,
}

/// Everything needed to offer a download and tell the user about it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadPlan {
    pub file_name: String,
    pub mime: &'static str,
    pub payload: Payload,
    pub notice: String,
    pub notice_kind: ToastKind,
}

impl DownloadPlan {
    pub fn for_artifact(artifact: Artifact, profile: &Profile, assets: &AssetPaths) -> Self {
        let stem = profile.file_stem();
        let asset = |path: &Option<String>| {
            path.clone().map(Payload::Asset).unwrap_or(Payload::Unavailable)
        };

        match artifact {
            Artifact::Cv => Self {
                file_name: format!("{stem}_CV.pdf"),
                mime: "application/pdf",
                payload: asset(&assets.cv),
                notice: "CV download started!".to_string(),
                notice_kind: ToastKind::Info,
            },
            Artifact::BusinessCard(CardFormat::Pdf) => Self {
                file_name: format!("{stem}_BusinessCard.pdf"),
                mime: "application/pdf",
                payload: asset(&assets.card_pdf),
                notice: "PDF business card download started!".to_string(),
                notice_kind: ToastKind::Info,
            },
            Artifact::BusinessCard(CardFormat::Jpg) => Self {
                file_name: format!("{stem}_BusinessCard.jpg"),
                mime: "image/jpeg",
                payload: asset(&assets.card_jpg),
                notice: "JPG business card download started!".to_string(),
                notice_kind: ToastKind::Info,
            },
            Artifact::BusinessCard(CardFormat::VCard) => {
                let card = ContactCard::from_profile(profile);
                Self {
                    file_name: card.file_name(),
                    mime: VCARD_MIME,
                    payload: Payload::Generated(card.render()),
                    notice: "vCard downloaded successfully!".to_string(),
                    notice_kind: ToastKind::Success,
                }
            }
        }
    }
}
