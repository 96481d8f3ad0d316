//! Site configuration: owner profile, downloadable assets and page content.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, FolioResult};
use crate::router::InitialPage;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostalAddress {
    pub street: String,
    pub locality: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl Default for PostalAddress {
    fn default() -> Self {
        Self {
            street: "Nairobi".to_string(),
            locality: "Nairobi County".to_string(),
            region: String::new(),
            postal_code: "00100".to_string(),
            country: "Kenya".to_string(),
        }
    }
}

/// Who the portfolio belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: String,
    pub organization: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub url: String,
    pub address: PostalAddress,
    pub note: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Kelvin Developer".to_string(),
            organization: "Freelance Developer".to_string(),
            title: "Front-end Developer".to_string(),
            email: "kevrith@gmail.com".to_string(),
            phone: "+254 718 864 578".to_string(),
            url: "https://kelvindeveloper.portfolio.com".to_string(),
            address: PostalAddress::default(),
            note: "Front-end Developer specializing in web development and software development"
                .to_string(),
        }
    }
}

impl Profile {
    /// Name with whitespace runs replaced by `_`, used in download file names.
    pub fn file_stem(&self) -> String {
        self.name.split_whitespace().collect::<Vec<_>>().join("_")
    }
}

/// Paths of real files behind the download buttons. Unset means the
/// download is simulated.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetPaths {
    pub cv: Option<String>,
    pub card_pdf: Option<String>,
    pub card_jpg: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub period: String,
    pub role: String,
    pub place: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteContent {
    pub tagline: String,
    pub about: Vec<String>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub experience: Vec<TimelineEntry>,
    pub education: Vec<TimelineEntry>,
}

impl Default for SiteContent {
    fn default() -> Self {
        Self {
            tagline: "I build fast, friendly interfaces for the web.".to_string(),
            about: vec![
                "Front-end developer based in Nairobi, focused on responsive layouts and clean interaction design."
                    .to_string(),
            ],
            skills: ["HTML5", "CSS3", "JavaScript", "Rust", "WebAssembly"]
                .into_iter()
                .map(String::from)
                .collect(),
            projects: Vec::new(),
            experience: Vec::new(),
            education: Vec::new(),
        }
    }
}

/// Everything the site needs to render.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub profile: Profile,
    pub assets: AssetPaths,
    pub initial_page: InitialPage,
    pub content: SiteContent,
}

impl SiteConfig {
    pub fn from_json_str(json: &str) -> FolioResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loading site config");
        Self::from_json_str(&json)
    }

    /// Reject configs that would produce an unusable contact card.
    pub fn validate(&self) -> FolioResult<()> {
        if self.profile.name.trim().is_empty() {
            return Err(FolioError::Config("profile.name must not be empty".to_string()));
        }
        if !self.profile.email.is_empty() && !self.profile.email.contains('@') {
            return Err(FolioError::Config(format!(
                "profile.email is not an address: {}",
                self.profile.email
            )));
        }
        Ok(())
    }
}
