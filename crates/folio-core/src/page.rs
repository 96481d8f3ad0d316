//! The fixed, ordered set of portfolio pages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FolioError;

/// One of the named sections of the single-page site.
///
/// Declaration order is the order used by keyboard left/right navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageId {
    #[default]
    Home,
    About,
    Projects,
    Cv,
    Contact,
}

impl PageId {
    /// All pages in navigation order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::About,
        PageId::Projects,
        PageId::Cv,
        PageId::Contact,
    ];

    /// Element id and history tag for this page
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Home => "home",
            PageId::About => "about",
            PageId::Projects => "projects",
            PageId::Cv => "cv",
            PageId::Contact => "contact",
        }
    }

    /// Label shown in the navigation bar
    pub fn display_name(&self) -> &'static str {
        match self {
            PageId::Home => "Home",
            PageId::About => "About",
            PageId::Projects => "Projects",
            PageId::Cv => "CV",
            PageId::Contact => "Contact",
        }
    }

    /// URL fragment, including the leading `#`.
    pub fn fragment(&self) -> String {
        format!("#{}", self.as_str())
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The following page, or `None` on the last one.
    pub fn next(&self) -> Option<PageId> {
        Self::ALL.get(self.index() + 1).copied()
    }

    /// The preceding page, or `None` on the first one.
    pub fn previous(&self) -> Option<PageId> {
        self.index().checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// Parse a URL fragment such as `#about` (the `#` is optional).
    pub fn from_fragment(fragment: &str) -> Option<PageId> {
        fragment.strip_prefix('#').unwrap_or(fragment).parse().ok()
    }
}

impl FromStr for PageId {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageId::ALL
            .into_iter()
            .find(|page| page.as_str() == s)
            .ok_or_else(|| FolioError::UnknownPage(s.to_string()))
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
