//! Folio Core Library
//!
//! Routing and domain logic for a single-page portfolio site, kept free of
//! any rendering surface so it can be tested on the host.
//!
//! ## Overview
//!
//! The [`Router`] owns the current [`PageId`] and keeps it in sync with a
//! [`PageView`] (which section is visible, which link is highlighted, whether
//! the mobile menu is open) and a [`History`] stack (the URL fragment).
//! Around it sit the smaller pieces of the site: the persisted theme flag,
//! toast notifications, the vCard export, simulated downloads and contact
//! form, and the geometry of the decorative effects.
//!
//! ## Quick Start
//!
//! ```
//! use folio_core::{MemoryHistory, PageId, Router, SectionState};
//!
//! let mut router = Router::new(SectionState::new(), MemoryHistory::new());
//! let _ = router.initialize();
//!
//! let _ = router.navigate("projects");
//! assert_eq!(router.current(), PageId::Projects);
//!
//! // Unknown targets are ignored
//! let _ = router.navigate("blog");
//! assert_eq!(router.current(), PageId::Projects);
//! ```

pub mod contact;
pub mod download;
pub mod effects;
pub mod error;
pub mod history;
pub mod keyboard;
pub mod notify;
pub mod page;
pub mod particles;
pub mod profile;
pub mod reveal;
pub mod router;
pub mod theme;
pub mod vcard;
pub mod view;

// Re-exports
pub use contact::{ContactForm, ContactMessage, SubmitState};
pub use download::{Artifact, CardFormat, DownloadPlan, Payload};
pub use error::{FolioError, FolioResult};
pub use history::{History, HistoryEntry, MemoryHistory};
pub use keyboard::{Direction, KeyChord};
pub use notify::{Toast, ToastId, ToastKind, ToastPhase, Toasts};
pub use page::PageId;
pub use particles::Particle;
pub use profile::{AssetPaths, PostalAddress, Profile, Project, SiteConfig, SiteContent, TimelineEntry};
pub use reveal::{RevealKey, RevealScheduler, RevealTicket};
pub use router::{Ignored, InitialPage, Router, Transition};
pub use theme::{MemoryStore, PreferenceStore, Theme, ThemePreference};
pub use vcard::ContactCard;
pub use view::{PageView, SectionState};
