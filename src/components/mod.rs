//! UI Components for Folio.
//!
//! Site-specific pieces that read shared context; generic building blocks
//! live in `folio-ui`.

mod contact_form;
mod download_panel;
mod loader;
mod mobile_nav;
mod nav_header;
mod particle_field;
mod reveal;
mod toast_host;

pub use contact_form::ContactFormView;
pub use download_panel::DownloadPanel;
pub use loader::Loader;
pub use nav_header::NavHeader;
pub use particle_field::ParticleField;
pub use reveal::Reveal;
pub use toast_host::ToastHost;
