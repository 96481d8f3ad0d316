//! Visual theme for Folio.

mod styles;

pub use styles::GLOBAL_STYLES;
