//! Folio UI Components
//!
//! Reusable Dioxus components for the portfolio frontend. Class names match
//! the global stylesheet shipped by the `folio` web crate.
//!
//! ## Design Language
//!
//! - **Accent (#00d4ff)**: links, active navigation, primary buttons
//! - **Teal (#4ecdc4)**: tags and secondary highlights
//! - **Card background**: translucent panels with a blurred backdrop

pub mod components;

pub use components::*;
