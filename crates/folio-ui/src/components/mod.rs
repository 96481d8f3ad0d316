//! Reusable UI components
//!
//! - Buttons with the click ripple
//! - Project cards for the projects page
//! - Timeline rows and skill badges for the CV and about pages

mod button;
mod project_card;
mod skill_badge;
mod timeline_item;

pub use button::*;
pub use project_card::*;
pub use skill_badge::*;
pub use timeline_item::*;
