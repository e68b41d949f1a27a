//! Reusable UI widgets - composable pieces without business logic
//!
//! Widgets combine primitives and basic iced elements into reusable UI
//! patterns. They use generic Message types and never import from
//! `crate::app`; components and pages wire them to application messages.

pub mod choice_card;
pub mod section_header;
pub mod star_rating;
mod toast;

pub use crate::ui::primitives::{ProgressRing, view_progress_ring};

pub use toast::{TOAST_DURATION, Toast, view_toast};
