//! Primitive UI elements - atomic building blocks
//!
//! Lowest-level pieces that implement iced's `Widget` or `canvas::Program`
//! traits directly. They use generic Message types and never import from
//! `crate::app`.

pub mod progress_ring;

pub use progress_ring::{ProgressRing, view_progress_ring};
