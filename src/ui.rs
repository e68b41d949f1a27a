//! UI module for Vision
//! Afeka palette with dark and high-contrast variants
//!
//! # Architecture
//!
//! The UI is organized into layers:
//!
//! - **Primitives** (`primitives`): Low-level canvas programs
//! - **Widgets** (`widgets`): Composable UI patterns without business logic
//! - **Components** (`components`): Shared UI with Message handling
//! - **Pages** (`pages`): One full view per screen

pub mod animation;
pub mod components;
pub mod pages;
pub mod primitives;
pub mod theme;
pub mod widgets;
