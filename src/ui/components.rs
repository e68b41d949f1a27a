//! UI Components module - application-aware composite pieces
//!
//! Components combine widgets and primitives with application logic.
//! Unlike widgets they map interactions straight to `crate::app::Message`,
//! and are shared by more than one page.
//!
//! - **Primitives** (`crate::ui::primitives`): Low-level canvas programs
//! - **Widgets** (`crate::ui::widgets`): Composable UI patterns (no business logic)
//! - **Components** (this module): Business-specific UI with Message handling

pub mod dialog;
pub mod preferences_dialog;
pub mod sos;
pub mod tip_card;
pub mod top_bar;
