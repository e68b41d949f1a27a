//! Feature modules - flow logic separated from UI
//!
//! Each feature module contains the core logic for one part of the flow.
//! Features should not depend on UI components directly.

pub mod accessibility;
pub mod feedback;
pub mod route;
pub mod router;
pub mod seating;
pub mod selection;
pub mod settings;
pub mod tips;

pub use router::{Motion, Router, ScreenId, Visit};
pub use selection::{SeatId, SelectionState, SelectionUpdate};
pub use settings::{Preference, Settings};
