//! Selections accumulated across the screen flow
//!
//! Every form screen contributes a few fields. Re-submitting a form on a
//! later visit replaces what it wrote before; fields owned by other screens
//! are left alone.

use std::collections::BTreeSet;
use std::fmt;
use std::num::NonZeroU32;

use super::accessibility::{self, COLORBLIND};

/// A seat number in the lecture hall (always >= 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId(NonZeroU32);

impl SeatId {
    /// The first seat, pre-selected by the seat screen
    pub const FIRST: SeatId = SeatId(NonZeroU32::MIN);

    /// Returns `None` for seat 0
    pub fn new(number: u32) -> Option<Self> {
        NonZeroU32::new(number).map(Self)
    }

    #[cfg(test)]
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accumulated user choices
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    accessibility_options: BTreeSet<String>,
    avoided_colors: BTreeSet<String>,
    pub instructor_notes: String,
    pub campus: String,
    pub classroom: String,
    /// `None` until the seat form has been submitted
    pub seat: Option<SeatId>,
}

impl SelectionState {
    /// Chosen accessibility option ids
    pub fn accessibility_options(&self) -> &BTreeSet<String> {
        &self.accessibility_options
    }

    pub fn has_option(&self, id: &str) -> bool {
        self.accessibility_options.contains(id)
    }

    /// Colors to avoid; empty unless the colorblind option is chosen
    pub fn avoided_colors(&self) -> impl Iterator<Item = &str> {
        let enabled = self.has_option(COLORBLIND);
        self.avoided_colors
            .iter()
            .filter(move |_| enabled)
            .map(String::as_str)
    }

    /// Options and colors in the flat tagged form (`color_<id>` for colors)
    pub fn tagged_options(&self) -> Vec<String> {
        let colors: Vec<&str> = self.avoided_colors().collect();
        accessibility::tag_options(
            self.accessibility_options.iter().map(String::as_str),
            colors,
        )
    }

    /// Apply a partial update, overwriting each field that is present
    pub fn apply(&mut self, update: SelectionUpdate) {
        let SelectionUpdate {
            accessibility_options,
            avoided_colors,
            instructor_notes,
            campus,
            classroom,
            seat,
        } = update;

        if let Some(options) = accessibility_options {
            self.accessibility_options = options;
        }
        if let Some(colors) = avoided_colors {
            self.avoided_colors = colors;
        }
        if let Some(notes) = instructor_notes {
            self.instructor_notes = notes;
        }
        if let Some(campus) = campus {
            self.campus = campus;
        }
        if let Some(classroom) = classroom {
            self.classroom = classroom;
        }
        if let Some(seat) = seat {
            self.seat = Some(seat);
        }
    }
}

/// Partial update carried by a transition
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionUpdate {
    pub accessibility_options: Option<BTreeSet<String>>,
    pub avoided_colors: Option<BTreeSet<String>>,
    pub instructor_notes: Option<String>,
    pub campus: Option<String>,
    pub classroom: Option<String>,
    pub seat: Option<SeatId>,
}

impl SelectionUpdate {
    /// Build from the tagged list produced by the accessibility form.
    /// Replaces both the option set and the color set.
    pub fn accessibility<I, S>(tagged: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (options, colors) = accessibility::split_tagged(tagged);
        Self {
            accessibility_options: Some(options),
            avoided_colors: Some(colors),
            ..Default::default()
        }
    }

    /// Instructor notes form: re-submits the options list with the notes
    pub fn instructor_notes<I, S>(tagged: I, notes: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            instructor_notes: Some(notes.into()),
            ..Self::accessibility(tagged)
        }
    }

    pub fn class(campus: impl Into<String>, classroom: impl Into<String>) -> Self {
        Self {
            campus: Some(campus.into()),
            classroom: Some(classroom.into()),
            ..Default::default()
        }
    }

    pub fn seat(seat: SeatId) -> Self {
        Self {
            seat: Some(seat),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_id_rejects_zero() {
        assert!(SeatId::new(0).is_none());
        assert_eq!(SeatId::new(7).map(SeatId::get), Some(7));
        assert_eq!(SeatId::FIRST.get(), 1);
    }

    #[test]
    fn test_untouched_fields_survive() {
        let mut state = SelectionState::default();
        state.apply(SelectionUpdate::instructor_notes(["wheelchair"], "x"));
        state.apply(SelectionUpdate::class("C", "5"));

        assert!(state.has_option("wheelchair"));
        assert_eq!(state.accessibility_options().len(), 1);
        assert_eq!(state.instructor_notes, "x");
        assert_eq!(state.campus, "C");
        assert_eq!(state.classroom, "5");
        assert_eq!(state.seat, None);
    }

    #[test]
    fn test_list_fields_are_replaced() {
        let mut state = SelectionState::default();
        state.apply(SelectionUpdate::accessibility(["wheelchair", "hearing"]));
        state.apply(SelectionUpdate::accessibility(["visual"]));

        let options: Vec<&str> = state
            .accessibility_options()
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(options, vec!["visual"]);
    }

    #[test]
    fn test_colors_hidden_without_colorblind() {
        let mut state = SelectionState::default();
        state.apply(SelectionUpdate::accessibility(["colorblind", "color_red"]));
        assert_eq!(state.avoided_colors().collect::<Vec<_>>(), vec!["red"]);

        // Options replaced without colorblind: stale colors are not reported
        state.apply(SelectionUpdate {
            accessibility_options: Some(BTreeSet::from(["visual".to_string()])),
            ..Default::default()
        });
        assert_eq!(state.avoided_colors().count(), 0);
    }

    #[test]
    fn test_tagged_options_round_trip() {
        let mut state = SelectionState::default();
        state.apply(SelectionUpdate::accessibility([
            "colorblind",
            "noise",
            "color_blue",
            "color_red",
        ]));

        let tagged = state.tagged_options();
        let mut again = SelectionState::default();
        again.apply(SelectionUpdate::accessibility(&tagged));
        assert_eq!(state, again);
        assert!(tagged.contains(&"color_blue".to_string()));
    }

    #[test]
    fn test_empty_update() {
        assert!(SelectionUpdate::default().is_empty());
        assert!(!SelectionUpdate::seat(SeatId::FIRST).is_empty());
    }
}
