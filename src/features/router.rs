//! Screen router
//!
//! Owns the current screen, the accumulated selections and the transition
//! gate. Screens never mutate the selection bag directly; they hand a
//! [`SelectionUpdate`] to [`Router::transition`].
//!
//! Every accepted transition opens a new [`Visit`]. Delayed work scheduled
//! by a screen carries the visit it was scheduled in, so a callback that
//! fires after the user has moved on can be recognised and dropped.

use std::time::Duration;

use super::selection::{SelectionState, SelectionUpdate};

/// How long a transition stays in flight when motion is not reduced
pub const TRANSITION_DURATION: Duration = Duration::from_millis(300);

/// Every full-page view in the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    Login,
    AccessibilityOptions,
    InstructorNotes,
    ClassSelection,
    SeatSelection,
    NavigationRoute,
    Feedback,
    Home,
}

impl ScreenId {
    /// Where the back action leads; `None` on the first screen
    pub fn predecessor(self) -> Option<ScreenId> {
        match self {
            ScreenId::Login => None,
            ScreenId::AccessibilityOptions => Some(ScreenId::Login),
            ScreenId::InstructorNotes => Some(ScreenId::AccessibilityOptions),
            ScreenId::ClassSelection => Some(ScreenId::InstructorNotes),
            ScreenId::SeatSelection => Some(ScreenId::ClassSelection),
            ScreenId::Home => Some(ScreenId::SeatSelection),
            ScreenId::NavigationRoute => Some(ScreenId::Home),
            ScreenId::Feedback => Some(ScreenId::NavigationRoute),
        }
    }
}

/// Identifies one stay on a screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Visit(u64);

/// Whether transitions animate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Animated,
    Reduced,
}

impl Motion {
    pub fn from_reduced(reduced: bool) -> Self {
        if reduced {
            Motion::Reduced
        } else {
            Motion::Animated
        }
    }
}

/// In-flight gate for overlapping transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransitionState {
    pub in_flight: bool,
    pub previous: Option<ScreenId>,
}

/// Why a transition request was dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    SameScreen,
    InFlight,
}

/// Result of a transition request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed
    Ignored(Ignored),
    /// Screen changed and the gate is already open again
    Settled { from: ScreenId, to: ScreenId },
    /// Screen changed; call [`Router::settle`] with `visit` once the
    /// animation has played
    Animating {
        from: ScreenId,
        to: ScreenId,
        visit: Visit,
    },
}

impl Transition {
    #[cfg(test)]
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }
}

#[derive(Debug, Clone)]
pub struct Router {
    current: ScreenId,
    transition: TransitionState,
    selection: SelectionState,
    visit: Visit,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Start on the login screen with an empty selection bag
    pub fn new() -> Self {
        Self {
            current: ScreenId::Login,
            transition: TransitionState::default(),
            selection: SelectionState::default(),
            visit: Visit::default(),
        }
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    #[cfg(test)]
    pub fn previous(&self) -> Option<ScreenId> {
        self.transition.previous
    }

    #[cfg(test)]
    pub fn in_flight(&self) -> bool {
        self.transition.in_flight
    }

    #[cfg(test)]
    pub fn transition_state(&self) -> TransitionState {
        self.transition
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The visit the user is on right now
    pub fn visit(&self) -> Visit {
        self.visit
    }

    /// True while `visit` is still the current one
    pub fn is_current(&self, visit: Visit) -> bool {
        self.visit == visit
    }

    /// Move to `target`, applying `update` on the way.
    ///
    /// Ignored when `target` is already showing or another transition is
    /// still in flight. The update is only applied when the move happens.
    pub fn transition(
        &mut self,
        target: ScreenId,
        update: Option<SelectionUpdate>,
        motion: Motion,
    ) -> Transition {
        if target == self.current {
            return Transition::Ignored(Ignored::SameScreen);
        }
        if self.transition.in_flight {
            return Transition::Ignored(Ignored::InFlight);
        }

        if let Some(update) = update {
            self.selection.apply(update);
        }

        let from = self.current;
        self.transition.previous = Some(from);
        self.current = target;
        self.transition.in_flight = true;
        self.visit = Visit(self.visit.0 + 1);

        match motion {
            Motion::Reduced => {
                self.transition.in_flight = false;
                Transition::Settled { from, to: target }
            }
            Motion::Animated => Transition::Animating {
                from,
                to: target,
                visit: self.visit,
            },
        }
    }

    /// Back to the predecessor of the current screen, selections untouched
    pub fn back(&mut self, motion: Motion) -> Transition {
        match self.current.predecessor() {
            Some(target) => self.transition(target, None, motion),
            None => Transition::Ignored(Ignored::SameScreen),
        }
    }

    /// Open the gate for the transition that started `visit`.
    ///
    /// Returns false, and leaves the gate alone, for a stale visit.
    pub fn settle(&mut self, visit: Visit) -> bool {
        if !self.is_current(visit) {
            tracing::debug!(?visit, current = ?self.visit, "Dropping stale transition settle");
            return false;
        }
        self.transition.in_flight = false;
        tracing::debug!(from = ?self.transition.previous, to = ?self.current, "Transition settled");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::selection::SeatId;

    fn settled_router() -> Router {
        Router::new()
    }

    #[test]
    fn test_transition_changes_screen() {
        let mut router = settled_router();
        let result = router.transition(ScreenId::AccessibilityOptions, None, Motion::Reduced);

        assert_eq!(
            result,
            Transition::Settled {
                from: ScreenId::Login,
                to: ScreenId::AccessibilityOptions
            }
        );
        assert_eq!(router.current(), ScreenId::AccessibilityOptions);
        assert_eq!(router.previous(), Some(ScreenId::Login));
    }

    #[test]
    fn test_same_screen_is_noop() {
        let mut router = settled_router();
        router.transition(ScreenId::AccessibilityOptions, None, Motion::Reduced);
        let before = router.transition_state();
        let visit = router.visit();

        let result = router.transition(
            ScreenId::AccessibilityOptions,
            Some(SelectionUpdate::class("C", "5")),
            Motion::Animated,
        );

        assert_eq!(result, Transition::Ignored(Ignored::SameScreen));
        assert_eq!(router.current(), ScreenId::AccessibilityOptions);
        assert_eq!(router.transition_state(), before);
        assert_eq!(router.visit(), visit);
        // Payload of an ignored transition is dropped
        assert!(router.selection().campus.is_empty());
    }

    #[test]
    fn test_same_screen_never_toggles_in_flight() {
        let mut router = settled_router();
        router.transition(ScreenId::AccessibilityOptions, None, Motion::Animated);
        assert!(router.in_flight());
        router.transition(ScreenId::AccessibilityOptions, None, Motion::Animated);
        assert!(router.in_flight());

        let mut router = settled_router();
        router.transition(ScreenId::Login, None, Motion::Animated);
        assert!(!router.in_flight());
    }

    #[test]
    fn test_in_flight_blocks_transitions() {
        let mut router = settled_router();
        let first = router.transition(ScreenId::AccessibilityOptions, None, Motion::Animated);
        let Transition::Animating { visit, .. } = first else {
            panic!("expected an animating transition, got {first:?}");
        };

        let second = router.transition(ScreenId::InstructorNotes, None, Motion::Reduced);
        assert_eq!(second, Transition::Ignored(Ignored::InFlight));
        assert_eq!(router.current(), ScreenId::AccessibilityOptions);

        assert!(router.settle(visit));
        assert!(!router.in_flight());
        assert!(
            router
                .transition(ScreenId::InstructorNotes, None, Motion::Reduced)
                .is_accepted()
        );
    }

    #[test]
    fn test_reduced_motion_clears_gate_synchronously() {
        let mut router = settled_router();
        router.transition(ScreenId::AccessibilityOptions, None, Motion::Reduced);
        assert!(!router.in_flight());

        router.transition(ScreenId::InstructorNotes, None, Motion::Animated);
        assert!(router.in_flight());
    }

    #[test]
    fn test_payload_overwrites_only_given_fields() {
        let mut router = settled_router();
        router.transition(
            ScreenId::InstructorNotes,
            Some(SelectionUpdate::instructor_notes(["wheelchair"], "x")),
            Motion::Reduced,
        );
        router.transition(
            ScreenId::ClassSelection,
            Some(SelectionUpdate::class("C", "5")),
            Motion::Reduced,
        );

        let selection = router.selection();
        assert_eq!(
            selection
                .accessibility_options()
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>(),
            vec!["wheelchair"]
        );
        assert_eq!(selection.instructor_notes, "x");
        assert_eq!(selection.campus, "C");
        assert_eq!(selection.classroom, "5");
    }

    #[test]
    fn test_back_from_seat_selection_keeps_selection() {
        let mut router = settled_router();
        router.transition(
            ScreenId::ClassSelection,
            Some(SelectionUpdate::class("ficus", "101")),
            Motion::Reduced,
        );
        router.transition(ScreenId::SeatSelection, None, Motion::Reduced);
        let before = router.selection().clone();

        let result = router.back(Motion::Reduced);
        assert!(result.is_accepted());
        assert_eq!(router.current(), ScreenId::ClassSelection);
        assert_eq!(router.selection(), &before);
    }

    #[test]
    fn test_back_on_login_is_ignored() {
        let mut router = settled_router();
        assert!(!router.back(Motion::Reduced).is_accepted());
        assert_eq!(router.current(), ScreenId::Login);
    }

    #[test]
    fn test_predecessor_chain() {
        assert_eq!(ScreenId::Home.predecessor(), Some(ScreenId::SeatSelection));
        assert_eq!(
            ScreenId::Feedback.predecessor(),
            Some(ScreenId::NavigationRoute)
        );
        assert_eq!(ScreenId::NavigationRoute.predecessor(), Some(ScreenId::Home));

        // Walking back from Home reaches Login in five steps
        let mut screen = ScreenId::Home;
        let mut steps = 0;
        while let Some(prev) = screen.predecessor() {
            screen = prev;
            steps += 1;
        }
        assert_eq!((screen, steps), (ScreenId::Login, 5));
    }

    #[test]
    fn test_stale_settle_is_ignored() {
        let mut router = settled_router();
        let Transition::Animating { visit: old, .. } =
            router.transition(ScreenId::AccessibilityOptions, None, Motion::Animated)
        else {
            panic!("expected animation");
        };
        assert!(router.settle(old));

        router.transition(ScreenId::InstructorNotes, None, Motion::Animated);
        assert!(!router.settle(old));
        assert!(router.in_flight());
    }

    #[test]
    fn test_visits_are_monotonic() {
        let mut router = settled_router();
        let start = router.visit();
        router.transition(ScreenId::AccessibilityOptions, None, Motion::Reduced);
        let after = router.visit();
        assert!(after > start);
        assert!(!router.is_current(start));
        router.transition(ScreenId::AccessibilityOptions, None, Motion::Reduced);
        assert_eq!(router.visit(), after);
    }

    #[test]
    fn test_forward_flow_to_home() {
        let mut router = settled_router();
        let steps = [
            (ScreenId::AccessibilityOptions, None),
            (
                ScreenId::InstructorNotes,
                Some(SelectionUpdate::accessibility(["hearing"])),
            ),
            (
                ScreenId::ClassSelection,
                Some(SelectionUpdate::instructor_notes(["hearing"], "front row")),
            ),
            (
                ScreenId::SeatSelection,
                Some(SelectionUpdate::class("kirya", "204")),
            ),
            (
                ScreenId::Home,
                Some(SelectionUpdate::seat(SeatId::new(3).expect("seat 3"))),
            ),
        ];
        for (target, update) in steps {
            assert!(router.transition(target, update, Motion::Reduced).is_accepted());
        }

        assert_eq!(router.current(), ScreenId::Home);
        assert_eq!(router.selection().seat.map(SeatId::get), Some(3));
        assert_eq!(router.selection().instructor_notes, "front row");
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_after_animation_delay() {
        let mut router = settled_router();
        let Transition::Animating { visit, .. } =
            router.transition(ScreenId::AccessibilityOptions, None, Motion::Animated)
        else {
            panic!("expected animation");
        };

        let started = tokio::time::Instant::now();
        let handle = tokio::spawn(crate::app::helpers::after(TRANSITION_DURATION, visit));

        tokio::time::sleep(TRANSITION_DURATION / 2).await;
        assert!(!handle.is_finished());
        assert!(router.in_flight());

        let returned = handle.await.expect("settle task");
        assert!(started.elapsed() >= TRANSITION_DURATION);
        assert!(router.settle(returned));
        assert!(!router.in_flight());
    }
}
