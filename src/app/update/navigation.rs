//! Screen transitions, back navigation and animation ticks

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::router::{TRANSITION_DURATION, Transition};
use crate::features::{ScreenId, SelectionUpdate};

impl App {
    /// Handle navigation-related messages
    pub(super) fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Back => {
                let transition = self.router.back(self.core.motion());
                Some(self.after_transition(transition))
            }

            Message::TransitionSettled(visit) => {
                self.router.settle(*visit);
                Some(Task::none())
            }

            Message::AnimationTick(now) => {
                self.ui.tick_animations(*now);
                Some(Task::none())
            }

            Message::CardHovered(id) => {
                self.ui.card_hover.set_hovered(*id);
                Some(Task::none())
            }

            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                Some(iced::exit())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }

    /// Move to `target`, handing the router what the current screen collected
    pub(super) fn navigate(
        &mut self,
        target: ScreenId,
        update: Option<SelectionUpdate>,
    ) -> Task<Message> {
        let transition = self.router.transition(target, update, self.core.motion());
        if let Transition::Ignored(reason) = transition {
            tracing::debug!(?target, current = ?self.router.current(), ?reason, "Transition ignored");
        }
        self.after_transition(transition)
    }

    /// Reset the entered screen and schedule the settle callback
    fn after_transition(&mut self, transition: Transition) -> Task<Message> {
        match transition {
            Transition::Ignored(_) => Task::none(),
            Transition::Settled { from, to } => {
                tracing::info!(?from, ?to, "Screen changed");
                self.ui.enter(to, self.router.selection());
                Task::none()
            }
            Transition::Animating { from, to, visit } => {
                tracing::info!(?from, ?to, ?visit, "Screen changed");
                self.ui.enter(to, self.router.selection());
                self.ui.screen_fade.restart();
                Task::perform(
                    helpers::after(TRANSITION_DURATION, visit),
                    Message::TransitionSettled,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;

    fn reduced_motion_app() -> App {
        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        App::with_settings(settings)
    }

    #[test]
    fn test_back_keeps_selection() {
        let mut app = reduced_motion_app();
        let _ = app.navigate(
            ScreenId::AccessibilityOptions,
            Some(SelectionUpdate::accessibility(["wheelchair"])),
        );
        let _ = app.navigate(ScreenId::InstructorNotes, None);

        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), ScreenId::AccessibilityOptions);
        assert!(app.router.selection().has_option("wheelchair"));
        assert!(app.ui.accessibility.is_selected("wheelchair"));
    }

    #[test]
    fn test_back_on_login_is_ignored() {
        let mut app = reduced_motion_app();
        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), ScreenId::Login);
    }

    #[test]
    fn test_animated_transition_blocks_until_settled() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::GuestPressed);
        assert_eq!(app.router.current(), ScreenId::AccessibilityOptions);
        assert!(app.router.in_flight());

        // A second request while in flight is dropped
        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), ScreenId::AccessibilityOptions);

        let visit = app.router.visit();
        let _ = app.update(Message::TransitionSettled(visit));
        assert!(!app.router.in_flight());

        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), ScreenId::Login);
    }
}
