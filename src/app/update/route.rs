//! Navigation route simulation handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ScreenId;
use crate::features::route::ARRIVAL_PROMPT_DELAY;

impl App {
    pub(super) fn handle_route(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::GuideOpen => {
                self.ui.route.guide_open = true;
                Some(Task::none())
            }

            Message::GuideDismiss => {
                self.ui.route.guide_open = false;
                Some(Task::none())
            }

            Message::RouteTick => {
                // A tick queued just before leaving the screen must not
                // advance the next visit's simulation
                if self.router.current() != ScreenId::NavigationRoute {
                    return Some(Task::none());
                }
                if !self.ui.route.simulation.tick() {
                    return Some(Task::none());
                }
                tracing::info!("Route complete");
                Some(Task::perform(
                    helpers::after(ARRIVAL_PROMPT_DELAY, self.router.visit()),
                    Message::ArrivalPrompt,
                ))
            }

            Message::ArrivalPrompt(visit) => {
                if self.router.is_current(*visit) {
                    self.ui.route.arrival_open = true;
                }
                Some(Task::none())
            }

            Message::ConfirmArrivalPressed => {
                if self.ui.route.simulation.is_complete() {
                    self.ui.route.arrival_open = true;
                }
                Some(Task::none())
            }

            Message::ArrivalToFeedback => {
                self.ui.route.arrival_open = false;
                Some(self.navigate(ScreenId::Feedback, None))
            }

            Message::ArrivalToHome => {
                self.ui.route.arrival_open = false;
                Some(self.navigate(ScreenId::Home, None))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::features::route::RouteSimulation;

    fn app_on_route() -> App {
        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        let mut app = App::with_settings(settings);
        let _ = app.navigate(ScreenId::NavigationRoute, None);
        app
    }

    fn finish_route(app: &mut App) {
        for _ in 0..600 {
            let _ = app.update(Message::RouteTick);
        }
    }

    #[test]
    fn test_entry_shows_guide() {
        let mut app = app_on_route();
        assert!(app.ui.route.guide_open);
        let _ = app.update(Message::GuideDismiss);
        assert!(!app.ui.route.guide_open);
        let _ = app.update(Message::GuideOpen);
        assert!(app.ui.route.guide_open);
    }

    #[test]
    fn test_ticks_advance_progress() {
        let mut app = app_on_route();
        for _ in 0..150 {
            let _ = app.update(Message::RouteTick);
        }
        assert_eq!(app.ui.route.simulation.percent(), 25);
        assert_eq!(app.ui.route.simulation.current_step(), 1);
        assert_eq!(app.ui.route.simulation.eta_minutes(), 3);
    }

    #[test]
    fn test_arrival_prompt_after_completion() {
        let mut app = app_on_route();
        finish_route(&mut app);
        assert!(app.ui.route.simulation.is_complete());
        assert!(!app.ui.route.arrival_open);

        let _ = app.update(Message::ArrivalPrompt(app.router.visit()));
        assert!(app.ui.route.arrival_open);

        let _ = app.update(Message::ArrivalToFeedback);
        assert_eq!(app.router.current(), ScreenId::Feedback);
    }

    #[test]
    fn test_confirm_arrival_needs_completion() {
        let mut app = app_on_route();
        let _ = app.update(Message::ConfirmArrivalPressed);
        assert!(!app.ui.route.arrival_open);
    }

    #[test]
    fn test_leaving_resets_route() {
        let mut app = app_on_route();
        let stale = app.router.visit();
        for _ in 0..50 {
            let _ = app.update(Message::RouteTick);
        }
        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), ScreenId::Home);

        // Ticks and prompts from the old visit change nothing
        let _ = app.update(Message::RouteTick);
        let _ = app.update(Message::ArrivalPrompt(stale));

        let _ = app.update(Message::StartRoute);
        assert_eq!(app.ui.route.simulation, RouteSimulation::default());
        assert!(!app.ui.route.arrival_open);

        let _ = app.update(Message::ArrivalToHome);
        assert_eq!(app.router.current(), ScreenId::Home);
    }
}
