//! Distress dialogs and the home screen buttons
//!
//! Sending only simulates the report: after a short pause a confirmation
//! with the destination shows up.

use std::time::Duration;

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ScreenId;

/// Pause before the "location sent" confirmation
pub const LOCATION_SEND_DELAY: Duration = Duration::from_secs(1);

impl App {
    pub(super) fn handle_sos(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::StartRoute => Some(self.navigate(ScreenId::NavigationRoute, None)),

            Message::OpenFeedback => Some(self.navigate(ScreenId::Feedback, None)),

            Message::SosOpen => {
                self.ui.sos.confirm_open = true;
                Some(Task::none())
            }

            Message::SosCancel => {
                self.ui.sos.confirm_open = false;
                Some(Task::none())
            }

            Message::SosSend => {
                if !self.ui.sos.confirm_open {
                    return Some(Task::none());
                }
                self.ui.sos.confirm_open = false;
                let selection = self.router.selection();
                tracing::warn!(
                    screen = ?self.router.current(),
                    campus = %selection.campus,
                    classroom = %selection.classroom,
                    "SOS location report requested"
                );
                Some(Task::perform(
                    helpers::after(LOCATION_SEND_DELAY, self.router.visit()),
                    Message::LocationSent,
                ))
            }

            Message::LocationSent(visit) => {
                if self.router.is_current(*visit) {
                    self.ui.sos.sent_open = true;
                } else {
                    tracing::debug!(?visit, "Dropping location report for a finished visit");
                }
                Some(Task::none())
            }

            Message::LocationSentDismiss => {
                self.ui.sos.sent_open = false;
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;

    fn app_on_home() -> App {
        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        let mut app = App::with_settings(settings);
        let _ = app.navigate(ScreenId::Home, None);
        app
    }

    #[test]
    fn test_sos_flow() {
        let mut app = app_on_home();
        let _ = app.update(Message::SosOpen);
        assert!(app.ui.sos.confirm_open);

        let _ = app.update(Message::SosSend);
        assert!(!app.ui.sos.confirm_open);
        assert!(!app.ui.sos.sent_open);

        let _ = app.update(Message::LocationSent(app.router.visit()));
        assert!(app.ui.sos.sent_open);

        let _ = app.update(Message::LocationSentDismiss);
        assert!(!app.ui.sos.sent_open);
    }

    #[test]
    fn test_location_sent_after_leaving_is_dropped() {
        let mut app = app_on_home();
        let stale = app.router.visit();
        let _ = app.update(Message::SosOpen);
        let _ = app.update(Message::SosSend);
        let _ = app.update(Message::OpenFeedback);

        let _ = app.update(Message::LocationSent(stale));
        assert!(!app.ui.sos.sent_open);
    }

    #[test]
    fn test_home_buttons() {
        let mut app = app_on_home();
        let _ = app.update(Message::StartRoute);
        assert_eq!(app.router.current(), ScreenId::NavigationRoute);

        let mut app = app_on_home();
        let _ = app.update(Message::OpenFeedback);
        assert_eq!(app.router.current(), ScreenId::Feedback);
    }
}
