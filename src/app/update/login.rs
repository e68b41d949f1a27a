//! Login screen handlers
//!
//! There is no account backend: logging in only checks that both fields
//! are filled, and the guest path skips the form.

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ScreenId;
use crate::i18n::Key;
use crate::ui::widgets::Toast;

impl App {
    pub(super) fn handle_login(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::UsernameChanged(value) => {
                self.ui.login.username = value.clone();
                Some(Task::none())
            }

            Message::PasswordChanged(value) => {
                self.ui.login.password = value.clone();
                Some(Task::none())
            }

            Message::LoginPressed => {
                if !self.ui.login.can_submit() {
                    return Some(Task::none());
                }
                tracing::info!("Signing in");
                Some(self.navigate(ScreenId::AccessibilityOptions, None))
            }

            Message::GuestPressed => {
                tracing::info!("Continuing as guest");
                Some(self.navigate(ScreenId::AccessibilityOptions, None))
            }

            Message::RegisterPressed => {
                tracing::info!("Registration requested but not available");
                let text = self.core.locale.get(Key::LoginRegisterUnavailable);
                Some(self.show_toast(Toast::info(text)))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;

    #[test]
    fn test_login_needs_both_fields() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::UsernameChanged("dana".into()));
        let _ = app.update(Message::LoginPressed);
        assert_eq!(app.router.current(), ScreenId::Login);

        let _ = app.update(Message::PasswordChanged("secret".into()));
        let _ = app.update(Message::LoginPressed);
        assert_eq!(app.router.current(), ScreenId::AccessibilityOptions);
    }

    #[test]
    fn test_tip_survives_ignored_transition() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::GuestPressed);
        assert!(app.router.in_flight());
        let visit = app.router.visit();
        let _ = app.update(Message::TransitionSettled(visit));
        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), ScreenId::Login);

        // Back is still animating, so leaving again is refused
        let _ = app.update(Message::ShowTip);
        assert!(app.ui.tip.shown.is_some());
        let _ = app.update(Message::GuestPressed);
        assert_eq!(app.router.current(), ScreenId::Login);
        assert!(app.ui.tip.shown.is_some());

        assert!(app.router.in_flight());
        let visit = app.router.visit();
        let _ = app.update(Message::TransitionSettled(visit));
        let _ = app.update(Message::GuestPressed);
        assert_eq!(app.router.current(), ScreenId::AccessibilityOptions);
        assert!(app.ui.tip.shown.is_none());
    }

    #[test]
    fn test_register_shows_toast() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::RegisterPressed);
        assert_eq!(app.router.current(), ScreenId::Login);
        assert!(app.ui.toast.is_some());
    }
}
