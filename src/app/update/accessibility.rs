//! Accessibility options screen handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{ScreenId, SelectionUpdate};

impl App {
    pub(super) fn handle_accessibility(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OptionToggled(id) => {
                self.ui.accessibility.toggle(id);
                Some(Task::none())
            }

            Message::ColorToggled(id) => {
                self.ui.accessibility.toggle_color(id);
                Some(Task::none())
            }

            Message::AccessibilitySubmit => {
                let tagged = self.ui.accessibility.tagged();
                tracing::info!(options = ?tagged, "Accessibility options submitted");
                Some(self.navigate(
                    ScreenId::InstructorNotes,
                    Some(SelectionUpdate::accessibility(&tagged)),
                ))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::features::accessibility::{COLORBLIND, WHEELCHAIR};

    fn app_on_options() -> App {
        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        let mut app = App::with_settings(settings);
        let _ = app.update(Message::GuestPressed);
        app
    }

    #[test]
    fn test_submit_carries_tagged_colors() {
        let mut app = app_on_options();
        let _ = app.update(Message::OptionToggled(COLORBLIND));
        let _ = app.update(Message::ColorToggled("red"));
        let _ = app.update(Message::AccessibilitySubmit);

        assert_eq!(app.router.current(), ScreenId::InstructorNotes);
        let selection = app.router.selection();
        assert!(selection.has_option(COLORBLIND));
        assert_eq!(selection.avoided_colors().collect::<Vec<_>>(), vec!["red"]);
    }

    #[test]
    fn test_resubmit_replaces_options() {
        let mut app = app_on_options();
        let _ = app.update(Message::OptionToggled(WHEELCHAIR));
        let _ = app.update(Message::AccessibilitySubmit);
        let _ = app.update(Message::Back);

        // The form comes back prefilled; clearing it and resubmitting empties the set
        assert!(app.ui.accessibility.is_selected(WHEELCHAIR));
        let _ = app.update(Message::OptionToggled(WHEELCHAIR));
        let _ = app.update(Message::AccessibilitySubmit);
        assert!(app.router.selection().accessibility_options().is_empty());
    }
}
