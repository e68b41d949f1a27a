//! Instructor notes screen handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{ScreenId, SelectionUpdate};

impl App {
    pub(super) fn handle_notes(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::NotesEdited(action) => {
                self.ui.notes.perform(action.clone());
                Some(Task::none())
            }

            Message::NotesSubmit => {
                let notes = self.ui.notes.text();
                let notes = notes.trim_end_matches('\n');
                let tagged = self.router.selection().tagged_options();
                tracing::info!(chars = notes.chars().count(), "Instructor notes submitted");
                Some(self.navigate(
                    ScreenId::ClassSelection,
                    Some(SelectionUpdate::instructor_notes(&tagged, notes)),
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
    use iced::widget::text_editor::{Action, Edit};
    use std::sync::Arc;

    #[test]
    fn test_notes_are_stored_with_options() {
        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        let mut app = App::with_settings(settings);
        let _ = app.update(Message::GuestPressed);
        let _ = app.update(Message::OptionToggled("hearing"));
        let _ = app.update(Message::AccessibilitySubmit);

        let _ = app.update(Message::NotesEdited(Action::Edit(Edit::Paste(Arc::new(
            "Please face the class when speaking".to_string(),
        )))));
        let _ = app.update(Message::NotesSubmit);

        assert_eq!(app.router.current(), ScreenId::ClassSelection);
        let selection = app.router.selection();
        assert_eq!(selection.instructor_notes, "Please face the class when speaking");
        assert!(selection.has_option("hearing"));
    }
}
