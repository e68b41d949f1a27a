//! Class selection screen handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{ScreenId, SelectionUpdate};

impl App {
    pub(super) fn handle_class_selection(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CampusSelected(campus) => {
                self.ui.class.campus = Some(*campus);
                Some(Task::none())
            }

            Message::ClassroomChanged(value) => {
                self.ui.class.classroom = value.clone();
                Some(Task::none())
            }

            Message::ClassSavePressed => {
                if self.ui.class.can_save() {
                    self.ui.class.confirm_open = true;
                }
                Some(Task::none())
            }

            Message::ClassCancel => {
                self.ui.class.confirm_open = false;
                Some(Task::none())
            }

            Message::ClassConfirm => {
                let Some(campus) = self.ui.class.campus else {
                    return Some(Task::none());
                };
                let classroom = self.ui.class.classroom.clone();
                self.ui.class.confirm_open = false;
                tracing::info!(campus = campus.id(), %classroom, "Class confirmed");
                Some(self.navigate(
                    ScreenId::SeatSelection,
                    Some(SelectionUpdate::class(campus.id(), classroom)),
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
    use crate::features::accessibility::Campus;

    fn app_on_class_selection() -> App {
        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        let mut app = App::with_settings(settings);
        let _ = app.navigate(ScreenId::ClassSelection, None);
        app
    }

    #[test]
    fn test_save_needs_campus_and_classroom() {
        let mut app = app_on_class_selection();
        let _ = app.update(Message::ClassroomChanged("204".into()));
        let _ = app.update(Message::ClassSavePressed);
        assert!(!app.ui.class.confirm_open);

        let _ = app.update(Message::CampusSelected(Campus::Kirya));
        let _ = app.update(Message::ClassSavePressed);
        assert!(app.ui.class.confirm_open);
    }

    #[test]
    fn test_cancel_keeps_screen() {
        let mut app = app_on_class_selection();
        let _ = app.update(Message::CampusSelected(Campus::Ficus));
        let _ = app.update(Message::ClassroomChanged("101".into()));
        let _ = app.update(Message::ClassSavePressed);
        let _ = app.update(Message::ClassCancel);
        assert!(!app.ui.class.confirm_open);
        assert_eq!(app.router.current(), ScreenId::ClassSelection);
    }

    #[test]
    fn test_confirm_stores_class() {
        let mut app = app_on_class_selection();
        let _ = app.update(Message::CampusSelected(Campus::Kirya));
        let _ = app.update(Message::ClassroomChanged("204".into()));
        let _ = app.update(Message::ClassSavePressed);
        let _ = app.update(Message::ClassConfirm);

        assert_eq!(app.router.current(), ScreenId::SeatSelection);
        assert_eq!(app.router.selection().campus, "kirya");
        assert_eq!(app.router.selection().classroom, "204");
    }

    #[test]
    fn test_classroom_is_stored_as_typed() {
        let mut app = app_on_class_selection();
        let _ = app.update(Message::CampusSelected(Campus::Ficus));
        let _ = app.update(Message::ClassroomChanged("  ".into()));
        let _ = app.update(Message::ClassSavePressed);
        assert!(app.ui.class.confirm_open);

        let _ = app.update(Message::ClassConfirm);
        assert_eq!(app.router.current(), ScreenId::SeatSelection);
        assert_eq!(app.router.selection().classroom, "  ");
    }
}
