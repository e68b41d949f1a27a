//! Message update handlers - thin dispatcher delegating to submodules

mod accessibility;
mod class_selection;
mod feedback;
mod login;
mod navigation;
mod notes;
mod route;
mod seat_selection;
mod settings;
mod sos;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_navigation(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_login(&message) {
            return task;
        }
        if let Some(task) = self.handle_accessibility(&message) {
            return task;
        }
        if let Some(task) = self.handle_notes(&message) {
            return task;
        }
        if let Some(task) = self.handle_class_selection(&message) {
            return task;
        }
        if let Some(task) = self.handle_seat_selection(&message) {
            return task;
        }
        if let Some(task) = self.handle_sos(&message) {
            return task;
        }
        if let Some(task) = self.handle_route(&message) {
            return task;
        }
        if let Some(task) = self.handle_feedback(&message) {
            return task;
        }

        Task::none()
    }
}
