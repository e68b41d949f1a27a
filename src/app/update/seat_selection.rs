//! Seat selection screen handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{ScreenId, SelectionUpdate};

impl App {
    pub(super) fn handle_seat_selection(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::SeatSelected(seat) => {
                if self.ui.seat.map.can_select(*seat) {
                    self.ui.seat.selected = *seat;
                } else {
                    tracing::debug!(%seat, "Reserved seat cannot be chosen");
                }
                Some(Task::none())
            }

            Message::SeatSubmit => {
                let seat = self.ui.seat.selected;
                tracing::info!(%seat, "Seat chosen");
                Some(self.navigate(ScreenId::Home, Some(SelectionUpdate::seat(seat))))
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::{SeatId, Settings};

    fn seat(n: u32) -> SeatId {
        SeatId::new(n).expect("non-zero")
    }

    #[test]
    fn test_seat_one_is_preselected() {
        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        let mut app = App::with_settings(settings);
        let _ = app.navigate(ScreenId::SeatSelection, None);
        let _ = app.update(Message::SeatSubmit);

        assert_eq!(app.router.current(), ScreenId::Home);
        assert_eq!(app.router.selection().seat, Some(SeatId::FIRST));
    }

    #[test]
    fn test_reserved_seat_is_rejected() {
        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        let mut app = App::with_settings(settings);
        let _ = app.navigate(ScreenId::SeatSelection, None);

        let _ = app.update(Message::SeatSelected(seat(3)));
        assert_eq!(app.ui.seat.selected, seat(3));

        let _ = app.update(Message::SeatSelected(seat(7)));
        assert_eq!(app.ui.seat.selected, seat(3));
    }
}
