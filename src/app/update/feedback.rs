//! Feedback screen handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::ScreenId;
use crate::features::feedback::{RatingTopic, SUBMIT_DELAY};

impl App {
    pub(super) fn handle_feedback(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RatingChanged(topic, stars) => {
                self.ui.feedback.form.rate(*topic, *stars);
                Some(Task::none())
            }

            Message::FeedbackCommentEdited(action) => {
                if !self.ui.feedback.form.is_locked() || !action.is_edit() {
                    self.ui.feedback.comment.perform(action.clone());
                }
                Some(Task::none())
            }

            Message::ImprovementToggled(improvement, checked) => {
                self.ui.feedback.form.set_improvement(*improvement, *checked);
                Some(Task::none())
            }

            Message::FeedbackSubmit => {
                if self.ui.feedback.form.is_locked() {
                    return Some(Task::none());
                }
                self.ui.feedback.form.comment =
                    self.ui.feedback.comment.text().trim_end().to_string();
                self.ui.feedback.form.begin_submit();
                let form = &self.ui.feedback.form;
                tracing::info!(
                    instructor = form.rating(RatingTopic::Instructor),
                    classroom = form.rating(RatingTopic::Classroom),
                    app = form.rating(RatingTopic::App),
                    improvements = form.improvements().count(),
                    "Sending feedback"
                );
                Some(Task::perform(
                    helpers::after(SUBMIT_DELAY, self.router.visit()),
                    Message::FeedbackSubmitted,
                ))
            }

            Message::FeedbackSubmitted(visit) => {
                if self.router.is_current(*visit) && self.ui.feedback.form.complete_submit() {
                    tracing::info!("Feedback sent");
                } else {
                    tracing::debug!(?visit, "Dropping feedback completion for a finished visit");
                }
                Some(Task::none())
            }

            Message::FeedbackContinue => Some(self.navigate(ScreenId::Home, None)),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::features::feedback::{Improvement, Submission};

    fn app_on_feedback() -> App {
        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        let mut app = App::with_settings(settings);
        let _ = app.navigate(ScreenId::Feedback, None);
        app
    }

    #[test]
    fn test_submit_cycle() {
        let mut app = app_on_feedback();
        let _ = app.update(Message::RatingChanged(RatingTopic::App, 4));
        let _ = app.update(Message::ImprovementToggled(Improvement::Lighting, true));
        let _ = app.update(Message::FeedbackSubmit);
        assert_eq!(app.ui.feedback.form.submission(), Submission::Submitting);

        // Inputs are frozen while sending
        let _ = app.update(Message::RatingChanged(RatingTopic::App, 1));
        assert_eq!(app.ui.feedback.form.rating(RatingTopic::App), 4);

        let _ = app.update(Message::FeedbackSubmitted(app.router.visit()));
        assert_eq!(app.ui.feedback.form.submission(), Submission::Submitted);

        let _ = app.update(Message::FeedbackContinue);
        assert_eq!(app.router.current(), ScreenId::Home);
    }

    #[test]
    fn test_stale_completion_does_not_touch_next_visit() {
        let mut app = app_on_feedback();
        let stale = app.router.visit();
        let _ = app.update(Message::FeedbackSubmit);
        let _ = app.update(Message::Back);
        let _ = app.update(Message::ArrivalToFeedback);
        assert_eq!(app.router.current(), ScreenId::Feedback);

        let _ = app.update(Message::FeedbackSubmitted(stale));
        assert_eq!(app.ui.feedback.form.submission(), Submission::Editing);
    }

    #[test]
    fn test_back_goes_to_route() {
        let mut app = app_on_feedback();
        let _ = app.update(Message::Back);
        assert_eq!(app.router.current(), ScreenId::NavigationRoute);
    }
}
