//! Feedback page
//! Star ratings, a free comment and improvement checkboxes. Inputs freeze
//! once sending starts.

use iced::widget::{checkbox, column, container, text_editor};
use iced::{Element, Fill};

use super::{body_text, gap, label, primary_action, scaffold};
use crate::app::{FeedbackState, Message};
use crate::features::feedback::{Improvement, MAX_RATING, RatingTopic, Submission, rating_label};
use crate::i18n::{Key, Locale};
use crate::ui::components::top_bar;
use crate::ui::theme::{self, TextScale};
use crate::ui::widgets::{section_header, star_rating};

pub fn view<'a>(
    feedback: &'a FeedbackState,
    locale: Locale,
    scale: TextScale,
) -> Element<'a, Message> {
    let form = &feedback.form;
    let locked = form.is_locked();

    let mut body = column![
        section_header::view(locale.get(Key::FeedbackHeading).to_string(), None, scale),
        gap(16.0),
    ];

    if form.submission() == Submission::Submitted {
        body = body.push(
            container(
                column![
                    label(locale.get(Key::FeedbackThanks).to_string(), scale),
                    gap(6.0),
                    body_text(locale.get(Key::FeedbackThanksBody).to_string(), scale),
                ]
                .width(Fill),
            )
            .padding(16)
            .style(theme::highlight_card),
        );
        body = body.push(gap(16.0));
    }

    for topic in RatingTopic::ALL {
        let rating = form.rating(topic);
        body = body.push(
            container(
                column![
                    label(locale.get(topic.question()).to_string(), scale),
                    gap(8.0),
                    star_rating::view(
                        rating,
                        MAX_RATING,
                        locale.get(rating_label(rating)).to_string(),
                        move |stars| Message::RatingChanged(topic, stars),
                        !locked,
                        scale,
                    ),
                ]
                .width(Fill),
            )
            .padding(16)
            .style(theme::card),
        );
        body = body.push(gap(12.0));
    }

    let mut comment = text_editor(&feedback.comment)
        .placeholder(locale.get(Key::FeedbackCommentPlaceholder))
        .height(120)
        .padding(12)
        .size(scale.size(15.0))
        .style(theme::editor);
    if !locked {
        comment = comment.on_action(Message::FeedbackCommentEdited);
    }

    body = body
        .push(gap(12.0))
        .push(label(locale.get(Key::FeedbackCommentHeading).to_string(), scale))
        .push(gap(8.0))
        .push(comment)
        .push(gap(24.0))
        .push(label(
            locale.get(Key::FeedbackImprovementsHeading).to_string(),
            scale,
        ))
        .push(gap(8.0));

    let mut improvements = column![].spacing(10);
    for improvement in Improvement::ALL {
        let mut check = checkbox(form.has_improvement(improvement))
            .label(locale.get(improvement.label()))
            .text_size(scale.size(14.0))
            .spacing(8)
            .style(theme::check);
        if !locked {
            check = check.on_toggle(move |checked| Message::ImprovementToggled(improvement, checked));
        }
        improvements = improvements.push(check);
    }
    body = body.push(improvements);

    let bottom = match form.submission() {
        Submission::Editing => primary_action(
            locale.get(Key::FeedbackSend),
            Some(Message::FeedbackSubmit),
            scale,
        ),
        Submission::Submitting => primary_action(locale.get(Key::FeedbackSending), None, scale),
        Submission::Submitted => primary_action(
            locale.get(Key::Continue),
            Some(Message::FeedbackContinue),
            scale,
        ),
    };

    scaffold(
        top_bar::view(
            locale.get(Key::FeedbackTitle).to_string(),
            true,
            Vec::new(),
            locale,
            scale,
        ),
        body.into(),
        Some(bottom),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_state_renders() {
        let locale = Locale::new(crate::i18n::Language::English);
        let mut state = FeedbackState::default();
        let _ = view(&state, locale, TextScale::NORMAL);

        state.form.rate(RatingTopic::App, 4);
        assert!(state.form.begin_submit());
        let _ = view(&state, locale, TextScale::NORMAL);

        assert!(state.form.complete_submit());
        let _ = view(&state, locale, TextScale::NORMAL);
    }
}
