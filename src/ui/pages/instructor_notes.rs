//! Instructor notes page
//! Free text for the lecturer plus suggestions built from the chosen needs.

use iced::widget::{column, container, text, text_editor};
use iced::{Element, Fill, Padding};

use super::{body_text, gap, label, primary_action, scaffold};
use crate::app::Message;
use crate::features::SelectionState;
use crate::features::accessibility::suggestions;
use crate::i18n::{Key, Locale};
use crate::ui::components::top_bar;
use crate::ui::theme::{self, TextScale};
use crate::ui::widgets::section_header;

pub fn view<'a>(
    notes: &'a text_editor::Content,
    selection: &SelectionState,
    locale: Locale,
    scale: TextScale,
) -> Element<'a, Message> {
    let editor = text_editor(notes)
        .placeholder(locale.get(Key::NotesPlaceholder))
        .on_action(Message::NotesEdited)
        .height(160)
        .padding(12)
        .size(scale.size(15.0))
        .style(theme::editor);

    let mut body = column![
        section_header::view(locale.get(Key::NotesHeading).to_string(), None, scale),
        gap(8.0),
        body_text(locale.get(Key::NotesDescription).to_string(), scale),
        gap(16.0),
        editor,
    ];

    let tips = suggestions(&selection.tagged_options());
    if !tips.is_empty() {
        let mut list = column![label(locale.get(Key::NotesSuggestionsHeading).to_string(), scale)]
            .spacing(6);
        for tip in tips {
            let indent = if tip.indented { 20.0 } else { 0.0 };
            let bullet = if tip.indented { "◦" } else { "•" };
            list = list.push(
                container(
                    text(format!("{bullet} {}", locale.get(tip.text)))
                        .size(scale.size(14.0))
                        .style(|theme| text::Style {
                            color: Some(theme::text_secondary(theme)),
                        }),
                )
                .padding(Padding::ZERO.left(indent)),
            );
        }
        body = body.push(gap(20.0)).push(
            container(list)
                .width(Fill)
                .padding(16)
                .style(theme::highlight_card),
        );
    }

    scaffold(
        top_bar::view(
            locale.get(Key::NotesTitle).to_string(),
            true,
            Vec::new(),
            locale,
            scale,
        ),
        body.into(),
        Some(primary_action(
            locale.get(Key::Continue),
            Some(Message::NotesSubmit),
            scale,
        )),
    )
}
