//! Home page
//! Summary of everything chosen, with the route, feedback and SOS entries.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Element, Fill};

use super::{body_text, gap, label, primary_action, scaffold};
use crate::app::Message;
use crate::features::SelectionState;
use crate::features::accessibility::{self, visible_options};
use crate::i18n::{Key, Locale};
use crate::ui::components::{sos, top_bar};
use crate::ui::theme::{self, TextScale};
use crate::ui::widgets::section_header;

pub fn view<'a>(
    selection: &SelectionState,
    locale: Locale,
    scale: TextScale,
) -> Element<'a, Message> {
    let campus = sos::campus_name(&selection.campus, locale);
    let seat = selection
        .seat
        .map(|seat| seat.to_string())
        .unwrap_or_default();

    let destination = container(
        column![
            label(locale.get(Key::HomeDestination).to_string(), scale),
            gap(8.0),
            body_text(locale.fill(Key::HomeCampus, &[("campus", campus.as_str())]), scale),
            body_text(
                locale.fill(
                    Key::HomeClassroom,
                    &[("classroom", selection.classroom.as_str())]
                ),
                scale
            ),
            body_text(locale.fill(Key::HomeSeat, &[("seat", seat.as_str())]), scale),
        ]
        .spacing(2)
        .width(Fill),
    )
    .padding(16)
    .style(theme::highlight_card);

    let mut needs = column![
        label(locale.get(Key::HomeAccessibility).to_string(), scale),
        gap(8.0)
    ]
    .spacing(2);
    let tagged = selection.tagged_options();
    let chosen: Vec<_> = visible_options(&tagged)
        .filter_map(accessibility::option)
        .collect();
    if chosen.is_empty() {
        needs = needs.push(body_text(
            locale.get(Key::HomeNoAccessibility).to_string(),
            scale,
        ));
    } else {
        for option in chosen {
            needs = needs.push(body_text(format!("• {}", locale.get(option.title)), scale));
        }
    }

    let notes = if selection.instructor_notes.trim().is_empty() {
        locale.get(Key::HomeNoNotes).to_string()
    } else {
        selection.instructor_notes.clone()
    };

    let summary = container(
        column![
            needs,
            gap(16.0),
            label(locale.get(Key::HomeNotes).to_string(), scale),
            gap(8.0),
            body_text(notes, scale),
        ]
        .width(Fill),
    )
    .padding(16)
    .style(theme::card);

    let more = row![
        option_button(locale.get(Key::HomeRouteButton), Message::StartRoute, scale),
        option_button(locale.get(Key::HomeFeedbackButton), Message::OpenFeedback, scale),
    ]
    .spacing(12);

    let sos_hint = button(
        row![
            text(locale.get(Key::Sos))
                .size(scale.size(14.0))
                .font(theme::bold())
                .style(|theme| text::Style {
                    color: Some(theme::danger(theme)),
                }),
            Space::new().width(10),
            text(locale.get(Key::HomeSosHint))
                .size(scale.size(13.0))
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .align_y(Alignment::Center),
    )
    .width(Fill)
    .padding(14)
    .style(theme::secondary_button)
    .on_press(Message::SosOpen);

    let body = column![
        section_header::view(locale.get(Key::HomeReady).to_string(), None, scale),
        gap(16.0),
        destination,
        gap(16.0),
        summary,
        gap(24.0),
        label(locale.get(Key::HomeMoreOptions).to_string(), scale),
        gap(12.0),
        more,
        gap(16.0),
        sos_hint,
    ];

    scaffold(
        top_bar::view(
            locale.get(Key::HomeTitle).to_string(),
            true,
            vec![sos::button_view(locale, scale)],
            locale,
            scale,
        ),
        body.into(),
        Some(primary_action(
            locale.get(Key::HomeShowRoute),
            Some(Message::StartRoute),
            scale,
        )),
    )
}

fn option_button<'a>(label: &str, on_press: Message, scale: TextScale) -> Element<'a, Message> {
    button(container(text(label.to_string()).size(scale.size(14.0))).center_x(Fill))
        .width(Fill)
        .padding([12, 16])
        .style(theme::secondary_button)
        .on_press(on_press)
        .into()
}
