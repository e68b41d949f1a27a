//! Seat selection page
//! Lecture hall grid facing the lecturer's desk.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Fill, Theme};

use super::{gap, label, primary_action, scaffold};
use crate::app::{Message, SeatState};
use crate::features::SelectionState;
use crate::features::seating::{Seat, SeatKind, SeatRow};
use crate::i18n::{Key, Locale};
use crate::ui::components::{sos, top_bar};
use crate::ui::theme::{self, TextScale};
use crate::ui::widgets::section_header;

const SEAT_SIZE: f32 = 40.0;
const SEAT_SPACING: f32 = 6.0;
const AISLE_WIDTH: f32 = 24.0;

pub fn view<'a>(
    seat: &'a SeatState,
    selection: &SelectionState,
    locale: Locale,
    scale: TextScale,
) -> Element<'a, Message> {
    let heading = locale.fill(
        Key::SeatClassroomCampus,
        &[
            ("classroom", selection.classroom.as_str()),
            ("campus", sos::campus_name(&selection.campus, locale).as_str()),
        ],
    );

    let legend = row![
        legend_entry(locale.get(Key::SeatLegendAccessible), SeatKind::Accessible, scale),
        legend_entry(locale.get(Key::SeatLegendReserved), SeatKind::Reserved, scale),
        legend_entry(locale.get(Key::SeatLegendRegular), SeatKind::Regular, scale),
    ]
    .spacing(16)
    .align_y(Alignment::Center);

    let desk = container(
        text(locale.get(Key::SeatLecturerDesk))
            .size(scale.size(14.0))
            .font(theme::bold()),
    )
    .center_x(Fill)
    .padding(10)
    .style(theme::highlight_card);

    let mut grid = column![].spacing(SEAT_SPACING).align_x(Alignment::Center);
    for seat_row in seat.map.rows() {
        grid = grid.push(row_view(seat_row, seat.selected, scale));
    }

    let kind_key = if seat.map.is_accessible(seat.selected) {
        Key::SeatIsAccessible
    } else {
        Key::SeatIsRegular
    };
    let number = seat.selected.to_string();
    let info = container(
        column![
            label(
                locale.fill(Key::SeatChosen, &[("seat", number.as_str())]),
                scale
            ),
            gap(4.0),
            text(locale.get(kind_key))
                .size(scale.size(14.0))
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        ]
        .width(Fill),
    )
    .padding(16)
    .style(theme::card);

    let body = column![
        section_header::view(heading, None, scale),
        gap(16.0),
        legend,
        gap(20.0),
        desk,
        gap(20.0),
        container(grid).center_x(Fill),
        gap(24.0),
        info,
    ];

    scaffold(
        top_bar::view(
            locale.get(Key::SeatTitle).to_string(),
            true,
            Vec::new(),
            locale,
            scale,
        ),
        body.into(),
        Some(primary_action(
            locale.get(Key::SeatSave),
            Some(Message::SeatSubmit),
            scale,
        )),
    )
}

fn row_view<'a>(
    seat_row: &SeatRow,
    selected: crate::features::SeatId,
    scale: TextScale,
) -> Element<'a, Message> {
    let mut cells = row![].spacing(SEAT_SPACING).align_y(Alignment::Center);
    for (index, seat) in seat_row.seats.iter().enumerate() {
        if seat_row.aisle_before == Some(index) {
            cells = cells.push(Space::new().width(AISLE_WIDTH));
        }
        cells = cells.push(seat_view(seat, seat.id == selected, scale));
    }
    cells.into()
}

fn seat_view<'a>(seat: &Seat, selected: bool, scale: TextScale) -> Element<'a, Message> {
    let kind = seat.kind;
    button(
        container(text(seat.id.to_string()).size(scale.size(13.0)))
            .center_x(Fill)
            .center_y(Fill),
    )
    .width(SEAT_SIZE)
    .height(SEAT_SIZE)
    .padding(0)
    .style(move |theme, status| theme::seat_button(theme, status, seat_fill(theme, kind), selected))
    .on_press_maybe(
        seat.is_selectable()
            .then_some(Message::SeatSelected(seat.id)),
    )
    .into()
}

fn legend_entry<'a>(label: &str, kind: SeatKind, scale: TextScale) -> Element<'a, Message> {
    let swatch = container(Space::new().width(14).height(14)).style(move |theme| {
        container::Style {
            background: Some(iced::Background::Color(seat_fill(theme, kind))),
            border: iced::Border {
                radius: 3.0.into(),
                width: 1.0,
                color: theme::border_color(theme),
            },
            ..Default::default()
        }
    });

    row![
        swatch,
        text(label.to_string())
            .size(scale.size(12.0))
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    ]
    .spacing(6)
    .align_y(Alignment::Center)
    .into()
}

fn seat_fill(theme: &Theme, kind: SeatKind) -> Color {
    match kind {
        SeatKind::Accessible => theme::SEAT_ACCESSIBLE,
        SeatKind::Reserved => theme::SEAT_RESERVED,
        SeatKind::Regular => theme::surface(theme),
    }
}
