//! Choice card widget
//!
//! A full-width selectable card with a title, an optional description and
//! a check mark when selected. Used for accessibility needs and campuses.
//!
//! # Design
//!
//! Reusable widget with generic Message types. Hover is animated by the
//! caller and passed in as `hover_progress`.

use iced::widget::{Space, button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Fill};

use crate::ui::theme::{self, TextScale};

/// Create a choice card element
///
/// # Arguments
/// * `title` - Card heading
/// * `description` - Optional second line
/// * `selected` - Whether the card is currently chosen
/// * `hover_progress` - Hover animation progress (0.0 to 1.0)
/// * `on_press` - Message sent when the card is clicked
/// * `on_hover` - Message sent when the pointer enters the card
/// * `on_unhover` - Message sent when the pointer leaves the card
#[allow(clippy::too_many_arguments)]
pub fn view<'a, Message: Clone + 'a>(
    title: String,
    description: Option<String>,
    selected: bool,
    hover_progress: f32,
    on_press: Message,
    on_hover: Message,
    on_unhover: Message,
    scale: TextScale,
) -> Element<'a, Message> {
    let mut body = column![
        text(title)
            .size(scale.size(16.0))
            .font(theme::bold())
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            })
    ]
    .width(Fill);

    if let Some(description) = description {
        body = body.push(Space::new().height(4)).push(
            text(description)
                .size(scale.size(13.0))
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        );
    }

    let mark = container(
        text(if selected { "✓" } else { "" })
            .size(scale.size(14.0))
            .style(|theme| text::Style {
                color: Some(theme::on_primary(theme)),
            }),
    )
    .width(24)
    .height(24)
    .center_x(24)
    .center_y(24)
    .style(move |theme| container::Style {
        background: selected.then(|| iced::Background::Color(theme::primary(theme))),
        border: iced::Border {
            radius: 12.0.into(),
            width: 2.0,
            color: if selected {
                theme::primary(theme)
            } else {
                theme::border_color(theme)
            },
        },
        ..Default::default()
    });

    let card = button(
        row![body, Space::new().width(12), mark]
            .align_y(Alignment::Center)
            .padding(16),
    )
    .width(Fill)
    .padding(0)
    .style(move |theme, status| theme::choice_card(theme, status, selected, hover_progress))
    .on_press(on_press);

    mouse_area(card)
        .on_enter(on_hover)
        .on_exit(on_unhover)
        .into()
}
