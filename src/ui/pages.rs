//! Pages module
//! Full-page views, one per screen of the flow

pub mod accessibility;
pub mod class_selection;
pub mod feedback;
pub mod home;
pub mod instructor_notes;
pub mod login;
pub mod navigation_route;
pub mod seat_selection;

use iced::widget::{Space, button, column, container, scrollable, text};
use iced::{Element, Fill, Padding};

use crate::app::Message;
use crate::ui::theme::{self, TextScale};

/// Widest the content column grows on large windows
const CONTENT_MAX_WIDTH: f32 = 640.0;

/// Lay out a page: top bar, scrolling body, optional fixed bottom bar
pub fn scaffold<'a>(
    top_bar: Element<'a, Message>,
    body: Element<'a, Message>,
    bottom: Option<Element<'a, Message>>,
) -> Element<'a, Message> {
    let body = container(container(body).max_width(CONTENT_MAX_WIDTH))
        .width(Fill)
        .center_x(Fill)
        .padding(Padding::new(20.0).bottom(32.0));

    let mut page = column![
        top_bar,
        scrollable(body)
            .width(Fill)
            .height(Fill)
            .style(theme::page_scrollable),
    ];

    if let Some(bottom) = bottom {
        page = page.push(
            container(container(bottom).max_width(CONTENT_MAX_WIDTH))
                .width(Fill)
                .center_x(Fill)
                .padding(16)
                .style(theme::bottom_bar),
        );
    }

    container(page)
        .width(Fill)
        .height(Fill)
        .style(theme::page)
        .into()
}

/// Full-width filled button for the bottom bar; disabled when `on_press` is None
pub fn primary_action<'a>(
    label: &str,
    on_press: Option<Message>,
    scale: TextScale,
) -> Element<'a, Message> {
    button(
        container(text(label.to_string()).size(scale.size(16.0)).font(theme::bold()))
            .center_x(Fill),
    )
    .width(Fill)
    .padding([12, 20])
    .style(theme::primary_button)
    .on_press_maybe(on_press)
    .into()
}

/// Bold line above a group of fields
pub fn label<'a>(content: String, scale: TextScale) -> Element<'a, Message> {
    text(content)
        .size(scale.size(16.0))
        .font(theme::bold())
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .into()
}

/// Regular body text
pub fn body_text<'a>(content: String, scale: TextScale) -> Element<'a, Message> {
    text(content)
        .size(scale.size(14.0))
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}

pub fn gap<'a>(height: f32) -> Element<'a, Message> {
    Space::new().height(height).into()
}
