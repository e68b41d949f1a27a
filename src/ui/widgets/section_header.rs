//! Section header widget
//!
//! A bold heading with an optional muted line under it.

use iced::widget::{Space, column, text};
use iced::{Element, Length};

use crate::ui::theme::{self, TextScale};

pub fn view<'a, Message: 'a>(
    title: String,
    subtitle: Option<String>,
    scale: TextScale,
) -> Element<'a, Message> {
    let title_text = text(title)
        .size(scale.size(20.0))
        .font(theme::bold())
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let mut header = column![title_text].width(Length::Fill);

    if let Some(subtitle) = subtitle {
        header = header.push(Space::new().height(4)).push(
            text(subtitle)
                .size(scale.size(14.0))
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        );
    }

    header.into()
}
