//! Accessibility tip card on the login screen

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::features::tips::TIPS;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, TextScale};

/// Build the tip card
///
/// `opacity` comes from the tip's fade-in; 1.0 when motion is reduced.
pub fn view(
    tip: usize,
    opacity: f32,
    locale: Locale,
    scale: TextScale,
) -> Element<'static, Message> {
    let Some(key) = TIPS.get(tip) else {
        return Space::new().height(0).into();
    };
    let fade = move |color: Color| Color {
        a: color.a * opacity,
        ..color
    };

    let title = text(locale.get(Key::TipTitle))
        .size(scale.size(15.0))
        .font(theme::bold())
        .style(move |theme| text::Style {
            color: Some(fade(theme::primary(theme))),
        });

    let body = text(locale.get(*key))
        .size(scale.size(14.0))
        .style(move |theme| text::Style {
            color: Some(fade(theme::text_primary(theme))),
        });

    let close = button(text("✕").size(scale.size(14.0)))
        .padding([2, 8])
        .style(theme::text_button)
        .on_press(Message::DismissTip);

    let content = row![
        column![title, Space::new().height(4), body].width(Fill),
        close,
    ]
    .align_y(Alignment::Start)
    .padding(16);

    container(content)
        .width(Fill)
        .style(move |theme| {
            let base = theme::highlight_card(theme);
            container::Style {
                background: Some(iced::Background::Color(fade(
                    theme::mix(theme::surface(theme), theme::primary(theme), 0.12),
                ))),
                border: iced::Border {
                    color: fade(base.border.color),
                    ..base.border
                },
                ..base
            }
        })
        .into()
}
