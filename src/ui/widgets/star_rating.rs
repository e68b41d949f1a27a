//! Star rating widget
//!
//! A row of tappable stars followed by a word describing the rating.

use iced::widget::{Space, button, row, text};
use iced::{Alignment, Color, Element};

use crate::ui::theme::{self, TextScale};

const STAR_GOLD: Color = iced::color!(0xffc107);

/// # Arguments
/// * `rating` - Stars currently lit, 0 for none
/// * `max` - Number of stars drawn
/// * `label` - Word for the current rating
/// * `on_rate` - Builds the message for a tapped star (1-based)
/// * `enabled` - Stars ignore presses when false
pub fn view<'a, Message: Clone + 'a>(
    rating: u8,
    max: u8,
    label: String,
    on_rate: impl Fn(u8) -> Message + 'a,
    enabled: bool,
    scale: TextScale,
) -> Element<'a, Message> {
    let mut stars = row![].spacing(4).align_y(Alignment::Center);

    for star in 1..=max {
        let lit = star <= rating;
        let glyph = text(if lit { "★" } else { "☆" })
            .size(scale.size(28.0))
            .style(move |theme| text::Style {
                color: Some(if lit {
                    if theme::is_high_contrast(theme) {
                        theme::primary(theme)
                    } else {
                        STAR_GOLD
                    }
                } else {
                    theme::text_muted(theme)
                }),
            });

        let star_button = button(glyph)
            .padding(2)
            .style(theme::text_button)
            .on_press_maybe(enabled.then(|| on_rate(star)));
        stars = stars.push(star_button);
    }

    row![
        stars,
        Space::new().width(12),
        text(label)
            .size(scale.size(14.0))
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    ]
    .align_y(Alignment::Center)
    .into()
}
