//! Accessibility options page
//! One card per need; the color blindness card unfolds a color list.

use iced::widget::{Space, checkbox, column, container, row, text};
use iced::{Alignment, Element, Fill, Padding};

use super::{gap, primary_action, scaffold};
use crate::app::Message;
use crate::features::accessibility::{AccessibilityForm, COLORBLIND, COLORS, OPTIONS};
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::components::top_bar;
use crate::ui::theme::{self, TextScale};
use crate::ui::widgets::{choice_card, section_header};

pub fn view<'a>(
    form: &AccessibilityForm,
    hover: &HoverAnimations<&'static str>,
    locale: Locale,
    scale: TextScale,
) -> Element<'a, Message> {
    let mut cards = column![].spacing(12);

    for option in &OPTIONS {
        cards = cards.push(choice_card::view(
            locale.get(option.title).to_string(),
            Some(locale.get(option.description).to_string()),
            form.is_selected(option.id),
            hover.progress(&option.id),
            Message::OptionToggled(option.id),
            Message::CardHovered(Some(option.id)),
            Message::CardHovered(None),
            scale,
        ));

        if option.id == COLORBLIND && form.shows_colors() {
            cards = cards.push(color_list(form, locale, scale));
        }
    }

    let body = column![
        section_header::view(
            locale.get(Key::AccessibilityHeading).to_string(),
            Some(locale.get(Key::AccessibilitySubheading).to_string()),
            scale,
        ),
        gap(20.0),
        cards,
    ];

    scaffold(
        top_bar::view(
            locale.get(Key::AccessibilityTitle).to_string(),
            true,
            Vec::new(),
            locale,
            scale,
        ),
        body.into(),
        Some(primary_action(
            locale.get(Key::Continue),
            Some(Message::AccessibilitySubmit),
            scale,
        )),
    )
}

/// Colors to avoid, indented under the color blindness card
fn color_list<'a>(form: &AccessibilityForm, locale: Locale, scale: TextScale) -> Element<'a, Message> {
    let mut list = column![
        text(locale.get(Key::AccessibilityColorsHeading))
            .size(scale.size(14.0))
            .font(theme::bold())
    ]
    .spacing(10);

    for color in &COLORS {
        let swatch_color = color.swatch;
        let swatch = container(Space::new().width(16).height(16)).style(move |theme| {
            container::Style {
                background: Some(iced::Background::Color(swatch_color)),
                border: iced::Border {
                    radius: 8.0.into(),
                    width: 1.0,
                    color: theme::border_color(theme),
                },
                ..Default::default()
            }
        });

        let id = color.id;
        list = list.push(
            row![
                checkbox(form.is_color_selected(id))
                    .label(locale.get(color.title))
                    .on_toggle(move |_| Message::ColorToggled(id))
                    .text_size(scale.size(14.0))
                    .spacing(8)
                    .style(theme::check),
                Space::new().width(Fill),
                swatch,
            ]
            .align_y(Alignment::Center),
        );
    }

    container(list)
        .width(Fill)
        .padding(Padding::new(16.0).left(32.0))
        .style(theme::card)
        .into()
}
