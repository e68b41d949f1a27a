//! Accessibility and display preferences dialog

use iced::widget::{Space, column, pick_list, row, text, toggler};
use iced::{Alignment, Element, Fill};

use super::dialog::{self, Action};
use crate::app::Message;
use crate::features::{Preference, Settings};
use crate::i18n::{Key, Language, Locale};
use crate::ui::theme::{self, TextScale};

const PREFERENCES: [(Preference, Key); 3] = [
    (Preference::HighContrast, Key::PrefHighContrast),
    (Preference::LargeText, Key::PrefLargeText),
    (Preference::ReducedMotion, Key::PrefReducedMotion),
];

pub fn view(settings: &Settings, locale: Locale, scale: TextScale) -> Element<'static, Message> {
    let mut body = column![].spacing(14);

    for (preference, label) in PREFERENCES {
        let enabled = settings.accessibility.get(preference);
        body = body.push(toggle_row(
            locale.get(label),
            enabled,
            move |on| Message::PreferenceToggled(preference, on),
            scale,
        ));
    }

    body = body.push(toggle_row(
        locale.get(Key::PrefDarkMode),
        settings.display.dark_mode,
        Message::DarkModeToggled,
        scale,
    ));

    let language = pick_list(
        Language::all(),
        Some(settings.display.language()),
        Message::LanguageSelected,
    )
    .text_size(scale.size(14.0));

    body = body.push(
        row![label(locale.get(Key::PrefLanguage), scale), language]
            .align_y(Alignment::Center),
    );

    dialog::view(
        locale.get(Key::PrefsTitle).to_string(),
        body.into(),
        vec![Action::primary(
            locale.get(Key::Confirm),
            Message::ClosePreferences,
        )],
        Message::ClosePreferences,
        scale,
    )
}

fn label(content: &'static str, scale: TextScale) -> Element<'static, Message> {
    text(content)
        .size(scale.size(15.0))
        .width(Fill)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        })
        .into()
}

fn toggle_row(
    content: &'static str,
    enabled: bool,
    on_toggle: impl Fn(bool) -> Message + 'static,
    scale: TextScale,
) -> Element<'static, Message> {
    row![
        label(content, scale),
        Space::new().width(12),
        toggler(enabled).on_toggle(on_toggle),
    ]
    .align_y(Alignment::Center)
    .into()
}
