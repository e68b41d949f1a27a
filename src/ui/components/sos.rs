//! Distress button and its dialogs

use iced::widget::{Space, button, column, text};
use iced::{Element, Padding};

use super::dialog::{self, Action};
use crate::app::Message;
use crate::features::SelectionState;
use crate::features::accessibility::Campus;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, TextScale};

/// Which screen the dialog is opened from; they word the request differently
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SosVariant {
    /// Home screen: share the current location
    Location,
    /// Route screen: call for help while walking
    Call,
}

/// Red SOS button
pub fn button_view(locale: Locale, scale: TextScale) -> Element<'static, Message> {
    button(
        text(locale.get(Key::Sos))
            .size(scale.size(14.0))
            .font(theme::bold()),
    )
    .padding(Padding::new(6.0).left(16.0).right(16.0))
    .style(theme::sos_button)
    .on_press(Message::SosOpen)
    .into()
}

/// Ask before sending
pub fn confirm_dialog(
    variant: SosVariant,
    locale: Locale,
    scale: TextScale,
) -> Element<'static, Message> {
    let (title, message, send) = match variant {
        SosVariant::Location => (Key::SosTitle, Key::SosMessage, Key::SosSendLocation),
        SosVariant::Call => (Key::SosCallTitle, Key::SosCallMessage, Key::SosCallSend),
    };

    dialog::view(
        locale.get(title).to_string(),
        dialog::paragraph(locale.get(message).to_string(), scale),
        vec![
            Action::secondary(locale.get(Key::Cancel), Message::SosCancel),
            Action::danger(locale.get(send), Message::SosSend),
        ],
        Message::SosCancel,
        scale,
    )
}

/// Confirmation that the report went out
pub fn sent_dialog(
    selection: &SelectionState,
    locale: Locale,
    scale: TextScale,
) -> Element<'static, Message> {
    let campus = campus_name(&selection.campus, locale);
    let location = locale.fill(
        Key::LocationSentWhere,
        &[("campus", campus.as_str()), ("classroom", selection.classroom.as_str())],
    );

    let body = column![
        dialog::paragraph(locale.get(Key::LocationSentMessage).to_string(), scale),
        Space::new().height(8),
        text(location)
            .size(scale.size(14.0))
            .font(theme::bold())
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
    ];

    dialog::view(
        locale.get(Key::LocationSentTitle).to_string(),
        body.into(),
        vec![Action::primary(
            locale.get(Key::GotIt),
            Message::LocationSentDismiss,
        )],
        Message::LocationSentDismiss,
        scale,
    )
}

/// Display name for a stored campus id, falling back to the raw value
pub fn campus_name(id: &str, locale: Locale) -> String {
    match Campus::from_id(id) {
        Some(campus) => locale.get(campus.title()).to_string(),
        None => id.to_string(),
    }
}
