//! Modal dialog component
//!
//! A centered card over a dimmed backdrop. The backdrop swallows every
//! pointer event so nothing underneath reacts while the dialog is up.

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme::{self, TextScale};

/// How a dialog button is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Primary,
    Secondary,
    Danger,
}

/// One button in the dialog's action row
pub struct Action {
    pub label: String,
    pub kind: ActionKind,
    /// `None` draws the button disabled
    pub on_press: Option<Message>,
}

impl Action {
    pub fn primary(label: impl Into<String>, on_press: Message) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Primary,
            on_press: Some(on_press),
        }
    }

    pub fn secondary(label: impl Into<String>, on_press: Message) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Secondary,
            on_press: Some(on_press),
        }
    }

    pub fn danger(label: impl Into<String>, on_press: Message) -> Self {
        Self {
            label: label.into(),
            kind: ActionKind::Danger,
            on_press: Some(on_press),
        }
    }

    fn view(self, scale: TextScale) -> Element<'static, Message> {
        let style = match self.kind {
            ActionKind::Primary => theme::primary_button,
            ActionKind::Secondary => theme::secondary_button,
            ActionKind::Danger => theme::sos_button,
        };
        button(text(self.label).size(scale.size(14.0)).font(theme::bold()))
            .padding([10, 20])
            .style(style)
            .on_press_maybe(self.on_press)
            .into()
    }
}

/// Build a modal dialog
///
/// # Arguments
/// * `title` - Bold heading
/// * `body` - Content between heading and buttons
/// * `actions` - Buttons, laid out right-aligned in order
/// * `on_dismiss` - Sent when the backdrop is clicked; `Message::Noop` keeps
///   the dialog up
pub fn view(
    title: String,
    body: Element<'static, Message>,
    actions: Vec<Action>,
    on_dismiss: Message,
    scale: TextScale,
) -> Element<'static, Message> {
    let title = text(title)
        .size(scale.size(18.0))
        .font(theme::bold())
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let mut buttons = row![Space::new().width(Fill)]
        .spacing(12)
        .align_y(Alignment::Center);
    for action in actions {
        buttons = buttons.push(action.view(scale));
    }

    let dialog_box = container(
        column![
            title,
            Space::new().height(12),
            body,
            Space::new().height(20),
            buttons,
        ]
        .padding(24),
    )
    .max_width(420)
    .style(theme::dialog);

    // Clicks on the dialog itself must not reach the backdrop handler
    let dialog_box = mouse_area(dialog_box).on_press(Message::Noop);

    let backdrop = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .padding(24)
        .style(theme::backdrop);

    let event_blocker = mouse_area(backdrop)
        .interaction(Interaction::Idle)
        .on_press(on_dismiss);

    opaque(event_blocker).into()
}

/// Plain paragraph for a dialog body
pub fn paragraph(content: String, scale: TextScale) -> Element<'static, Message> {
    text(content)
        .size(scale.size(14.0))
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        })
        .into()
}
