//! Toast notification widget
//!
//! Short status line floating at the bottom of the window: a colored
//! accent bar and glyph followed by the message.

use std::time::Duration;

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Color, Element, Padding, Theme};

use crate::ui::theme::{self, TextScale};

/// How long a toast stays up
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Error,
    Info,
}

impl ToastStyle {
    pub fn accent_color(&self, theme: &Theme) -> Color {
        match self {
            ToastStyle::Error => theme::danger(theme),
            ToastStyle::Info => theme::info(theme),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Error => "✗",
            ToastStyle::Info => "ℹ",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Info)
    }
}

pub fn view_toast<'a, Message: 'a>(toast: &Toast, scale: TextScale) -> Element<'a, Message> {
    let style = toast.style;

    let accent_bar = container(Space::new().width(3).height(20)).style(move |theme| {
        container::Style {
            background: Some(iced::Background::Color(style.accent_color(theme))),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon = text(style.icon())
        .size(scale.size(14.0))
        .style(move |theme| text::Style {
            color: Some(style.accent_color(theme)),
        });

    let message = text(toast.message.clone())
        .size(scale.size(14.0))
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon,
        Space::new().width(10),
        message,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface(theme))),
            border: iced::Border {
                radius: 8.0.into(),
                width: theme::border_width(theme),
                color: theme::border_color(theme),
            },
            shadow: iced::Shadow {
                color: theme::shadow_color(theme),
                offset: iced::Vector::new(0.0, 4.0),
                blur_radius: 12.0,
            },
            ..Default::default()
        })
        .into()
}
