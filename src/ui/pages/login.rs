//! Login page
//! Brand header, credentials form, guest entry and the accessibility
//! settings shortcut. The tip card floats above the form while shown.

use iced::widget::{Space, button, column, container, text, text_input};
use iced::{Alignment, Element, Fill};

use super::{gap, primary_action};
use crate::app::{LoginState, Message, TipState};
use crate::i18n::{Key, Locale};
use crate::ui::components::tip_card;
use crate::ui::theme::{self, TextScale};

pub fn view<'a>(
    login: &'a LoginState,
    tip: &TipState,
    locale: Locale,
    scale: TextScale,
) -> Element<'a, Message> {
    let brand = column![
        text(locale.get(Key::AppName))
            .size(scale.size(44.0))
            .font(theme::bold())
            .style(|theme| text::Style {
                color: Some(theme::accent(theme)),
            }),
        text(locale.get(Key::AppBrand))
            .size(scale.size(18.0))
            .style(|theme| text::Style {
                color: Some(theme::primary(theme)),
            }),
    ]
    .align_x(Alignment::Center)
    .width(Fill);

    let tip: Element<'a, Message> = match tip.shown {
        Some(index) => tip_card::view(index, tip.fade.progress(), locale, scale),
        None => Space::new().height(0).into(),
    };

    let username = text_input(locale.get(Key::LoginUsername), &login.username)
        .on_input(Message::UsernameChanged)
        .padding(12)
        .size(scale.size(15.0))
        .style(theme::input);

    let password = text_input(locale.get(Key::LoginPassword), &login.password)
        .on_input(Message::PasswordChanged)
        .on_submit(Message::LoginPressed)
        .secure(true)
        .padding(12)
        .size(scale.size(15.0))
        .style(theme::input);

    let login_button = primary_action(
        locale.get(Key::LoginButton),
        login.can_submit().then_some(Message::LoginPressed),
        scale,
    );

    let register = button(text(locale.get(Key::LoginRegister)).size(scale.size(14.0)))
        .style(theme::text_button)
        .on_press(Message::RegisterPressed);

    let guest = button(
        container(text(locale.get(Key::LoginGuest)).size(scale.size(15.0))).center_x(Fill),
    )
    .width(Fill)
    .padding([12, 20])
    .style(theme::secondary_button)
    .on_press(Message::GuestPressed);

    let settings = button(
        text(locale.get(Key::LoginAccessibilitySettings)).size(scale.size(14.0)),
    )
    .style(theme::text_button)
    .on_press(Message::OpenPreferences);

    let form = column![
        brand,
        gap(24.0),
        tip,
        gap(24.0),
        username,
        gap(12.0),
        password,
        gap(24.0),
        login_button,
        gap(8.0),
        container(register).center_x(Fill),
        gap(16.0),
        guest,
        gap(16.0),
        container(settings).center_x(Fill),
    ]
    .max_width(420)
    .padding(32);

    container(form)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(theme::page)
        .into()
}
