//! Screen header: back button, title and optional trailing actions

use iced::widget::{Space, button, container, row, text, tooltip};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Language, Locale};
use crate::ui::theme::{self, TextScale};

pub const TOP_BAR_HEIGHT: f32 = 56.0;

/// Build the top bar
///
/// `can_go_back` hides the back arrow on the first screen. `trailing`
/// holds screen-specific buttons such as the guide or SOS.
pub fn view(
    title: String,
    can_go_back: bool,
    trailing: Vec<Element<'static, Message>>,
    locale: Locale,
    scale: TextScale,
) -> Element<'static, Message> {
    let leading: Element<'static, Message> = if can_go_back {
        let arrow = match locale.language {
            Language::Hebrew => "→",
            Language::English => "←",
        };
        tooltip(
            button(text(arrow).size(scale.size(20.0)))
                .padding([4, 10])
                .style(theme::bar_button)
                .on_press(Message::Back),
            text(locale.get(Key::Back)).size(scale.size(12.0)),
            tooltip::Position::Bottom,
        )
        .into()
    } else {
        Space::new().width(8).into()
    };

    let title = text(title)
        .size(scale.size(18.0))
        .font(theme::bold())
        .style(|theme| text::Style {
            color: Some(theme::on_primary(theme)),
        });

    let mut bar = row![leading, Space::new().width(8), title, Space::new().width(Fill)]
        .spacing(0)
        .align_y(Alignment::Center);
    for element in trailing {
        bar = bar.push(Space::new().width(8)).push(element);
    }

    container(bar.padding(Padding::new(8.0).left(8.0).right(12.0)))
        .width(Fill)
        .height(TOP_BAR_HEIGHT)
        .center_y(TOP_BAR_HEIGHT)
        .style(theme::top_bar)
        .into()
}

/// Text button styled for the bar (e.g. "Guide")
pub fn bar_action(label: &str, on_press: Message, scale: TextScale) -> Element<'static, Message> {
    button(text(label.to_string()).size(scale.size(14.0)))
        .padding([6, 12])
        .style(theme::bar_button)
        .on_press(on_press)
        .into()
}
