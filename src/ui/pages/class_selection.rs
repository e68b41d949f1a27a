//! Class selection page
//! Campus cards, then a classroom field once a campus is picked.

use iced::widget::{column, text_input};
use iced::{Element, Fill};

use super::{body_text, gap, label, primary_action, scaffold};
use crate::app::{ClassState, Message};
use crate::features::accessibility::Campus;
use crate::i18n::{Key, Locale};
use crate::ui::animation::HoverAnimations;
use crate::ui::components::dialog::{self, Action};
use crate::ui::components::top_bar;
use crate::ui::theme::{self, TextScale};
use crate::ui::widgets::{choice_card, section_header};

pub fn view<'a>(
    class: &'a ClassState,
    hover: &HoverAnimations<&'static str>,
    locale: Locale,
    scale: TextScale,
) -> Element<'a, Message> {
    let mut campuses = column![].spacing(12);
    for campus in Campus::ALL {
        campuses = campuses.push(choice_card::view(
            locale.get(campus.title()).to_string(),
            Some(locale.get(campus.description()).to_string()),
            class.campus == Some(campus),
            hover.progress(&campus.id()),
            Message::CampusSelected(campus),
            Message::CardHovered(Some(campus.id())),
            Message::CardHovered(None),
            scale,
        ));
    }

    let mut body = column![
        section_header::view(
            locale.get(Key::ClassSavedHeading).to_string(),
            Some(locale.get(Key::ClassSavedSubheading).to_string()),
            scale,
        ),
        gap(24.0),
        label(locale.get(Key::ClassChooseCampus).to_string(), scale),
        gap(12.0),
        campuses,
    ];

    if class.campus.is_some() {
        body = body
            .push(gap(24.0))
            .push(label(locale.get(Key::ClassEnterClassroom).to_string(), scale))
            .push(gap(12.0))
            .push(
                text_input(locale.get(Key::ClassClassroomLabel), &class.classroom)
                    .on_input(Message::ClassroomChanged)
                    .on_submit(Message::ClassSavePressed)
                    .padding(12)
                    .size(scale.size(15.0))
                    .width(Fill)
                    .style(theme::input),
            );
    }

    scaffold(
        top_bar::view(
            locale.get(Key::ClassTitle).to_string(),
            true,
            Vec::new(),
            locale,
            scale,
        ),
        body.into(),
        Some(primary_action(
            locale.get(Key::ClassSave),
            class.can_save().then_some(Message::ClassSavePressed),
            scale,
        )),
    )
}

/// "Is this right?" dialog before moving on to seats
pub fn confirm_dialog(
    class: &ClassState,
    locale: Locale,
    scale: TextScale,
) -> Element<'static, Message> {
    let campus = class
        .campus
        .map(|c| locale.get(c.title()))
        .unwrap_or_default();
    let classroom = class.classroom.as_str();

    let body = column![
        body_text(
            locale.fill(
                Key::ClassConfirmReserved,
                &[("campus", campus), ("classroom", classroom)],
            ),
            scale,
        ),
        gap(8.0),
        body_text(locale.get(Key::ClassConfirmInstructor).to_string(), scale),
        gap(8.0),
        label(locale.get(Key::ClassConfirmQuestion).to_string(), scale),
    ];

    dialog::view(
        locale.get(Key::ClassConfirmTitle).to_string(),
        body.into(),
        vec![
            Action::secondary(locale.get(Key::ClassConfirmNo), Message::ClassCancel),
            Action::primary(locale.get(Key::ClassConfirmYes), Message::ClassConfirm),
        ],
        Message::ClassCancel,
        scale,
    )
}
