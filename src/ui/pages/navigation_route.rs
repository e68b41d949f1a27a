//! Navigation route page
//! Progress ring, current instruction and location while the simulated
//! walk runs, plus the guide and arrival dialogs.

use iced::widget::{column, container, row, stack, text};
use iced::{Alignment, Element, Fill};

use super::{body_text, gap, label, primary_action, scaffold};
use crate::app::{Message, RouteState};
use crate::features::SelectionState;
use crate::features::route::STEPS;
use crate::i18n::{Key, Locale};
use crate::ui::components::dialog::{self, Action};
use crate::ui::components::{sos, top_bar};
use crate::ui::theme::{self, TextScale};
use crate::ui::widgets::{ProgressRing, view_progress_ring};

const RING_SIZE: f32 = 160.0;

pub fn view<'a>(
    route: &RouteState,
    selection: &SelectionState,
    locale: Locale,
    scale: TextScale,
) -> Element<'a, Message> {
    let simulation = &route.simulation;
    let campus = sos::campus_name(&selection.campus, locale);
    let args = [
        ("campus", campus.as_str()),
        ("classroom", selection.classroom.as_str()),
    ];
    let seat = selection
        .seat
        .map(|seat| seat.to_string())
        .unwrap_or_default();

    let destination = container(
        column![
            label(locale.fill(Key::RouteDestination, &args), scale),
            gap(4.0),
            body_text(locale.fill(Key::RouteSeat, &[("seat", seat.as_str())]), scale),
        ]
        .width(Fill),
    )
    .padding(16)
    .style(theme::highlight_card);

    let percent = format!("{}%", simulation.percent());
    let ring = stack![
        view_progress_ring(ProgressRing::new(simulation.progress()).stroke_width(10.0), RING_SIZE),
        container(
            text(percent)
                .size(scale.size(28.0))
                .font(theme::bold())
                .style(|theme| text::Style {
                    color: Some(theme::text_primary(theme)),
                })
        )
        .center_x(RING_SIZE)
        .center_y(RING_SIZE),
    ];

    let status = if simulation.is_complete() {
        text(locale.get(Key::RouteArrived).to_string())
            .size(scale.size(16.0))
            .font(theme::bold())
            .style(|theme| text::Style {
                color: Some(theme::success(theme)),
            })
    } else {
        let minutes = simulation.eta_minutes().to_string();
        text(locale.fill(Key::RouteEta, &[("minutes", minutes.as_str())]))
            .size(scale.size(14.0))
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            })
    };

    let step = simulation.step();
    let number = (simulation.current_step() + 1).to_string();
    let total = STEPS.len().to_string();
    let instruction = container(
        column![
            text(locale.fill(
                Key::RouteStepCounter,
                &[("step", number.as_str()), ("total", total.as_str())],
            ))
            .size(scale.size(12.0))
            .style(|theme| text::Style {
                color: Some(theme::text_muted(theme)),
            }),
            gap(6.0),
            label(locale.fill(step.instruction, &args), scale),
        ]
        .width(Fill),
    )
    .padding(16)
    .style(theme::card);

    let location = container(
        row![
            text("◉").size(scale.size(18.0)),
            column![
                text(locale.get(Key::RouteCurrentLocation))
                    .size(scale.size(12.0))
                    .style(|theme| text::Style {
                        color: Some(theme::text_muted(theme)),
                    }),
                label(locale.fill(step.location, &args), scale),
            ]
            .spacing(2),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .width(Fill),
    )
    .padding(16)
    .style(theme::card);

    let body = column![
        destination,
        gap(24.0),
        container(ring).center_x(Fill),
        gap(12.0),
        container(status).center_x(Fill),
        gap(24.0),
        instruction,
        gap(12.0),
        location,
    ];

    let bottom = simulation.is_complete().then(|| {
        primary_action(
            locale.get(Key::RouteConfirmArrival),
            Some(Message::ConfirmArrivalPressed),
            scale,
        )
    });

    scaffold(
        top_bar::view(
            locale.get(Key::RouteTitle).to_string(),
            true,
            vec![
                top_bar::bar_action(locale.get(Key::Guide), Message::GuideOpen, scale),
                sos::button_view(locale, scale),
            ],
            locale,
            scale,
        ),
        body.into(),
        bottom,
    )
}

/// Explains the screen when the walk starts; reopened from the Guide button
pub fn guide_dialog(locale: Locale, scale: TextScale) -> Element<'static, Message> {
    let body = column![
        dialog::paragraph(locale.get(Key::RouteGuideReady).to_string(), scale),
        dialog::paragraph(locale.get(Key::RouteGuideAdapted).to_string(), scale),
        dialog::paragraph(locale.get(Key::RouteGuideFollow).to_string(), scale),
        dialog::paragraph(locale.get(Key::RouteGuideSos).to_string(), scale),
    ]
    .spacing(8);

    dialog::view(
        locale.get(Key::RouteGuideTitle).to_string(),
        body.into(),
        vec![Action::primary(locale.get(Key::RouteStart), Message::GuideDismiss)],
        Message::GuideDismiss,
        scale,
    )
}

/// "Have you arrived?" once the walk completes
pub fn arrival_dialog(locale: Locale, scale: TextScale) -> Element<'static, Message> {
    let body = column![
        dialog::paragraph(locale.get(Key::RouteArrivalQuestion).to_string(), scale),
        dialog::paragraph(locale.get(Key::RouteArrivalHint).to_string(), scale),
    ]
    .spacing(8);

    dialog::view(
        locale.get(Key::RouteArrivalTitle).to_string(),
        body.into(),
        vec![
            Action::secondary(locale.get(Key::RouteToHome), Message::ArrivalToHome),
            Action::primary(locale.get(Key::RouteToFeedback), Message::ArrivalToFeedback),
        ],
        Message::Noop,
        scale,
    )
}
