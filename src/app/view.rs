//! Application view rendering

use iced::widget::{Space, container, stack};
use iced::{Alignment, Color, Element, Fill};

use super::App;
use super::message::Message;
use crate::features::ScreenId;
use crate::ui::components::sos::{self, SosVariant};
use crate::ui::{components, pages, theme, widgets};

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;
        let scale = self.core.text_scale();
        let selection = self.router.selection();
        let screen = self.router.current();

        let page: Element<'_, Message> = match screen {
            ScreenId::Login => pages::login::view(&self.ui.login, &self.ui.tip, locale, scale),
            ScreenId::AccessibilityOptions => pages::accessibility::view(
                &self.ui.accessibility,
                &self.ui.card_hover,
                locale,
                scale,
            ),
            ScreenId::InstructorNotes => {
                pages::instructor_notes::view(&self.ui.notes, selection, locale, scale)
            }
            ScreenId::ClassSelection => {
                pages::class_selection::view(&self.ui.class, &self.ui.card_hover, locale, scale)
            }
            ScreenId::SeatSelection => {
                pages::seat_selection::view(&self.ui.seat, selection, locale, scale)
            }
            ScreenId::Home => pages::home::view(selection, locale, scale),
            ScreenId::NavigationRoute => {
                pages::navigation_route::view(&self.ui.route, selection, locale, scale)
            }
            ScreenId::Feedback => pages::feedback::view(&self.ui.feedback, locale, scale),
        };

        // Page fades in over a cover of the background colour
        let fade_progress = self.ui.screen_fade.progress();
        let fade_overlay: Element<'_, Message> = if fade_progress < 1.0 {
            container(Space::new().width(Fill).height(Fill))
                .width(Fill)
                .height(Fill)
                .style(move |theme| container::Style {
                    background: Some(iced::Background::Color(Color {
                        a: 1.0 - fade_progress,
                        ..theme::background(theme)
                    })),
                    ..Default::default()
                })
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        // At most one dialog is up at a time; later entries win
        let mut dialog: Option<Element<'_, Message>> = None;
        match screen {
            ScreenId::Login if self.ui.preferences_open => {
                dialog = Some(components::preferences_dialog::view(
                    &self.core.settings,
                    locale,
                    scale,
                ));
            }
            ScreenId::ClassSelection if self.ui.class.confirm_open => {
                dialog = Some(pages::class_selection::confirm_dialog(
                    &self.ui.class,
                    locale,
                    scale,
                ));
            }
            ScreenId::NavigationRoute => {
                if self.ui.route.guide_open {
                    dialog = Some(pages::navigation_route::guide_dialog(locale, scale));
                }
                if self.ui.route.arrival_open {
                    dialog = Some(pages::navigation_route::arrival_dialog(locale, scale));
                }
            }
            _ => {}
        }
        if let Some(variant) = sos_variant(screen) {
            if self.ui.sos.confirm_open {
                dialog = Some(sos::confirm_dialog(variant, locale, scale));
            }
            if self.ui.sos.sent_open {
                dialog = Some(sos::sent_dialog(selection, locale, scale));
            }
        }
        let dialog_overlay = dialog.unwrap_or_else(|| Space::new().width(0).height(0).into());

        let toast_overlay: Element<'_, Message> = match &self.ui.toast {
            Some(toast) => container(widgets::view_toast(toast, scale))
                .width(Fill)
                .height(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .into(),
            None => Space::new().width(0).height(0).into(),
        };

        // Always use consistent stack structure to preserve scroll position
        stack![page, fade_overlay, dialog_overlay, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}

/// Screens with an SOS button and how their dialog is worded
fn sos_variant(screen: ScreenId) -> Option<SosVariant> {
    match screen {
        ScreenId::Home => Some(SosVariant::Location),
        ScreenId::NavigationRoute => Some(SosVariant::Call),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sos_only_on_home_and_route() {
        assert_eq!(sos_variant(ScreenId::Home), Some(SosVariant::Location));
        assert_eq!(sos_variant(ScreenId::NavigationRoute), Some(SosVariant::Call));
        assert_eq!(sos_variant(ScreenId::Login), None);
        assert_eq!(sos_variant(ScreenId::Feedback), None);
    }
}
