//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{Router, ScreenId, Settings, tips};
use crate::i18n::Key;
pub use message::Message;
pub use state::{
    App, ClassState, CoreState, FeedbackState, LoginState, RouteState, SeatState, TipState,
    UiState,
};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let mut app = Self::with_settings(settings);
        app.core.settings_path = Settings::file_path();

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(480.0, 860.0),
            min_size: Some(iced::Size::new(360.0, 600.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "vision".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        let init_task = Task::batch([
            open_window.discard(),
            Task::perform(helpers::after(tips::SHOW_DELAY, ()), |_| Message::ShowTip),
        ]);

        (app, init_task)
    }

    /// Build the state for `settings` without touching the window system
    pub fn with_settings(settings: Settings) -> Self {
        let core = CoreState::new(settings);
        let router = Router::new();
        let mut ui = UiState::new();
        ui.enter(router.current(), router.selection());
        Self { core, router, ui }
    }

    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        crate::ui::theme::app_theme(
            self.core.settings.display.dark_mode,
            self.core.settings.accessibility.high_contrast,
        )
    }

    /// Window title: app name and the current screen
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let locale = self.core.locale;
        match self.router.current() {
            ScreenId::Login => locale.get(Key::AppName).to_string(),
            screen => format!(
                "{} - {}",
                locale.get(Key::AppName),
                locale.get(screen_title(screen))
            ),
        }
    }

    /// Subscriptions for animations, the route ticker and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use crate::features::route::TICK_INTERVAL;

        let animation_sub = if self.ui.has_active_animations() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        let route_sub = if subscription_logic::needs_route_tick(
            self.router.current(),
            self.ui.route.simulation.is_complete(),
        ) {
            iced::time::every(TICK_INTERVAL).map(|_| Message::RouteTick)
        } else {
            iced::Subscription::none()
        };

        let close_sub = iced::window::close_events().map(|_id| Message::WindowClosed);

        iced::Subscription::batch([animation_sub, route_sub, close_sub])
    }
}

/// Heading shown in the top bar and the window title for each screen
pub fn screen_title(screen: ScreenId) -> Key {
    match screen {
        ScreenId::Login => Key::AppName,
        ScreenId::AccessibilityOptions => Key::AccessibilityTitle,
        ScreenId::InstructorNotes => Key::NotesTitle,
        ScreenId::ClassSelection => Key::ClassTitle,
        ScreenId::SeatSelection => Key::SeatTitle,
        ScreenId::NavigationRoute => Key::RouteTitle,
        ScreenId::Feedback => Key::FeedbackTitle,
        ScreenId::Home => Key::HomeTitle,
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use crate::features::ScreenId;

    /// The route ticker lives only while the route screen is up and the
    /// walk is unfinished
    pub fn needs_route_tick(screen: ScreenId, route_complete: bool) -> bool {
        screen == ScreenId::NavigationRoute && !route_complete
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;
    use super::*;

    #[test]
    fn test_route_tick_gating() {
        assert!(needs_route_tick(ScreenId::NavigationRoute, false));
        assert!(!needs_route_tick(ScreenId::NavigationRoute, true));
        assert!(!needs_route_tick(ScreenId::Home, false));
    }

    #[test]
    fn test_starts_on_login() {
        let app = App::with_settings(Settings::default());
        assert_eq!(app.router.current(), ScreenId::Login);
        assert!(app.router.selection().accessibility_options().is_empty());
        assert!(!app.ui.has_active_animations());
    }

    #[test]
    fn test_full_flow() {
        use crate::features::accessibility::Campus;

        let mut settings = Settings::default();
        settings.accessibility.reduced_motion = true;
        let mut app = App::with_settings(settings);

        let _ = app.update(Message::GuestPressed);
        let _ = app.update(Message::OptionToggled("wheelchair"));
        let _ = app.update(Message::AccessibilitySubmit);
        let _ = app.update(Message::NotesSubmit);
        let _ = app.update(Message::CampusSelected(Campus::Ficus));
        let _ = app.update(Message::ClassroomChanged("101".into()));
        let _ = app.update(Message::ClassSavePressed);
        let _ = app.update(Message::ClassConfirm);
        let _ = app.update(Message::SeatSubmit);

        assert_eq!(app.router.current(), ScreenId::Home);
        let selection = app.router.selection();
        assert!(selection.has_option("wheelchair"));
        assert_eq!(selection.campus, "ficus");
        assert_eq!(selection.classroom, "101");
        assert_eq!(selection.seat.map(|s| s.get()), Some(1));
    }
}
