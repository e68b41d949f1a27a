//! Settings, toast and tip handlers

use iced::Task;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::{Preference, ScreenId, tips};
use crate::i18n::{Key, Locale};
use crate::ui::widgets::{TOAST_DURATION, Toast};

impl App {
    /// Handle settings-related messages
    pub(super) fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenPreferences => {
                self.ui.preferences_open = true;
                Some(Task::none())
            }

            Message::ClosePreferences => {
                self.ui.preferences_open = false;
                Some(Task::none())
            }

            Message::PreferenceToggled(preference, enabled) => {
                tracing::info!(?preference, enabled, "Accessibility preference changed");
                self.core.settings.accessibility.set(*preference, *enabled);
                if *preference == Preference::ReducedMotion && *enabled {
                    self.ui.screen_fade = Default::default();
                }
                Some(self.save_settings())
            }

            Message::DarkModeToggled(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                Some(self.save_settings())
            }

            Message::LanguageSelected(language) => {
                tracing::info!("Language changed to {}", language.code());
                self.core.settings.display.language = language.code().to_string();
                self.core.locale = Locale::new(*language);
                Some(self.save_settings())
            }

            Message::HideToast(generation) => {
                if *generation == self.ui.toast_generation {
                    self.ui.toast = None;
                }
                Some(Task::none())
            }

            Message::ShowTip => {
                if self.router.current() != ScreenId::Login || self.ui.tip.shown.is_some() {
                    return Some(Task::none());
                }
                self.ui.tip.shown = Some(tips::random_tip());
                if !self.core.settings.accessibility.reduced_motion {
                    self.ui.tip.fade.restart();
                }
                Some(Task::perform(
                    helpers::after(tips::VISIBLE_FOR, ()),
                    |_| Message::HideTip,
                ))
            }

            Message::HideTip | Message::DismissTip => {
                self.ui.tip.shown = None;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Persist the current settings, toasting on failure
    fn save_settings(&mut self) -> Task<Message> {
        let Some(path) = &self.core.settings_path else {
            return Task::none();
        };
        match helpers::persist_settings(&self.core.settings, path) {
            Ok(()) => {
                tracing::debug!("Settings saved");
                Task::none()
            }
            Err(e) => {
                tracing::error!("Failed to save settings: {e:#}");
                let text = self.core.locale.get(Key::SettingsSaveFailed);
                self.show_toast(Toast::error(text))
            }
        }
    }

    /// Show a toast and schedule its dismissal
    pub(super) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.ui.toast_generation += 1;
        self.ui.toast = Some(toast);
        let generation = self.ui.toast_generation;
        Task::perform(helpers::after(TOAST_DURATION, generation), Message::HideToast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::Settings;
    use crate::i18n::Language;

    #[test]
    fn test_stale_hide_toast_is_ignored() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.show_toast(Toast::info("first"));
        let first = app.ui.toast_generation;
        let _ = app.show_toast(Toast::info("second"));

        let _ = app.update(Message::HideToast(first));
        assert_eq!(app.ui.toast.as_ref().map(|t| t.message.as_str()), Some("second"));

        let _ = app.update(Message::HideToast(app.ui.toast_generation));
        assert!(app.ui.toast.is_none());
    }

    #[test]
    fn test_preferences_apply_immediately() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::PreferenceToggled(Preference::LargeText, true));
        assert!(app.core.settings.accessibility.large_text);

        let _ = app.update(Message::LanguageSelected(Language::Hebrew));
        assert_eq!(app.core.locale.language, Language::Hebrew);
        assert_eq!(app.core.settings.display.language, "he");
    }

    #[test]
    fn test_rapid_changes_persist_latest_state() {
        let dir = std::env::temp_dir().join(format!("vision-rapid-{}", std::process::id()));
        let path = dir.join("settings.json");
        let mut app = App::with_settings(Settings::default());
        app.core.settings_path = Some(path.clone());

        for round in 0..8 {
            let on = round % 2 == 0;
            let _ = app.update(Message::PreferenceToggled(Preference::HighContrast, on));
            let _ = app.update(Message::DarkModeToggled(!on));
            let _ = app.update(Message::PreferenceToggled(Preference::LargeText, round % 3 == 0));
        }
        let _ = app.update(Message::LanguageSelected(Language::Hebrew));

        let stored = Settings::load_from_file(&path).expect("settings file");
        assert_eq!(stored, app.core.settings);
        assert!(app.ui.toast.is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_failed_save_shows_error_toast() {
        let dir = std::env::temp_dir().join(format!("vision-blocked-{}", std::process::id()));
        let path = dir.join("settings.json");
        std::fs::create_dir_all(&path).expect("blocker");
        let mut app = App::with_settings(Settings::default());
        app.core.settings_path = Some(path);

        let _ = app.update(Message::DarkModeToggled(true));
        assert!(app.core.settings.display.dark_mode);
        assert!(app.ui.toast.is_some());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_tip_only_on_login() {
        let mut app = App::with_settings(Settings::default());
        let _ = app.update(Message::ShowTip);
        assert!(app.ui.tip.shown.is_some());

        let _ = app.update(Message::DismissTip);
        assert!(app.ui.tip.shown.is_none());

        app.core.settings.accessibility.reduced_motion = true;
        let _ = app.update(Message::GuestPressed);
        let _ = app.update(Message::ShowTip);
        assert!(app.ui.tip.shown.is_none());
    }
}
