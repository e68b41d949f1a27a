//! Application state definitions

use std::path::PathBuf;

use iced::time::Instant;
use iced::widget::text_editor;

use crate::features::accessibility::{AccessibilityForm, Campus};
use crate::features::feedback::FeedbackForm;
use crate::features::route::RouteSimulation;
use crate::features::seating::SeatMap;
use crate::features::{Motion, Router, ScreenId, SeatId, SelectionState, Settings};
use crate::i18n::Locale;
use crate::ui::animation::{Fade, HoverAnimations};
use crate::ui::theme::TextScale;
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Settings and locale
    pub core: CoreState,
    /// Current screen and everything the user has chosen so far
    pub router: Router,
    /// Per-screen form state, dialogs and animations
    pub ui: UiState,
}

/// Settings and the values derived from them
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// Where settings changes are written; `None` keeps them in memory
    pub settings_path: Option<PathBuf>,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let locale = Locale::new(settings.display.language());
        Self {
            settings,
            locale,
            settings_path: None,
        }
    }

    pub fn motion(&self) -> Motion {
        Motion::from_reduced(self.settings.accessibility.reduced_motion)
    }

    pub fn text_scale(&self) -> TextScale {
        TextScale::from_large_text(self.settings.accessibility.large_text)
    }
}

/// Login form fields
#[derive(Debug, Clone, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
}

impl LoginState {
    /// Both fields must be filled before "Log in" acts
    pub fn can_submit(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }
}

/// Random accessibility tip on the login screen
#[derive(Debug, Default)]
pub struct TipState {
    /// Index into the tip list while the card is up
    pub shown: Option<usize>,
    pub fade: Fade,
}

#[derive(Debug, Clone, Default)]
pub struct ClassState {
    pub campus: Option<Campus>,
    pub classroom: String,
    pub confirm_open: bool,
}

impl ClassState {
    /// The save button needs a campus and a non-empty classroom
    pub fn can_save(&self) -> bool {
        self.campus.is_some() && !self.classroom.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SeatState {
    pub map: SeatMap,
    pub selected: SeatId,
}

impl Default for SeatState {
    fn default() -> Self {
        Self {
            map: SeatMap::lecture_hall(),
            selected: SeatId::FIRST,
        }
    }
}

/// Distress dialogs shared by the home and route screens
#[derive(Debug, Clone, Copy, Default)]
pub struct SosState {
    pub confirm_open: bool,
    pub sent_open: bool,
}

#[derive(Debug, Clone, Default)]
pub struct RouteState {
    pub simulation: RouteSimulation,
    pub guide_open: bool,
    pub arrival_open: bool,
}

pub struct FeedbackState {
    pub form: FeedbackForm,
    pub comment: text_editor::Content,
}

impl Default for FeedbackState {
    fn default() -> Self {
        Self {
            form: FeedbackForm::default(),
            comment: text_editor::Content::new(),
        }
    }
}

/// UI state: dialogs, animations and the form of each screen
pub struct UiState {
    pub toast: Option<Toast>,
    /// Bumped on every new toast so an old hide timer cannot close it
    pub toast_generation: u64,
    /// Fades the page in after a screen change
    pub screen_fade: Fade,
    /// Hover highlight for choice cards, keyed by option or campus id
    pub card_hover: HoverAnimations<&'static str>,
    pub preferences_open: bool,
    pub tip: TipState,

    pub login: LoginState,
    pub accessibility: AccessibilityForm,
    pub notes: text_editor::Content,
    pub class: ClassState,
    pub seat: SeatState,
    pub sos: SosState,
    pub route: RouteState,
    pub feedback: FeedbackState,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            toast: None,
            toast_generation: 0,
            screen_fade: Fade::visible(),
            card_hover: HoverAnimations::default(),
            preferences_open: false,
            tip: TipState::default(),
            login: LoginState::default(),
            accessibility: AccessibilityForm::default(),
            notes: text_editor::Content::new(),
            class: ClassState::default(),
            seat: SeatState::default(),
            sos: SosState::default(),
            route: RouteState::default(),
            feedback: FeedbackState::default(),
        }
    }

    /// Reset the state of `screen` for a fresh visit, prefilled from what
    /// the user chose on earlier visits
    pub fn enter(&mut self, screen: ScreenId, selection: &SelectionState) {
        self.card_hover.clear();
        self.preferences_open = false;
        self.sos = SosState::default();
        if screen != ScreenId::Login {
            self.tip = TipState::default();
        }

        match screen {
            ScreenId::Login => {
                self.login = LoginState::default();
            }
            ScreenId::AccessibilityOptions => {
                self.accessibility = AccessibilityForm::from_selected(
                    selection.accessibility_options().iter().map(String::as_str),
                    selection.avoided_colors(),
                );
            }
            ScreenId::InstructorNotes => {
                self.notes = text_editor::Content::with_text(&selection.instructor_notes);
            }
            ScreenId::ClassSelection => {
                self.class = ClassState {
                    campus: Campus::from_id(&selection.campus),
                    classroom: selection.classroom.clone(),
                    confirm_open: false,
                };
            }
            ScreenId::SeatSelection => {
                let map = SeatMap::lecture_hall();
                let selected = selection
                    .seat
                    .filter(|seat| map.can_select(*seat))
                    .unwrap_or(SeatId::FIRST);
                self.seat = SeatState { map, selected };
            }
            ScreenId::NavigationRoute => {
                self.route = RouteState {
                    simulation: RouteSimulation::default(),
                    guide_open: true,
                    arrival_open: false,
                };
            }
            ScreenId::Feedback => {
                self.feedback = FeedbackState::default();
            }
            ScreenId::Home => {}
        }
    }

    /// Any animation that needs frame ticks
    pub fn has_active_animations(&self) -> bool {
        self.screen_fade.is_animating()
            || self.card_hover.is_animating()
            || self.tip.fade.is_animating()
    }

    pub fn tick_animations(&mut self, now: Instant) {
        self.screen_fade.tick(now);
        self.card_hover.tick(now);
        self.tip.fade.tick(now);
    }
}
