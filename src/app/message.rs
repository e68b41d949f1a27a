//! Application messages

use iced::time::Instant;
use iced::widget::text_editor;

use crate::features::accessibility::Campus;
use crate::features::feedback::{Improvement, RatingTopic};
use crate::features::{Preference, SeatId, Visit};
use crate::i18n::Language;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for event interception (modal backdrop clicks)
    Noop,

    // ============ Navigation ============
    /// Back arrow in the top bar
    Back,
    /// Transition animation for this visit has played out
    TransitionSettled(Visit),
    /// Frame tick while an animation runs
    AnimationTick(Instant),
    /// The main window was closed
    WindowClosed,
    /// Pointer entered (Some) or left (None) a choice card
    CardHovered(Option<&'static str>),

    // ============ Settings ============
    OpenPreferences,
    ClosePreferences,
    PreferenceToggled(Preference, bool),
    DarkModeToggled(bool),
    LanguageSelected(Language),
    /// Hide the toast with this generation, if it is still showing
    HideToast(u64),

    // ============ Tips ============
    ShowTip,
    HideTip,
    DismissTip,

    // ============ Login ============
    UsernameChanged(String),
    PasswordChanged(String),
    LoginPressed,
    GuestPressed,
    RegisterPressed,

    // ============ Accessibility options ============
    OptionToggled(&'static str),
    ColorToggled(&'static str),
    AccessibilitySubmit,

    // ============ Instructor notes ============
    NotesEdited(text_editor::Action),
    NotesSubmit,

    // ============ Class selection ============
    CampusSelected(Campus),
    ClassroomChanged(String),
    ClassSavePressed,
    ClassConfirm,
    ClassCancel,

    // ============ Seat selection ============
    SeatSelected(SeatId),
    SeatSubmit,

    // ============ Home ============
    StartRoute,
    OpenFeedback,

    // ============ SOS ============
    SosOpen,
    SosCancel,
    SosSend,
    /// Location report for this visit has gone out
    LocationSent(Visit),
    LocationSentDismiss,

    // ============ Navigation route ============
    GuideOpen,
    GuideDismiss,
    RouteTick,
    /// Completion pause for this visit is over
    ArrivalPrompt(Visit),
    ConfirmArrivalPressed,
    ArrivalToFeedback,
    ArrivalToHome,

    // ============ Feedback ============
    RatingChanged(RatingTopic, u8),
    FeedbackCommentEdited(text_editor::Action),
    ImprovementToggled(Improvement, bool),
    FeedbackSubmit,
    /// Simulated send for this visit has finished
    FeedbackSubmitted(Visit),
    FeedbackContinue,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal
            Self::AnimationTick(_) => simple!("AnimationTick"),
            Self::RouteTick => simple!("RouteTick"),
            Self::Noop => simple!("Noop"),

            Self::WindowClosed => simple!("WindowClosed"),
            Self::Back => simple!("Back"),
            Self::TransitionSettled(v) => simple!("TransitionSettled", "{:?}", v),
            Self::CardHovered(id) => simple!("CardHovered", "{:?}", id),

            Self::OpenPreferences => simple!("OpenPreferences"),
            Self::ClosePreferences => simple!("ClosePreferences"),
            Self::PreferenceToggled(p, b) => simple!("PreferenceToggled", "{:?}, {}", p, b),
            Self::DarkModeToggled(b) => simple!("DarkModeToggled", "{}", b),
            Self::LanguageSelected(l) => simple!("LanguageSelected", "{}", l.code()),
            Self::HideToast(id) => simple!("HideToast", "{}", id),

            Self::ShowTip => simple!("ShowTip"),
            Self::HideTip => simple!("HideTip"),
            Self::DismissTip => simple!("DismissTip"),

            // Credentials are never printed
            Self::UsernameChanged(_) => simple!("UsernameChanged"),
            Self::PasswordChanged(_) => simple!("PasswordChanged"),
            Self::LoginPressed => simple!("LoginPressed"),
            Self::GuestPressed => simple!("GuestPressed"),
            Self::RegisterPressed => simple!("RegisterPressed"),

            Self::OptionToggled(id) => simple!("OptionToggled", "{}", id),
            Self::ColorToggled(id) => simple!("ColorToggled", "{}", id),
            Self::AccessibilitySubmit => simple!("AccessibilitySubmit"),

            Self::NotesEdited(_) => simple!("NotesEdited"),
            Self::NotesSubmit => simple!("NotesSubmit"),

            Self::CampusSelected(c) => simple!("CampusSelected", "{}", c.id()),
            Self::ClassroomChanged(v) => simple!("ClassroomChanged", "{}", v),
            Self::ClassSavePressed => simple!("ClassSavePressed"),
            Self::ClassConfirm => simple!("ClassConfirm"),
            Self::ClassCancel => simple!("ClassCancel"),

            Self::SeatSelected(s) => simple!("SeatSelected", "{}", s),
            Self::SeatSubmit => simple!("SeatSubmit"),

            Self::StartRoute => simple!("StartRoute"),
            Self::OpenFeedback => simple!("OpenFeedback"),

            Self::SosOpen => simple!("SosOpen"),
            Self::SosCancel => simple!("SosCancel"),
            Self::SosSend => simple!("SosSend"),
            Self::LocationSent(v) => simple!("LocationSent", "{:?}", v),
            Self::LocationSentDismiss => simple!("LocationSentDismiss"),

            Self::GuideOpen => simple!("GuideOpen"),
            Self::GuideDismiss => simple!("GuideDismiss"),
            Self::ArrivalPrompt(v) => simple!("ArrivalPrompt", "{:?}", v),
            Self::ConfirmArrivalPressed => simple!("ConfirmArrivalPressed"),
            Self::ArrivalToFeedback => simple!("ArrivalToFeedback"),
            Self::ArrivalToHome => simple!("ArrivalToHome"),

            Self::RatingChanged(t, n) => simple!("RatingChanged", "{:?}, {}", t, n),
            Self::FeedbackCommentEdited(_) => simple!("FeedbackCommentEdited"),
            Self::ImprovementToggled(i, b) => simple!("ImprovementToggled", "{:?}, {}", i, b),
            Self::FeedbackSubmit => simple!("FeedbackSubmit"),
            Self::FeedbackSubmitted(v) => simple!("FeedbackSubmitted", "{:?}", v),
            Self::FeedbackContinue => simple!("FeedbackContinue"),
        }
    }
}
