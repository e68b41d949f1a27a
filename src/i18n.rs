//! Internationalization (i18n) support for Vision
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - he.rs: Hebrew translations
//!
//! Some strings are templates with named `{placeholders}`; fill them with
//! [`Locale::fill`].

mod en;
mod he;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Hebrew,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hebrew => "עברית",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hebrew => "he",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().iter().copied().find(|l| l.code() == code)
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Hebrew]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,
    AppBrand,

    // Common UI
    Back,
    Continue,
    Cancel,
    GotIt,
    Confirm,
    Sos,
    Guide,
    SettingsSaveFailed,

    // Tips
    TipTitle,
    TipSos,
    TipAdaptedRoutes,
    TipReducedMotion,
    TipScreenReader,

    // Login
    LoginUsername,
    LoginPassword,
    LoginButton,
    LoginRegister,
    LoginRegisterUnavailable,
    LoginGuest,
    LoginAccessibilitySettings,

    // Preferences dialog
    PrefsTitle,
    PrefHighContrast,
    PrefLargeText,
    PrefReducedMotion,
    PrefDarkMode,
    PrefLanguage,

    // Accessibility options
    AccessibilityTitle,
    AccessibilityHeading,
    AccessibilitySubheading,
    AccessibilityColorsHeading,
    OptionWheelchair,
    OptionWheelchairDesc,
    OptionVisual,
    OptionVisualDesc,
    OptionColorblind,
    OptionColorblindDesc,
    OptionHearing,
    OptionHearingDesc,
    OptionStroller,
    OptionStrollerDesc,
    OptionElderly,
    OptionElderlyDesc,
    OptionNoise,
    OptionNoiseDesc,
    ColorRed,
    ColorGreen,
    ColorBlue,
    ColorPurple,

    // Instructor notes
    NotesTitle,
    NotesHeading,
    NotesDescription,
    NotesPlaceholder,
    NotesSuggestionsHeading,
    SuggestionWheelchair,
    SuggestionVisual,
    SuggestionColorblind,
    SuggestionColorRed,
    SuggestionColorGreen,
    SuggestionColorBlue,
    SuggestionColorPurple,
    SuggestionHearing,
    SuggestionElderly,
    SuggestionNoise,

    // Class selection
    ClassTitle,
    ClassSavedHeading,
    ClassSavedSubheading,
    ClassChooseCampus,
    ClassEnterClassroom,
    ClassClassroomLabel,
    ClassSave,
    ClassConfirmTitle,
    ClassConfirmReserved,
    ClassConfirmInstructor,
    ClassConfirmQuestion,
    ClassConfirmYes,
    ClassConfirmNo,
    CampusFicus,
    CampusFicusDesc,
    CampusKirya,
    CampusKiryaDesc,

    // Seat selection
    SeatTitle,
    SeatClassroomCampus,
    SeatLegendAccessible,
    SeatLegendReserved,
    SeatLegendRegular,
    SeatLecturerDesk,
    SeatChosen,
    SeatIsAccessible,
    SeatIsRegular,
    SeatSave,

    // Home
    HomeTitle,
    HomeReady,
    HomeShowRoute,
    HomeDestination,
    HomeCampus,
    HomeClassroom,
    HomeSeat,
    HomeAccessibility,
    HomeNoAccessibility,
    HomeNotes,
    HomeNoNotes,
    HomeMoreOptions,
    HomeRouteButton,
    HomeFeedbackButton,
    HomeSosHint,

    // SOS
    SosTitle,
    SosMessage,
    SosSendLocation,
    SosCallTitle,
    SosCallMessage,
    SosCallSend,
    LocationSentTitle,
    LocationSentMessage,
    LocationSentWhere,

    // Navigation route
    RouteTitle,
    RouteDestination,
    RouteSeat,
    RouteArrived,
    RouteEta,
    RouteStepCounter,
    RouteCurrentLocation,
    RouteConfirmArrival,
    RouteStepExitMain,
    RouteStepTurnLeft,
    RouteStepTowardsCampus,
    RouteStepTurnRight,
    RouteStepElevator,
    RouteStepToClassroom,
    RouteLocationMainEntrance,
    RouteLocationMainCorridor,
    RouteLocationKiryaCampus,
    RouteLocationCampus,
    RouteLocationElevator,
    RouteLocationClassroom,
    RouteGuideTitle,
    RouteGuideReady,
    RouteGuideAdapted,
    RouteGuideFollow,
    RouteGuideSos,
    RouteStart,
    RouteArrivalTitle,
    RouteArrivalQuestion,
    RouteArrivalHint,
    RouteToFeedback,
    RouteToHome,

    // Feedback
    FeedbackTitle,
    FeedbackHeading,
    FeedbackThanks,
    FeedbackThanksBody,
    FeedbackSend,
    FeedbackSending,
    FeedbackRateInstructor,
    FeedbackRateClassroom,
    FeedbackRateApp,
    FeedbackCommentHeading,
    FeedbackCommentPlaceholder,
    FeedbackImprovementsHeading,
    RatingNone,
    RatingVeryBad,
    RatingBad,
    RatingOkay,
    RatingGood,
    RatingExcellent,
    ImprovementSeats,
    ImprovementLighting,
    ImprovementAcoustics,
    ImprovementBetweenClassrooms,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Hebrew => he::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Replace each `{name}` in `template` with its value
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(template.to_string(), |out, (name, value)| {
        out.replace(&format!("{{{name}}}"), value)
    })
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }

    /// Translate a template key and fill its placeholders
    pub fn fill(&self, key: Key, args: &[(&str, &str)]) -> String {
        fill(self.get(key), args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_languages_cover_same_keys() {
        let english = en::translations();
        let hebrew = he::translations();
        assert_eq!(english.len(), hebrew.len());
        for key in english.keys() {
            assert!(hebrew.contains_key(key), "{key:?} missing in Hebrew");
        }
    }

    #[test]
    fn test_language_codes() {
        for lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), Some(*lang));
        }
        assert_eq!(Language::from_code("zz"), None);
    }

    #[test]
    fn test_fill_placeholders() {
        let locale = Locale::new(Language::English);
        assert_eq!(
            locale.fill(
                Key::RouteArrivalQuestion,
                &[("classroom", "204"), ("campus", "Kirya")]
            ),
            "Have you reached classroom 204 at the Kirya campus?"
        );
        assert_eq!(fill("{a}{a}{b}", &[("a", "x")]), "xx{b}");
    }

    #[test]
    fn test_missing_key_marker() {
        let english = en::translations();
        assert!(english.contains_key(&Key::RatingExcellent));
        assert_ne!(t(Language::Hebrew, Key::AppName), "???");
    }
}
