//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Vision");
    m.insert(Key::AppBrand, "afeka");

    // Common UI
    m.insert(Key::Back, "Back");
    m.insert(Key::Continue, "Continue");
    m.insert(Key::Cancel, "Cancel");
    m.insert(Key::GotIt, "Got it");
    m.insert(Key::Confirm, "OK");
    m.insert(Key::Sos, "SOS");
    m.insert(Key::Guide, "Guide");
    m.insert(Key::SettingsSaveFailed, "Could not save settings");

    // Tips
    m.insert(Key::TipTitle, "Accessibility tip");
    m.insert(Key::TipSos, "Use the SOS button at any time to get help");
    m.insert(
        Key::TipAdaptedRoutes,
        "Navigation routes are adapted to the accessibility needs you set",
    );
    m.insert(
        Key::TipReducedMotion,
        "Animations can be turned off in the accessibility settings",
    );
    m.insert(
        Key::TipScreenReader,
        "Every action comes with a spoken description for screen readers",
    );

    // Login
    m.insert(Key::LoginUsername, "Username");
    m.insert(Key::LoginPassword, "Password");
    m.insert(Key::LoginButton, "Log in");
    m.insert(Key::LoginRegister, "No account? Register here");
    m.insert(
        Key::LoginRegisterUnavailable,
        "Registration is not available yet",
    );
    m.insert(Key::LoginGuest, "Continue without an account");
    m.insert(Key::LoginAccessibilitySettings, "Accessibility settings");

    // Preferences dialog
    m.insert(Key::PrefsTitle, "Accessibility settings");
    m.insert(Key::PrefHighContrast, "High contrast");
    m.insert(Key::PrefLargeText, "Large text");
    m.insert(Key::PrefReducedMotion, "Reduce animations");
    m.insert(Key::PrefDarkMode, "Dark mode");
    m.insert(Key::PrefLanguage, "Language");

    // Accessibility options
    m.insert(Key::AccessibilityTitle, "Accessibility settings");
    m.insert(
        Key::AccessibilityHeading,
        "Please choose the adjustments you need",
    );
    m.insert(
        Key::AccessibilitySubheading,
        "The app adapts to your choices. You can choose more than one option.",
    );
    m.insert(Key::AccessibilityColorsHeading, "Choose colors to avoid:");
    m.insert(Key::OptionWheelchair, "Wheelchair access");
    m.insert(
        Key::OptionWheelchairDesc,
        "Routes suitable for wheelchairs and people with limited mobility",
    );
    m.insert(Key::OptionVisual, "Visual impairment");
    m.insert(
        Key::OptionVisualDesc,
        "Adjustments for people who are blind or have low vision",
    );
    m.insert(Key::OptionColorblind, "Color blindness");
    m.insert(
        Key::OptionColorblindDesc,
        "Color adjustments for people with color blindness",
    );
    m.insert(Key::OptionHearing, "Hearing impairment");
    m.insert(
        Key::OptionHearingDesc,
        "Adjustments for people who are deaf or hard of hearing",
    );
    m.insert(Key::OptionStroller, "Baby stroller");
    m.insert(Key::OptionStrollerDesc, "Routes suitable for strollers");
    m.insert(Key::OptionElderly, "Walking difficulty");
    m.insert(
        Key::OptionElderlyDesc,
        "Avoid stairs and difficult paths",
    );
    m.insert(Key::OptionNoise, "Noise sensitivity");
    m.insert(
        Key::OptionNoiseDesc,
        "Adjustments for people who are sensitive to noise",
    );
    m.insert(Key::ColorRed, "Red");
    m.insert(Key::ColorGreen, "Green");
    m.insert(Key::ColorBlue, "Blue");
    m.insert(Key::ColorPurple, "Purple");

    // Instructor notes
    m.insert(Key::NotesTitle, "Notes for the instructor");
    m.insert(
        Key::NotesHeading,
        "Would you like to add notes for the instructor?",
    );
    m.insert(
        Key::NotesDescription,
        "Mention special needs or requests here and they will reach the instructor before class.",
    );
    m.insert(
        Key::NotesPlaceholder,
        "For example: please speak loudly near the accessible seats...",
    );
    m.insert(
        Key::NotesSuggestionsHeading,
        "Based on the options you chose, we suggest mentioning:",
    );
    m.insert(
        Key::SuggestionWheelchair,
        "Wheelchair access and seating arrangement in the classroom",
    );
    m.insert(
        Key::SuggestionVisual,
        "Enlarged or accessible digital course material",
    );
    m.insert(
        Key::SuggestionColorblind,
        "Avoid slides that rely on telling colors apart",
    );
    m.insert(Key::SuggestionColorRed, "Difficulty recognising red");
    m.insert(Key::SuggestionColorGreen, "Difficulty recognising green");
    m.insert(Key::SuggestionColorBlue, "Difficulty recognising blue");
    m.insert(Key::SuggestionColorPurple, "Difficulty recognising purple");
    m.insert(
        Key::SuggestionHearing,
        "Clear speech and/or using a microphone",
    );
    m.insert(
        Key::SuggestionElderly,
        "Extra time between classes to move between classrooms",
    );
    m.insert(
        Key::SuggestionNoise,
        "Sensitivity to loud or sudden noises",
    );

    // Class selection
    m.insert(Key::ClassTitle, "Choose location");
    m.insert(Key::ClassSavedHeading, "Great! Your details were saved");
    m.insert(
        Key::ClassSavedSubheading,
        "Now we can tailor the exact route for you",
    );
    m.insert(Key::ClassChooseCampus, "Choose a campus:");
    m.insert(Key::ClassEnterClassroom, "Enter a classroom number:");
    m.insert(Key::ClassClassroomLabel, "Classroom number");
    m.insert(Key::ClassSave, "Save and continue to the route");
    m.insert(Key::ClassConfirmTitle, "Confirm details");
    m.insert(
        Key::ClassConfirmReserved,
        "A place is now reserved for you in classroom {classroom} at {campus}",
    );
    m.insert(
        Key::ClassConfirmInstructor,
        "The instructor has been told about your needs.",
    );
    m.insert(
        Key::ClassConfirmQuestion,
        "Shall we set off and tailor an exact route for you?",
    );
    m.insert(Key::ClassConfirmYes, "Yes, let's go!");
    m.insert(Key::ClassConfirmNo, "No, back to editing");
    m.insert(Key::CampusFicus, "Ficus");
    m.insert(Key::CampusFicusDesc, "Ficus campus - the main building");
    m.insert(Key::CampusKirya, "Kirya");
    m.insert(
        Key::CampusKiryaDesc,
        "Kirya campus - the innovation building",
    );

    // Seat selection
    m.insert(Key::SeatTitle, "Choose a seat");
    m.insert(Key::SeatClassroomCampus, "Classroom {classroom} - {campus}");
    m.insert(Key::SeatLegendAccessible, "Accessible seats");
    m.insert(Key::SeatLegendReserved, "Reserved seats");
    m.insert(Key::SeatLegendRegular, "Regular seats");
    m.insert(Key::SeatLecturerDesk, "Lecturer's desk");
    m.insert(Key::SeatChosen, "You chose seat {seat}");
    m.insert(Key::SeatIsAccessible, "This is an accessible seat");
    m.insert(Key::SeatIsRegular, "This is a regular seat");
    m.insert(Key::SeatSave, "Save and continue");

    // Home
    m.insert(Key::HomeTitle, "Accessible route");
    m.insert(Key::HomeReady, "Your route is ready!");
    m.insert(Key::HomeShowRoute, "Show accessible route");
    m.insert(Key::HomeDestination, "Destination:");
    m.insert(Key::HomeCampus, "Campus: {campus}");
    m.insert(Key::HomeClassroom, "Classroom: {classroom}");
    m.insert(Key::HomeSeat, "Seat: {seat}");
    m.insert(Key::HomeAccessibility, "Accessibility adjustments:");
    m.insert(
        Key::HomeNoAccessibility,
        "No accessibility adjustments chosen",
    );
    m.insert(Key::HomeNotes, "Notes for the instructor:");
    m.insert(Key::HomeNoNotes, "No notes for the instructor");
    m.insert(Key::HomeMoreOptions, "More options:");
    m.insert(Key::HomeRouteButton, "Accessible route");
    m.insert(Key::HomeFeedbackButton, "Give feedback");
    m.insert(
        Key::HomeSosHint,
        "Distress button - send your location for help",
    );

    // SOS
    m.insert(Key::SosTitle, "Distress button");
    m.insert(
        Key::SosMessage,
        "Do you need immediate help? Pressing 'Send location' alerts the college support team with your exact location.",
    );
    m.insert(Key::SosSendLocation, "Send location");
    m.insert(Key::SosCallTitle, "Call for help");
    m.insert(
        Key::SosCallMessage,
        "Do you need help? Pressing 'Send call' alerts the support team.",
    );
    m.insert(Key::SosCallSend, "Send call");
    m.insert(Key::LocationSentTitle, "Location sent");
    m.insert(
        Key::LocationSentMessage,
        "Your location was sent to the college support team. A staff member will contact you shortly.",
    );
    m.insert(
        Key::LocationSentWhere,
        "Location: {campus}, classroom {classroom}",
    );

    // Navigation route
    m.insert(Key::RouteTitle, "Accessible navigation");
    m.insert(Key::RouteDestination, "Classroom {classroom}, {campus} campus");
    m.insert(Key::RouteSeat, "Seat number {seat}");
    m.insert(Key::RouteArrived, "You have arrived!");
    m.insert(Key::RouteEta, "Estimated arrival: {minutes} min");
    m.insert(Key::RouteStepCounter, "Step {step}/{total}");
    m.insert(Key::RouteCurrentLocation, "Current location:");
    m.insert(Key::RouteConfirmArrival, "Confirm arrival");
    m.insert(
        Key::RouteStepExitMain,
        "Leave through the main entrance and go along the main corridor",
    );
    m.insert(Key::RouteStepTurnLeft, "Turn left at the next corridor");
    m.insert(
        Key::RouteStepTowardsCampus,
        "Continue straight towards the {campus} campus",
    );
    m.insert(Key::RouteStepTurnRight, "Turn right at the central passage");
    m.insert(
        Key::RouteStepElevator,
        "Take the accessible elevator to the second floor",
    );
    m.insert(
        Key::RouteStepToClassroom,
        "Continue along the corridor to classroom {classroom}",
    );
    m.insert(Key::RouteLocationMainEntrance, "Main entrance");
    m.insert(Key::RouteLocationMainCorridor, "Main corridor");
    m.insert(Key::RouteLocationKiryaCampus, "Kirya campus");
    m.insert(Key::RouteLocationCampus, "{campus} campus");
    m.insert(Key::RouteLocationElevator, "Elevator, floor 2");
    m.insert(Key::RouteLocationClassroom, "Classroom {classroom}");
    m.insert(Key::RouteGuideTitle, "Navigation guide");
    m.insert(
        Key::RouteGuideReady,
        "The accessible route to classroom {classroom} at {campus} is ready!",
    );
    m.insert(
        Key::RouteGuideAdapted,
        "• The route is adapted to the accessibility needs you chose",
    );
    m.insert(
        Key::RouteGuideFollow,
        "• Make sure to follow the instructions at every step",
    );
    m.insert(
        Key::RouteGuideSos,
        "• A red SOS button is available in an emergency",
    );
    m.insert(Key::RouteStart, "Start navigation");
    m.insert(Key::RouteArrivalTitle, "Arrival confirmation");
    m.insert(
        Key::RouteArrivalQuestion,
        "Have you reached classroom {classroom} at the {campus} campus?",
    );
    m.insert(
        Key::RouteArrivalHint,
        "You can go back to the main screen or continue to feedback.",
    );
    m.insert(Key::RouteToFeedback, "Continue to feedback");
    m.insert(Key::RouteToHome, "Back to main screen");

    // Feedback
    m.insert(Key::FeedbackTitle, "Reviews and feedback");
    m.insert(Key::FeedbackHeading, "Share your experience!");
    m.insert(Key::FeedbackThanks, "Thank you for your feedback!");
    m.insert(
        Key::FeedbackThanksBody,
        "Your feedback helps us improve the service and accessibility at the college.",
    );
    m.insert(Key::FeedbackSend, "Send feedback");
    m.insert(Key::FeedbackSending, "Sending...");
    m.insert(
        Key::FeedbackRateInstructor,
        "Did the instructor consider your accessibility needs?",
    );
    m.insert(
        Key::FeedbackRateClassroom,
        "How would you rate the classroom's accessibility?",
    );
    m.insert(
        Key::FeedbackRateApp,
        "How much did the app help you reach your destination?",
    );
    m.insert(Key::FeedbackCommentHeading, "Add more comments:");
    m.insert(
        Key::FeedbackCommentPlaceholder,
        "Share your experience, suggestions for improvement...",
    );
    m.insert(
        Key::FeedbackImprovementsHeading,
        "Do you have specific suggestions for improving accessibility?",
    );
    m.insert(Key::RatingNone, "Not rated");
    m.insert(Key::RatingVeryBad, "Very bad");
    m.insert(Key::RatingBad, "Not good");
    m.insert(Key::RatingOkay, "Okay");
    m.insert(Key::RatingGood, "Good");
    m.insert(Key::RatingExcellent, "Excellent");
    m.insert(Key::ImprovementSeats, "More accessible seats");
    m.insert(Key::ImprovementLighting, "Better classroom lighting");
    m.insert(Key::ImprovementAcoustics, "Better acoustics");
    m.insert(
        Key::ImprovementBetweenClassrooms,
        "Better accessibility between classrooms",
    );

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
