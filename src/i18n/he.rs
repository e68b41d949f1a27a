//! Hebrew translations (עברית)

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Vision");
    m.insert(Key::AppBrand, "afeka");

    // Common UI
    m.insert(Key::Back, "חזרה");
    m.insert(Key::Continue, "המשך");
    m.insert(Key::Cancel, "ביטול");
    m.insert(Key::GotIt, "הבנתי");
    m.insert(Key::Confirm, "אישור");
    m.insert(Key::Sos, "SOS");
    m.insert(Key::Guide, "הנחיות");
    m.insert(Key::SettingsSaveFailed, "שמירת ההגדרות נכשלה");

    // Tips
    m.insert(Key::TipTitle, "טיפ נגישות");
    m.insert(Key::TipSos, "השתמש בכפתור SOS בכל זמן לקבלת עזרה");
    m.insert(
        Key::TipAdaptedRoutes,
        "מסלולי הניווט מותאמים לצרכי הנגישות שהגדרת",
    );
    m.insert(Key::TipReducedMotion, "ניתן לבטל אנימציות בהגדרות הנגישות");
    m.insert(
        Key::TipScreenReader,
        "כל הפעולות מלוות בהסברים קוליים עבור קוראי מסך",
    );

    // Login
    m.insert(Key::LoginUsername, "שם משתמש");
    m.insert(Key::LoginPassword, "סיסמה");
    m.insert(Key::LoginButton, "התחברות");
    m.insert(Key::LoginRegister, "אין לך חשבון? הירשם כאן");
    m.insert(Key::LoginRegisterUnavailable, "ההרשמה עדיין אינה זמינה");
    m.insert(Key::LoginGuest, "כניסה ללא חשבון");
    m.insert(Key::LoginAccessibilitySettings, "הגדרות נגישות");

    // Preferences dialog
    m.insert(Key::PrefsTitle, "הגדרות נגישות");
    m.insert(Key::PrefHighContrast, "ניגודיות גבוהה");
    m.insert(Key::PrefLargeText, "טקסט מוגדל");
    m.insert(Key::PrefReducedMotion, "הפחתת אנימציות");
    m.insert(Key::PrefDarkMode, "מצב כהה");
    m.insert(Key::PrefLanguage, "שפה");

    // Accessibility options
    m.insert(Key::AccessibilityTitle, "הגדרות נגישות");
    m.insert(Key::AccessibilityHeading, "אנא בחר את ההתאמות הנדרשות עבורך");
    m.insert(
        Key::AccessibilitySubheading,
        "האפליקציה תותאם לצרכים שתבחר. ניתן לבחור מספר אפשרויות.",
    );
    m.insert(Key::AccessibilityColorsHeading, "בחר צבעים להימנעות:");
    m.insert(Key::OptionWheelchair, "נגישות לכיסא גלגלים");
    m.insert(
        Key::OptionWheelchairDesc,
        "מסלולים נגישים לכיסאות גלגלים ואנשים עם מוגבלות בניידות",
    );
    m.insert(Key::OptionVisual, "לקויות ראייה");
    m.insert(Key::OptionVisualDesc, "התאמות לאנשים עם עיוורון או לקות ראייה");
    m.insert(Key::OptionColorblind, "עיוורון צבעים");
    m.insert(Key::OptionColorblindDesc, "התאמות צבעים לאנשים עם עיוורון צבעים");
    m.insert(Key::OptionHearing, "לקויות שמיעה");
    m.insert(Key::OptionHearingDesc, "התאמות לאנשים עם חירשות או לקויות שמיעה");
    m.insert(Key::OptionStroller, "עגלת תינוק");
    m.insert(Key::OptionStrollerDesc, "מסלולים נגישים לעגלות תינוק");
    m.insert(Key::OptionElderly, "מגבלה בהליכה");
    m.insert(Key::OptionElderlyDesc, "הימנעות ממדרגות ומדרכים מסובכות");
    m.insert(Key::OptionNoise, "רגישות לרעש");
    m.insert(Key::OptionNoiseDesc, "התאמות לאנשים עם רגישות לרעש");
    m.insert(Key::ColorRed, "אדום");
    m.insert(Key::ColorGreen, "ירוק");
    m.insert(Key::ColorBlue, "כחול");
    m.insert(Key::ColorPurple, "סגול");

    // Instructor notes
    m.insert(Key::NotesTitle, "דגשים למרצה");
    m.insert(Key::NotesHeading, "האם תרצה להוסיף דגשים למרצה?");
    m.insert(
        Key::NotesDescription,
        "כאן תוכל לציין דגשים מיוחדים או בקשות שיועברו למרצה לפני השיעור.",
    );
    m.insert(
        Key::NotesPlaceholder,
        "לדוגמה: אני זקוק בבקשה שתדבר בקול רם קרוב למושבים המונגשים...",
    );
    m.insert(
        Key::NotesSuggestionsHeading,
        "בהתאם לאפשרויות הנגישות שבחרת, אנו ממליצים לציין:",
    );
    m.insert(
        Key::SuggestionWheelchair,
        "צורך בנגישות לכיסא גלגלים וסידור מקומות הישיבה בכיתה",
    );
    m.insert(
        Key::SuggestionVisual,
        "העדפה לקבל חומרי לימוד מוגדלים או בפורמט דיגיטלי נגיש",
    );
    m.insert(
        Key::SuggestionColorblind,
        "בקשה להימנע משימוש בשקפים המסתמכים על הבחנה בין צבעים",
    );
    m.insert(Key::SuggestionColorRed, "קושי בזיהוי צבע אדום");
    m.insert(Key::SuggestionColorGreen, "קושי בזיהוי צבע ירוק");
    m.insert(Key::SuggestionColorBlue, "קושי בזיהוי צבע כחול");
    m.insert(Key::SuggestionColorPurple, "קושי בזיהוי צבע סגול");
    m.insert(
        Key::SuggestionHearing,
        "בקשה להקפיד על דיבור ברור ו/או שימוש במיקרופון",
    );
    m.insert(
        Key::SuggestionElderly,
        "צורך בהקצאת זמן נוסף בין השיעורים למעבר בין כיתות",
    );
    m.insert(Key::SuggestionNoise, "רגישות לרעשים חזקים או פתאומיים");

    // Class selection
    m.insert(Key::ClassTitle, "בחירת מיקום");
    m.insert(Key::ClassSavedHeading, "יופי! הנתונים נשמרו");
    m.insert(Key::ClassSavedSubheading, "כעת נוכל להתאים עבורך את המסלול המדויק");
    m.insert(Key::ClassChooseCampus, "בחר מתחם:");
    m.insert(Key::ClassEnterClassroom, "הזן מספר כיתה:");
    m.insert(Key::ClassClassroomLabel, "מספר כיתה");
    m.insert(Key::ClassSave, "שמור ועבור למסלול");
    m.insert(Key::ClassConfirmTitle, "אישור פרטים");
    m.insert(
        Key::ClassConfirmReserved,
        "כעת נשמר לך מקום בכיתה {classroom} במתחם {campus}",
    );
    m.insert(Key::ClassConfirmInstructor, "המרצה מעודכן בצרכים שלך.");
    m.insert(
        Key::ClassConfirmQuestion,
        "האם אפשר לצאת לדרך ולהתאים לך מסלול מדויק?",
    );
    m.insert(Key::ClassConfirmYes, "כן, צא לדרך!");
    m.insert(Key::ClassConfirmNo, "לא, חזור לעריכה");
    m.insert(Key::CampusFicus, "פיקוס");
    m.insert(Key::CampusFicusDesc, "מתחם פיקוס - הבניין הראשי");
    m.insert(Key::CampusKirya, "קרייה");
    m.insert(Key::CampusKiryaDesc, "מתחם הקרייה - בניין החדשנות");

    // Seat selection
    m.insert(Key::SeatTitle, "בחירת מקום ישיבה");
    m.insert(Key::SeatClassroomCampus, "כיתה {classroom} - מתחם {campus}");
    m.insert(Key::SeatLegendAccessible, "כיסאות מונגשים");
    m.insert(Key::SeatLegendReserved, "כיסאות שמורים");
    m.insert(Key::SeatLegendRegular, "כיסאות רגילים");
    m.insert(Key::SeatLecturerDesk, "עמדת מרצה");
    m.insert(Key::SeatChosen, "בחרת בכיסא מספר {seat}");
    m.insert(Key::SeatIsAccessible, "זהו כיסא מונגש");
    m.insert(Key::SeatIsRegular, "זהו כיסא רגיל");
    m.insert(Key::SeatSave, "שמור והמשך");

    // Home
    m.insert(Key::HomeTitle, "מסלול נגיש");
    m.insert(Key::HomeReady, "המסלול שלך מוכן!");
    m.insert(Key::HomeShowRoute, "הצג מסלול נגיש");
    m.insert(Key::HomeDestination, "יעד הגעה:");
    m.insert(Key::HomeCampus, "מתחם: {campus}");
    m.insert(Key::HomeClassroom, "כיתה: {classroom}");
    m.insert(Key::HomeSeat, "מקום ישיבה: {seat}");
    m.insert(Key::HomeAccessibility, "התאמות נגישות:");
    m.insert(Key::HomeNoAccessibility, "לא נבחרו התאמות נגישות");
    m.insert(Key::HomeNotes, "דגשים למרצה:");
    m.insert(Key::HomeNoNotes, "לא הוזנו דגשים למרצה");
    m.insert(Key::HomeMoreOptions, "אפשרויות נוספות:");
    m.insert(Key::HomeRouteButton, "מסלול נגיש");
    m.insert(Key::HomeFeedbackButton, "מלא משוב");
    m.insert(Key::HomeSosHint, "לחצן מצוקה - שלח את מיקומך לסיוע");

    // SOS
    m.insert(Key::SosTitle, "לחצן מצוקה");
    m.insert(
        Key::SosMessage,
        "האם אתה זקוק לעזרה מיידית? לחיצה על 'שלח מיקום' תשלח התראה לצוות הסיוע של המכללה עם מיקומך המדויק.",
    );
    m.insert(Key::SosSendLocation, "שלח מיקום");
    m.insert(Key::SosCallTitle, "קריאה לעזרה");
    m.insert(
        Key::SosCallMessage,
        "האם אתה זקוק לעזרה? לחיצה על 'שלח קריאה' תשלח התראה לצוות הסיוע.",
    );
    m.insert(Key::SosCallSend, "שלח קריאה");
    m.insert(Key::LocationSentTitle, "המיקום נשלח");
    m.insert(
        Key::LocationSentMessage,
        "המיקום שלך נשלח לצוות הסיוע של המכללה. איש צוות יצור איתך קשר בהקדם.",
    );
    m.insert(Key::LocationSentWhere, "מיקום: {campus}, כיתה {classroom}");

    // Navigation route
    m.insert(Key::RouteTitle, "ניווט נגיש");
    m.insert(Key::RouteDestination, "כיתה {classroom}, מתחם {campus}");
    m.insert(Key::RouteSeat, "כיסא מספר {seat}");
    m.insert(Key::RouteArrived, "הגעת ליעד!");
    m.insert(Key::RouteEta, "זמן הגעה משוער: {minutes} דקות");
    m.insert(Key::RouteStepCounter, "שלב {step}/{total}");
    m.insert(Key::RouteCurrentLocation, "מיקום נוכחי:");
    m.insert(Key::RouteConfirmArrival, "אישור הגעה");
    m.insert(Key::RouteStepExitMain, "צא מהכניסה הראשית וסע במסדרון הראשי");
    m.insert(Key::RouteStepTurnLeft, "פנה שמאלה במסדרון הבא");
    m.insert(Key::RouteStepTowardsCampus, "המשך בדרך ישרה לעבר מתחם {campus}");
    m.insert(Key::RouteStepTurnRight, "פנה ימינה במעבר המרכזי");
    m.insert(Key::RouteStepElevator, "התקדם לקומה השנייה במעלית המונגשת");
    m.insert(Key::RouteStepToClassroom, "המשך במסדרון עד לכיתה {classroom}");
    m.insert(Key::RouteLocationMainEntrance, "כניסה ראשית");
    m.insert(Key::RouteLocationMainCorridor, "מסדרון ראשי");
    m.insert(Key::RouteLocationKiryaCampus, "מתחם הקרייה");
    m.insert(Key::RouteLocationCampus, "מתחם {campus}");
    m.insert(Key::RouteLocationElevator, "מעלית קומה 2");
    m.insert(Key::RouteLocationClassroom, "כיתה {classroom}");
    m.insert(Key::RouteGuideTitle, "הנחיות הניווט");
    m.insert(
        Key::RouteGuideReady,
        "המסלול הנגיש אל כיתה {classroom} במתחם {campus} מוכן!",
    );
    m.insert(Key::RouteGuideAdapted, "• המסלול מותאם לצרכי הנגישות שציינת");
    m.insert(Key::RouteGuideFollow, "• הקפד לעקוב אחר ההוראות בכל שלב");
    m.insert(Key::RouteGuideSos, "• לחצן SOS אדום זמין במקרה חירום");
    m.insert(Key::RouteStart, "התחל ניווט");
    m.insert(Key::RouteArrivalTitle, "אישור הגעה");
    m.insert(
        Key::RouteArrivalQuestion,
        "האם הגעת לכיתה {classroom} במתחם {campus}?",
    );
    m.insert(
        Key::RouteArrivalHint,
        "באפשרותך לחזור למסך הראשי או להמשיך למילוי משוב.",
    );
    m.insert(Key::RouteToFeedback, "המשך למשוב");
    m.insert(Key::RouteToHome, "חזרה למסך הראשי");

    // Feedback
    m.insert(Key::FeedbackTitle, "חוות דעת ומשוב");
    m.insert(Key::FeedbackHeading, "שתף את חוויתך!");
    m.insert(Key::FeedbackThanks, "תודה על המשוב!");
    m.insert(
        Key::FeedbackThanksBody,
        "המשוב שלך יעזור לנו לשפר את השירות ואת חוויית הנגישות במכללה.",
    );
    m.insert(Key::FeedbackSend, "שלח משוב");
    m.insert(Key::FeedbackSending, "שולח...");
    m.insert(
        Key::FeedbackRateInstructor,
        "האם המרצה התחשב בצרכי הנגישות שלך?",
    );
    m.insert(
        Key::FeedbackRateClassroom,
        "איך היית מדרג את רמת הנגישות בכיתה?",
    );
    m.insert(Key::FeedbackRateApp, "כמה האפליקציה עזרה לך להגיע ליעד?");
    m.insert(Key::FeedbackCommentHeading, "הוסף הערות נוספות:");
    m.insert(
        Key::FeedbackCommentPlaceholder,
        "שתף את החוויה שלך, הצעות לשיפור...",
    );
    m.insert(
        Key::FeedbackImprovementsHeading,
        "האם יש לך הצעות ספציפיות לשיפור הנגישות?",
    );
    m.insert(Key::RatingNone, "לא דורג");
    m.insert(Key::RatingVeryBad, "גרוע מאוד");
    m.insert(Key::RatingBad, "לא טוב");
    m.insert(Key::RatingOkay, "סביר");
    m.insert(Key::RatingGood, "טוב");
    m.insert(Key::RatingExcellent, "מצוין");
    m.insert(Key::ImprovementSeats, "יותר מקומות ישיבה מונגשים");
    m.insert(Key::ImprovementLighting, "שיפור התאורה בכיתה");
    m.insert(Key::ImprovementAcoustics, "שיפור האקוסטיקה");
    m.insert(Key::ImprovementBetweenClassrooms, "שיפור הנגישות בין הכיתות");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
