//! Post-visit feedback form

use std::collections::BTreeSet;
use std::time::Duration;

use crate::i18n::Key;

/// Simulated send time
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);

pub const MAX_RATING: u8 = 5;

/// The three questions answered with stars
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RatingTopic {
    Instructor,
    Classroom,
    App,
}

impl RatingTopic {
    pub const ALL: [RatingTopic; 3] = [
        RatingTopic::Instructor,
        RatingTopic::Classroom,
        RatingTopic::App,
    ];

    pub fn question(self) -> Key {
        match self {
            RatingTopic::Instructor => Key::FeedbackRateInstructor,
            RatingTopic::Classroom => Key::FeedbackRateClassroom,
            RatingTopic::App => Key::FeedbackRateApp,
        }
    }
}

/// Label under a star row
pub fn rating_label(rating: u8) -> Key {
    match rating {
        0 => Key::RatingNone,
        1 => Key::RatingVeryBad,
        2 => Key::RatingBad,
        3 => Key::RatingOkay,
        4 => Key::RatingGood,
        _ => Key::RatingExcellent,
    }
}

/// Improvement suggestions offered as checkboxes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Improvement {
    AccessibleSeats,
    Lighting,
    Acoustics,
    AccessibilityBetweenClassrooms,
}

impl Improvement {
    pub const ALL: [Improvement; 4] = [
        Improvement::AccessibleSeats,
        Improvement::Lighting,
        Improvement::Acoustics,
        Improvement::AccessibilityBetweenClassrooms,
    ];

    pub fn label(self) -> Key {
        match self {
            Improvement::AccessibleSeats => Key::ImprovementSeats,
            Improvement::Lighting => Key::ImprovementLighting,
            Improvement::Acoustics => Key::ImprovementAcoustics,
            Improvement::AccessibilityBetweenClassrooms => Key::ImprovementBetweenClassrooms,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Submission {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

/// Answers collected on the feedback screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    ratings: [u8; 3],
    pub comment: String,
    improvements: BTreeSet<Improvement>,
    submission: Submission,
}

impl FeedbackForm {
    pub fn rating(&self, topic: RatingTopic) -> u8 {
        self.ratings[topic as usize]
    }

    /// Set a rating, clamped to `0..=MAX_RATING`
    pub fn rate(&mut self, topic: RatingTopic, stars: u8) {
        if self.is_locked() {
            return;
        }
        self.ratings[topic as usize] = stars.min(MAX_RATING);
    }

    pub fn has_improvement(&self, improvement: Improvement) -> bool {
        self.improvements.contains(&improvement)
    }

    pub fn set_improvement(&mut self, improvement: Improvement, checked: bool) {
        if self.is_locked() {
            return;
        }
        if checked {
            self.improvements.insert(improvement);
        } else {
            self.improvements.remove(&improvement);
        }
    }

    pub fn improvements(&self) -> impl Iterator<Item = Improvement> + '_ {
        self.improvements.iter().copied()
    }

    pub fn submission(&self) -> Submission {
        self.submission
    }

    /// Inputs are frozen once sending starts
    pub fn is_locked(&self) -> bool {
        self.submission != Submission::Editing
    }

    /// Start sending. Returns false if already sent or sending.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_locked() {
            return false;
        }
        self.submission = Submission::Submitting;
        true
    }

    /// Finish sending. Returns false unless a send was in progress.
    pub fn complete_submit(&mut self) -> bool {
        if self.submission != Submission::Submitting {
            return false;
        }
        self.submission = Submission::Submitted;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratings_are_clamped() {
        let mut form = FeedbackForm::default();
        form.rate(RatingTopic::Classroom, 9);
        assert_eq!(form.rating(RatingTopic::Classroom), MAX_RATING);
        assert_eq!(form.rating(RatingTopic::Instructor), 0);
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(rating_label(0), Key::RatingNone);
        assert_eq!(rating_label(3), Key::RatingOkay);
        assert_eq!(rating_label(5), Key::RatingExcellent);
    }

    #[test]
    fn test_submission_flow() {
        let mut form = FeedbackForm::default();
        form.set_improvement(Improvement::Lighting, true);
        form.set_improvement(Improvement::Acoustics, true);
        form.set_improvement(Improvement::Acoustics, false);
        assert_eq!(form.improvements().collect::<Vec<_>>(), vec![Improvement::Lighting]);

        assert!(!form.complete_submit());
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert_eq!(form.submission(), Submission::Submitting);

        // locked while sending
        form.rate(RatingTopic::App, 4);
        assert_eq!(form.rating(RatingTopic::App), 0);

        assert!(form.complete_submit());
        assert_eq!(form.submission(), Submission::Submitted);
        assert!(!form.complete_submit());
    }
}
