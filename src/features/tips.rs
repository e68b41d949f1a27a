//! Accessibility tips shown on the login screen

use std::time::Duration;

use crate::i18n::Key;

/// Delay after start-up before a tip appears
pub const SHOW_DELAY: Duration = Duration::from_secs(2);

/// How long a tip stays visible
pub const VISIBLE_FOR: Duration = Duration::from_secs(5);

pub const TIPS: [Key; 4] = [
    Key::TipSos,
    Key::TipAdaptedRoutes,
    Key::TipReducedMotion,
    Key::TipScreenReader,
];

/// Pick a random tip index
pub fn random_tip() -> usize {
    use rand::Rng;
    rand::rng().random_range(0..TIPS.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_tip_in_range() {
        for _ in 0..50 {
            assert!(random_tip() < TIPS.len());
        }
    }
}
