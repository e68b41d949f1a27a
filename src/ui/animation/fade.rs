//! Opacity fade used for screen changes and the tip card

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

/// Matches the router's in-flight window
const FADE_DURATION: Duration = Duration::from_millis(300);

fn fade_easing() -> Easing {
    Easing::EASE_IN_OUT.with_duration(FADE_DURATION)
}

/// A 0.0 to 1.0 opacity transition
#[derive(Debug)]
pub struct Fade {
    animation: Animated<f32>,
}

impl Default for Fade {
    /// Fully visible, nothing to animate
    fn default() -> Self {
        Self::visible()
    }
}

impl Fade {
    pub fn visible() -> Self {
        Self {
            animation: Animated::transition(1.0, fade_easing()),
        }
    }

    /// Jump to transparent and fade in from there
    pub fn restart(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
        self.animation.update(1.0.into());
    }

    /// Current opacity
    pub fn progress(&self) -> f32 {
        *self.animation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update the value
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_settled_and_visible() {
        let fade = Fade::default();
        assert_eq!(fade.progress(), 1.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_restart_starts_transparent() {
        let mut fade = Fade::visible();
        fade.restart();
        assert_eq!(fade.progress(), 0.0);
    }

    #[test]
    fn test_fade_reaches_target() {
        let mut fade = Fade::visible();
        fade.restart();
        assert!(fade.is_animating());
        let start = Instant::now();
        fade.tick(start);
        fade.tick(start + FADE_DURATION * 2);
        assert!(fade.progress() > 0.99);
        assert!(!fade.is_animating());
    }
}
