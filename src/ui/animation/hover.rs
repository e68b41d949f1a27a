//! Hover highlight for selectable cards
//!
//! Only one card can be under the pointer, so two slots are enough: the
//! card being hovered (fading in) and the card just left (fading out).

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const HOVER_DURATION: Duration = Duration::from_millis(200);

fn hover_easing() -> Easing {
    Easing::EASE_OUT.with_duration(HOVER_DURATION)
}

#[derive(Debug)]
struct Slot<K> {
    key: K,
    animation: Animated<f32>,
}

impl<K> Slot<K> {
    fn towards(key: K, from: f32, to: f32) -> Self {
        let mut animation = Animated::transition(from, hover_easing());
        animation.update(to.into());
        Self { key, animation }
    }

    fn value(&self) -> f32 {
        *self.animation.value()
    }
}

/// Hover state for a family of cards keyed by `K`
#[derive(Debug)]
pub struct HoverAnimations<K: PartialEq + Clone> {
    entering: Option<Slot<K>>,
    leaving: Option<Slot<K>>,
}

impl<K: PartialEq + Clone> Default for HoverAnimations<K> {
    fn default() -> Self {
        Self {
            entering: None,
            leaving: None,
        }
    }
}

impl<K: PartialEq + Clone> HoverAnimations<K> {
    /// Move the highlight to `key`, or clear it with `None`
    pub fn set_hovered(&mut self, key: Option<K>) {
        if self.entering.as_ref().map(|s| &s.key) == key.as_ref() {
            return;
        }

        if let Some(old) = self.entering.take() {
            let from = old.value();
            self.leaving = Some(Slot::towards(old.key, from, 0.0));
        }

        let Some(key) = key else {
            return;
        };
        // Re-entering the card that is still fading out resumes from its value
        let from = match self.leaving.take() {
            Some(slot) if slot.key == key => slot.value(),
            other => {
                self.leaving = other;
                0.0
            }
        };
        self.entering = Some(Slot::towards(key, from, 1.0));
    }

    /// Highlight amount for `key`, 0.0 to 1.0
    pub fn progress(&self, key: &K) -> f32 {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .find(|slot| &slot.key == key)
            .map(Slot::value)
            .unwrap_or(0.0)
    }

    #[cfg(test)]
    pub fn is_hovered(&self, key: &K) -> bool {
        self.entering.as_ref().is_some_and(|s| &s.key == key)
    }

    pub fn is_animating(&self) -> bool {
        [&self.entering, &self.leaving]
            .into_iter()
            .flatten()
            .any(|slot| slot.animation.is_animating())
    }

    /// Forget everything, e.g. when the screen changes
    pub fn clear(&mut self) {
        self.entering = None;
        self.leaving = None;
    }

    /// Advance both slots and drop a finished fade-out
    pub fn tick(&mut self, now: Instant) {
        if let Some(slot) = &mut self.entering {
            slot.animation.tick(now);
        }
        if let Some(slot) = &mut self.leaving {
            slot.animation.tick(now);
            if !slot.animation.is_animating() && slot.value() < 0.01 {
                self.leaving = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_is_exclusive() {
        let mut hover: HoverAnimations<&'static str> = HoverAnimations::default();
        assert_eq!(hover.progress(&"wheelchair"), 0.0);

        hover.set_hovered(Some("wheelchair"));
        assert!(hover.is_hovered(&"wheelchair"));

        hover.set_hovered(Some("hearing"));
        assert!(hover.is_hovered(&"hearing"));
        assert!(!hover.is_hovered(&"wheelchair"));

        hover.set_hovered(None);
        assert!(!hover.is_hovered(&"hearing"));
    }

    #[test]
    fn test_progress_stays_in_range() {
        let mut hover: HoverAnimations<u8> = HoverAnimations::default();
        hover.set_hovered(Some(1));
        let start = Instant::now();
        for step in 0..5 {
            hover.tick(start + HOVER_DURATION * step / 2);
            let p = hover.progress(&1);
            assert!((0.0..=1.0).contains(&p));
        }
        assert!(hover.progress(&1) > 0.99);
    }

    #[test]
    fn test_clear() {
        let mut hover: HoverAnimations<u8> = HoverAnimations::default();
        hover.set_hovered(Some(3));
        hover.clear();
        assert!(!hover.is_hovered(&3));
        assert!(!hover.is_animating());
    }
}
