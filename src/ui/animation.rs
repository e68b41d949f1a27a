//! Animations for Vision
//!
//! Built on `iced_anim` transitions. Every animation here is driven by
//! `Message::AnimationTick` while [`is_animating`] style checks report
//! work left, so the frame subscription stays off when the UI is idle.

mod fade;
mod hover;

pub use fade::Fade;
pub use hover::HoverAnimations;
