//! Circular progress ring primitive
//!
//! Draws the walked fraction of a route as an arc on a Canvas, with the
//! percentage in the middle supplied by the caller as an overlay. The arc
//! turns to the success color once the ring is full.

use std::f32::consts::{FRAC_PI_2, TAU};

use iced::widget::Canvas;
use iced::widget::canvas::{Frame, Geometry, LineCap, Path, Program, Stroke, path::Arc};
use iced::{Element, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::ui::theme;

#[derive(Debug, Clone, Copy)]
pub struct ProgressRing {
    /// Fraction filled, clamped to `[0, 1]`
    progress: f32,
    stroke_width: f32,
}

impl ProgressRing {
    pub fn new(progress: f32) -> Self {
        Self {
            progress: progress.clamp(0.0, 1.0),
            stroke_width: 8.0,
        }
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn is_full(&self) -> bool {
        self.progress >= 1.0
    }

    /// Arc from twelve o'clock, clockwise
    fn arc(&self, center: Point, radius: f32) -> Path {
        let start = -FRAC_PI_2;
        Path::new(|builder| {
            builder.arc(Arc {
                center,
                radius,
                start_angle: Radians(start),
                end_angle: Radians(start + self.progress * TAU),
            });
        })
    }
}

impl<Message> Program<Message> for ProgressRing {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = bounds.width.min(bounds.height) / 2.0 - self.stroke_width / 2.0 - 1.0;
        let stroke = || Stroke::default().with_width(self.stroke_width);

        frame.stroke(
            &Path::circle(center, radius),
            stroke().with_color(theme::divider(theme)),
        );

        if self.progress > 0.0 {
            let color = if self.is_full() {
                theme::success(theme)
            } else {
                theme::primary(theme)
            };
            frame.stroke(
                &self.arc(center, radius),
                stroke().with_color(color).with_line_cap(LineCap::Round),
            );
        }

        vec![frame.into_geometry()]
    }
}

pub fn view_progress_ring<'a, Message: 'a>(ring: ProgressRing, size: f32) -> Element<'a, Message> {
    Canvas::new(ring).width(size).height(size).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_clamped() {
        assert!(!ProgressRing::new(0.4).is_full());
        assert!(ProgressRing::new(1.7).is_full());
        assert_eq!(ProgressRing::new(-1.0).progress, 0.0);
    }
}
