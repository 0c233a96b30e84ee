// SPDX-License-Identifier: MPL-2.0
//! Rotating arc drawn on a canvas, used while pages and images load.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, path, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: u16 = 30;

/// Loading spinner. The caller owns the rotation and advances it on ticks.
pub struct Spinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl Spinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::ICON_XL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Point on the arc of `radius` around `center` at `angle`.
    fn point_at(center: Point, radius: f32, angle: f32) -> Point {
        Point::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        )
    }
}

impl<Message> canvas::Program<Message> for Spinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame: &mut Frame| {
            let center = frame.center();
            let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH - 1.0;

            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default().with_width(STROKE_WIDTH).with_color(Color {
                    a: 0.25,
                    ..self.color
                }),
            );

            // Half circle starting at the top, offset by the rotation.
            let start = self.rotation - PI / 2.0;
            let mut arc = path::Builder::new();
            arc.move_to(Self::point_at(center, radius, start));
            for i in 1..=ARC_SEGMENTS {
                let t = f32::from(i) / f32::from(ARC_SEGMENTS);
                arc.line_to(Self::point_at(center, radius, start + PI * t));
            }

            frame.stroke(
                &arc.build(),
                Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round),
            );
        });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_at_zero_angle_is_right_of_center() {
        let p = Spinner::point_at(Point::new(10.0, 10.0), 5.0, 0.0);
        assert!((p.x - 15.0).abs() < f32::EPSILON);
        assert!((p.y - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn size_overrides_default() {
        let spinner = Spinner::new(Color::WHITE, 0.0).size(24.0);
        assert!((spinner.size - 24.0).abs() < f32::EPSILON);
    }
}
