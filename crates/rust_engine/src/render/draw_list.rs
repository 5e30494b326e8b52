//! Vector draw list
//!
//! A frame is described as a list of stroked line segments and filled dots in
//! play-area coordinates, with a single phosphor colour whose intensity is
//! carried per shape. Presenters (a window, a rasterizer, a test) consume
//! the list after the frame has been built.

use crate::foundation::math::Vec2;

/// Vector shape primitives
#[derive(Clone, Debug, PartialEq)]
pub enum DrawShape {
    /// Line segment from start to end
    Line {
        /// Segment start
        start: Vec2,
        /// Segment end
        end: Vec2,
        /// Stroke width
        width: f32,
        /// Brightness in `[0, 1]`
        intensity: f32,
    },

    /// Filled disc at center with radius
    Disc {
        /// Disc center
        center: Vec2,
        /// Disc radius
        radius: f32,
        /// Brightness in `[0, 1]`
        intensity: f32,
    },

    /// Filled square dot with its top-left corner at position
    Dot {
        /// Top-left corner
        position: Vec2,
        /// Side length
        size: f32,
        /// Brightness in `[0, 1]`
        intensity: f32,
    },
}

/// Shapes collected for one frame
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    /// Play-area size the frame was built for
    pub extent: Vec2,
    /// Opacity of the black wash applied before drawing; values below 1
    /// leave a fading trail of the previous frame
    pub fade: f32,
    shapes: Vec<DrawShape>,
}

impl DrawList {
    /// Create an empty draw list
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, discarding previously collected shapes
    pub fn begin_frame(&mut self, extent: Vec2, fade: f32) {
        self.extent = extent;
        self.fade = fade.clamp(0.0, 1.0);
        self.shapes.clear();
    }

    /// Draw a line segment
    pub fn line(&mut self, start: Vec2, end: Vec2, width: f32, intensity: f32) {
        self.shapes.push(DrawShape::Line {
            start,
            end,
            width,
            intensity: intensity.clamp(0.0, 1.0),
        });
    }

    /// Draw an open polyline through `points`
    pub fn polyline(&mut self, points: &[Vec2], width: f32, intensity: f32) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], width, intensity);
        }
    }

    /// Draw a closed outline through `points`
    pub fn closed_polyline(&mut self, points: &[Vec2], width: f32, intensity: f32) {
        self.polyline(points, width, intensity);
        if let (Some(&first), Some(&last)) = (points.first(), points.last()) {
            if points.len() > 2 {
                self.line(last, first, width, intensity);
            }
        }
    }

    /// Draw a filled disc
    pub fn disc(&mut self, center: Vec2, radius: f32, intensity: f32) {
        self.shapes.push(DrawShape::Disc {
            center,
            radius,
            intensity: intensity.clamp(0.0, 1.0),
        });
    }

    /// Draw a filled square dot
    pub fn dot(&mut self, position: Vec2, size: f32, intensity: f32) {
        self.shapes.push(DrawShape::Dot {
            position,
            size,
            intensity: intensity.clamp(0.0, 1.0),
        });
    }

    /// All shapes collected this frame, in draw order
    pub fn shapes(&self) -> &[DrawShape] {
        &self.shapes
    }

    /// Number of line segments collected this frame
    pub fn line_count(&self) -> usize {
        self.shapes
            .iter()
            .filter(|shape| matches!(shape, DrawShape::Line { .. }))
            .count()
    }

    /// Number of shapes collected this frame
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether nothing has been drawn this frame
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_polyline_closes_the_loop() {
        let mut list = DrawList::new();
        let triangle = [Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        list.closed_polyline(&triangle, 1.5, 1.0);

        assert_eq!(list.line_count(), 3);
        assert_eq!(
            list.shapes()[2],
            DrawShape::Line { start: triangle[2], end: triangle[0], width: 1.5, intensity: 1.0 }
        );
    }

    #[test]
    fn test_open_polyline_of_two_points() {
        let mut list = DrawList::new();
        list.closed_polyline(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 1.0)], 1.0, 1.0);
        assert_eq!(list.line_count(), 1);
    }

    #[test]
    fn test_begin_frame_resets_shapes() {
        let mut list = DrawList::new();
        list.dot(Vec2::new(1.0, 1.0), 2.0, 0.5);
        list.disc(Vec2::new(1.0, 1.0), 2.0, 1.0);
        assert_eq!(list.len(), 2);

        list.begin_frame(Vec2::new(800.0, 600.0), 0.8);
        assert!(list.is_empty());
        assert_eq!(list.extent, Vec2::new(800.0, 600.0));
        assert_eq!(list.fade, 0.8);
    }

    #[test]
    fn test_intensity_is_clamped() {
        let mut list = DrawList::new();
        list.dot(Vec2::zeros(), 2.0, -0.3);
        assert_eq!(
            list.shapes()[0],
            DrawShape::Dot { position: Vec2::zeros(), size: 2.0, intensity: 0.0 }
        );
    }
}
