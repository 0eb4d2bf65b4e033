use serde::{Deserialize, Serialize};

use crate::{Point2D, RenderSink, Rgba};

/// Rectangular area the control points bounce around in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn outside_x(&self, x: f64) -> bool {
        !(0.0..self.width).contains(&x)
    }

    fn outside_y(&self, y: f64) -> bool {
        !(0.0..self.height).contains(&y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Ordered control points, each paired with the velocity it drifts at.
///
/// The two sequences always have the same length and index `i` in both refers
/// to the same control point.
#[derive(Debug, Clone, Default)]
pub struct ControlSet {
    points: Vec<Point2D>,
    velocities: Vec<Point2D>,
    viewport: Viewport,
}

impl ControlSet {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            points: Vec::new(),
            velocities: Vec::new(),
            viewport,
        }
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn velocities(&self) -> &[Point2D] {
        &self.velocities
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn append(&mut self, point: Point2D, velocity: Point2D) {
        self.points.push(point);
        self.velocities.push(velocity);
    }

    /// Moves every point by its velocity and reflects velocities off the
    /// viewport edges.
    ///
    /// Reflection looks at the already-moved position and only flips the
    /// velocity; the point itself stays where it landed, possibly outside the
    /// viewport until a later step carries it back.
    pub fn advance(&mut self) {
        let viewport = self.viewport;
        let mut reflections = 0;
        for (point, velocity) in self.points.iter_mut().zip(self.velocities.iter_mut()) {
            *point += *velocity;
            if viewport.outside_x(point.x) {
                velocity.x = -velocity.x;
                reflections += 1;
            }
            if viewport.outside_y(point.y) {
                velocity.y = -velocity.y;
                reflections += 1;
            }
        }

        tracing::debug!(points = self.points.len(), reflections, "advanced control points");
    }

    /// Emits one circle per control point. White unless a color is given.
    pub fn render(&self, sink: &mut dyn RenderSink, radius: u32, color: Option<Rgba>) {
        let color = color.unwrap_or(Rgba::WHITE);
        for point in &self.points {
            sink.circle(point.to_int_pair(), radius, color);
        }
    }
}
