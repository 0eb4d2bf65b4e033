//! Smooth closed curve fitted around a moving set of control points.
//!
//! Each control point contributes one window made of the midpoint to its
//! predecessor, the point itself and the midpoint to its successor. Windows
//! are sampled with a nested linear blend and concatenated, with indices
//! wrapping around so the result is a closed loop.

use crate::{ControlSet, Point2D, RenderSink, Rgba, Viewport};

/// Samples per window used when nothing else is configured.
pub const DEFAULT_RESOLUTION: usize = 35;

/// Fewest control points that produce a curve.
pub const MIN_CURVE_POINTS: usize = 3;

/// Nested linear interpolation over `base[..=degree]` at parameter `alpha`.
///
/// # Panics
///
/// Panics if `degree >= base.len()`.
pub fn blend(base: &[Point2D], alpha: f64, degree: usize) -> Point2D {
    if degree == 0 {
        return base[0];
    }
    base[degree] * alpha + blend(base, alpha, degree - 1) * (1.0 - alpha)
}

/// Lazily yields `count` blended points at `alpha = k / count` for
/// `k in 0..count`; `alpha` never reaches 1.
pub fn sample(base: &[Point2D], count: usize) -> impl Iterator<Item = Point2D> + '_ {
    let degree = base.len().saturating_sub(1);
    let count = if base.is_empty() { 0 } else { count };
    (0..count).map(move |k| blend(base, k as f64 / count as f64, degree))
}

/// Control points plus the curve derived from them.
///
/// Every mutating call leaves `curve` consistent with the current points and
/// resolution before it returns.
#[derive(Debug, Clone)]
pub struct CurveEngine {
    control: ControlSet,
    resolution: usize,
    curve: Vec<Point2D>,
    hue: u16,
}

impl CurveEngine {
    pub fn new(viewport: Viewport) -> Self {
        Self::with_resolution(viewport, DEFAULT_RESOLUTION)
    }

    pub fn with_resolution(viewport: Viewport, resolution: usize) -> Self {
        Self {
            control: ControlSet::new(viewport),
            resolution: resolution.max(1),
            curve: Vec::new(),
            hue: 0,
        }
    }

    pub fn control(&self) -> &ControlSet {
        &self.control
    }

    pub fn curve(&self) -> &[Point2D] {
        &self.curve
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn hue(&self) -> u16 {
        self.hue
    }

    /// Whether enough control points exist for a curve to be drawn.
    pub fn is_curved(&self) -> bool {
        self.control.len() >= MIN_CURVE_POINTS
    }

    pub fn control_pixels(&self) -> Vec<(i32, i32)> {
        self.control.points().iter().map(|p| p.to_int_pair()).collect()
    }

    pub fn curve_pixels(&self) -> Vec<(i32, i32)> {
        self.curve.iter().map(|p| p.to_int_pair()).collect()
    }

    pub fn append(&mut self, point: Point2D, velocity: Point2D) {
        self.control.append(point, velocity);
        self.recompute();
    }

    pub fn advance(&mut self) {
        self.control.advance();
        self.recompute();
    }

    /// Sets the samples-per-window count (at least 1) and rebuilds the curve
    /// right away.
    pub fn set_resolution(&mut self, resolution: usize) {
        self.resolution = resolution.max(1);
        self.recompute();
    }

    /// Steps the resolution by `delta`, never going below 1.
    pub fn adjust_resolution(&mut self, delta: i64) {
        let current = i64::try_from(self.resolution).unwrap_or(i64::MAX);
        let next = current.saturating_add(delta).max(1);
        self.set_resolution(usize::try_from(next).unwrap_or(usize::MAX));
    }

    /// Rebuilds the curve from scratch.
    pub fn recompute(&mut self) {
        self.curve.clear();

        let points = self.control.points();
        let len = points.len();
        if len < MIN_CURVE_POINTS {
            return;
        }

        let at = |i: isize| points[i.rem_euclid(len as isize) as usize];
        self.curve.reserve(len * self.resolution);
        for i in -2..(len as isize - 2) {
            let anchor = at(i + 1);
            let window = [
                at(i).midpoint(anchor),
                anchor,
                anchor.midpoint(at(i + 2)),
            ];
            self.curve.extend(sample(&window, self.resolution));
        }

        tracing::debug!(
            control_points = len,
            resolution = self.resolution,
            curve_points = self.curve.len(),
            "recomputed knot"
        );
    }

    /// Draws the control points followed by the curve as a closed polyline.
    ///
    /// The hue steps forward on every call; it only colors the curve when no
    /// explicit color is passed.
    pub fn render(&mut self, sink: &mut dyn RenderSink, width: u32, color: Option<Rgba>) {
        self.control.render(sink, width, color);

        self.hue = (self.hue + 1) % 360;
        let color = color
            .unwrap_or_else(|| Rgba::from_hsla(f64::from(self.hue), 100.0, 50.0, 100.0));

        let len = self.curve.len();
        for n in 0..len {
            let from = self.curve[(n + len - 1) % len];
            let to = self.curve[n];
            sink.line(from.to_int_pair(), to.to_int_pair(), width, color);
        }
    }
}

impl Default for CurveEngine {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandBuffer, DrawCommand};

    fn engine_with(points: &[(f64, f64)], resolution: usize) -> CurveEngine {
        let mut engine = CurveEngine::with_resolution(Viewport::default(), resolution);
        for &(x, y) in points {
            engine.append(Point2D::new(x, y), Point2D::ZERO);
        }
        engine
    }

    const TRIANGLE: [(f64, f64); 3] = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)];

    #[test]
    fn blend_degree_zero_returns_first_point() {
        let base = [Point2D::new(7.0, -3.0), Point2D::new(100.0, 100.0)];
        for alpha in [0.0, 0.25, 0.99] {
            assert_eq!(blend(&base, alpha, 0), base[0]);
        }
    }

    #[test]
    fn blend_nests_linear_interpolation() {
        let base = [
            Point2D::new(0.0, 0.0),
            Point2D::new(4.0, 0.0),
            Point2D::new(4.0, 4.0),
        ];
        assert_eq!(blend(&base, 0.5, 2), Point2D::new(3.0, 2.0));
        assert_eq!(blend(&base, 0.0, 2), base[0]);
    }

    #[test]
    fn sample_stops_short_of_alpha_one() {
        let base = [Point2D::new(0.0, 0.0), Point2D::new(8.0, 0.0)];
        let samples: Vec<_> = sample(&base, 4).collect();

        assert_eq!(
            samples,
            vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(2.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(6.0, 0.0),
            ]
        );
    }

    #[test]
    fn sample_of_empty_window_is_empty() {
        assert_eq!(sample(&[], 10).count(), 0);
    }

    #[test]
    fn fewer_than_three_points_give_no_curve() {
        for count in 0..MIN_CURVE_POINTS {
            let mut engine = engine_with(&TRIANGLE[..count], 5);
            engine.recompute();
            assert!(engine.curve().is_empty());
            assert!(!engine.is_curved());
        }
    }

    #[test]
    fn curve_has_resolution_samples_per_point() {
        let mut engine = engine_with(&TRIANGLE, 7);
        assert_eq!(engine.curve().len(), 21);

        engine.append(Point2D::new(0.0, 10.0), Point2D::ZERO);
        engine.append(Point2D::new(5.0, 5.0), Point2D::ZERO);
        assert_eq!(engine.curve().len(), 35);
        assert!(engine.is_curved());
    }

    #[test]
    fn recompute_is_idempotent() {
        let mut engine = engine_with(&TRIANGLE, 9);
        let first = engine.curve().to_vec();
        engine.recompute();
        assert_eq!(engine.curve(), first.as_slice());
    }

    #[test]
    fn resolution_step_adds_one_sample_per_point() {
        let mut engine = engine_with(&[(0.0, 0.0), (50.0, 0.0), (50.0, 50.0), (0.0, 50.0)], 3);
        let before = engine.curve().len();

        engine.adjust_resolution(1);

        assert_eq!(engine.resolution(), 4);
        assert_eq!(engine.curve().len(), before + 4);
    }

    #[test]
    fn resolution_is_floored_at_one() {
        let mut engine = engine_with(&TRIANGLE, 2);
        engine.adjust_resolution(-10);
        assert_eq!(engine.resolution(), 1);

        engine.set_resolution(0);
        assert_eq!(engine.resolution(), 1);
        assert_eq!(engine.curve().len(), 3);
    }

    #[test]
    fn triangle_at_resolution_one_yields_window_midpoints() {
        let mut engine = engine_with(&TRIANGLE, 1);
        engine.advance();

        assert_eq!(
            engine.control().points(),
            &[
                Point2D::new(0.0, 0.0),
                Point2D::new(10.0, 0.0),
                Point2D::new(10.0, 10.0),
            ]
        );

        engine.recompute();
        assert_eq!(
            engine.curve(),
            &[
                Point2D::new(10.0, 5.0),
                Point2D::new(5.0, 5.0),
                Point2D::new(5.0, 0.0),
            ]
        );
    }

    #[test]
    fn advance_keeps_curve_current() {
        let mut engine = CurveEngine::with_resolution(Viewport::default(), 4);
        engine.append(Point2D::new(100.0, 100.0), Point2D::new(1.0, 0.0));
        engine.append(Point2D::new(200.0, 100.0), Point2D::new(0.0, 1.0));
        engine.append(Point2D::new(150.0, 200.0), Point2D::new(-1.0, -1.0));
        let before = engine.curve().to_vec();

        engine.advance();

        let mut rebuilt = engine.clone();
        rebuilt.recompute();
        assert_ne!(engine.curve(), before.as_slice());
        assert_eq!(engine.curve(), rebuilt.curve());
    }

    #[test]
    fn render_closes_the_loop() {
        let mut engine = engine_with(&TRIANGLE, 2);
        let mut buffer = CommandBuffer::new();
        engine.render(&mut buffer, 3, None);

        let circles = buffer
            .commands()
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count();
        let lines: Vec<_> = buffer
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();

        assert_eq!(circles, 3);
        assert_eq!(lines.len(), engine.curve().len());
        let pixels = engine.curve_pixels();
        assert_eq!(lines[0], (pixels[pixels.len() - 1], pixels[0]));
    }

    #[test]
    fn hue_cycles_on_every_render() {
        let mut engine = engine_with(&TRIANGLE, 1);
        let mut buffer = CommandBuffer::new();

        engine.render(&mut buffer, 1, Some(Rgba::BLACK));
        assert_eq!(engine.hue(), 1);
        assert!(buffer.commands().iter().all(|c| match c {
            DrawCommand::Line { color, .. } | DrawCommand::Circle { color, .. } => {
                *color == Rgba::BLACK
            }
        }));

        for _ in 0..359 {
            engine.render(&mut buffer, 1, None);
        }
        assert_eq!(engine.hue(), 0);
    }

    #[test]
    fn empty_engine_renders_nothing() {
        let mut engine = CurveEngine::default();
        let mut buffer = CommandBuffer::new();
        engine.render(&mut buffer, 3, None);
        assert!(buffer.is_empty());
    }
}
