//! Core library for the Knot Saver animation.
//!
//! A handful of control points drift around a viewport and bounce off its
//! edges while a smooth closed curve is continuously refitted around them.
//! The crate holds the geometry, the point physics and the curve engine;
//! drawing goes through the [`RenderSink`] trait so any presentation shell
//! can consume the output.

pub mod color;
pub mod config;
pub mod control;
pub mod error;
pub mod geometry;
pub mod knot;
pub mod record;
pub mod render;
pub mod session;

pub use color::Rgba;
pub use config::{AppConfig, KnotConfig, SimulationConfig};
pub use control::{ControlSet, Viewport};
pub use error::{KnotError, Result};
pub use geometry::Point2D;
pub use knot::{blend, sample, CurveEngine, DEFAULT_RESOLUTION};
pub use record::{FrameSnapshot, Recorder, RecordingSettings};
pub use render::{CommandBuffer, DrawCommand, RenderSink};
pub use session::{Command, HelpEntry, Session};
