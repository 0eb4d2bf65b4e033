use serde::{Deserialize, Serialize};

use crate::Session;

/// Configuration options for the recording subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordingSettings {
    /// Capture one snapshot every this many ticks. Zero is treated as one.
    pub every_n_ticks: u64,
    /// Stop capturing once this many frames are held.
    pub max_frames: Option<usize>,
}

impl Default for RecordingSettings {
    fn default() -> Self {
        Self {
            every_n_ticks: 1,
            max_frames: None,
        }
    }
}

/// Geometry of a session at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub tick: u64,
    pub resolution: usize,
    pub control_points: Vec<(i32, i32)>,
    pub curve_points: Vec<(i32, i32)>,
}

/// Collects [`FrameSnapshot`]s from a running session so a headless run can
/// be inspected afterwards.
#[derive(Debug, Default)]
pub struct Recorder {
    settings: RecordingSettings,
    frames: Vec<FrameSnapshot>,
    is_recording: bool,
}

impl Recorder {
    pub fn new(settings: RecordingSettings) -> Self {
        Self {
            settings,
            frames: Vec::new(),
            is_recording: false,
        }
    }

    pub fn start(&mut self) {
        self.is_recording = true;
    }

    pub fn stop(&mut self) {
        self.is_recording = false;
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    pub fn frames(&self) -> &[FrameSnapshot] {
        &self.frames
    }

    pub fn into_frames(self) -> Vec<FrameSnapshot> {
        self.frames
    }

    /// Stores a snapshot if recording and `tick` falls on the capture
    /// interval. Returns whether a frame was taken.
    pub fn capture(&mut self, tick: u64, session: &Session) -> bool {
        if !self.is_recording || tick % self.settings.every_n_ticks.max(1) != 0 {
            return false;
        }

        if self
            .settings
            .max_frames
            .map(|max| self.frames.len() >= max)
            .unwrap_or(false)
        {
            tracing::debug!(tick, "frame limit reached, recording stopped");
            self.is_recording = false;
            return false;
        }

        self.frames.push(FrameSnapshot {
            tick,
            resolution: session.engine().resolution(),
            control_points: session.control_points(),
            curve_points: session.curve_points(),
        });
        true
    }
}
