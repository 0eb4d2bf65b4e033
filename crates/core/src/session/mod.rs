use serde::{Deserialize, Serialize};

use crate::{AppConfig, CurveEngine, Point2D, RenderSink};

/// Input understood by a [`Session`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    AddPoint { position: Point2D, velocity: Point2D },
    Tick,
    AdjustResolution(i64),
    Reset,
    TogglePause,
    ToggleHelp,
    Quit,
}

/// One row of the help overlay: a key label and what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpEntry {
    pub key: String,
    pub description: String,
}

impl HelpEntry {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
        }
    }
}

/// Running animation: the engine plus pause and overlay state.
#[derive(Debug, Clone)]
pub struct Session {
    config: AppConfig,
    engine: CurveEngine,
    paused: bool,
    show_help: bool,
    running: bool,
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        let engine = Self::fresh_engine(&config);
        Self {
            paused: config.simulation.start_paused,
            show_help: false,
            running: true,
            engine,
            config,
        }
    }

    fn fresh_engine(config: &AppConfig) -> CurveEngine {
        CurveEngine::with_resolution(config.viewport, config.knot.resolution)
    }

    pub fn engine(&self) -> &CurveEngine {
        &self.engine
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::AddPoint { position, velocity } => self.engine.append(position, velocity),
            Command::Tick => {
                self.tick();
            }
            Command::AdjustResolution(delta) => self.engine.adjust_resolution(delta),
            Command::Reset => self.reset(),
            Command::TogglePause => self.paused = !self.paused,
            Command::ToggleHelp => self.show_help = !self.show_help,
            Command::Quit => {
                tracing::info!("session stopped");
                self.running = false;
            }
        }
    }

    /// Advances the physics once unless paused. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        if self.paused {
            return false;
        }
        self.engine.advance();
        true
    }

    /// Throws the current engine away and starts over with no points.
    pub fn reset(&mut self) {
        tracing::info!(
            discarded_points = self.engine.control().len(),
            "resetting knot"
        );
        self.engine = Self::fresh_engine(&self.config);
    }

    pub fn draw(&mut self, sink: &mut dyn RenderSink) {
        self.engine.render(sink, self.config.knot.line_width, None);
    }

    pub fn control_points(&self) -> Vec<(i32, i32)> {
        self.engine.control_pixels()
    }

    pub fn curve_points(&self) -> Vec<(i32, i32)> {
        self.engine.curve_pixels()
    }

    pub fn help_entries(&self) -> Vec<HelpEntry> {
        vec![
            HelpEntry::new("F1", "Show Help"),
            HelpEntry::new("R", "Restart"),
            HelpEntry::new("P", "Pause/Play"),
            HelpEntry::new("Num+", "More points"),
            HelpEntry::new("Num-", "Less points"),
            HelpEntry::new("", ""),
            HelpEntry::new(self.engine.resolution().to_string(), "Current points"),
        ]
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
