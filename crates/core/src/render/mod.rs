use serde::{Deserialize, Serialize};

use crate::Rgba;

/// Drawing surface the engine renders into. The presentation shell owns the
/// implementation; the core only ever sees it through this trait.
pub trait RenderSink {
    fn circle(&mut self, center: (i32, i32), radius: u32, color: Rgba);

    fn line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: Rgba);
}

/// Single primitive issued to a [`RenderSink`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    Circle {
        center: (i32, i32),
        radius: u32,
        color: Rgba,
    },
    Line {
        from: (i32, i32),
        to: (i32, i32),
        width: u32,
        color: Rgba,
    },
}

/// Sink that records every primitive so a frame can be replayed or inspected
/// later.
#[derive(Debug, Default, Clone)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Hands the recorded frame over, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl RenderSink for CommandBuffer {
    fn circle(&mut self, center: (i32, i32), radius: u32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: (i32, i32), to: (i32, i32), width: u32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_call_order() {
        let mut buffer = CommandBuffer::new();
        buffer.circle((1, 2), 3, Rgba::WHITE);
        buffer.line((0, 0), (4, 4), 2, Rgba::BLACK);

        assert_eq!(buffer.len(), 2);
        assert!(matches!(buffer.commands()[0], DrawCommand::Circle { radius: 3, .. }));
        assert!(matches!(buffer.commands()[1], DrawCommand::Line { width: 2, .. }));

        let taken = buffer.take();
        assert_eq!(taken.len(), 2);
        assert!(buffer.is_empty());
    }

    #[test]
    fn serialises_with_kind_tag() {
        let command = DrawCommand::Circle {
            center: (5, 6),
            radius: 3,
            color: Rgba::WHITE,
        };
        let json = serde_json::to_string(&command).unwrap();
        assert!(json.contains("\"kind\":\"circle\""));
    }
}
