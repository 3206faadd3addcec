use super::{DrawCommand, Surface};

/// Surface that keeps the commands of the most recent frame.
///
/// A `Clear` starts a new frame and discards what was recorded before it.
#[derive(Clone, Debug, Default)]
pub struct FrameRecorder {
    commands: Vec<DrawCommand>,
}

impl FrameRecorder {
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

    /// Y of every full-width horizontal line, in draw order.
    pub fn horizontal_line_ys(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } if from.1 == to.1 && from.0 != to.0 => Some(from.1),
                _ => None,
            })
            .collect()
    }

    /// X of every vertical line, in draw order.
    pub fn vertical_line_xs(&self) -> Vec<f64> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Line { from, to, .. } if from.0 == to.0 && from.1 != to.1 => Some(from.0),
                _ => None,
            })
            .collect()
    }

    pub fn dot_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Dot { .. }))
            .count()
    }

    pub fn beam_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Beam { .. }))
            .count()
    }
}

impl Surface for FrameRecorder {
    fn draw(&mut self, command: &DrawCommand) {
        if matches!(command, DrawCommand::Clear { .. }) {
            self.commands.clear();
        }
        self.commands.push(command.clone());
    }
}
