use egui::{Key, Modifiers, Vec2};

/// What a key press means while a frame's image is being edited
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ImageKeyCommand {
    /// Move the pan by whole steps along each axis
    Nudge { steps: Vec2, fast: bool },
    ZoomIn,
    ZoomOut,
    /// Centered, unzoomed
    Reset,
    /// Leave editing and restore the values from before editing began
    Cancel,
    /// Leave editing keeping the current values
    Done,
}

/// Maps a key press from the pointer/keyboard source to an image command.
///
/// Shift selects the fast nudge step. Returns `None` for keys that have no
/// meaning in image editing.
pub fn image_key_command(key: Key, modifiers: Modifiers) -> Option<ImageKeyCommand> {
    let nudge = |x: f32, y: f32| ImageKeyCommand::Nudge {
        steps: Vec2::new(x, y),
        fast: modifiers.shift,
    };
    let command = match key {
        Key::ArrowLeft => nudge(-1.0, 0.0),
        Key::ArrowRight => nudge(1.0, 0.0),
        Key::ArrowUp => nudge(0.0, -1.0),
        Key::ArrowDown => nudge(0.0, 1.0),
        Key::Plus | Key::Equals => ImageKeyCommand::ZoomIn,
        Key::Minus => ImageKeyCommand::ZoomOut,
        Key::Num0 => ImageKeyCommand::Reset,
        Key::Escape => ImageKeyCommand::Cancel,
        Key::Enter => ImageKeyCommand::Done,
        _ => return None,
    };
    Some(command)
}
