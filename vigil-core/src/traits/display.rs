//! Status display trait
//!
//! The core never manages character positioning policy beyond the message
//! text, a line index, and the backlight.

use crate::controller::DisplayAction;

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transaction failed
    Bus,
    /// Line index outside the panel
    OutOfRange,
}

/// Trait for short status message rendering
pub trait StatusDisplay {
    /// Show a message on the given line, replacing its previous content
    fn show_message(&mut self, line: u8, text: &str) -> Result<(), DisplayError>;

    /// Blank the whole panel
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Switch the backlight on or off
    fn set_backlight(&mut self, on: bool) -> Result<(), DisplayError>;

    /// Apply one controller-issued display action
    fn apply(&mut self, action: DisplayAction) -> Result<(), DisplayError> {
        match action {
            DisplayAction::Show { line, text } => self.show_message(line, text),
            DisplayAction::Clear => self.clear(),
            DisplayAction::Backlight(on) => self.set_backlight(on),
        }
    }
}
