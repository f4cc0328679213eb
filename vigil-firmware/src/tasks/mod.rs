//! Embassy async tasks
//!
//! Each task runs independently and communicates via the shared event
//! flags, the wake signal, and the display channel.

pub mod button;
pub mod controller;
pub mod display;
pub mod motion;
pub mod remote;

pub use button::button_task;
pub use controller::controller_task;
pub use display::{display_task, BoardLcd};
pub use motion::motion_task;
pub use remote::remote_task;
