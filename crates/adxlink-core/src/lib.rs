//! Core functionalities: serial port setup, frame acquisition, rolling windows.

pub mod reader;
pub mod serial_service;
pub mod window;

pub use reader::{ByteSource, FrameReader};
pub use serial_service::{SerialConfig, SerialError};
pub use window::{AxisWindows, RollingWindow};
