//! Console sinks shared by the `adxl-read` binaries.

pub mod cli;
pub mod table;

/// Baud rate of the console readers.
pub const CONSOLE_BAUD: u32 = 19_200;

/// Logs to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
