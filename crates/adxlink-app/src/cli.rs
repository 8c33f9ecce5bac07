use anyhow::{bail, Result};

/// Takes the serial device path from the first positional argument.
pub fn port_from_args(mut args: impl Iterator<Item = String>) -> Result<String> {
    let program = args.next().unwrap_or_else(|| "adxl-read".into());
    let Some(port) = args.next() else {
        bail!("usage: {program} <PORT>");
    };
    let extra: Vec<String> = args.collect();
    if !extra.is_empty() {
        log::warn!("ignoring extra arguments: {}", extra.join(" "));
    }
    Ok(port)
}
