//! Prints tri-axial ADXL345 samples as a table: `adxl-read <PORT>`.

use adxlink_app::{cli, init_logging, table, CONSOLE_BAUD};
use adxlink_core::{FrameReader, SerialConfig};
use anyhow::Result;

fn main() -> Result<()> {
    init_logging();
    let port_name = cli::port_from_args(std::env::args())?;
    let port = SerialConfig::new(port_name, CONSOLE_BAUD).open()?;
    let mut reader = FrameReader::new(port);
    table::print_triaxial(&mut reader, &mut std::io::stdout().lock())
}
