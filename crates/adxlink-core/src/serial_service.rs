use serialport::SerialPort;
use std::io;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SerialError {
    #[error("failed to open {port}: {source}")]
    Open {
        port: String,
        #[source]
        source: serialport::Error,
    },
    #[error("serial I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("serial device disconnected")]
    Disconnected,
}

#[derive(Debug, Clone)]
pub struct SerialConfig {
    pub port_name: String,
    pub baud_rate: u32,
    pub data_bits: serialport::DataBits,
    pub parity: serialport::Parity,
    pub stop_bits: serialport::StopBits,
    pub flow_control: serialport::FlowControl,
    pub timeout: Duration,
}

impl Default for SerialConfig {
    fn default() -> Self {
        Self {
            port_name: String::new(),
            baud_rate: 19_200,
            data_bits: serialport::DataBits::Eight,
            parity: serialport::Parity::None,
            stop_bits: serialport::StopBits::One,
            flow_control: serialport::FlowControl::None,
            timeout: Duration::from_secs(1),
        }
    }
}

impl SerialConfig {
    pub fn new(port_name: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            port_name: port_name.into(),
            baud_rate,
            ..Default::default()
        }
    }

    /// Opens the port exclusively. The handle is the only owner of the device.
    pub fn open(&self) -> Result<Box<dyn SerialPort>, SerialError> {
        let port = serialport::new(&self.port_name, self.baud_rate)
            .data_bits(self.data_bits)
            .parity(self.parity)
            .stop_bits(self.stop_bits)
            .flow_control(self.flow_control)
            .timeout(self.timeout)
            .open()
            .map_err(|source| SerialError::Open {
                port: self.port_name.clone(),
                source,
            })?;
        log::info!("opened {} at {} baud", self.port_name, self.baud_rate);
        Ok(port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_console_readers() {
        let cfg = SerialConfig::new("/dev/ttyUSB0", 9600);
        assert_eq!(cfg.port_name, "/dev/ttyUSB0");
        assert_eq!(cfg.baud_rate, 9600);
        assert_eq!(cfg.timeout, Duration::from_secs(1));
        assert_eq!(cfg.data_bits, serialport::DataBits::Eight);
        assert_eq!(SerialConfig::default().baud_rate, 19_200);
    }

    #[test]
    fn open_failure_names_the_port() {
        let cfg = SerialConfig::new("/nonexistent/adxl-tty", 19_200);
        let err = cfg.open().err().expect("port should not exist");
        assert!(matches!(err, SerialError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/adxl-tty"));
    }
}
