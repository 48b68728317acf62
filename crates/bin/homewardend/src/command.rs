//! Manual-override commands read from stdin.

use std::str::FromStr;

use homewarden_domain::device::DeviceKey;
use homewarden_domain::error::ValidationError;

pub const HELP: &str = "\
commands:
  toggle <device>   flip heater, window_panels, exhaust_fan, smoke_alarm or a camera id
  status            print the device status board
  help              print this message
  quit              stop the controller";

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Toggle(DeviceKey),
    Status,
    Help,
    Quit,
}

/// Errors produced while parsing a console line.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`toggle` needs a device name")]
    MissingDevice,
    #[error("invalid device name")]
    InvalidDevice(#[from] ValidationError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        match verb.to_lowercase().as_str() {
            "" => Err(CommandError::Empty),
            "toggle" | "t" => {
                let device = rest.trim();
                if device.is_empty() {
                    return Err(CommandError::MissingDevice);
                }
                Ok(Self::Toggle(device.parse()?))
            }
            "status" | "s" => Ok(Self::Status),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
