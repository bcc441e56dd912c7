use anyhow::{Context, Result};

use crate::gate::GateEvent;

/// One line of input to the `run` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceCommand {
    /// Device signal forwarded straight to the gate
    Signal(GateEvent),
    /// Zero-based option index
    Answer(usize),
    Pin(String),
    Unlock,
    Emergency,
    Quiz,
    /// New session duration, with the parent PIN when one is set
    Duration { minutes: u32, pin: Option<String> },
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
Device signals:
  screen-off            screen turned off
  screen-on             screen turned on
  user-present          user passed the system lock screen
  force-gate            uninstall protection asks for the parent PIN
Gate input:
  answer <1-4>          choose a challenge option
  unlock                confirm the unlock screen (learning mode off)
  emergency             switch to the parent PIN pad
  pin <4 digits>        enter the parent PIN
  quiz                  go back from the PIN pad to a challenge
Other:
  duration <minutes> [pin]
                        change the session duration (parent PIN if set)
  status                show the session state
  help                  show this help
  quit                  exit";

/// Parse a command line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str, keyguard_secure: bool) -> Result<Option<DeviceCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut parts = line.split_whitespace();
    let name = parts.next().unwrap_or_default().to_lowercase();
    let arg = parts.next();
    let extra = parts.next();

    if parts.next().is_some() || (extra.is_some() && name != "duration") {
        anyhow::bail!("Too many arguments: {}", line);
    }

    let command = match (name.as_str(), arg) {
        ("screen-off", None) => DeviceCommand::Signal(GateEvent::ScreenOff),
        ("screen-on", None) => DeviceCommand::Signal(GateEvent::ScreenOn { keyguard_secure }),
        ("user-present", None) => DeviceCommand::Signal(GateEvent::UserPresent),
        ("force-gate", None) => DeviceCommand::Signal(GateEvent::ExternalForceGateRequest),
        ("answer", Some(value)) => {
            let choice: usize = value
                .parse()
                .with_context(|| format!("Invalid option number: {}", value))?;
            if choice == 0 {
                anyhow::bail!("Options are numbered from 1");
            }
            DeviceCommand::Answer(choice - 1)
        }
        ("pin", Some(value)) => DeviceCommand::Pin(value.to_string()),
        ("unlock", None) => DeviceCommand::Unlock,
        ("emergency", None) => DeviceCommand::Emergency,
        ("quiz", None) => DeviceCommand::Quiz,
        ("duration", Some(value)) => {
            let minutes = value
                .parse()
                .with_context(|| format!("Invalid number of minutes: {}", value))?;
            DeviceCommand::Duration {
                minutes,
                pin: extra.map(str::to_string),
            }
        }
        ("status", None) => DeviceCommand::Status,
        ("help", None) => DeviceCommand::Help,
        ("quit" | "exit", None) => DeviceCommand::Quit,
        ("answer" | "pin" | "duration", None) => anyhow::bail!("'{}' needs an argument", name),
        (_, Some(_)) if is_known(&name) => anyhow::bail!("'{}' takes no argument", name),
        _ => anyhow::bail!("Unknown command '{}', type 'help' for a list", name),
    };

    Ok(Some(command))
}

fn is_known(name: &str) -> bool {
    matches!(
        name,
        "screen-off"
            | "screen-on"
            | "user-present"
            | "force-gate"
            | "unlock"
            | "emergency"
            | "quiz"
            | "status"
            | "help"
            | "quit"
            | "exit"
    )
}
