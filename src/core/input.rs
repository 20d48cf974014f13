//! The five audio inputs and the fixed order the selector steps through them.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An audio input the selector can be switched to.
///
/// The inputs form a single closed cycle:
/// Bluetooth → Optical → Coaxial → RCA → USB → Bluetooth.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum Input {
    #[default]
    Bluetooth,
    Optical,
    Coaxial,
    #[serde(rename = "RCA")]
    Rca,
    #[serde(rename = "USB")]
    Usb,
}

impl Input {
    /// Every input, in cycle order starting from the power-on input.
    pub const ALL: [Input; 5] = [
        Input::Bluetooth,
        Input::Optical,
        Input::Coaxial,
        Input::Rca,
        Input::Usb,
    ];

    /// Announcement printed when the selector lands on this input.
    pub fn message(&self) -> String {
        format!("Switching input to {}...", self.name())
    }
}

impl State for Input {
    fn name(&self) -> &'static str {
        match self {
            Self::Bluetooth => "Bluetooth",
            Self::Optical => "Optical",
            Self::Coaxial => "Coaxial",
            Self::Rca => "RCA",
            Self::Usb => "USB",
        }
    }

    fn successor(&self) -> Self {
        match self {
            Self::Bluetooth => Self::Optical,
            Self::Optical => Self::Coaxial,
            Self::Coaxial => Self::Rca,
            Self::Rca => Self::Usb,
            Self::Usb => Self::Bluetooth,
        }
    }
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when text does not name one of the five inputs.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseInputError {
    #[error("Unknown input '{0}', expected one of: Bluetooth, Optical, Coaxial, RCA, USB")]
    Unknown(String),
}

impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|input| input.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseInputError::Unknown(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn successor_follows_the_cycle() {
        assert_eq!(Input::Bluetooth.successor(), Input::Optical);
        assert_eq!(Input::Optical.successor(), Input::Coaxial);
        assert_eq!(Input::Coaxial.successor(), Input::Rca);
        assert_eq!(Input::Rca.successor(), Input::Usb);
        assert_eq!(Input::Usb.successor(), Input::Bluetooth);
    }

    #[test]
    fn all_is_listed_in_cycle_order() {
        for pair in Input::ALL.windows(2) {
            assert_eq!(pair[0].successor(), pair[1]);
        }
        assert_eq!(Input::ALL[4].successor(), Input::ALL[0]);
    }

    #[test]
    fn cycle_has_period_five() {
        for input in Input::ALL {
            let mut current = input;
            for step in 1..=5 {
                current = current.successor();
                if step < 5 {
                    assert_ne!(current, input);
                }
            }
            assert_eq!(current, input);
        }
    }

    #[test]
    fn default_is_bluetooth() {
        assert_eq!(Input::default(), Input::Bluetooth);
    }

    #[test]
    fn display_uses_acronyms() {
        assert_eq!(Input::Rca.to_string(), "RCA");
        assert_eq!(Input::Usb.to_string(), "USB");
        assert_eq!(Input::Coaxial.to_string(), "Coaxial");
    }

    #[test]
    fn message_names_the_destination() {
        assert_eq!(Input::Optical.message(), "Switching input to Optical...");
        assert_eq!(Input::Rca.message(), "Switching input to RCA...");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("usb".parse::<Input>(), Ok(Input::Usb));
        assert_eq!(" Rca ".parse::<Input>(), Ok(Input::Rca));
        assert_eq!("BLUETOOTH".parse::<Input>(), Ok(Input::Bluetooth));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "HDMI".parse::<Input>().unwrap_err();
        assert_eq!(err, ParseInputError::Unknown("HDMI".to_string()));
        assert!(err.to_string().contains("HDMI"));
    }

    #[test]
    fn serializes_with_display_names() {
        assert_eq!(serde_json::to_string(&Input::Rca).unwrap(), "\"RCA\"");
        let parsed: Input = serde_json::from_str("\"USB\"").unwrap();
        assert_eq!(parsed, Input::Usb);
    }
}
