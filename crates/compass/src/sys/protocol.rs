//! Line protocol spoken over the control socket.
//!
//! Clients send one command per line. After `subscribe`, the server writes a
//! `navigate <id>` line for every navigation the compass emits.

use crate::events::AppEvent;
use compass_core::{ItemId, Orientation};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const NAVIGATE: &str = "navigate";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Show,
    Hide,
    Active(ItemId),
    Orientation(Orientation),
    Subscribe,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("empty command")]
    Empty,
    #[error("unknown command '{0}'")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown orientation '{0}'")]
    BadOrientation(String),
}

impl FromStr for Command {
    type Err = ProtocolError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, arg) = line
            .split_once(char::is_whitespace)
            .map(|(verb, arg)| (verb, arg.trim()))
            .unwrap_or((line, ""));

        let required = |name: &'static str| {
            (!arg.is_empty())
                .then_some(arg)
                .ok_or(ProtocolError::MissingArgument(name))
        };

        match verb {
            "" => Err(ProtocolError::Empty),
            "show" => Ok(Self::Show),
            "hide" => Ok(Self::Hide),
            "subscribe" => Ok(Self::Subscribe),
            "active" => Ok(Self::Active(ItemId::new(required("active")?))),
            "orientation" => {
                let name = required("orientation")?;
                name.parse()
                    .map(Self::Orientation)
                    .map_err(|_| ProtocolError::BadOrientation(name.to_string()))
            }
            other => Err(ProtocolError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Show => write!(f, "show"),
            Self::Hide => write!(f, "hide"),
            Self::Active(id) => write!(f, "active {}", id),
            Self::Orientation(orientation) => write!(f, "orientation {}", orientation),
            Self::Subscribe => write!(f, "subscribe"),
        }
    }
}

impl Command {
    /// What the GUI should do with this command, if anything.
    pub fn into_event(self) -> Option<AppEvent> {
        match self {
            Self::Show => Some(AppEvent::Show),
            Self::Hide => Some(AppEvent::Hide),
            Self::Active(id) => Some(AppEvent::ActiveSection(id)),
            Self::Orientation(orientation) => Some(AppEvent::Orientation(orientation)),
            Self::Subscribe => None,
        }
    }
}

pub fn navigation_line(id: &ItemId) -> String {
    format!("{} {}\n", NAVIGATE, id)
}

pub fn parse_navigation(line: &str) -> Option<ItemId> {
    let (verb, id) = line.trim().split_once(char::is_whitespace)?;
    let id = id.trim();
    (verb == NAVIGATE && !id.is_empty()).then(|| ItemId::new(id))
}
