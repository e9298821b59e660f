use smallvec::SmallVec;
use std::fmt;

/// A presentation change for one element, applied by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    SetStyle {
        property: &'static str,
        value: String,
    },
    AddClass(String),
    RemoveClass(String),
}

/// Commands produced for a single element in one step; two at most in practice.
pub type Commands = SmallVec<[Command; 2]>;

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::SetStyle { property, value } => write!(f, "{property}: {value}"),
            Command::AddClass(name) => write!(f, "+.{name}"),
            Command::RemoveClass(name) => write!(f, "-.{name}"),
        }
    }
}
