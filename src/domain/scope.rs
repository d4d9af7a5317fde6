//! Installation scopes
//!
//! A [`Scope`] is what the user asks for; a [`Location`] is a concrete place on
//! disk that the installer processes. `Both` is only an expansion, never a
//! third physical location.

use std::fmt;
use std::str::FromStr;

use crate::error::{AeError, invalid_scope};

/// Requested installation scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Per-user installation rooted at the home directory
    Global,
    /// Per-project installation rooted at the project directory
    Local,
    /// Global followed by local
    Both,
}

/// Concrete installation location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Location {
    Global,
    Local,
}

impl Scope {
    /// All scopes, in prompt order
    pub const ALL: [Scope; 3] = [Scope::Global, Scope::Local, Scope::Both];

    /// Expand into the ordered list of concrete locations
    pub fn expand(self) -> Vec<Location> {
        match self {
            Scope::Global => vec![Location::Global],
            Scope::Local => vec![Location::Local],
            Scope::Both => vec![Location::Global, Location::Local],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Local => "local",
            Scope::Both => "both",
        }
    }
}

impl Location {
    pub fn as_str(self) -> &'static str {
        match self {
            Location::Global => "global",
            Location::Local => "local",
        }
    }
}

impl From<Location> for Scope {
    fn from(location: Location) -> Self {
        match location {
            Location::Global => Scope::Global,
            Location::Local => Scope::Local,
        }
    }
}

impl FromStr for Scope {
    type Err = AeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "global" | "g" => Ok(Scope::Global),
            "local" | "l" => Ok(Scope::Local),
            "both" | "gl" => Ok(Scope::Both),
            _ => Err(invalid_scope(s)),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
