//! Shared value types - positions, identifiers, events and protocol constants
//!
//! This crate defines the plain data structures exchanged with the world
//! server. It performs no I/O, so the same types are usable by the wire
//! codec, the connection layer and the typed command wrappers.
//!
//! # Wire Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_HOST` | `localhost` | Host the server listens on by default |
//! | `DEFAULT_PORT` | 4711 | TCP port of the command socket |
//! | `FIELD_SEPARATOR` | `,` | Separates arguments and reply fields |
//! | `RECORD_SEPARATOR` | `\|` | Separates records in multi-record replies |
//! | `LINE_TERMINATOR` | `\n` | Ends every command and reply line |
//!
//! # Examples
//!
//! ```
//! use mcpi_link_types::{SignFacing, Vec3};
//!
//! let feet = Vec3::new(10.7, 64.0, -3.2);
//! assert_eq!(feet.floor(), Vec3::new(10, 64, -4));
//!
//! assert_eq!(SignFacing::from_str("east"), Some(SignFacing::East));
//! assert_eq!(SignFacing::East.code(), 1);
//! ```

pub mod event;
pub mod vec3;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use event::{BlockEvent, BlockEventKind, ChatEvent, ChatEventKind, ProjectileEvent, ProjectileEventKind};
pub use vec3::Vec3;

/// Default server host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default server port.
pub const DEFAULT_PORT: u16 = 4711;

/// Separator between arguments in a command and between fields in a reply.
pub const FIELD_SEPARATOR: char = ',';

/// Separator between records of a multi-record reply (event polls, player ids).
pub const RECORD_SEPARATOR: char = '|';

/// Terminator of every line on the wire.
pub const LINE_TERMINATOR: u8 = b'\n';

/// Opaque identifier of an entity, as handed out by the server.
///
/// Entity ids are text in this protocol dialect (usually UUIDs), so they are
/// never parsed or compared numerically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Direction a placed sign faces.
///
/// The server expects the numeric code: 0 north, 1 east, 2 south, 3 west.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignFacing {
    North,
    East,
    South,
    West,
}

impl SignFacing {
    /// Numeric code sent on the wire.
    pub fn code(&self) -> i32 {
        match self {
            SignFacing::North => 0,
            SignFacing::East => 1,
            SignFacing::South => 2,
            SignFacing::West => 3,
        }
    }

    /// Parse facing from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(SignFacing::North),
            "east" | "e" => Some(SignFacing::East),
            "south" | "s" => Some(SignFacing::South),
            "west" | "w" => Some(SignFacing::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SignFacing::North => "north",
            SignFacing::East => "east",
            SignFacing::South => "south",
            SignFacing::West => "west",
        }
    }
}
