//! Wire codec for the world control protocol
//!
//! The protocol is plain text over a reliable byte stream. Every command is
//! one line; commands that return something get exactly one reply line.
//!
//! # Command Lines
//!
//! ```text
//! <name>[,<arg1>[,<arg2>...]]\n
//! ```
//!
//! - `name` is a dotted keyword path such as `world.setBlock`
//! - arguments are flattened depth-first ([`flatten`]); text is never split
//! - integers print undecorated, floats in shortest round-trip form (`1.0`)
//! - no escaping: text containing `,` or `\n` corrupts framing
//!
//! # Reply Lines
//!
//! A reply is a bare scalar (`72`), a comma-joined tuple (`12.5,64.0,3.0`) or
//! a `|`-separated list of comma-joined records. Helpers in [`reply`] split
//! and validate these shapes.
//!
//! # Example
//!
//! ```
//! use mcpi_link_protocol::{args, encode, CommandLine};
//!
//! let line = encode("world.setBlock", &args![0, 0, 0, "stone"]);
//! assert_eq!(line, b"world.setBlock,0,0,0,stone\n");
//!
//! let peer_view = CommandLine::parse(std::str::from_utf8(&line).unwrap()).unwrap();
//! assert_eq!(peer_view.name, "world.setBlock");
//! assert_eq!(peer_view.args, ["0", "0", "0", "stone"]);
//! ```

pub mod arg;
pub mod codec;
pub mod reply;

pub use mcpi_link_types as types;

pub use arg::{flatten, Arg, Scalar};
pub use codec::{encode, encode_into, CommandLine};
pub use reply::ReplyError;
