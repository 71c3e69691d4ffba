//! Command line encoding (client side) and decoding (peer side).

use std::io::Write;

use mcpi_link_types::{FIELD_SEPARATOR, LINE_TERMINATOR};

use crate::arg::Arg;

/// Append the wire form of one command to `buf`.
///
/// Layout: `name[,arg1[,arg2...]]\n`. Arguments are flattened and rendered
/// with [`Scalar`](crate::Scalar)'s `Display`. A comma follows the name only
/// when the joined payload is non-empty. Nothing is escaped, so text
/// arguments must not contain `,` or `\n`.
pub fn encode_into(buf: &mut Vec<u8>, name: &str, args: &[Arg]) {
    buf.extend_from_slice(name.as_bytes());
    let mark = buf.len();
    buf.push(FIELD_SEPARATOR as u8);

    let mut first = true;
    for arg in args {
        arg.for_each_scalar(&mut |scalar| {
            if !first {
                buf.push(FIELD_SEPARATOR as u8);
            }
            first = false;
            // Writing into a Vec cannot fail.
            let _ = write!(buf, "{}", scalar);
        });
    }

    if buf.len() == mark + 1 {
        buf.truncate(mark);
    }
    buf.push(LINE_TERMINATOR);
}

/// Encode one command into a fresh buffer.
///
/// ```
/// use mcpi_link_protocol::{args, encode};
///
/// assert_eq!(encode("world.setBlock", &args![0, 0, 0, "stone"]), b"world.setBlock,0,0,0,stone\n");
/// assert_eq!(encode("camera.mode.setFixed", &args![]), b"camera.mode.setFixed\n");
/// ```
pub fn encode(name: &str, args: &[Arg]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(name.len() + 16 * args.len() + 1);
    encode_into(&mut buf, name, args);
    buf
}

/// A command line as seen by the receiving peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> CommandLine<'a> {
    /// Split a received line into name and textual arguments.
    ///
    /// A trailing `\n` (and `\r`) is ignored. Returns `None` for an empty line.
    pub fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim_end_matches(|c| c == '\n' || c == '\r');
        if line.is_empty() {
            return None;
        }
        let mut parts = line.split(FIELD_SEPARATOR);
        let name = parts.next()?;
        Some(Self {
            name,
            args: parts.collect(),
        })
    }
}
