//! Command channel - one persistent text stream to the world server
//!
//! The channel turns a command name plus arguments into one line on the
//! socket and, for commands that answer, reads back exactly one line.
//!
//! # Behaviour
//!
//! 1. **Connect**: one TCP stream per channel, opened up front
//!    (default `localhost:4711`). Failure is returned immediately, no retry.
//! 2. **Send**: encode (see `mcpi_link_protocol::encode`), write, flush.
//! 3. **Receive**: read until `\n`, across any number of reads; strip the
//!    `\n`; decode UTF-8. The peer closing first is [`ChannelError::Closed`].
//! 4. **Matching**: implicit. One request in flight at a time; the next line
//!    is the reply to the latest [`CommandChannel::send_receive`].
//!
//! There is no reconnect and no timeout at this layer. After any error the
//! channel should be dropped and a new one connected.
//!
//! # Environment Variables
//!
//! - `JRP_API_HOST`: server host (default: "localhost")
//! - `JRP_API_PORT`: server port (default: 4711); ignored unless a valid port
//! - `JRP_API_LOG_PATH`: append a transcript of all lines to this file
//!
//! # Diagnostics
//!
//! With [`Endpoint::debug`] set, every line sent (`> ...`) and received
//! (`< ...`) is logged at `info` level on the `mcpi_link::wire` target. The
//! echo never alters traffic or errors.
//!
//! # Example
//!
//! ```no_run
//! use mcpi_link_channel::{BlockingChannel, Endpoint};
//! use mcpi_link_protocol::args;
//!
//! let mut ch = BlockingChannel::connect(&Endpoint::from_env()).unwrap();
//! ch.send("chat.post", &args!["Hello, world"]).unwrap();
//! let height = ch.send_receive("world.getHeight", &args![0, 0]).unwrap();
//! println!("ground at y={}", height);
//! ```

pub mod blocking;
pub mod channel;
pub mod endpoint;
pub mod error;
pub mod wire_log;

pub use mcpi_link_protocol as protocol;

pub use blocking::{BlockingChannel, CommandSink};
pub use channel::{CommandChannel, WIRE_TARGET};
pub use endpoint::{Endpoint, ENV_HOST, ENV_LOG_PATH, ENV_PORT};
pub use error::{ChannelError, Result};
pub use wire_log::{WireLog, WireRecord};
