//! mcpi-link (workspace facade crate).
//!
//! Re-exports the member crates under one name so applications depend on a
//! single package: `mcpi_link::{api,channel,protocol,types}`.

pub use mcpi_link_api as api;
pub use mcpi_link_channel as channel;
pub use mcpi_link_protocol as protocol;
pub use mcpi_link_types as types;

pub use mcpi_link_api::{ApiError, Minecraft};
pub use mcpi_link_channel::{BlockingChannel, ChannelError, CommandChannel, CommandSink, Endpoint};
pub use mcpi_link_protocol::args;
