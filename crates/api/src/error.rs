use thiserror::Error;

use mcpi_link_channel::ChannelError;
use mcpi_link_protocol::ReplyError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Channel(#[from] ChannelError),

    #[error("malformed reply to {command}: {source}")]
    Reply {
        command: String,
        #[source]
        source: ReplyError,
    },
}

impl ApiError {
    /// True when the channel itself failed and must be replaced.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ApiError::Channel(_))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

/// Attach the command name to a reply parsing failure.
pub(crate) fn checked<T>(command: &str, parsed: std::result::Result<T, ReplyError>) -> Result<T> {
    parsed.map_err(|source| ApiError::Reply {
        command: command.to_string(),
        source,
    })
}
