use thiserror::Error;

/// Failure of the command channel. Every variant is fatal for the call that
/// produced it; the channel does not reconnect.
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The stream could not be established.
    #[error("cannot connect to {addr}: {source}")]
    Connect {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Reading from or writing to an established stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer closed the stream before a complete reply line arrived.
    #[error("connection closed by peer before a complete reply line")]
    Closed,

    /// The reply line is not valid UTF-8.
    #[error("reply is not valid UTF-8: {0}")]
    Decode(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, ChannelError>;
