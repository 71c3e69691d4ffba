//! In-memory [`CommandSink`] for exercising wrappers without a server.

use std::collections::VecDeque;

use mcpi_link_channel::{ChannelError, CommandSink};
use mcpi_link_protocol::{encode, Arg};

/// Records every command line and answers `send_receive` from a script.
///
/// Running out of scripted replies behaves like the peer hanging up.
#[derive(Debug, Default)]
pub struct ScriptedSink {
    sent: Vec<String>,
    replies: VecDeque<String>,
}

impl ScriptedSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies<I, T>(replies: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            sent: Vec::new(),
            replies: replies.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines sent so far, without the terminator.
    pub fn sent(&self) -> &[String] {
        &self.sent
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.sent.last().map(String::as_str)
    }

    pub fn pending_replies(&self) -> usize {
        self.replies.len()
    }

    fn record(&mut self, name: &str, args: &[Arg]) {
        let mut line = encode(name, args);
        line.pop();
        self.sent.push(String::from_utf8_lossy(&line).into_owned());
    }
}

impl CommandSink for ScriptedSink {
    fn send(&mut self, name: &str, args: &[Arg]) -> mcpi_link_channel::Result<()> {
        self.record(name, args);
        Ok(())
    }

    fn send_receive(&mut self, name: &str, args: &[Arg]) -> mcpi_link_channel::Result<String> {
        self.record(name, args);
        self.replies.pop_front().ok_or(ChannelError::Closed)
    }
}
