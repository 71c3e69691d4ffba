//! Blocking bridge.
//!
//! Owns a private tokio runtime and drives the async [`CommandChannel`] to
//! completion on every call, so plain synchronous programs can use the
//! protocol without an executor of their own.

use tokio::net::TcpStream;
use tokio::runtime::{Builder, Runtime};

use mcpi_link_protocol::Arg;

use crate::channel::CommandChannel;
use crate::endpoint::Endpoint;
use crate::error::Result;

/// The two primitives every higher-level command wrapper needs.
pub trait CommandSink {
    /// Fire-and-forget command.
    fn send(&mut self, name: &str, args: &[Arg]) -> Result<()>;

    /// Command with exactly one reply line.
    fn send_receive(&mut self, name: &str, args: &[Arg]) -> Result<String>;
}

impl<T: CommandSink + ?Sized> CommandSink for &mut T {
    fn send(&mut self, name: &str, args: &[Arg]) -> Result<()> {
        (**self).send(name, args)
    }

    fn send_receive(&mut self, name: &str, args: &[Arg]) -> Result<String> {
        (**self).send_receive(name, args)
    }
}

/// Synchronous command channel.
///
/// Every call blocks the current thread until the line is written (and, for
/// [`send_receive`](Self::send_receive), the reply read). Do not use from
/// inside an async runtime; use [`CommandChannel`] there.
pub struct BlockingChannel {
    rt: Runtime,
    inner: CommandChannel<TcpStream>,
}

impl BlockingChannel {
    pub fn connect(endpoint: &Endpoint) -> Result<Self> {
        let rt = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("mcpi-link")
            .enable_all()
            .build()?;
        let inner = rt.block_on(CommandChannel::connect(endpoint))?;
        Ok(Self { rt, inner })
    }

    pub fn send(&mut self, name: &str, args: &[Arg]) -> Result<()> {
        self.rt.block_on(self.inner.send(name, args))
    }

    pub fn send_receive(&mut self, name: &str, args: &[Arg]) -> Result<String> {
        self.rt.block_on(self.inner.send_receive(name, args))
    }

    /// Close the stream and flush the wire transcript, if any.
    pub fn close(mut self) -> Result<()> {
        self.rt.block_on(self.inner.shutdown())
    }
}

/// Drains the wire transcript before the runtime that writes it goes away.
impl Drop for BlockingChannel {
    fn drop(&mut self) {
        if let Some(wire_log) = self.inner.take_wire_log() {
            self.rt.block_on(wire_log.finish());
        }
    }
}

impl CommandSink for BlockingChannel {
    fn send(&mut self, name: &str, args: &[Arg]) -> Result<()> {
        BlockingChannel::send(self, name, args)
    }

    fn send_receive(&mut self, name: &str, args: &[Arg]) -> Result<String> {
        BlockingChannel::send_receive(self, name, args)
    }
}
