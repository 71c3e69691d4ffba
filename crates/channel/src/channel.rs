//! Async command channel over one persistent stream.

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;

use mcpi_link_protocol::types::LINE_TERMINATOR;
use mcpi_link_protocol::{encode_into, Arg};

use crate::endpoint::Endpoint;
use crate::error::{ChannelError, Result};
use crate::wire_log::{WireLog, WireRecord};

/// Log target of the debug echo.
pub const WIRE_TARGET: &str = "mcpi_link::wire";

/// One request/reply channel.
///
/// Strictly synchronous on the wire: there are no request ids, so the next
/// line read is always the reply to the most recent [`send_receive`]. Every
/// operation takes `&mut self`, which rules out interleaved requests on one
/// channel.
///
/// [`send_receive`]: CommandChannel::send_receive
pub struct CommandChannel<S> {
    stream: BufReader<S>,
    debug: bool,
    wire_log: Option<WireLog>,
    out_buf: Vec<u8>,
    in_buf: Vec<u8>,
}

impl CommandChannel<TcpStream> {
    /// Open the TCP stream to `endpoint`. No retry.
    pub async fn connect(endpoint: &Endpoint) -> Result<Self> {
        let addr = endpoint.addr();
        let stream = TcpStream::connect(&addr)
            .await
            .map_err(|source| ChannelError::Connect {
                addr: addr.clone(),
                source,
            })?;
        // Commands are tiny; do not let Nagle hold them back.
        if let Err(e) = stream.set_nodelay(true) {
            log::debug!("set_nodelay on {} failed: {}", addr, e);
        }
        log::debug!("connected to {}", addr);

        let mut channel = Self::new(stream, endpoint.debug);
        if let Some(path) = endpoint.log_path.as_deref() {
            channel.wire_log = Some(WireLog::spawn(path));
        }
        Ok(channel)
    }
}

impl<S> CommandChannel<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap an already connected stream.
    pub fn new(stream: S, debug: bool) -> Self {
        Self {
            stream: BufReader::new(stream),
            debug,
            wire_log: None,
            out_buf: Vec::with_capacity(128),
            in_buf: Vec::with_capacity(256),
        }
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Encode and write one command. Nothing is read back.
    pub async fn send(&mut self, name: &str, args: &[Arg]) -> Result<()> {
        self.out_buf.clear();
        encode_into(&mut self.out_buf, name, args);

        self.stream.write_all(&self.out_buf).await?;
        self.stream.flush().await?;

        let line = &self.out_buf[..self.out_buf.len() - 1];
        if self.debug {
            log::info!(target: WIRE_TARGET, "> {}", String::from_utf8_lossy(line));
        }
        if let Some(wire_log) = self.wire_log.as_ref() {
            wire_log.record(WireRecord::Sent(line.to_vec()));
        }
        Ok(())
    }

    /// Send one command and return its single reply line, without the `\n`.
    pub async fn send_receive(&mut self, name: &str, args: &[Arg]) -> Result<String> {
        self.send(name, args).await?;
        self.read_line().await
    }

    /// Read one `\n`-terminated line.
    ///
    /// Bytes are accumulated across as many reads as the stream delivers.
    /// End of stream before the terminator is [`ChannelError::Closed`]; the
    /// partial line is discarded.
    pub async fn read_line(&mut self) -> Result<String> {
        self.in_buf.clear();
        self.stream.read_until(LINE_TERMINATOR, &mut self.in_buf).await?;

        if self.in_buf.last() != Some(&LINE_TERMINATOR) {
            if !self.in_buf.is_empty() {
                log::debug!("peer closed mid-line after {} bytes", self.in_buf.len());
            }
            return Err(ChannelError::Closed);
        }
        self.in_buf.pop();

        let line = std::str::from_utf8(&self.in_buf)?.to_string();
        if self.debug {
            log::info!(target: WIRE_TARGET, "< {}", line);
        }
        if let Some(wire_log) = self.wire_log.as_ref() {
            wire_log.record(WireRecord::Received(line.clone()));
        }
        Ok(line)
    }

    /// Shut down the write side and flush the wire transcript.
    pub async fn close(mut self) -> Result<()> {
        self.shutdown().await
    }

    /// [`close`](Self::close) without consuming the channel. Nothing may be
    /// sent afterwards.
    pub async fn shutdown(&mut self) -> Result<()> {
        let shutdown = self.stream.get_mut().shutdown().await;
        if let Some(wire_log) = self.wire_log.take() {
            wire_log.finish().await;
        }
        shutdown.map_err(ChannelError::from)
    }

    /// Detach the transcript writer, e.g. to drain it before the runtime
    /// driving it goes away.
    pub fn take_wire_log(&mut self) -> Option<WireLog> {
        self.wire_log.take()
    }

    pub fn into_inner(self) -> S {
        self.stream.into_inner()
    }
}
