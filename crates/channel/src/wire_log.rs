//! Optional wire transcript.
//!
//! Records are queued on an unbounded channel and appended to the file by a
//! background task, so protocol calls never wait on the log file.

use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub enum WireRecord {
    /// A command line as written, without the terminator.
    Sent(Vec<u8>),
    /// A reply line as returned to the caller.
    Received(String),
}

/// Handle to the transcript task.
#[derive(Debug)]
pub struct WireLog {
    tx: mpsc::UnboundedSender<WireRecord>,
    task: JoinHandle<()>,
}

impl WireLog {
    /// Start appending to `path`. Must be called inside a tokio runtime.
    pub fn spawn(path: &str) -> Self {
        let path = path.to_string();
        let (tx, mut rx) = mpsc::unbounded_channel::<WireRecord>();

        let task = tokio::spawn(async move {
            let mut file = match OpenOptions::new().create(true).append(true).open(&path).await {
                Ok(f) => f,
                Err(e) => {
                    log::warn!("wire log {} unavailable: {}", path, e);
                    return;
                }
            };

            let mut buf: Vec<u8> = Vec::with_capacity(256);
            while let Some(rec) = rx.recv().await {
                buf.clear();
                match rec {
                    WireRecord::Sent(bytes) => {
                        buf.extend_from_slice(b"> ");
                        buf.extend_from_slice(&bytes);
                    }
                    WireRecord::Received(line) => {
                        buf.extend_from_slice(b"< ");
                        buf.extend_from_slice(line.as_bytes());
                    }
                }
                buf.push(b'\n');
                if file.write_all(&buf).await.is_err() {
                    break;
                }
            }

            let _ = file.flush().await;
        });

        Self { tx, task }
    }

    pub fn record(&self, rec: WireRecord) {
        let _ = self.tx.send(rec);
    }

    /// Stop accepting records and wait until everything queued is written.
    pub async fn finish(self) {
        drop(self.tx);
        let _ = self.task.await;
    }
}
