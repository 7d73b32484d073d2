//! Cross-context console: workers forward output to the coordinator
//!
//! Every checker runs on its own worker thread. Workers never touch stdout:
//! their [`Logger`] posts a [`WorkerMessage`] and the [`Coordinator`] on the
//! main thread is the single writer. Whether a logger writes or posts is
//! decided once, when it is constructed.

use crate::output::runtime::RuntimeEnvelope;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;

/// Message posted from a worker to the coordinating thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "camelCase")]
pub enum WorkerMessage {
    /// Text to print, as one `console.log` call would
    Console(String),
    /// Envelope to deliver to the overlay
    OverlayError(RuntimeEnvelope),
}

enum Target {
    Main(Mutex<Box<dyn Write + Send>>),
    Worker(Sender<WorkerMessage>),
}

/// Console indirection, bound to either the coordinator or a worker
pub struct Logger {
    target: Target,
}

impl Logger {
    /// Logger for the coordinating thread, writing straight to `writer`
    pub fn main(writer: Box<dyn Write + Send>) -> Self {
        Self {
            target: Target::Main(Mutex::new(writer)),
        }
    }

    /// Logger for a worker thread, posting through `sender`
    pub fn worker(sender: Sender<WorkerMessage>) -> Self {
        Self {
            target: Target::Worker(sender),
        }
    }

    pub fn is_main(&self) -> bool {
        matches!(self.target, Target::Main(_))
    }

    /// Print one line of text (or hand it to the coordinator)
    pub fn log(&self, text: &str) {
        match &self.target {
            Target::Main(writer) => {
                let mut writer = writer.lock().unwrap_or_else(|e| e.into_inner());
                if let Err(e) = writeln!(writer, "{}", text).and_then(|_| writer.flush()) {
                    tracing::warn!("console write failed: {}", e);
                }
            }
            Target::Worker(sender) => {
                if sender.send(WorkerMessage::Console(text.to_string())).is_err() {
                    tracing::warn!("coordinator gone, dropping console output");
                }
            }
        }
    }

    /// Deliver an overlay envelope.
    ///
    /// Workers post it to the coordinator; the coordinator itself prints the
    /// envelope as one line of JSON.
    pub fn overlay(&self, envelope: RuntimeEnvelope) {
        match &self.target {
            Target::Main(_) => match serde_json::to_string(&envelope) {
                Ok(json) => self.log(&json),
                Err(e) => tracing::warn!("failed to serialize overlay envelope: {}", e),
            },
            Target::Worker(sender) => {
                if sender.send(WorkerMessage::OverlayError(envelope)).is_err() {
                    tracing::warn!("coordinator gone, dropping overlay envelope");
                }
            }
        }
    }
}

/// The coordinating end: owns the only writer
pub struct Coordinator {
    rx: Receiver<WorkerMessage>,
    console: Logger,
}

impl Coordinator {
    /// Create a coordinator writing to `writer`, plus the sender workers clone
    pub fn new(writer: Box<dyn Write + Send>) -> (Sender<WorkerMessage>, Self) {
        let (tx, rx) = mpsc::channel();
        let coordinator = Self {
            rx,
            console: Logger::main(writer),
        };
        (tx, coordinator)
    }

    /// Drain messages until every worker sender is dropped.
    ///
    /// Console text is written in arrival order; overlay envelopes are
    /// returned, also in arrival order.
    pub fn run(self) -> Vec<RuntimeEnvelope> {
        let mut envelopes = Vec::new();
        for message in self.rx {
            match message {
                WorkerMessage::Console(text) => self.console.log(&text),
                WorkerMessage::OverlayError(envelope) => envelopes.push(envelope),
            }
        }
        envelopes
    }
}
