//! Mail sender that prints instead of sending.

use std::io::{self, Write};
use std::sync::Mutex;

use async_trait::async_trait;

use hikeplan_lib::{EmailMessage, Error, MailSender, Result};

pub const DRY_RUN_MESSAGE_ID: &str = "dry-run";

/// Writes each message to a sink (stdout by default).
pub struct PrintingMailer<W: Write + Send> {
    sink: Mutex<W>,
}

impl PrintingMailer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> PrintingMailer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    pub fn into_inner(self) -> W {
        match self.sink.into_inner() {
            Ok(sink) => sink,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl<W: Write + Send> MailSender for PrintingMailer<W> {
    async fn send_email(&self, email: &EmailMessage) -> Result<String> {
        let mut sink = self
            .sink
            .lock()
            .map_err(|_| Error::MailDispatch("dry-run sink lock poisoned".to_string()))?;
        writeln!(
            sink,
            "To: {}\nSubject: {}\n\n{}\n",
            email.to, email.subject, email.body
        )
        .and_then(|_| sink.flush())
        .map_err(|e| Error::MailDispatch(format!("failed to print email: {}", e)))?;
        Ok(DRY_RUN_MESSAGE_ID.to_string())
    }
}
