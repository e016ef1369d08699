use std::io::Write;
use std::sync::Mutex;

use shopflow_core::{DomainError, DomainResult};

/// Line-oriented writer shared by the console adapters.
#[derive(Debug)]
pub(crate) struct Narrator<W> {
    collaborator: &'static str,
    out: Mutex<W>,
}

impl<W: Write> Narrator<W> {
    pub(crate) fn new(collaborator: &'static str, out: W) -> Self {
        Self {
            collaborator,
            out: Mutex::new(out),
        }
    }

    pub(crate) fn line(&self, text: &str) -> DomainResult<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| DomainError::collaborator(self.collaborator, "writer lock poisoned"))?;

        writeln!(out, "{text}")
            .and_then(|_| out.flush())
            .map_err(|e| DomainError::collaborator(self.collaborator, e.to_string()))
    }

    pub(crate) fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
