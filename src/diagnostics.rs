//! Diagnostics sink handed to the scanner and deleter.
//!
//! The core never touches a global logger; whoever constructs a scanner
//! decides where its messages go.

/// Severity-split message sink.
pub trait Diagnostics {
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn debug(&self, message: &str);
}

/// Production sink, forwards to `tracing`.
#[derive(Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

/// Records messages so tests can assert on them.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    pub messages: std::sync::Mutex<Vec<(&'static str, String)>>,
}

#[cfg(test)]
impl CollectingDiagnostics {
    pub fn recorded(&self, level: &str) -> Vec<String> {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

#[cfg(test)]
impl Diagnostics for CollectingDiagnostics {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(("info", message.into()));
    }

    fn warn(&self, message: &str) {
        self.messages.lock().unwrap().push(("warn", message.into()));
    }

    fn debug(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(("debug", message.into()));
    }
}
