//! Per-call diagnostic buffer.

/// Collects notes about a single resolver call.
///
/// Notes are only formatted when diagnostics are enabled. On [`flush`] the
/// whole buffer becomes one `tracing` debug event. Nothing here influences
/// the value a resolver returns.
///
/// [`flush`]: Diagnostics::flush
#[derive(Debug)]
pub(crate) struct Diagnostics {
    operation: &'static str,
    lines: Option<Vec<String>>,
}

impl Diagnostics {
    pub(crate) fn new(operation: &'static str, enabled: bool) -> Self {
        Self {
            operation,
            lines: enabled.then(Vec::new),
        }
    }

    /// Append a note, formatting it only if diagnostics are enabled.
    pub(crate) fn note(&mut self, message: impl FnOnce() -> String) {
        if let Some(lines) = &mut self.lines {
            lines.push(message());
        }
    }

    #[cfg(test)]
    pub(crate) fn lines(&self) -> &[String] {
        self.lines.as_deref().unwrap_or_default()
    }

    /// Emit the collected notes, if any.
    pub(crate) fn flush(self, reference: &str) {
        let Some(lines) = self.lines else {
            return;
        };
        if lines.is_empty() {
            return;
        }
        tracing::debug!(
            operation = self.operation,
            reference,
            "{}",
            lines.join("\n  ")
        );
    }
}
