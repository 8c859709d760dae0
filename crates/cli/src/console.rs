//! Console rendition of a [`Page`].
//!
//! Every page effect becomes one line on stdout, so scripts can follow what a
//! browser would have done.

use std::io::Write;

use yahrzeit_client::Page;

/// Writes page effects to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePage;

impl ConsolePage {
    fn emit(line: &str) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{line}") {
            tracing::warn!(error = %e, "Failed to write to stdout");
        }
    }
}

impl Page for ConsolePage {
    fn navigate(&self, path: &str) {
        Self::emit(&format!("navigate: {path}"));
    }

    fn alert(&self, message: &str) {
        Self::emit(&format!("alert: {message}"));
    }

    fn set_text(&self, element_id: &str, text: &str) {
        Self::emit(&format!("#{element_id}: {text}"));
    }

    fn set_visible(&self, element_id: &str, visible: bool) {
        let state = if visible { "shown" } else { "hidden" };
        Self::emit(&format!("#{element_id}: {state}"));
    }
}
