//! Logging setup and the codec diagnostics bridge.
//!
//! Logs go to stderr so stdout carries only results. Passphrases are never
//! logged; only counts and widths are.

use tracing::{debug, warn};
use wordup_core::{DiagnosticHook, Event};

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "wordup=warn,wordup_core=warn";

/// Initialize tracing with environment-based log levels.
pub fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)))
        .init();
}

/// Forwards codec events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

impl DiagnosticHook for TracingHook {
    fn event(&self, event: &Event<'_>) {
        match *event {
            Event::CodecReady {
                words,
                word_length,
                field_width,
                checksummed,
            } => debug!(words, word_length, field_width, checksummed, "Codec ready"),
            Event::Encoded { words, bits } => debug!(words, bits, "Encoded words"),
            Event::Decoded { words } => debug!(words, "Decoded words"),
            Event::ChecksumRejected { position, .. } => {
                warn!(position, "Checksum rejected");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wordup_core::{WordCodec, WordList};

    #[test]
    fn hook_plugs_into_codec() {
        let codec = WordCodec::builder(WordList::english())
            .diagnostics(TracingHook)
            .build()
            .unwrap();
        let number = codec.encode(&["horse"]).unwrap();
        assert_eq!(codec.decode(&number).unwrap(), ["horse"]);
    }

    #[test]
    fn default_filter_names_both_crates() {
        assert!(DEFAULT_FILTER.contains("wordup="));
        assert!(DEFAULT_FILTER.contains("wordup_core="));
    }
}
