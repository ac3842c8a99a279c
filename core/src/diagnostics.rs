//! Injectable diagnostics for codec instances.
//!
//! The library holds no global logger. A codec reports what it does to the
//! hook it was built with; the default hook discards everything.

/// Something a codec did worth reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event<'a> {
    /// A codec finished construction.
    CodecReady {
        /// Number of words in the list.
        words: usize,
        /// Bits in one index field.
        word_length: u32,
        /// Bits per word including any checksum bit.
        field_width: u32,
        /// Whether a checksum bit is carried.
        checksummed: bool,
    },
    /// A word sequence was packed into an integer.
    Encoded {
        /// Number of words packed.
        words: usize,
        /// Significant bits in the result.
        bits: u64,
    },
    /// An integer was unpacked into a word sequence.
    Decoded {
        /// Number of words produced.
        words: usize,
    },
    /// Decoding stopped on a checksum mismatch.
    ChecksumRejected {
        /// The word whose checksum bit did not match.
        word: &'a str,
        /// Its position in the sequence.
        position: usize,
    },
}

/// Receiver for codec events.
///
/// Implemented for every `Fn(&Event)`.
pub trait DiagnosticHook {
    /// Handle one event.
    fn event(&self, event: &Event<'_>);
}

impl<F> DiagnosticHook for F
where
    F: Fn(&Event<'_>),
{
    fn event(&self, event: &Event<'_>) {
        self(event)
    }
}

/// Hook that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl DiagnosticHook for Silent {
    #[inline]
    fn event(&self, _event: &Event<'_>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn closure_hook_receives_events() {
        let seen = RefCell::new(Vec::new());
        let hook = |event: &Event<'_>| seen.borrow_mut().push(format!("{:?}", event));

        hook.event(&Event::Decoded { words: 3 });
        hook.event(&Event::ChecksumRejected {
            word: "horse",
            position: 1,
        });

        let seen = seen.into_inner();
        assert_eq!(seen.len(), 2);
        assert!(seen[1].contains("horse"));
    }

    #[test]
    fn silent_hook_is_a_no_op() {
        Silent.event(&Event::Encoded { words: 4, bits: 48 });
    }
}
