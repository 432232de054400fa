//! Message sink capability for user-visible pipeline output.

/// Receives the pipeline's user-facing lines.
///
/// Passed explicitly at construction; [`NullSink`] is the default so
/// library callers get no output unless they ask for it.
pub trait MessageSink {
    fn msg(&self, line: &str);
    fn warn(&self, line: &str);
}

/// Discards everything.
#[derive(Debug, Default)]
pub struct NullSink;

impl MessageSink for NullSink {
    fn msg(&self, _line: &str) {}
    fn warn(&self, _line: &str) {}
}
