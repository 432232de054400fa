//! Console message sink for the upload pipeline.

use colored::Colorize;

use pantry_upload::MessageSink;

/// Writes pipeline output to stdout; warnings get a highlighted prefix.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl MessageSink for ConsoleSink {
    fn msg(&self, line: &str) {
        println!("{line}");
    }

    fn warn(&self, line: &str) {
        println!("{} {line}", "WARN:".yellow().bold());
    }
}
