//! Column-aligned summary of reused vs. uploaded cookbooks.

use pantry_core::CookbookLock;

use crate::resolver::LockedArtifact;
use crate::ui::MessageSink;

/// Renders one line per artifact, reused first, with the name and version
/// columns sized to the widest entry across both groups.
pub struct UploadReport<'a> {
    reused: &'a [LockedArtifact],
    uploaded: &'a [LockedArtifact],
    name_width: usize,
    version_width: usize,
}

impl<'a> UploadReport<'a> {
    /// Column widths are computed here, once, over the combined set; an
    /// empty set yields zero widths rather than failing.
    pub fn new(reused: &'a [LockedArtifact], uploaded: &'a [LockedArtifact]) -> Self {
        Self {
            reused,
            uploaded,
            name_width: widest(reused, uploaded, |lock| lock.name.0.len()),
            version_width: widest(reused, uploaded, |lock| lock.version.len()),
        }
    }

    pub fn render(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.reused.len() + self.uploaded.len());
        for artifact in self.reused {
            lines.push(self.describe("Using", &artifact.lock));
        }
        for artifact in self.uploaded {
            lines.push(self.describe("Uploaded", &artifact.lock));
        }
        lines
    }

    pub fn show(&self, sink: &dyn MessageSink) {
        for line in self.render() {
            sink.msg(&line);
        }
    }

    fn describe(&self, verb: &str, lock: &CookbookLock) -> String {
        format!(
            "{verb:<8} {name:<name_width$} {version:<version_width$} ({identifier})",
            name = lock.name,
            version = lock.version,
            identifier = short_identifier(&lock.identifier),
            name_width = self.name_width,
            version_width = self.version_width,
        )
    }
}

fn widest(
    reused: &[LockedArtifact],
    uploaded: &[LockedArtifact],
    measure: impl Fn(&CookbookLock) -> usize,
) -> usize {
    reused
        .iter()
        .chain(uploaded)
        .map(|artifact| measure(&artifact.lock))
        .max()
        .unwrap_or(0)
}

/// First 8 characters of the content identifier. Validation guarantees at
/// least 8, but a short identifier renders whole rather than panicking.
fn short_identifier(identifier: &str) -> &str {
    identifier.get(..8).unwrap_or(identifier)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
