//! Managed block types and parsing

use std::ops::Range;

use crate::error::{Error, Result};

/// Literal start/end marker pair that delimits a managed block.
///
/// Markers are matched as plain substrings; the span between the start
/// marker and the first end marker after it is the block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMarkers {
    start: String,
    end: String,
}

impl BlockMarkers {
    /// Create a new marker pair
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The start marker line
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The end marker line
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Find the byte range of the managed block, markers included.
    ///
    /// Returns `Ok(None)` when the start marker is absent. A start marker
    /// without a matching end marker is rejected as corruption.
    pub fn find(&self, source: &str) -> Result<Option<Range<usize>>> {
        let Some(start_pos) = source.find(&self.start) else {
            return Ok(None);
        };

        let body_start = start_pos + self.start.len();
        let end_rel = source[body_start..]
            .find(&self.end)
            .ok_or_else(|| Error::UnterminatedBlock {
                start: self.start.clone(),
                end: self.end.clone(),
                position: start_pos,
            })?;

        let end_pos = body_start + end_rel + self.end.len();
        Ok(Some(start_pos..end_pos))
    }

    /// Check whether `source` contains a complete managed block
    pub fn is_present(&self, source: &str) -> Result<bool> {
        Ok(self.find(source)?.is_some())
    }
}

/// A managed block: a marker pair plus the content between the markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedBlock {
    markers: BlockMarkers,
    body: String,
}

impl ManagedBlock {
    /// Create a block from markers and a body
    pub fn new(markers: BlockMarkers, body: impl Into<String>) -> Self {
        Self {
            markers,
            body: body.into(),
        }
    }

    /// The marker pair delimiting this block
    pub fn markers(&self) -> &BlockMarkers {
        &self.markers
    }

    /// The content between the markers, without the markers themselves
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Render the block as text: start marker, body, end marker.
    ///
    /// No trailing newline; callers decide file-edge whitespace.
    pub fn serialize(&self) -> String {
        format!("{}\n{}\n{}", self.markers.start, self.body, self.markers.end)
    }

    /// Parse the managed block out of `source`, if one is present.
    ///
    /// The body excludes a single newline on each side of the markers so
    /// `parse` and `serialize` round-trip.
    pub fn parse(markers: &BlockMarkers, source: &str) -> Result<Option<Self>> {
        let Some(range) = markers.find(source)? else {
            return Ok(None);
        };

        let inner_start = range.start + markers.start.len();
        let inner_end = range.end - markers.end.len();
        let inner = &source[inner_start..inner_end];
        let body = inner.strip_prefix('\n').unwrap_or(inner);
        let body = body.strip_suffix('\n').unwrap_or(body);

        Ok(Some(Self::new(markers.clone(), body)))
    }
}
