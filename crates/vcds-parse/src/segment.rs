//! Address segmentation
//!
//! A transcript is split into one segment per `Address <token>: <description>`
//! line. Marker offsets are collected first and the text is then sliced
//! between consecutive markers, so segments never overlap.

use crate::patterns::PATTERNS;

/// The text belonging to one module address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressSegment<'a> {
    /// Address token, e.g. "17"
    pub address: &'a str,
    /// Trimmed remainder of the header line
    pub description: &'a str,
    /// Header line including its line terminator
    pub header: &'a str,
    /// Everything after the header line up to the next marker or end of text
    pub body: &'a str,
    /// Byte offset of the header line in the transcript
    pub offset: usize,
}

struct Marker<'a> {
    start: usize,
    header_end: usize,
    address: &'a str,
    description: &'a str,
}

/// Length of the line terminator at the start of `rest` (0 at end of text)
fn terminator_len(rest: &str) -> usize {
    if rest.starts_with("\r\n") {
        2
    } else if rest.starts_with('\n') {
        1
    } else {
        0
    }
}

/// Split a transcript into address segments, in transcript order
///
/// Text before the first marker belongs to no segment. A transcript without
/// markers yields no segments.
pub fn segment_addresses(text: &str) -> Vec<AddressSegment<'_>> {
    let markers: Vec<Marker<'_>> = PATTERNS
        .address_header
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some(Marker {
                start: whole.start(),
                header_end: whole.end() + terminator_len(&text[whole.end()..]),
                address: caps.get(1)?.as_str(),
                description: caps.get(2)?.as_str().trim(),
            })
        })
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers.get(i + 1).map_or(text.len(), |next| next.start);
            AddressSegment {
                address: marker.address,
                description: marker.description,
                header: &text[marker.start..marker.header_end],
                body: &text[marker.header_end..end],
                offset: marker.start,
            }
        })
        .collect()
}
