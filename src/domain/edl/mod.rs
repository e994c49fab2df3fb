// EDL record parser and segment builder
//
// Reads the timeline-marker export of an editor: a two-line banner followed
// by two physical lines per marker.
//
//   TITLE: Timeline 1
//   FCM: NON-DROP FRAME
//   001  001      V     C        01:00:00:00 01:00:00:01 01:00:00:00 01:00:00:01
//    |C:ResolveColorBlue |M:intro |D:1

use tracing::{debug, trace};

use crate::domain::errors::DomainError;
use crate::domain::model::{FrameRate, Marker, PendingMarker, Segment};
use crate::domain::timecode;

/// Number of non-blank banner lines that precede the first record
pub const HEADER_LINES: usize = 2;

/// Whitespace token of the metadata line holding the record-in timecode
const START_TIMECODE_TOKEN: usize = 4;

/// Tag introducing the marker name on the name line
const NAME_TAG: &str = "|M:";

/// Separator in front of every tag after the name
const TAG_SEPARATOR: &str = " |";

/// Position of the parser within a two-line record
#[derive(Debug)]
enum ParseState {
    AwaitingMetadata,
    AwaitingName { marker: PendingMarker, line: usize },
}

/// Parse EDL lines into the ordered list of markers they describe.
///
/// Blank lines are ignored and the first [`HEADER_LINES`] remaining lines
/// are discarded without inspection.
pub fn parse_markers<I, S>(lines: I, frame_rate: FrameRate) -> Result<Vec<Marker>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records = lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| (index + 1, line))
        .filter(|(_, line)| !line.as_ref().trim().is_empty());

    for _ in 0..HEADER_LINES {
        if records.next().is_none() {
            return Err(DomainError::Format(format!(
                "Expected a {}-line header before the first record",
                HEADER_LINES
            )));
        }
    }

    let mut markers = Vec::new();
    let mut state = ParseState::AwaitingMetadata;

    for (line_number, line) in records {
        let line = line.as_ref();
        state = match state {
            ParseState::AwaitingMetadata => ParseState::AwaitingName {
                marker: parse_metadata_line(line, line_number, frame_rate)?,
                line: line_number,
            },
            ParseState::AwaitingName { marker, .. } => {
                let name = parse_name_line(line, line_number)?;
                let marker = marker
                    .named(name)
                    .map_err(|e| DomainError::Format(format!("line {}: {}", line_number, inner(e))))?;
                trace!(name = marker.name(), start = %marker.start(), "Parsed marker");
                markers.push(marker);
                ParseState::AwaitingMetadata
            }
        };
    }

    if let ParseState::AwaitingName { line, .. } = state {
        return Err(DomainError::Format(format!(
            "line {}: record has no name line",
            line
        )));
    }

    debug!("Parsed {} markers", markers.len());
    Ok(markers)
}

/// Close each marker at the start of its successor.
///
/// The last marker only terminates the segment before it and is not
/// emitted. Order follows the input, without re-sorting.
pub fn segments_from_markers(markers: &[Marker]) -> Result<Vec<Segment>, DomainError> {
    if markers.len() < 2 {
        return Err(DomainError::EmptyInput(markers.len()));
    }

    Ok(markers
        .windows(2)
        .map(|pair| Segment::between(&pair[0], &pair[1]))
        .collect())
}

/// Parse EDL lines and build the segments between consecutive markers
pub fn build_segments<I, S>(lines: I, frame_rate: FrameRate) -> Result<Vec<Segment>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let markers = parse_markers(lines, frame_rate)?;
    segments_from_markers(&markers)
}

fn parse_metadata_line(
    line: &str,
    line_number: usize,
    frame_rate: FrameRate,
) -> Result<PendingMarker, DomainError> {
    let raw = line
        .split_whitespace()
        .nth(START_TIMECODE_TOKEN)
        .ok_or_else(|| {
            DomainError::Format(format!(
                "line {}: metadata line has fewer than {} fields",
                line_number,
                START_TIMECODE_TOKEN + 1
            ))
        })?;

    let start = timecode::strip_timeline_hour(raw)
        .and_then(|tc| timecode::convert(tc, frame_rate))
        .map_err(|e| DomainError::Parse(format!("line {}: {}", line_number, inner(e))))?;

    Ok(PendingMarker::new(start))
}

fn parse_name_line(line: &str, line_number: usize) -> Result<&str, DomainError> {
    let (_, after_tag) = line.split_once(NAME_TAG).ok_or_else(|| {
        DomainError::Format(format!(
            "line {}: name line has no '{}' tag",
            line_number, NAME_TAG
        ))
    })?;

    let name = match after_tag.find(TAG_SEPARATOR) {
        Some(end) => &after_tag[..end],
        None => after_tag,
    };

    Ok(name.trim())
}

fn inner(error: DomainError) -> String {
    match error {
        DomainError::Format(msg) | DomainError::Parse(msg) | DomainError::BadArgs(msg) => msg,
        other => other.to_string(),
    }
}
