// Timecode conversion - EDL frame timecodes to ffmpeg seek positions

use crate::domain::errors::DomainError;
use crate::domain::model::{FrameRate, Timestamp};

/// Convert a three-field `MM:SS:FF` timecode into a `MM:SS.cc` position.
///
/// The first two fields are kept as written. The frame field becomes
/// hundredths of a second, `floor(FF * 100 / fps)`, zero padded to two
/// digits; a zero frame count yields the single digit `0`. The result is
/// approximate by up to one hundredth of a second, which is below the
/// precision of a stream-copy cut anyway.
pub fn convert(raw: &str, frame_rate: FrameRate) -> Result<Timestamp, DomainError> {
    let fields: Vec<&str> = raw.trim().split(':').collect();
    if fields.len() != 3 {
        return Err(DomainError::Parse(format!(
            "'{}' does not have three colon-separated fields",
            raw
        )));
    }

    for field in &fields {
        if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::Parse(format!(
                "'{}' contains a non-numeric field '{}'",
                raw, field
            )));
        }
    }

    let frames: u32 = fields[2]
        .parse()
        .map_err(|_| DomainError::Parse(format!("'{}' has an unreadable frame count", raw)))?;

    Ok(Timestamp::from_parts(
        fields[0],
        fields[1],
        &fraction(frames, frame_rate, raw)?,
    ))
}

/// Remove the leading timeline-hour field from a four-field record timecode.
///
/// Editors start timelines at hour `01`, so `01:00:13:13` becomes the
/// three-field `00:13:13` that [`convert`] expects.
pub fn strip_timeline_hour(raw: &str) -> Result<&str, DomainError> {
    match raw.split_once(':') {
        Some((hour, rest)) if !hour.is_empty() && hour.bytes().all(|b| b.is_ascii_digit()) => {
            Ok(rest)
        }
        _ => Err(DomainError::Parse(format!(
            "'{}' is not a HH:MM:SS:FF record timecode",
            raw
        ))),
    }
}

fn fraction(frames: u32, frame_rate: FrameRate, raw: &str) -> Result<String, DomainError> {
    if frames == 0 {
        return Ok("0".to_string());
    }

    let fps = frame_rate.as_f64();
    if f64::from(frames) >= fps {
        return Err(DomainError::Parse(format!(
            "'{}' has frame count {} which is not below {}",
            raw, frames, frame_rate
        )));
    }

    let hundredths = (f64::from(frames) * 100.0 / fps).floor() as u32;
    Ok(format!("{:02}", hundredths))
}
