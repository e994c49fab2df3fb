//! Path utilities for segment output files

use crate::error::{ChopperError, ChopperResult};

/// Characters that would make a segment name escape or break its file name
const FORBIDDEN_CHARS: [char; 3] = ['/', '\\', '\0'];

/// Path utilities for output naming
pub struct PathUtils;

impl PathUtils {
    /// Check that a segment name can be used as a single file name inside
    /// the output directory
    pub fn validate_segment_name(name: &str) -> ChopperResult<()> {
        let invalid = |reason: String| ChopperError::InvalidSegmentName {
            name: name.to_string(),
            reason,
        };

        if name == "." || name == ".." {
            return Err(invalid("refers to a directory".to_string()));
        }

        if let Some(ch) = name.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
            return Err(invalid(format!("contains '{}'", ch.escape_default())));
        }

        Ok(())
    }

    /// Names that occur more than once, in order of first repetition
    pub fn duplicate_names<'a, I>(names: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut seen = std::collections::HashSet::new();
        let mut duplicates = Vec::new();
        for name in names {
            if !seen.insert(name) && !duplicates.contains(&name) {
                duplicates.push(name);
            }
        }
        duplicates
    }
}
