//! Flavor Prep - File age check
//!
//! Lets a caller decide whether a previously saved download is fresh
//! enough to reuse.

use std::path::Path;
use std::time::SystemTime;

use crate::error::{Error, Result};

const SECONDS_PER_HOUR: f64 = 60.0 * 60.0;

/// Hours elapsed since `path` was last modified.
///
/// Fractional. A modification time in the future gives a negative age.
pub fn file_age_hours<P: AsRef<Path>>(path: P) -> Result<f64> {
    let path = path.as_ref();
    let modified = std::fs::metadata(path)
        .and_then(|m| m.modified())
        .map_err(|e| Error::io(path, e))?;

    Ok(hours_between(modified, SystemTime::now()))
}

/// Whether the file at `path` is older than `max_age_hours`.
///
/// A missing file counts as stale; any other IO error propagates.
pub fn is_stale<P: AsRef<Path>>(path: P, max_age_hours: f64) -> Result<bool> {
    match file_age_hours(path) {
        Ok(age) => Ok(age >= max_age_hours),
        Err(e) if e.is_not_found() => Ok(true),
        Err(e) => Err(e),
    }
}

fn hours_between(earlier: SystemTime, later: SystemTime) -> f64 {
    let seconds = match later.duration_since(earlier) {
        Ok(d) => d.as_secs_f64(),
        Err(e) => -e.duration().as_secs_f64(),
    };
    seconds / SECONDS_PER_HOUR
}
