//! Request-side inputs: session parameters, coach profile, feedback snapshot.
//!
//! The assembler treats all of these as read-only. Profile values are
//! fallback defaults only and never override an explicit request value.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::session::ZoneArea;

/// Supported station count range for a session.
pub const MIN_STATIONS: usize = 1;
pub const MAX_STATIONS: usize = 5;

/// Parameters of a single session-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Requested methodology key; falls back to the coach's preference,
    /// then to "Hybrid".
    pub methodology: Option<String>,
    /// Age category, either a "U12"-style token or a free-text label
    /// such as "mladší žáci".
    pub age_category: Option<String>,
    /// Total session duration in minutes.
    pub duration_minutes: u32,
    /// Ice configuration label, e.g. "Full Ice" or "Half Ice".
    pub ice_config: String,
    /// Requested number of main stations (1-5). Ignored when a named layout
    /// or an explicit zone override fixes the count.
    pub station_count: usize,
    /// Focus areas matched against drill categories and tags.
    #[serde(default)]
    pub focus_areas: Vec<String>,
    /// Share of drill-leaning stations, 0-100. Falls back to the coach's
    /// default, then to 50.
    pub drill_ratio: Option<u8>,
    /// Cognitive load label; passed through verbatim, never interpreted.
    pub cognitive_load: Option<String>,
    /// Optional named layout key (see [`crate::services::zones`]).
    pub layout: Option<String>,
    /// Optional explicit station zones; when present and non-empty this
    /// overrides both the named layout and the computed layout.
    pub zone_override: Option<Vec<ZoneArea>>,
}

/// Precondition violation in a [`SessionRequest`].
///
/// Callers must validate before invoking the assembler; the assembler itself
/// signals only infeasibility (by returning `None`) and never re-validates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("station count {0} is outside the supported range {MIN_STATIONS}-{MAX_STATIONS}")]
    StationCount(usize),
    #[error("drill ratio {0} exceeds 100")]
    DrillRatio(u8),
    #[error("session duration must be positive")]
    ZeroDuration,
}

impl SessionRequest {
    /// Check the request preconditions the assembler relies on.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.station_count < MIN_STATIONS || self.station_count > MAX_STATIONS {
            return Err(RequestError::StationCount(self.station_count));
        }
        if let Some(ratio) = self.drill_ratio {
            if ratio > 100 {
                return Err(RequestError::DrillRatio(ratio));
            }
        }
        if self.duration_minutes == 0 {
            return Err(RequestError::ZeroDuration);
        }
        Ok(())
    }
}

/// Per-coach defaults, applied only where the request leaves a value unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachProfile {
    pub preferred_methodology: Option<String>,
    pub preferred_age_category: Option<String>,
    pub default_drill_ratio: Option<u8>,
}

/// Read-only view of a coach's feedback history.
///
/// The caller computes these sets from its feedback store. Titles are
/// matched case-insensitively against drill titles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSnapshot {
    /// Titles the coach marked as favorites (+10 ordering boost).
    pub favorite_titles: HashSet<String>,
    /// Titles the coach banned; never selected regardless of score.
    pub banned_titles: HashSet<String>,
    /// Titles the coach rated 4 or higher (+5 ordering boost).
    pub high_rated_titles: HashSet<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(stations: usize) -> SessionRequest {
        SessionRequest {
            methodology: None,
            age_category: None,
            duration_minutes: 60,
            ice_config: "Full Ice".to_string(),
            station_count: stations,
            focus_areas: vec![],
            drill_ratio: None,
            cognitive_load: None,
            layout: None,
            zone_override: None,
        }
    }

    #[test]
    fn station_count_boundaries() {
        assert_eq!(request(0).validate(), Err(RequestError::StationCount(0)));
        assert_eq!(request(1).validate(), Ok(()));
        assert_eq!(request(5).validate(), Ok(()));
        assert_eq!(request(6).validate(), Err(RequestError::StationCount(6)));
    }

    #[test]
    fn drill_ratio_must_stay_percentual() {
        let mut req = request(3);
        req.drill_ratio = Some(100);
        assert_eq!(req.validate(), Ok(()));
        req.drill_ratio = Some(101);
        assert_eq!(req.validate(), Err(RequestError::DrillRatio(101)));
    }

    #[test]
    fn duration_must_be_positive() {
        let mut req = request(3);
        req.duration_minutes = 0;
        assert_eq!(req.validate(), Err(RequestError::ZeroDuration));
    }
}
