//! Effective duration of an activity.
//!
//! An activity may carry its length as an explicit window, as hours, or as
//! minutes, and the fields are often inconsistent in imported documents. The
//! precedence lives in [`duration_source`]:
//!
//! 1. a well-formed `time_slot`
//! 2. a well-formed `start_time` and `end_time`
//! 3. `duration_hours` (fractional hours allowed)
//! 4. `duration_min`, then `duration` (minutes)
//! 5. the category default from [`ScheduleConfig`]
//!
//! A bare `start_time` never determines a length; the duration fields do and
//! the end is computed from them. Unusable values fall through to the next rule.

use serde_json::Value;

use crate::clock::TimeSlot;
use crate::config::ScheduleConfig;
use crate::itinerary::{Activity, Role};

/// Where an activity's duration came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DurationSource {
    /// Length of a well-formed `time_slot`.
    TimeSlot(TimeSlot),
    /// Length between well-formed `start_time` and `end_time`.
    StartEnd(TimeSlot),
    Hours(f64),
    Minutes(f64),
    /// No usable field; policy default for the role.
    Default(Role),
}

impl DurationSource {
    /// Resolved length in whole minutes.
    pub fn minutes(self, config: &ScheduleConfig) -> u32 {
        match self {
            Self::TimeSlot(slot) | Self::StartEnd(slot) => slot.minutes(),
            Self::Hours(hours) => whole_minutes(hours * 60.0),
            Self::Minutes(minutes) => whole_minutes(minutes),
            Self::Default(role) => config.default_minutes_for(role),
        }
    }
}

/// Picks the first applicable duration rule for `activity`.
pub fn duration_source(activity: &Activity) -> DurationSource {
    if let Some(slot) = activity.time_slot.as_deref().and_then(TimeSlot::parse) {
        return DurationSource::TimeSlot(slot);
    }
    if let Some(slot) = activity.explicit_slot() {
        return DurationSource::StartEnd(slot);
    }
    if let Some(hours) = positive_number(activity.duration_hours.as_ref()) {
        return DurationSource::Hours(hours);
    }
    if let Some(minutes) = positive_number(activity.duration_min.as_ref())
        .or_else(|| positive_number(activity.duration.as_ref()))
    {
        return DurationSource::Minutes(minutes);
    }
    DurationSource::Default(activity.role())
}

/// Effective duration of `activity` in minutes.
pub fn resolve_minutes(activity: &Activity, config: &ScheduleConfig) -> u32 {
    duration_source(activity).minutes(config)
}

/// Reads a number or numeric string; non-positive and non-finite values are absent.
fn positive_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (number.is_finite() && number > 0.0).then_some(number)
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is finite, positive and clamped to the u32 range"
)]
fn whole_minutes(minutes: f64) -> u32 {
    minutes.round().clamp(0.0, f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;

    fn activity(raw: serde_json::Value) -> Activity {
        serde_json::from_value(raw).unwrap()
    }

    fn minutes(raw: serde_json::Value) -> u32 {
        resolve_minutes(&activity(raw), &ScheduleConfig::default())
    }

    #[test]
    fn fractional_hours() {
        assert_eq!(minutes(json!({"duration_hours": 2.5})), 150);
        assert_eq!(minutes(json!({"duration_hours": "1.5"})), 90);
    }

    #[test]
    fn bare_duration_is_minutes() {
        assert_eq!(minutes(json!({"duration": 67})), 67);
        assert_eq!(minutes(json!({"duration_min": 40})), 40);
    }

    #[test]
    fn duration_min_wins_over_duration() {
        assert_eq!(minutes(json!({"duration_min": 40, "duration": 100})), 40);
    }

    #[test]
    fn hours_win_over_minutes() {
        assert_eq!(minutes(json!({"duration_hours": 1, "duration_min": 40})), 60);
    }

    #[test]
    fn time_slot_wins_over_everything() {
        let raw = json!({
            "time_slot": "8:00-10:00",
            "start_time": "09:00",
            "end_time": "09:30",
            "duration_hours": 5
        });
        assert_eq!(minutes(raw.clone()), 120);
        assert!(matches!(
            duration_source(&activity(raw)),
            DurationSource::TimeSlot(_)
        ));
    }

    #[test]
    fn start_and_end_beat_duration_fields() {
        let raw = json!({"start_time": "09:00", "end_time": "09:45", "duration": 200});
        assert_eq!(minutes(raw), 45);
    }

    #[test]
    fn bare_start_time_defers_to_duration_field() {
        let raw = json!({"start_time": "09:00", "duration_hours": 2});
        assert_eq!(minutes(raw), 120);
    }

    #[test]
    fn slot_past_midnight() {
        assert_eq!(minutes(json!({"time_slot": "23:00-26:00"})), 180);
    }

    #[test]
    fn unparseable_fields_fall_through() {
        assert_eq!(minutes(json!({"duration_hours": "two", "duration": 30})), 30);
        assert_eq!(minutes(json!({"time_slot": "soon", "duration": 30})), 30);
        assert_eq!(minutes(json!({"duration": "n/a"})), 90);
        assert_eq!(minutes(json!({"duration": -20})), 90);
        assert_eq!(minutes(json!({"duration": 0})), 90);
        assert_eq!(minutes(json!({"duration": [1, 2]})), 90);
    }

    #[test]
    fn category_defaults() {
        assert_eq!(minutes(json!({"id": "LUNCH"})), 60);
        assert_eq!(minutes(json!({"category": "Ăn uống"})), 60);
        assert_eq!(minutes(json!({"category": "Di chuyển"})), 45);
        assert_eq!(minutes(json!({"category": "Sightseeing"})), 90);
    }

    #[test]
    fn defaults_follow_config() {
        let config = ScheduleConfig {
            travel_minutes: 30,
            ..ScheduleConfig::default()
        };
        let travel = activity(json!({"id": "TRAVEL"}));
        assert_eq!(resolve_minutes(&travel, &config), 30);
    }

    #[test]
    fn inverted_window_clamps_to_zero() {
        assert_eq!(minutes(json!({"time_slot": "10:00-09:00"})), 0);
    }

    #[test]
    fn fractional_minutes_round() {
        assert_eq!(minutes(json!({"duration_hours": 1.33})), 80);
    }
}
