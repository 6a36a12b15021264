use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A one-day anomaly, such as a launch spike or an outage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub kind: EventType,
}

impl Event {
    pub const fn new(date: NaiveDate, kind: EventType) -> Self {
        Self { date, kind }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventType {
    /// Multiplies the count; a factor below one is a dip.
    Scale { factor: f64 },
    Offset { delta: i64 },
    Set { value: u64 },
    Cap { max: u64 },
}

impl EventType {
    pub fn transform(&self, value: u64) -> u64 {
        match *self {
            Self::Scale { factor } => (value as f64 * factor) as u64,
            Self::Offset { delta } if delta >= 0 => value.saturating_add(delta.unsigned_abs()),
            Self::Offset { delta } => value.saturating_sub(delta.unsigned_abs()),
            Self::Set { value } => value,
            Self::Cap { max } => value.min(max),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::EventType;

    #[test]
    fn scale_truncates_toward_zero() {
        assert_eq!(EventType::Scale { factor: 2.5 }.transform(3), 7);
        assert_eq!(EventType::Scale { factor: 0.5 }.transform(5), 2);
    }

    #[test]
    fn negative_offset_floors_at_zero() {
        assert_eq!(EventType::Offset { delta: -50 }.transform(20), 0);
        assert_eq!(EventType::Offset { delta: 5 }.transform(20), 25);
    }

    #[test]
    fn set_and_cap() {
        assert_eq!(EventType::Set { value: 0 }.transform(1_000), 0);
        assert_eq!(EventType::Cap { max: 10 }.transform(1_000), 10);
        assert_eq!(EventType::Cap { max: 10 }.transform(4), 4);
    }
}
