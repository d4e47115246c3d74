use chrono::{DateTime, Local, Utc};
use chrono_tz::Tz;

/// A single predicted overhead transit as reported by the upstream API.
///
/// Built from one decoded response entry and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Pass {
    /// Instant the satellite crosses the observer's horizon, UTC.
    pub rise_time: DateTime<Utc>,
    pub duration_seconds: u32,
    /// Visual magnitude, reported for visible passes only.
    pub magnitude: Option<f64>,
}

impl Pass {
    /// Rise time converted to a named timezone.
    pub fn rise_time_in(&self, tz: Tz) -> DateTime<Tz> {
        self.rise_time.with_timezone(&tz)
    }

    /// Rise time in the host system's local timezone.
    pub fn rise_time_local(&self) -> DateTime<Local> {
        self.rise_time.with_timezone(&Local)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Offset;

    fn sample_pass() -> Pass {
        Pass {
            rise_time: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            duration_seconds: 540,
            magnitude: None,
        }
    }

    #[test]
    fn conversion_preserves_instant() {
        let pass = sample_pass();
        let kolkata = pass.rise_time_in(chrono_tz::Asia::Kolkata);
        let tokyo = pass.rise_time_in(chrono_tz::Asia::Tokyo);

        assert_eq!(kolkata.with_timezone(&Utc), pass.rise_time);
        assert_eq!(kolkata.with_timezone(&Utc), tokyo.with_timezone(&Utc));
        assert_ne!(kolkata.offset().fix(), tokyo.offset().fix());
    }

    #[test]
    fn conversion_is_repeatable() {
        let pass = sample_pass();
        let first = pass.rise_time_in(chrono_tz::Europe::Berlin);
        let second = pass.rise_time_in(chrono_tz::Europe::Berlin);
        assert_eq!(first, second);
    }
}
