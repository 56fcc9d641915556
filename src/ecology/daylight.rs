//! Day/night cycle derived from the step counter.

use serde::{Deserialize, Serialize};

/// Steps per simulated day
pub const HOURS_PER_DAY: u64 = 24;
/// First daylight hour (inclusive)
pub const DAY_START: u64 = 7;
/// Last daylight hour (inclusive)
pub const DAY_END: u64 = 20;

/// Hour of the day at a given step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u64,
}

impl TimeOfDay {
    /// Get the hour for a simulation step
    pub fn from_step(step: u64) -> Self {
        Self {
            hour: step % HOURS_PER_DAY,
        }
    }

    #[inline]
    pub fn hour(&self) -> u64 {
        self.hour
    }

    /// Daylight runs from 7:00 through 20:00
    #[inline]
    pub fn is_day(&self) -> bool {
        (DAY_START..=DAY_END).contains(&self.hour)
    }

    #[inline]
    pub fn is_night(&self) -> bool {
        !self.is_day()
    }

    /// Display label, e.g. `Day: 7:00` or `Night: 23:00`
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let phase = if self.is_day() { "Day" } else { "Night" };
        write!(f, "{}: {}:00", phase, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_wraps() {
        assert_eq!(TimeOfDay::from_step(0).hour(), 0);
        assert_eq!(TimeOfDay::from_step(23).hour(), 23);
        assert_eq!(TimeOfDay::from_step(24).hour(), 0);
        assert_eq!(TimeOfDay::from_step(55).hour(), 7);
    }

    #[test]
    fn test_day_boundaries() {
        assert!(TimeOfDay::from_step(6).is_night());
        assert!(TimeOfDay::from_step(7).is_day());
        assert!(TimeOfDay::from_step(20).is_day());
        assert!(TimeOfDay::from_step(21).is_night());
    }

    #[test]
    fn test_labels() {
        assert_eq!(TimeOfDay::from_step(0).label(), "Night: 0:00");
        assert_eq!(TimeOfDay::from_step(7).label(), "Day: 7:00");
        assert_eq!(TimeOfDay::from_step(44).label(), "Day: 20:00");
        assert_eq!(TimeOfDay::from_step(45).label(), "Night: 21:00");
    }
}
