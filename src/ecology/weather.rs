//! Weather process: Sunny, Raining or Drought, re-rolled every few steps.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// The three weather states
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weather {
    Sunny,
    Raining,
    Drought,
}

impl Weather {
    /// Get display name
    pub fn name(&self) -> &'static str {
        match self {
            Weather::Sunny => "Sunny",
            Weather::Raining => "Raining",
            Weather::Drought => "Drought",
        }
    }
}

impl Default for Weather {
    fn default() -> Self {
        Weather::Sunny
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Weather configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Chance of rain on each evaluation
    pub rain_chance: f64,
    /// Chance of drought, drawn independently once rain has been ruled out
    pub drought_chance: f64,
    /// Steps between weather evaluations
    pub interval: u64,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            rain_chance: 0.7,
            drought_chance: 0.2,
            interval: 5,
        }
    }
}

/// Weather state machine
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WeatherSystem {
    pub current: Weather,
    pub rain_chance: f64,
    pub drought_chance: f64,
    pub interval: u64,
}

impl WeatherSystem {
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            current: Weather::Sunny,
            rain_chance: config.rain_chance,
            drought_chance: config.drought_chance,
            interval: config.interval,
        }
    }

    /// Whether `step` is a weather evaluation step
    pub fn is_due(&self, step: u64) -> bool {
        self.interval > 0 && step % self.interval == 0
    }

    /// Roll the next weather state.
    ///
    /// Rain is tested first. Only if it fails is a second, independent value
    /// drawn for drought, so the effective drought chance is
    /// `(1 - rain_chance) * drought_chance`, not `drought_chance`.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Weather {
        self.current = if rng.gen::<f64>() <= self.rain_chance {
            Weather::Raining
        } else if rng.gen::<f64>() <= self.drought_chance {
            Weather::Drought
        } else {
            Weather::Sunny
        };
        self.current
    }

    /// Advance only when `step` falls on the evaluation interval
    pub fn update<R: Rng + ?Sized>(&mut self, step: u64, rng: &mut R) -> Option<Weather> {
        if self.is_due(step) {
            Some(self.advance(rng))
        } else {
            None
        }
    }

    /// Return to the initial sunny state
    pub fn reset(&mut self) {
        self.current = Weather::Sunny;
    }

    #[inline]
    pub fn is_raining(&self) -> bool {
        self.current == Weather::Raining
    }

    #[inline]
    pub fn is_drought(&self) -> bool {
        self.current == Weather::Drought
    }

    #[inline]
    pub fn is_sunny(&self) -> bool {
        self.current == Weather::Sunny
    }

    pub fn label(&self) -> &'static str {
        self.current.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    // StepRng::new(v, 0) makes every f64 draw equal v >> 11 scaled into [0, 1)
    fn fixed_draw(value: f64) -> StepRng {
        let bits = (value * (1u64 << 53) as f64) as u64;
        StepRng::new(bits << 11, 0)
    }

    #[test]
    fn test_initial_state_is_sunny() {
        let system = WeatherSystem::new(&WeatherConfig::default());
        assert!(system.is_sunny());
        assert!(!system.is_raining());
        assert!(!system.is_drought());
        assert_eq!(system.label(), "Sunny");
    }

    #[test]
    fn test_low_draw_rains() {
        let mut system = WeatherSystem::new(&WeatherConfig::default());
        let mut rng = fixed_draw(0.1);
        assert_eq!(system.advance(&mut rng), Weather::Raining);
        assert_eq!(system.label(), "Raining");
    }

    #[test]
    fn test_rain_chance_is_inclusive() {
        let mut system = WeatherSystem::new(&WeatherConfig::default());
        let mut rng = fixed_draw(0.5);
        system.rain_chance = 0.5;
        assert_eq!(system.advance(&mut rng), Weather::Raining);
    }

    #[test]
    fn test_high_draw_is_sunny() {
        // Both draws are 0.9: above rain chance and above drought chance
        let mut system = WeatherSystem::new(&WeatherConfig::default());
        let mut rng = fixed_draw(0.9);
        assert_eq!(system.advance(&mut rng), Weather::Sunny);
    }

    #[test]
    fn test_second_draw_decides_drought() {
        let mut system = WeatherSystem::new(&WeatherConfig {
            rain_chance: 0.0,
            drought_chance: 0.2,
            interval: 5,
        });
        let mut rng = fixed_draw(0.1);
        assert_eq!(system.advance(&mut rng), Weather::Drought);
        assert_eq!(system.label(), "Drought");
    }

    #[test]
    fn test_update_only_on_interval() {
        let mut system = WeatherSystem::new(&WeatherConfig::default());
        let mut rng = fixed_draw(0.1);

        for step in 1..5 {
            assert_eq!(system.update(step, &mut rng), None);
            assert!(system.is_sunny());
        }
        assert_eq!(system.update(5, &mut rng), Some(Weather::Raining));
    }

    #[test]
    fn test_two_draw_distribution() {
        let mut system = WeatherSystem::new(&WeatherConfig::default());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let trials = 20_000;
        let mut droughts = 0;

        for _ in 0..trials {
            if system.advance(&mut rng) == Weather::Drought {
                droughts += 1;
            }
        }

        // Expected drought share: 0.3 * 0.2 = 0.06
        let share = droughts as f64 / trials as f64;
        assert!((share - 0.06).abs() < 0.01, "drought share {}", share);
    }
}
