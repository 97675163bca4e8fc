//! Weekly weather forecast and the rain trigger.
//!
//! Recommendations are only produced when at least one day of the upcoming
//! week has a rainy hour. The synthetic generator stands in for a real
//! forecast feed and is reproducible for a given seed.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    LightRain,
    LowClouds,
    Rain,
    RainAndThunderstorm,
    Windy,
    Sunny,
}

const DRY_CONDITIONS: [WeatherCondition; 5] = [
    WeatherCondition::Clear,
    WeatherCondition::Cloudy,
    WeatherCondition::LowClouds,
    WeatherCondition::Windy,
    WeatherCondition::Sunny,
];

const WET_CONDITIONS: [WeatherCondition; 3] = [
    WeatherCondition::LightRain,
    WeatherCondition::Rain,
    WeatherCondition::RainAndThunderstorm,
];

impl WeatherCondition {
    pub fn is_rain(&self) -> bool {
        WET_CONDITIONS.contains(self)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Cloudy => "Cloudy",
            WeatherCondition::LightRain => "Light Rain",
            WeatherCondition::LowClouds => "Low Clouds",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::RainAndThunderstorm => "Rain and Thunderstorm",
            WeatherCondition::Windy => "Windy",
            WeatherCondition::Sunny => "Sunny",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyReading {
    pub date: NaiveDate,
    /// Hour of day, 0-23.
    pub hour: u32,
    pub temperature_c: f64,
    pub condition: WeatherCondition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastOptions {
    pub days: u32,
    pub seed: u64,
    /// Chance that a given day contains a rain spell.
    pub rain_probability: f64,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
}

impl Default for ForecastOptions {
    fn default() -> Self {
        Self {
            days: 7,
            seed: 0,
            rain_probability: 0.3,
            min_temperature_c: 8.0,
            max_temperature_c: 22.0,
        }
    }
}

/// Per-day rollup of the hourly readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// Full weekday name, e.g. "Wednesday".
    pub weekday: String,
    pub min_temperature_c: f64,
    pub max_temperature_c: f64,
    pub average_temperature_c: f64,
    pub rainy: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyForecast {
    /// First day of the forecast window.
    pub start: NaiveDate,
    pub readings: Vec<HourlyReading>,
}

impl WeeklyForecast {
    pub fn new(start: NaiveDate, readings: Vec<HourlyReading>) -> Self {
        Self { start, readings }
    }

    /// Generates an hourly forecast for `options.days` days from `start`.
    ///
    /// Rainy days get one contiguous spell of wet hours; the rest of the
    /// hours draw a dry condition. Temperature follows a daily curve
    /// peaking mid-afternoon.
    pub fn synthetic(start: NaiveDate, options: &ForecastOptions) -> Self {
        let mut rng = StdRng::seed_from_u64(options.seed);
        let rain_probability = if options.rain_probability.is_finite() {
            options.rain_probability.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let span = (options.max_temperature_c - options.min_temperature_c).max(0.0);
        let upper = options.max_temperature_c.max(options.min_temperature_c);

        let mut readings = Vec::with_capacity(options.days as usize * 24);
        for date in start.iter_days().take(options.days as usize) {
            let spell = if rng.gen_bool(rain_probability) {
                let begin = rng.gen_range(0..24u32);
                let length = rng.gen_range(1..=6u32);
                Some((begin, (begin + length).min(24)))
            } else {
                None
            };

            for hour in 0..24u32 {
                let condition = match spell {
                    Some((begin, end)) if hour >= begin && hour < end => {
                        WET_CONDITIONS[rng.gen_range(0..WET_CONDITIONS.len())]
                    }
                    _ => DRY_CONDITIONS[rng.gen_range(0..DRY_CONDITIONS.len())],
                };

                // Coldest around 03:00, warmest around 15:00.
                let phase = (hour as f64 - 9.0) / 24.0 * std::f64::consts::TAU;
                let curve = (phase.sin() + 1.0) / 2.0;
                let jitter = rng.gen_range(-0.5..=0.5);
                let temperature_c = (options.min_temperature_c + span * curve + jitter)
                    .max(options.min_temperature_c)
                    .min(upper);

                readings.push(HourlyReading {
                    date,
                    hour,
                    temperature_c,
                    condition,
                });
            }
        }

        debug!(days = options.days, seed = options.seed, "generated synthetic forecast");
        Self { start, readings }
    }

    /// Days with at least one rainy hour, earliest first.
    pub fn rainy_days(&self) -> Vec<NaiveDate> {
        self.readings
            .iter()
            .filter(|reading| reading.condition.is_rain())
            .map(|reading| reading.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn has_rainy_day(&self) -> bool {
        self.readings.iter().any(|reading| reading.condition.is_rain())
    }

    /// One summary per day that has readings, earliest first.
    pub fn daily_summary(&self) -> Vec<DaySummary> {
        // (min, max, sum, count, rainy)
        let mut days: BTreeMap<NaiveDate, (f64, f64, f64, u32, bool)> = BTreeMap::new();
        for reading in &self.readings {
            let t = reading.temperature_c;
            let entry = days.entry(reading.date).or_insert((t, t, 0.0, 0, false));
            entry.0 = entry.0.min(t);
            entry.1 = entry.1.max(t);
            entry.2 += t;
            entry.3 += 1;
            entry.4 |= reading.condition.is_rain();
        }

        days.into_iter()
            .map(|(date, (min, max, sum, count, rainy))| DaySummary {
                date,
                weekday: date.format("%A").to_string(),
                min_temperature_c: min,
                max_temperature_c: max,
                average_temperature_c: sum / f64::from(count),
                rainy,
            })
            .collect()
    }
}
