//! Site Configuration
//!
//! Timing and tuning knobs, loaded from JSON. Every section and field is
//! optional; anything missing keeps its default.

use serde::{Deserialize, Serialize};

use crate::counter::{DEFAULT_DURATION_MS, DEFAULT_STEPS};
use crate::error::ContentResult;
use crate::hero::DEFAULT_ROTATION_MS;
use crate::scroll::{CAROUSEL_STEP_PX, EDGE_TOLERANCE_PX};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// `log` level name: error, warn, info, debug, trace
    pub log_level: String,
    pub counter: CounterConfig,
    pub hero: HeroConfig,
    pub contact: ContactTiming,
    pub carousel: CarouselConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            counter: CounterConfig::default(),
            hero: HeroConfig::default(),
            contact: ContactTiming::default(),
            carousel: CarouselConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> ContentResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parsed log level, `Info` if the name is unknown
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
    pub duration_ms: u32,
    pub steps: u32,
}

impl Default for CounterConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            steps: DEFAULT_STEPS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub rotation_ms: u32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            rotation_ms: DEFAULT_ROTATION_MS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactTiming {
    /// Fake network round trip
    pub submit_delay_ms: u64,
    /// How long the success state stays before the form clears
    pub reset_delay_ms: u64,
}

impl Default for ContactTiming {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1500,
            reset_delay_ms: 3000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub step_px: f64,
    pub edge_tolerance_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            step_px: CAROUSEL_STEP_PX,
            edge_tolerance_px: EDGE_TOLERANCE_PX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ContentError;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = SiteConfig::from_json("{}").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.counter.steps, 60);
        assert_eq!(config.contact.submit_delay_ms, 1500);
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_json(r#"{ "counter": { "steps": 30 }, "log_level": "debug" }"#).unwrap();
        assert_eq!(config.counter.steps, 30);
        assert_eq!(config.counter.duration_ms, 2000);
        assert_eq!(config.hero.rotation_ms, 6000);
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = SiteConfig { log_level: "loud".into(), ..SiteConfig::default() };
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(SiteConfig::from_json("{ nope"), Err(ContentError::Config(_))));
    }
}
