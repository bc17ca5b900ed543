//! Operator configuration.
//!
//! The file is TOML with a single `[general]` table; keys use the camelCase
//! names players already know from the option list (`lightDecayTime`, ...).
//! Missing keys fall back to defaults. Every value is range-checked once at
//! load, so systems can read [`FlareConfig`] without re-validating.
//!
//! ```toml
//! [general]
//! lightDecayTime = 1200
//! bounceModifier = 3.0
//! hitEntityGlows = false
//! ```

use std::path::Path;

use bevy::prelude::*;
use serde::Deserialize;

use super::error::ConfigError;

/// Default config file looked up by the binary.
pub const DEFAULT_CONFIG_PATH: &str = "flares.toml";
/// Environment variable overriding [`DEFAULT_CONFIG_PATH`].
pub const CONFIG_PATH_ENV: &str = "FLARES_CONFIG";

const TICKS_MAX: i64 = i32::MAX as i64;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct FlareConfig {
    /// Grace period, in ticks, a marker survives without a flare refreshing it.
    pub no_source_decay_time: u32,
    /// Flare age, in ticks, at which its marker is forced unlit.
    pub light_decay_time: u32,
    /// Ticks the flare entity lingers after its light went out.
    pub entity_decay_time: u32,
    /// Pouch capacity per player.
    pub flare_quantity: u32,
    pub flare_replenish_time: u32,
    pub flare_replenish_quantity: u32,
    /// Light level 1..=16 emitted by a lit marker.
    pub flare_light_level: u8,
    /// Rebound divisor. Higher = less bounce.
    pub bounce_modifier: f32,
    /// Cells per tick subtracted from vertical velocity every tick.
    pub flare_gravity: f32,
    pub hit_entity_glows: bool,
    pub light_block_debug: bool,
    pub display_flare_count: bool,
    pub make_noise_when_thrown: bool,
}

impl Default for FlareConfig {
    fn default() -> Self {
        Self {
            no_source_decay_time: 7,
            light_decay_time: 6000,
            entity_decay_time: 6000,
            flare_quantity: 5,
            flare_replenish_time: 6000,
            flare_replenish_quantity: 1,
            flare_light_level: 15,
            bounce_modifier: 2.0,
            flare_gravity: 0.03,
            hit_entity_glows: true,
            light_block_debug: false,
            display_flare_count: true,
            make_noise_when_thrown: true,
        }
    }
}

impl FlareConfig {
    /// Age past which a flare despawns: `entityDecayTime + lightDecayTime`.
    #[inline]
    pub fn flare_lifetime(&self) -> u64 {
        u64::from(self.entity_decay_time) + u64::from(self.light_decay_time)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(source)?;
        Self::try_from(file.general)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        info!("Loaded flare config from {}", path.display());
        Ok(config)
    }

    /// Like [`FlareConfig::load`], but a missing file means defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    general: GeneralSection,
}

/// Wide-typed mirror of the `[general]` table.
///
/// Integers are read as `i64` and floats as `f64` so that a negative or
/// oversized value reaches validation and gets a range error naming the key.
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GeneralSection {
    no_source_decay_time: i64,
    light_decay_time: i64,
    entity_decay_time: i64,
    flare_quantity: i64,
    flare_replenish_time: i64,
    flare_replenish_quantity: i64,
    flare_light_level: i64,
    bounce_modifier: f64,
    flare_gravity: f64,
    hit_entity_glows: bool,
    light_block_debug: bool,
    display_flare_count: bool,
    make_noise_when_thrown: bool,
}

impl Default for GeneralSection {
    fn default() -> Self {
        let d = FlareConfig::default();
        Self {
            no_source_decay_time: d.no_source_decay_time.into(),
            light_decay_time: d.light_decay_time.into(),
            entity_decay_time: d.entity_decay_time.into(),
            flare_quantity: d.flare_quantity.into(),
            flare_replenish_time: d.flare_replenish_time.into(),
            flare_replenish_quantity: d.flare_replenish_quantity.into(),
            flare_light_level: d.flare_light_level.into(),
            bounce_modifier: d.bounce_modifier.into(),
            flare_gravity: d.flare_gravity.into(),
            hit_entity_glows: d.hit_entity_glows,
            light_block_debug: d.light_block_debug,
            display_flare_count: d.display_flare_count,
            make_noise_when_thrown: d.make_noise_when_thrown,
        }
    }
}

fn ticks(key: &'static str, value: i64, min: i64) -> Result<u32, ConfigError> {
    if !(min..=TICKS_MAX).contains(&value) {
        return Err(ConfigError::out_of_range(key, value, min, TICKS_MAX));
    }
    // Bounded by i32::MAX above.
    Ok(value as u32)
}

fn fraction(key: &'static str, value: f64, min: f64, max: f64) -> Result<f32, ConfigError> {
    // NaN fails `contains` too.
    if !(min..=max).contains(&value) {
        return Err(ConfigError::out_of_range(key, value, min, max));
    }
    Ok(value as f32)
}

impl TryFrom<GeneralSection> for FlareConfig {
    type Error = ConfigError;

    fn try_from(raw: GeneralSection) -> Result<Self, Self::Error> {
        let flare_light_level = raw.flare_light_level;
        if !(1..=16).contains(&flare_light_level) {
            return Err(ConfigError::out_of_range("flareLightLevel", flare_light_level, 1, 16));
        }

        Ok(Self {
            no_source_decay_time: ticks("noSourceDecayTime", raw.no_source_decay_time, 1)?,
            light_decay_time: ticks("lightDecayTime", raw.light_decay_time, 1)?,
            entity_decay_time: ticks("entityDecayTime", raw.entity_decay_time, 0)?,
            flare_quantity: ticks("flareQuantity", raw.flare_quantity, 1)?,
            flare_replenish_time: ticks("flareReplenishTime", raw.flare_replenish_time, 1)?,
            flare_replenish_quantity: ticks("flareReplenishQuantity", raw.flare_replenish_quantity, 1)?,
            flare_light_level: flare_light_level as u8,
            bounce_modifier: fraction("bounceModifier", raw.bounce_modifier, 0.0, f32::MAX as f64)?,
            flare_gravity: fraction("flareGravity", raw.flare_gravity, 0.0, 1.0)?,
            hit_entity_glows: raw.hit_entity_glows,
            light_block_debug: raw.light_block_debug,
            display_flare_count: raw.display_flare_count,
            make_noise_when_thrown: raw.make_noise_when_thrown,
        })
    }
}
