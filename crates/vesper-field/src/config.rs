//! Field tuning configuration (parsed from TOML) with built-in defaults
//!
//! Defaults reproduce the tuning the backdrop shipped with; a TOML file can
//! override any subset of values per table (`[stars]`, `[motes]`, `[links]`,
//! `[flyer]`).

use vesper_core::{Result, VesperError};

/// Starfield tuning
#[derive(Debug, Clone)]
pub struct StarConfig {
    pub count: usize,
    pub size_min: f32,
    pub size_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
    pub spawn_opacity_min: f32,
    pub spawn_opacity_max: f32,
    pub twinkle_min: f32,
    pub twinkle_max: f32,
    /// Opacity oscillation band (ping-pong bounds)
    pub opacity_floor: f32,
    pub opacity_ceil: f32,
    /// Probability of the secondary (lavender) tint
    pub secondary_tint_chance: f32,
    /// Pointer influence radius in pixels; hard cutoff beyond it
    pub cursor_radius: f32,
    /// Extra downward speed at distance zero; linear falloff to the radius
    pub cursor_force: f32,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            count: 50,
            size_min: 0.3,
            size_max: 1.8,
            speed_min: 0.05,
            speed_max: 0.15,
            spawn_opacity_min: 0.1,
            spawn_opacity_max: 0.5,
            twinkle_min: 0.005,
            twinkle_max: 0.02,
            opacity_floor: 0.05,
            opacity_ceil: 0.5,
            secondary_tint_chance: 0.3,
            cursor_radius: 150.0,
            cursor_force: 0.3,
        }
    }
}

/// Mote (magic particle) tuning
#[derive(Debug, Clone)]
pub struct MoteConfig {
    pub count: usize,
    pub size_min: f32,
    pub size_max: f32,
    /// Velocity components are drawn from [-drift, drift)
    pub drift: f32,
    pub spawn_opacity_min: f32,
    pub spawn_opacity_max: f32,
    pub twinkle_min: f32,
    pub twinkle_max: f32,
    pub opacity_floor: f32,
    pub opacity_ceil: f32,
}

impl Default for MoteConfig {
    fn default() -> Self {
        Self {
            count: 150,
            size_min: 1.0,
            size_max: 4.0,
            drift: 0.25,
            spawn_opacity_min: 0.3,
            spawn_opacity_max: 0.8,
            twinkle_min: 0.01,
            twinkle_max: 0.03,
            opacity_floor: 0.3,
            opacity_ceil: 0.8,
        }
    }
}

/// Proximity-link tuning for the mote field
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Pairs closer than this many pixels get a link
    pub threshold: f32,
    /// Link alpha at distance zero; linear falloff to the threshold
    pub base_alpha: f32,
    pub line_width: f32,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            threshold: 100.0,
            base_alpha: 0.15,
            line_width: 0.5,
        }
    }
}

/// Parallax flyer tuning
#[derive(Debug, Clone)]
pub struct FlyerConfig {
    /// Horizontal speed in pixels per frame
    pub speed: f32,
    /// Turnaround margin from either screen edge
    pub margin: f32,
    pub size: f32,
    /// Flight-arc altitude band; the arc peaks at screen center
    pub arc_min: f32,
    pub arc_max: f32,
    /// Wing oscillation: phase = sin(time * rate) * amplitude degrees
    pub wing_rate: f32,
    pub wing_amplitude: f32,
}

impl Default for FlyerConfig {
    fn default() -> Self {
        Self {
            speed: 0.5,
            margin: 100.0,
            size: 40.0,
            arc_min: 250.0,
            arc_max: 400.0,
            wing_rate: 10.0,
            wing_amplitude: 15.0,
        }
    }
}

/// All field tuning grouped in one place
#[derive(Debug, Clone, Default)]
pub struct BackdropConfig {
    pub stars: StarConfig,
    pub motes: MoteConfig,
    pub links: LinkConfig,
    pub flyer: FlyerConfig,
}

impl StarConfig {
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("count") {
            config.count = toml_count(v, config.count);
        }
        if let Some(v) = table.get("size_min") {
            config.size_min = toml_f32(v, config.size_min);
        }
        if let Some(v) = table.get("size_max") {
            config.size_max = toml_f32(v, config.size_max);
        }
        if let Some(v) = table.get("speed_min") {
            config.speed_min = toml_f32(v, config.speed_min);
        }
        if let Some(v) = table.get("speed_max") {
            config.speed_max = toml_f32(v, config.speed_max);
        }
        if let Some(v) = table.get("spawn_opacity_min") {
            config.spawn_opacity_min = toml_f32(v, config.spawn_opacity_min);
        }
        if let Some(v) = table.get("spawn_opacity_max") {
            config.spawn_opacity_max = toml_f32(v, config.spawn_opacity_max);
        }
        if let Some(v) = table.get("twinkle_min") {
            config.twinkle_min = toml_f32(v, config.twinkle_min);
        }
        if let Some(v) = table.get("twinkle_max") {
            config.twinkle_max = toml_f32(v, config.twinkle_max);
        }
        if let Some(v) = table.get("opacity_floor") {
            config.opacity_floor = toml_f32(v, config.opacity_floor);
        }
        if let Some(v) = table.get("opacity_ceil") {
            config.opacity_ceil = toml_f32(v, config.opacity_ceil);
        }
        if let Some(v) = table.get("secondary_tint_chance") {
            config.secondary_tint_chance = toml_f32(v, config.secondary_tint_chance);
        }
        if let Some(v) = table.get("cursor_radius") {
            config.cursor_radius = toml_f32(v, config.cursor_radius);
        }
        if let Some(v) = table.get("cursor_force") {
            config.cursor_force = toml_f32(v, config.cursor_force);
        }

        config
    }

    fn validate(&self) -> Result<()> {
        check("stars.size_min", self.size_min, 0.0, self.size_max)?;
        check("stars.speed_min", self.speed_min, 0.0, self.speed_max)?;
        check(
            "stars.spawn_opacity_min",
            self.spawn_opacity_min,
            0.0,
            self.spawn_opacity_max,
        )?;
        check("stars.spawn_opacity_max", self.spawn_opacity_max, 0.0, 1.0)?;
        check("stars.twinkle_min", self.twinkle_min, 0.0, self.twinkle_max)?;
        check("stars.opacity_floor", self.opacity_floor, 0.0, self.opacity_ceil)?;
        check("stars.opacity_ceil", self.opacity_ceil, 0.0, 1.0)?;
        check(
            "stars.secondary_tint_chance",
            self.secondary_tint_chance,
            0.0,
            1.0,
        )?;
        check("stars.cursor_radius", self.cursor_radius, 1.0, f32::INFINITY)?;
        check("stars.cursor_force", self.cursor_force, 0.0, f32::INFINITY)?;
        Ok(())
    }
}

impl MoteConfig {
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("count") {
            config.count = toml_count(v, config.count);
        }
        if let Some(v) = table.get("size_min") {
            config.size_min = toml_f32(v, config.size_min);
        }
        if let Some(v) = table.get("size_max") {
            config.size_max = toml_f32(v, config.size_max);
        }
        if let Some(v) = table.get("drift") {
            config.drift = toml_f32(v, config.drift);
        }
        if let Some(v) = table.get("spawn_opacity_min") {
            config.spawn_opacity_min = toml_f32(v, config.spawn_opacity_min);
        }
        if let Some(v) = table.get("spawn_opacity_max") {
            config.spawn_opacity_max = toml_f32(v, config.spawn_opacity_max);
        }
        if let Some(v) = table.get("twinkle_min") {
            config.twinkle_min = toml_f32(v, config.twinkle_min);
        }
        if let Some(v) = table.get("twinkle_max") {
            config.twinkle_max = toml_f32(v, config.twinkle_max);
        }
        if let Some(v) = table.get("opacity_floor") {
            config.opacity_floor = toml_f32(v, config.opacity_floor);
        }
        if let Some(v) = table.get("opacity_ceil") {
            config.opacity_ceil = toml_f32(v, config.opacity_ceil);
        }

        config
    }

    fn validate(&self) -> Result<()> {
        check("motes.size_min", self.size_min, 0.0, self.size_max)?;
        check("motes.drift", self.drift, 0.0, f32::INFINITY)?;
        check(
            "motes.spawn_opacity_min",
            self.spawn_opacity_min,
            0.0,
            self.spawn_opacity_max,
        )?;
        check("motes.spawn_opacity_max", self.spawn_opacity_max, 0.0, 1.0)?;
        check("motes.twinkle_min", self.twinkle_min, 0.0, self.twinkle_max)?;
        check("motes.opacity_floor", self.opacity_floor, 0.0, self.opacity_ceil)?;
        check("motes.opacity_ceil", self.opacity_ceil, 0.0, 1.0)?;
        Ok(())
    }
}

impl LinkConfig {
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("threshold") {
            config.threshold = toml_f32(v, config.threshold).max(1.0);
        }
        if let Some(v) = table.get("base_alpha") {
            config.base_alpha = toml_f32(v, config.base_alpha);
        }
        if let Some(v) = table.get("line_width") {
            config.line_width = toml_f32(v, config.line_width);
        }

        config
    }

    fn validate(&self) -> Result<()> {
        check("links.threshold", self.threshold, 1.0, f32::INFINITY)?;
        check("links.base_alpha", self.base_alpha, 0.0, 1.0)?;
        check("links.line_width", self.line_width, 0.0, f32::INFINITY)?;
        Ok(())
    }
}

impl FlyerConfig {
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("speed") {
            config.speed = toml_f32(v, config.speed);
        }
        if let Some(v) = table.get("margin") {
            config.margin = toml_f32(v, config.margin);
        }
        if let Some(v) = table.get("size") {
            config.size = toml_f32(v, config.size);
        }
        if let Some(v) = table.get("arc_min") {
            config.arc_min = toml_f32(v, config.arc_min);
        }
        if let Some(v) = table.get("arc_max") {
            config.arc_max = toml_f32(v, config.arc_max);
        }
        if let Some(v) = table.get("wing_rate") {
            config.wing_rate = toml_f32(v, config.wing_rate);
        }
        if let Some(v) = table.get("wing_amplitude") {
            config.wing_amplitude = toml_f32(v, config.wing_amplitude);
        }

        config
    }

    fn validate(&self) -> Result<()> {
        check("flyer.speed", self.speed, 0.0, f32::INFINITY)?;
        check("flyer.margin", self.margin, 0.0, f32::INFINITY)?;
        check("flyer.size", self.size, 0.0, f32::INFINITY)?;
        check("flyer.arc_min", self.arc_min, 0.0, self.arc_max)?;
        check("flyer.wing_rate", self.wing_rate, 0.0, f32::INFINITY)?;
        check("flyer.wing_amplitude", self.wing_amplitude, 0.0, f32::INFINITY)?;
        Ok(())
    }
}

impl BackdropConfig {
    /// Parse from a TOML document with optional `[stars]`, `[motes]`,
    /// `[links]`, `[flyer]` tables. Missing tables keep their defaults;
    /// the assembled config is range-checked before it is returned.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let root: toml::value::Table = toml::from_str(source)?;
        let mut config = Self::default();

        if let Some(v) = root.get("stars") {
            let table = v
                .as_table()
                .ok_or_else(|| VesperError::ConfigError("[stars] must be a table".into()))?;
            config.stars = StarConfig::from_toml(table);
        }
        if let Some(v) = root.get("motes") {
            let table = v
                .as_table()
                .ok_or_else(|| VesperError::ConfigError("[motes] must be a table".into()))?;
            config.motes = MoteConfig::from_toml(table);
        }
        if let Some(v) = root.get("links") {
            let table = v
                .as_table()
                .ok_or_else(|| VesperError::ConfigError("[links] must be a table".into()))?;
            config.links = LinkConfig::from_toml(table);
        }
        if let Some(v) = root.get("flyer") {
            let table = v
                .as_table()
                .ok_or_else(|| VesperError::ConfigError("[flyer] must be a table".into()))?;
            config.flyer = FlyerConfig::from_toml(table);
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject negative speeds, inverted bands, and other tuning values the
    /// simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        self.stars.validate()?;
        self.motes.validate()?;
        self.links.validate()?;
        self.flyer.validate()?;
        Ok(())
    }

    /// Load from a TOML file on disk
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

// ── TOML helpers (handle integer/float coercion) ──

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    v.as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default)
}

fn toml_count(v: &toml::Value, default: usize) -> usize {
    let n = v.as_integer().unwrap_or(default as i64).max(0) as usize;
    n.min(10000)
}

// NaN fails both comparisons and is rejected with the range it broke
fn check(field: &str, value: f32, min: f32, max: f32) -> Result<()> {
    if !(value >= min && value <= max) {
        return Err(VesperError::ValueOutOfRange {
            field: field.to_string(),
            min: min as f64,
            max: max as f64,
            value: value as f64,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_shipped_tuning() {
        let config = BackdropConfig::default();
        assert_eq!(config.stars.count, 50);
        assert_eq!(config.motes.count, 150);
        assert!((config.links.threshold - 100.0).abs() < 1e-6);
        assert!((config.links.base_alpha - 0.15).abs() < 1e-6);
        assert!((config.links.line_width - 0.5).abs() < 1e-6);
        assert!((config.stars.cursor_radius - 150.0).abs() < 1e-6);
        assert!((config.stars.cursor_force - 0.3).abs() < 1e-6);
        assert!((config.flyer.speed - 0.5).abs() < 1e-6);
        assert!((config.flyer.margin - 100.0).abs() < 1e-6);
        assert!((config.flyer.arc_min - 250.0).abs() < 1e-6);
        assert!((config.flyer.arc_max - 400.0).abs() < 1e-6);
    }

    #[test]
    fn default_bands_are_sane() {
        let config = BackdropConfig::default();
        assert!(config.stars.opacity_floor < config.stars.opacity_ceil);
        assert!(config.motes.opacity_floor < config.motes.opacity_ceil);
        assert!(config.stars.size_min < config.stars.size_max);
        assert!(config.flyer.arc_min < config.flyer.arc_max);
    }

    #[test]
    fn parse_partial_override() {
        let source = r#"
[stars]
count = 80
cursor_radius = 200.0

[links]
threshold = 120
"#;
        let config = BackdropConfig::from_toml_str(source).unwrap();
        assert_eq!(config.stars.count, 80);
        assert!((config.stars.cursor_radius - 200.0).abs() < 1e-6);
        // Untouched values keep defaults
        assert!((config.stars.cursor_force - 0.3).abs() < 1e-6);
        assert_eq!(config.motes.count, 150);
        // Integer coerced to float
        assert!((config.links.threshold - 120.0).abs() < 1e-6);
    }

    #[test]
    fn count_is_capped() {
        let source = "[motes]\ncount = 999999\n";
        let config = BackdropConfig::from_toml_str(source).unwrap();
        assert_eq!(config.motes.count, 10000);
    }

    #[test]
    fn default_config_passes_validation() {
        assert!(BackdropConfig::default().validate().is_ok());
    }

    #[test]
    fn negative_speed_override_rejected() {
        let err = BackdropConfig::from_toml_str("[flyer]\nspeed = -2.0\n").unwrap_err();
        assert!(matches!(err, VesperError::ValueOutOfRange { .. }));
    }

    #[test]
    fn inverted_opacity_band_rejected() {
        let source = "[stars]\nopacity_floor = 0.9\nopacity_ceil = 0.2\n";
        let err = BackdropConfig::from_toml_str(source).unwrap_err();
        assert!(matches!(err, VesperError::ValueOutOfRange { .. }));
    }

    #[test]
    fn non_table_section_rejected() {
        let err = BackdropConfig::from_toml_str("stars = 3\n").unwrap_err();
        assert!(matches!(err, VesperError::ConfigError(_)));
    }

    #[test]
    fn bad_toml_reported() {
        let err = BackdropConfig::from_toml_str("[stars\ncount = 1").unwrap_err();
        assert!(matches!(err, VesperError::TomlParseError(_)));
    }
}
