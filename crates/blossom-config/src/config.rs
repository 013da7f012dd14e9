//! The flower configuration: defaults, key/value parsing, clamping

use blossom_core::{Color, Result, Vec3};
use std::path::Path;

/// Immutable widget configuration, supplied once at construction.
///
/// Query keys use camelCase spelling (`petalColor`,
/// `segmentCount`, `particleSizeX`, ...); TOML keys are snake_case with
/// `particle_size` as a 3-element array.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerConfig {
    /// Viewport edge length in pixels ("size")
    pub viewport_size: u32,
    pub petal_color: Color,
    pub center_color: Color,
    /// Per-frame rotation increment while hovered; idle runs at a fifth of it
    pub speed: f32,
    /// Box segments per petal
    pub segment_count: u32,
    /// Radial gap between consecutive segments of a petal
    pub segment_spacing: f32,
    pub petal_count: u32,
    /// Radial distance from the center to the first segment of each petal
    pub petal_distance: f32,
    /// Box extents of one burst particle
    pub particle_size: Vec3,
}

impl Default for FlowerConfig {
    fn default() -> Self {
        Self {
            viewport_size: 300,
            petal_color: Color::from_hex(0xFF69B4),
            center_color: Color::from_hex(0xFFCC00),
            speed: 0.05,
            segment_count: 3,
            segment_spacing: 0.45,
            petal_count: 6,
            petal_distance: 1.2,
            particle_size: Vec3::new(0.15, 0.15, 0.15),
        }
    }
}

impl FlowerConfig {
    /// Parse a query string ("size=240&petalColor=ff69b4"), starting from
    /// the defaults. A leading '?' is tolerated; unknown keys are ignored.
    pub fn from_query(query: &str) -> Self {
        let mut config = Self::default();
        config.apply_query(query);
        config
    }

    /// Parse key/value pairs, starting from the defaults.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut config = Self::default();
        config.apply_pairs(pairs);
        config
    }

    /// Apply a query string on top of the current values.
    pub fn apply_query(&mut self, query: &str) {
        let query = query.trim().trim_start_matches('?');
        self.apply_pairs(query.split('&').filter_map(|kv| kv.split_once('=')));
    }

    /// Apply key/value pairs on top of the current values.
    ///
    /// A malformed value leaves its field unchanged, which means the
    /// default when parsing from scratch. Everything is clamped afterwards.
    pub fn apply_pairs<'a, I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        for (key, value) in pairs {
            match key.trim() {
                "size" => apply_u32(&mut self.viewport_size, value),
                "petalColor" => apply_color(&mut self.petal_color, value),
                "centerColor" => apply_color(&mut self.center_color, value),
                "speed" => apply_f32(&mut self.speed, value),
                "segmentCount" => apply_u32(&mut self.segment_count, value),
                "segmentSpacing" => apply_f32(&mut self.segment_spacing, value),
                "petalCount" => apply_u32(&mut self.petal_count, value),
                "petalDistance" => apply_f32(&mut self.petal_distance, value),
                "particleSizeX" => apply_f32(&mut self.particle_size.x, value),
                "particleSizeY" => apply_f32(&mut self.particle_size.y, value),
                "particleSizeZ" => apply_f32(&mut self.particle_size.z, value),
                _ => {}
            }
        }
        self.clamp_ranges();
    }

    /// Parse a FlowerConfig from a TOML table (snake_case keys).
    pub fn from_toml(table: &toml::value::Table) -> Self {
        let mut config = Self::default();

        if let Some(v) = table.get("size") {
            config.viewport_size = toml_u32(v, config.viewport_size);
        }
        if let Some(s) = table.get("petal_color").and_then(|v| v.as_str()) {
            apply_color(&mut config.petal_color, s);
        }
        if let Some(s) = table.get("center_color").and_then(|v| v.as_str()) {
            apply_color(&mut config.center_color, s);
        }
        if let Some(v) = table.get("speed") {
            config.speed = toml_f32(v, config.speed);
        }
        if let Some(v) = table.get("segment_count") {
            config.segment_count = toml_u32(v, config.segment_count);
        }
        if let Some(v) = table.get("segment_spacing") {
            config.segment_spacing = toml_f32(v, config.segment_spacing);
        }
        if let Some(v) = table.get("petal_count") {
            config.petal_count = toml_u32(v, config.petal_count);
        }
        if let Some(v) = table.get("petal_distance") {
            config.petal_distance = toml_f32(v, config.petal_distance);
        }
        if let Some(v) = table.get("particle_size") {
            config.particle_size = toml_vec3(v, config.particle_size);
        }

        config.clamp_ranges();
        config
    }

    /// Load a config from a TOML file with top-level keys.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let table: toml::value::Table = toml::from_str(&text)?;
        Ok(Self::from_toml(&table))
    }

    /// Clamp every numeric field into its supported range. Parsing paths
    /// call this; hand-built configs are taken as-is.
    fn clamp_ranges(&mut self) {
        self.viewport_size = self.viewport_size.clamp(50, 400);
        self.speed = self.speed.clamp(0.01, 0.2);
        self.segment_count = self.segment_count.clamp(1, 10);
        self.segment_spacing = self.segment_spacing.clamp(0.1, 1.0);
        self.petal_count = self.petal_count.clamp(1, 20);
        self.petal_distance = self.petal_distance.clamp(0.2, 3.0);
        self.particle_size.x = self.particle_size.x.clamp(0.05, 1.0);
        self.particle_size.y = self.particle_size.y.clamp(0.05, 1.0);
        self.particle_size.z = self.particle_size.z.clamp(0.05, 1.0);
    }
}

// ── Value helpers (lenient: keep the current value on any parse failure) ──

fn apply_f32(field: &mut f32, raw: &str) {
    if let Ok(v) = raw.trim().parse::<f32>() {
        if v.is_finite() {
            *field = v;
        }
    }
}

fn apply_u32(field: &mut u32, raw: &str) {
    // Counts beyond u32 saturate so the range clamp still lands on its max
    if let Ok(v) = raw.trim().parse::<i64>() {
        if v >= 0 {
            *field = v.min(u32::MAX as i64) as u32;
        }
    }
}

fn apply_color(field: &mut Color, raw: &str) {
    if let Some(c) = Color::from_hex_str(raw.trim()) {
        *field = c;
    }
}

fn toml_f32(v: &toml::Value, default: f32) -> f32 {
    let parsed = v
        .as_float()
        .map(|f| f as f32)
        .or_else(|| v.as_integer().map(|i| i as f32))
        .unwrap_or(default);
    if parsed.is_finite() {
        parsed
    } else {
        default
    }
}

fn toml_u32(v: &toml::Value, default: u32) -> u32 {
    match v.as_integer() {
        Some(i) if i >= 0 => i.min(u32::MAX as i64) as u32,
        _ => default,
    }
}

fn toml_vec3(v: &toml::Value, default: Vec3) -> Vec3 {
    if let Some(arr) = v.as_array() {
        if arr.len() >= 3 {
            return Vec3::from_array([
                toml_f32(&arr[0], default.x),
                toml_f32(&arr[1], default.y),
                toml_f32(&arr[2], default.z),
            ]);
        }
    }
    default
}

#[cfg(test)]
mod tests {
    use super::*;
    use blossom_core::BlossomError;

    fn temp_dir(tag: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "blossom_config_{}_{}",
            tag,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn defaults_match_documented_values() {
        let config = FlowerConfig::default();
        assert_eq!(config.viewport_size, 300);
        assert_eq!(config.petal_color, Color::from_hex_str("ff69b4").unwrap());
        assert_eq!(config.center_color, Color::from_hex_str("ffcc00").unwrap());
        assert!((config.speed - 0.05).abs() < 1e-6);
        assert_eq!(config.segment_count, 3);
        assert!((config.segment_spacing - 0.45).abs() < 1e-6);
        assert_eq!(config.petal_count, 6);
        assert!((config.petal_distance - 1.2).abs() < 1e-6);
        assert_eq!(config.particle_size, Vec3::new(0.15, 0.15, 0.15));
    }

    #[test]
    fn parses_full_query_string() {
        let config = FlowerConfig::from_query(
            "?size=240&petalColor=ffffff&centerColor=112233&speed=0.1\
             &segmentCount=4&segmentSpacing=0.5&petalCount=8&petalDistance=1.5\
             &particleSizeX=0.2&particleSizeY=0.25&particleSizeZ=0.3",
        );
        assert_eq!(config.viewport_size, 240);
        assert_eq!(config.petal_color, Color::WHITE);
        assert!((config.speed - 0.1).abs() < 1e-6);
        assert_eq!(config.segment_count, 4);
        assert!((config.segment_spacing - 0.5).abs() < 1e-6);
        assert_eq!(config.petal_count, 8);
        assert!((config.petal_distance - 1.5).abs() < 1e-6);
        assert_eq!(config.particle_size, Vec3::new(0.2, 0.25, 0.3));
    }

    #[test]
    fn malformed_values_keep_defaults() {
        let config = FlowerConfig::from_query(
            "speed=fast&segmentCount=-2&petalColor=not-a-color&petalDistance=NaN&junk",
        );
        assert_eq!(config, FlowerConfig::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = FlowerConfig::from_query("theme=dark&size=200");
        assert_eq!(config.viewport_size, 200);
    }

    #[test]
    fn out_of_range_values_clamp() {
        let config = FlowerConfig::from_query(
            "size=10&speed=9&segmentCount=99&segmentSpacing=0.01&petalCount=100\
             &petalDistance=50&particleSizeX=0.001",
        );
        assert_eq!(config.viewport_size, 50);
        assert!((config.speed - 0.2).abs() < 1e-6);
        assert_eq!(config.segment_count, 10);
        assert!((config.segment_spacing - 0.1).abs() < 1e-6);
        assert_eq!(config.petal_count, 20);
        assert!((config.petal_distance - 3.0).abs() < 1e-6);
        assert!((config.particle_size.x - 0.05).abs() < 1e-6);
    }

    #[test]
    fn colors_accept_leading_hash() {
        let config = FlowerConfig::from_query("petalColor=%23ff0000");
        // Percent-encoding is not resolved, so the raw value fails to parse
        assert_eq!(config.petal_color, FlowerConfig::default().petal_color);

        let config = FlowerConfig::from_query("petalColor=#ff0000");
        assert_eq!(config.petal_color, Color::from_hex(0xFF0000));
    }

    #[test]
    fn parse_from_toml() {
        let toml_str = r#"
size = 350
petal_color = "ffffff"
speed = 0.08
petal_count = 12
particle_size = [0.2, 0.2, 0.2]
"#;
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let config = FlowerConfig::from_toml(&table);
        assert_eq!(config.viewport_size, 350);
        assert_eq!(config.petal_color, Color::WHITE);
        assert!((config.speed - 0.08).abs() < 1e-6);
        assert_eq!(config.petal_count, 12);
        assert_eq!(config.particle_size, Vec3::new(0.2, 0.2, 0.2));
        // Untouched keys keep their defaults
        assert_eq!(config.segment_count, 3);
    }

    #[test]
    fn toml_integer_float_coercion() {
        // `particle_size = [1, 0.5, 1]` mixes integers and floats
        let toml_str = "particle_size = [1, 0.5, 1]";
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let config = FlowerConfig::from_toml(&table);
        assert_eq!(config.particle_size, Vec3::new(1.0, 0.5, 1.0));
    }

    #[test]
    fn query_overrides_apply_on_top() {
        let toml_str = "speed = 0.15\npetal_count = 9";
        let table: toml::value::Table = toml::from_str(toml_str).unwrap();
        let mut config = FlowerConfig::from_toml(&table);
        config.apply_query("petalCount=4");
        assert_eq!(config.petal_count, 4);
        assert!((config.speed - 0.15).abs() < 1e-6);
    }

    #[test]
    fn oversized_integers_clamp_to_range_max() {
        // 4294967396 does not fit in u32; it must land on the range max, not wrap
        let table: toml::value::Table = toml::from_str("size = 4294967396").unwrap();
        assert_eq!(FlowerConfig::from_toml(&table).viewport_size, 400);

        let config = FlowerConfig::from_query("size=4294967396&petalCount=4294967296");
        assert_eq!(config.viewport_size, 400);
        assert_eq!(config.petal_count, 20);

        // Negative counts stay on the default
        let table: toml::value::Table = toml::from_str("petal_count = -3").unwrap();
        assert_eq!(FlowerConfig::from_toml(&table).petal_count, 6);
    }

    #[test]
    fn loads_config_from_toml_file() {
        let dir = temp_dir("load");
        let path = dir.join("flower.toml");
        std::fs::write(&path, "size = 350\nspeed = 0.08\npetal_color = \"00ff00\"\n").unwrap();

        let config = FlowerConfig::from_toml_file(&path).unwrap();
        assert_eq!(config.viewport_size, 350);
        assert!((config.speed - 0.08).abs() < 1e-6);
        assert_eq!(config.petal_color, Color::from_hex(0x00FF00));
        assert_eq!(config.segment_count, 3);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_toml_file_is_an_io_error() {
        let dir = temp_dir("missing");
        let err = FlowerConfig::from_toml_file(dir.join("absent.toml")).unwrap_err();
        assert!(matches!(err, BlossomError::IoError(_)));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn invalid_toml_file_is_a_parse_error() {
        let dir = temp_dir("invalid");
        let path = dir.join("broken.toml");
        std::fs::write(&path, "size = [unclosed").unwrap();
        let err = FlowerConfig::from_toml_file(&path).unwrap_err();
        assert!(matches!(err, BlossomError::TomlParseError(_)));
        std::fs::remove_dir_all(&dir).ok();
    }
}
