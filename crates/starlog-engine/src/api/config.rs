use serde::{Deserialize, Serialize};
use crate::renderer::camera::CameraConfig;
use crate::systems::star_cloud::StarCloudConfig;
use crate::systems::starfield::StarfieldConfig;

/// Cover scene configuration. Every field has a default, so `{}` is a
/// valid configuration that reproduces the stock cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverConfig {
    /// Seed for planet sizes, speeds, phases and star positions.
    pub seed: u64,
    pub camera: CameraConfig,
    pub star_cloud: StarCloudConfig,
    pub systems: Vec<SystemConfig>,
}

impl Default for CoverConfig {
    fn default() -> Self {
        Self {
            seed: 0x5eed_cafe,
            camera: CameraConfig::default(),
            star_cloud: StarCloudConfig::default(),
            systems: vec![SystemConfig::default()],
        }
    }
}

impl CoverConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// One orbit system: a group frame, its planets and its central body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// Group origin in world space.
    pub position: [f32; 3],
    pub planet_count: u32,
    /// 0xRRGGBB colors, cycled over the planets.
    pub planet_colors: Vec<u32>,
    /// Orbit radius of planet `i` is `(i + orbit_index_offset) * orbit_spacing + orbit_base`.
    pub orbit_spacing: f32,
    pub orbit_index_offset: f32,
    pub orbit_base: f32,
    /// Planet radius range, [min, max).
    pub planet_radius: [f32; 2],
    /// Magnitude range of the per-tick angular speed, [min, max). The
    /// direction is random.
    pub angular_speed: [f32; 2],
    pub central: Option<BinaryConfig>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            position: [350.0, -150.0, -250.0],
            planet_count: 3,
            planet_colors: vec![0x66ccff, 0x66ff66, 0xff6666],
            orbit_spacing: 40.0,
            orbit_index_offset: 1.5,
            orbit_base: 20.0,
            planet_radius: [8.0, 13.0],
            angular_speed: [0.001, 0.006],
            central: Some(BinaryConfig::default()),
        }
    }
}

impl SystemConfig {
    pub fn orbit_radius(&self, index: u32) -> f32 {
        (index as f32 + self.orbit_index_offset) * self.orbit_spacing + self.orbit_base
    }

    /// Color of planet `index`; white if the palette is empty.
    pub fn planet_color(&self, index: u32) -> u32 {
        if self.planet_colors.is_empty() {
            return 0xffffff;
        }
        self.planet_colors[index as usize % self.planet_colors.len()]
    }
}

/// Binary star pair at a system's center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinaryConfig {
    pub stars: [StarConfig; 2],
    /// Distance of each star from the center.
    pub distance: f32,
    /// Radians per second.
    pub rate: f32,
}

impl Default for BinaryConfig {
    fn default() -> Self {
        Self {
            stars: [
                StarConfig { radius: 15.0, color: 0xff8844, wireframe: true },
                StarConfig { radius: 10.0, color: 0x4488ff, wireframe: true },
            ],
            distance: 30.0,
            rate: 0.5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarConfig {
    pub radius: f32,
    pub color: u32,
    #[serde(default)]
    pub wireframe: bool,
}

/// Site behavior around the cover.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub seed: u64,
    pub starfield: StarfieldConfig,
    /// Tooltip offset from the pointer, in pixels.
    pub tooltip_offset: f32,
    /// Delay between successive content entrance animations, in seconds.
    pub stagger: f32,
    pub enter_duration_ms: f64,
    /// Delay before the content fades in after entering.
    pub reveal_delay_ms: u32,
    /// Delay before the cover gets its `loaded` class.
    pub cover_loaded_delay_ms: u32,
    /// Location hash that skips the cover.
    pub direct_entry_hash: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            seed: 0x57a2_f1e1d,
            starfield: StarfieldConfig::default(),
            tooltip_offset: 25.0,
            stagger: 0.05,
            enter_duration_ms: 1500.0,
            reveal_delay_ms: 50,
            cover_loaded_delay_ms: 100,
            direct_entry_hash: "#research".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        assert_eq!(CoverConfig::from_json("{}").unwrap(), CoverConfig::default());
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn default_orbits() {
        let system = SystemConfig::default();
        assert_eq!(system.orbit_radius(0), 80.0);
        assert_eq!(system.orbit_radius(1), 120.0);
        assert_eq!(system.orbit_radius(2), 160.0);
        assert_eq!(system.planet_color(4), 0x66ff66);
    }

    #[test]
    fn partial_override() {
        let json = r#"{
            "seed": 7,
            "camera": { "fov_y_degrees": 60.0 },
            "systems": [ { "planet_count": 5, "central": null } ]
        }"#;
        let config = CoverConfig::from_json(json).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.camera.fov_y_degrees, 60.0);
        assert_eq!(config.camera.far, 4000.0);
        assert_eq!(config.systems[0].planet_count, 5);
        assert!(config.systems[0].central.is_none());
        assert_eq!(config.systems[0].position, [350.0, -150.0, -250.0]);
    }

    #[test]
    fn site_config_overrides() {
        let config = SiteConfig::from_json(r#"{ "starfield": { "static_stars": 10 } }"#).unwrap();
        assert_eq!(config.starfield.static_stars, 10);
        assert_eq!(config.starfield.fast_particles, 100);
        assert_eq!(config.direct_entry_hash, "#research");
    }
}
