//! Configuration file support for MetaFit.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/metafit/config.toml`.

use crate::profile::UserProfile;
use crate::types::Tier;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub program: ProgramConfig,

    /// Questionnaire answers; calorie features stay off until set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,

    #[serde(default)]
    pub targets: TargetsConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Program selection configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProgramConfig {
    #[serde(default = "default_tier")]
    pub tier: Tier,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            tier: default_tier(),
        }
    }
}

/// Goal target configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TargetsConfig {
    #[serde(default = "default_weekly_workout_target")]
    pub weekly_workout_target: u32,

    #[serde(default = "default_weight_loss_target_kg")]
    pub weight_loss_target_kg: f64,

    #[serde(default = "default_muscle_gain_target_kg")]
    pub muscle_gain_target_kg: f64,
}

impl Default for TargetsConfig {
    fn default() -> Self {
        Self {
            weekly_workout_target: default_weekly_workout_target(),
            weight_loss_target_kg: default_weight_loss_target_kg(),
            muscle_gain_target_kg: default_muscle_gain_target_kg(),
        }
    }
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| {
        let home = std::env::var("HOME").expect("HOME environment variable not set");
        PathBuf::from(home).join(".local/share")
    });
    base.join("metafit")
}

fn default_tier() -> Tier {
    Tier::Explorer
}

fn default_weekly_workout_target() -> u32 {
    3
}

fn default_weight_loss_target_kg() -> f64 {
    -5.0
}

fn default_muscle_gain_target_kg() -> f64 {
    3.0
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("metafit").join("config.toml")
    }

    /// Save the current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_config_path();
        self.save_to(&config_path)
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, DietType, Goal, Sex};

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.program.tier, Tier::Explorer);
        assert_eq!(config.targets.weekly_workout_target, 3);
        assert_eq!(config.targets.weight_loss_target_kg, -5.0);
        assert!(config.profile.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.program.tier = Tier::Champion;
        config.profile = Some(UserProfile {
            name: "Sam".into(),
            age: 31,
            sex: Sex::Female,
            height_cm: 165.0,
            weight_kg: 62.0,
            activity: ActivityLevel::Light,
            diet: DietType::Vegan,
            goal: Goal::Endurance,
        });

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.program.tier, Tier::Champion);
        assert_eq!(parsed.profile, config.profile);
        assert_eq!(
            parsed.targets.weekly_workout_target,
            config.targets.weekly_workout_target
        );
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[program]
tier = "warrior"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.program.tier, Tier::Warrior);
        assert_eq!(config.targets.weekly_workout_target, 3); // default
    }

    #[test]
    fn test_config_with_profile_section() {
        let toml_str = r#"
[profile]
name = "Alex"
age = 25
sex = "male"
height_cm = 170.0
weight_kg = 70.0
activity = "moderate"
diet = "non_vegetarian"
goal = "muscle_gain"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let profile = config.profile.unwrap();
        assert_eq!(profile.goal, Goal::MuscleGain);
        assert_eq!(profile.daily_calories(), (profile.bmr() * 1.55).round() as u32);
    }
}
