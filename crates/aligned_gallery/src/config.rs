use std::path::Path;

use aligned_button::MarginOverride;
use anyhow::Context as _;
use serde::Deserialize;

use crate::step::Step;

/// Scenario file bundled with the binary.
pub const BUILTIN: &str = include_str!("../scenarios/default.toml");

/// Settings and scenarios read from a TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    /// button size used for every scenario
    pub width: f32,
    pub height: f32,
    /// characters available for the ASCII picture
    pub columns: usize,
    pub log_level: String,
    pub text: String,
    #[serde(rename = "scenario")]
    pub scenarios: Vec<Scenario>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            width: 320.0,
            height: 24.0,
            columns: 64,
            log_level: "info".to_string(),
            text: "This is a test button".to_string(),
            scenarios: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// picture a reviewer should see
    #[serde(default)]
    pub expected: String,
    /// slot order the layout must reach, e.g. `[i][t][<>][<>]`
    #[serde(default)]
    pub order: Option<String>,
    /// content margins applied before the first step
    #[serde(default)]
    pub margins: MarginOverride,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl Scenario {
    pub fn parse_steps(&self) -> anyhow::Result<Vec<Step>> {
        self.steps
            .iter()
            .map(|s| {
                s.parse::<Step>()
                    .with_context(|| format!("scenario `{}`", self.name))
            })
            .collect()
    }
}

impl GalleryConfig {
    pub fn from_toml(source: &str) -> anyhow::Result<Self> {
        let config: GalleryConfig = toml::from_str(source).context("invalid scenario file")?;
        anyhow::ensure!(
            config.width > 0.0 && config.height > 0.0,
            "button size must be positive, got {}x{}",
            config.width,
            config.height
        );
        anyhow::ensure!(config.columns >= 8, "need at least 8 columns, got {}", config.columns);
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("could not read {}", path.display()))?;
        Self::from_toml(&source).with_context(|| format!("while loading {}", path.display()))
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_toml(BUILTIN)
    }

    pub fn level(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_file_has_every_scenario() {
        let config = GalleryConfig::builtin().unwrap();
        assert_eq!(config.scenarios.len(), 22);
        assert_eq!(config.text, "This is a test button");
        for scenario in &config.scenarios {
            scenario.parse_steps().unwrap();
            assert!(scenario.order.is_some(), "{}", scenario.name);
        }
    }

    #[test]
    fn defaults_fill_missing_keys() {
        let config = GalleryConfig::from_toml(
            r#"
            [[scenario]]
            name = "bare"
            "#,
        )
        .unwrap();
        assert_eq!(config.columns, 64);
        assert_eq!(config.scenarios[0].steps.len(), 0);
        assert!(config.scenarios[0].margins.is_empty());
        assert_eq!(config.level(), log::LevelFilter::Info);
    }

    #[test]
    fn margins_table() {
        let config = GalleryConfig::from_toml(
            r#"
            [[scenario]]
            name = "padded"
            margins = { left = 4.0, bottom = 2.0 }
            "#,
        )
        .unwrap();
        let m = config.scenarios[0].margins;
        assert_eq!((m.left, m.top, m.right, m.bottom), (Some(4.0), None, None, Some(2.0)));
    }

    #[test]
    fn rejects_degenerate_sizes_and_bad_steps() {
        assert!(GalleryConfig::from_toml("width = 0.0").is_err());
        let config = GalleryConfig::from_toml(
            r#"
            [[scenario]]
            name = "broken"
            steps = ["wiggle()"]
            "#,
        )
        .unwrap();
        let err = config.scenarios[0].parse_steps().unwrap_err();
        assert!(format!("{err:#}").contains("unknown call `wiggle`"));
    }
}
