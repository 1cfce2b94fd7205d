use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ColornormError, Result};

/// Scaling policy for a grid layer.
///
/// `Normal` and `Log` are the two choices the control panel offers as plain
/// strings; the parameterized variants are reachable through the full JSON
/// configuration form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScaleKind {
    #[default]
    Normal,
    Log,
    Centered {
        vcenter: f64,
        halfrange: f64,
    },
    SymLog {
        linthresh: f64,
        #[serde(default = "default_linscale")]
        linscale: f64,
        #[serde(default)]
        vcenter: f64,
    },
}

impl FromStr for ScaleKind {
    type Err = ColornormError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(ScaleKind::Normal),
            "log" => Ok(ScaleKind::Log),
            other => Err(ColornormError::ConfigError(format!(
                "unknown scale: {other}"
            ))),
        }
    }
}

/// Style configuration for a grid layer, mirrors the control-panel inputs.
///
/// Immutable once built: a configuration change constructs a new value (and a
/// new normalizer from it) instead of mutating the one already in use by the
/// render path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "default_vmin")]
    pub vmin: f64,

    #[serde(default = "default_vmax")]
    pub vmax: f64,

    #[serde(default = "default_opacity")]
    pub opacity: f64,

    /// Colormap name, passed through to the color lookup untouched.
    #[serde(default = "default_cmap")]
    pub cmap: String,

    #[serde(default)]
    pub reverse: bool,

    #[serde(default)]
    pub clip: bool,

    #[serde(default)]
    pub scale: ScaleKind,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            vmin: default_vmin(),
            vmax: default_vmax(),
            opacity: default_opacity(),
            cmap: default_cmap(),
            reverse: false,
            clip: false,
            scale: ScaleKind::default(),
        }
    }
}

impl StyleConfig {
    /// Parse a configuration from its JSON form, filling defaults for any
    /// missing field.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }
}

fn default_vmin() -> f64 {
    0.0
}
fn default_vmax() -> f64 {
    20.0
}
fn default_opacity() -> f64 {
    0.8
}
fn default_cmap() -> String {
    "jet".into()
}
fn default_linscale() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_fills_defaults() {
        let config = StyleConfig::from_json("{}").unwrap();
        assert_eq!(config.vmin, 0.0);
        assert_eq!(config.vmax, 20.0);
        assert_eq!(config.opacity, 0.8);
        assert_eq!(config.cmap, "jet");
        assert!(!config.reverse);
        assert!(!config.clip);
        assert_eq!(config.scale, ScaleKind::Normal);
    }

    #[test]
    fn test_partial_json_overrides() {
        let config =
            StyleConfig::from_json(r#"{"vmax": 50.0, "scale": {"kind": "log"}, "clip": true}"#)
                .unwrap();
        assert_eq!(config.vmin, 0.0);
        assert_eq!(config.vmax, 50.0);
        assert!(config.clip);
        assert_eq!(config.scale, ScaleKind::Log);
    }

    #[test]
    fn test_sym_log_scale_json() {
        let config = StyleConfig::from_json(
            r#"{"vmin": -100.0, "vmax": 100.0, "scale": {"kind": "sym_log", "linthresh": 1.0}}"#,
        )
        .unwrap();
        assert_eq!(
            config.scale,
            ScaleKind::SymLog {
                linthresh: 1.0,
                linscale: 1.0,
                vcenter: 0.0,
            }
        );
    }

    #[test]
    fn test_invalid_json_errors() {
        assert!(StyleConfig::from_json(r#"{"vmin": "zero"}"#).is_err());
    }

    #[test]
    fn test_scale_kind_from_str() {
        assert_eq!("normal".parse::<ScaleKind>().unwrap(), ScaleKind::Normal);
        assert_eq!("log".parse::<ScaleKind>().unwrap(), ScaleKind::Log);
        assert!("linear".parse::<ScaleKind>().is_err());
        assert!("".parse::<ScaleKind>().is_err());
    }

    #[test]
    fn test_config_roundtrip() {
        let config = StyleConfig {
            scale: ScaleKind::Centered {
                vcenter: 5.0,
                halfrange: 2.5,
            },
            ..StyleConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back = StyleConfig::from_json(&json).unwrap();
        assert_eq!(back.scale, config.scale);
        assert_eq!(back.vmax, config.vmax);
    }
}
