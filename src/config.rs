use std::path::PathBuf;
use std::str::FromStr;

use crate::loader::MissingImagePolicy;
use crate::style::{AdaptationSettings, DEFAULT_BLUR_SIGMA};

#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub asset_dir: PathBuf,
    pub catalog_path: Option<PathBuf>,
    pub missing_image_policy: MissingImagePolicy,
    pub blur_sigma: f32,
    pub interactive: bool,
    pub preview_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            asset_dir: PathBuf::from("."),
            catalog_path: None,
            missing_image_policy: MissingImagePolicy::Warn,
            blur_sigma: DEFAULT_BLUR_SIGMA,
            interactive: true,
            preview_dir: None,
        }
    }
}

fn parse_value<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|value| value.trim().parse::<T>().ok())
}

fn parse_path(value: Option<String>) -> Option<PathBuf> {
    value
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from `lookup`; values that are missing or do not
    /// parse keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);

        let asset_dir = parse_path(lookup("LESSON_ASSET_DIR")).unwrap_or(defaults.asset_dir);

        let missing_image_policy = parse_value::<MissingImagePolicy>(lookup("MISSING_IMAGE_POLICY"))
            .unwrap_or(defaults.missing_image_policy);

        let blur_sigma = parse_value::<f32>(lookup("VISUAL_BLUR_SIGMA"))
            .filter(|sigma| sigma.is_finite() && *sigma > 0.0)
            .unwrap_or(defaults.blur_sigma);

        let interactive = lookup("DISPLAY_INTERACTIVE")
            .and_then(|value| parse_flag(&value))
            .unwrap_or(defaults.interactive);

        Self {
            log_level,
            asset_dir,
            catalog_path: parse_path(lookup("LESSON_CATALOG")),
            missing_image_policy,
            blur_sigma,
            interactive,
            preview_dir: parse_path(lookup("DISPLAY_PREVIEW_DIR")),
        }
    }

    pub fn adaptation_settings(&self) -> AdaptationSettings {
        AdaptationSettings {
            blur_sigma: self.blur_sigma,
        }
    }
}
