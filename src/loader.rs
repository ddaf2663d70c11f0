use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::RgbImage;
use serde::{Deserialize, Serialize};

use crate::error::{PlatformError, PlatformResult};
use crate::lesson::{LessonId, VisualSource};
use crate::style::{LearningStyle, LearningStyleScores};

/// What to do when a lesson image cannot be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingImagePolicy {
    /// Log a warning and continue with an empty buffer.
    #[default]
    Warn,
    Fail,
}

impl FromStr for MissingImagePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warn" => Ok(MissingImagePolicy::Warn),
            "fail" => Ok(MissingImagePolicy::Fail),
            other => Err(format!("unknown missing image policy: {other}")),
        }
    }
}

pub fn load_visual(path: &Path, policy: MissingImagePolicy) -> PlatformResult<RgbImage> {
    match image::open(path) {
        Ok(decoded) => {
            let visual = decoded.to_rgb8();
            tracing::debug!(
                path = %path.display(),
                width = visual.width(),
                height = visual.height(),
                "image loaded"
            );
            Ok(visual)
        }
        Err(source) => match policy {
            MissingImagePolicy::Warn => {
                tracing::warn!(path = %path.display(), error = %source, "image unavailable, using empty visual");
                Ok(RgbImage::new(0, 0))
            }
            MissingImagePolicy::Fail => Err(PlatformError::ImageLoad {
                path: path.to_path_buf(),
                source,
            }),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleChoice {
    Named { style: LearningStyle },
    Scored { scores: LearningStyleScores },
}

impl StyleChoice {
    pub fn resolve(&self) -> LearningStyle {
        match self {
            StyleChoice::Named { style } => *style,
            StyleChoice::Scored { scores } => {
                let mut scores = *scores;
                scores.normalize();
                scores.dominant_style()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogUser {
    pub name: String,
    #[serde(flatten)]
    pub style: StyleChoice,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogLesson {
    pub id: LessonId,
    pub topic: String,
    /// Relative paths resolve against the asset directory.
    pub image: VisualSource,
    pub text: String,
    pub audio: String,
}

/// Users and lessons to seed a platform with.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LessonCatalog {
    #[serde(default)]
    pub users: Vec<CatalogUser>,
    #[serde(default)]
    pub lessons: Vec<CatalogLesson>,
}

impl LessonCatalog {
    pub fn from_json(json: &str) -> PlatformResult<Self> {
        serde_json::from_str(json).map_err(|e| PlatformError::Catalog(e.to_string()))
    }

    pub fn from_file(path: &Path) -> PlatformResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            users = catalog.users.len(),
            lessons = catalog.lessons.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

/// Produces the pixel buffer for a lesson, decoding from disk for `Path`.
pub fn resolve_visual(
    source: &VisualSource,
    asset_dir: &Path,
    policy: MissingImagePolicy,
) -> PlatformResult<RgbImage> {
    match source {
        VisualSource::Path(image) => load_visual(&resolve_asset(asset_dir, image), policy),
        VisualSource::Inline(visual) => Ok(visual.clone()),
    }
}

pub fn resolve_asset(asset_dir: &Path, image: &Path) -> PathBuf {
    if image.is_absolute() {
        image.to_path_buf()
    } else {
        asset_dir.join(image)
    }
}
