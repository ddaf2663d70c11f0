use std::fmt;
use std::path::PathBuf;

use image::RgbImage;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(pub u32);

impl From<u32> for LessonId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where a lesson's visual payload comes from.
///
/// Catalog files only carry `Path`; `Inline` is for buffers built in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VisualSource {
    Path(PathBuf),
    #[serde(skip)]
    Inline(RgbImage),
}

impl From<PathBuf> for VisualSource {
    fn from(path: PathBuf) -> Self {
        VisualSource::Path(path)
    }
}

impl From<RgbImage> for VisualSource {
    fn from(image: RgbImage) -> Self {
        VisualSource::Inline(image)
    }
}

/// A single lesson with its visual, text and audio payloads.
///
/// The id and textual fields are fixed at construction; only the visual
/// payload can be changed afterwards, by a learning style adaptation.
#[derive(Debug, Clone)]
pub struct LessonContent {
    id: LessonId,
    topic: String,
    visual: RgbImage,
    text: String,
    audio: String,
}

impl LessonContent {
    pub fn new(
        id: LessonId,
        topic: impl Into<String>,
        visual: RgbImage,
        text: impl Into<String>,
        audio: impl Into<String>,
    ) -> Self {
        Self {
            id,
            topic: topic.into(),
            visual,
            text: text.into(),
            audio: audio.into(),
        }
    }

    pub fn id(&self) -> LessonId {
        self.id
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn audio(&self) -> &str {
        &self.audio
    }

    pub fn visual(&self) -> &RgbImage {
        &self.visual
    }

    pub fn visual_mut(&mut self) -> &mut RgbImage {
        &mut self.visual
    }

    /// False when the visual payload is an empty (0x0) buffer.
    pub fn has_visual(&self) -> bool {
        self.visual.width() > 0 && self.visual.height() > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let lesson = LessonContent::new(
            LessonId(7),
            "Geometry",
            RgbImage::new(4, 3),
            "Shapes and angles",
            "Audio explanation of geometry",
        );
        assert_eq!(lesson.id(), LessonId(7));
        assert_eq!(lesson.topic(), "Geometry");
        assert_eq!(lesson.text(), "Shapes and angles");
        assert_eq!(lesson.audio(), "Audio explanation of geometry");
        assert_eq!(lesson.visual().dimensions(), (4, 3));
        assert!(lesson.has_visual());
    }

    #[test]
    fn test_empty_visual() {
        let lesson = LessonContent::new(LessonId(1), "Empty", RgbImage::new(0, 0), "", "");
        assert!(!lesson.has_visual());
    }

    #[test]
    fn test_visual_mut_writes_through() {
        let mut lesson = LessonContent::new(LessonId(1), "Pixels", RgbImage::new(2, 2), "", "");
        lesson.visual_mut().put_pixel(1, 1, image::Rgb([255, 0, 0]));
        assert_eq!(lesson.visual().get_pixel(1, 1).0, [255, 0, 0]);
    }

    #[test]
    fn test_lesson_id_serde_is_transparent() {
        let json = serde_json::to_string(&LessonId(42)).unwrap();
        assert_eq!(json, "42");
        assert_eq!(LessonId(42).to_string(), "42");
    }

    #[test]
    fn test_visual_source_from_json_is_path() {
        let source: VisualSource = serde_json::from_str("\"diagram.png\"").unwrap();
        assert_eq!(source, VisualSource::Path(PathBuf::from("diagram.png")));
    }
}
