use std::fmt;
use std::str::FromStr;

use image::imageops;
use serde::{Deserialize, Serialize};

use crate::lesson::LessonContent;

/// Sigma OpenCV derives for a 5x5 Gaussian kernel: 0.3 * ((5 - 1) * 0.5 - 1) + 0.8.
pub const DEFAULT_BLUR_SIGMA: f32 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningStyle {
    Visual,
    Auditory,
    Kinesthetic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptationSettings {
    pub blur_sigma: f32,
}

impl Default for AdaptationSettings {
    fn default() -> Self {
        Self {
            blur_sigma: DEFAULT_BLUR_SIGMA,
        }
    }
}

impl LearningStyle {
    pub const ALL: [LearningStyle; 3] = [
        LearningStyle::Visual,
        LearningStyle::Auditory,
        LearningStyle::Kinesthetic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LearningStyle::Visual => "visual",
            LearningStyle::Auditory => "auditory",
            LearningStyle::Kinesthetic => "kinesthetic",
        }
    }

    /// Applies this style's transformation to the lesson in place.
    pub fn adapt_content(&self, lesson: &mut LessonContent, settings: &AdaptationSettings) {
        match self {
            LearningStyle::Visual => {
                if !lesson.has_visual() {
                    tracing::warn!(lesson_id = %lesson.id(), "no visual payload to adapt");
                    return;
                }
                let blurred = imageops::blur(lesson.visual(), settings.blur_sigma);
                *lesson.visual_mut() = blurred;
                tracing::debug!(
                    lesson_id = %lesson.id(),
                    sigma = settings.blur_sigma,
                    "visual content smoothed"
                );
            }
            // Audio enhancement and interactive content are not implemented yet.
            LearningStyle::Auditory | LearningStyle::Kinesthetic => {
                tracing::debug!(
                    lesson_id = %lesson.id(),
                    style = self.as_str(),
                    "no adaptation available for style"
                );
            }
        }
    }
}

impl fmt::Display for LearningStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visual" => Ok(LearningStyle::Visual),
            "auditory" => Ok(LearningStyle::Auditory),
            "kinesthetic" => Ok(LearningStyle::Kinesthetic),
            other => Err(format!("unknown learning style: {other}")),
        }
    }
}

/// Per-modality preference weights, used when a catalog describes a learner
/// by scores rather than by a fixed style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LearningStyleScores {
    pub visual: f64,
    pub auditory: f64,
    pub kinesthetic: f64,
}

impl Default for LearningStyleScores {
    fn default() -> Self {
        Self {
            visual: 1.0 / 3.0,
            auditory: 1.0 / 3.0,
            kinesthetic: 1.0 / 3.0,
        }
    }
}

impl LearningStyleScores {
    pub fn normalize(&mut self) {
        let total = self.visual + self.auditory + self.kinesthetic;
        if total > 0.0 {
            self.visual /= total;
            self.auditory /= total;
            self.kinesthetic /= total;
        }
    }

    /// Highest-scoring style; ties go to the earlier of visual, auditory, kinesthetic.
    pub fn dominant_style(&self) -> LearningStyle {
        let max_score = self.visual.max(self.auditory).max(self.kinesthetic);
        if (self.visual - max_score).abs() < f64::EPSILON {
            LearningStyle::Visual
        } else if (self.auditory - max_score).abs() < f64::EPSILON {
            LearningStyle::Auditory
        } else {
            LearningStyle::Kinesthetic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::LessonId;
    use image::{Rgb, RgbImage};

    fn point_lesson() -> LessonContent {
        let mut visual = RgbImage::new(11, 11);
        visual.put_pixel(5, 5, Rgb([255, 255, 255]));
        LessonContent::new(LessonId(1), "Point", visual, "text", "audio")
    }

    #[test]
    fn test_visual_blur_spreads_energy() {
        let mut lesson = point_lesson();
        LearningStyle::Visual.adapt_content(&mut lesson, &AdaptationSettings::default());
        let center = lesson.visual().get_pixel(5, 5).0[0];
        let neighbour = lesson.visual().get_pixel(6, 5).0[0];
        assert!(center < 255);
        assert!(neighbour > 0);
    }

    #[test]
    fn test_visual_is_not_idempotent() {
        let settings = AdaptationSettings::default();
        let mut once = point_lesson();
        LearningStyle::Visual.adapt_content(&mut once, &settings);
        let mut twice = once.clone();
        LearningStyle::Visual.adapt_content(&mut twice, &settings);

        assert_ne!(once.visual(), twice.visual());
        assert!(twice.visual().get_pixel(5, 5).0[0] < once.visual().get_pixel(5, 5).0[0]);
    }

    #[test]
    fn test_visual_skips_empty_payload() {
        let mut lesson = LessonContent::new(LessonId(1), "Empty", RgbImage::new(0, 0), "", "");
        LearningStyle::Visual.adapt_content(&mut lesson, &AdaptationSettings::default());
        assert!(!lesson.has_visual());
    }

    #[test]
    fn test_auditory_and_kinesthetic_leave_lesson_unchanged() {
        for style in [LearningStyle::Auditory, LearningStyle::Kinesthetic] {
            let original = point_lesson();
            let mut lesson = original.clone();
            style.adapt_content(&mut lesson, &AdaptationSettings::default());
            assert_eq!(lesson.visual(), original.visual());
            assert_eq!(lesson.text(), original.text());
            assert_eq!(lesson.audio(), original.audio());
        }
    }

    #[test]
    fn test_parse_and_display() {
        for style in LearningStyle::ALL {
            assert_eq!(style.to_string().parse::<LearningStyle>().unwrap(), style);
        }
        assert_eq!(" Visual ".parse::<LearningStyle>().unwrap(), LearningStyle::Visual);
        assert!("reading".parse::<LearningStyle>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LearningStyle::Kinesthetic).unwrap();
        assert_eq!(json, "\"kinesthetic\"");
        let parsed: LearningStyle = serde_json::from_str("\"auditory\"").unwrap();
        assert_eq!(parsed, LearningStyle::Auditory);
    }

    #[test]
    fn test_dominant_style() {
        let mut scores = LearningStyleScores {
            visual: 1.0,
            auditory: 6.0,
            kinesthetic: 3.0,
        };
        scores.normalize();
        assert!((scores.auditory - 0.6).abs() < 1e-9);
        assert_eq!(scores.dominant_style(), LearningStyle::Auditory);
    }

    #[test]
    fn test_dominant_style_tie_prefers_visual() {
        assert_eq!(LearningStyleScores::default().dominant_style(), LearningStyle::Visual);
    }
}
