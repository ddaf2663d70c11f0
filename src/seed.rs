use std::path::PathBuf;

use crate::config::Config;
use crate::error::PlatformResult;
use crate::lesson::{LessonContent, LessonId, VisualSource};
use crate::loader::{resolve_visual, CatalogLesson, CatalogUser, LessonCatalog, StyleChoice};
use crate::platform::AdaptiveLearningPlatform;
use crate::style::LearningStyle;
use crate::user::User;

struct DemoUser {
    name: &'static str,
    style: LearningStyle,
}

const DEMO_USERS: &[DemoUser] = &[
    DemoUser {
        name: "Alice",
        style: LearningStyle::Visual,
    },
    DemoUser {
        name: "Bob",
        style: LearningStyle::Auditory,
    },
    DemoUser {
        name: "Charlie",
        style: LearningStyle::Kinesthetic,
    },
];

struct DemoLesson {
    id: u32,
    topic: &'static str,
    image: &'static str,
    text: &'static str,
    audio: &'static str,
}

const DEMO_LESSONS: &[DemoLesson] = &[
    DemoLesson {
        id: 1,
        topic: "Introduction to Fractions",
        image: "fraction_diagram.jpg",
        text: "Fractions represent parts of a whole...",
        audio: "Audio explanation of fractions",
    },
    DemoLesson {
        id: 2,
        topic: "Basic Algebra",
        image: "algebra_equations.jpg",
        text: "Algebra is the study of mathematical symbols...",
        audio: "Audio explanation of algebra",
    },
];

/// The built-in demonstration catalog.
pub fn demo_catalog() -> LessonCatalog {
    LessonCatalog {
        users: DEMO_USERS
            .iter()
            .map(|user| CatalogUser {
                name: user.name.to_string(),
                style: StyleChoice::Named { style: user.style },
            })
            .collect(),
        lessons: DEMO_LESSONS
            .iter()
            .map(|lesson| CatalogLesson {
                id: LessonId(lesson.id),
                topic: lesson.topic.to_string(),
                image: VisualSource::Path(PathBuf::from(lesson.image)),
                text: lesson.text.to_string(),
                audio: lesson.audio.to_string(),
            })
            .collect(),
    }
}

/// Adds every catalog user and lesson to the platform, loading lesson
/// images from the configured asset directory.
pub fn seed_platform(
    platform: &mut AdaptiveLearningPlatform,
    catalog: &LessonCatalog,
    config: &Config,
) -> PlatformResult<()> {
    for entry in &catalog.users {
        let style = entry.style.resolve();
        platform.add_user(User::new(entry.name.clone(), style))?;
        tracing::info!(user = %entry.name, style = %style, "seeded user");
    }

    for entry in &catalog.lessons {
        let visual = resolve_visual(&entry.image, &config.asset_dir, config.missing_image_policy)?;
        platform.add_lesson(LessonContent::new(
            entry.id,
            entry.topic.clone(),
            visual,
            entry.text.clone(),
            entry.audio.clone(),
        ))?;
        tracing::info!(lesson_id = %entry.id, topic = %entry.topic, "seeded lesson");
    }

    Ok(())
}
