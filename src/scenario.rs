use crate::config::Config;
use crate::display::{display_user_info_with_recommendations, DisplaySurface};
use crate::error::{PlatformError, PlatformResult};
use crate::lesson::LessonId;
use crate::loader::LessonCatalog;
use crate::platform::{AdaptiveLearningPlatform, UserId};
use crate::seed::{demo_catalog, seed_platform};

/// What the demonstration run observed.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoOutcome {
    pub current_user: String,
    pub users_equal: bool,
    pub handled_error: Option<String>,
    pub recommendations: Vec<LessonId>,
}

pub fn load_catalog(config: &Config) -> PlatformResult<LessonCatalog> {
    match config.catalog_path {
        Some(ref path) => LessonCatalog::from_file(path),
        None => Ok(demo_catalog()),
    }
}

/// Seeds a platform and walks the first user through the first lesson:
/// adapt, display, record progress, compare with the second user and
/// print recommendations. The display of an absent lesson is expected to
/// fail and is reported without ending the run.
pub fn run_demo(config: &Config, surface: &mut dyn DisplaySurface) -> PlatformResult<DemoOutcome> {
    let catalog = load_catalog(config)?;
    let mut platform = AdaptiveLearningPlatform::with_settings(config.adaptation_settings());
    seed_platform(&mut platform, &catalog, config)?;

    let mut user_ids = platform.user_ids();
    let (Some(current_user), Some(another_user)) = (user_ids.next(), user_ids.next()) else {
        return Err(PlatformError::Catalog(
            "demonstration needs at least two users".to_string(),
        ));
    };
    drop(user_ids);
    let current_lesson = platform
        .lessons()
        .first()
        .map(|lesson| lesson.id())
        .ok_or_else(|| PlatformError::Catalog("demonstration needs a lesson".to_string()))?;

    platform.adapt_content(current_user, current_lesson)?;
    platform.display_lesson(current_user, Some(current_lesson), surface)?;
    platform.track_progress(current_user, current_lesson)?;

    let handled_error = match platform.display_lesson(current_user, None, surface) {
        Ok(()) => None,
        Err(err) => {
            tracing::error!(error = %err, "lesson display failed");
            surface.write_error(&format!("Error: {err}"))?;
            Some(err.to_string())
        }
    };

    let users_equal = platform.user(current_user)? == platform.user(another_user)?;
    surface.write_line(if users_equal {
        "Users are the same."
    } else {
        "Users are different."
    })?;

    let recommendations = recommend_and_show(&platform, current_user, surface)?;

    Ok(DemoOutcome {
        current_user: platform.user(current_user)?.name().to_string(),
        users_equal,
        handled_error,
        recommendations,
    })
}

fn recommend_and_show(
    platform: &AdaptiveLearningPlatform,
    user: UserId,
    surface: &mut dyn DisplaySurface,
) -> PlatformResult<Vec<LessonId>> {
    let recommendations = platform.recommend_lessons(user)?;
    display_user_info_with_recommendations(surface, platform.user(user)?, &recommendations)?;
    Ok(recommendations.iter().map(|lesson| lesson.id()).collect())
}
