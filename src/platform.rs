use std::fmt;

use crate::display::DisplaySurface;
use crate::error::{PlatformError, PlatformResult};
use crate::lesson::{LessonContent, LessonId};
use crate::style::AdaptationSettings;
use crate::user::User;

pub const VISUAL_WINDOW: &str = "Visual Content";

/// Handle to a user owned by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(usize);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns every user and lesson; callers refer to them by `UserId` / `LessonId`.
///
/// Lesson ids and user names are unique within a platform. Completions are
/// only accepted for lessons the platform owns, but a lesson can be
/// completed more than once and every completion is kept.
#[derive(Debug, Default)]
pub struct AdaptiveLearningPlatform {
    users: Vec<User>,
    lessons: Vec<LessonContent>,
    settings: AdaptationSettings,
}

impl AdaptiveLearningPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: AdaptationSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn add_user(&mut self, user: User) -> PlatformResult<UserId> {
        if self.users.iter().any(|existing| existing == &user) {
            return Err(PlatformError::DuplicateUser(user.name().to_string()));
        }
        let id = UserId(self.users.len());
        tracing::debug!(user = user.name(), style = %user.learning_style(), "user added");
        self.users.push(user);
        Ok(id)
    }

    pub fn add_lesson(&mut self, lesson: LessonContent) -> PlatformResult<LessonId> {
        let id = lesson.id();
        if self.lessons.iter().any(|existing| existing.id() == id) {
            return Err(PlatformError::DuplicateLesson(id));
        }
        tracing::debug!(lesson_id = %id, topic = lesson.topic(), "lesson added");
        self.lessons.push(lesson);
        Ok(id)
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn lessons(&self) -> &[LessonContent] {
        &self.lessons
    }

    pub fn user(&self, id: UserId) -> PlatformResult<&User> {
        self.users
            .get(id.0)
            .ok_or_else(|| PlatformError::UserNotFound(id.to_string()))
    }

    fn user_mut(&mut self, id: UserId) -> PlatformResult<&mut User> {
        self.users
            .get_mut(id.0)
            .ok_or_else(|| PlatformError::UserNotFound(id.to_string()))
    }

    /// Handles of all users, in the order they were added.
    pub fn user_ids(&self) -> impl Iterator<Item = UserId> + '_ {
        (0..self.users.len()).map(UserId)
    }

    pub fn user_by_name(&self, name: &str) -> Option<UserId> {
        self.users
            .iter()
            .position(|user| user.name() == name)
            .map(UserId)
    }

    pub fn lesson(&self, id: LessonId) -> PlatformResult<&LessonContent> {
        self.lessons
            .iter()
            .find(|lesson| lesson.id() == id)
            .ok_or(PlatformError::LessonNotFound(id))
    }

    fn lesson_mut(&mut self, id: LessonId) -> PlatformResult<&mut LessonContent> {
        self.lessons
            .iter_mut()
            .find(|lesson| lesson.id() == id)
            .ok_or(PlatformError::LessonNotFound(id))
    }

    /// Runs the user's learning style over the lesson's content.
    pub fn adapt_content(&mut self, user: UserId, lesson_id: LessonId) -> PlatformResult<()> {
        let style = self.user(user)?.learning_style();
        let settings = self.settings;
        let lesson = self.lesson_mut(lesson_id)?;
        style.adapt_content(lesson, &settings);
        tracing::info!(user = %user, lesson_id = %lesson_id, style = %style, "content adapted");
        Ok(())
    }

    /// Presents a lesson to a user.
    ///
    /// `None` is rejected with `InvalidLesson` before anything is written.
    /// The visual payload is shown in its own window and the call blocks on
    /// the surface's acknowledgment before the text and audio are written.
    pub fn display_lesson(
        &self,
        user: UserId,
        lesson: Option<LessonId>,
        surface: &mut dyn DisplaySurface,
    ) -> PlatformResult<()> {
        let lesson_id = lesson.ok_or(PlatformError::InvalidLesson)?;
        let user = self.user(user)?;
        let lesson = self.lesson(lesson_id)?;

        surface.write_line(&format!("Displaying lesson for {}", user.name()))?;
        surface.write_line(&format!("Topic: {}", lesson.topic()))?;

        if lesson.has_visual() {
            surface.show_image(VISUAL_WINDOW, lesson.visual())?;
            surface.wait_for_key()?;
        } else {
            tracing::warn!(lesson_id = %lesson_id, "lesson has no visual content, skipping window");
        }

        surface.write_line(&format!("Text Content: {}", lesson.text()))?;
        surface.write_line(&format!("Audio Content: {}", lesson.audio()))?;
        Ok(())
    }

    /// Records a completion. User and lesson must exist; repeats are appended.
    pub fn track_progress(&mut self, user: UserId, lesson_id: LessonId) -> PlatformResult<()> {
        self.user(user)?;
        self.lesson(lesson_id)?;
        let user = self.user_mut(user)?;
        if user.has_completed(lesson_id) {
            tracing::debug!(user = user.name(), lesson_id = %lesson_id, "lesson completed again");
        }
        user.complete_lesson(lesson_id);
        tracing::info!(user = user.name(), lesson_id = %lesson_id, "progress tracked");
        Ok(())
    }

    /// Lessons the user has not completed, in the order they were added.
    pub fn recommend_lessons(&self, user: UserId) -> PlatformResult<Vec<&LessonContent>> {
        let user = self.user(user)?;
        Ok(self
            .lessons
            .iter()
            .filter(|lesson| !user.has_completed(lesson.id()))
            .collect())
    }
}
