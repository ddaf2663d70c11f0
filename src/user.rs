use crate::lesson::LessonId;
use crate::style::LearningStyle;

/// A learner with a fixed learning style and a completion history.
#[derive(Debug, Clone)]
pub struct User {
    name: String,
    learning_style: LearningStyle,
    completed_lessons: Vec<LessonId>,
}

impl User {
    pub fn new(name: impl Into<String>, learning_style: LearningStyle) -> Self {
        Self {
            name: name.into(),
            learning_style,
            completed_lessons: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn learning_style(&self) -> LearningStyle {
        self.learning_style
    }

    /// Appends unconditionally, repeats included.
    pub fn complete_lesson(&mut self, lesson_id: LessonId) {
        self.completed_lessons.push(lesson_id);
    }

    /// Completed lesson ids in completion order.
    pub fn completed_lessons(&self) -> &[LessonId] {
        &self.completed_lessons
    }

    pub fn has_completed(&self, lesson_id: LessonId) -> bool {
        self.completed_lessons.contains(&lesson_id)
    }
}

// Users are identified by name alone.
impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for User {}
