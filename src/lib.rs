pub mod config;
pub mod display;
pub mod error;
pub mod lesson;
pub mod loader;
pub mod logging;
pub mod platform;
pub mod scenario;
pub mod seed;
pub mod style;
pub mod user;

pub use error::{PlatformError, PlatformResult};
pub use lesson::{LessonContent, LessonId, VisualSource};
pub use platform::{AdaptiveLearningPlatform, UserId};
pub use style::LearningStyle;
pub use user::User;
