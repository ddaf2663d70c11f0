use std::path::PathBuf;

use thiserror::Error;

use crate::lesson::LessonId;

/// Errors raised by platform operations.
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("lesson not found: {0}")]
    LessonNotFound(LessonId),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("invalid lesson")]
    InvalidLesson,

    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(LessonId),

    #[error("duplicate user name: {0}")]
    DuplicateUser(String),

    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to save preview {path}: {source}")]
    ImageSave {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type PlatformResult<T> = Result<T, PlatformError>;
