use std::io::{BufRead, Write};
use std::path::PathBuf;

use image::RgbImage;

use crate::error::{PlatformError, PlatformResult};
use crate::lesson::LessonContent;
use crate::user::User;

/// Output surface for lessons: an image window plus a text stream.
pub trait DisplaySurface {
    fn show_image(&mut self, window: &str, image: &RgbImage) -> PlatformResult<()>;

    /// Blocks until the viewer acknowledges the shown content.
    fn wait_for_key(&mut self) -> PlatformResult<()>;

    fn write_line(&mut self, line: &str) -> PlatformResult<()>;

    /// Diagnostics go to a separate stream from lesson text.
    fn write_error(&mut self, line: &str) -> PlatformResult<()>;
}

/// Terminal-backed surface.
///
/// Images are reported by size and, when `preview_dir` is set, written out
/// as `<window>.png` so they can be opened in an external viewer. In
/// interactive mode `wait_for_key` consumes one line of input. Error lines
/// go to stderr unless another writer is supplied.
pub struct TerminalDisplay<R, W, E = std::io::Stderr> {
    input: R,
    output: W,
    errors: E,
    interactive: bool,
    preview_dir: Option<PathBuf>,
}

impl<R: BufRead, W: Write> TerminalDisplay<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            errors: std::io::stderr(),
            interactive: true,
            preview_dir: None,
        }
    }
}

impl<R: BufRead, W: Write, E: Write> TerminalDisplay<R, W, E> {
    pub fn with_error_writer<E2: Write>(self, errors: E2) -> TerminalDisplay<R, W, E2> {
        TerminalDisplay {
            input: self.input,
            output: self.output,
            errors,
            interactive: self.interactive,
            preview_dir: self.preview_dir,
        }
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn with_preview_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.preview_dir = dir;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn into_parts(self) -> (W, E) {
        (self.output, self.errors)
    }
}

fn window_slug(window: &str) -> String {
    let slug: String = window
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    if slug.is_empty() {
        "window".to_string()
    } else {
        slug
    }
}

impl<R: BufRead, W: Write, E: Write> DisplaySurface for TerminalDisplay<R, W, E> {
    fn show_image(&mut self, window: &str, image: &RgbImage) -> PlatformResult<()> {
        writeln!(
            self.output,
            "[{window}] {}x{} image",
            image.width(),
            image.height()
        )?;

        if let Some(ref dir) = self.preview_dir {
            std::fs::create_dir_all(dir)?;
            let path = dir.join(format!("{}.png", window_slug(window)));
            image
                .save(&path)
                .map_err(|source| PlatformError::ImageSave {
                    path: path.clone(),
                    source,
                })?;
            tracing::info!(path = %path.display(), "preview written");
            writeln!(self.output, "[{window}] preview saved to {}", path.display())?;
        }
        Ok(())
    }

    fn wait_for_key(&mut self) -> PlatformResult<()> {
        if !self.interactive {
            return Ok(());
        }
        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> PlatformResult<()> {
        writeln!(self.output, "{line}")?;
        Ok(())
    }

    fn write_error(&mut self, line: &str) -> PlatformResult<()> {
        writeln!(self.errors, "{line}")?;
        Ok(())
    }
}

pub fn display_user_info(surface: &mut dyn DisplaySurface, user: &User) -> PlatformResult<()> {
    surface.write_line(&format!("User: {}", user.name()))
}

pub fn display_user_info_with_recommendations(
    surface: &mut dyn DisplaySurface,
    user: &User,
    recommendations: &[&LessonContent],
) -> PlatformResult<()> {
    display_user_info(surface, user)?;
    surface.write_line("Recommended lessons:")?;
    for lesson in recommendations {
        surface.write_line(&format!("- {}", lesson.topic()))?;
    }
    Ok(())
}
