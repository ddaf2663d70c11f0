#![allow(dead_code)]

use std::path::Path;

use adaptive_learning::config::Config;
use adaptive_learning::display::DisplaySurface;
use adaptive_learning::PlatformResult;
use image::{Rgb, RgbImage};

#[derive(Default)]
pub struct RecordingSurface {
    pub lines: Vec<String>,
    pub images: Vec<(String, RgbImage)>,
    pub errors: Vec<String>,
    pub acks: usize,
}

impl DisplaySurface for RecordingSurface {
    fn show_image(&mut self, window: &str, image: &RgbImage) -> PlatformResult<()> {
        self.images.push((window.to_string(), image.clone()));
        Ok(())
    }

    fn wait_for_key(&mut self) -> PlatformResult<()> {
        self.acks += 1;
        Ok(())
    }

    fn write_line(&mut self, line: &str) -> PlatformResult<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn write_error(&mut self, line: &str) -> PlatformResult<()> {
        self.errors.push(line.to_string());
        Ok(())
    }
}

pub fn test_config(asset_dir: &Path) -> Config {
    Config {
        asset_dir: asset_dir.to_path_buf(),
        interactive: false,
        ..Config::default()
    }
}

/// A black image with one bright pixel in the middle.
pub fn point_image(size: u32) -> RgbImage {
    let mut image = RgbImage::new(size, size);
    image.put_pixel(size / 2, size / 2, Rgb([255, 255, 255]));
    image
}

pub fn write_demo_assets(dir: &Path) {
    point_image(15).save(dir.join("fraction_diagram.jpg")).unwrap();
    point_image(15).save(dir.join("algebra_equations.jpg")).unwrap();
}
