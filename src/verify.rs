//! Checks a generated icon against the expected circle geometry.

use crate::icon_gen::{Circle, BACKGROUND, CIRCLE_COLOR};
use anyhow::{Context, Result};
use std::{fmt, path::Path};

/// Outcome of checking one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconReport {
    pub size: u32,
    pub circle: Circle,
    /// Pixels that are neither the fill color inside the circle nor transparent outside it.
    pub mismatched_pixels: u64,
}

impl IconReport {
    pub fn is_valid(&self) -> bool {
        self.mismatched_pixels == 0
    }
}

impl fmt::Display for IconReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{size}x{size}, circle diameter: {}px, offset: {}px, mismatched pixels: {}",
            self.circle.diameter,
            self.circle.offset,
            self.mismatched_pixels,
            size = self.size,
        )
    }
}

/// Decode the PNG at `path` and compare every pixel with the circle for its size.
pub fn verify_icon(path: &Path) -> Result<IconReport> {
    let img = image::open(path).with_context(|| format!("Failed to load {}", path.display()))?;

    if img.width() != img.height() {
        anyhow::bail!(
            "Icon must be square, got {}x{}: {}",
            img.width(),
            img.height(),
            path.display()
        );
    }

    let size = img.width();
    let circle = Circle::for_canvas(size);
    let rgba_img = img.to_rgba8();

    let mismatched_pixels = rgba_img
        .enumerate_pixels()
        .filter(|&(x, y, pixel)| {
            let expected = if circle.contains(x, y) {
                CIRCLE_COLOR
            } else {
                BACKGROUND
            };
            // Transparent pixels may carry any color
            if expected[3] == 0 {
                pixel[3] != 0
            } else {
                *pixel != expected
            }
        })
        .count() as u64;

    Ok(IconReport {
        size,
        circle,
        mismatched_pixels,
    })
}
