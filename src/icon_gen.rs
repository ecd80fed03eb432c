use anyhow::{Context, Result};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgba, RgbaImage,
};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

/// Fill color of the circle (solid black).
pub const CIRCLE_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Background color of the canvas (fully transparent).
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Icon sizes and filenames of the extension's icon set, in generation order.
pub const DEFAULT_ICONS: [(u32, &str); 3] = [
    (16, "icon-16.png"),
    (48, "icon-48.png"),
    (128, "icon-128.png"),
];

/// A single icon to generate: a square canvas of `size` pixels written to `output_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSpec {
    pub size: u32,
    pub output_path: PathBuf,
}

impl IconSpec {
    pub fn new(size: u32, output_path: impl Into<PathBuf>) -> Self {
        Self {
            size,
            output_path: output_path.into(),
        }
    }
}

/// Build the default icon set.
///
/// With no output directory the literal filenames are used, so the icons land in
/// the current working directory and are reported as `icon-16.png` etc.
pub fn default_specs(out_dir: Option<&Path>) -> Vec<IconSpec> {
    DEFAULT_ICONS
        .iter()
        .map(|&(size, filename)| match out_dir {
            Some(dir) => IconSpec::new(size, dir.join(filename)),
            None => IconSpec::new(size, filename),
        })
        .collect()
}

/// Geometry of the centered circle for a given canvas size.
///
/// The bounding box runs from `offset` to `offset + diameter` inclusive on both
/// axes, so the filled disc is `diameter + 1` pixels across.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub diameter: u32,
    pub offset: u32,
}

impl Circle {
    /// Circle with a diameter of two thirds of `size`, truncated.
    pub fn for_canvas(size: u32) -> Self {
        let diameter = (u64::from(size) * 2 / 3) as u32;
        let offset = (size - diameter) / 2;
        Self { diameter, offset }
    }

    /// Number of pixels covered along each axis of the bounding box.
    pub fn extent(&self) -> u32 {
        self.diameter + 1
    }

    /// One past the last pixel of the bounding box.
    pub fn end(&self) -> u32 {
        self.offset + self.extent()
    }

    /// Center of the circle in continuous pixel coordinates.
    pub fn center(&self) -> f32 {
        self.offset as f32 + self.extent() as f32 / 2.0
    }

    pub fn radius(&self) -> f32 {
        self.extent() as f32 / 2.0
    }

    /// Whether the pixel at `(x, y)` is covered, sampled at the pixel center.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        let center = self.center();
        let radius = self.radius();
        let dx = x as f32 + 0.5 - center;
        let dy = y as f32 + 0.5 - center;
        dx * dx + dy * dy <= radius * radius
    }
}

/// Render an icon of the given size in memory.
pub fn render(size: u32) -> RgbaImage {
    render_circle(size, &Circle::for_canvas(size))
}

fn render_circle(size: u32, circle: &Circle) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(size, size, BACKGROUND);
    draw_filled_circle(&mut canvas, circle, CIRCLE_COLOR);
    canvas
}

/// Fill `circle` on the canvas with a solid color. No edge blending.
fn draw_filled_circle(canvas: &mut RgbaImage, circle: &Circle, color: Rgba<u8>) {
    for y in circle.offset..circle.end() {
        for x in circle.offset..circle.end() {
            if circle.contains(x, y) {
                canvas.put_pixel(x, y, color);
            }
        }
    }
}

/// Generate one icon and write it to `spec.output_path`, overwriting any existing file.
///
/// The parent directory must already exist.
pub fn generate(spec: &IconSpec) -> Result<Circle> {
    anyhow::ensure!(
        spec.size > 0,
        "Icon size must be positive: {}",
        spec.output_path.display()
    );

    let circle = Circle::for_canvas(spec.size);
    let canvas = render_circle(spec.size, &circle);

    let file = File::create(&spec.output_path)
        .with_context(|| format!("Failed to create {}", spec.output_path.display()))?;
    let mut out_file = BufWriter::new(file);
    write_png(canvas.as_raw(), &mut out_file, spec.size)
        .with_context(|| format!("Failed to write PNG {}", spec.output_path.display()))?;
    out_file
        .flush()
        .with_context(|| format!("Failed to write {}", spec.output_path.display()))?;

    println!(
        "Created {} ({size}x{size}, circle diameter: {}px)",
        spec.output_path.display(),
        circle.diameter,
        size = spec.size,
    );
    Ok(circle)
}

/// Generate every icon in order, stopping at the first failure.
pub fn run(specs: &[IconSpec]) -> Result<()> {
    for spec in specs {
        generate(spec)?;
    }

    println!("✓ All icons generated successfully");
    Ok(())
}

// Fixed encoder settings keep repeated runs byte-identical
fn write_png<W: Write>(image_data: &[u8], w: W, size: u32) -> Result<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(image_data, size, size, ColorType::Rgba8)?;
    Ok(())
}
