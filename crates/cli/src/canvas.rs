//! Image output: paint a pixel set onto an RGBA buffer and save it as PNG.

use anyhow::{bail, Context, Result};
use image::{Rgba, RgbaImage};
use scanfill::PixelSet;
use std::path::Path;

use crate::provenance::ensure_parent;

/// Buffer geometry and colours.
#[derive(Clone, Copy, Debug)]
pub struct CanvasCfg {
    pub width: u32,
    pub height: u32,
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
    /// Buffer position of pixel `(0, 0)`.
    pub origin: (i64, i64),
    /// Put larger y higher in the image (mathematical orientation).
    pub flip_y: bool,
}

impl Default for CanvasCfg {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            background: Rgba([255, 255, 255, 255]),
            foreground: Rgba([0, 0, 0, 255]),
            origin: (0, 0),
            flip_y: false,
        }
    }
}

/// Result of painting: the buffer plus how many pixels fell outside it.
pub struct Painted {
    pub image: RgbaImage,
    pub drawn: usize,
    pub clipped: usize,
}

/// Fill the background everywhere, then the foreground at every pixel that
/// lands inside the buffer. Out-of-bounds pixels are clipped, not errors.
pub fn paint(pixels: &PixelSet, cfg: &CanvasCfg) -> Painted {
    let mut image = RgbaImage::from_pixel(cfg.width, cfg.height, cfg.background);
    let (w, h) = (i64::from(cfg.width), i64::from(cfg.height));
    let mut drawn = 0;
    let mut clipped = 0;
    for &(x, y) in pixels {
        let bx = x + cfg.origin.0;
        let mut by = y + cfg.origin.1;
        if cfg.flip_y {
            by = h - 1 - by;
        }
        if (0..w).contains(&bx) && (0..h).contains(&by) {
            image.put_pixel(bx as u32, by as u32, cfg.foreground);
            drawn += 1;
        } else {
            clipped += 1;
        }
    }
    Painted {
        image,
        drawn,
        clipped,
    }
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    image
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

/// Parse `#rrggbb` or `#rrggbbaa`.
pub fn parse_hex_color(s: &str) -> Result<Rgba<u8>> {
    let hex = s.trim().trim_start_matches('#');
    if !(hex.len() == 6 || hex.len() == 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        bail!("expected #rrggbb or #rrggbbaa, got {s:?}");
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
    let alpha = if hex.len() == 8 { channel(6)? } else { 255 };
    Ok(Rgba([channel(0)?, channel(2)?, channel(4)?, alpha]))
}
