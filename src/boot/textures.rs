//! Procedurally generated UI textures.
//!
//! The art pipeline supplies only backgrounds and the character sheet; the
//! heart pickup and the touch buttons are drawn at boot as RGBA pixel
//! buffers instead of shipping extra binary assets.

use bevy::prelude::*;
use bevy::render::render_asset::RenderAssetUsages;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};

const HEART_SIZE: u32 = 32;
const BUTTON_SIZE: u32 = 96;

const HEART_RED: [u8; 4] = [239, 68, 68, 255];
const HEART_SHINE: [u8; 4] = [254, 202, 202, 255];
const BUTTON_FILL: [u8; 4] = [30, 41, 59, 217];
const BUTTON_EDGE: [u8; 4] = [147, 197, 253, 242];
const BUTTON_GLYPH: [u8; 4] = [248, 250, 252, 255];

fn blank(size: u32) -> Vec<u8> {
    vec![0; (size * size * 4) as usize]
}

fn put(pixels: &mut [u8], size: u32, x: u32, y: u32, rgba: [u8; 4]) {
    let i = ((y * size + x) * 4) as usize;
    pixels[i..i + 4].copy_from_slice(&rgba);
}

fn image_from(pixels: Vec<u8>, size: u32) -> Image {
    Image::new(
        Extent3d {
            width: size,
            height: size,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        pixels,
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::default(),
    )
}

/// The heart pickup sprite: the classic implicit heart curve
/// `(x² + y² − 1)³ − x²·y³ ≤ 0`, rasterized with a small top-left shine.
pub fn heart_image() -> Image {
    let size = HEART_SIZE;
    let mut pixels = blank(size);

    for py in 0..size {
        for px in 0..size {
            // Map pixel to [-1.4, 1.4]², y up.
            let x = (px as f32 / (size - 1) as f32) * 2.8 - 1.4;
            let y = 1.4 - (py as f32 / (size - 1) as f32) * 2.8;
            let f = (x * x + y * y - 1.0).powi(3) - x * x * y.powi(3);
            if f <= 0.0 {
                let shine = x < -0.25 && y > 0.35 && f > -0.08;
                put(
                    &mut pixels,
                    size,
                    px,
                    py,
                    if shine { HEART_SHINE } else { HEART_RED },
                );
            }
        }
    }

    image_from(pixels, size)
}

/// A round touch button with a left- or right-pointing triangle glyph.
pub fn arrow_button_image(pointing_left: bool) -> Image {
    let size = BUTTON_SIZE;
    let mut pixels = disc(size);

    let mid = size as i32 / 2;
    let half_span = size as i32 / 5;
    for dy in -half_span..=half_span {
        // Triangle: row width shrinks toward the tip.
        let row_w = half_span - dy.abs();
        for dx in 0..=row_w {
            let x = if pointing_left { mid + half_span / 2 - dx } else { mid - half_span / 2 + dx };
            put(
                &mut pixels,
                size,
                x as u32,
                (mid + dy) as u32,
                BUTTON_GLYPH,
            );
        }
    }

    image_from(pixels, size)
}

/// The jump/action button: a disc with a hollow ring glyph.
pub fn action_button_image() -> Image {
    let size = BUTTON_SIZE;
    let mut pixels = disc(size);

    let center = (size as f32 - 1.0) / 2.0;
    for py in 0..size {
        for px in 0..size {
            let d = Vec2::new(px as f32 - center, py as f32 - center).length();
            if (d - size as f32 * 0.22).abs() <= 3.0 {
                put(&mut pixels, size, px, py, BUTTON_GLYPH);
            }
        }
    }

    image_from(pixels, size)
}

/// Filled disc with a lighter rim, the shared button base.
fn disc(size: u32) -> Vec<u8> {
    let mut pixels = blank(size);
    let center = (size as f32 - 1.0) / 2.0;
    let radius = size as f32 / 2.0 - 1.0;

    for py in 0..size {
        for px in 0..size {
            let d = Vec2::new(px as f32 - center, py as f32 - center).length();
            if d <= radius {
                let rgba = if d >= radius - 3.0 { BUTTON_EDGE } else { BUTTON_FILL };
                put(&mut pixels, size, px, py, rgba);
            }
        }
    }

    pixels
}
