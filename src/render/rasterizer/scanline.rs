//! Seeded scanline rasterization.
//!
//! Walks the triangle one row at a time, top to bottom, and finds each row's
//! covered span by growing outward from a seed pixel instead of testing the
//! whole bounding box.
//!
//! # Algorithm Overview
//!
//! For every row `y` in the bounding box:
//!
//! 1. **Seed**: test the seed x carried over from the previous row. The first
//!    row starts at the x of the topmost vertex.
//! 2. **Fallback**: if the seed misses, scan the row from `min_x` to `max_x`
//!    for the first inside pixel. If nothing is inside, skip the row.
//! 3. **Grow**: from that anchor, walk left one pixel at a time while pixels
//!    test inside, then walk right the same way. The anchor is tested once;
//!    the walks start at `anchor - 1` and `anchor + 1`.
//! 4. **Reseed**: the midpoint of the row's span becomes the next row's seed.
//!
//! ```text
//!   row y      . . . L x x A x x x R . . .
//!                    <-----  ----->
//!   row y+1    . . . . . . S . . . . . . .     S = (L + R) / 2
//! ```
//!
//! A triangle is convex, so each row's inside pixels form one contiguous run
//! and growing from any inside pixel finds all of them. The seed is only a
//! hint: every pixel is still classified by the edge function, so a bad seed
//! costs one full-row scan, never a wrong pixel.
//!
//! # Cost
//!
//! With a good seed each row costs its span width plus two failed tests. When
//! the seed misses every row, it degrades to the bounding box rasterizer's
//! `O(width * height)`.

use super::shader::GouraudShader;
use super::{prepare, Rasterizer};
use crate::colors::ChannelMode;
use crate::error::RasterError;
use crate::render::surface::Surface;
use crate::triangle::Triangle;

/// Seeded scanline rasterizer. The default rasterizer of the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanlineRasterizer {
    channel_mode: ChannelMode,
}

impl ScanlineRasterizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_channel_mode(channel_mode: ChannelMode) -> Self {
        Self { channel_mode }
    }
}

impl Rasterizer for ScanlineRasterizer {
    fn fill_triangle<S: Surface + ?Sized>(
        &self,
        triangle: &Triangle,
        surface: &mut S,
        light_factor: f64,
    ) -> Result<usize, RasterError> {
        let setup = prepare(triangle)?;
        let shader = GouraudShader::new(setup.colors, light_factor, self.channel_mode);
        let bounds = setup.bounds;

        let mut seed_x = setup.points[setup.top_vertex()].x as i32;
        let mut written = 0;
        let mut seed_misses = 0;

        for y in bounds.min_y..=bounds.max_y {
            // plot() both tests and draws, so the anchor is drawn by whichever
            // test found it and never re-tested.
            let seed_hit = bounds.contains_x(seed_x) && setup.plot(&shader, surface, seed_x, y);
            let anchor = if seed_hit {
                Some(seed_x)
            } else {
                seed_misses += 1;
                (bounds.min_x..=bounds.max_x).find(|&x| setup.plot(&shader, surface, x, y))
            };

            let Some(anchor) = anchor else {
                log::trace!("Row {} has no covered pixels", y);
                continue;
            };

            let mut left = anchor;
            while left > bounds.min_x && setup.plot(&shader, surface, left - 1, y) {
                left -= 1;
            }

            let mut right = anchor;
            while right < bounds.max_x && setup.plot(&shader, surface, right + 1, y) {
                right += 1;
            }

            // i64 keeps spans near the i32 limits from overflowing
            written += (i64::from(right) - i64::from(left) + 1) as usize;
            seed_x = (i64::from(left) + i64::from(right)).div_euclid(2) as i32;
        }

        log::trace!(
            "Scanline pass wrote {} pixels over {} rows ({} seed misses)",
            written,
            i64::from(bounds.max_y) - i64::from(bounds.min_y) + 1,
            seed_misses
        );
        Ok(written)
    }
}
