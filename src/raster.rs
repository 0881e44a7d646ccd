//! # Packed-Color Pixel Grid
//!
//! [`PixelGrid`] is the rectangular grid of packed 16-bit colors handed
//! from the coloring stage to the encoders, plus the single-pass box
//! antialias filter that can be applied to it.
//!
//! Row 0 is the bottom of the image (the canvas keeps the same
//! orientation); encoders decide emission order themselves.

use crate::color::{self, PackedColor};
use crate::error::LienzoError;

/// A validated, rectangular grid of packed 16-bit colors.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelGrid {
    width: usize,
    height: usize,
    pixels: Vec<PackedColor>,
}

impl PixelGrid {
    /// Build a grid from rows of packed colors.
    ///
    /// Fails with [`LienzoError::InvalidGrid`] when the grid is empty or
    /// the rows have unequal widths; encoders refuse such input before
    /// any file is written.
    pub fn new(rows: Vec<Vec<PackedColor>>) -> Result<Self, LienzoError> {
        if rows.is_empty() {
            return Err(LienzoError::InvalidGrid("no rows".to_string()));
        }
        let width = rows[0].len();
        if width == 0 {
            return Err(LienzoError::InvalidGrid("empty rows".to_string()));
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != width) {
            return Err(LienzoError::InvalidGrid(format!(
                "rows of unequal width ({} vs {})",
                bad.len(),
                width
            )));
        }
        let height = rows.len();
        let pixels = rows.into_iter().flatten().collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Assemble a grid from an already-flat buffer. Callers guarantee
    /// `pixels.len() == width * height` and non-zero dimensions.
    pub(crate) fn from_parts(width: usize, height: usize, pixels: Vec<PackedColor>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Flat row-major pixel data, row 0 first.
    pub fn pixels(&self) -> &[PackedColor] {
        &self.pixels
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> PackedColor {
        self.pixels[y * self.width + x]
    }

    /// One row of pixels.
    pub fn row(&self, y: usize) -> &[PackedColor] {
        &self.pixels[y * self.width..(y + 1) * self.width]
    }

    /// One box-blur pass over the grid.
    ///
    /// Each output cell averages a weighted sample set: the left and
    /// right neighbors where they exist, the cell itself five times, and
    /// the vertical neighbors where they exist. Channels are averaged
    /// independently with truncating integer division.
    ///
    /// Cells on edges and corners have a smaller sample set, so their
    /// effective center weight differs from interior cells. That
    /// asymmetry is part of the filter's look and is kept as-is.
    pub fn antialias(&self) -> PixelGrid {
        let mut out = Vec::with_capacity(self.pixels.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let mut sum = [0u32; 3];
                let mut count = 0u32;
                let mut sample = |bits: PackedColor| {
                    let (r, g, b) = color::unpack(bits);
                    sum[0] += r as u32;
                    sum[1] += g as u32;
                    sum[2] += b as u32;
                    count += 1;
                };
                if x > 0 {
                    sample(self.pixel(x - 1, y));
                }
                if x < self.width - 1 {
                    sample(self.pixel(x + 1, y));
                }
                for _ in 0..5 {
                    sample(self.pixel(x, y));
                }
                if y > 0 {
                    sample(self.pixel(x, y - 1));
                }
                if y < self.height - 1 {
                    sample(self.pixel(x, y + 1));
                }
                out.push(color::pack(
                    (sum[0] / count) as u8,
                    (sum[1] / count) as u8,
                    (sum[2] / count) as u8,
                ));
            }
        }
        PixelGrid::from_parts(self.width, self.height, out)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::pack;

    #[test]
    fn test_new_rejects_empty_grid() {
        assert!(PixelGrid::new(vec![]).is_err());
        assert!(PixelGrid::new(vec![vec![], vec![]]).is_err());
    }

    #[test]
    fn test_new_rejects_ragged_rows() {
        let rows = vec![vec![0, 0], vec![0, 0, 0]];
        assert!(PixelGrid::new(rows).is_err());
    }

    #[test]
    fn test_new_accepts_rectangular_grid() {
        let grid = PixelGrid::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel(0, 0), 1);
        assert_eq!(grid.pixel(2, 1), 6);
        assert_eq!(grid.row(1), &[4, 5, 6]);
    }

    #[test]
    fn test_antialias_uniform_grid_unchanged() {
        let c = pack(12, 20, 7);
        let grid = PixelGrid::new(vec![vec![c; 4]; 3]).unwrap();
        assert_eq!(grid.antialias(), grid);
    }

    #[test]
    fn test_antialias_single_pixel_unchanged() {
        // Only the five center samples exist: 5c / 5 = c.
        let grid = PixelGrid::new(vec![vec![pack(9, 9, 9)]]).unwrap();
        assert_eq!(grid.antialias(), grid);
    }

    #[test]
    fn test_antialias_two_pixel_row() {
        let a = pack(31, 0, 0);
        let grid = PixelGrid::new(vec![vec![a, 0]]).unwrap();
        let blurred = grid.antialias();
        // Left cell: 5×(31) + right 0, count 6 → 155/6 = 25 (truncated).
        assert_eq!(blurred.pixel(0, 0), pack(25, 0, 0));
        // Right cell: 5×0 + left 31, count 6 → 31/6 = 5.
        assert_eq!(blurred.pixel(1, 0), pack(5, 0, 0));
    }

    #[test]
    fn test_antialias_corner_vs_interior_weights() {
        // A white dot on black: the interior center keeps more of its
        // own color (5/9) than a corner would (5/7).
        let w = pack(31, 31, 31);
        let grid = PixelGrid::new(vec![
            vec![0, 0, 0],
            vec![0, w, 0],
            vec![0, 0, 0],
        ])
        .unwrap();
        let blurred = grid.antialias();
        // Interior: 5×31 / 9 = 17.
        assert_eq!(blurred.pixel(1, 1), pack(17, 17, 17));
        // Corner (0,0): 7 samples, all black. The white dot is diagonal
        // and diagonals are never sampled.
        assert_eq!(blurred.pixel(0, 0), pack(0, 0, 0));
        // Edge neighbor of the dot: 31/8 = 3.
        assert_eq!(blurred.pixel(1, 0), pack(3, 3, 3));
    }
}
