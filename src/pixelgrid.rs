// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The mutable pixel grid being carved.
//!
//! The grid is stored as a vector of rows, each row its own vector.
//! Carving a vertical seam removes exactly one pixel from every row,
//! and with this layout that only shifts the tail of each row; the
//! rest of the image never moves.  Height carving is handled by
//! transposing the grid, carving, and transposing back.

use crate::error::{Error, Result};
use crate::seamcarver::Carve;
use crate::seamfinder::Seam;
use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use itertools::Itertools;
use std::ops::{Index, IndexMut};

/// An opaque RGB color.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const RED: Color = Color::new(255, 0, 0);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Color { red, green, blue }
    }

    /// A gray with the same intensity on all three channels.
    pub const fn gray(level: u8) -> Self {
        Color::new(level, level, level)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<Rgb<u8>> for Color {
    fn from(p: Rgb<u8>) -> Self {
        Color::new(p[0], p[1], p[2])
    }
}

impl From<Color> for Rgb<u8> {
    fn from(c: Color) -> Self {
        Rgb(c.channels())
    }
}

/// A width × height field of colors, addressed as (x, y).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    rows: Vec<Vec<Color>>,
}

impl PixelGrid {
    /// Build a grid from its rows.  Every row must be the same,
    /// non-zero length.
    pub fn new(rows: Vec<Vec<Color>>) -> Result<Self> {
        let expected = match rows.first() {
            Some(row) if !row.is_empty() => row.len(),
            _ => return Err(Error::EmptyGrid),
        };
        if let Some((row, r)) = rows.iter().find_position(|r| r.len() != expected) {
            return Err(Error::RaggedRows {
                row: row as u32,
                expected: expected as u32,
                actual: r.len() as u32,
            });
        }
        Ok(PixelGrid { rows })
    }

    /// A grid of a single color.
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self> {
        PixelGrid::from_fn(width, height, |_, _| color)
    }

    /// A grid whose every pixel is produced by `f(x, y)`.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> Color,
    {
        if width == 0 || height == 0 {
            return Err(Error::EmptyGrid);
        }
        let rows = (0..height)
            .map(|y| (0..width).map(|x| f(x, y)).collect())
            .collect();
        Ok(PixelGrid { rows })
    }

    /// Take the RGB content of any decoded image.  Alpha, if present,
    /// is discarded.
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        PixelGrid::from_rgb(&image.to_rgb8())
    }

    pub fn from_rgb(image: &RgbImage) -> Result<Self> {
        PixelGrid::from_fn(image.width(), image.height(), |x, y| {
            Color::from(*image.get_pixel(x, y))
        })
    }

    pub fn to_rgb_image(&self) -> RgbImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| self[(x, y)].into())
    }

    pub fn width(&self) -> u32 {
        self.rows[0].len() as u32
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn rows(&self) -> &[Vec<Color>] {
        &self.rows
    }

    fn check(&self, x: u32, y: u32) -> Result<()> {
        let (width, height) = self.dimensions();
        if x < width && y < height {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Read one pixel.
    pub fn get(&self, x: u32, y: u32) -> Result<Color> {
        self.check(x, y)?;
        Ok(self[(x, y)])
    }

    /// Overwrite one pixel.  Only the visualizations use this; carving
    /// never repaints.
    pub fn paint(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        self.check(x, y)?;
        self[(x, y)] = color;
        Ok(())
    }

    /// Swap the x and y axes.  Applying this twice restores the grid.
    pub fn transpose(&mut self) {
        let (width, height) = self.dimensions();
        self.rows = (0..width)
            .map(|x| (0..height).map(|y| self[(x, y)]).collect())
            .collect();
    }

    /// Remove one pixel from every row, at the column the seam names
    /// for that row.  The seam is checked in full first, so a bad seam
    /// leaves the grid untouched.
    pub fn remove_column(&mut self, seam: &Seam) -> Result<()> {
        let (width, height) = self.dimensions();
        if seam.len() as u32 != height {
            return Err(Error::SeamLength {
                expected: height,
                actual: seam.len() as u32,
            });
        }
        if width == 1 {
            return Err(Error::InvalidTarget {
                axis: Carve::Width,
                target: 0,
                current: 1,
            });
        }
        for (y, x) in seam.columns().iter().enumerate() {
            self.check(*x, y as u32)?;
        }
        if let Some((row, _)) = seam
            .columns()
            .iter()
            .tuple_windows()
            .find_position(|(a, b)| (i64::from(**a) - i64::from(**b)).abs() > 1)
        {
            return Err(Error::SeamDisconnected {
                row: row as u32 + 1,
            });
        }

        for (row, x) in self.rows.iter_mut().zip(seam.columns()) {
            row.remove(*x as usize);
        }
        Ok(())
    }
}

// Addressing for the hot loops.  This skips the `OutOfBounds` result
// and panics on a bad coordinate instead; callers have already
// established that the coordinates are in range.
impl Index<(u32, u32)> for PixelGrid {
    type Output = Color;

    fn index(&self, (x, y): (u32, u32)) -> &Color {
        &self.rows[y as usize][x as usize]
    }
}

impl IndexMut<(u32, u32)> for PixelGrid {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut Color {
        &mut self.rows[y as usize][x as usize]
    }
}
