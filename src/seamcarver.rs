// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main session
//!
//! The carving session owns a pixel grid and repeatedly removes the
//! cheapest vertical seam until the grid is narrow enough.  Height is
//! carved by the same routine on the transposed grid.

use crate::energy::{calculate_energy, heatmap_intensities};
use crate::error::{Error, Result};
use crate::pixelgrid::{Color, PixelGrid};
use crate::seamfinder::{energy_to_vertical_seam, GradientSeams, SeamFinder};
use image::{DynamicImage, RgbImage};
use std::fmt;
use tracing::{debug, info};

// This is silly and basically a reimplementation of `bool`, but it
// makes it much clearer in the code (and in the errors) which way
// we're carving.

/// The axis being shrunk.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Carve {
    Width,
    Height,
}

impl fmt::Display for Carve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Carve::Width => write!(f, "width"),
            Carve::Height => write!(f, "height"),
        }
    }
}

// Shrink-only: the target must be at least one pixel and no larger
// than what we already have.
fn check_target(axis: Carve, target: u32, current: u32) -> Result<()> {
    if target == 0 || target > current {
        Err(Error::InvalidTarget {
            axis,
            target,
            current,
        })
    } else {
        Ok(())
    }
}

// Every iteration recalculates the entire energy map and seam digraph
// from the current grid.  Only the columns either side of the last
// seam actually changed, but a full recalculation keeps the output a
// pure function of the pixels.

/// A struct for holding the image to be carved.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    grid: PixelGrid,
}

impl SeamCarver {
    /// Creates a new SeamCarver with a grid to be carved.
    pub fn new(grid: PixelGrid) -> Self {
        SeamCarver { grid }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Hand the carved grid back.
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    // Assumes the target has already been checked.
    fn carve_width(&mut self, target: u32) -> Result<()> {
        while self.grid.width() > target {
            let seam = energy_to_vertical_seam(&calculate_energy(&self.grid));
            self.grid.remove_column(&seam)?;
            debug!(width = self.grid.width(), "removed seam");
        }
        Ok(())
    }

    fn carve(&mut self, axis: Carve, target: u32) -> Result<()> {
        info!(%axis, from = self.current(axis), to = target, "carving");
        match axis {
            Carve::Width => self.carve_width(target)?,
            Carve::Height => {
                self.grid.transpose();
                let carved = self.carve_width(target);
                self.grid.transpose();
                carved?
            }
        }
        info!(width = self.width(), height = self.height(), "carved");
        Ok(())
    }

    fn current(&self, axis: Carve) -> u32 {
        match axis {
            Carve::Width => self.width(),
            Carve::Height => self.height(),
        }
    }

    /// Remove vertical seams, one at a time, until the grid is
    /// `target` pixels wide.
    pub fn shrink_width(&mut self, target: u32) -> Result<()> {
        check_target(Carve::Width, target, self.width())?;
        self.carve(Carve::Width, target)
    }

    /// Remove horizontal seams until the grid is `target` pixels high.
    pub fn shrink_height(&mut self, target: u32) -> Result<()> {
        check_target(Carve::Height, target, self.height())?;
        self.carve(Carve::Height, target)
    }

    /// Given a desired new width and height, carve the width down
    /// first, then the height.  Both targets are checked before
    /// anything is removed.
    pub fn shrink_to(&mut self, width: u32, height: u32) -> Result<()> {
        check_target(Carve::Width, width, self.width())?;
        check_target(Carve::Height, height, self.height())?;
        self.carve(Carve::Width, width)?;
        self.carve(Carve::Height, height)
    }

    /// A grayscale picture of the current energy map, brightest where
    /// the energy is highest.  The session's own grid is untouched.
    pub fn render_energy_heatmap(&self) -> PixelGrid {
        let levels = heatmap_intensities(&calculate_energy(&self.grid));
        let mut out = self.grid.clone();
        for (x, y) in itertools::iproduct!(0..out.width(), 0..out.height()) {
            out[(x, y)] = Color::gray(levels[(x, y)]);
        }
        out
    }

    /// A copy of the current grid with the next vertical seam painted
    /// in `color`.  Nothing is removed.
    pub fn highlight_seam(&self, color: Color) -> Result<PixelGrid> {
        let seam = GradientSeams::new(&self.grid).find_vertical_seam();
        let mut out = self.grid.clone();
        for (x, y) in seam.points() {
            out.paint(x, y, color)?;
        }
        Ok(out)
    }
}

/// Carve an image down to `width` x `height`.
pub fn seamcarve(image: &DynamicImage, width: u32, height: u32) -> Result<RgbImage> {
    let mut carver = SeamCarver::new(PixelGrid::from_image(image)?);
    carver.shrink_to(width, height)?;
    Ok(carver.into_grid().to_rgb_image())
}
