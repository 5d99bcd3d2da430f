// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest seam through an energy map.
//!
//! The seam digraph is built top to bottom: each cell holds the least
//! accumulated energy of any path reaching it from the top row, and the
//! column in the row above that path came through.  Walking those
//! parents back up from the cheapest bottom cell yields the seam.
//!
//! Ties always go to the leftmost candidate: the leftmost cheapest
//! bottom cell, and for each parent the order is up-left, straight up,
//! up-right.

use crate::energy::{calculate_energy, EnergyMap};
use crate::pixelgrid::PixelGrid;
use crate::twodmap::{EnergyAndBackPointer, TwoDimensionalMap};
use tracing::trace;

/// A connected top-to-bottom path, one column per row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    columns: Vec<u32>,
}

impl Seam {
    pub fn new(columns: Vec<u32>) -> Self {
        Seam { columns }
    }

    /// The x coordinate for each row, top row first.
    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// The seam as (x, y) pairs, top row first.
    pub fn points(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.columns
            .iter()
            .enumerate()
            .map(|(y, x)| (*x, y as u32))
    }
}

/// This trait defines how we will return seams from an image.  It's a
/// primitive interface, just enough to make room for multiple energy
/// functions.
pub trait SeamFinder {
    /// Request a top-to-bottom seam.
    fn find_vertical_seam(&self) -> Seam;

    /// Request a left-to-right seam.  The seam's "columns" are then
    /// the y coordinate for each x.
    fn find_horizontal_seam(&self) -> Seam;
}

// Leftmost index of the least energy in a non-empty run of candidates.
fn leftmost_min<I>(candidates: I, energy_of: impl Fn(u32) -> f64) -> u32
where
    I: Iterator<Item = u32>,
{
    candidates
        .min_by(|a, b| energy_of(*a).total_cmp(&energy_of(*b)))
        .unwrap_or(0)
}

/// Given an energy map, return the cheapest top-to-bottom seam.  The
/// map must have at least one row and one column.
pub fn energy_to_vertical_seam(energy: &EnergyMap) -> Seam {
    let (width, height) = (energy.width, energy.height);
    let mut target: TwoDimensionalMap<EnergyAndBackPointer<f64>> =
        TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)].energy = energy[(x, 0)];
    }

    let maxwidth = width - 1;
    // For every subsequent row, populate the target cell with the sum
    // of the *lowest adjacent upper energy* and the *x coordinate of
    // that energy*.  Neighbours off the edge simply aren't candidates.
    for y in 1..height {
        for x in 0..width {
            let range = x.saturating_sub(1)..=(x + 1).min(maxwidth);
            let parent_x = leftmost_min(range, |px| target[(px, y - 1)].energy);
            let parent = target[(parent_x, y - 1)];
            target[(x, y)] = EnergyAndBackPointer {
                energy: energy[(x, y)] + parent.energy,
                parent: parent_x,
            };
        }
    }

    // Find the x coordinate of the bottommost seam with the least energy.
    let mut seam_col = leftmost_min(0..width, |x| target[(x, height - 1)].energy);

    // Working backwards, generate a vec of x coordinates that map to
    // the seam, reverse and return.
    let mut columns: Vec<u32> = (0..height)
        .rev()
        .map(|y| {
            let x = seam_col;
            seam_col = target[(x, y)].parent;
            x
        })
        .collect();
    columns.reverse();
    trace!(?columns, "found seam");
    Seam::new(columns)
}

/// A convenience wrapper: Given a grid, get back the next
/// top-to-bottom seam for that grid.
pub fn calculate_vertical_seam(grid: &PixelGrid) -> Seam {
    energy_to_vertical_seam(&calculate_energy(grid))
}

/// The basic seam engine: gradient energy over a borrowed grid.
pub struct GradientSeams<'a> {
    grid: &'a PixelGrid,
}

impl<'a> GradientSeams<'a> {
    /// Takes a reference to a grid, and holds onto it.
    pub fn new(grid: &'a PixelGrid) -> Self {
        GradientSeams { grid }
    }
}

impl<'a> SeamFinder for GradientSeams<'a> {
    fn find_vertical_seam(&self) -> Seam {
        calculate_vertical_seam(self.grid)
    }

    fn find_horizontal_seam(&self) -> Seam {
        let mut flipped = self.grid.clone();
        flipped.transpose();
        calculate_vertical_seam(&flipped)
    }
}
