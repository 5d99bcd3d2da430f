// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of an image
//!
//! Given a pixel grid, calculate the energy map: for every pixel, the
//! square root of the summed squared color gradients across it, left
//! to right and top to bottom.  This is the plain dual-gradient energy
//! with no forward energy calculation.
//!
//! Border pixels have no neighbour on one side.  Rather than reflect or
//! wrap, a border pixel borrows the gradient of the nearest interior
//! pixel one step in, so the leftmost column gets the same x-gradient
//! as column 1, and the rightmost the same as column `width - 2`.

use crate::pixelgrid::PixelGrid;
use crate::pixelpairs::energy_of_pair;
use crate::twodmap::TwoDimensionalMap;
use num_traits::NumCast;
use tracing::debug;

/// One non-negative energy value per pixel.
pub type EnergyMap = TwoDimensionalMap<f64>;

// Returns the pair of indices whose pixels define the gradient at `v`
// along an axis of length `dim`.  Interior pixels compare their two
// neighbours; border pixels reuse the pair one step in.  Axes shorter
// than three pixels clamp the pair into range.
fn gradient_pair(v: u32, dim: u32) -> (u32, u32) {
    if dim < 2 {
        return (0, 0);
    }
    let shifted = if v == 0 {
        1
    } else if v == dim - 1 {
        dim - 2
    } else {
        v
    };
    (shifted.saturating_sub(1), (shifted + 1).min(dim - 1))
}

/// Compute the energy of every pixel in a grid.
pub fn calculate_energy(grid: &PixelGrid) -> EnergyMap {
    let (width, height) = grid.dimensions();

    let mut emap = EnergyMap::new(width, height);
    for y in 0..height {
        let (up, down) = gradient_pair(y, height);
        for x in 0..width {
            let (left, right) = gradient_pair(x, width);
            let x_gradient = energy_of_pair(&grid[(left, y)], &grid[(right, y)]);
            let y_gradient = energy_of_pair(&grid[(x, up)], &grid[(x, down)]);
            emap[(x, y)] = (x_gradient + y_gradient).sqrt();
        }
    }
    emap
}

/// The highest energy anywhere in the map, or zero for a map with no
/// detail at all.
pub fn max_energy(energy: &EnergyMap) -> f64 {
    energy.values().iter().cloned().fold(0.0, f64::max)
}

/// Scale an energy map to gray levels, the brightest pixel at 255.  A
/// map with no energy anywhere comes back all black rather than
/// dividing by zero.
pub fn heatmap_intensities(energy: &EnergyMap) -> TwoDimensionalMap<u8> {
    let (width, height) = (energy.width, energy.height);
    let mut out = TwoDimensionalMap::new(width, height);

    let factor = max_energy(energy);
    if factor == 0.0 {
        debug!(width, height, "energy map is flat; heat map is all black");
        return out;
    }

    for y in 0..height {
        for x in 0..width {
            let level = (255.0 * energy[(x, y)] / factor).round();
            out[(x, y)] = <u8 as NumCast>::from(level).unwrap_or(u8::MAX);
        }
    }
    out
}
