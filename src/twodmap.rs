// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::ops::{Index, IndexMut};

/// Defines the basic energy map: An addressable two-dimensional field
/// containing an object that represents one of several possible
/// objects during processing: a plain f64 for the energy map, or an
/// accumulated energy + parent address, for the seam digraph.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    pub width: u32,
    pub height: u32,
    data: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new (abstract) map.  The content type must implement
    /// the Default trait.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            data: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major buffer.  Returns None if the buffer
    /// is the wrong size for the dimensions.
    pub fn from_vec(width: u32, height: u32, data: Vec<P>) -> Option<Self> {
        if data.len() == width as usize * height as usize {
            Some(TwoDimensionalMap {
                width,
                height,
                data,
            })
        } else {
            None
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// All values, row-major.
    pub fn values(&self) -> &[P] {
        &self.data
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.data[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.data[index]
    }
}

/// One cell of the seam digraph: the cheapest accumulated energy of
/// any path reaching this pixel, and the column in the row above that
/// path came through.
#[derive(Default, Debug, Copy, Clone)]
pub(crate) struct EnergyAndBackPointer<P: Default + Copy> {
    pub energy: P,
    pub parent: u32,
}
