// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The jobs the command line can ask for.
//!
//! `reduce` takes the number of columns and rows to *remove*, not the
//! final size; `energy` and `seam` are the two previews.

use crate::error::{Error, Result};
use crate::pixelgrid::{Color, PixelGrid};
use crate::seamcarver::{Carve, SeamCarver};
use std::fmt;
use std::str::FromStr;

/// The color `seam` paints its preview in.
pub const HIGHLIGHT: Color = Color::RED;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Operation {
    Energy,
    Seam,
    Reduce,
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "energy" => Ok(Operation::Energy),
            "seam" => Ok(Operation::Seam),
            "reduce" => Ok(Operation::Reduce),
            _ => Err(Error::UnknownOperation(s.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Operation::Energy => "energy",
            Operation::Seam => "seam",
            Operation::Reduce => "reduce",
        };
        write!(f, "{}", name)
    }
}

/// One run of the tool: what to do, and for `reduce`, how many columns
/// and rows to take out.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Job {
    pub operation: Operation,
    pub width: u32,
    pub height: u32,
}

// Removing `amount` pixels must leave at least one behind.
fn reduced(axis: Carve, current: u32, amount: u32) -> Result<u32> {
    match current.checked_sub(amount) {
        Some(target) if target > 0 => Ok(target),
        _ => Err(Error::InvalidTarget {
            axis,
            target: current.saturating_sub(amount),
            current,
        }),
    }
}

impl Job {
    pub fn new(operation: Operation, width: u32, height: u32) -> Self {
        Job {
            operation,
            width,
            height,
        }
    }

    /// Apply the job to a grid and return the grid to encode.
    pub fn run(&self, grid: PixelGrid) -> Result<PixelGrid> {
        let mut carver = SeamCarver::new(grid);
        match self.operation {
            Operation::Energy => Ok(carver.render_energy_heatmap()),
            Operation::Seam => carver.highlight_seam(HIGHLIGHT),
            Operation::Reduce => {
                let width = reduced(Carve::Width, carver.width(), self.width)?;
                let height = reduced(Carve::Height, carver.height(), self.height)?;
                carver.shrink_to(width, height)?;
                Ok(carver.into_grid())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stripes(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| {
            Color::new((x * 40) as u8, (y * 30) as u8, ((x + y) * 20) as u8)
        })
        .unwrap()
    }

    #[test]
    fn operations_parse_case_insensitively() {
        assert_eq!("energy".parse::<Operation>(), Ok(Operation::Energy));
        assert_eq!("Seam".parse::<Operation>(), Ok(Operation::Seam));
        assert_eq!("REDUCE".parse::<Operation>(), Ok(Operation::Reduce));
        assert_eq!(
            "shrink".parse::<Operation>(),
            Err(Error::UnknownOperation("shrink".to_string()))
        );
        assert_eq!(Operation::Reduce.to_string(), "reduce");
    }

    #[test]
    fn reduce_removes_amounts() {
        let out = Job::new(Operation::Reduce, 2, 1).run(stripes(6, 4)).unwrap();
        assert_eq!(out.dimensions(), (4, 3));
    }

    #[test]
    fn reduce_by_nothing_keeps_the_image() {
        let grid = stripes(3, 3);
        let out = Job::new(Operation::Reduce, 0, 0).run(grid.clone()).unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn reduce_cannot_remove_everything() {
        assert_eq!(
            Job::new(Operation::Reduce, 6, 0).run(stripes(6, 4)),
            Err(Error::InvalidTarget {
                axis: Carve::Width,
                target: 0,
                current: 6
            })
        );
        assert!(Job::new(Operation::Reduce, 0, 9).run(stripes(6, 4)).is_err());
    }

    #[test]
    fn previews_keep_dimensions() {
        let energy = Job::new(Operation::Energy, 0, 0).run(stripes(5, 4)).unwrap();
        assert_eq!(energy.dimensions(), (5, 4));
        let seam = Job::new(Operation::Seam, 0, 0).run(stripes(5, 4)).unwrap();
        assert_eq!(seam.dimensions(), (5, 4));
        let painted = seam.rows().iter().flatten().filter(|c| **c == HIGHLIGHT);
        assert_eq!(painted.count(), 4);
    }
}
