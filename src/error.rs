// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The errors a carving session can report.
//!
//! Every one of these is detected before the grid is touched, so a
//! caller that gets an `Err` back still holds a consistent image.

use crate::seamcarver::Carve;
use failure::Fail;

#[derive(Debug, Fail, PartialEq, Eq)]
pub enum Error {
    /// A pixel address fell outside the current grid.
    #[fail(
        display = "pixel ({}, {}) is outside the {}x{} grid",
        x, y, width, height
    )]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The requested size is zero or would grow the image.
    #[fail(
        display = "cannot carve {} from {} down to {}",
        axis, current, target
    )]
    InvalidTarget { axis: Carve, target: u32, current: u32 },

    #[fail(display = "seam covers {} rows, but the grid has {}", actual, expected)]
    SeamLength { expected: u32, actual: u32 },

    #[fail(display = "seam jumps more than one column at row {}", row)]
    SeamDisconnected { row: u32 },

    #[fail(display = "a pixel grid needs at least one row and one column")]
    EmptyGrid,

    #[fail(display = "row {} has {} pixels, expected {}", row, actual, expected)]
    RaggedRows { row: u32, expected: u32, actual: u32 },

    #[fail(display = "unknown operation {:?}; expected energy, seam or reduce", _0)]
    UnknownOperation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
