// #![deny(missing_docs)]

//! Content-aware image shrinking by seam carving.
//!
//! A [`SeamCarver`] owns a [`PixelGrid`] and removes the lowest-energy
//! connected seam of pixels, one at a time, until the grid reaches the
//! requested size.

pub mod energy;
pub mod error;
pub mod operation;
pub mod pixelgrid;
pub mod pixelpairs;
pub mod seamcarver;
pub mod seamfinder;
pub mod twodmap;

pub use energy::{calculate_energy, heatmap_intensities, EnergyMap};
pub use error::{Error, Result};
pub use operation::{Job, Operation};
pub use pixelgrid::{Color, PixelGrid};
pub use seamcarver::{seamcarve, Carve, SeamCarver};
pub use seamfinder::{energy_to_vertical_seam, GradientSeams, Seam, SeamFinder};
