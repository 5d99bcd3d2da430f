// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a pixel pair
//!
//! Given two pixels, the energy between them is the squared distance
//! between the colors that make them up, the classic
//! d(R^2) + d(G^2) + d(B^2).  Nothing here looks at alpha; by the time
//! a pixel is a `Color` it has been dropped.

use crate::pixelgrid::Color;

// This is the rusty expression of:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²

/// (Color, Color) -> Energy
#[inline]
pub fn energy_of_pair(c1: &Color, c2: &Color) -> f64 {
    c1.channels()
        .iter()
        .zip(c2.channels().iter())
        .map(|(a, b)| {
            let d = f64::from(*a) - f64::from(*b);
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_colors_have_no_energy() {
        let c = Color::new(12, 200, 7);
        assert_eq!(energy_of_pair(&c, &c), 0.0);
    }

    #[test]
    fn channels_are_summed_squared() {
        let a = Color::new(0, 10, 255);
        let b = Color::new(3, 6, 250);
        assert_eq!(energy_of_pair(&a, &b), 9.0 + 16.0 + 25.0);
        assert_eq!(energy_of_pair(&b, &a), 50.0);
    }

    #[test]
    fn black_to_white() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);
        assert_eq!(energy_of_pair(&black, &white), 3.0 * 255.0 * 255.0);
    }
}
