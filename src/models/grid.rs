use serde::{Deserialize, Serialize};

use crate::domain::BinKey;
use crate::utils::AxisBins;

/// The two axes of the court grid. Maps real shot positions to bins and back.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct ShotGrid {
    pub x: AxisBins,
    pub y: AxisBins,
}

impl ShotGrid {
    pub fn new(x: AxisBins, y: AxisBins) -> Self {
        ShotGrid { x, y }
    }

    pub fn bin_key(&self, loc_x: f64, loc_y: f64) -> BinKey {
        BinKey::new(self.x.bin_index(loc_x), self.y.bin_index(loc_y))
    }

    pub fn bin_center(&self, key: BinKey) -> (f64, f64) {
        (self.x.bin_center(key.x), self.y.bin_center(key.y))
    }

    pub fn contains(&self, key: BinKey) -> bool {
        self.x.in_range(key.x) && self.y.in_range(key.y)
    }

    /// Largest marker area that still leaves a one-unit gap between neighbouring bins.
    pub fn max_marker_area(&self) -> f64 {
        ((self.x.bin_size().floor() - 1.0) * (self.y.bin_size().floor() - 1.0)).floor()
    }
}
