use argminmax::ArgMinMax;
use serde::{Deserialize, Serialize};

/// One axis of the shot grid.
///
/// Raw coordinates are shifted by `offset`, then `[0, extent)` is split into
/// `n_bins` equal bins. `n_bins` stays fractional because the vertical count is
/// derived from the horizontal bin size.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct AxisBins {
    pub extent: f64,
    pub n_bins: f64,
    pub offset: f64,
}

impl AxisBins {
    pub fn new(extent: f64, n_bins: f64, offset: f64) -> Self {
        AxisBins {
            extent,
            n_bins,
            offset,
        }
    }

    #[inline]
    pub fn bin_size(&self) -> f64 {
        self.extent / self.n_bins
    }

    /// Bin of a raw coordinate. No clamping: values past either end of the
    /// axis give negative indices or indices >= `n_bins`.
    pub fn bin_index(&self, raw: f64) -> i64 {
        let shifted = raw + self.offset;
        if shifted == 0.0 {
            return 0;
        }
        ((shifted / self.extent) * self.n_bins).floor() as i64
    }

    pub fn in_range(&self, index: i64) -> bool {
        index >= 0 && (index as f64) < self.n_bins
    }

    /// Edges of a bin in shifted coordinates.
    pub fn bin_bounds(&self, index: i64) -> (f64, f64) {
        let lower_bound = (index as f64 * self.extent) / self.n_bins;
        let upper_bound = ((index + 1) as f64 * self.extent) / self.n_bins;
        (lower_bound, upper_bound)
    }

    /// Midpoint of a bin, back in raw (hoop-centred) coordinates.
    pub fn bin_center(&self, index: i64) -> f64 {
        let (lower_bound, upper_bound) = self.bin_bounds(index);
        (lower_bound + upper_bound) / 2.0 - self.offset
    }
}

/// Panics on an empty slice, callers check first.
pub fn get_max(vec: &[f64]) -> f64 {
    let max_index: usize = vec.argmax();
    vec[max_index]
}

/// Clamp into `[-limit, limit]`.
pub fn clamp_symmetric(value: f64, limit: f64) -> f64 {
    value.clamp(-limit, limit)
}

/// `part / whole` as a fraction, 0.0 when `whole` is zero.
pub fn ratio(part: u32, whole: u32) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    f64::from(part) / f64::from(whole)
}
