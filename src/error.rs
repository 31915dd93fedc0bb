use thiserror::Error;

use crate::domain::{BinKey, ZoneKey};

/// Failures the binning engine reports instead of emitting zero-filled rows.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BinningError {
    #[error("no league average baseline for zone {zone}")]
    MissingBaseline { zone: ZoneKey },
    #[error("league average table has more than one row for zone {zone}")]
    DuplicateBaseline { zone: ZoneKey },
    #[error("shot zone area has no '(code)' suffix: {0:?}")]
    InvalidZoneArea(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("bin {0} has no shots after aggregation")]
    EmptyBin(BinKey),
    #[error("aggregation produced no bins for {0} shots")]
    NoBins(usize),
}
