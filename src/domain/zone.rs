use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BinningError;

/// `SHOT_ZONE_BASIC` value of shots taken at the rim.
pub const RESTRICTED_AREA: &str = "Restricted Area";

/// A named court zone: (`SHOT_ZONE_BASIC`, `SHOT_ZONE_AREA`, `SHOT_ZONE_RANGE`).
///
/// Field order matters for `Ord`: zones sort by basic, then area, then range.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct ZoneKey {
    pub basic: String,
    pub area: String,
    pub range: String,
}

impl ZoneKey {
    pub fn new(basic: impl Into<String>, area: impl Into<String>, range: impl Into<String>) -> Self {
        ZoneKey {
            basic: basic.into(),
            area: area.into(),
            range: range.into(),
        }
    }

    pub fn is_restricted_area(&self) -> bool {
        self.basic == RESTRICTED_AREA
    }

    /// The side code inside the parentheses of the area, e.g. "LC" for "Left Side Center(LC)".
    pub fn area_code(&self) -> Option<&str> {
        let (_, rest) = self.area.split_once('(')?;
        Some(rest.split_once(')').map_or(rest, |(code, _)| code))
    }

    /// Short annotation code for the zone ("3LC", "PC8", "MR1", "RC").
    ///
    /// Checked in order: three-pointers, paint, mid-range, everything else.
    pub fn label(&self) -> Result<String, BinningError> {
        let area_code = self
            .area_code()
            .ok_or_else(|| BinningError::InvalidZoneArea(self.area.clone()))?;
        let range_initial = self.range.chars().next();

        let mut label = String::with_capacity(4);
        if self.basic.contains('3') {
            label.push('3');
            label.push_str(area_code);
        } else if self.basic.contains("Paint") {
            label.push('P');
            label.push_str(area_code);
            label.extend(range_initial);
        } else if self.basic.contains("Mid") {
            label.push('M');
            label.push_str(area_code);
            label.extend(range_initial);
        } else {
            label.push('R');
            label.push_str(area_code);
        }
        Ok(label)
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} / {} / {}", self.basic, self.area, self.range)
    }
}

/// Grid cell a shot lands in after discretization.
/// Signed because off-court coordinates are binned as-is.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct BinKey {
    pub x: i64,
    pub y: i64,
}

impl BinKey {
    pub fn new(x: i64, y: i64) -> Self {
        BinKey { x, y }
    }
}

impl fmt::Display for BinKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_code_extraction() {
        let zone = ZoneKey::new("Mid-Range", "Left Side Center(LC)", "16-24 ft.");
        assert_eq!(zone.area_code(), Some("LC"));

        let no_code = ZoneKey::new("Mid-Range", "Left Side Center", "16-24 ft.");
        assert_eq!(no_code.area_code(), None);
    }

    #[test]
    fn test_labels_follow_priority_order() {
        let cases = [
            (ZoneKey::new("Left Corner 3", "Left Side(L)", "24+ ft."), "3L"),
            (ZoneKey::new("Above the Break 3", "Center(C)", "24+ ft."), "3C"),
            (ZoneKey::new("In The Paint (Non-RA)", "Center(C)", "8-16 ft."), "PC8"),
            (ZoneKey::new("Mid-Range", "Right Side(R)", "16-24 ft."), "MR1"),
            (ZoneKey::new("Restricted Area", "Center(C)", "Less Than 8 ft."), "RC"),
            (ZoneKey::new("Backcourt", "Back Court(BC)", "Back Court Shot"), "RBC"),
        ];
        for (zone, expected) in cases {
            assert_eq!(zone.label().unwrap(), expected, "label for {}", zone);
        }
    }

    #[test]
    fn test_label_rejects_area_without_code() {
        let zone = ZoneKey::new("Mid-Range", "Somewhere", "8-16 ft.");
        assert_eq!(
            zone.label(),
            Err(BinningError::InvalidZoneArea("Somewhere".to_string()))
        );
    }

    #[test]
    fn test_zone_ordering_is_lexicographic() {
        let mut zones = vec![
            ZoneKey::new("Restricted Area", "Center(C)", "Less Than 8 ft."),
            ZoneKey::new("Mid-Range", "Right Side(R)", "8-16 ft."),
            ZoneKey::new("Mid-Range", "Center(C)", "8-16 ft."),
        ];
        zones.sort();
        assert_eq!(zones[0].area, "Center(C)");
        assert_eq!(zones[1].area, "Right Side(R)");
        assert!(zones[2].is_restricted_area());
    }
}
