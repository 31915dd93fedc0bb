use serde::{Deserialize, Serialize};

use crate::domain::zone::{RESTRICTED_AREA, ZoneKey};

/// One field-goal attempt as it comes out of the season shot log.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ShotRecord {
    // Court position, tenths of a foot, origin at the hoop centre
    pub loc_x: f64,
    pub loc_y: f64,

    pub made: bool,
    pub attempted: bool,

    pub zone_basic: String,
    pub zone_area: String,
    pub zone_range: String,

    // Carried through for the rendering side only
    pub player_id: u64,
    pub team_id: u64,
}

impl ShotRecord {
    // A constructor for convenience, ids default to 0
    pub fn new(
        loc_x: f64,
        loc_y: f64,
        made: bool,
        zone_basic: &str,
        zone_area: &str,
        zone_range: &str,
    ) -> Self {
        ShotRecord {
            loc_x,
            loc_y,
            made,
            attempted: true,
            zone_basic: zone_basic.to_string(),
            zone_area: zone_area.to_string(),
            zone_range: zone_range.to_string(),
            player_id: 0,
            team_id: 0,
        }
    }

    pub fn with_ids(mut self, player_id: u64, team_id: u64) -> Self {
        self.player_id = player_id;
        self.team_id = team_id;
        self
    }

    pub fn zone_key(&self) -> ZoneKey {
        ZoneKey::new(&self.zone_basic, &self.zone_area, &self.zone_range)
    }

    pub fn is_restricted_area(&self) -> bool {
        self.zone_basic == RESTRICTED_AREA
    }

    pub fn made_flag(&self) -> u32 {
        u32::from(self.made)
    }

    pub fn attempted_flag(&self) -> u32 {
        u32::from(self.attempted)
    }
}
