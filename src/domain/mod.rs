// Domain types and value objects
pub mod shot;
pub mod zone;

// Re-export commonly used types
pub use shot::ShotRecord;
pub use zone::{BinKey, RESTRICTED_AREA, ZoneKey};
