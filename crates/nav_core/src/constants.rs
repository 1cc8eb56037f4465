/// Edge weight type (distance in meters)
pub type Weight = u32;

/// Distance label of a location no path has reached yet
pub const INFINITY: Weight = Weight::MAX;
