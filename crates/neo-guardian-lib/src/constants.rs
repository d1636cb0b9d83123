//! Physical and presentation constants shared across the assessment pipeline.

/// Geometric albedo assumed for every object when estimating diameter.
///
/// 0.15 sits between the typical C-type (~0.06) and S-type (~0.25) values.
pub const ASSUMED_ALBEDO: f64 = 0.15;

/// Numerator of the H-albedo diameter relation, in kilometres.
///
/// `D_km = DIAMETER_CONSTANT_KM / sqrt(albedo) * 10^(-0.2 * H)`
pub const DIAMETER_CONSTANT_KM: f64 = 1329.0;

/// Size class thresholds in metres (lower bounds, inclusive).
pub const CITY_LEVEL_MIN_M: f64 = 25.0;
pub const POTENTIALLY_HAZARDOUS_MIN_M: f64 = 140.0;
pub const PLANET_KILLER_MIN_M: f64 = 1000.0;

/// Kinetic class thresholds in metres (exclusive lower bounds).
pub const KINETIC_CITY_LEVEL_ABOVE_M: f64 = 100.0;
pub const KINETIC_TSAR_BOMBA_ABOVE_M: f64 = 500.0;

/// Rough blast radius proxy: kilometres of damage radius per metre of diameter.
pub const BLAST_RADIUS_KM_PER_M: f64 = 0.05;

/// Probability above which an object is flagged for critical tracking.
pub const CRITICAL_TRACKING_PROBABILITY: f64 = 0.5;

/// Asteroid bars in the scale comparison are capped at this size (metres).
pub const SCALE_DISPLAY_CAP_M: f64 = 2000.0;

/// Number of samples used to draw the orbit ellipse.
pub const ORBIT_SAMPLES: usize = 100;

/// Upper bound on the eccentricity accepted from the input layer.
pub const MAX_ECCENTRICITY: f64 = 0.95;

/// Accepted absolute magnitude range.
pub const MIN_ABSOLUTE_MAGNITUDE: f64 = 10.0;
pub const MAX_ABSOLUTE_MAGNITUDE: f64 = 30.0;

/// Highest valid orbit condition code.
pub const MAX_CONDITION_CODE: u8 = 9;
