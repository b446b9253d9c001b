//! Physical constants and model tuning parameters.

/// Lethal radius coefficient, in nautical miles for a 1 Mt burst against 1 psi.
pub const LETHAL_RADIUS_COEFFICIENT: f64 = 2.63;

/// Coefficient used by older worksheets. Kept to reproduce their figures.
pub const LEGACY_LETHAL_RADIUS_COEFFICIENT: f64 = 2.62;

/// Meters per nautical mile.
pub const METERS_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Kilotons per megaton. Yields are entered in kilotons.
pub const KILOTONS_PER_MEGATON: f64 = 1000.0;

/// Base of the CEP kill curve: half of all warheads land inside one CEP.
pub const CEP_CONTAINMENT: f64 = 0.5;

// --- Sampled model ---

/// RNG seed for the sampled model. Fixed so repeated calls agree bit for bit.
pub const SAMPLED_MODEL_SEED: u64 = 0x50_5A45_524F;

/// Number of Monte Carlo trials per sampled aggregation.
pub const SAMPLED_MODEL_TRIALS: u32 = 20_000;

// --- Default scenario ---

/// Default target latitude (degrees).
pub const DEFAULT_TARGET_LATITUDE: f64 = 37.7577;

/// Default target longitude (degrees).
pub const DEFAULT_TARGET_LONGITUDE: f64 = -122.4376;

/// Default target hardness (psi).
pub const DEFAULT_TARGET_HARDNESS: f64 = 100.0;
