//! Geometry for circular, stroke-dash style gauge renderers.
//!
//! The engine only hands back colors and percentages; turning a percentage
//! into an arc is presentation work and lives here.

use std::f64::consts::PI;

/// Radius of the reference dial, in viewBox units.
pub const DIAL_RADIUS: f64 = 54.0;

/// Circumference of the reference dial.
pub fn circumference() -> f64 {
    2.0 * PI * DIAL_RADIUS
}

/// Cap rotation in degrees for a fill fraction in [0, 1]. An empty gauge
/// sits at 270 degrees and a full one has swept through to 630.
pub fn needle_angle(pct: f64) -> f64 {
    -360.0 * (1.0 - pct) + 630.0
}

/// Stroke dash offset hiding the unfilled arc of a circle with the given
/// circumference.
pub fn dash_offset(pct: f64, circumference: f64) -> f64 {
    (1.0 - pct) * circumference
}
