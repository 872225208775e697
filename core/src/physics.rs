// core/src/physics.rs
// Fysisk effektmodell for løping. Konstantene er empiriske tilnærminger og
// holdes som navngitte verdier slik at de kan rekalibreres uten å røre
// akkumuleringslogikken.

use crate::units::{LBS_TO_KG, METERS_PER_MILE};

pub const G: f64 = 9.81;        // gravitasjon (m/s²)
pub const RHO: f64 = 1.225;     // lufttetthet (kg/m³)
pub const CR_RUN: f64 = 0.01;   // løpsøkonomi-/rullekoeffisient
pub const CDA_RUN: f64 = 0.5;   // effektivt dragareal CdA (m²)

/// Momentan løpseffekt (watt):
/// P = (m·g·grade + m·g·Cr + ½·ρ·CdA·v²) · v
/// Definert som 0 når v <= 0.
pub fn estimate_power(weight_lbs: f64, velocity_ms: f64, grade: f64) -> f64 {
    if velocity_ms <= 0.0 {
        return 0.0;
    }

    let mass_kg = weight_lbs * LBS_TO_KG;

    let force_gravity = mass_kg * G * grade;
    let force_rolling = mass_kg * G * CR_RUN;
    let force_air = 0.5 * RHO * CDA_RUN * velocity_ms.powi(2);

    let p = (force_gravity + force_rolling + force_air) * velocity_ms;
    if p.is_finite() { p } else { 0.0 }
}

/// Stigning (dimensjonsløs) fra høydedelta (m) og horisontal distanse (mi).
/// Vaktet mot null-distanse.
pub fn grade_from_delta(dh_m: f64, distance_mi: f64) -> f64 {
    let ds_m = distance_mi * METERS_PER_MILE;
    if ds_m <= 0.0 {
        0.0
    } else {
        dh_m / ds_m
    }
}
