// core/src/accumulator.rs
// Integrerer aksepterte samples til kumulative økt-totaler: distanse,
// høydemeter og effekthistorikk. Eies eksklusivt av SessionController.

use crate::models::{Coordinate, RawFix};
use crate::physics::{estimate_power, grade_from_delta};
use crate::units::{METERS_PER_MILE, METERS_TO_FEET};

#[derive(Debug)]
pub struct KinematicAccumulator {
    weight_lbs: f64,
    distance_mi: f64,
    ascent_ft: f64,
    current_power_w: f64,
    powers_w: Vec<f64>,
    // Siste aksepterte koordinat + aksept-tidspunkt (ms). None rett etter
    // start/resume, slik at første sample blir ferskt anker uten delta.
    anchor: Option<(Coordinate, i64)>,
}

impl KinematicAccumulator {
    pub fn new(weight_lbs: f64) -> Self {
        Self {
            weight_lbs,
            distance_mi: 0.0,
            ascent_ft: 0.0,
            current_power_w: 0.0,
            powers_w: Vec::new(),
            anchor: None,
        }
    }

    pub fn anchor(&self) -> Option<(Coordinate, i64)> {
        self.anchor
    }

    /// Sett ferskt anker (første aksepterte sample i et segment).
    pub fn set_anchor(&mut self, coord: Coordinate, timestamp_ms: i64) {
        self.anchor = Some((coord, timestamp_ms));
    }

    /// Nullstill ankeret ved resume, slik at neste sample ikke gir et
    /// fiktivt delta fra posisjonen før pausen.
    pub fn clear_anchor(&mut self) {
        self.anchor = None;
    }

    /// Integrér ett akseptert sample (ikke anker) med delta fra filteret.
    /// Returnerer momentan effekt (watt). Samplet blir nytt anker.
    pub fn integrate(&mut self, fix: &RawFix, distance_mi: f64, dt_s: f64) -> f64 {
        let prev = self
            .anchor
            .map(|(c, _)| c)
            .unwrap_or_else(|| fix.coordinate());

        // Manglende høyde i ett av endepunktene => null delta, aldri feil.
        let dh_m = match (prev.elevation, fix.elevation) {
            (Some(a), Some(b)) => b - a,
            _ => 0.0,
        };
        // Kun positive deltaer akkumuleres; nedoverbakke trekker aldri fra.
        if dh_m > 0.0 {
            self.ascent_ft += dh_m * METERS_TO_FEET;
        }

        let grade = grade_from_delta(dh_m, distance_mi);

        // Enhetsrapportert fart hvis den finnes, ellers implisitt fart.
        let velocity_ms = fix.speed_ms.unwrap_or_else(|| {
            if dt_s > 0.0 {
                distance_mi * METERS_PER_MILE / dt_s
            } else {
                0.0
            }
        });

        let power_w = estimate_power(self.weight_lbs, velocity_ms, grade);

        self.distance_mi += distance_mi;
        self.powers_w.push(power_w);
        self.current_power_w = power_w;
        self.anchor = Some((fix.coordinate(), fix.timestamp_ms));

        power_w
    }

    pub fn distance_mi(&self) -> f64 {
        self.distance_mi
    }

    pub fn ascent_ft(&self) -> f64 {
        self.ascent_ft
    }

    pub fn current_power_w(&self) -> f64 {
        self.current_power_w
    }

    pub fn powers_w(&self) -> &[f64] {
        &self.powers_w
    }

    /// Aritmetisk snitt av effekthistorikken; 0 når den er tom.
    pub fn avg_power_w(&self) -> f64 {
        if self.powers_w.is_empty() {
            return 0.0;
        }
        self.powers_w.iter().sum::<f64>() / self.powers_w.len() as f64
    }
}
