// core/src/filter.rs
// Støyfilter for rå GPS-samples. Avvisning er forventet signalstøy og
// aldri en feil: verdikten sier hvilken port som slo til, og kalleren
// dropper samplet stille.

use crate::geo::haversine_mi;
use crate::models::{Coordinate, RawFix};
use crate::units::METERS_PER_MILE;

pub const MAX_ACCURACY_M: f64 = 25.0;          // grove/innendørs fixer
pub const MAX_PLAUSIBLE_SPEED_MS: f64 = 12.0;  // ~27 mph, GPS-hopp over dette
pub const MIN_MOVE_MI: f64 = 0.0093;           // ~15 m, jitter-terskel

/// Hvilken port som avviste samplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    Accuracy,
    ImpliedSpeed,
    InsignificantMove,
}

/// Utfall for ett rått sample mot gjeldende anker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Verdict {
    /// Første sample i et segment: aksepteres ubetinget som nytt anker,
    /// uten delta.
    Anchor,
    /// Akseptert, med distanse (mi) og tidssteg (s) fra forrige anker.
    Accepted { distance_mi: f64, dt_s: f64 },
    Rejected(Rejection),
}

/// Portene i rekkefølge: nøyaktighet, implisitt fart, signifikant bevegelse.
/// `anchor` er siste aksepterte koordinat med aksept-tidspunkt (ms);
/// `None` rett etter start/resume.
pub fn evaluate_fix(anchor: Option<(Coordinate, i64)>, fix: &RawFix) -> Verdict {
    if fix.accuracy_m > MAX_ACCURACY_M {
        return Verdict::Rejected(Rejection::Accuracy);
    }

    let Some((prev, prev_ts_ms)) = anchor else {
        return Verdict::Anchor;
    };

    let distance_mi = haversine_mi(prev.lat, prev.lng, fix.lat, fix.lng);
    let dt_s = (fix.timestamp_ms - prev_ts_ms) as f64 / 1000.0;

    // Implisitt fart fra forrige anker. dt <= 0 med reell forflytning er
    // per definisjon et hopp; dt <= 0 uten forflytning faller videre til
    // bevegelsesporten.
    let implied_ms = if dt_s > 0.0 {
        distance_mi * METERS_PER_MILE / dt_s
    } else if distance_mi > 0.0 {
        f64::INFINITY
    } else {
        0.0
    };
    if implied_ms > MAX_PLAUSIBLE_SPEED_MS {
        return Verdict::Rejected(Rejection::ImpliedSpeed);
    }

    if distance_mi < MIN_MOVE_MI {
        return Verdict::Rejected(Rejection::InsignificantMove);
    }

    Verdict::Accepted { distance_mi, dt_s }
}
