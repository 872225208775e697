// core/src/models.rs
// Datamodellen: råfix fra posisjonstilbyderen, aksepterte koordinater,
// ferdigstilte økter og brukerprofil.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Akseptert GPS-punkt. Immutabelt etter aksept; manglende høyde er et
/// eksplisitt fravær, ikke 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
    pub elevation: Option<f64>, // meter
}

/// Rått posisjonssample slik tilbyderen leverer det, før filtrering.
#[derive(Debug, Clone, Copy)]
pub struct RawFix {
    pub lat: f64,
    pub lng: f64,
    pub elevation: Option<f64>, // meter
    pub speed_ms: Option<f64>,  // enhetsrapportert fart (m/s)
    pub accuracy_m: f64,        // horisontal nøyaktighet
    pub timestamp_ms: i64,      // veggklokke (ms)
}

impl RawFix {
    pub fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.lat,
            lng: self.lng,
            elevation: self.elevation,
        }
    }
}

/// Ferdigstilt økt. Produseres nøyaktig én gang per stoppet økt som
/// passerer minstedistansen, og er immutabel etterpå.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    pub id: String,
    pub date: DateTime<Utc>,
    pub distance_mi: f64,
    pub duration_sec: u32,
    pub pace_min_mi: f64,
    pub avg_power_w: f64,
    pub total_ascent_ft: f64,
    pub path: Vec<Coordinate>,
}

/// Når ølet ble drukket relativt til neste økt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeerTiming {
    DayBefore,
    DayOf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeerLog {
    pub id: String,
    pub date: DateTime<Utc>,
    pub name: String,
    pub style: String,
    pub abv: f64,       // prosent
    pub calories: f64,  // kcal
    pub carbs: f64,     // gram
    pub volume_oz: f64,
    pub timing: BeerTiming,
}

/// Brukerprofil/konfigurasjon. Kroppsvekten leses ved øktstart og holdes
/// fast gjennom økten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub weight_lbs: Option<f64>,
    pub weekly_goal_mi: Option<f64>,
    pub monthly_goal_mi: Option<f64>,
}

/// Fallback-vekt når profilen mangler verdi.
pub const DEFAULT_WEIGHT_LBS: f64 = 175.0;

impl Profile {
    pub fn weight_lbs_or_default(&self) -> f64 {
        self.weight_lbs.unwrap_or(DEFAULT_WEIGHT_LBS)
    }
}
