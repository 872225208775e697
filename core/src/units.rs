// core/src/units.rs
// Enhetskonvertering og formattering. Hele kjernen regner i US customary
// (miles/pounds/feet) slik appen presenterer tallene.

pub const METERS_TO_MILES: f64 = 0.000_621_371;
pub const METERS_TO_FEET: f64 = 3.28084;
pub const LBS_TO_KG: f64 = 0.453_592;
pub const METERS_PER_MILE: f64 = 1609.34;

// --- RoundTo trait (offentlig, brukt av metrics og tester) ---
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Snittpace (min/mi). Definert som 0 når distansen er 0.
pub fn calculate_pace(distance_mi: f64, duration_sec: u32) -> f64 {
    if distance_mi <= 0.0 {
        return 0.0;
    }
    (duration_sec as f64 / 60.0) / distance_mi
}

/// Pace som "M:SS". 0/ikke-finite gir "0:00".
pub fn format_pace(pace_min_mi: f64) -> String {
    if !pace_min_mi.is_finite() || pace_min_mi <= 0.0 {
        return "0:00".to_string();
    }
    let mut mins = pace_min_mi.floor() as u64;
    let mut secs = ((pace_min_mi - mins as f64) * 60.0).round() as u64;
    // 59.6s runder opp til 60 -> bikk over i neste minutt
    if secs == 60 {
        mins += 1;
        secs = 0;
    }
    format!("{}:{:02}", mins, secs)
}

/// Varighet som "MM:SS", eller "HH:MM:SS" over en time.
pub fn format_duration(seconds: u32) -> String {
    let h = seconds / 3600;
    let m = (seconds % 3600) / 60;
    let s = seconds % 60;
    if h > 0 {
        format!("{:02}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}
