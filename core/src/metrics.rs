// core/src/metrics.rs
// Aggregering over ferdigstilte økter: dashboard-totaler, målprogresjon og
// korrelasjonen mellom øl-inntak dagen før og påfølgende pace.

use chrono::{DateTime, Datelike, Duration, Utc};

use crate::models::{BeerLog, Run};
use crate::units::RoundTo;

/// Etanoltetthet (g/ml) og fluid ounce i ml, for etanolmasse fra volum+ABV.
pub const ETHANOL_DENSITY_G_PER_ML: f64 = 0.789;
pub const OZ_TO_ML: f64 = 29.57;

/// Empirisk "pace tax": sekunder per mile per gram etanol.
pub const PACE_TAX_SEC_PER_GRAM: f64 = 0.15;

#[derive(Debug, Clone, Copy, Default)]
pub struct RunTotals {
    pub total_miles: f64,
    pub yearly_miles: f64,
    pub total_duration_sec: u64,
    pub avg_power_w: f64,
    pub total_ascent_ft: f64,
}

pub fn run_totals(runs: &[Run], year: i32) -> RunTotals {
    let mut t = RunTotals::default();
    for r in runs {
        t.total_miles += r.distance_mi;
        t.total_duration_sec += u64::from(r.duration_sec);
        t.total_ascent_ft += r.total_ascent_ft;
        if r.date.year() == year {
            t.yearly_miles += r.distance_mi;
        }
    }
    if !runs.is_empty() {
        t.avg_power_w = runs.iter().map(|r| r.avg_power_w).sum::<f64>() / runs.len() as f64;
    }
    t
}

#[derive(Debug, Clone, Copy)]
pub struct GoalProgress {
    pub distance_mi: f64,
    pub percent: f64, // cappet til 100
}

fn progress(distance_mi: f64, goal_mi: f64) -> GoalProgress {
    let percent = if goal_mi > 0.0 {
        ((distance_mi / goal_mi) * 100.0).min(100.0)
    } else {
        0.0
    };
    GoalProgress { distance_mi, percent }
}

/// Miles siste 7 døgn mot ukesmål.
pub fn weekly_progress(runs: &[Run], goal_mi: f64, now: DateTime<Utc>) -> GoalProgress {
    let week_ago = now - Duration::days(7);
    let dist = runs
        .iter()
        .filter(|r| r.date >= week_ago)
        .map(|r| r.distance_mi)
        .sum();
    progress(dist, goal_mi)
}

/// Miles siden månedsstart mot månedsmål.
pub fn monthly_progress(runs: &[Run], goal_mi: f64, now: DateTime<Utc>) -> GoalProgress {
    let dist = runs
        .iter()
        .filter(|r| r.date.year() == now.year() && r.date.month() == now.month())
        .map(|r| r.distance_mi)
        .sum();
    progress(dist, goal_mi)
}

/// Pearsons r over (x, y)-par. 0 ved < 2 punkter eller null-varians.
pub fn pearson_r(data: &[(f64, f64)]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let n = data.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0, 0.0, 0.0);
    for &(x, y) in data {
        sum_x += x;
        sum_y += y;
        sum_xy += x * y;
        sum_x2 += x * x;
        sum_y2 += y * y;
    }
    let numerator = n * sum_xy - sum_x * sum_y;
    let denominator = ((n * sum_x2 - sum_x * sum_x) * (n * sum_y2 - sum_y * sum_y)).sqrt();
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Par (øl-kalorier dagen før, pace) for økter som har øl logget på
/// kalenderdagen før øktdatoen. Økter uten match utelates.
pub fn beer_pace_pairs(runs: &[Run], logs: &[BeerLog]) -> Vec<(f64, f64)> {
    let mut pairs = Vec::new();
    for run in runs {
        let day_prior = run.date.date_naive() - Duration::days(1);
        let calories: f64 = logs
            .iter()
            .filter(|b| b.date.date_naive() == day_prior)
            .map(|b| b.calories)
            .sum();
        if calories > 0.0 {
            pairs.push((calories, run.pace_min_mi.round_to(2)));
        }
    }
    pairs
}

/// Korrelasjon (Pearsons r) mellom øl-kalorier dagen før og pace.
pub fn beer_pace_correlation(runs: &[Run], logs: &[BeerLog]) -> f64 {
    pearson_r(&beer_pace_pairs(runs, logs))
}

/// Etanolmasse (g) = volum (oz) · ABV/100 · 0.789 g/ml · 29.57 ml/oz.
pub fn ethanol_grams(volume_oz: f64, abv_pct: f64) -> f64 {
    volume_oz * (abv_pct / 100.0) * ETHANOL_DENSITY_G_PER_ML * OZ_TO_ML
}

/// Estimert pace-kostnad (s/mi) fra samlet etanolinntak.
pub fn pace_tax_sec_per_mi(logs: &[BeerLog]) -> f64 {
    let total_ethanol: f64 = logs
        .iter()
        .map(|b| ethanol_grams(b.volume_oz, b.abv))
        .sum();
    total_ethanol * PACE_TAX_SEC_PER_GRAM
}
