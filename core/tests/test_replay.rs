// core/tests/test_replay.rs
// Spiller av et skriptet GPS-spor fra CSV gjennom kontrolleren og sjekker
// akkumuleringsegenskapene: distanse = sum av parvise haversine-avstander
// mellom aksepterte punkter, og stigning = sum av kun positive høydedeltaer.

use serde::Deserialize;

use velocitymetrics_core::units::METERS_TO_FEET;
use velocitymetrics_core::{
    haversine_mi, Coordinate, MemoryRunSink, RawFix, SessionController,
};

#[derive(Debug, Deserialize)]
struct TraceRow {
    ts_ms: i64,
    lat: f64,
    lng: f64,
    elevation_m: Option<f64>,
    speed_ms: Option<f64>,
    accuracy_m: f64,
}

// Ett sample per 10 s. Radene med grov nøyaktighet, GPS-hopp og jitter skal
// avvises; resten aksepteres i rekkefølge.
const TRACE_CSV: &str = "\
ts_ms,lat,lng,elevation_m,speed_ms,accuracy_m
0,59.0000,10.0,100.0,,5.0
10000,59.0002,10.0,102.0,,5.0
20000,59.0004,10.0,101.0,,5.0
30000,59.0006,10.0,103.0,,40.0
40000,59.0006,10.0,103.0,,5.0
50000,59.1000,10.0,150.0,,5.0
60000,59.0008,10.0,104.0,,5.0
70000,59.00085,10.0,104.0,,5.0
80000,59.0010,10.0,103.0,,5.0
";

fn replay() -> (SessionController<MemoryRunSink>, Vec<TraceRow>) {
    let mut rdr = csv::Reader::from_reader(TRACE_CSV.as_bytes());
    let rows: Vec<TraceRow> = rdr
        .deserialize()
        .collect::<Result<_, _>>()
        .expect("gyldig CSV-spor");

    let mut ctrl = SessionController::new(175.0, MemoryRunSink::new());
    ctrl.start().unwrap();

    for row in &rows {
        ctrl.on_position(&RawFix {
            lat: row.lat,
            lng: row.lng,
            elevation: row.elevation_m,
            speed_ms: row.speed_ms,
            accuracy_m: row.accuracy_m,
            timestamp_ms: row.ts_ms,
        });
        for _ in 0..10 {
            ctrl.on_tick();
        }
    }
    (ctrl, rows)
}

fn pairwise_haversine(path: &[Coordinate]) -> f64 {
    path.windows(2)
        .map(|w| haversine_mi(w[0].lat, w[0].lng, w[1].lat, w[1].lng))
        .sum()
}

#[test]
fn distance_equals_sum_of_pairwise_haversine() {
    let (ctrl, _) = replay();
    let snap = ctrl.snapshot();

    // Avvist: rad 3 (nøyaktighet 40), rad 5 (hopp ~1.1 km/10 s),
    // rad 7 (jitter ~5.5 m)
    assert_eq!(snap.rejected_fixes, 3);
    assert_eq!(snap.path_len, 6);

    let expected = pairwise_haversine(ctrl.path());
    assert!(
        (snap.distance_mi - expected).abs() < 1e-12,
        "distanse {} != sum parvis haversine {}",
        snap.distance_mi,
        expected
    );
}

#[test]
fn ascent_sums_only_positive_deltas() {
    let (ctrl, _) = replay();

    // Aksepterte høyder: 100 -> 102 -> 101 -> 103 -> 104 -> 103.
    // Positive deltaer: 2 + 2 + 1 = 5 m.
    let expected_ft = 5.0 * METERS_TO_FEET;
    assert!((ctrl.snapshot().total_ascent_ft - expected_ft).abs() < 1e-9);
}

#[test]
fn power_history_is_one_behind_path() {
    let (mut ctrl, _) = replay();

    // Ingen effektsample for det aller første ankerpunktet
    assert_eq!(ctrl.powers_w().len(), ctrl.path().len() - 1);

    let run = ctrl.stop().unwrap().expect("sporet er langt nok");
    assert_eq!(run.path.len(), 6);
    assert_eq!(run.duration_sec, 90);
    assert!(run.avg_power_w > 0.0, "implisitt fart gir positiv effekt");
    assert!(run.pace_min_mi > 0.0);
}
