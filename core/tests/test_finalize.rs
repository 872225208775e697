// core/tests/test_finalize.rs
// Ferdigstilling: minstedistanse, pace/snitteffekt og selve run-recorden.

use velocitymetrics_core::physics::{CDA_RUN, CR_RUN, G, RHO};
use velocitymetrics_core::units::LBS_TO_KG;
use velocitymetrics_core::{
    calculate_pace, estimate_power, MemoryRunSink, RawFix, SessionController,
};

fn fix(lat: f64, lng: f64, speed_ms: Option<f64>, ts_ms: i64) -> RawFix {
    RawFix {
        lat,
        lng,
        elevation: None,
        speed_ms,
        accuracy_m: 5.0,
        timestamp_ms: ts_ms,
    }
}

#[test]
fn stop_without_samples_emits_nothing() {
    let mut ctrl = SessionController::new(175.0, MemoryRunSink::new());
    ctrl.start().unwrap();
    ctrl.on_tick();

    let emitted = ctrl.stop().unwrap();
    assert!(emitted.is_none(), "null distanse skal forkastes");
    assert!(ctrl.sink().runs.is_empty());
}

#[test]
fn stop_with_only_anchor_emits_nothing() {
    let mut ctrl = SessionController::new(175.0, MemoryRunSink::new());
    ctrl.start().unwrap();
    ctrl.on_position(&fix(59.0, 10.0, None, 0));
    ctrl.on_tick();

    let emitted = ctrl.stop().unwrap();
    assert!(emitted.is_none());
    assert!(ctrl.sink().runs.is_empty());
}

#[test]
fn short_session_below_threshold_is_discarded() {
    let mut ctrl = SessionController::new(175.0, MemoryRunSink::new());
    ctrl.start().unwrap();

    // Ett marginalt delta: ~16 m = 0.00996 mi. Akseptert av
    // bevegelsesporten (>= 15 m) men under minstedistansen 0.01 mi.
    ctrl.on_position(&fix(59.0, 10.0, None, 0));
    ctrl.on_position(&fix(59.000144, 10.0, None, 10_000)); // ~16 m = 0.00996 mi

    let emitted = ctrl.stop().unwrap();
    assert!(
        emitted.is_none(),
        "0.00996 mi er under minstedistansen 0.01 mi"
    );
    assert!(ctrl.sink().runs.is_empty());
}

#[test]
fn finalized_run_has_pace_avg_power_and_path() {
    let mut ctrl = SessionController::new(175.0, MemoryRunSink::new());
    ctrl.start().unwrap();

    ctrl.on_position(&fix(59.0, 10.0, Some(3.0), 0));
    for _ in 0..10 {
        ctrl.on_tick();
    }
    ctrl.on_position(&fix(59.0002, 10.0, Some(3.0), 10_000));
    for _ in 0..10 {
        ctrl.on_tick();
    }
    ctrl.on_position(&fix(59.0004, 10.0, Some(3.0), 20_000));

    let run = ctrl.stop().unwrap().expect("økten skal persisteres");

    assert_eq!(run.duration_sec, 20);
    assert_eq!(run.path.len(), 3);
    assert!(run.distance_mi > 0.02);
    assert!(
        (run.pace_min_mi - calculate_pace(run.distance_mi, 20)).abs() < 1e-12
    );

    // Flat mark, enhetsfart 3 m/s: begge effektsamples er identiske, så
    // snittet er formelverdien
    let expected = estimate_power(175.0, 3.0, 0.0);
    assert!((run.avg_power_w - expected).abs() < 1e-9);

    // Én record i sinken, nøklet på samme id
    assert_eq!(ctrl.sink().runs.len(), 1);
    assert_eq!(ctrl.sink().runs[0].id, run.id);
}

#[test]
fn power_formula_exact_value() {
    // 175 lbs, 3 m/s, grade 0:
    // P = (m·g·Cr + ½·ρ·CdA·v²)·v med m = 175·0.453592
    let mass_kg = 175.0 * LBS_TO_KG;
    let expected = (mass_kg * G * CR_RUN + 0.5 * RHO * CDA_RUN * 9.0) * 3.0;

    let p = estimate_power(175.0, 3.0, 0.0);
    assert!((p - expected).abs() < 1e-12);
    assert!((p - 31.6299).abs() < 1e-3, "fasitverdi ≈ 31.63 W, fikk {}", p);
}

#[test]
fn pace_is_zero_when_distance_is_zero() {
    assert_eq!(calculate_pace(0.0, 1800), 0.0);
    assert!((calculate_pace(3.0, 1800) - 10.0).abs() < 1e-12);
}
