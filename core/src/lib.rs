// core/src/lib.rs
// VelocityMetrics-kjernen: live telemetri-pipeline for løpeøkter
// (GPS-filtrering, kinematisk akkumulering, tilstandsmaskin) pluss
// øktmetrikker og JSON-persistens.

pub mod accumulator;
pub mod errors;
pub mod filter;
pub mod geo;
pub mod metrics;
pub mod models;
pub mod physics;
pub mod recorder;
pub mod session;
pub mod storage;
pub mod units;

pub use accumulator::KinematicAccumulator;
pub use errors::TrackerError;
pub use filter::{evaluate_fix, Rejection, Verdict};
pub use geo::haversine_mi;
pub use models::{BeerLog, BeerTiming, Coordinate, Profile, RawFix, Run};
pub use physics::estimate_power;
pub use recorder::{PathObserver, TrackRecorder};
pub use session::{
    GpsStatus, LiveSnapshot, SessionController, SessionState, MIN_RUN_DISTANCE_MI,
};
pub use storage::{
    load_profile, load_runs, save_profile, JsonRunStore, MemoryRunSink, RunSink,
};
pub use units::{calculate_pace, format_duration, format_pace, RoundTo};
