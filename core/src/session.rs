// core/src/session.rs
// Øktkontrolleren: tilstandsmaskinen Idle -> Tracking <-> Paused -> Stopped,
// med timer-tick og posisjonshendelser som to uavhengige, synkrone
// inngangspunkter. All mutasjon av øktens akkumulatorer skjer her, og kun i
// Tracking. Vertsapplikasjonen eier selve GPS-/timer-abonnementene og
// leverer hendelsene inn (push-modell); tester mater skriptede sekvenser.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Serialize;

use crate::accumulator::KinematicAccumulator;
use crate::errors::TrackerError;
use crate::filter::{evaluate_fix, Verdict};
use crate::models::{RawFix, Run};
use crate::recorder::{PathObserver, TrackRecorder};
use crate::storage::RunSink;
use crate::units::calculate_pace;

/// Økter kortere enn dette regnes som støy/uhell og persisteres ikke.
pub const MIN_RUN_DISTANCE_MI: f64 = 0.01;

/// Timer-oppløsning: ett tick per sekund mens Tracking.
pub const TICK_SECONDS: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Idle,
    Tracking,
    Paused,
    Stopped,
}

/// Posisjonstilbyderens status. NoFix er ikke fatalt; neste gyldige fix
/// gjenoppretter Fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GpsStatus {
    Waiting,
    Fix,
    NoFix,
}

/// Read-only øyeblikksbilde for UI/observatører.
#[derive(Debug, Clone, Serialize)]
pub struct LiveSnapshot {
    pub state: SessionState,
    pub gps: GpsStatus,
    pub duration_sec: u32,
    pub distance_mi: f64,
    pub pace_min_mi: f64,
    pub current_power_w: f64,
    pub total_ascent_ft: f64,
    pub path_len: usize,
    pub rejected_fixes: u64,
}

pub struct SessionController<S: RunSink> {
    sink: S,
    weight_lbs: f64,

    state: SessionState,
    gps: GpsStatus,

    id: String,
    started_at: Option<DateTime<Utc>>,
    duration_sec: u32,
    rejected_fixes: u64,

    acc: KinematicAccumulator,
    recorder: TrackRecorder,
}

impl<S: RunSink> SessionController<S> {
    /// Kontrolleren konstrueres med vekten fra profilen; den holdes fast
    /// for hele øktens levetid.
    pub fn new(weight_lbs: f64, sink: S) -> Self {
        Self {
            sink,
            weight_lbs,
            state: SessionState::Idle,
            gps: GpsStatus::Waiting,
            id: String::new(),
            started_at: None,
            duration_sec: 0,
            rejected_fixes: 0,
            acc: KinematicAccumulator::new(weight_lbs),
            recorder: TrackRecorder::new(),
        }
    }

    /// Som `new`, med kartobservatør koblet på sporet.
    pub fn with_observer(weight_lbs: f64, sink: S, observer: Box<dyn PathObserver>) -> Self {
        let mut ctrl = Self::new(weight_lbs, sink);
        ctrl.recorder = TrackRecorder::with_observer(observer);
        ctrl
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn gps_status(&self) -> GpsStatus {
        self.gps
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Idle -> Tracking: fersk id, alle akkumulatorer nullstilt.
    pub fn start(&mut self) -> Result<(), TrackerError> {
        if self.state != SessionState::Idle {
            return Err(TrackerError::InvalidTransition {
                op: "start",
                state: self.state,
            });
        }

        let now = Utc::now();
        self.id = format!("run-{}", now.timestamp_millis());
        self.started_at = Some(now);
        self.duration_sec = 0;
        self.rejected_fixes = 0;
        self.acc = KinematicAccumulator::new(self.weight_lbs);
        self.recorder.clear();
        self.state = SessionState::Tracking;

        info!("økt {} startet", self.id);
        Ok(())
    }

    /// Tracking -> Paused: fryser timer og inntak, beholder akkumulatorene.
    pub fn pause(&mut self) -> Result<(), TrackerError> {
        if self.state != SessionState::Tracking {
            return Err(TrackerError::InvalidTransition {
                op: "pause",
                state: self.state,
            });
        }
        self.state = SessionState::Paused;
        info!("økt {} pauset ved {:.2} mi", self.id, self.acc.distance_mi());
        Ok(())
    }

    /// Paused -> Tracking: nullstiller ankeret slik at første sample etter
    /// resume ikke gir et fiktivt delta fra posisjonen før pausen.
    pub fn resume(&mut self) -> Result<(), TrackerError> {
        if self.state != SessionState::Paused {
            return Err(TrackerError::InvalidTransition {
                op: "resume",
                state: self.state,
            });
        }
        self.acc.clear_anchor();
        self.state = SessionState::Tracking;
        info!("økt {} gjenopptatt", self.id);
        Ok(())
    }

    /// Tracking|Paused -> Stopped (terminal). Ferdigstiller økten: pace og
    /// snitteffekt beregnes, og recorden sendes til persistens-samarbeideren.
    /// Økter under minstedistansen forkastes stille (Ok(None)).
    pub fn stop(&mut self) -> Result<Option<Run>, TrackerError> {
        match self.state {
            SessionState::Tracking | SessionState::Paused => {}
            _ => {
                return Err(TrackerError::InvalidTransition {
                    op: "stop",
                    state: self.state,
                })
            }
        }
        self.state = SessionState::Stopped;

        let distance_mi = self.acc.distance_mi();
        if distance_mi < MIN_RUN_DISTANCE_MI {
            warn!(
                "økt {} under minstedistansen ({:.4} mi), forkastes",
                self.id, distance_mi
            );
            return Ok(None);
        }

        let run = Run {
            id: self.id.clone(),
            date: self.started_at.unwrap_or_else(Utc::now),
            distance_mi,
            duration_sec: self.duration_sec,
            pace_min_mi: calculate_pace(distance_mi, self.duration_sec),
            avg_power_w: self.acc.avg_power_w(),
            total_ascent_ft: self.acc.ascent_ft(),
            path: self.recorder.path().to_vec(),
        };

        self.sink.save_run(&run)?;
        info!(
            "økt {} lagret: {:.2} mi på {} s",
            run.id, run.distance_mi, run.duration_sec
        );
        Ok(Some(run))
    }

    /// Timer-tick (1 Hz fra verten). Teller kun i Tracking.
    pub fn on_tick(&mut self) {
        if self.state == SessionState::Tracking {
            self.duration_sec += TICK_SECONDS;
        }
    }

    /// Rått posisjonssample fra tilbyderen. Returnerer verdikten, eller
    /// None når hendelsen ignoreres fordi inntaket er avslått (pause/stopp
    /// avbestiller abonnementet; en hendelse som likevel når frem droppes).
    pub fn on_position(&mut self, fix: &RawFix) -> Option<Verdict> {
        if self.state != SessionState::Tracking {
            debug!("posisjon ignorert i tilstand {:?}", self.state);
            return None;
        }

        let verdict = evaluate_fix(self.acc.anchor(), fix);
        match verdict {
            Verdict::Anchor => {
                self.acc.set_anchor(fix.coordinate(), fix.timestamp_ms);
                self.recorder.append(fix.coordinate());
                self.gps = GpsStatus::Fix;
            }
            Verdict::Accepted { distance_mi, dt_s } => {
                self.acc.integrate(fix, distance_mi, dt_s);
                self.recorder.append(fix.coordinate());
                self.gps = GpsStatus::Fix;
            }
            Verdict::Rejected(reason) => {
                self.rejected_fixes += 1;
                debug!("sample avvist ({:?})", reason);
            }
        }
        Some(verdict)
    }

    /// Tilbyderen meldte feil/timeout. Ikke fatalt: status settes til NoFix
    /// og sporing fortsetter i påvente av neste gyldige fix.
    pub fn on_position_error(&mut self) {
        if self.state == SessionState::Tracking {
            warn!("posisjonstilbyder uten fix");
            self.gps = GpsStatus::NoFix;
        }
    }

    pub fn snapshot(&self) -> LiveSnapshot {
        LiveSnapshot {
            state: self.state,
            gps: self.gps,
            duration_sec: self.duration_sec,
            distance_mi: self.acc.distance_mi(),
            pace_min_mi: calculate_pace(self.acc.distance_mi(), self.duration_sec),
            current_power_w: self.acc.current_power_w(),
            total_ascent_ft: self.acc.ascent_ft(),
            path_len: self.recorder.len(),
            rejected_fixes: self.rejected_fixes,
        }
    }

    /// Sporet slik det ser ut nå (append-only, ankomstrekkefølge).
    pub fn path(&self) -> &[crate::models::Coordinate] {
        self.recorder.path()
    }

    /// Effekthistorikken, ett sample per akseptert ikke-anker-punkt.
    pub fn powers_w(&self) -> &[f64] {
        self.acc.powers_w()
    }
}
