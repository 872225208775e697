// core/src/storage.rs
// Persistens-samarbeidere: brukerprofil og ferdigstilte økter som JSON på
// disk, pluss en minnevariant for tester. Kjernens ansvar slutter ved at
// recorden er produsert; retry/fallback er samarbeiderens sak.

use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::errors::TrackerError;
use crate::models::{Profile, Run};

/// Mottaker av ferdigstilte økter (persistens-samarbeideren).
pub trait RunSink {
    fn save_run(&mut self, run: &Run) -> Result<(), TrackerError>;
}

/// Leser profil fra disk (JSON). Mangler filen returneres default-profil.
pub fn load_profile(path: &str) -> Result<Profile, TrackerError> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let profile: Profile = serde_json::from_str(&contents)?;
        info!("profil lastet fra {}", path);
        Ok(profile)
    } else {
        warn!("fant ikke profil på {}, returnerer default", path);
        Ok(Profile::default())
    }
}

/// Lagrer profil til disk som JSON (pretty-print).
pub fn save_profile(profile: &Profile, path: &str) -> Result<(), TrackerError> {
    let json = serde_json::to_string_pretty(profile)?;
    std::fs::write(path, json)?;
    info!("profil lagret til {}", path);
    Ok(())
}

/// Leser alle lagrede økter. Mangler filen returneres tom liste.
pub fn load_runs(path: &str) -> Result<Vec<Run>, TrackerError> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let runs: Vec<Run> = serde_json::from_str(&contents)?;
        Ok(runs)
    } else {
        Ok(Vec::new())
    }
}

/// JSON-fil med økter, nøklet på økt-id. Append-only: en id skrives aldri
/// to ganger.
#[derive(Debug)]
pub struct JsonRunStore {
    path: PathBuf,
}

impl JsonRunStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn runs(&self) -> Result<Vec<Run>, TrackerError> {
        load_runs(&self.path.to_string_lossy())
    }
}

impl RunSink for JsonRunStore {
    fn save_run(&mut self, run: &Run) -> Result<(), TrackerError> {
        let mut runs = self.runs()?;
        if runs.iter().any(|r| r.id == run.id) {
            warn!("økt {} finnes allerede i {}, hopper over", run.id, self.path.display());
            return Ok(());
        }
        runs.push(run.clone());
        let json = serde_json::to_string_pretty(&runs)?;
        std::fs::write(&self.path, json)?;
        info!("økt {} lagret i {}", run.id, self.path.display());
        Ok(())
    }
}

/// Minnebasert sink for tester og skript.
#[derive(Debug, Default)]
pub struct MemoryRunSink {
    pub runs: Vec<Run>,
}

impl MemoryRunSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RunSink for MemoryRunSink {
    fn save_run(&mut self, run: &Run) -> Result<(), TrackerError> {
        self.runs.push(run.clone());
        Ok(())
    }
}
