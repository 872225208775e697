// core/src/errors.rs
// Typede feil for biblioteket. Forventet GPS-støy er IKKE en feil og går
// aldri denne veien; den håndteres som verdikter i filter-modulen.

use thiserror::Error;

use crate::session::SessionState;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("ugyldig overgang: {op} i tilstand {state:?}")]
    InvalidTransition {
        op: &'static str,
        state: SessionState,
    },

    #[error("lagrings-I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("lagringsformat: {0}")]
    Encoding(#[from] serde_json::Error),
}
