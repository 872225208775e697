// core/src/recorder.rs
// Append-only spor av aksepterte koordinater. Ingen filtrering her; den
// registrerer kun det GeoSampleFilter allerede har sluppet gjennom.

use crate::models::Coordinate;

/// Konsument av nye sporpunkter (kart/visualisering). Leser kun; muterer
/// aldri kjerne-tilstand.
pub trait PathObserver {
    fn on_point(&mut self, point: &Coordinate);
}

#[derive(Default)]
pub struct TrackRecorder {
    path: Vec<Coordinate>,
    observer: Option<Box<dyn PathObserver>>,
}

impl std::fmt::Debug for TrackRecorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackRecorder")
            .field("path_len", &self.path.len())
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl TrackRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Box<dyn PathObserver>) -> Self {
        Self {
            path: Vec::new(),
            observer: Some(observer),
        }
    }

    pub fn append(&mut self, coord: Coordinate) {
        self.path.push(coord);
        if let Some(obs) = self.observer.as_mut() {
            obs.on_point(&coord);
        }
    }

    /// Read-only snapshot av sporet, i ankomstrekkefølge.
    pub fn path(&self) -> &[Coordinate] {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn last(&self) -> Option<&Coordinate> {
        self.path.last()
    }

    pub fn clear(&mut self) {
        self.path.clear();
    }

    pub fn into_path(self) -> Vec<Coordinate> {
        self.path
    }
}
