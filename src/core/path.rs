//! Geordnete Punktfolge mit Offen/Geschlossen-Flag.

use super::Point;
use serde::{Deserialize, Serialize};

/// Eine Punktfolge, die einem Evaluator übergeben wird.
///
/// Bei `closed = true` ist der letzte Punkt implizit mit dem ersten verbunden;
/// der Schlusspunkt wird nie doppelt gespeichert.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    /// Stützpunkte in Reihenfolge
    pub points: Vec<Point>,
    /// Geschlossener Umlauf
    #[serde(default)]
    pub closed: bool,
}

impl Path {
    /// Erstellt einen Path. Ein bei geschlossenen Pfaden doppelt angegebener
    /// Schlusspunkt wird verworfen.
    pub fn new(mut points: Vec<Point>, closed: bool) -> Self {
        if closed && points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        Self { points, closed }
    }

    /// Offener Path.
    pub fn open(points: Vec<Point>) -> Self {
        Self::new(points, false)
    }

    /// Geschlossener Path.
    pub fn closed(points: Vec<Point>) -> Self {
        Self::new(points, true)
    }

    /// Anzahl der Stützpunkte
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Prüft ob der Path keine Punkte hat
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anzahl der Kanten (`N` bei geschlossenen, `N-1` bei offenen Pfaden).
    pub fn edge_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }
}
