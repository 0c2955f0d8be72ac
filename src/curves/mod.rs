//! Kurven-Evaluatoren: Linear, Catmull-Rom, uniformer B-Spline und Eckenrundung.
//!
//! `evaluate_curve` wählt anhand des `CurveStyle` genau einen Evaluator aus und
//! liefert die darstellbare Polyline.

pub mod bspline;
pub mod catmull_rom;
pub mod fillet;
pub mod linear;

use crate::core::{Path, Point};
use crate::shared::options::{
    DEFAULT_BSPLINE_DEGREE, DEFAULT_RADIUS_VALUE, DEFAULT_SEGMENTS, DEFAULT_TENSION,
};
use serde::{Deserialize, Serialize};

pub use bspline::uniform_b_spline;
pub use catmull_rom::{catmull_rom, catmull_rom_segments, CatmullRomSegment};
pub use fillet::{fillet_path, inscribed_fillet_path, Corner, CornerShape};
pub use linear::resample_linear;

/// Interpretation des Rundungsradius
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RadiusMode {
    /// Fester Radius in Zeichnungseinheiten
    Absolute,
    /// Anteil (0..1) der halben kürzeren Nachbarkante
    #[default]
    Relative,
}

/// Kurvenfamilie inklusive ihrer Parameter.
///
/// Ungültige Werte (Spannung außerhalb `[0,1]`, Grad außerhalb `[1,5]`,
/// negativer Radius, 0 Segmente) werden bei der Auswertung begrenzt, nie abgelehnt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurveStyle {
    /// Gerade Kanten, gleichmäßig unterteilt
    Linear { segments_per_edge: usize },
    /// Interpolierender kubischer Spline durch alle Punkte
    CatmullRom {
        tension: f64,
        segments_per_edge: usize,
    },
    /// Approximierender uniformer B-Spline
    BSpline { degree: u32, segments_per_piece: usize },
    /// Polyline mit gerundeten Ecken
    Fillet {
        mode: RadiusMode,
        value: f64,
        segments_per_arc: usize,
        /// `true` = Kreisbogen durch den Vertex, `false` = affine Viertel-Ellipse
        exact: bool,
    },
}

impl Default for CurveStyle {
    fn default() -> Self {
        CurveStyle::CatmullRom {
            tension: DEFAULT_TENSION,
            segments_per_edge: DEFAULT_SEGMENTS,
        }
    }
}

impl CurveStyle {
    /// B-Spline-Stil aus einem beliebigen (z.B. per Slider gesetzten) Grad.
    ///
    /// Der Grad wird gerundet und auf `[1, 5]` begrenzt.
    pub fn b_spline(degree: f64, segments_per_piece: usize) -> Self {
        let degree = if degree.is_finite() {
            degree.round().clamp(1.0, 5.0) as u32
        } else {
            DEFAULT_BSPLINE_DEGREE
        };
        CurveStyle::BSpline {
            degree,
            segments_per_piece,
        }
    }

    /// Rundungs-Stil mit Standardwerten (relativ, affine Näherung).
    pub fn default_fillet() -> Self {
        CurveStyle::Fillet {
            mode: RadiusMode::Relative,
            value: DEFAULT_RADIUS_VALUE,
            segments_per_arc: DEFAULT_SEGMENTS,
            exact: false,
        }
    }

    /// Läuft die Kurve exakt durch ihre Stützpunkte?
    ///
    /// Interpolierende Kurven werden an Junction-Enden gekürzt, approximierende nicht.
    pub fn is_interpolating(&self) -> bool {
        match self {
            CurveStyle::Linear { .. } | CurveStyle::CatmullRom { .. } => true,
            CurveStyle::BSpline { degree, .. } => *degree <= 1,
            CurveStyle::Fillet { .. } => false,
        }
    }

    /// Kurzname für Logs.
    pub fn name(&self) -> &'static str {
        match self {
            CurveStyle::Linear { .. } => "linear",
            CurveStyle::CatmullRom { .. } => "catmull_rom",
            CurveStyle::BSpline { .. } => "b_spline",
            CurveStyle::Fillet { .. } => "fillet",
        }
    }
}

/// Wertet einen Path mit dem gewählten Stil aus.
///
/// Pfade mit weniger als 2 Punkten werden unverändert zurückgegeben.
pub fn evaluate_curve(path: &Path, style: &CurveStyle) -> Vec<Point> {
    let points = path.points.as_slice();
    if points.len() < 2 {
        return points.to_vec();
    }

    let result = match *style {
        CurveStyle::Linear { segments_per_edge } => {
            resample_linear(points, path.closed, segments_per_edge)
        }
        CurveStyle::CatmullRom {
            tension,
            segments_per_edge,
        } => catmull_rom(points, path.closed, tension, segments_per_edge),
        CurveStyle::BSpline {
            degree,
            segments_per_piece,
        } => uniform_b_spline(points, path.closed, degree, segments_per_piece),
        CurveStyle::Fillet {
            mode,
            value,
            segments_per_arc,
            exact,
        } => fillet_path(points, path.closed, mode, value, segments_per_arc, exact),
    };

    log::trace!(
        "evaluate_curve: {} Punkte ({}) → {} Punkte",
        points.len(),
        style.name(),
        result.len()
    );
    result
}
