//! Zentrale Konfiguration für den Kurven-Kernel.
//!
//! `KernelOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Abtastung ───────────────────────────────────────────────────────

/// Standard-Anzahl Teilsegmente pro Kante bzw. Bogen.
pub const DEFAULT_SEGMENTS: usize = 16;
/// Standard-Spannung für Catmull-Rom (0 = locker, 1 = linear).
pub const DEFAULT_TENSION: f64 = 0.5;
/// Standard-Grad für B-Splines.
pub const DEFAULT_BSPLINE_DEGREE: u32 = 3;
/// Standard-Radius (relativ) für Eckenrundung.
pub const DEFAULT_RADIUS_VALUE: f64 = 0.5;

// ── Numerische Schwellen ────────────────────────────────────────────

/// Kanten kürzer als dieser Wert gelten als entartet.
pub const LENGTH_EPSILON: f64 = 1e-6;
/// Knickwinkel näher als dieser Wert an 0 oder π werden nicht gerundet.
pub const ANGLE_EPSILON: f64 = 1e-4;
/// Schwelle für die Umkreis-Determinante.
pub const CIRCLE_DETERMINANT_EPSILON: f64 = 1e-8;
/// Schwelle für Knoten-Nenner in der de-Boor-Rekursion.
pub const KNOT_EPSILON: f64 = 1e-12;
/// Faces mit kleinerer Fläche werden verworfen.
pub const AREA_EPSILON: f64 = 1e-9;

// ── Graph-Zerlegung ─────────────────────────────────────────────────

/// Schrittbudget der Face-Suche als Vielfaches der Kantenanzahl.
pub const FACE_STEP_BUDGET_FACTOR: usize = 4;
/// Differenz, unterhalb der zwei Junction-Paarungen als gleichwertig gelten.
pub const PAIRING_TIE_EPSILON: f64 = 1e-9;
/// Anteil der Endkante, um den Junction-Enden vor der Auswertung gekürzt werden.
pub const JUNCTION_TRIM_FRACTION: f64 = 0.5;

/// Alle zur Laufzeit änderbaren Kernel-Optionen.
/// Wird vom Aufrufer typischerweise als `curve_kernel.toml` abgelegt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KernelOptions {
    /// Schrittbudget der Face-Suche (× Kantenanzahl)
    #[serde(default = "default_face_step_budget_factor")]
    pub face_step_budget_factor: usize,
    /// Gleichstand-Schwelle der Junction-Paarung
    #[serde(default = "default_pairing_tie_epsilon")]
    pub pairing_tie_epsilon: f64,
    /// Kürzungsanteil für Junction-Enden interpolierender Kurven (0..1)
    #[serde(default = "default_junction_trim_fraction")]
    pub junction_trim_fraction: f64,
}

impl Default for KernelOptions {
    fn default() -> Self {
        Self {
            face_step_budget_factor: FACE_STEP_BUDGET_FACTOR,
            pairing_tie_epsilon: PAIRING_TIE_EPSILON,
            junction_trim_fraction: JUNCTION_TRIM_FRACTION,
        }
    }
}

/// Serde-Default für `face_step_budget_factor`.
fn default_face_step_budget_factor() -> usize {
    FACE_STEP_BUDGET_FACTOR
}

/// Serde-Default für `pairing_tie_epsilon`.
fn default_pairing_tie_epsilon() -> f64 {
    PAIRING_TIE_EPSILON
}

/// Serde-Default für `junction_trim_fraction`.
fn default_junction_trim_fraction() -> f64 {
    JUNCTION_TRIM_FRACTION
}

impl KernelOptions {
    /// Parst Optionen aus einem TOML-String.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        Ok(opts)
    }

    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Kernel-Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Kernel-Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Effektives Schrittbudget der Face-Suche für `edge_count` Kanten.
    pub fn face_step_budget(&self, edge_count: usize) -> usize {
        self.face_step_budget_factor.max(1) * edge_count.max(1)
    }

    /// Auf `[0, 1]` begrenzter Kürzungsanteil.
    pub fn trim_fraction(&self) -> f64 {
        self.junction_trim_fraction.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_survive_toml_round_trip() {
        let opts = KernelOptions::default();
        let text = toml::to_string_pretty(&opts).expect("Serialisierung");
        let back = KernelOptions::from_toml_str(&text).expect("Parse");
        assert_eq!(back, opts);
        // Nur numerische Kernel-Werte, kein Kurvenstil
        assert_eq!(text.lines().filter(|l| l.contains('=')).count(), 3);
        assert!(!text.contains("type"));
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let text = r#"
            junction_trim_fraction = 0.25
        "#;
        let opts = KernelOptions::from_toml_str(text).expect("Parse");
        assert_eq!(opts.face_step_budget_factor, FACE_STEP_BUDGET_FACTOR);
        assert_eq!(opts.pairing_tie_epsilon, PAIRING_TIE_EPSILON);
        assert_eq!(opts.junction_trim_fraction, 0.25);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(KernelOptions::from_toml_str("junction_trim_fraction = \"halb\"").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back_to_defaults() {
        let opts = KernelOptions::load_from_file(std::path::Path::new(
            "/nonexistent/curve_kernel_options.toml",
        ));
        assert_eq!(opts, KernelOptions::default());
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!(
            "curve_kernel_options_{}.toml",
            std::process::id()
        ));
        let opts = KernelOptions {
            junction_trim_fraction: 0.3,
            ..KernelOptions::default()
        };
        opts.save_to_file(&path).expect("Speichern");
        let loaded = KernelOptions::load_from_file(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, opts);
    }

    #[test]
    fn test_budget_and_trim_are_clamped() {
        let opts = KernelOptions {
            face_step_budget_factor: 0,
            junction_trim_fraction: 3.0,
            ..KernelOptions::default()
        };
        assert_eq!(opts.face_step_budget(0), 1);
        assert_eq!(opts.trim_fraction(), 1.0);
    }
}
