//! Geteilte Konfiguration und Konstanten für alle Kernel-Module.

pub mod options;

pub use options::KernelOptions;
