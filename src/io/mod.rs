//! Import/export helpers for derived views.

pub mod export;
