//! drawn-classifiers: inference engine for human-drawn polygon models.
//!
//! This crate turns polygons drawn on 2-D scatterplots into predictive
//! models. Each chart pairs two named features and carries, per class label,
//! the rings a person drew for that class; classifying a row means counting
//! how many polygons contain its projection onto each chart's axis pair.
//! The same vote counts back a probabilistic classifier, a threshold-based
//! outlier detector, and a count-matrix featurizer, all behind one estimator
//! lifecycle so they compose with model-selection tooling that clones,
//! refits, and introspects them.
//!
//! The design favors small, testable modules: geometry, chart parsing, vote
//! counting, and the scoring models are separate layers, and the chart
//! descriptions stay the single source of truth (polygon records are derived
//! on demand, never cached).
pub mod chart;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod geometry;
pub mod io;
pub mod models;
pub mod voting;
