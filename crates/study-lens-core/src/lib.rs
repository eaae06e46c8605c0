//! Core library for study-lens.
//!
//! Turns a block of educational text into study signals: subject area,
//! recommended learning styles, readability, engagement, keywords,
//! flashcards, prerequisites, and a notes template.
//!
//! # Modules
//!
//! - [`analysis`] - The individual signals and the comprehensive analyzer
//! - [`readability`] - Reading-ease score and its interpretation
//! - [`lexicon`] - Subject and learning-style categories with their keywords
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use study_lens_core::{Subject, analyze_comprehensive};
//!
//! let report = analyze_comprehensive("Функция вызывает функцию. Код пишется просто.");
//! assert_eq!(report.subject, Subject::Programming);
//! assert!(report.readability_score <= 100.0);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod ranking;
pub mod readability;
pub mod text;
pub mod word_lists;

pub use analysis::{
    AnalysisReport, analyze_comprehensive, calculate_engagement_score, detect_subject,
    extract_keywords, suggest_learning_style,
};
pub use config::{Config, ConfigLoader, LogLevel};
pub use error::{AnalysisError, AnalysisResult, ConfigError, ConfigResult};
pub use lexicon::{LearningStyle, Subject};
pub use readability::calculate_readability;

/// Default cap on input size accepted by the CLI (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;
