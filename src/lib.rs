//! Cognitive Learning Pattern Analyzer
//!
//! Backend for a learning platform. Learners answer behavioral and
//! technical questions; each submission refreshes a cognitive profile
//! (skill tier, learning style, study strategy) that drives course
//! recommendations and progress analytics.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
