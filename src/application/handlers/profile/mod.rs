//! Cognitive profile application services.

mod profile_manager;

pub use profile_manager::ProfileManager;
