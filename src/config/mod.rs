//! Config module — project-level settings loaded from `.passkeep.toml`.

pub mod settings;

pub use settings::Settings;
