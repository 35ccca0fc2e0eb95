//! Infrastructure layer - file storage, clock, and settings.

pub mod clock;
pub mod file_store;
pub mod ports;
pub mod settings;
