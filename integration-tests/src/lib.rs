/// Backend location for the smoke tests.
pub mod config;
