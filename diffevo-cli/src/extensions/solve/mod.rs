//! Contains the run configuration and its conversion into the engine.

pub mod config;
