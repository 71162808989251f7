//! Contains extensions which are used by the command line interface.

pub mod solve;
