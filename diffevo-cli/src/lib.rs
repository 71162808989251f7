//! A command line interface library for the differential evolution engine: it contains the run
//! configuration and the logic to solve a built-in optimization problem from it.

#![warn(missing_docs)]

#[cfg(test)]
#[path = "../tests/features/mod.rs"]
mod features;

#[cfg(test)]
#[path = "../tests/unit/lib_test.rs"]
mod lib_test;

pub use diffevo;

pub mod extensions;

use diffevo::prelude::*;
use serde::Serialize;
use std::io::{BufWriter, Write};

/// A result of the run which is written as json.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    /// Cost of the best individual.
    pub cost: Float,
    /// Variables of the best individual.
    pub vars: Vec<Float>,
    /// Amount of completed generations.
    pub generations: usize,
}

impl SolveResult {
    /// Creates a result from the best individual of the run.
    pub fn new(best: &Individual, generations: usize) -> Result<Self, String> {
        let cost = best.cost().ok_or_else(|| "best individual is not evaluated".to_string())?;

        Ok(Self { cost, vars: best.vars().to_vec(), generations })
    }
}

/// Writes the result in json format.
pub fn write_result<W: Write>(result: &SolveResult, writer: &mut BufWriter<W>) -> Result<(), String> {
    serde_json::to_writer_pretty(&mut *writer, result).map_err(|err| format!("cannot serialize result: '{err}'"))?;
    writer.flush().map_err(|err| format!("cannot write result: '{err}'"))
}
