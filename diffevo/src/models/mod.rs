//! Contains models of candidate solutions: individuals and their population.

mod individual;
pub use self::individual::Individual;

mod population;
pub use self::population::Population;
