//! The selection module contains logic which decides which individuals survive to the next generation.

#[cfg(test)]
#[path = "../tests/unit/selection_test.rs"]
mod selection_test;

use crate::models::Individual;
use crate::utils::compare_floats;
use std::cmp::Ordering;

/// A selection strategy which chooses survivors among parents and their trials.
pub trait SelectionStrategy: Send + Sync {
    /// Chooses a survivor between parent and its child.
    fn select(&self, parent: Individual, child: Individual, minimize: bool) -> Individual;

    /// Chooses survivors of the whole generation: parents and children are paired by index.
    /// The amount of survivors is always equal to the amount of parents.
    fn select_generation(&self, parents: Vec<Individual>, children: Vec<Individual>, minimize: bool) -> Vec<Individual> {
        assert_eq!(parents.len(), children.len());

        parents.into_iter().zip(children).map(|(parent, child)| self.select(parent, child, minimize)).collect()
    }
}

/// Keeps the better one of a parent and its child, the parent wins on equal cost.
#[derive(Default)]
pub struct BestParentChildSelection;

impl SelectionStrategy for BestParentChildSelection {
    fn select(&self, parent: Individual, child: Individual, minimize: bool) -> Individual {
        if parent.better_or_equal(&child, minimize) { parent } else { child }
    }
}

/// Merges parents and children and keeps the best of them. Among individuals with equal cost,
/// parents are preferred and the original order is kept.
#[derive(Default)]
pub struct ElitistSelection;

impl SelectionStrategy for ElitistSelection {
    fn select(&self, parent: Individual, child: Individual, minimize: bool) -> Individual {
        BestParentChildSelection.select(parent, child, minimize)
    }

    fn select_generation(&self, parents: Vec<Individual>, children: Vec<Individual>, minimize: bool) -> Vec<Individual> {
        let size = parents.len();
        let mut merged = parents.into_iter().chain(children).collect::<Vec<_>>();

        // NOTE sort is stable, so parents stay ahead of children with the same cost
        merged.sort_by(|a, b| compare_by_cost(a, b, minimize));
        merged.truncate(size);

        merged
    }
}

fn compare_by_cost(a: &Individual, b: &Individual, minimize: bool) -> Ordering {
    let (a, b) = (a.cost().filter(|cost| !cost.is_nan()), b.cost().filter(|cost| !cost.is_nan()));

    match (a, b) {
        (Some(a), Some(b)) if minimize => compare_floats(a, b),
        (Some(a), Some(b)) => compare_floats(b, a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
