//! Shared test collaborator: a full transformation of `{0, …, n-1}`.
//!
//! `product` composes left-to-right (apply `self`, then `other`), which is
//! the convention a right action needs.

use orbit_action::prelude::*;

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Transf(pub Vec<u32>);

impl Element for Transf {
    fn degree(&self) -> usize {
        self.0.len()
    }

    fn identity(&self) -> Self {
        Transf((0..self.0.len() as u32).collect())
    }

    fn product(&self, other: &Self) -> Self {
        Transf(self.0.iter().map(|&i| other.0[i as usize]).collect())
    }
}

impl ActOn<u32> for Transf {
    fn act(&self, point: &u32) -> u32 {
        self.0[*point as usize]
    }
}
