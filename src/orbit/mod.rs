//! Orbit enumeration: point registry, generators, cooperative run control,
//! multipliers, and the [`Action`] facade tying them together.

pub mod action;
pub mod generators;
pub mod multipliers;
pub mod runner;
pub mod store;

pub use action::{Action, LeftAction, RightAction};
pub use generators::GeneratorSet;
pub use multipliers::{Direction, MultiplierCache};
pub use runner::{Runner, RunnerState};
pub use store::PointStore;

#[cfg(test)]
mod tests;
