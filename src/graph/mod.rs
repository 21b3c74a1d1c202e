//! Word graphs and their derived structure.
//!
//! This subsystem owns the generator-labeled graph recorded during orbit
//! enumeration ([`WordGraph`]), its strongly-connected-component
//! decomposition ([`Gabow`]), and the labeled spanning forests ([`Forest`])
//! that multiplier reconstruction walks.

pub mod forest;
pub mod gabow;
pub mod node;
pub mod word_graph;

pub use forest::Forest;
pub use gabow::Gabow;
pub use node::PointIndex;
pub use word_graph::WordGraph;
