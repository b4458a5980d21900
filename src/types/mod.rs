//! Value types shared across the label-graph library.

pub mod edge;
pub mod error;
pub mod node;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use node::Node;

/// Weight given to edges added without an explicit weight.
pub const DEFAULT_WEIGHT: f64 = 1.0;
