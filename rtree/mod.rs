pub mod algorithms;
pub mod error;
pub mod node;
pub mod rectangle;
#[allow(clippy::module_inception)]
pub mod rtree;

// 重新导出主要类型
pub use error::RTreeError;
pub use node::{Node, NodeType};
pub use rectangle::Rectangle;
pub use rtree::{RTree, TreeVisualization, DEFAULT_MAX_CHILDREN};
