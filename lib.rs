//! # rectree
//!
//! 基于 Antonin Guttman 的论文 "R-trees: A Dynamic Index Structure for Spatial Searching"
//! 的二维矩形 R-tree 索引。
//!
//! - 动态插入，节点溢出时使用精简的二次分裂
//! - 范围相交查询，边界接触也算相交
//! - 可配置的最大子节点数
//!
//! ```rust
//! use rectree::{RTree, Rectangle};
//!
//! let mut rtree = RTree::new(2)?;
//! rtree.insert(Rectangle::new(0.0, 0.0, 1.0, 1.0)?);
//! rtree.insert(Rectangle::new(2.0, 2.0, 3.0, 3.0)?);
//! rtree.insert(Rectangle::new(4.0, 4.0, 5.0, 5.0)?);
//!
//! let results = rtree.search(&Rectangle::new(2.5, 2.5, 4.5, 4.5)?);
//! assert_eq!(results.len(), 2);
//! # Ok::<(), rectree::RTreeError>(())
//! ```

pub mod config;
pub mod rtree;

// 重新导出主要的公共接口
pub use crate::config::{IndexConfig, LoggingConfig, RectreeConfig};
pub use crate::rtree::{Node, NodeType, RTree, RTreeError, Rectangle};

pub type Result<T> = std::result::Result<T, RTreeError>;
