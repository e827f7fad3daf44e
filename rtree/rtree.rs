use super::error::{RTreeError, Result};
use super::node::{Node, NodeType};
use super::rectangle::Rectangle;
use crate::config::IndexConfig;
use serde::Serialize;

/// 默认的最大子节点数
pub const DEFAULT_MAX_CHILDREN: usize = 10;

/// 用于JSON序列化的简化树结构
#[derive(Debug, Serialize)]
pub struct TreeVisualization {
    /// 根节点（如果存在）
    pub root: Option<NodeVisualization>,
    /// 树的配置参数
    pub config: TreeConfig,
}

/// 用于JSON序列化的树配置
#[derive(Debug, Serialize)]
pub struct TreeConfig {
    pub max_children: usize,
    pub len: usize,
    pub depth: usize,
}

/// 用于JSON序列化的节点结构
#[derive(Debug, Serialize)]
pub struct NodeVisualization {
    /// 节点的最小边界矩形
    pub mbr: Rectangle,
    /// 节点类型
    pub node_type: NodeType,
    /// 节点层级
    pub level: usize,
    /// 直接挂在该节点下的数据矩形（叶子子节点）
    pub rectangles: Vec<Rectangle>,
    /// 子节点（仅索引子节点）
    pub child_nodes: Vec<NodeVisualization>,
}

/// R-tree主结构
#[derive(Debug, Clone)]
pub struct RTree {
    /// 根节点
    root: Option<Node>,
    /// 最大子节点数M，超过时分裂
    max_children: usize,
}

impl RTree {
    /// 创建新的R-tree
    ///
    /// `max_children < 2` 时两个种子的分裂规则无法满足，直接拒绝。
    pub fn new(max_children: usize) -> Result<Self> {
        if max_children < 2 {
            return Err(RTreeError::InvalidConfiguration { max_children });
        }

        Ok(RTree {
            root: None,
            max_children,
        })
    }

    /// 根据索引配置创建R-tree
    pub fn from_config(config: &IndexConfig) -> Result<Self> {
        Self::new(config.max_children)
    }

    /// 检查R-tree是否为空
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// 获取R-tree的根节点MBR
    pub fn root_mbr(&self) -> Option<&Rectangle> {
        self.root.as_ref().map(|node| &node.mbr)
    }

    /// 获取最大子节点数
    pub fn max_children(&self) -> usize {
        self.max_children
    }

    /// 获取树的深度
    pub fn depth(&self) -> usize {
        self.root.as_ref().map_or(0, |node| node.level + 1)
    }

    /// 获取存储的矩形数量
    pub fn len(&self) -> usize {
        self.root.as_ref().map_or(0, Node::leaf_count)
    }

    /// 只读访问根节点，用于检查树结构
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// 内部方法：获取根节点的可变引用
    pub(crate) fn root_mut(&mut self) -> &mut Option<Node> {
        &mut self.root
    }

    /// 导出树结构为JSON格式
    ///
    /// 返回包含完整树结构的JSON字符串，用于前端可视化
    pub fn export_to_json(&self) -> std::result::Result<String, serde_json::Error> {
        let visualization = self.create_tree_visualization();
        serde_json::to_string_pretty(&visualization)
    }

    /// 创建用于可视化的树结构
    fn create_tree_visualization(&self) -> TreeVisualization {
        TreeVisualization {
            root: self.root.as_ref().map(|node| self.create_node_visualization(node)),
            config: TreeConfig {
                max_children: self.max_children,
                len: self.len(),
                depth: self.depth(),
            },
        }
    }

    /// 递归创建节点的可视化结构
    fn create_node_visualization(&self, node: &Node) -> NodeVisualization {
        let mut rectangles = Vec::new();
        let mut child_nodes = Vec::new();

        for child in &node.children {
            if child.is_leaf_node() {
                rectangles.push(child.mbr);
            } else {
                child_nodes.push(self.create_node_visualization(child));
            }
        }

        NodeVisualization {
            mbr: node.mbr,
            node_type: node.node_type(),
            level: node.level,
            rectangles,
            child_nodes,
        }
    }
}

impl Default for RTree {
    /// 使用默认参数创建R-tree（M=10）
    fn default() -> Self {
        RTree {
            root: None,
            max_children: DEFAULT_MAX_CHILDREN,
        }
    }
}
