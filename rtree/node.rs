use super::rectangle::Rectangle;
use serde::Serialize;

/// R-tree节点类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeType {
    /// 叶子节点：没有子节点，自身的MBR就是存储的矩形
    Leaf,
    /// 索引节点：包含子节点，MBR为所有子节点MBR的并集
    Index,
}

/// R-tree节点
///
/// 子节点由父节点独占持有，没有共享指针也没有指向父节点的引用。
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// 节点的最小边界矩形
    ///
    /// 对于叶子节点：即用户插入的矩形
    /// 对于索引节点：包含所有子节点MBR的最小矩形
    pub mbr: Rectangle,

    /// 子节点列表，为空当且仅当该节点是叶子节点
    pub children: Vec<Node>,

    /// 节点在树中的层级
    ///
    /// 叶子节点层级为0，父节点层级为子节点层级+1
    pub level: usize,
}

impl Node {
    /// 创建存储一个矩形的叶子节点
    pub fn new_leaf_node(rect: Rectangle) -> Self {
        Node {
            mbr: rect,
            children: Vec::new(),
            level: 0,
        }
    }

    /// 用第一个子节点创建索引节点
    ///
    /// 索引节点至少有一个子节点，因此MBR总是有意义的。
    pub fn new_index_node(first_child: Node) -> Self {
        Node {
            mbr: first_child.mbr,
            level: first_child.level + 1,
            children: vec![first_child],
        }
    }

    pub fn node_type(&self) -> NodeType {
        if self.is_leaf_node() {
            NodeType::Leaf
        } else {
            NodeType::Index
        }
    }

    /// 检查是否为叶子节点
    pub fn is_leaf_node(&self) -> bool {
        self.children.is_empty()
    }

    /// 检查是否为索引节点
    pub fn is_index_node(&self) -> bool {
        !self.children.is_empty()
    }

    /// 添加子节点并扩大MBR
    pub fn add_child(&mut self, child: Node) {
        self.mbr = self.mbr.merge(&child.mbr);
        self.children.push(child);
    }

    /// 重新计算MBR，使其恰好覆盖所有子节点
    ///
    /// 叶子节点的MBR就是存储的数据，保持不变。
    pub fn update_mbr(&mut self) {
        let mut children = self.children.iter();
        if let Some(first) = children.next() {
            self.mbr = children.fold(first.mbr, |acc, child| acc.merge(&child.mbr));
        }
    }

    /// 统计子树中存储的矩形数量
    pub fn leaf_count(&self) -> usize {
        if self.is_leaf_node() {
            1
        } else {
            self.children.iter().map(Node::leaf_count).sum()
        }
    }
}
