use super::super::node::Node;
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;

/// 搜索操作相关算法
impl RTree {
    /// 搜索与查询矩形相交的所有矩形 - 遵循论文Algorithm Search
    ///
    /// 结果顺序跟随子节点顺序，不做任何几何排序。
    pub fn search(&self, query: &Rectangle) -> Vec<Rectangle> {
        let mut results = Vec::new();
        self.search_with(query, |rect| results.push(*rect));
        results
    }

    /// 与 `search` 相同的遍历，对每个命中的矩形调用 `visitor`，不分配结果集
    pub fn search_with<F>(&self, query: &Rectangle, mut visitor: F)
    where
        F: FnMut(&Rectangle),
    {
        if let Some(root) = self.root() {
            self.search_recursive(root, query, &mut visitor);
        }
    }

    /// 判断树中是否存储了与给定矩形完全相同的矩形
    pub fn contains_rect(&self, rect: &Rectangle) -> bool {
        self.root()
            .is_some_and(|root| self.contains_recursive(root, rect))
    }

    /// 递归搜索 - 遵循论文Search算法
    fn search_recursive<F>(&self, node: &Node, query: &Rectangle, visitor: &mut F)
    where
        F: FnMut(&Rectangle),
    {
        // S2: 叶子节点，检查存储的矩形
        if node.is_leaf_node() {
            if node.mbr.overlaps(query) {
                visitor(&node.mbr);
            }
            return;
        }

        // S1: 只进入MBR与查询相交的子树
        for child in &node.children {
            if child.mbr.overlaps(query) {
                self.search_recursive(child, query, visitor);
            }
        }
    }

    /// 只进入MBR包含目标矩形的子树
    fn contains_recursive(&self, node: &Node, rect: &Rectangle) -> bool {
        if node.is_leaf_node() {
            return node.mbr == *rect;
        }

        node.children
            .iter()
            .filter(|child| child.mbr.contains(rect))
            .any(|child| self.contains_recursive(child, rect))
    }
}
