use super::super::node::Node;
use super::super::rectangle::Rectangle;
use super::super::rtree::RTree;
use tracing::trace;

/// 插入操作相关算法
impl RTree {
    /// 插入一个矩形 - 遵循论文Algorithm Insert
    ///
    /// 插入总是成功：矩形在构造时已经过校验。
    pub fn insert(&mut self, rect: Rectangle) {
        let leaf = Node::new_leaf_node(rect);

        // I1: 空树直接以叶子作为根；根本身是叶子时长出新的根，保留原有矩形
        match self.root().map(Node::is_leaf_node) {
            None => {
                trace!(%rect, "created root leaf");
                *self.root_mut() = Some(leaf);
                return;
            }
            Some(true) => {
                self.grow_root(leaf);
                return;
            }
            Some(false) => {}
        }

        // I2: 选择叶子的父节点
        let leaf_path = self.choose_leaf_path(&rect);
        trace!(%rect, depth = leaf_path.len(), "placing leaf");

        // I3 + I4: 添加新叶子并调整树（更新MBR，必要时分裂）
        self.adjust_tree_upward(&leaf_path, leaf);
    }

    /// 选择叶子路径 - 遵循论文ChooseLeaf算法
    ///
    /// 返回从根节点到层级1节点（叶子的父节点）的子节点下标序列。
    fn choose_leaf_path(&self, rect: &Rectangle) -> Vec<usize> {
        let mut path = Vec::new();
        let mut current = match self.root() {
            Some(root) => root,
            None => return path,
        };

        // CL1: 初始化，从根节点开始
        // CL2: 到达叶子的父节点时停止
        while current.level > 1 {
            // CL3: 选择子树 - 选择扩大面积最小的子节点
            let best_index = self.choose_subtree(&current.children, rect);

            // CL4: 下降到子节点
            match current.children.get(best_index) {
                Some(child) => {
                    path.push(best_index);
                    current = child;
                }
                None => break,
            }
        }

        path
    }

    /// 选择子树 - 计算扩大面积最小的子节点，相同时取第一个
    fn choose_subtree(&self, children: &[Node], rect: &Rectangle) -> usize {
        let mut best_index = 0;
        let mut min_enlargement = f64::INFINITY;

        for (i, child) in children.iter().enumerate() {
            let enlargement = child.mbr.enlargement(rect);
            if enlargement < min_enlargement {
                min_enlargement = enlargement;
                best_index = i;
            }
        }

        best_index
    }
}
