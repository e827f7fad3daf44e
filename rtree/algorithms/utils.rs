use super::super::node::Node;
use super::super::rtree::RTree;
use tracing::debug;

/// R-tree工具函数实现
impl RTree {
    /// 向上调整树 - 挂上新叶子、更新MBR并处理溢出
    ///
    /// 沿给定路径下降到层级1节点并追加叶子，回溯时逐层合并新矩形的MBR。
    /// 某层溢出时就地分裂，新产生的兄弟节点挂到上一层；根节点分裂时树长高一层。
    /// 只沿祖先路径更新，不会触碰无关子树。路径只遍历一次。
    pub(crate) fn adjust_tree_upward(&mut self, path: &[usize], leaf: Node) {
        let max_children = self.max_children();

        let sibling = match self.root_mut() {
            Some(root) => adjust_node(root, path, leaf, max_children),
            None => {
                *self.root_mut() = Some(leaf);
                return;
            }
        };

        // 根节点分裂
        if let Some(new_node) = sibling {
            self.grow_root(new_node);
        }
    }

    /// 让树长高一层：新的根节点以旧根节点和兄弟节点作为子节点
    pub(crate) fn grow_root(&mut self, sibling: Node) {
        if let Some(old_root) = self.root_mut().take() {
            let mut new_root = Node::new_index_node(old_root);
            new_root.add_child(sibling);
            debug!(level = new_root.level, mbr = %new_root.mbr, "grew new root");
            *self.root_mut() = Some(new_root);
        } else {
            *self.root_mut() = Some(sibling);
        }
    }
}

/// 递归下降到路径末端追加叶子，返回当前节点分裂出的兄弟节点
///
/// 递归深度等于树高。
fn adjust_node(node: &mut Node, path: &[usize], leaf: Node, max_children: usize) -> Option<Node> {
    node.mbr = node.mbr.merge(&leaf.mbr);

    match path.split_first() {
        Some((&index, rest)) => {
            // 下一层分裂出的兄弟节点挂到当前节点
            if let Some(new_node) = adjust_node(&mut node.children[index], rest, leaf, max_children) {
                node.children.push(new_node);
            }
        }
        None => node.children.push(leaf),
    }

    if node.children.len() <= max_children {
        return None;
    }

    let new_node = node.split(max_children);
    debug!(
        level = node.level,
        kept = node.children.len(),
        moved = new_node.children.len(),
        "split overflowing node"
    );
    Some(new_node)
}
