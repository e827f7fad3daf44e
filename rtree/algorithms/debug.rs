use super::super::error::{RTreeError, Result};
use super::super::node::Node;
use super::super::rtree::RTree;
use std::fmt;

/// R-tree调试功能实现
impl RTree {
    /// 生成完整的树结构文本用于调试
    ///
    /// 递归遍历整个树，输出每个节点的类型、层级、MBR和子节点数量。
    pub fn print_tree_structure(&self) -> String {
        TreeStructure(self).to_string()
    }

    /// 校验树的结构不变式
    ///
    /// 检查：每个节点的MBR恰好是子节点MBR的并集，子节点数量不超过上限，
    /// 子节点层级比父节点低一层（所有叶子位于同一层）。
    pub fn validate(&self) -> Result<()> {
        match self.root() {
            Some(root) => self.validate_node(root, "root"),
            None => Ok(()),
        }
    }

    fn validate_node(&self, node: &Node, path: &str) -> Result<()> {
        if node.is_leaf_node() {
            if node.level != 0 {
                return Err(RTreeError::Corrupted(format!(
                    "{} is a leaf at level {}",
                    path, node.level
                )));
            }
            return Ok(());
        }

        if node.children.len() > self.max_children() {
            return Err(RTreeError::Corrupted(format!(
                "{} has {} children, more than {}",
                path,
                node.children.len(),
                self.max_children()
            )));
        }

        let mut covered = None;
        for (i, child) in node.children.iter().enumerate() {
            let child_path = format!("{}[{}]", path, i);
            if child.level + 1 != node.level {
                return Err(RTreeError::Corrupted(format!(
                    "{} is at level {} under a level {} node",
                    child_path, child.level, node.level
                )));
            }
            if !node.mbr.contains(&child.mbr) {
                return Err(RTreeError::Corrupted(format!(
                    "{} mbr {} escapes parent mbr {}",
                    child_path, child.mbr, node.mbr
                )));
            }
            covered = Some(match covered {
                Some(acc) => child.mbr.merge(&acc),
                None => child.mbr,
            });
            self.validate_node(child, &child_path)?;
        }

        if covered != Some(node.mbr) {
            return Err(RTreeError::Corrupted(format!(
                "{} mbr {} is not the union of its children",
                path, node.mbr
            )));
        }
        Ok(())
    }
}

/// 树结构的文本形式
struct TreeStructure<'a>(&'a RTree);

impl fmt::Display for TreeStructure<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.root() {
            Some(root) => write_node(f, root, 0, ""),
            None => writeln!(f, "Empty tree (no root)"),
        }
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node, depth: usize, path: &str) -> fmt::Result {
    let indent = "  ".repeat(depth);
    if node.is_leaf_node() {
        return writeln!(f, "{}Leaf{} {}", indent, path, node.mbr);
    }

    writeln!(
        f,
        "{}Node{} (level={}, mbr={}, {} children):",
        indent,
        path,
        node.level,
        node.mbr,
        node.children.len()
    )?;
    for (i, child) in node.children.iter().enumerate() {
        write_node(f, child, depth + 1, &format!("{}[{}]", path, i))?;
    }
    Ok(())
}
