use super::super::node::Node;

/// 节点分裂算法 - 二次分裂(Quadratic Split)的精简版本
impl Node {
    /// 分裂溢出的节点
    ///
    /// 当前节点保留第一组子节点，返回持有第二组子节点的新兄弟节点（同一层级）。
    /// 两个节点的MBR都重新计算为各自子节点的并集。
    pub(crate) fn split(&mut self, max_children: usize) -> Node {
        let children = std::mem::take(&mut self.children);
        let (group1, group2) = quadratic_split(children, max_children);

        self.children = group1;
        self.update_mbr();

        let mut sibling = Node {
            mbr: self.mbr,
            children: group2,
            level: self.level,
        };
        sibling.update_mbr();
        sibling
    }
}

/// 二次分裂算法
///
/// 1. 选择相距最远的两个子节点作为两组的种子
/// 2. 其余子节点按原顺序逐个分配给扩大面积较小的一组，
///    相同时分给子节点较少的一组，数量也相同时分给第二组
/// 3. 某一组已经满了，剩余的全部分给另一组
///
/// 两组内的子节点保持原来的相对顺序。调用方保证 `children.len() >= 2`。
fn quadratic_split(children: Vec<Node>, max_children: usize) -> (Vec<Node>, Vec<Node>) {
    debug_assert!(children.len() >= 2, "split needs at least two children");

    // QS1: 选择种子
    let (seed1, seed2) = pick_seeds(&children);

    let mut in_first = vec![false; children.len()];
    in_first[seed1] = true;

    let mut mbr1 = children[seed1].mbr;
    let mut mbr2 = children[seed2].mbr;
    let (mut count1, mut count2) = (1, 1);

    for (i, child) in children.iter().enumerate() {
        if i == seed1 || i == seed2 {
            continue;
        }

        // QS2: 某一组已满，剩余全部分给另一组
        let to_first = if count1 >= max_children {
            false
        } else if count2 >= max_children {
            true
        } else {
            // QS3: 分给扩大面积较小的一组
            let enlargement1 = mbr1.enlargement(&child.mbr);
            let enlargement2 = mbr2.enlargement(&child.mbr);
            enlargement1 < enlargement2 || (enlargement1 == enlargement2 && count1 < count2)
        };

        if to_first {
            mbr1 = mbr1.merge(&child.mbr);
            count1 += 1;
        } else {
            mbr2 = mbr2.merge(&child.mbr);
            count2 += 1;
        }
        in_first[i] = to_first;
    }

    let mut group1 = Vec::with_capacity(count1);
    let mut group2 = Vec::with_capacity(count2);
    for (child, first) in children.into_iter().zip(in_first) {
        if first {
            group1.push(child);
        } else {
            group2.push(child);
        }
    }

    (group1, group2)
}

/// PickSeeds - 选择距离最远的两个子节点作为种子
///
/// 返回的下标满足 `i < j`。所有子节点两两相交（距离都为0）时返回 `(0, 1)`。
fn pick_seeds(children: &[Node]) -> (usize, usize) {
    let mut max_distance = f64::NEG_INFINITY;
    let mut best_pair = (0, 1);

    for i in 0..children.len() {
        for j in (i + 1)..children.len() {
            let distance = children[i].mbr.distance(&children[j].mbr);
            if distance > max_distance {
                max_distance = distance;
                best_pair = (i, j);
            }
        }
    }

    best_pair
}
