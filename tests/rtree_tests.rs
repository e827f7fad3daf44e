use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rectree::{Node, RTree, RTreeError, Rectangle};

fn rect(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Rectangle {
    Rectangle::new(min_x, min_y, max_x, max_y).unwrap()
}

fn random_rects(count: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = rng.gen_range(-50.0..50.0);
            let y = rng.gen_range(-50.0..50.0);
            let w = rng.gen_range(0.0..5.0);
            let h = rng.gen_range(0.0..5.0);
            rect(x, y, x + w, y + h)
        })
        .collect()
}

fn collect_leaves(node: &Node, out: &mut Vec<Rectangle>) {
    if node.is_leaf_node() {
        out.push(node.mbr);
    } else {
        for child in &node.children {
            collect_leaves(child, out);
        }
    }
}

/// 每个节点的MBR包含子树中所有叶子矩形
fn assert_containment(node: &Node) {
    let mut leaves = Vec::new();
    collect_leaves(node, &mut leaves);
    for leaf in &leaves {
        assert!(node.mbr.contains(leaf), "{} does not contain {}", node.mbr, leaf);
    }
    for child in &node.children {
        assert_containment(child);
    }
}

fn assert_capacity(node: &Node, max_children: usize) {
    assert!(node.children.len() <= max_children);
    for child in &node.children {
        assert_capacity(child, max_children);
    }
}

fn sorted(mut rects: Vec<Rectangle>) -> Vec<Rectangle> {
    rects.sort_by(|a, b| {
        (a.min_x(), a.min_y(), a.max_x(), a.max_y())
            .partial_cmp(&(b.min_x(), b.min_y(), b.max_x(), b.max_y()))
            .unwrap()
    });
    rects
}

#[test]
fn test_empty_tree_search_returns_nothing() {
    let rtree = RTree::new(4).unwrap();
    assert!(rtree.search(&rect(-1e9, -1e9, 1e9, 1e9)).is_empty());
    assert!(rtree.search(&rect(0.0, 0.0, 0.0, 0.0)).is_empty());
}

#[test]
fn test_three_rectangles_with_one_split() {
    let mut rtree = RTree::new(2).unwrap();
    rtree.insert(rect(0.0, 0.0, 1.0, 1.0));
    rtree.insert(rect(2.0, 2.0, 3.0, 3.0));
    rtree.insert(rect(4.0, 4.0, 5.0, 5.0));

    let results = rtree.search(&rect(2.5, 2.5, 4.5, 4.5));
    assert_eq!(results, vec![rect(2.0, 2.0, 3.0, 3.0), rect(4.0, 4.0, 5.0, 5.0)]);

    // 第一个矩形没有丢失
    assert_eq!(rtree.search(&rect(0.0, 0.0, 0.5, 0.5)), vec![rect(0.0, 0.0, 1.0, 1.0)]);
    assert_eq!(rtree.len(), 3);
}

#[test]
fn test_self_query_finds_rectangle() {
    let mut rtree = RTree::new(3).unwrap();
    let r = rect(1.25, -3.0, 7.5, 2.0);
    rtree.insert(r);
    assert_eq!(rtree.search(&r), vec![r]);

    rtree.insert(rect(10.0, 10.0, 11.0, 11.0));
    rtree.insert(rect(-20.0, -20.0, -19.0, -19.0));
    assert_eq!(rtree.search(&r), vec![r]);
}

#[test]
fn test_fifty_disjoint_unit_rectangles() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut cells: Vec<(i32, i32)> = (0..20).flat_map(|x| (0..20).map(move |y| (x, y))).collect();
    cells.shuffle(&mut rng);

    // 间距为2，单位矩形互不接触
    let rects: Vec<Rectangle> = cells[..50]
        .iter()
        .map(|&(x, y)| {
            let x = x as f64 * 2.0;
            let y = y as f64 * 2.0;
            rect(x, y, x + 1.0, y + 1.0)
        })
        .collect();

    let mut rtree = RTree::new(4).unwrap();
    for r in &rects {
        rtree.insert(*r);
    }

    assert_eq!(rtree.len(), 50);
    for r in &rects {
        let results = rtree.search(r);
        assert_eq!(results, vec![*r], "self query for {}", r);
    }
    assert!(rtree.validate().is_ok());
}

#[test]
fn test_invariants_hold_after_every_insert() {
    for max_children in [2, 3, 4, 8] {
        let mut rtree = RTree::new(max_children).unwrap();
        for r in random_rects(150, max_children as u64) {
            rtree.insert(r);
            let root = rtree.root().unwrap();
            assert_containment(root);
            assert_capacity(root, max_children);
            assert!(rtree.validate().is_ok());
        }
        assert_eq!(rtree.len(), 150);
    }
}

#[test]
fn test_search_matches_brute_force() {
    let rects = random_rects(300, 11);
    let mut rtree = RTree::new(5).unwrap();
    for r in &rects {
        rtree.insert(*r);
    }

    let queries = random_rects(60, 12);
    for query in &queries {
        let expected: Vec<Rectangle> = rects.iter().filter(|r| r.overlaps(query)).copied().collect();
        let found = rtree.search(query);

        for r in &found {
            assert!(r.overlaps(query));
        }
        assert_eq!(sorted(found), sorted(expected));
    }
}

#[test]
fn test_search_is_idempotent() {
    let mut rtree = RTree::new(3).unwrap();
    for r in random_rects(80, 3) {
        rtree.insert(r);
    }

    let query = rect(-10.0, -10.0, 10.0, 10.0);
    let first = rtree.search(&query);
    let second = rtree.search(&query);
    assert_eq!(first, second);
}

#[test]
fn test_root_bounds_grow_monotonically() {
    let mut rtree = RTree::new(3).unwrap();
    for r in random_rects(100, 5) {
        let expected = match rtree.root_mbr() {
            Some(old) => old.merge(&r),
            None => r,
        };
        rtree.insert(r);
        assert_eq!(rtree.root_mbr(), Some(&expected));
    }
}

#[test]
fn test_duplicates_are_all_returned() {
    let mut rtree = RTree::new(2).unwrap();
    let r = rect(1.0, 1.0, 2.0, 2.0);
    for _ in 0..7 {
        rtree.insert(r);
    }

    assert_eq!(rtree.search(&r).len(), 7);
    assert!(rtree.validate().is_ok());
}

#[test]
fn test_many_duplicates_keep_tree_shallow() {
    let mut rtree = RTree::new(2).unwrap();
    let r = rect(1.0, 1.0, 2.0, 2.0);
    let count = 500;
    for _ in 0..count {
        rtree.insert(r);
    }

    // 相同矩形的平局必须在两组间分摊，否则树会退化成链
    let bound = 2 * (count as f64).log2().ceil() as usize + 2;
    assert!(rtree.depth() <= bound, "depth {} exceeds {}", rtree.depth(), bound);
    assert_eq!(rtree.len(), count);
    assert_eq!(rtree.search(&r).len(), count);
    assert!(rtree.validate().is_ok());
}

#[test]
fn test_duplicates_with_larger_capacity_stay_shallow() {
    for max_children in [3, 4, 8] {
        let mut rtree = RTree::new(max_children).unwrap();
        for _ in 0..300 {
            rtree.insert(rect(0.0, 0.0, 0.0, 0.0));
        }
        assert!(rtree.depth() <= 2 * (300f64).log2().ceil() as usize + 2);
        assert_eq!(rtree.search(&rect(0.0, 0.0, 0.0, 0.0)).len(), 300);
        assert!(rtree.validate().is_ok());
    }
}

#[test]
fn test_tree_depth_is_logarithmic() {
    let mut rtree = RTree::new(4).unwrap();
    for r in random_rects(1000, 9) {
        rtree.insert(r);
    }

    // 每个索引节点至少有一个种子，深度上限宽松一些
    assert!(rtree.depth() >= 5);
    assert!(rtree.depth() <= 20);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    assert_eq!(
        RTree::new(1).unwrap_err(),
        RTreeError::InvalidConfiguration { max_children: 1 }
    );
    assert!(matches!(
        RTree::new(0),
        Err(RTreeError::InvalidConfiguration { max_children: 0 })
    ));

    assert!(matches!(
        Rectangle::new(3.0, 0.0, 1.0, 1.0),
        Err(RTreeError::InvalidRectangle { .. })
    ));
    assert!(matches!(
        Rectangle::new(0.0, 3.0, 1.0, 1.0),
        Err(RTreeError::InvalidRectangle { .. })
    ));
    assert!(matches!(
        Rectangle::new(f64::NEG_INFINITY, 0.0, f64::INFINITY, 0.0),
        Err(RTreeError::InvalidRectangle { .. })
    ));
}
