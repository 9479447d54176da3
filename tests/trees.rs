/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

use rs_datastruct::collections::{Queue, StackList};
use rs_datastruct::tree::{Lookup, Strategy, Tree};
use rs_datastruct::{NTreeNode, TreeNode};

/// A complete binary tree with payloads `1..=2^depth - 1` in bfs order.
fn complete(depth: u32) -> TreeNode<u32> {
    fn build(i: u32, n: u32) -> Option<TreeNode<u32>> {
        if i > n {
            None
        } else {
            Some(TreeNode::with_children(i, build(2 * i, n), build(2 * i + 1, n)))
        }
    }
    let n = 2u32.pow(depth) - 1;
    TreeNode::with_children(1, build(2, n), build(3, n))
}

#[test]
fn test_small_tree() {
    let tree = TreeNode::with_children(5, Some(TreeNode::new(3)), Some(TreeNode::new(8)));
    assert_eq!(tree.get_in_order(","), "3,5,8");
    assert_eq!(tree.get_pre_order(","), "5,3,8");
    assert_eq!(tree.get_post_order(","), "3,8,5");
    assert_eq!((tree.sum(), *tree.min(), *tree.max()), (16, 3, 8));
}

#[test]
fn test_depth_matches_shape() {
    let tree = complete(4);
    assert_eq!(tree.len(), 15);
    let payloads: Vec<u32> = (1..=15).collect();
    assert_eq!(tree.bfs_order(), payloads.iter().collect::<Vec<_>>());
    for x in 1..=15u32 {
        // node i sits at depth floor(log2(i))
        let depth = (31 - x.leading_zeros()) as usize;
        assert_eq!(tree.dfs(&x).depth(), Some(depth));
        assert_eq!(tree.bfs(&x), Lookup::Found { depth, steps: x as usize - 1 });
    }
    assert_eq!(tree.dfs(&16), Lookup::NotFound { steps: 15 });
    assert_eq!(tree.find(&0, Strategy::BreadthFirst), Lookup::NotFound { steps: 15 });
}

#[test]
fn test_custom_frontiers() {
    let tree = complete(3);
    let mut stack = StackList::new();
    let mut queue = Queue::with_limit(4);
    for x in 1..=7u32 {
        assert_eq!(tree.dfs_with_data(&x, &mut stack).unwrap(), tree.dfs(&x));
        assert_eq!(tree.bfs_with_data(&x, &mut queue).unwrap(), tree.bfs(&x));
    }
}

#[test]
fn test_in_order_of_search_tree() {
    let mut root = TreeNode::new(50);
    root.add_left(vec![TreeNode::new(40), TreeNode::new(30), TreeNode::new(20)]);
    root.add_right(vec![TreeNode::new(60), TreeNode::new(70)]);
    assert_eq!(root.get_in_order(" "), "20 30 40 50 60 70");
    assert_eq!(root.to_flat_array(), vec![20, 30, 40, 50, 60, 70]);
    assert_eq!(root.to_array().to_string(), "[[[[20],30],40],50,[60,[70]]]");
    assert_eq!(root.avg(), Some(270.0 / 5.0));
}

#[test]
fn test_nary_tree() {
    let mut root = NTreeNode::new(0);
    for i in 1..=3 {
        root.add(NTreeNode::with_children(i, (1..=i).map(|j| NTreeNode::new(10 * i + j))));
    }
    assert_eq!(root.get_order(","), "0,1,2,3");
    assert_eq!(root.get_bfs_order(","), "0,1,2,3,11,21,22,31,32,33");
    assert_eq!(root.nb_of_branches(), 9);
    assert_eq!(root.sum(), 6);
    assert_eq!(root.dfs(&22).depth(), Some(2));
    assert_eq!(root.bfs(&31), Lookup::Found { depth: 2, steps: 7 });
}
