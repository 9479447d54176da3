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

use rs_datastruct::collections::ItemSet;
use rs_datastruct::{Map, NTreeNode, Set, SortedSet, TreeNode};

use std::error::Error;

#[test]
fn test_tree() -> Result<(), Box<dyn Error>> {
    let tree = TreeNode::with_children(5, Some(TreeNode::new(3)), None);
    let json = serde_json::to_string(&tree)?;
    assert_eq!(
        json,
        r#"{"payload":5,"left":{"payload":3,"left":null,"right":null},"right":null}"#
    );
    let back: TreeNode<i32> = serde_json::from_str(&json)?;
    assert_eq!(back, tree);

    let ntree = NTreeNode::with_children('a', vec![NTreeNode::new('b')]);
    let back: NTreeNode<char> = serde_json::from_str(&serde_json::to_string(&ntree)?)?;
    assert_eq!(back, ntree);
    Ok(())
}

#[test]
fn test_sets() -> Result<(), Box<dyn Error>> {
    let set: Set<u8> = vec![3, 1, 2].into_iter().collect();
    assert_eq!(serde_json::to_string(&set)?, r#"{"value":[3,1,2]}"#);

    let mut sorted: SortedSet<u8> = serde_json::from_str(r#"{"set":{"value":[1,4]}}"#)?;
    sorted.insert(2);
    assert_eq!(sorted.value(), &[1, 2, 4]);
    Ok(())
}

#[test]
fn test_map() -> Result<(), Box<dyn Error>> {
    let map: Map<String, u32> = vec![("b".to_string(), 1), ("a".to_string(), 2), ("b".to_string(), 3)]
        .into_iter()
        .collect();
    let json = serde_json::to_string(&map)?;
    let back: Map<String, u32> = serde_json::from_str(&json)?;
    assert_eq!(back, map);
    assert_eq!(back.get(&"b".to_string()), Some(&[1, 3][..]));
    Ok(())
}

#[test]
fn test_invalid_input_is_rejected() {
    let map = serde_json::from_str::<Map<u32, u32>>(r#"{"keys":{"set":{"value":[1,2]}},"values":[[7]]}"#);
    assert!(map.unwrap_err().to_string().contains("Map: 1 entries for 2 keys"));

    let sorted = serde_json::from_str::<SortedSet<u32>>(r#"{"set":{"value":[5,1,3]}}"#);
    assert!(sorted.unwrap_err().to_string().contains("out of order"));
    let sorted = serde_json::from_str::<SortedSet<u32>>(r#"{"set":{"value":[1,3,3]}}"#);
    assert!(sorted.is_err());

    let set = serde_json::from_str::<Set<u32>>(r#"{"value":[5,1,5]}"#);
    assert!(set.unwrap_err().to_string().contains("already contained"));

    // keys of a map go through the same checks
    let map = serde_json::from_str::<Map<u32, u32>>(r#"{"keys":{"set":{"value":[2,1]}},"values":[[],[]]}"#);
    assert!(map.is_err());
}
