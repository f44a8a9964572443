// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Persistent idea tree.
//!
//! Nodes are immutable once built and children are shared through `Arc`. Every structural edit
//! rebuilds only the path from the root down to the edited node; all other subtrees are reused
//! as-is, so a renderer can short-circuit on `Arc::ptr_eq`.

use std::sync::Arc;

use super::ids::NodeId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    label: String,
    children: Vec<Arc<Node>>,
}

impl Node {
    pub fn new(id: NodeId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children.into_iter().map(Arc::new));
        self
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[Arc<Node>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_str() == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Ids of this node and all of its descendants, in pre-order.
    pub fn subtree_ids(&self) -> Vec<NodeId> {
        let mut ids = Vec::new();
        self.collect_ids(&mut ids);
        ids
    }

    fn collect_ids(&self, out: &mut Vec<NodeId>) {
        out.push(self.id.clone());
        for child in &self.children {
            child.collect_ids(out);
        }
    }

    fn shallow_with_children(&self, children: Vec<Arc<Node>>) -> Node {
        Node { id: self.id.clone(), label: self.label.clone(), children }
    }
}

/// The tree store: exactly one root, unique ids, children exclusively owned by one parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Arc<Node>,
}

impl Tree {
    pub fn new(root: Node) -> Self {
        Self { root: Arc::new(root) }
    }

    pub fn root(&self) -> &Arc<Node> {
        &self.root
    }

    pub fn root_id(&self) -> &NodeId {
        &self.root.id
    }

    pub fn is_root(&self, id: &str) -> bool {
        self.root.id.as_str() == id
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        self.root.find(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    pub fn parent_of(&self, id: &str) -> Option<&Node> {
        fn search<'a>(node: &'a Node, id: &str) -> Option<&'a Node> {
            if node.children.iter().any(|child| child.id.as_str() == id) {
                return Some(node);
            }
            node.children.iter().find_map(|child| search(child, id))
        }
        search(&self.root, id)
    }

    /// Distance from the root (the root itself is at depth 0).
    pub fn depth_of(&self, id: &str) -> Option<usize> {
        let mut depth = None;
        self.walk(|node, level| {
            if depth.is_none() && node.id.as_str() == id {
                depth = Some(level);
            }
        });
        depth
    }

    /// All ids in pre-order.
    pub fn ids(&self) -> Vec<NodeId> {
        self.root.subtree_ids()
    }

    pub fn len(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Visits every node in pre-order together with its depth.
    pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a Node, usize)) {
        fn go<'a>(node: &'a Node, level: usize, visit: &mut impl FnMut(&'a Node, usize)) {
            visit(node, level);
            for child in &node.children {
                go(child, level + 1, visit);
            }
        }
        go(&self.root, 0, &mut visit);
    }

    /// Returns a tree with `child` appended as the last child of `parent_id`, plus the zero-based
    /// index the child landed at. `None` when the parent does not exist.
    pub fn with_child_appended(&self, parent_id: &str, child: Node) -> Option<(Tree, usize)> {
        let mut child = Some(child);
        let mut index = 0;
        let root = rebuild_path(&self.root, parent_id, &mut |parent| {
            let mut children = parent.children.clone();
            if let Some(child) = child.take() {
                children.push(Arc::new(child));
            }
            index = children.len() - 1;
            parent.shallow_with_children(children)
        })?;
        Some((Tree { root }, index))
    }

    /// Returns a tree where `id` carries `label`. `None` when the node does not exist.
    pub fn with_label(&self, id: &str, label: &str) -> Option<Tree> {
        let root = rebuild_path(&self.root, id, &mut |node| Node {
            id: node.id.clone(),
            label: label.to_owned(),
            children: node.children.clone(),
        })?;
        Some(Tree { root })
    }

    /// Returns a tree without the subtree rooted at `id`, plus every id that subtree contained
    /// (pre-order, collected before detaching). `None` for the root or an unknown id.
    pub fn without_subtree(&self, id: &str) -> Option<(Tree, Vec<NodeId>)> {
        if self.is_root(id) {
            return None;
        }
        let removed = self.find(id)?.subtree_ids();
        let parent_id = self.parent_of(id)?.id.clone();
        let root = rebuild_path(&self.root, parent_id.as_str(), &mut |parent| {
            let children = parent
                .children
                .iter()
                .filter(|child| child.id.as_str() != id)
                .cloned()
                .collect();
            parent.shallow_with_children(children)
        })?;
        Some((Tree { root }, removed))
    }
}

/// Rebuilds the root-to-`target` path, replacing the target with `edit(target)`.
fn rebuild_path(
    node: &Arc<Node>,
    target: &str,
    edit: &mut dyn FnMut(&Node) -> Node,
) -> Option<Arc<Node>> {
    if node.id.as_str() == target {
        return Some(Arc::new(edit(node)));
    }
    for (index, child) in node.children.iter().enumerate() {
        if let Some(rebuilt) = rebuild_path(child, target, edit) {
            let mut children = node.children.clone();
            children[index] = rebuilt;
            return Some(Arc::new(node.shallow_with_children(children)));
        }
    }
    None
}
