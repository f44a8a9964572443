// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use arbor::layout::RadialLayout;
use arbor::model::{MindMap, Node, NodeId, Tree};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    /// 5 x 3 x 3: about the size of a hand-made map.
    Small,
    /// 8 x 8 x 8.
    Medium,
    /// 12 x 12 x 12, long labels.
    Large,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Small, Case::Medium, Case::Large];

    pub fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large_long_labels",
        }
    }

    fn shape(self) -> (&'static [usize], usize) {
        match self {
            Self::Small => (&[5, 3, 3], 12),
            Self::Medium => (&[8, 8, 8], 16),
            Self::Large => (&[12, 12, 12], 64),
        }
    }
}

fn node_id(path: &str) -> NodeId {
    NodeId::new(format!("b{path}")).expect("bench node id")
}

fn label(path: &str, len: usize) -> String {
    let mut out = format!("Idea {path} ");
    while out.len() < len {
        out.push('~');
    }
    out.truncate(len);
    out
}

fn build(path: &str, fanouts: &[usize], label_len: usize) -> Node {
    let children = match fanouts.split_first() {
        Some((&fanout, rest)) => (0..fanout)
            .map(|idx| build(&format!("{path}.{idx}"), rest, label_len))
            .collect::<Vec<_>>(),
        None => Vec::new(),
    };
    Node::new(node_id(path), label(path, label_len)).with_children(children)
}

pub fn tree(case: Case) -> Tree {
    let (fanouts, label_len) = case.shape();
    Tree::new(build("0", fanouts, label_len))
}

pub fn mind_map(case: Case) -> MindMap {
    let tree = tree(case);
    let positions = RadialLayout::default().layout(&tree);
    MindMap::new(tree, positions)
}

/// Ids of every node at `depth`, in pre-order.
pub fn ids_at_depth(tree: &Tree, depth: usize) -> Vec<NodeId> {
    let mut ids = Vec::new();
    tree.walk(|node, level| {
        if level == depth {
            ids.push(node.id().clone());
        }
    });
    ids
}
