// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::NodeId;
use super::tree::{Node, Tree};

pub const ROOT_ID: &str = "root";

fn node(id: &str, label: &str) -> Node {
    Node::new(NodeId::from_trusted(id), label)
}

/// The fixed tree a fresh or reset editor starts from.
pub fn seed_tree() -> Tree {
    Tree::new(node(ROOT_ID, "Central idea").with_children([
        node("1", "Concept A").with_children([
            node("1-1", "Detail A.1"),
            node("1-2", "Detail A.2"),
            node("1-3", "Detail A.3"),
        ]),
        node("2", "Concept B").with_children([node("2-1", "Detail B.1")]),
        node("3", "Concept C"),
        node("4", "Concept D")
            .with_children([node("4-1", "Detail D.1"), node("4-2", "Detail D.2")]),
        node("5", "Concept E"),
    ]))
}
