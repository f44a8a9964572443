// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Structural mutation operations for mind maps.
//!
//! Every operation updates the tree and the position table as one step and reports a minimal
//! delta. Operations addressed to unknown ids, or trying to remove the root, are ignored rather
//! than rejected: the result says why, but nothing is an error.

use std::collections::BTreeSet;
use std::fmt;

use crate::layout::RadialLayout;
use crate::model::{seed_tree, IdGenerator, MindMap, Node, NodeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    /// Appends a new child with a generated id under `parent_id`.
    AddChild { parent_id: NodeId, label: String },
    Rename { node_id: NodeId, label: String },
    /// Removes `node_id` and all of its descendants, positions included.
    DeleteSubtree { node_id: NodeId },
    /// Replaces tree and positions with the seed tree and its radial layout.
    Reset,
}

impl Op {
    pub fn kind(&self) -> OpKind {
        match self {
            Self::AddChild { .. } => OpKind::AddChild,
            Self::Rename { .. } => OpKind::Rename,
            Self::DeleteSubtree { .. } => OpKind::DeleteSubtree,
            Self::Reset => OpKind::Reset,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    AddChild,
    Rename,
    DeleteSubtree,
    Reset,
}

/// Services an operation may need besides the map itself.
pub struct OpContext<'a> {
    pub layout: &'a RadialLayout,
    pub ids: &'a mut IdGenerator,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyResult {
    pub new_rev: u64,
    pub outcome: Outcome,
}

impl ApplyResult {
    pub fn is_applied(&self) -> bool {
        matches!(self.outcome, Outcome::Applied(_))
    }

    pub fn delta(&self) -> Option<&Delta> {
        match &self.outcome {
            Outcome::Applied(delta) => Some(delta),
            Outcome::Ignored(_) => None,
        }
    }

    /// The id created by an `AddChild`, if one was created.
    pub fn added_id(&self) -> Option<&NodeId> {
        self.delta().and_then(|delta| delta.added.first())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied(Delta),
    Ignored(IgnoreReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IgnoreReason {
    NotFound { node_id: NodeId },
    RootProtected,
}

impl fmt::Display for IgnoreReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { node_id } => write!(f, "node not found (id={node_id})"),
            Self::RootProtected => f.write_str("the root node cannot be removed"),
        }
    }
}

/// Node ids touched by an operation, each list sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Delta {
    pub added: Vec<NodeId>,
    pub removed: Vec<NodeId>,
    pub updated: Vec<NodeId>,
}

#[derive(Debug, Default)]
struct DeltaBuilder {
    added: BTreeSet<NodeId>,
    removed: BTreeSet<NodeId>,
    updated: BTreeSet<NodeId>,
}

impl DeltaBuilder {
    fn record_added(&mut self, node_id: NodeId) {
        self.removed.remove(&node_id);
        self.updated.remove(&node_id);
        self.added.insert(node_id);
    }

    fn record_removed(&mut self, node_id: NodeId) {
        self.added.remove(&node_id);
        self.updated.remove(&node_id);
        self.removed.insert(node_id);
    }

    fn record_updated(&mut self, node_id: NodeId) {
        if self.added.contains(&node_id) || self.removed.contains(&node_id) {
            return;
        }
        self.updated.insert(node_id);
    }

    fn finish(self) -> Delta {
        Delta {
            added: self.added.into_iter().collect(),
            removed: self.removed.into_iter().collect(),
            updated: self.updated.into_iter().collect(),
        }
    }
}

pub fn apply_op(map: &mut MindMap, op: &Op, ctx: &mut OpContext<'_>) -> ApplyResult {
    let mut delta = DeltaBuilder::default();
    let applied = match op {
        Op::AddChild { parent_id, label } => add_child(map, parent_id, label, ctx, &mut delta),
        Op::Rename { node_id, label } => rename(map, node_id, label, &mut delta),
        Op::DeleteSubtree { node_id } => delete_subtree(map, node_id, &mut delta),
        Op::Reset => {
            reset(map, ctx.layout, &mut delta);
            Ok(())
        }
    };

    match applied {
        Ok(()) => {
            map.bump_rev();
            let delta = delta.finish();
            tracing::debug!(
                kind = ?op.kind(),
                rev = map.rev(),
                added = delta.added.len(),
                removed = delta.removed.len(),
                updated = delta.updated.len(),
                "op applied"
            );
            ApplyResult { new_rev: map.rev(), outcome: Outcome::Applied(delta) }
        }
        Err(reason) => {
            tracing::debug!(kind = ?op.kind(), %reason, "op ignored");
            ApplyResult { new_rev: map.rev(), outcome: Outcome::Ignored(reason) }
        }
    }
}

/// Applies `ops` in order, merging the deltas of all applied ones.
pub fn apply_ops(map: &mut MindMap, ops: &[Op], ctx: &mut OpContext<'_>) -> (usize, Delta) {
    let mut merged = DeltaBuilder::default();
    let mut applied = 0;
    for op in ops {
        let result = apply_op(map, op, ctx);
        if let Outcome::Applied(delta) = result.outcome {
            applied += 1;
            delta.added.into_iter().for_each(|id| merged.record_added(id));
            delta.removed.into_iter().for_each(|id| merged.record_removed(id));
            delta.updated.into_iter().for_each(|id| merged.record_updated(id));
        }
    }
    (applied, merged.finish())
}

fn add_child(
    map: &mut MindMap,
    parent_id: &NodeId,
    label: &str,
    ctx: &mut OpContext<'_>,
    delta: &mut DeltaBuilder,
) -> Result<(), IgnoreReason> {
    let not_found = || IgnoreReason::NotFound { node_id: parent_id.clone() };
    if !map.tree().contains(parent_id.as_str()) {
        return Err(not_found());
    }

    let node_id = ctx.ids.next_unused(map.tree());
    let (tree, index) = map
        .tree()
        .with_child_appended(parent_id.as_str(), Node::new(node_id.clone(), label))
        .ok_or_else(not_found)?;
    map.set_tree(tree);

    match map.positions().get(parent_id.as_str()) {
        Some(parent) => {
            let seeded = ctx.layout.seed_child_position(parent, index);
            map.positions_mut().set(node_id.clone(), seeded);
        }
        None => {
            tracing::debug!(node_id = %node_id, parent_id = %parent_id, "parent has no position");
        }
    }

    delta.record_added(node_id);
    delta.record_updated(parent_id.clone());
    Ok(())
}

fn rename(
    map: &mut MindMap,
    node_id: &NodeId,
    label: &str,
    delta: &mut DeltaBuilder,
) -> Result<(), IgnoreReason> {
    let tree = map
        .tree()
        .with_label(node_id.as_str(), label)
        .ok_or_else(|| IgnoreReason::NotFound { node_id: node_id.clone() })?;
    map.set_tree(tree);
    delta.record_updated(node_id.clone());
    Ok(())
}

fn delete_subtree(
    map: &mut MindMap,
    node_id: &NodeId,
    delta: &mut DeltaBuilder,
) -> Result<(), IgnoreReason> {
    if map.tree().is_root(node_id.as_str()) {
        return Err(IgnoreReason::RootProtected);
    }
    let not_found = || IgnoreReason::NotFound { node_id: node_id.clone() };
    let parent_id = map.tree().parent_of(node_id.as_str()).ok_or_else(not_found)?.id().clone();
    let (tree, removed) = map.tree().without_subtree(node_id.as_str()).ok_or_else(not_found)?;

    map.set_tree(tree);
    map.positions_mut().remove_all(&removed);

    for id in removed {
        delta.record_removed(id);
    }
    delta.record_updated(parent_id);
    Ok(())
}

fn reset(map: &mut MindMap, layout: &RadialLayout, delta: &mut DeltaBuilder) {
    let before = map.tree().ids().into_iter().collect::<BTreeSet<_>>();
    let tree = seed_tree();
    let positions = layout.layout(&tree);
    let after = tree.ids().into_iter().collect::<BTreeSet<_>>();

    for id in before.difference(&after) {
        delta.record_removed(id.clone());
    }
    for id in after.difference(&before) {
        delta.record_added(id.clone());
    }
    for id in after.intersection(&before) {
        delta.record_updated(id.clone());
    }

    map.replace(tree, positions);
    tracing::info!(nodes = after.len(), "mind map reset to seed");
}
