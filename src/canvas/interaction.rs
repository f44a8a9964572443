// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Pointer interaction state machine.
//!
//! Exactly one mode is active at a time:
//!
//! - `Idle`: no pointer gesture in progress.
//! - `Panning`: pointer went down on the background; moves translate the viewport.
//! - `DraggingNode`: pointer went down on a node body; moves reposition that node.
//!
//! Both active modes are entered only from `Idle` and return to `Idle` on release or when the
//! pointer leaves the surface. A release never rolls anything back.

use serde::Serialize;

use super::viewport::Viewport;
use crate::model::{NodeId, Point, PositionMap};

/// What a pointer-down landed on, as classified by the rendering collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    NodeBody(NodeId),
    NodeTextField(NodeId),
    ActionButton(NodeId),
    Background,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    Idle,
    /// `anchor` is the pointer minus the viewport offset at pan start, in screen units.
    Panning { anchor: Point },
    /// `grab_offset` is the logical vector from the node position to the initial hit.
    DraggingNode { node_id: NodeId, grab_offset: Point },
}

/// Coarse interaction mode, e.g. for choosing a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionKind {
    Idle,
    Panning,
    Dragging,
}

impl Interaction {
    pub fn kind(&self) -> InteractionKind {
        match self {
            Self::Idle => InteractionKind::Idle,
            Self::Panning { .. } => InteractionKind::Panning,
            Self::DraggingNode { .. } => InteractionKind::Dragging,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn dragged_node(&self) -> Option<&NodeId> {
        match self {
            Self::DraggingNode { node_id, .. } => Some(node_id),
            _ => None,
        }
    }

    /// Starts a drag or a pan. Returns whether a gesture started.
    ///
    /// Ignored unless idle. Text fields and action buttons never start a gesture, and a node
    /// without a position cannot be grabbed.
    pub fn pointer_down(
        &mut self,
        target: &PointerTarget,
        screen: Point,
        viewport: &Viewport,
        positions: &PositionMap,
    ) -> bool {
        if !self.is_idle() {
            return false;
        }

        match target {
            PointerTarget::NodeBody(node_id) => {
                let Some(position) = positions.get(node_id.as_str()) else {
                    tracing::debug!(node_id = %node_id, "drag start ignored: node has no position");
                    return false;
                };
                let grab_offset = viewport.screen_to_canvas(screen) - position;
                tracing::trace!(node_id = %node_id, ?grab_offset, "drag start");
                *self = Self::DraggingNode { node_id: node_id.clone(), grab_offset };
                true
            }
            PointerTarget::Background => {
                let anchor = screen - viewport.offset();
                tracing::trace!(?anchor, "pan start");
                *self = Self::Panning { anchor };
                true
            }
            PointerTarget::NodeTextField(_) | PointerTarget::ActionButton(_) => false,
        }
    }

    /// Applies a pointer move to the active gesture. Returns whether anything moved.
    pub fn pointer_move(
        &mut self,
        screen: Point,
        viewport: &mut Viewport,
        positions: &mut PositionMap,
    ) -> bool {
        match self {
            Self::Idle => false,
            Self::Panning { anchor } => {
                viewport.pan_to(screen - *anchor);
                true
            }
            Self::DraggingNode { node_id, grab_offset } => {
                if !positions.contains(node_id.as_str()) {
                    return false;
                }
                let position = viewport.screen_to_canvas(screen) - *grab_offset;
                positions.set(node_id.clone(), position);
                true
            }
        }
    }

    /// Ends the active gesture, leaving positions and offset where the last move put them.
    /// Returns the mode that ended.
    pub fn pointer_up(&mut self) -> InteractionKind {
        let ended = self.kind();
        if ended != InteractionKind::Idle {
            tracing::trace!(?ended, "gesture end");
        }
        *self = Self::Idle;
        ended
    }

    /// The pointer left the surface; treated exactly like a release.
    pub fn pointer_leave(&mut self) -> InteractionKind {
        self.pointer_up()
    }
}
