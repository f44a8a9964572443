// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The editing session: one mind map, its view, and the pointer gesture in progress.
//!
//! Front-ends translate their native input into [`EditorEvent`]s and feed them to
//! [`Editor::handle`] one at a time; everything runs to completion inside that call.

use crate::canvas::{Interaction, InteractionKind, PointerTarget, SurfaceSize, Viewport};
use crate::config::EditorConfig;
use crate::model::{seed_tree, IdGenerator, MindMap, NodeId, Point};
use crate::ops::{apply_op, ApplyResult, Op, OpContext, Outcome};
use crate::render::Scene;

#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    PointerDown { target: PointerTarget, screen: Point },
    PointerMove { screen: Point },
    PointerUp,
    PointerLeave,
    /// One wheel notch. Only zooms while the zoom modifier is held.
    Wheel { delta_y: f64, zoom_modifier: bool },
    ZoomIn,
    ZoomOut,
    /// Adds a child carrying the configured default label.
    AddChild { parent_id: NodeId },
    DeleteSubtree { node_id: NodeId },
    Rename { node_id: NodeId, label: String },
    Reset,
    Resize(SurfaceSize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Unchanged,
    /// View state, positions or the gesture changed; the tree did not.
    Redraw,
    Op(ApplyResult),
}

impl Response {
    pub fn needs_redraw(&self) -> bool {
        !matches!(self, Self::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct Editor {
    config: EditorConfig,
    map: MindMap,
    viewport: Viewport,
    interaction: Interaction,
    ids: IdGenerator,
    surface: Option<SurfaceSize>,
}

impl Editor {
    /// A session showing the seed tree in its radial layout.
    pub fn new(config: EditorConfig, surface: Option<SurfaceSize>) -> Self {
        let tree = seed_tree();
        let positions = config.layout.layout(&tree);
        let viewport = Viewport::initial(&config.view, surface);
        Self {
            config,
            map: MindMap::new(tree, positions),
            viewport,
            interaction: Interaction::Idle,
            ids: IdGenerator::new(),
            surface,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn map(&self) -> &MindMap {
        &self.map
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    pub fn surface(&self) -> Option<SurfaceSize> {
        self.surface
    }

    pub fn scene(&self) -> Scene {
        Scene::build(&self.map, &self.viewport, &self.interaction, &self.config.node)
    }

    pub fn handle(&mut self, event: EditorEvent) -> Response {
        match event {
            EditorEvent::PointerDown { target, screen } => {
                let started = self.interaction.pointer_down(
                    &target,
                    screen,
                    &self.viewport,
                    self.map.positions(),
                );
                redraw_if(started)
            }
            EditorEvent::PointerMove { screen } => {
                let moved = self.interaction.pointer_move(
                    screen,
                    &mut self.viewport,
                    self.map.positions_mut(),
                );
                redraw_if(moved)
            }
            EditorEvent::PointerUp => {
                redraw_if(self.interaction.pointer_up() != InteractionKind::Idle)
            }
            EditorEvent::PointerLeave => {
                redraw_if(self.interaction.pointer_leave() != InteractionKind::Idle)
            }
            EditorEvent::Wheel { delta_y, zoom_modifier } => {
                redraw_if(zoom_modifier && self.viewport.zoom_by_wheel(delta_y, &self.config.view))
            }
            EditorEvent::ZoomIn => redraw_if(self.viewport.zoom_in(&self.config.view)),
            EditorEvent::ZoomOut => redraw_if(self.viewport.zoom_out(&self.config.view)),
            EditorEvent::AddChild { parent_id } => {
                let label = self.config.default_child_label.clone();
                Response::Op(self.apply(Op::AddChild { parent_id, label }))
            }
            EditorEvent::DeleteSubtree { node_id } => {
                Response::Op(self.apply(Op::DeleteSubtree { node_id }))
            }
            EditorEvent::Rename { node_id, label } => {
                Response::Op(self.apply(Op::Rename { node_id, label }))
            }
            EditorEvent::Reset => Response::Op(self.apply(Op::Reset)),
            EditorEvent::Resize(surface) => self.resize(surface),
        }
    }

    /// Applies a structural operation and keeps the view consistent with its outcome.
    pub fn apply(&mut self, op: Op) -> ApplyResult {
        let mut ctx = OpContext { layout: &self.config.layout, ids: &mut self.ids };
        let result = apply_op(&mut self.map, &op, &mut ctx);

        if let Outcome::Applied(delta) = &result.outcome {
            if matches!(op, Op::Reset) {
                self.interaction.pointer_up();
                self.viewport.reset(&self.config.view, self.surface);
            } else if let Some(dragged) = self.interaction.dragged_node() {
                if delta.removed.contains(dragged) {
                    tracing::debug!(node_id = %dragged, "dragged node removed; drag ended");
                    self.interaction.pointer_up();
                }
            }
        }
        result
    }

    /// The first known surface size centers the view; later resizes keep the offset.
    fn resize(&mut self, surface: SurfaceSize) -> Response {
        let first = self.surface.is_none();
        if self.surface == Some(surface) {
            return Response::Unchanged;
        }
        self.surface = Some(surface);
        if first {
            self.viewport.center_on(surface);
        }
        Response::Redraw
    }
}

fn redraw_if(changed: bool) -> Response {
    if changed {
        Response::Redraw
    } else {
        Response::Unchanged
    }
}
