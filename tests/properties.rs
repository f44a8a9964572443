// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Property tests over random editing sessions.
//!
//! Properties:
//! - node ids stay unique and are never handed out twice, even across resets
//! - tree and position map cover exactly the same ids after every event
//! - the root survives every sequence
//! - ignored ops change nothing and do not bump the revision
//! - screen/canvas transforms invert each other
//! - a zero-distance drag leaves the node where it was
//! - zoom stays within its configured bounds

use std::collections::HashSet;

use proptest::prelude::*;

use arbor::canvas::{PointerTarget, SurfaceSize, ViewConfig, Viewport};
use arbor::config::EditorConfig;
use arbor::editor::{Editor, EditorEvent, Response};
use arbor::layout::RadialLayout;
use arbor::model::{seed_tree, NodeId, Point, ROOT_ID};

// ── Strategy helpers ────────────────────────────────────────────────────

/// Node picks are indices into the current pre-order id list, wrapped at use.
#[derive(Debug, Clone)]
enum Action {
    Add(usize),
    Delete(usize),
    Rename(usize, String),
    Drag { pick: usize, dx: f64, dy: f64 },
    Pan { dx: f64, dy: f64 },
    Wheel(f64),
    Reset,
}

fn arb_delta() -> impl Strategy<Value = f64> {
    -400.0f64..400.0
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => any::<usize>().prop_map(Action::Add),
        2 => any::<usize>().prop_map(Action::Delete),
        2 => (any::<usize>(), "[a-zA-Z ]{0,12}")
            .prop_map(|(pick, label)| Action::Rename(pick, label)),
        2 => (any::<usize>(), arb_delta(), arb_delta())
            .prop_map(|(pick, dx, dy)| Action::Drag { pick, dx, dy }),
        1 => (arb_delta(), arb_delta()).prop_map(|(dx, dy)| Action::Pan { dx, dy }),
        1 => prop_oneof![Just(-1.0), Just(0.0), Just(1.0)].prop_map(Action::Wheel),
        1 => Just(Action::Reset),
    ]
}

fn arb_point() -> impl Strategy<Value = Point> {
    (-5_000.0f64..5_000.0, -5_000.0f64..5_000.0).prop_map(|(x, y)| Point::new(x, y))
}

fn arb_viewport() -> impl Strategy<Value = Viewport> {
    (0.2f64..=2.5, arb_point()).prop_map(|(scale, offset)| Viewport::new(scale, offset))
}

// ── Session driver ──────────────────────────────────────────────────────

fn pick(editor: &Editor, index: usize) -> NodeId {
    let ids = editor.map().tree().ids();
    ids[index % ids.len()].clone()
}

fn node_screen(editor: &Editor, id: &NodeId) -> Point {
    let position = editor.map().positions().get(id.as_str()).unwrap_or_default();
    editor.viewport().canvas_to_screen(position)
}

/// Replays `action`, returning the response of its structural event if it had one.
fn play(editor: &mut Editor, action: &Action) -> Option<Response> {
    match action {
        Action::Add(index) => {
            let parent_id = pick(editor, *index);
            Some(editor.handle(EditorEvent::AddChild { parent_id }))
        }
        Action::Delete(index) => {
            let node_id = pick(editor, *index);
            Some(editor.handle(EditorEvent::DeleteSubtree { node_id }))
        }
        Action::Rename(index, label) => {
            let node_id = pick(editor, *index);
            Some(editor.handle(EditorEvent::Rename { node_id, label: label.clone() }))
        }
        Action::Drag { pick: index, dx, dy } => {
            let node_id = pick(editor, *index);
            let screen = node_screen(editor, &node_id);
            let target = PointerTarget::NodeBody(node_id);
            editor.handle(EditorEvent::PointerDown { target, screen });
            editor.handle(EditorEvent::PointerMove { screen: screen + Point::new(*dx, *dy) });
            editor.handle(EditorEvent::PointerUp);
            None
        }
        Action::Pan { dx, dy } => {
            let screen = Point::new(100.0, 100.0);
            editor.handle(EditorEvent::PointerDown { target: PointerTarget::Background, screen });
            editor.handle(EditorEvent::PointerMove { screen: screen + Point::new(*dx, *dy) });
            editor.handle(EditorEvent::PointerLeave);
            None
        }
        Action::Wheel(delta_y) => {
            editor.handle(EditorEvent::Wheel { delta_y: *delta_y, zoom_modifier: true });
            None
        }
        Action::Reset => Some(editor.handle(EditorEvent::Reset)),
    }
}

fn session() -> Editor {
    Editor::new(EditorConfig::default(), Some(SurfaceSize::new(1024.0, 768.0)))
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn sessions_keep_tree_and_positions_consistent(
        actions in proptest::collection::vec(arb_action(), 1..60),
    ) {
        let mut editor = session();
        let mut handed_out: HashSet<NodeId> = seed_tree().ids().into_iter().collect();
        let mut applied = 0u64;

        for action in &actions {
            let before_tree = editor.map().tree().clone();
            let before_positions = editor.map().positions().clone();
            let before_rev = editor.map().rev();

            if let Some(Response::Op(result)) = play(&mut editor, action) {
                if result.is_applied() {
                    applied += 1;
                    let added = result.added_id().filter(|_| matches!(action, Action::Add(_)));
                    if let Some(id) = added {
                        prop_assert!(handed_out.insert(id.clone()), "id {} handed out twice", id);
                    }
                } else {
                    prop_assert_eq!(editor.map().tree(), &before_tree);
                    prop_assert_eq!(editor.map().positions(), &before_positions);
                    prop_assert_eq!(editor.map().rev(), before_rev);
                }
            }

            let ids = editor.map().tree().ids();
            let unique: HashSet<&NodeId> = ids.iter().collect();
            prop_assert_eq!(unique.len(), ids.len());
            prop_assert_eq!(editor.map().tree().root_id().as_str(), ROOT_ID);
            prop_assert!(editor.map().unplaced_ids().is_empty(), "unplaced after {:?}", action);
            prop_assert!(editor.map().stale_position_ids().is_empty(), "stale after {:?}", action);
            prop_assert_eq!(editor.map().positions().len(), ids.len());
            prop_assert!(editor.interaction().is_idle());
        }

        prop_assert_eq!(editor.map().rev(), applied);
    }

    #[test]
    fn zoom_stays_in_bounds(deltas in proptest::collection::vec(-3.0f64..3.0, 0..80)) {
        let config = ViewConfig::default();
        let mut viewport = Viewport::initial(&config, None);
        for delta in deltas {
            viewport.zoom_by_wheel(delta, &config);
            prop_assert!(viewport.scale() >= config.min_scale - 1e-12);
            prop_assert!(viewport.scale() <= config.max_scale + 1e-12);
        }
    }

    #[test]
    fn screen_canvas_transform_round_trips(viewport in arb_viewport(), screen in arb_point()) {
        let back = viewport.canvas_to_screen(viewport.screen_to_canvas(screen));
        prop_assert!((back.x - screen.x).abs() < 1e-6, "{:?} -> {:?}", screen, back);
        prop_assert!((back.y - screen.y).abs() < 1e-6, "{:?} -> {:?}", screen, back);
    }

    #[test]
    fn zero_distance_drag_leaves_node_in_place(
        index in any::<usize>(),
        grab in (-70.0f64..70.0, -25.0f64..25.0),
        zoom_steps in -8i32..8,
    ) {
        let mut editor = session();
        for _ in 0..zoom_steps.unsigned_abs() {
            let event = if zoom_steps > 0 { EditorEvent::ZoomIn } else { EditorEvent::ZoomOut };
            editor.handle(event);
        }
        let node_id = pick(&editor, index);
        let before = editor.map().positions().get(node_id.as_str()).unwrap_or_default();
        let screen = node_screen(&editor, &node_id) + Point::new(grab.0, grab.1);

        let target = PointerTarget::NodeBody(node_id.clone());
        editor.handle(EditorEvent::PointerDown { target, screen });
        editor.handle(EditorEvent::PointerMove { screen });
        editor.handle(EditorEvent::PointerUp);

        let after = editor.map().positions().get(node_id.as_str()).unwrap_or_default();
        prop_assert!(after.distance(before) < 1e-9, "{:?} moved to {:?}", before, after);
    }

    #[test]
    fn radial_layout_is_deterministic(
        actions in proptest::collection::vec(arb_action(), 0..30),
    ) {
        let mut editor = session();
        for action in &actions {
            play(&mut editor, action);
        }
        let layout = RadialLayout::default();
        let tree = editor.map().tree();
        let first = layout.layout(tree);
        let second = layout.layout(tree);
        prop_assert_eq!(first.len(), tree.len());
        for ((id_a, a), (id_b, b)) in first.iter().zip(second.iter()) {
            prop_assert_eq!(id_a, id_b);
            prop_assert_eq!(a.x.to_bits(), b.x.to_bits());
            prop_assert_eq!(a.y.to_bits(), b.y.to_bits());
        }
    }
}
