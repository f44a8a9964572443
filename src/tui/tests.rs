// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{
    action_buttons, cell_to_screen, draw, footer_line, truncate_label, App, ButtonKind, Mode,
};
use crate::canvas::InteractionKind;
use crate::config::EditorConfig;
use crate::editor::Editor;
use crate::model::{seed_tree, NodeId, Point};
use crate::tui::theme::TuiTheme;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use rstest::{fixture, rstest};

fn nid(value: &str) -> NodeId {
    NodeId::new(value).expect("node id")
}

#[fixture]
fn app() -> App {
    let mut app = App::new(Editor::new(EditorConfig::default(), None), TuiTheme::default());
    app.set_canvas_area(Rect::new(0, 0, 100, 40));
    app
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn mouse(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_mouse(MouseEvent { kind, column, row, modifiers: KeyModifiers::NONE });
}

fn label_of(app: &App, id: &str) -> String {
    app.editor.map().tree().find(id).expect("node").label().to_owned()
}

fn close(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
}

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

#[test]
fn cells_map_to_their_center_in_screen_units() {
    let area = Rect::new(2, 1, 10, 5);
    assert_eq!(cell_to_screen(area, 2, 1), Point::new(4.0, 8.0));
    assert_eq!(cell_to_screen(area, 5, 3), Point::new(28.0, 40.0));
}

#[test]
fn long_and_empty_labels_are_shortened_for_display() {
    assert_eq!(truncate_label("Central idea", 14), "Central idea");
    assert_eq!(truncate_label("A rather long label", 8), "A rathe…");
    assert_eq!(truncate_label("", 8), "…");
}

#[rstest]
fn first_canvas_area_centers_the_view(app: App) {
    assert_eq!(app.editor.viewport().offset(), Point::new(400.0, 320.0));
    assert_eq!(app.editor.viewport().scale(), 0.9);
}

#[rstest]
fn add_without_selection_adds_under_root(mut app: App) {
    press(&mut app, KeyCode::Char('a'));

    let root = app.editor.map().tree().root();
    assert_eq!(root.children().len(), 6);
    assert_eq!(root.children()[5].label(), "New idea");
    assert!(app.selection.is_none());
    assert!(app.toast.as_ref().is_some_and(|toast| toast.message.starts_with("Added n1")));
}

#[rstest]
fn tab_cycles_selection_in_tree_order(mut app: App) {
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.selection, Some(nid("root")));
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.selection, Some(nid("1")));
    press(&mut app, KeyCode::BackTab);
    press(&mut app, KeyCode::BackTab);
    assert_eq!(app.selection, Some(nid("5")));
    press(&mut app, KeyCode::Esc);
    assert!(app.selection.is_none());
}

#[rstest]
fn deleting_selection_moves_selection_to_parent(mut app: App) {
    app.selection = Some(nid("4"));
    press(&mut app, KeyCode::Char('x'));

    assert!(!app.editor.map().tree().contains("4"));
    assert!(!app.editor.map().positions().contains("4-2"));
    assert_eq!(app.selection, Some(nid("root")));
}

#[rstest]
fn deleting_root_reports_ignored_op(mut app: App) {
    app.selection = Some(nid("root"));
    press(&mut app, KeyCode::Delete);

    assert_eq!(app.editor.map().tree().len(), 12);
    assert_eq!(app.editor.map().rev(), 0);
    let toast = app.toast.as_ref().expect("toast");
    assert_eq!(toast.message, "Ignored: the root node cannot be removed");
}

#[rstest]
fn label_edits_apply_live_and_escape_restores(mut app: App) {
    app.selection = Some(nid("2"));
    press(&mut app, KeyCode::Char('e'));
    assert!(matches!(app.mode, Mode::Editing { .. }));

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Char('Z'));
    assert_eq!(label_of(&app, "2"), "Concept Z");
    assert_eq!(app.display_label(&nid("2"), "ignored"), "Concept Z▏");

    press(&mut app, KeyCode::Esc);
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(label_of(&app, "2"), "Concept B");
}

#[rstest]
fn enter_keeps_the_edited_label(mut app: App) {
    app.selection = Some(nid("3"));
    press(&mut app, KeyCode::Enter);
    for _ in 0.."Concept C".len() {
        press(&mut app, KeyCode::Backspace);
    }
    press(&mut app, KeyCode::Backspace);
    assert_eq!(label_of(&app, "3"), "");

    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(label_of(&app, "3"), "q");
}

#[rstest]
fn reset_requires_confirmation(mut app: App) {
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('R'));
    assert_eq!(app.mode, Mode::ConfirmReset);
    press(&mut app, KeyCode::Char('n'));
    assert_eq!(app.mode, Mode::Normal);
    assert_eq!(app.editor.map().tree().len(), 13);

    app.selection = Some(nid("n1"));
    press(&mut app, KeyCode::Char('R'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.editor.map().tree(), &seed_tree());
    assert!(app.selection.is_none());
}

#[rstest]
fn mouse_drag_moves_the_grabbed_node(mut app: App) {
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 50, 20);
    assert_eq!(app.selection, Some(nid("root")));
    assert_eq!(app.editor.interaction().kind(), InteractionKind::Dragging);

    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 60, 22);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), 60, 22);

    let root = app.editor.map().positions().get("root").expect("root");
    assert!(close(root, Point::new(80.0 / 0.9, 32.0 / 0.9)), "root at {root:?}");
    assert!(app.editor.interaction().is_idle());
}

#[rstest]
fn mouse_drag_on_background_pans(mut app: App) {
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 5, 5);
    assert_eq!(app.editor.interaction().kind(), InteractionKind::Panning);
    assert!(app.selection.is_none());

    mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), 10, 5);
    assert_eq!(app.editor.viewport().offset(), Point::new(440.0, 320.0));

    app.handle_event(Event::FocusLost);
    assert!(app.editor.interaction().is_idle());
}

#[rstest]
fn presses_outside_the_canvas_are_ignored(mut app: App) {
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 50, 40);
    assert!(app.editor.interaction().is_idle());
}

#[rstest]
fn wheel_zooms_only_with_control(mut app: App) {
    mouse(&mut app, MouseEventKind::ScrollDown, 1, 1);
    assert_eq!(app.editor.viewport().scale(), 0.9);

    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 1,
        row: 1,
        modifiers: KeyModifiers::CONTROL,
    });
    assert!((app.editor.viewport().scale() - 0.8).abs() < 1e-12);

    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('+'));
    assert!((app.editor.viewport().scale() - 1.0).abs() < 1e-12);
}

#[rstest]
fn root_offers_only_an_add_button(mut app: App) {
    app.selection = Some(nid("root"));
    let buttons = action_buttons(&app.editor.scene(), &nid("root"), app.canvas_area);
    assert_eq!(buttons.len(), 1);
    assert_eq!(buttons[0].kind, ButtonKind::Add);

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), buttons[0].column, buttons[0].row);
    mouse(&mut app, MouseEventKind::Up(MouseButton::Left), buttons[0].column, buttons[0].row);

    assert_eq!(app.editor.map().tree().root().children().len(), 6);
    assert!(app.editor.interaction().is_idle());
}

#[rstest]
fn delete_button_removes_the_selected_subtree(mut app: App) {
    app.selection = Some(nid("3"));
    let buttons = action_buttons(&app.editor.scene(), &nid("3"), app.canvas_area);
    let delete = buttons.iter().find(|b| b.kind == ButtonKind::Delete).expect("delete button");

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), delete.column, delete.row);

    assert!(!app.editor.map().tree().contains("3"));
    assert_eq!(app.selection, Some(nid("root")));
}

#[rstest]
fn clicking_the_edited_node_does_not_start_a_drag(mut app: App) {
    app.selection = Some(nid("root"));
    press(&mut app, KeyCode::Char('e'));
    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 50, 20);

    assert!(app.editor.interaction().is_idle());
    assert!(matches!(app.mode, Mode::Editing { .. }));

    mouse(&mut app, MouseEventKind::Down(MouseButton::Left), 5, 5);
    assert_eq!(app.mode, Mode::Normal);
}

#[rstest]
fn quit_keys(mut app: App) {
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);

    let mut other = App::new(Editor::new(EditorConfig::default(), None), TuiTheme::default());
    press(&mut other, KeyCode::Char('q'));
    assert!(other.should_quit);
}

#[rstest]
fn footer_follows_mode(mut app: App) {
    let normal = line_to_string(&footer_line(&app, ""));
    assert!(normal.contains("Quit:q"));
    assert!(normal.contains("Scale:90%"));

    app.selection = Some(nid("1"));
    press(&mut app, KeyCode::Char('e'));
    let editing = line_to_string(&footer_line(&app, " | hello"));
    assert!(editing.contains("Editing:1"));
    assert!(editing.ends_with(" | hello"));
}

#[test]
fn draw_renders_labels_and_footer() {
    let mut app = App::new(Editor::new(EditorConfig::default(), None), TuiTheme::default());
    let mut terminal = Terminal::new(TestBackend::new(100, 41)).expect("terminal");
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    assert_eq!(app.canvas_area, Rect::new(0, 0, 100, 40));
    let buffer = terminal.backend().buffer();
    let rows = (0..buffer.area.height)
        .map(|y| (0..buffer.area.width).map(|x| buffer.get(x, y).symbol()).collect::<String>())
        .collect::<Vec<_>>();

    assert!(rows[20].contains("Central idea"), "row 20: {}", rows[20]);
    assert!(rows.iter().any(|row| row.contains("Concept A")));
    assert!(rows[40].contains("Quit:q"));
}
