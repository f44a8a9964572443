// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Draws the mind map on a braille canvas (ratatui + crossterm) and translates mouse and keyboard
//! input into editor events. One terminal cell counts as `CELL_WIDTH` x `CELL_HEIGHT` screen
//! units, so the editor keeps working in pixel-like units whatever the font.

use std::{
    error::Error,
    io,
    time::{Duration, Instant},
};

use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
        MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
        Paragraph,
    },
};

use crate::canvas::{PointerTarget, SurfaceSize};
use crate::config::EditorConfig;
use crate::editor::{Editor, EditorEvent, Response};
use crate::model::{NodeId, Point};
use crate::ops::{ApplyResult, Outcome};
use crate::render::Scene;

mod theme;

use theme::TuiTheme;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const CELL_WIDTH: f64 = 8.0;
const CELL_HEIGHT: f64 = 16.0;
const EMPTY_LABEL: &str = "…";

/// Runs the interactive terminal UI until the user quits.
pub fn run(config: EditorConfig) -> Result<(), Box<dyn Error>> {
    let theme = TuiTheme::from_env()?;
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(Editor::new(config, None), theme);
    tracing::info!("tui started");

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(250))? {
            app.handle_event(event::read()?);
        }
    }

    tracing::info!(rev = app.editor.map().rev(), "tui stopped");
    Ok(())
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.size());
    let canvas_area = layout[0];
    let status_area = layout[1];
    app.set_canvas_area(canvas_area);

    let scene = app.editor.scene();
    if canvas_area.width > 0 && canvas_area.height > 0 {
        let (right, top) = canvas_bounds(canvas_area);
        let app_view: &App = app;
        let canvas = Canvas::default()
            .background_color(app.theme.base_style().bg.unwrap_or(Color::Reset))
            .marker(Marker::Braille)
            .x_bounds([0.0, right])
            .y_bounds([0.0, top])
            .paint(|ctx| paint_scene(ctx, app_view, &scene, top));
        frame.render_widget(canvas, canvas_area);

        if let Some(selected) = app.selection.as_ref() {
            for button in action_buttons(&scene, selected, canvas_area) {
                let style = match button.kind {
                    ButtonKind::Add => app.theme.add_button_style(),
                    ButtonKind::Delete => app.theme.delete_button_style(),
                };
                frame.render_widget(
                    Paragraph::new(Span::styled(button.kind.glyph(), style)),
                    button.area(),
                );
            }
        }
    }

    let toast_snapshot = app.toast.as_ref().map(|toast| (toast.message.clone(), toast.expires_at));
    let toast_suffix = match toast_snapshot {
        Some((message, expires_at)) if expires_at > Instant::now() => format!(" | {message}"),
        Some(_) => {
            app.toast = None;
            String::new()
        }
        None => String::new(),
    };
    frame.render_widget(Paragraph::new(footer_line(app, &toast_suffix)), status_area);
}

/// Largest canvas coordinates, chosen so one cell spans exactly one cell's worth of units.
fn canvas_bounds(area: Rect) -> (f64, f64) {
    (
        f64::from(area.width.saturating_sub(1)) * CELL_WIDTH,
        f64::from(area.height.saturating_sub(1)) * CELL_HEIGHT,
    )
}

fn paint_scene(ctx: &mut Context<'_>, app: &App, scene: &Scene, top: f64) {
    // Screen y grows downwards, canvas y upwards.
    let flip = |screen: Point| (screen.x, top - screen.y);

    for segment in &scene.segments {
        let (x1, y1) = flip(scene.canvas_to_screen(segment.from));
        let (x2, y2) = flip(scene.canvas_to_screen(segment.to));
        ctx.draw(&CanvasLine { x1, y1, x2, y2, color: app.theme.link_color() });
    }
    ctx.layer();

    let width = scene.geometry().width * scene.scale;
    let height = scene.geometry().height * scene.scale;
    let max_chars = ((width / CELL_WIDTH).floor() as usize).saturating_sub(2).max(1);

    let dragged = scene.dragged_node.as_ref();
    let ordered = scene
        .nodes
        .iter()
        .filter(|node| Some(&node.id) != dragged)
        .chain(scene.nodes.iter().filter(|node| Some(&node.id) == dragged));

    for node in ordered {
        let selected = app.selection.as_ref() == Some(&node.id);
        let center = scene.canvas_to_screen(node.position);
        let (x, y) = flip(center);
        let color = if selected { Color::White } else { app.theme.level_color(node.level) };
        ctx.draw(&Rectangle {
            x: x - width / 2.0,
            y: y - height / 2.0,
            width,
            height,
            color,
        });

        let label = app.display_label(&node.id, &node.label);
        let label = truncate_label(&label, max_chars);
        let style =
            if selected { app.theme.selection_style() } else { app.theme.label_style(node.level) };
        let label_x = x - label.chars().count() as f64 * CELL_WIDTH / 2.0;
        ctx.print(label_x, y, Line::styled(label, style));
    }
}

fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.is_empty() {
        return EMPTY_LABEL.to_owned();
    }
    if label.chars().count() <= max_chars {
        return label.to_owned();
    }
    let mut out = label.chars().take(max_chars.saturating_sub(1)).collect::<String>();
    out.push_str(EMPTY_LABEL);
    out
}

fn cell_to_screen(area: Rect, column: u16, row: u16) -> Point {
    Point::new(
        (f64::from(column) - f64::from(area.x)) * CELL_WIDTH + CELL_WIDTH / 2.0,
        (f64::from(row) - f64::from(area.y)) * CELL_HEIGHT + CELL_HEIGHT / 2.0,
    )
}

fn surface_for(area: Rect) -> SurfaceSize {
    SurfaceSize::new(f64::from(area.width) * CELL_WIDTH, f64::from(area.height) * CELL_HEIGHT)
}

// Footer and action button helpers.
include!("chrome.rs");

struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Mode {
    Normal,
    /// Label edits are applied live; `original` is restored on Esc.
    Editing { node_id: NodeId, original: String, buffer: String },
    ConfirmReset,
}

/// What a mouse press landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Hit {
    Button(ButtonKind, NodeId),
    Node(NodeId),
    TextField(NodeId),
    Background,
}

impl Hit {
    fn target(&self) -> PointerTarget {
        match self {
            Self::Button(_, node_id) => PointerTarget::ActionButton(node_id.clone()),
            Self::Node(node_id) => PointerTarget::NodeBody(node_id.clone()),
            Self::TextField(node_id) => PointerTarget::NodeTextField(node_id.clone()),
            Self::Background => PointerTarget::Background,
        }
    }
}

struct App {
    editor: Editor,
    theme: TuiTheme,
    selection: Option<NodeId>,
    mode: Mode,
    toast: Option<Toast>,
    canvas_area: Rect,
    should_quit: bool,
}

impl App {
    fn new(editor: Editor, theme: TuiTheme) -> Self {
        Self {
            editor,
            theme,
            selection: None,
            mode: Mode::Normal,
            toast: None,
            canvas_area: Rect::default(),
            should_quit: false,
        }
    }

    fn set_canvas_area(&mut self, area: Rect) {
        self.canvas_area = area;
        if area.width > 0 && area.height > 0 {
            self.editor.handle(EditorEvent::Resize(surface_for(area)));
        }
    }

    fn display_label(&self, node_id: &NodeId, label: &str) -> String {
        match &self.mode {
            Mode::Editing { node_id: editing, buffer, .. } if editing == node_id => {
                format!("{buffer}▏")
            }
            _ => label.to_owned(),
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::FocusLost => {
                self.editor.handle(EditorEvent::PointerLeave);
            }
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match self.mode {
            Mode::Normal => self.handle_normal_key(key.code),
            Mode::Editing { .. } => self.handle_editing_key(key.code),
            Mode::ConfirmReset => self.handle_confirm_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.editor.handle(EditorEvent::ZoomIn);
            }
            KeyCode::Char('-') => {
                self.editor.handle(EditorEvent::ZoomOut);
            }
            KeyCode::Char('a') => {
                let parent = self
                    .selection
                    .clone()
                    .unwrap_or_else(|| self.editor.map().tree().root_id().clone());
                self.add_child(parent);
            }
            KeyCode::Char('x') | KeyCode::Delete => match self.selection.clone() {
                Some(node_id) => self.delete_subtree(node_id),
                None => self.set_toast("Select a node first"),
            },
            KeyCode::Char('e') | KeyCode::Enter => self.start_editing(),
            KeyCode::Tab => self.cycle_selection(true),
            KeyCode::BackTab => self.cycle_selection(false),
            KeyCode::Char('R') => {
                self.mode = Mode::ConfirmReset;
                self.set_toast("Reset the map? Press y to confirm");
            }
            KeyCode::Esc => self.selection = None,
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        let Mode::Editing { node_id, original, buffer } = &mut self.mode else {
            return;
        };
        match code {
            KeyCode::Char(ch) => {
                buffer.push(ch);
                let (node_id, label) = (node_id.clone(), buffer.clone());
                self.rename(node_id, label);
            }
            KeyCode::Backspace => {
                if buffer.pop().is_some() {
                    let (node_id, label) = (node_id.clone(), buffer.clone());
                    self.rename(node_id, label);
                }
            }
            KeyCode::Enter => self.finish_editing(),
            KeyCode::Esc => {
                let (node_id, label) = (node_id.clone(), original.clone());
                self.mode = Mode::Normal;
                self.rename(node_id, label);
                self.set_toast("Edit cancelled");
            }
            _ => {}
        }
    }

    fn handle_confirm_key(&mut self, code: KeyCode) {
        self.mode = Mode::Normal;
        if matches!(code, KeyCode::Char('y') | KeyCode::Char('Y')) {
            self.editor.handle(EditorEvent::Reset);
            self.drop_stale_selection();
            self.set_toast("Map reset");
        } else {
            self.set_toast("Reset cancelled");
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let screen = cell_to_screen(self.canvas_area, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if !self.canvas_contains(mouse.column, mouse.row) {
                    return;
                }
                let hit = self.hit_at(mouse.column, mouse.row);
                if matches!(self.mode, Mode::Editing { .. }) && !matches!(hit, Hit::TextField(_)) {
                    self.finish_editing();
                }
                self.editor.handle(EditorEvent::PointerDown { target: hit.target(), screen });
                match hit {
                    Hit::Button(ButtonKind::Add, node_id) => self.add_child(node_id),
                    Hit::Button(ButtonKind::Delete, node_id) => self.delete_subtree(node_id),
                    Hit::Node(node_id) => self.selection = Some(node_id),
                    Hit::TextField(_) | Hit::Background => {}
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                self.editor.handle(EditorEvent::PointerMove { screen });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.editor.handle(EditorEvent::PointerUp);
            }
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let delta_y = if mouse.kind == MouseEventKind::ScrollDown { 1.0 } else { -1.0 };
                let zoom_modifier = mouse.modifiers.contains(KeyModifiers::CONTROL);
                self.editor.handle(EditorEvent::Wheel { delta_y, zoom_modifier });
            }
            _ => {}
        }
    }

    fn canvas_contains(&self, column: u16, row: u16) -> bool {
        let area = self.canvas_area;
        column >= area.left() && column < area.right() && row >= area.top() && row < area.bottom()
    }

    fn hit_at(&self, column: u16, row: u16) -> Hit {
        let scene = self.editor.scene();
        if let Some(selected) = self.selection.as_ref() {
            let buttons = action_buttons(&scene, selected, self.canvas_area);
            if let Some(button) = buttons.iter().find(|button| button.contains(column, row)) {
                return Hit::Button(button.kind, selected.clone());
            }
        }

        let screen = cell_to_screen(self.canvas_area, column, row);
        match scene.hit_test(screen) {
            Some(node) => match &self.mode {
                Mode::Editing { node_id, .. } if *node_id == node.id => {
                    Hit::TextField(node.id.clone())
                }
                _ => Hit::Node(node.id.clone()),
            },
            None => Hit::Background,
        }
    }

    fn add_child(&mut self, parent_id: NodeId) {
        let response = self.editor.handle(EditorEvent::AddChild { parent_id: parent_id.clone() });
        let Response::Op(result) = response else {
            return;
        };
        match result.added_id() {
            Some(added) => self.set_toast(format!("Added {added} under {parent_id}")),
            None => self.report_ignored(&result),
        }
    }

    fn delete_subtree(&mut self, node_id: NodeId) {
        let parent = self.editor.map().tree().parent_of(node_id.as_str()).map(|p| p.id().clone());
        let Response::Op(result) = self.editor.handle(EditorEvent::DeleteSubtree { node_id }) else {
            return;
        };
        match result.delta() {
            Some(delta) => {
                let removed = delta.removed.len();
                self.selection = parent;
                self.set_toast(format!("Deleted {removed} node(s)"));
            }
            None => self.report_ignored(&result),
        }
    }

    fn rename(&mut self, node_id: NodeId, label: String) {
        if let Response::Op(result) = self.editor.handle(EditorEvent::Rename { node_id, label }) {
            if !result.is_applied() {
                self.mode = Mode::Normal;
                self.report_ignored(&result);
            }
        }
    }

    fn start_editing(&mut self) {
        let Some(node_id) = self.selection.clone() else {
            self.set_toast("Select a node first");
            return;
        };
        let Some(node) = self.editor.map().tree().find(node_id.as_str()) else {
            self.selection = None;
            return;
        };
        let original = node.label().to_owned();
        self.mode = Mode::Editing { node_id, buffer: original.clone(), original };
    }

    fn finish_editing(&mut self) {
        if let Mode::Editing { node_id, .. } = std::mem::replace(&mut self.mode, Mode::Normal) {
            self.set_toast(format!("Renamed {node_id}"));
        }
    }

    fn cycle_selection(&mut self, forward: bool) {
        let ids = self.editor.map().tree().ids();
        if ids.is_empty() {
            return;
        }
        let current =
            self.selection.as_ref().and_then(|id| ids.iter().position(|other| other == id));
        let next = match (current, forward) {
            (None, true) => 0,
            (None, false) => ids.len() - 1,
            (Some(idx), true) => (idx + 1) % ids.len(),
            (Some(idx), false) => (idx + ids.len() - 1) % ids.len(),
        };
        self.selection = ids.into_iter().nth(next);
    }

    fn drop_stale_selection(&mut self) {
        let tree = self.editor.map().tree();
        self.selection = self.selection.take().filter(|id| tree.contains(id.as_str()));
    }

    fn report_ignored(&mut self, result: &ApplyResult) {
        if let Outcome::Ignored(reason) = &result.outcome {
            self.set_toast(format!("Ignored: {reason}"));
        }
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableFocusChange).map_err(
            |err| {
                teardown_terminal();
                err
            },
        )?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableFocusChange, DisableMouseCapture, LeaveAlternateScreen);
}

#[cfg(test)]
mod tests;
