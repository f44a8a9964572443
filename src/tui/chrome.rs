// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

// Footer and node action button helpers used by TUI rendering.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonKind {
    Add,
    Delete,
}

impl ButtonKind {
    fn glyph(self) -> &'static str {
        match self {
            Self::Add => "[+]",
            Self::Delete => "[x]",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActionButton {
    kind: ButtonKind,
    column: u16,
    row: u16,
}

impl ActionButton {
    const WIDTH: u16 = 3;

    fn contains(&self, column: u16, row: u16) -> bool {
        row == self.row && column >= self.column && column < self.column + Self::WIDTH
    }

    fn area(&self) -> Rect {
        Rect::new(self.column, self.row, Self::WIDTH, 1)
    }
}

/// Buttons shown on the row below the selected node's box. The root has no delete button.
fn action_buttons(scene: &Scene, selected: &NodeId, area: Rect) -> Vec<ActionButton> {
    let Some(node) = scene.node(selected.as_str()) else {
        return Vec::new();
    };
    let kinds: &[ButtonKind] =
        if node.level == 0 { &[ButtonKind::Add] } else { &[ButtonKind::Add, ButtonKind::Delete] };

    let center = scene.canvas_to_screen(node.position);
    let below_box = center.y + scene.geometry().height / 2.0 * scene.scale + CELL_HEIGHT / 2.0;
    let row = i64::from(area.y) + (below_box / CELL_HEIGHT).floor() as i64;
    let center_column = i64::from(area.x) + (center.x / CELL_WIDTH).floor() as i64;
    let total_width = kinds.len() as i64 * 4 - 1;
    let start = center_column - total_width / 2;

    let width = i64::from(ActionButton::WIDTH);
    let in_area = |column: i64| {
        row >= i64::from(area.top())
            && row < i64::from(area.bottom())
            && column >= i64::from(area.left())
            && column + width <= i64::from(area.right())
    };

    kinds
        .iter()
        .enumerate()
        .filter_map(|(idx, kind)| {
            let column = start + idx as i64 * 4;
            in_area(column).then(|| ActionButton {
                kind: *kind,
                column: column as u16,
                row: row as u16,
            })
        })
        .collect()
}

fn footer_line(app: &App, toast_suffix: &str) -> Line<'static> {
    let mut spans = Vec::<Span<'static>>::new();
    match &app.mode {
        Mode::Normal => {
            push_footer_entry(&mut spans, "ADD", "a");
            push_footer_entry(&mut spans, "DELETE", "x");
            push_footer_entry(&mut spans, "EDIT", "e");
            push_footer_entry(&mut spans, "SELECT", "Tab");
            push_footer_entry(&mut spans, "ZOOM", "+/-");
            push_footer_entry(&mut spans, "RESET", "R");
            push_footer_entry(&mut spans, "QUIT", "q");
        }
        Mode::Editing { node_id, .. } => {
            push_footer_entry(&mut spans, "EDITING", node_id.as_str());
            push_footer_entry(&mut spans, "KEEP", "Enter");
            push_footer_entry(&mut spans, "RESTORE", "Esc");
        }
        Mode::ConfirmReset => {
            push_footer_entry(&mut spans, "RESET MAP?", "y");
            push_footer_entry(&mut spans, "CANCEL", "any key");
        }
    }

    let zoom = format!("{:.0}%", app.editor.viewport().scale() * 100.0);
    push_footer_entry(&mut spans, "SCALE", &zoom);
    if !toast_suffix.is_empty() {
        spans.push(Span::styled(toast_suffix.to_owned(), Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    Line::from(spans)
}

fn push_footer_entry(spans: &mut Vec<Span<'static>>, label: &str, value: &str) {
    if !spans.is_empty() {
        spans.push(Span::styled(" | ", Style::default().fg(FOOTER_LABEL_COLOR)));
    }
    spans.push(Span::styled(
        format!("{}:", footer_label_ucfirst(label)),
        Style::default().fg(FOOTER_LABEL_COLOR),
    ));
    spans.push(Span::styled(
        value.to_owned(),
        Style::default().fg(FOOTER_KEY_COLOR).add_modifier(Modifier::BOLD),
    ));
}

fn footer_label_ucfirst(label: &str) -> String {
    let lower = label.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut out = first.to_uppercase().collect::<String>();
    out.push_str(chars.as_str());
    out
}
