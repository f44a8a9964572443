// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::{env, error::Error, fmt};

use ratatui::style::{Color, Modifier, Style};

pub(crate) const PALETTE_ENV: &str = "ARBOR_PALETTE";

/// Node colors by depth; deeper nodes reuse the last entry.
const LEVEL_COLORS: [Color; LEVELS] = [
    Color::Rgb(0x25, 0x63, 0xeb),
    Color::Rgb(0x63, 0x66, 0xf1),
    Color::Rgb(0xa8, 0x55, 0xf7),
    Color::Rgb(0xec, 0x48, 0x99),
    Color::Rgb(0xfb, 0x71, 0x85),
    Color::Rgb(0xfb, 0x92, 0x3c),
    Color::Rgb(0xfb, 0xbf, 0x24),
];
const LEVELS: usize = 7;
const LINK_COLOR: Color = Color::Rgb(0x94, 0xa3, 0xb8);

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        let palette = palette_override_from_env()?;
        Ok(Self { palette })
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    pub(crate) fn level_color(&self, level: usize) -> Color {
        let idx = level.min(LEVELS - 1);
        match &self.palette {
            Some(palette) => palette.levels[idx],
            None => LEVEL_COLORS[idx],
        }
    }

    pub(crate) fn link_color(&self) -> Color {
        match &self.palette {
            Some(palette) => palette.fg,
            None => LINK_COLOR,
        }
    }

    pub(crate) fn label_style(&self, level: usize) -> Style {
        self.base_style().fg(self.level_color(level)).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn add_button_style(&self) -> Style {
        self.base_style().fg(Color::Green).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn delete_button_style(&self) -> Style {
        self.base_style().fg(Color::Red).add_modifier(Modifier::BOLD)
    }
}

#[derive(Debug, Clone)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    levels: [Color; LEVELS],
}

impl TuiPalette {
    const FIELDS: usize = 2 + LEVELS;

    /// `fg,bg,level0,...,level6`; each entry is anything `ratatui` parses as a color
    /// (`#RRGGBB`, a name such as `lightblue`, or a 256-color index).
    fn parse_csv(value: &str) -> Result<Self, String> {
        let parts = value.split(',').map(str::trim).collect::<Vec<_>>();
        if parts.len() != Self::FIELDS {
            return Err(format!(
                "expected {} comma-separated colors (fg,bg,level0..level6), got {}",
                Self::FIELDS,
                parts.len()
            ));
        }

        let colors = parts
            .iter()
            .map(|part| part.parse::<Color>().map_err(|_| format!("unknown color {part:?}")))
            .collect::<Result<Vec<_>, _>>()?;
        let mut levels = [Color::Reset; LEVELS];
        levels.copy_from_slice(&colors[2..]);
        Ok(Self { fg: colors[0], bg: colors[1], levels })
    }
}

fn palette_override_from_env() -> Result<Option<TuiPalette>, ThemeError> {
    match env::var(PALETTE_ENV) {
        Ok(value) => palette_override_from_value(&value),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(raw)) => Err(ThemeError::InvalidPalette {
            value: raw.to_string_lossy().into_owned(),
            reason: "not valid unicode".to_owned(),
        }),
    }
}

/// A blank value means "no override".
fn palette_override_from_value(value: &str) -> Result<Option<TuiPalette>, ThemeError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    TuiPalette::parse_csv(value)
        .map(Some)
        .map_err(|reason| ThemeError::InvalidPalette { value: value.to_owned(), reason })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ThemeError {
    InvalidPalette { value: String, reason: String },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPalette { value, reason } => {
                write!(f, "invalid {PALETTE_ENV}={value:?}: {reason}")
            }
        }
    }
}

impl Error for ThemeError {}
