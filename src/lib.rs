// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Arbor: a mind-map editor core with a radial layout and a pan/zoom/drag canvas.
//!
//! The engine (`model`, `ops`, `layout`, `canvas`, `render`, `editor`) is front-end agnostic and
//! works in logical canvas units; `tui` is one front-end for it.

pub mod canvas;
pub mod config;
pub mod editor;
pub mod layout;
pub mod logging;
pub mod model;
pub mod ops;
pub mod render;
pub mod tui;
