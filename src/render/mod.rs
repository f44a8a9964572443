// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render-ready output derived from a mind map.
//!
//! Nothing here draws. A renderer gets a [`Scene`]: flattened nodes with depth and position,
//! trimmed connection segments, and the current view and interaction state.

pub mod connections;
pub mod scene;

pub use connections::{
    connection_segments, derive_connections, trim_segment, Connection, Segment,
};
pub use scene::{flatten, NodeGeometry, Scene, SceneNode};
