// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A mind map is a persistent idea tree plus a position side table keyed by node id.

pub mod ids;
pub mod mind_map;
pub mod positions;
pub mod seed;
pub mod tree;

pub use ids::{Id, IdError, IdGenerator, NodeId};
pub use mind_map::MindMap;
pub use positions::{Point, PositionMap};
pub use seed::{seed_tree, ROOT_ID};
pub use tree::{Node, Tree};
