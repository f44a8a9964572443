// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for mind maps.
//!
//! The radial layout computes initial node placement at creation and reset time; later inserts
//! are seeded next to their parent so dragged positions are never recomputed.

pub mod radial;

pub use radial::{layout_radial, RadialLayout};
