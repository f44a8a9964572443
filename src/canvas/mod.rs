// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Arbor-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Arbor and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Canvas view state: screen/canvas coordinate transform and pointer interaction.

pub mod interaction;
pub mod viewport;

pub use interaction::{Interaction, InteractionKind, PointerTarget};
pub use viewport::{SurfaceSize, ViewConfig, Viewport};
