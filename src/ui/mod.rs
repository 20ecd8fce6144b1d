// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Panel assembly and presentation
//!
//! # Architecture
//!
//! - **Model**: `Configuration` and the element registry (in `config` and `core`)
//! - **Builders**: assembler and layout adjuster (in `builders/`)
//! - **Controller**: owns one player's panel across re-configurations
//!
//! # Module Structure
//!
//! ```text
//! ui/
//! ├── mod.rs          // This file - exports
//! ├── controller.rs   // Per-player lifecycle (configure, release)
//! ├── file_watcher.rs // Live reload of a configuration file
//! ├── render.rs       // Outline and HTML renderings
//! ├── preview.rs      // GTK4 preview (`gui` feature)
//! ├── builders/       // Panel assembler, layout adjuster
//! └── components/     // Standard element factories and registry
//! ```

pub mod builders;
pub mod components;
pub mod controller;
pub mod file_watcher;
#[cfg(feature = "gui")]
pub mod preview;
pub mod render;

pub use builders::{AssembledPanel, AssemblyError, PanelAssembler};
pub use {
    controller::Controller,
    file_watcher::{ConfigWatcher, WatchStatus},
};

#[cfg(test)]
mod tests;
