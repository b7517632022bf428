// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod settings;
pub mod sources;

pub use settings::Settings;
pub use sources::{default_sources, ScrapeSite, SourceConfig, SourceFamily};
