// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// Core data types shared by every adapter.
pub mod models;

/// Pure normalization services (dates, relevance).
pub mod services;

/// The source adapter contract.
pub mod source;
