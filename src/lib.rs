// Copyright (c) 2025 moa-crawler contributors
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 오케스트레이터 모듈
///
/// Fans out over registered sources and aggregates batch results
pub mod application;

/// 설정 모듈
///
/// Engine settings and the static source registry
pub mod config;

/// 도메인 모듈
///
/// The common item schema, normalization services and the adapter
/// contract
pub mod domain;

/// 인프라 모듈
///
/// Source adapters: HTML scraping, remote tool invocation, search API,
/// simulation
pub mod infrastructure;

/// 유틸리티 모듈
///
/// Telemetry, URL resolution and text helpers
pub mod utils;
