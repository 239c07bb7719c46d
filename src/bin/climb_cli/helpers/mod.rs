// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for the climb-motion CLI
// ABOUTME: Provides display formatting for reports and series inspection

pub mod display;
