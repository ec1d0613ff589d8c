// Copyright (C) 2026 Anthem Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod app;
pub mod chain;
pub mod consts;
pub mod extractors;
pub mod handlers;
pub mod logging;
pub mod metrics;
pub mod openapi;
pub mod routes;
pub mod state;
pub mod upstream;
