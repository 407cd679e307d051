// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
pub mod commands;
pub mod link;
pub mod wiring;
