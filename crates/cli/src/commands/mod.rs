// Copyright (c) 2025 Plotio contributors. Licensed under AGPLv3.
pub mod pins;
pub mod ports;
pub mod run;
pub mod send;
pub mod zero;
