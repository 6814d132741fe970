// Copyright 2025 the Rill Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data ingestion for `rill_charts`.
//!
//! Two small concerns live here, both `std`-only so the chart crate can stay
//! `no_std`:
//! - [`query`]: raw query-string parameter extraction (the page contract:
//!   `csvpath` names the CSV resource, `layerType` titles the legend).
//! - [`loader`]: CSV parsing into [`rill_charts::Record`]s, with a typed
//!   error for every failure mode: a load that goes wrong is surfaced to
//!   the user as a visible fallback state, never a silently blank chart.

pub mod loader;
pub mod query;

pub use loader::{LoadError, load_records, read_records};
pub use query::param_value;
