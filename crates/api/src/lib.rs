// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boundary contracts for the seat editor.
//!
//! Everything that crosses the editor's edge passes through here: the
//! placement recommender's request and response, the bulk seat save, and
//! CSV export. Domain and core errors are translated into [`ApiError`]
//! before they leave this crate.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod bulk_save;
mod commit;
mod csv_export;
mod error;
mod recommendation;

#[cfg(test)]
mod tests;

pub use bulk_save::{
    BulkSeatSaveRequest, InMemorySeatRepository, SeatPlacement, SeatRepository, save_editor_state,
};
pub use commit::commit_emergency_change;
pub use csv_export::export_assignments_csv;
pub use error::{ApiError, ImportError, translate_core_error, translate_domain_error};
pub use recommendation::{
    ImportedArrangement, LayoutOrigin, QualityMetrics, RecommendationRequest, RecommendationResponse,
    RecommendedSeat, export_placements, import_recommendation,
};
