// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Contract with the seat placement recommender.
//!
//! The recommender speaks 1-based coordinates; the editor works 0-based.
//! Conversion happens here and nowhere else. Seats leaving the editor are
//! converted back with [`export_placements`].

use crate::error::ImportError;
use choir_seat::EditorState;
use choir_seat_domain::{
    GridLayout, LayoutSource, MemberId, SeatAssignment, VoicePart, ZigzagPattern,
    calculate_grid_layout_from_seats, to_one_based_all, to_zero_based_all, validate_assignments,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// The grid shape sent to the recommender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    /// Number of rows.
    pub rows: u32,
    /// Seats per row, back row first.
    pub row_capacities: Vec<u32>,
    /// Stagger rule.
    pub zigzag_pattern: ZigzagPattern,
}

impl From<&GridLayout> for RecommendationRequest {
    fn from(layout: &GridLayout) -> Self {
        Self {
            rows: layout.rows,
            row_capacities: layout.row_capacities.clone(),
            zigzag_pattern: layout.zigzag_pattern,
        }
    }
}

/// One seat proposed by the recommender, 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedSeat {
    /// Member id.
    pub member_id: String,
    /// Display name.
    pub member_name: String,
    /// 1-based row.
    pub row: i32,
    /// 1-based column.
    pub col: i32,
    /// Voice part name.
    pub part: String,
}

/// Scores the recommender attaches to its proposal.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityMetrics {
    /// Share of members placed.
    pub placement_rate: f64,
    /// How evenly parts are spread.
    pub part_balance: f64,
    /// How well heights are ordered front to back.
    pub height_order: f64,
}

/// The recommender's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// Proposed seats.
    pub seats: Vec<RecommendedSeat>,
    /// A corrected layout, when the recommender changed the requested one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_layout: Option<GridLayout>,
    /// Quality scores.
    #[serde(default)]
    pub quality_metrics: QualityMetrics,
    /// Members the recommender could not place.
    #[serde(default)]
    pub unassigned_members: Vec<MemberId>,
}

/// Which layout an import ended up using.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutOrigin {
    /// The corrected layout from the response.
    Corrected,
    /// The layout that was sent in the request.
    Requested,
    /// A layout rebuilt from the seats themselves.
    Recovered,
}

/// A recommendation converted into editor terms.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedArrangement {
    /// The layout to edit in.
    pub grid_layout: GridLayout,
    /// 0-based assignments.
    pub assignments: Vec<SeatAssignment>,
    /// Always `LayoutSource::Recommendation`.
    pub layout_source: LayoutSource,
    /// Where `grid_layout` came from.
    pub layout_origin: LayoutOrigin,
    /// Quality scores from the response.
    pub quality_metrics: QualityMetrics,
    /// Members left without a seat.
    pub unassigned_members: Vec<MemberId>,
}

impl ImportedArrangement {
    /// Returns `state` with its grid replaced by the imported one.
    #[must_use]
    pub fn apply_to(&self, state: &EditorState) -> EditorState {
        EditorState {
            layout_source: self.layout_source,
            grid_layout: Some(self.grid_layout.clone()),
            assignments: self.assignments.clone(),
            ..state.clone()
        }
    }
}

fn parse_seat(index: usize, seat: &RecommendedSeat) -> Result<SeatAssignment, ImportError> {
    if seat.row < 1 || seat.col < 1 {
        return Err(ImportError::NonPositiveCoordinate {
            index,
            row: seat.row,
            col: seat.col,
        });
    }
    let part: VoicePart = seat
        .part
        .parse()
        .map_err(|_| ImportError::UnknownVoicePart {
            index,
            part: seat.part.clone(),
        })?;
    let member_id: MemberId =
        MemberId::parse(&seat.member_id).map_err(|_| ImportError::EmptyMemberId { index })?;

    Ok(SeatAssignment::new(
        member_id,
        &seat.member_name,
        part,
        seat.row,
        seat.col,
    ))
}

/// Converts a recommender response into a validated arrangement.
///
/// The layout is chosen in order of preference:
/// 1. the response's corrected layout, if it is valid
/// 2. `requested_layout`, if given and valid
/// 3. a layout rebuilt from the seats
///
/// # Arguments
///
/// * `response` - The recommender's answer, 1-based
/// * `requested_layout` - The layout the request was made with
///
/// # Errors
///
/// Returns an error if a seat is malformed, or the seats do not fit the
/// chosen layout.
pub fn import_recommendation(
    response: &RecommendationResponse,
    requested_layout: Option<&GridLayout>,
) -> Result<ImportedArrangement, ImportError> {
    let one_based: Vec<SeatAssignment> = response
        .seats
        .iter()
        .enumerate()
        .map(|(index, seat)| parse_seat(index, seat))
        .collect::<Result<_, _>>()?;

    let corrected: Option<&GridLayout> = response.grid_layout.as_ref().filter(|layout| {
        let valid: bool = layout.validate().is_ok();
        if !valid {
            warn!(rows = layout.rows, "Ignoring invalid corrected layout from recommender");
        }
        valid
    });
    let requested: Option<&GridLayout> = requested_layout.filter(|layout| layout.validate().is_ok());

    let (grid_layout, layout_origin): (GridLayout, LayoutOrigin) =
        match (corrected, requested) {
            (Some(layout), _) => (layout.clone(), LayoutOrigin::Corrected),
            (None, Some(layout)) => (layout.clone(), LayoutOrigin::Requested),
            (None, None) => (
                calculate_grid_layout_from_seats(&one_based),
                LayoutOrigin::Recovered,
            ),
        };

    let assignments: Vec<SeatAssignment> = to_zero_based_all(&one_based);
    validate_assignments(&grid_layout, &assignments).map_err(ImportError::Placement)?;

    info!(
        seats = assignments.len(),
        unassigned = response.unassigned_members.len(),
        rows = grid_layout.rows,
        ?layout_origin,
        "Imported recommendation"
    );

    Ok(ImportedArrangement {
        grid_layout,
        assignments,
        layout_source: LayoutSource::Recommendation,
        layout_origin,
        quality_metrics: response.quality_metrics,
        unassigned_members: response.unassigned_members.clone(),
    })
}

/// Converts 0-based editor assignments to 1-based recommender seats.
#[must_use]
pub fn export_placements(assignments: &[SeatAssignment]) -> Vec<RecommendedSeat> {
    to_one_based_all(assignments)
        .into_iter()
        .map(|a| RecommendedSeat {
            member_id: a.member_id.value().to_string(),
            member_name: a.member_name,
            row: a.row,
            col: a.col,
            part: a.part.as_str().to_string(),
        })
        .collect()
}
