// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk seat save.
//!
//! An arrangement's seats are saved as a whole: each save replaces the
//! previous seat set entirely. Saves are refused once the arrangement is
//! confirmed.

use crate::error::{ApiError, translate_domain_error};
use choir_seat::EditorState;
use choir_seat_domain::{
    ArrangementStatus, DomainError, MemberId, SeatAssignment, SeatCoordinate, VoicePart,
};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// One seat in a bulk save, 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatPlacement {
    /// Member id.
    pub member_id: MemberId,
    /// 0-based row.
    pub row: i32,
    /// 0-based column.
    pub column: i32,
    /// Voice part.
    pub part: VoicePart,
}

impl From<&SeatAssignment> for SeatPlacement {
    fn from(assignment: &SeatAssignment) -> Self {
        Self {
            member_id: assignment.member_id.clone(),
            row: assignment.row,
            column: assignment.col,
            part: assignment.part,
        }
    }
}

/// A bulk save for one arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSeatSaveRequest {
    /// The arrangement whose seats are replaced.
    pub arrangement_id: String,
    /// The complete new seat set.
    pub seats: Vec<SeatPlacement>,
}

impl BulkSeatSaveRequest {
    /// Builds the request that saves `state`'s assignments.
    #[must_use]
    pub fn from_state(state: &EditorState) -> Self {
        Self {
            arrangement_id: state.arrangement_id.clone(),
            seats: state.assignments.iter().map(SeatPlacement::from).collect(),
        }
    }

    /// Checks that the seat set is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns an error if a coordinate is negative, or a seat or member
    /// appears twice.
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut seats: HashSet<SeatCoordinate> = HashSet::with_capacity(self.seats.len());
        let mut members: HashSet<&MemberId> = HashSet::with_capacity(self.seats.len());

        for placement in &self.seats {
            if placement.row < 0 || placement.column < 0 {
                return Err(ApiError::InvalidInput {
                    field: String::from("seats"),
                    message: format!(
                        "Seat ({}, {}) for member '{}' has a negative coordinate",
                        placement.row, placement.column, placement.member_id
                    ),
                });
            }
            if !seats.insert(SeatCoordinate::new(placement.row, placement.column)) {
                return Err(translate_domain_error(DomainError::DuplicateSeat {
                    row: placement.row,
                    col: placement.column,
                }));
            }
            if !members.insert(&placement.member_id) {
                return Err(translate_domain_error(DomainError::DuplicateMember {
                    member_id: placement.member_id.value().to_string(),
                }));
            }
        }
        Ok(())
    }
}

/// Server-side storage of arrangement seats.
pub trait SeatRepository {
    /// Returns the status of `arrangement_id`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` for an unknown arrangement.
    fn arrangement_status(&self, arrangement_id: &str) -> Result<ArrangementStatus, ApiError>;

    /// Replaces the arrangement's seats with `request.seats`.
    ///
    /// # Returns
    ///
    /// The number of seats stored.
    ///
    /// # Errors
    ///
    /// Returns an error if the arrangement is unknown or confirmed, or the
    /// seat set is invalid. Nothing is changed on error.
    fn save_seats(&mut self, request: &BulkSeatSaveRequest) -> Result<usize, ApiError>;

    /// Returns the arrangement's stored seats.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ResourceNotFound` for an unknown arrangement.
    fn load_seats(&self, arrangement_id: &str) -> Result<Vec<SeatPlacement>, ApiError>;

    /// Moves the arrangement to `target`.
    ///
    /// # Errors
    ///
    /// Returns an error if the arrangement is unknown or the transition is
    /// not permitted.
    fn transition_status(
        &mut self,
        arrangement_id: &str,
        target: ArrangementStatus,
    ) -> Result<(), ApiError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct StoredArrangement {
    status: ArrangementStatus,
    seats: Vec<SeatPlacement>,
}

/// A [`SeatRepository`] held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemorySeatRepository {
    arrangements: HashMap<String, StoredArrangement>,
}

impl InMemorySeatRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new arrangement in `DRAFT` with no seats.
    ///
    /// Returns false if the arrangement already exists.
    pub fn create_arrangement(&mut self, arrangement_id: &str) -> bool {
        if self.arrangements.contains_key(arrangement_id) {
            return false;
        }
        self.arrangements
            .insert(arrangement_id.to_string(), StoredArrangement::default());
        true
    }

    fn arrangement(&self, arrangement_id: &str) -> Result<&StoredArrangement, ApiError> {
        self.arrangements
            .get(arrangement_id)
            .ok_or_else(|| not_found(arrangement_id))
    }

    fn arrangement_mut(&mut self, arrangement_id: &str) -> Result<&mut StoredArrangement, ApiError> {
        self.arrangements
            .get_mut(arrangement_id)
            .ok_or_else(|| not_found(arrangement_id))
    }
}

fn not_found(arrangement_id: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Arrangement"),
        message: format!("Arrangement '{arrangement_id}' does not exist"),
    }
}

impl SeatRepository for InMemorySeatRepository {
    fn arrangement_status(&self, arrangement_id: &str) -> Result<ArrangementStatus, ApiError> {
        Ok(self.arrangement(arrangement_id)?.status)
    }

    fn save_seats(&mut self, request: &BulkSeatSaveRequest) -> Result<usize, ApiError> {
        let stored: &mut StoredArrangement = self.arrangement_mut(&request.arrangement_id)?;
        if !stored.status.allows_mutation() {
            return Err(ApiError::ArrangementLocked {
                arrangement_id: request.arrangement_id.clone(),
                status: stored.status,
            });
        }
        request.validate()?;

        let removed: usize = stored.seats.len();
        stored.seats.clone_from(&request.seats);
        debug!(
            arrangement_id = %request.arrangement_id,
            removed,
            inserted = stored.seats.len(),
            "Replaced arrangement seats"
        );
        Ok(stored.seats.len())
    }

    fn load_seats(&self, arrangement_id: &str) -> Result<Vec<SeatPlacement>, ApiError> {
        Ok(self.arrangement(arrangement_id)?.seats.clone())
    }

    fn transition_status(
        &mut self,
        arrangement_id: &str,
        target: ArrangementStatus,
    ) -> Result<(), ApiError> {
        let stored: &mut StoredArrangement = self.arrangement_mut(arrangement_id)?;
        stored
            .status
            .validate_transition(target)
            .map_err(translate_domain_error)?;
        info!(
            arrangement_id,
            from = %stored.status,
            to = %target,
            "Arrangement status changed"
        );
        stored.status = target;
        Ok(())
    }
}

/// Saves the assignments of `state` as its arrangement's complete seat set.
///
/// # Errors
///
/// Returns any error raised by the repository.
pub fn save_editor_state<R: SeatRepository + ?Sized>(
    repository: &mut R,
    state: &EditorState,
) -> Result<usize, ApiError> {
    repository.save_seats(&BulkSeatSaveRequest::from_state(state))
}
