// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::coordinate::{HasSeatCoordinate, SeatCoordinate};
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies a choir member within an arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(String);

impl MemberId {
    /// Creates a new `MemberId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    /// Creates a `MemberId`, rejecting empty or blank values.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMemberId` if the value is blank.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        if value.trim().is_empty() {
            return Err(DomainError::InvalidMemberId(String::from(
                "Member id cannot be empty",
            )));
        }
        Ok(Self::new(value))
    }

    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The voice part a member sings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoicePart {
    /// Soprano
    Soprano,
    /// Alto
    Alto,
    /// Tenor
    Tenor,
    /// Bass
    Bass,
    /// Members seated outside the four standard parts.
    Special,
}

impl VoicePart {
    /// Returns the wire representation of this part.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Soprano => "SOPRANO",
            Self::Alto => "ALTO",
            Self::Tenor => "TENOR",
            Self::Bass => "BASS",
            Self::Special => "SPECIAL",
        }
    }
}

impl FromStr for VoicePart {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SOPRANO" => Ok(Self::Soprano),
            "ALTO" => Ok(Self::Alto),
            "TENOR" => Ok(Self::Tenor),
            "BASS" => Ok(Self::Bass),
            "SPECIAL" => Ok(Self::Special),
            _ => Err(DomainError::InvalidVoicePart(s.to_string())),
        }
    }
}

impl std::fmt::Display for VoicePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One member seated at a 0-based `(row, col)` within an arrangement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatAssignment {
    /// The seated member.
    pub member_id: MemberId,
    /// Display name of the seated member.
    pub member_name: String,
    /// The member's voice part.
    pub part: VoicePart,
    /// 0-based row.
    pub row: i32,
    /// 0-based column.
    pub col: i32,
    /// Whether the member leads their row.
    #[serde(default)]
    pub is_row_leader: bool,
}

impl SeatAssignment {
    /// Creates a new assignment that is not a row leader.
    #[must_use]
    pub fn new(member_id: MemberId, member_name: &str, part: VoicePart, row: i32, col: i32) -> Self {
        Self {
            member_id,
            member_name: member_name.to_string(),
            part,
            row,
            col,
            is_row_leader: false,
        }
    }

    /// Returns whether this assignment occupies `coordinate`.
    #[must_use]
    pub const fn is_at(&self, coordinate: SeatCoordinate) -> bool {
        self.row == coordinate.row && self.col == coordinate.col
    }
}

impl HasSeatCoordinate for SeatAssignment {
    fn coordinate(&self) -> SeatCoordinate {
        SeatCoordinate::new(self.row, self.col)
    }

    fn with_coordinate(&self, coordinate: SeatCoordinate) -> Self {
        Self {
            row: coordinate.row,
            col: coordinate.col,
            ..self.clone()
        }
    }
}

/// The step of the arrangement editor's workflow.
///
/// Serialized as its step number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum WorkflowStep {
    /// Choosing which members take part.
    #[default]
    MemberSelection,
    /// Choosing the grid shape.
    GridSetup,
    /// Placing members on seats.
    Placement,
    /// Reviewing the finished arrangement.
    Review,
}

impl WorkflowStep {
    /// The step every fresh editing session starts on.
    pub const INITIAL: Self = Self::MemberSelection;

    /// Returns the 1-based step number.
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::MemberSelection => 1,
            Self::GridSetup => 2,
            Self::Placement => 3,
            Self::Review => 4,
        }
    }
}

impl TryFrom<u8> for WorkflowStep {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::MemberSelection),
            2 => Ok(Self::GridSetup),
            3 => Ok(Self::Placement),
            4 => Ok(Self::Review),
            _ => Err(DomainError::InvalidWorkflowStep(value)),
        }
    }
}

impl From<WorkflowStep> for u8 {
    fn from(step: WorkflowStep) -> Self {
        step.number()
    }
}

/// Where the current grid layout came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutSource {
    /// Chosen or edited by hand.
    #[default]
    Manual,
    /// Supplied by the placement recommender.
    Recommendation,
}
