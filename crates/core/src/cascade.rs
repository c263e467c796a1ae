// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Emergency change simulation.
//!
//! When a member drops out of a filled grid, the editor previews what the
//! grid would look like without them before anything is committed. The
//! simulation is read-only: it takes the committed layout and assignments
//! as arguments and returns a fully materialized "after" state.
//!
//! ## Modes
//!
//! - `LeaveEmpty`: the member is removed and their seat stays empty.
//! - `Manual`: previewed exactly like `LeaveEmpty`; the operator moves
//!   people by hand afterwards.
//! - `AutoPull`: the vacancy is closed by moving other members.
//!
//! ## Auto-pull fill order
//!
//! Row 0 is the back row; the last row faces the audience.
//!
//! 1. Pull forward. While the vacancy is not in the back row, the member of
//!    the same voice part in the row directly behind whose column is closest
//!    to the vacancy (lower column on ties) steps into it. Their old seat
//!    becomes the vacancy.
//! 2. Close the row. In the row holding the final vacancy, everyone to the
//!    right of it shifts one seat left, freeing the row's trailing seat.
//! 3. Shrink. The row loses its trailing seat unless it is already at the
//!    capacity floor.
//! 4. Redistribute. A row at the floor instead borrows the trailing member
//!    of the nearest row above the floor (the row behind wins ties), and
//!    that row shrinks.
//! 5. Otherwise the trailing seat stays empty and is reported as an
//!    unresolved delta on the row's layout change.
//!
//! Auto-pull only runs when step 1 can start: if the row directly behind the
//! vacancy holds no member of the removed member's voice part (always the
//! case in the back row), it falls back to `LeaveEmpty` and nobody moves.

use crate::error::CoreError;
use crate::state::{EditorState, GridState};
use choir_seat_domain::{
    GridLayout, MIN_CAPACITY_PER_ROW, MemberId, SeatAssignment, SeatCoordinate, VoicePart,
    validate_assignments,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use tracing::{debug, warn};

/// How a vacancy is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CascadeMode {
    /// Remove the member and leave the seat empty.
    LeaveEmpty,
    /// Remove the member and close the gap automatically.
    AutoPull,
    /// Remove the member; the operator rearranges by hand.
    Manual,
}

/// Simulation tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeOptions {
    /// No row is shrunk below this many seats.
    pub min_row_capacity: u32,
}

impl Default for CascadeOptions {
    fn default() -> Self {
        Self {
            min_row_capacity: MIN_CAPACITY_PER_ROW,
        }
    }
}

/// The seat being vacated, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyTarget {
    /// 0-based row.
    pub row: i32,
    /// 0-based column.
    pub col: i32,
    /// Voice part of the member expected in the seat.
    pub part: VoicePart,
}

impl EmergencyTarget {
    /// Creates a target.
    #[must_use]
    pub const fn new(row: i32, col: i32, part: VoicePart) -> Self {
        Self { row, col, part }
    }

    const fn coordinate(&self) -> SeatCoordinate {
        SeatCoordinate::new(self.row, self.col)
    }
}

/// A member as referenced by a cascade change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberRef {
    /// Member id.
    pub member_id: MemberId,
    /// Display name.
    pub member_name: String,
    /// Voice part.
    pub part: VoicePart,
}

impl From<&SeatAssignment> for MemberRef {
    fn from(assignment: &SeatAssignment) -> Self {
        Self {
            member_id: assignment.member_id.clone(),
            member_name: assignment.member_name.clone(),
            part: assignment.part,
        }
    }
}

/// The member taken out of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemovedMember {
    /// Who was removed.
    pub member: MemberRef,
    /// Where they sat, 0-based.
    pub position: SeatCoordinate,
    /// Whether they led their row.
    pub was_row_leader: bool,
}

/// One seat whose occupant changes.
///
/// `from_member` sat at `position` before; `to_member` sits there after.
/// `None` means the seat ends up empty (or no longer exists).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CascadeChange {
    /// 0-based seat.
    pub position: SeatCoordinate,
    /// Occupant before the change.
    pub from_member: MemberRef,
    /// Occupant after the change.
    pub to_member: Option<MemberRef>,
}

/// A row whose capacity changes, or could not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayoutChange {
    /// 0-based row.
    pub row: u32,
    /// Capacity before.
    pub before: u32,
    /// Capacity after.
    pub after: u32,
    /// Freed seats that stayed in the layout as gaps.
    pub unresolved: u32,
}

/// The full result of a simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyChangePreview {
    /// The mode that was requested.
    pub mode: CascadeMode,
    /// The mode that was actually applied.
    pub effective_mode: CascadeMode,
    /// The removed member; `None` when the target seat was empty.
    pub removed_member: Option<RemovedMember>,
    /// Seat-by-seat changes in the order they happen.
    pub cascade_changes: Vec<CascadeChange>,
    /// Rows whose capacity changed.
    pub grid_layout_changes: Vec<GridLayoutChange>,
    /// Members relocated, not counting the removed one.
    pub moved_member_count: usize,
    /// Assignments after the change.
    pub simulated_assignments: Vec<SeatAssignment>,
    /// Layout after the change.
    pub simulated_grid_layout: GridLayout,
    #[serde(skip)]
    base: GridState,
}

impl EmergencyChangePreview {
    /// Returns whether the preview changes nothing.
    #[must_use]
    pub const fn is_noop(&self) -> bool {
        self.removed_member.is_none()
    }

    /// Returns whether the simulated layout still has gaps it could not close.
    #[must_use]
    pub fn has_unresolved_gaps(&self) -> bool {
        self.grid_layout_changes.iter().any(|c| c.unresolved > 0)
    }
}

/// Working copy of the grid used while simulating.
struct Simulation {
    assignments: Vec<SeatAssignment>,
    seats: BTreeMap<SeatCoordinate, usize>,
    capacities: Vec<u32>,
    original: HashMap<SeatCoordinate, MemberRef>,
    touched: Vec<SeatCoordinate>,
    moved: HashSet<MemberId>,
}

impl Simulation {
    fn new(layout: &GridLayout, assignments: Vec<SeatAssignment>) -> Self {
        let seats: BTreeMap<SeatCoordinate, usize> = assignments
            .iter()
            .enumerate()
            .map(|(index, a)| (SeatCoordinate::new(a.row, a.col), index))
            .collect();
        let original: HashMap<SeatCoordinate, MemberRef> = assignments
            .iter()
            .map(|a| (SeatCoordinate::new(a.row, a.col), MemberRef::from(a)))
            .collect();
        Self {
            assignments,
            seats,
            capacities: layout.row_capacities.clone(),
            original,
            touched: Vec::new(),
            moved: HashSet::new(),
        }
    }

    fn touch(&mut self, seat: SeatCoordinate) {
        if !self.touched.contains(&seat) {
            self.touched.push(seat);
        }
    }

    fn relocate(&mut self, from: SeatCoordinate, to: SeatCoordinate) {
        let Some(index) = self.seats.remove(&from) else {
            return;
        };
        self.assignments[index].row = to.row;
        self.assignments[index].col = to.col;
        self.moved.insert(self.assignments[index].member_id.clone());
        self.seats.insert(to, index);
        self.touch(from);
        self.touch(to);
    }

    fn capacity(&self, row: i32) -> u32 {
        usize::try_from(row)
            .ok()
            .and_then(|r| self.capacities.get(r).copied())
            .unwrap_or(0)
    }

    fn occupants_of_row(&self, row: i32) -> impl Iterator<Item = (SeatCoordinate, usize)> + '_ {
        self.seats
            .range(SeatCoordinate::new(row, i32::MIN)..=SeatCoordinate::new(row, i32::MAX))
            .map(|(&seat, &index)| (seat, index))
    }

    /// Finds the same-part member behind `vacancy` closest to its column.
    fn puller_for(&self, vacancy: SeatCoordinate, part: VoicePart) -> Option<SeatCoordinate> {
        if vacancy.row <= 0 {
            return None;
        }
        self.occupants_of_row(vacancy.row - 1)
            .filter(|&(_, index)| self.assignments[index].part == part)
            .min_by_key(|&(seat, _)| ((seat.col - vacancy.col).unsigned_abs(), seat.col))
            .map(|(seat, _)| seat)
    }

    fn pull_forward(&mut self, start: SeatCoordinate, part: VoicePart) -> SeatCoordinate {
        let mut vacancy: SeatCoordinate = start;
        while let Some(puller) = self.puller_for(vacancy, part) {
            self.relocate(puller, vacancy);
            vacancy = puller;
        }
        vacancy
    }

    /// Shifts everyone right of `vacancy` one seat left.
    fn close_row(&mut self, vacancy: SeatCoordinate) {
        let to_shift: Vec<SeatCoordinate> = self
            .occupants_of_row(vacancy.row)
            .map(|(seat, _)| seat)
            .filter(|seat| seat.col > vacancy.col)
            .collect();
        for seat in to_shift {
            self.relocate(seat, SeatCoordinate::new(seat.row, seat.col - 1));
        }
    }

    /// Finds the row nearest `row` that can give up its trailing member.
    fn donor_for(&self, row: i32, floor: u32) -> Option<i32> {
        let row_count: i32 = i32::try_from(self.capacities.len()).unwrap_or(i32::MAX);
        (1..row_count)
            .flat_map(|distance| [row - distance, row + distance])
            .filter(|&candidate| candidate >= 0 && candidate < row_count)
            .find(|&candidate| {
                let capacity: u32 = self.capacity(candidate);
                capacity > floor && self.seats.contains_key(&trailing_seat(candidate, capacity))
            })
    }

    fn shrink(&mut self, row: i32) {
        if let Some(capacity) = usize::try_from(row)
            .ok()
            .and_then(|r| self.capacities.get_mut(r))
        {
            *capacity = capacity.saturating_sub(1);
        }
    }

    fn changes(&self) -> Vec<CascadeChange> {
        self.touched
            .iter()
            .filter_map(|seat| {
                let from_member: MemberRef = self.original.get(seat)?.clone();
                let to_member: Option<MemberRef> = self
                    .seats
                    .get(seat)
                    .map(|&index| MemberRef::from(&self.assignments[index]));
                if to_member.as_ref().map(|m| &m.member_id) == Some(&from_member.member_id) {
                    return None;
                }
                Some(CascadeChange {
                    position: *seat,
                    from_member,
                    to_member,
                })
            })
            .collect()
    }

    fn into_assignments(self) -> Vec<SeatAssignment> {
        let mut assignments: Vec<SeatAssignment> = self.assignments;
        assignments.sort_by_key(|a| (a.row, a.col));
        assignments
    }
}

#[allow(clippy::cast_possible_wrap)]
const fn trailing_seat(row: i32, capacity: u32) -> SeatCoordinate {
    SeatCoordinate::new(row, capacity as i32 - 1)
}

fn layout_changes(
    before: &GridLayout,
    after: &[u32],
    unresolved: &BTreeMap<u32, u32>,
) -> Vec<GridLayoutChange> {
    (0u32..)
        .zip(before.row_capacities.iter().zip(after))
        .filter_map(|(row, (&was, &now))| {
            let gaps: u32 = unresolved.get(&row).copied().unwrap_or(0);
            (was != now || gaps > 0).then_some(GridLayoutChange {
                row,
                before: was,
                after: now,
                unresolved: gaps,
            })
        })
        .collect()
}

fn noop_preview(
    layout: &GridLayout,
    assignments: &[SeatAssignment],
    mode: CascadeMode,
) -> EmergencyChangePreview {
    EmergencyChangePreview {
        mode,
        effective_mode: mode,
        removed_member: None,
        cascade_changes: Vec::new(),
        grid_layout_changes: Vec::new(),
        moved_member_count: 0,
        simulated_assignments: assignments.to_vec(),
        simulated_grid_layout: layout.clone(),
        base: GridState {
            grid_layout: Some(layout.clone()),
            assignments: assignments.to_vec(),
        },
    }
}

/// Previews the removal of the member seated at `target`.
///
/// Nothing is mutated. The returned preview carries the complete simulated
/// grid so the caller can render it before asking for confirmation.
///
/// # Arguments
///
/// * `layout` - The committed grid layout
/// * `assignments` - The committed 0-based assignments
/// * `target` - The seat to vacate
/// * `mode` - How to handle the vacancy
/// * `options` - Simulation tuning
///
/// # Returns
///
/// An empty preview if the target seat is unoccupied; otherwise the
/// simulated result of the requested (or downgraded) mode.
#[must_use]
pub fn simulate_emergency_change(
    layout: &GridLayout,
    assignments: &[SeatAssignment],
    target: EmergencyTarget,
    mode: CascadeMode,
    options: CascadeOptions,
) -> EmergencyChangePreview {
    let vacancy: SeatCoordinate = target.coordinate();
    let Some(target_index) = assignments.iter().position(|a| a.is_at(vacancy)) else {
        debug!(%vacancy, "Emergency target seat is empty; nothing to simulate");
        return noop_preview(layout, assignments, mode);
    };

    let mut remaining: Vec<SeatAssignment> = assignments.to_vec();
    let removed: SeatAssignment = remaining.remove(target_index);
    if removed.part != target.part {
        warn!(
            expected = %target.part,
            actual = %removed.part,
            "Emergency target part does not match the seated member; using the seated member's part"
        );
    }

    let part: VoicePart = removed.part;
    let mut simulation: Simulation = Simulation::new(layout, remaining);
    let effective_mode: CascadeMode = match mode {
        CascadeMode::AutoPull if simulation.puller_for(vacancy, part).is_some() => {
            CascadeMode::AutoPull
        }
        CascadeMode::AutoPull => {
            debug!(
                %part,
                %vacancy,
                "No member of the part behind the seat to pull; leaving it empty"
            );
            CascadeMode::LeaveEmpty
        }
        other => other,
    };

    simulation.original.insert(vacancy, MemberRef::from(&removed));
    simulation.touch(vacancy);

    let mut unresolved: BTreeMap<u32, u32> = BTreeMap::new();
    if effective_mode == CascadeMode::AutoPull {
        let final_vacancy: SeatCoordinate = simulation.pull_forward(vacancy, part);
        simulation.close_row(final_vacancy);

        let row: i32 = final_vacancy.row;
        let capacity: u32 = simulation.capacity(row);
        let donor: Option<i32> = if capacity > options.min_row_capacity || capacity == 0 {
            None
        } else {
            simulation.donor_for(row, options.min_row_capacity)
        };

        if capacity > options.min_row_capacity {
            simulation.shrink(row);
        } else if let Some(donor) = donor {
            let donor_seat: SeatCoordinate = trailing_seat(donor, simulation.capacity(donor));
            simulation.relocate(donor_seat, trailing_seat(row, capacity));
            simulation.shrink(donor);
            debug!(row, donor, "Row is at its capacity floor; borrowed a seat from another row");
        } else if let Ok(row_index) = u32::try_from(row) {
            unresolved.insert(row_index, 1);
            debug!(row, "Row is at its capacity floor; leaving an unresolved gap");
        }
    }

    let cascade_changes: Vec<CascadeChange> = simulation.changes();
    let moved_member_count: usize = simulation.moved.len();
    let grid_layout_changes: Vec<GridLayoutChange> =
        layout_changes(layout, &simulation.capacities, &unresolved);
    let simulated_grid_layout: GridLayout = GridLayout {
        row_capacities: simulation.capacities.clone(),
        ..layout.clone()
    };

    debug!(
        member_id = %removed.member_id,
        ?mode,
        ?effective_mode,
        moved_member_count,
        changes = cascade_changes.len(),
        "Simulated emergency change"
    );

    EmergencyChangePreview {
        mode,
        effective_mode,
        removed_member: Some(RemovedMember {
            member: MemberRef::from(&removed),
            position: vacancy,
            was_row_leader: removed.is_row_leader,
        }),
        cascade_changes,
        grid_layout_changes,
        moved_member_count,
        simulated_assignments: simulation.into_assignments(),
        simulated_grid_layout,
        base: GridState {
            grid_layout: Some(layout.clone()),
            assignments: assignments.to_vec(),
        },
    }
}

/// Simulates an emergency change against the editor's current grid.
///
/// # Errors
///
/// Returns `CoreError::NoGridLayout` if no layout has been chosen yet.
pub fn simulate_for_state(
    state: &EditorState,
    target: EmergencyTarget,
    mode: CascadeMode,
    options: CascadeOptions,
) -> Result<EmergencyChangePreview, CoreError> {
    let layout: &GridLayout = state.grid_layout.as_ref().ok_or(CoreError::NoGridLayout)?;
    Ok(simulate_emergency_change(
        layout,
        &state.assignments,
        target,
        mode,
        options,
    ))
}

/// Produces the state that results from confirming `preview`.
///
/// The simulated layout and assignments replace the current ones in a
/// single step.
///
/// # Errors
///
/// Returns an error if:
/// - The preview is empty (`CoreError::NothingToApply`)
/// - The state changed since the preview was computed (`CoreError::StalePreview`)
/// - The simulated assignments do not fit the simulated layout
pub fn apply_emergency_change(
    state: &EditorState,
    preview: &EmergencyChangePreview,
) -> Result<EditorState, CoreError> {
    if preview.is_noop() {
        return Err(CoreError::NothingToApply);
    }
    if state.grid_layout != preview.base.grid_layout || state.assignments != preview.base.assignments
    {
        return Err(CoreError::StalePreview);
    }

    validate_assignments(
        &preview.simulated_grid_layout,
        &preview.simulated_assignments,
    )?;

    Ok(state.with_grid_state(GridState {
        grid_layout: Some(preview.simulated_grid_layout.clone()),
        assignments: preview.simulated_assignments.clone(),
    }))
}
