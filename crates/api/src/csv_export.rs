// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! CSV export of a seating chart.

use crate::error::ApiError;
use choir_seat_domain::{SeatAssignment, to_one_based_all};
use serde::Serialize;

const HEADER: [&str; 6] = ["row", "col", "member_id", "member_name", "part", "row_leader"];

/// One exported seat, 1-based.
#[derive(Debug, Serialize)]
struct CsvSeatRow<'a> {
    row: i32,
    col: i32,
    member_id: &'a str,
    member_name: &'a str,
    part: &'static str,
    row_leader: bool,
}

/// Writes `assignments` as CSV, ordered by row then column.
///
/// Columns are `row,col,member_id,member_name,part,row_leader` with 1-based
/// coordinates. The header is written even when there are no seats.
///
/// # Errors
///
/// Returns `ApiError::Internal` if the CSV cannot be produced.
pub fn export_assignments_csv(assignments: &[SeatAssignment]) -> Result<String, ApiError> {
    let mut seats: Vec<SeatAssignment> = to_one_based_all(assignments);
    seats.sort_by_key(|a| (a.row, a.col));

    let mut writer: csv::Writer<Vec<u8>> = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .map_err(|err| csv_failure(&err))?;
    for seat in &seats {
        writer
            .serialize(CsvSeatRow {
                row: seat.row,
                col: seat.col,
                member_id: seat.member_id.value(),
                member_name: &seat.member_name,
                part: seat.part.as_str(),
                row_leader: seat.is_row_leader,
            })
            .map_err(|err| csv_failure(&err))?;
    }

    let bytes: Vec<u8> = writer
        .into_inner()
        .map_err(|err| csv_failure(&err.into_error()))?;
    String::from_utf8(bytes).map_err(|err| csv_failure(&err))
}

fn csv_failure(err: &dyn std::error::Error) -> ApiError {
    ApiError::Internal {
        message: format!("Failed to write CSV: {err}"),
    }
}
