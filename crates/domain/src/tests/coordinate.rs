// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_assignment;
use crate::{
    SeatAssignment, SeatCoordinate, VoicePart, coordinate_to_index, index_to_coordinate,
    to_one_based, to_one_based_all, to_zero_based, to_zero_based_all,
};

#[test]
fn test_to_zero_based_subtracts_one_on_both_axes() {
    let coordinate: SeatCoordinate = to_zero_based(SeatCoordinate::new(1, 1));
    assert_eq!(coordinate, SeatCoordinate::new(0, 0));

    let coordinate: SeatCoordinate = to_zero_based(SeatCoordinate::new(3, 7));
    assert_eq!(coordinate, SeatCoordinate::new(2, 6));
}

#[test]
fn test_to_one_based_adds_one_on_both_axes() {
    let coordinate: SeatCoordinate = to_one_based(SeatCoordinate::new(0, 0));
    assert_eq!(coordinate, SeatCoordinate::new(1, 1));
}

#[test]
fn test_conversion_does_not_range_check() {
    let coordinate: SeatCoordinate = to_zero_based(SeatCoordinate::new(0, 0));
    assert_eq!(coordinate, SeatCoordinate::new(-1, -1));
}

#[test]
fn test_round_trip_laws_hold_for_extreme_values() {
    let samples: Vec<SeatCoordinate> = vec![
        SeatCoordinate::new(0, 0),
        SeatCoordinate::new(-5, 12),
        SeatCoordinate::new(i32::MAX, i32::MIN),
        SeatCoordinate::new(i32::MIN, i32::MAX),
    ];

    for coordinate in samples {
        assert_eq!(to_one_based(to_zero_based(coordinate)), coordinate);
        assert_eq!(to_zero_based(to_one_based(coordinate)), coordinate);
    }
}

#[test]
fn test_batch_conversion_preserves_record_fields() {
    let mut leader: SeatAssignment = create_test_assignment("m-1", VoicePart::Alto, 2, 5);
    leader.is_row_leader = true;
    let records: Vec<SeatAssignment> = vec![
        leader,
        create_test_assignment("m-2", VoicePart::Bass, 1, 1),
    ];

    let converted: Vec<SeatAssignment> = to_zero_based_all(&records);

    assert_eq!(converted.len(), 2);
    assert_eq!((converted[0].row, converted[0].col), (1, 4));
    assert!(converted[0].is_row_leader);
    assert_eq!(converted[0].part, VoicePart::Alto);
    assert_eq!(converted[0].member_name, "Member m-1");
    assert_eq!((converted[1].row, converted[1].col), (0, 0));

    let restored: Vec<SeatAssignment> = to_one_based_all(&converted);
    assert_eq!(restored, records);
}

#[test]
fn test_coordinate_to_index_is_row_major() {
    assert_eq!(coordinate_to_index(SeatCoordinate::new(0, 0), 10), 0);
    assert_eq!(coordinate_to_index(SeatCoordinate::new(0, 9), 10), 9);
    assert_eq!(coordinate_to_index(SeatCoordinate::new(1, 0), 10), 10);
    assert_eq!(coordinate_to_index(SeatCoordinate::new(3, 4), 10), 34);
}

#[test]
fn test_index_to_coordinate_inverts_coordinate_to_index() {
    for index in 0..60 {
        let coordinate: SeatCoordinate = index_to_coordinate(index, 12);
        assert!(coordinate.col < 12);
        assert_eq!(coordinate_to_index(coordinate, 12), index);
    }
}

#[test]
fn test_index_to_coordinate_with_zero_width_stays_in_first_row() {
    let coordinate: SeatCoordinate = index_to_coordinate(7, 0);
    assert_eq!(coordinate, SeatCoordinate::new(0, 7));
}
