// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_layout;
use crate::{
    DomainError, GridLayout, MAX_CAPACITY_PER_ROW, MAX_ROWS, SeatCoordinate, SeatPosition,
    ZigzagPattern, auto_distribute_seats, calculate_all_seat_positions,
    calculate_grid_layout_from_seats, validate_grid_layout,
};

#[test]
fn test_auto_distribute_gives_remainder_to_front_rows() {
    let capacities: Vec<u32> = auto_distribute_seats(80, 6);
    assert_eq!(capacities, vec![13, 13, 13, 13, 14, 14]);
}

#[test]
fn test_auto_distribute_exact_division() {
    let capacities: Vec<u32> = auto_distribute_seats(40, 4);
    assert_eq!(capacities, vec![10, 10, 10, 10]);
}

#[test]
fn test_auto_distribute_fewer_members_than_rows() {
    let capacities: Vec<u32> = auto_distribute_seats(2, 5);
    assert_eq!(capacities, vec![0, 0, 0, 1, 1]);
}

#[test]
fn test_auto_distribute_degenerate_inputs() {
    assert_eq!(auto_distribute_seats(0, 3), vec![0, 0, 0]);
    assert_eq!(auto_distribute_seats(-4, 2), vec![0, 0]);
    assert!(auto_distribute_seats(10, 0).is_empty());
    assert!(auto_distribute_seats(10, -1).is_empty());
}

#[test]
fn test_auto_distribute_preserves_total_and_balance() {
    for total in 0..=120 {
        for rows in 1..=12 {
            let capacities: Vec<u32> = auto_distribute_seats(total, rows);
            let sum: u32 = capacities.iter().sum();
            assert_eq!(sum, u32::try_from(total).unwrap());

            let max: u32 = *capacities.iter().max().unwrap();
            let min: u32 = *capacities.iter().min().unwrap();
            assert!(max - min <= 1, "unbalanced for {total}/{rows}: {capacities:?}");
        }
    }
}

#[test]
fn test_with_auto_distribution_builds_layout() {
    let layout: GridLayout = GridLayout::with_auto_distribution(25, 3, ZigzagPattern::Odd);
    assert_eq!(layout.rows, 3);
    assert_eq!(layout.row_capacities, vec![8, 8, 9]);
    assert_eq!(layout.zigzag_pattern, ZigzagPattern::Odd);
    assert_eq!(layout.total_capacity(), 25);
}

#[test]
fn test_validate_accepts_valid_layout() {
    let layout: GridLayout = create_test_layout(&[10, 12, 14]);
    assert!(validate_grid_layout(&layout));
    assert_eq!(layout.validate(), Ok(()));
}

#[test]
fn test_validate_rejects_zero_rows() {
    let layout: GridLayout = create_test_layout(&[]);
    assert!(!validate_grid_layout(&layout));
    assert_eq!(
        layout.validate(),
        Err(DomainError::InvalidRowCount { rows: 0 })
    );
}

#[test]
fn test_validate_rejects_too_many_rows() {
    let capacities: Vec<u32> = vec![5; (MAX_ROWS + 1) as usize];
    let layout: GridLayout = create_test_layout(&capacities);
    assert!(!validate_grid_layout(&layout));
}

#[test]
fn test_validate_rejects_length_mismatch() {
    let mut layout: GridLayout = create_test_layout(&[10, 10]);
    layout.rows = 3;
    assert_eq!(
        layout.validate(),
        Err(DomainError::RowCapacityCountMismatch {
            rows: 3,
            capacities: 2
        })
    );
}

#[test]
fn test_validate_rejects_out_of_bounds_capacity() {
    let layout: GridLayout = create_test_layout(&[10, 0, 10]);
    assert_eq!(
        layout.validate(),
        Err(DomainError::InvalidRowCapacity {
            row: 1,
            capacity: 0
        })
    );

    let layout: GridLayout = create_test_layout(&[MAX_CAPACITY_PER_ROW + 1]);
    assert!(!validate_grid_layout(&layout));
}

#[test]
fn test_contains_checks_row_and_column() {
    let layout: GridLayout = create_test_layout(&[3, 2]);
    assert!(layout.contains(0, 2));
    assert!(layout.contains(1, 1));
    assert!(!layout.contains(1, 2));
    assert!(!layout.contains(2, 0));
    assert!(!layout.contains(-1, 0));
    assert!(!layout.contains(0, -1));
}

#[test]
fn test_layout_from_seats_uses_max_column_per_row() {
    let seats: Vec<SeatCoordinate> = vec![
        SeatCoordinate::new(1, 1),
        SeatCoordinate::new(1, 5),
        SeatCoordinate::new(2, 3),
    ];

    let layout: GridLayout = calculate_grid_layout_from_seats(&seats);

    assert_eq!(layout.rows, 2);
    assert_eq!(layout.row_capacities, vec![5, 3]);
    assert_eq!(layout.zigzag_pattern, ZigzagPattern::Even);
}

#[test]
fn test_layout_from_seats_fills_missing_rows_with_zero() {
    let seats: Vec<SeatCoordinate> = vec![SeatCoordinate::new(1, 4), SeatCoordinate::new(4, 2)];

    let layout: GridLayout = calculate_grid_layout_from_seats(&seats);

    assert_eq!(layout.rows, 4);
    assert_eq!(layout.row_capacities, vec![4, 0, 0, 2]);
}

#[test]
fn test_layout_from_seats_empty_input_uses_fallback() {
    let seats: Vec<SeatCoordinate> = Vec::new();
    let layout: GridLayout = calculate_grid_layout_from_seats(&seats);
    assert_eq!(layout, GridLayout::fallback());
}

#[test]
fn test_layout_from_seats_ignores_non_positive_coordinates() {
    let seats: Vec<SeatCoordinate> = vec![SeatCoordinate::new(0, 3), SeatCoordinate::new(2, -1)];
    let layout: GridLayout = calculate_grid_layout_from_seats(&seats);
    assert_eq!(layout, GridLayout::fallback());
}

#[test]
fn test_layout_round_trips_through_seat_positions() {
    let layouts: Vec<GridLayout> = vec![
        create_test_layout(&[4, 3]),
        create_test_layout(&[13, 13, 13, 13, 14, 14]),
        GridLayout::new(vec![1, 7, 2, 9], ZigzagPattern::Odd),
    ];

    for layout in layouts {
        let seats: Vec<SeatPosition> = calculate_all_seat_positions(&layout);
        let recovered: GridLayout = calculate_grid_layout_from_seats(&seats);
        assert_eq!(recovered.rows, layout.rows);
        assert_eq!(recovered.row_capacities, layout.row_capacities);
    }
}

#[test]
fn test_layout_serializes_with_camel_case_fields() {
    let mut layout: GridLayout = create_test_layout(&[4, 3]);
    layout.row_offsets.insert(1, Some(0.25));
    layout.row_offsets.insert(0, None);

    let json: serde_json::Value = serde_json::to_value(&layout).unwrap();

    assert_eq!(json["rows"], 2);
    assert_eq!(json["rowCapacities"], serde_json::json!([4, 3]));
    assert_eq!(json["zigzagPattern"], "even");
    assert_eq!(json["rowOffsets"]["1"], 0.25);
    assert!(json["rowOffsets"]["0"].is_null());

    let parsed: GridLayout = serde_json::from_value(json).unwrap();
    assert_eq!(parsed, layout);
}

#[test]
fn test_layout_without_offsets_deserializes() {
    let json: &str = r#"{"rows":1,"rowCapacities":[6],"zigzagPattern":"none"}"#;
    let layout: GridLayout = serde_json::from_str(json).unwrap();
    assert_eq!(layout.zigzag_pattern, ZigzagPattern::None);
    assert!(layout.row_offsets.is_empty());
}
