// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_recommended_seat, create_test_assignment, create_test_state};
use crate::{
    ApiError, ImportError, ImportedArrangement, LayoutOrigin, QualityMetrics,
    RecommendationRequest, RecommendationResponse, RecommendedSeat, export_placements,
    import_recommendation,
};
use choir_seat::EditorState;
use choir_seat_domain::{
    DomainError, GridLayout, LayoutSource, MemberId, VoicePart, WorkflowStep, ZigzagPattern,
};

fn response_with(seats: Vec<RecommendedSeat>, grid_layout: Option<GridLayout>) -> RecommendationResponse {
    RecommendationResponse {
        seats,
        grid_layout,
        quality_metrics: QualityMetrics::default(),
        unassigned_members: Vec::new(),
    }
}

#[test]
fn test_request_serializes_layout_fields() {
    let layout: GridLayout = GridLayout::new(vec![4, 3], ZigzagPattern::Odd);

    let json: serde_json::Value = serde_json::to_value(RecommendationRequest::from(&layout)).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"rows": 2, "rowCapacities": [4, 3], "zigzagPattern": "odd"})
    );
}

#[test]
fn test_import_parses_wire_response() {
    let body: &str = r#"{
        "seats": [
            {"memberId": "m-1", "memberName": "Member m-1", "row": 1, "col": 1, "part": "SOPRANO"},
            {"memberId": "m-2", "memberName": "Member m-2", "row": 2, "col": 3, "part": "alto"}
        ],
        "gridLayout": {"rows": 2, "rowCapacities": [3, 3], "zigzagPattern": "even"},
        "qualityMetrics": {"placementRate": 0.9, "partBalance": 0.8, "heightOrder": 0.7},
        "unassignedMembers": ["m-3"]
    }"#;
    let response: RecommendationResponse = serde_json::from_str(body).unwrap();

    let imported: ImportedArrangement = import_recommendation(&response, None).unwrap();

    assert_eq!(imported.layout_origin, LayoutOrigin::Corrected);
    assert_eq!(imported.layout_source, LayoutSource::Recommendation);
    assert_eq!(imported.grid_layout.row_capacities, vec![3, 3]);
    assert_eq!(
        imported.assignments,
        vec![
            create_test_assignment("m-1", VoicePart::Soprano, 0, 0),
            create_test_assignment("m-2", VoicePart::Alto, 1, 2),
        ]
    );
    assert!((imported.quality_metrics.placement_rate - 0.9).abs() < f64::EPSILON);
    assert_eq!(imported.unassigned_members, vec![MemberId::new("m-3")]);
}

#[test]
fn test_invalid_corrected_layout_falls_back_to_requested() {
    let corrected: GridLayout = GridLayout::new(Vec::new(), ZigzagPattern::Even);
    let requested: GridLayout = GridLayout::new(vec![2, 2], ZigzagPattern::None);
    let response: RecommendationResponse = response_with(
        vec![create_recommended_seat("m-1", "TENOR", 2, 2)],
        Some(corrected),
    );

    let imported: ImportedArrangement = import_recommendation(&response, Some(&requested)).unwrap();

    assert_eq!(imported.layout_origin, LayoutOrigin::Requested);
    assert_eq!(imported.grid_layout, requested);
}

#[test]
fn test_missing_layouts_are_recovered_from_seats() {
    let response: RecommendationResponse = response_with(
        vec![
            create_recommended_seat("m-1", "BASS", 1, 1),
            create_recommended_seat("m-2", "BASS", 1, 3),
            create_recommended_seat("m-3", "TENOR", 2, 2),
        ],
        None,
    );

    let imported: ImportedArrangement = import_recommendation(&response, None).unwrap();

    assert_eq!(imported.layout_origin, LayoutOrigin::Recovered);
    assert_eq!(imported.grid_layout.rows, 2);
    assert_eq!(imported.grid_layout.row_capacities, vec![3, 2]);
    assert_eq!(imported.assignments.len(), 3);
}

#[test]
fn test_import_rejects_zero_based_seat() {
    let response: RecommendationResponse =
        response_with(vec![create_recommended_seat("m-1", "ALTO", 0, 1)], None);

    let result: Result<ImportedArrangement, ImportError> = import_recommendation(&response, None);

    assert_eq!(
        result.unwrap_err(),
        ImportError::NonPositiveCoordinate {
            index: 0,
            row: 0,
            col: 1,
        }
    );
}

#[test]
fn test_import_rejects_unknown_part_and_blank_member() {
    let unknown_part: RecommendationResponse = response_with(
        vec![
            create_recommended_seat("m-1", "ALTO", 1, 1),
            create_recommended_seat("m-2", "BARITONE", 1, 2),
        ],
        None,
    );
    let blank_member: RecommendationResponse =
        response_with(vec![create_recommended_seat("  ", "ALTO", 1, 1)], None);

    assert_eq!(
        import_recommendation(&unknown_part, None).unwrap_err(),
        ImportError::UnknownVoicePart {
            index: 1,
            part: String::from("BARITONE"),
        }
    );
    assert_eq!(
        import_recommendation(&blank_member, None).unwrap_err(),
        ImportError::EmptyMemberId { index: 0 }
    );
}

#[test]
fn test_import_rejects_seat_outside_layout() {
    let requested: GridLayout = GridLayout::new(vec![2], ZigzagPattern::Even);
    let response: RecommendationResponse =
        response_with(vec![create_recommended_seat("m-1", "ALTO", 1, 3)], None);

    let result: Result<ImportedArrangement, ImportError> =
        import_recommendation(&response, Some(&requested));

    assert_eq!(
        result.unwrap_err(),
        ImportError::Placement(DomainError::SeatOutOfGrid {
            member_id: String::from("m-1"),
            row: 0,
            col: 2,
        })
    );
}

#[test]
fn test_import_error_becomes_invalid_input() {
    let err: ApiError = ImportError::EmptyMemberId { index: 4 }.into();

    assert_eq!(
        err,
        ApiError::InvalidInput {
            field: String::from("recommendation"),
            message: String::from("Seat 4 has an empty member id"),
        }
    );
}

#[test]
fn test_apply_to_marks_layout_as_recommended() {
    let response: RecommendationResponse =
        response_with(vec![create_recommended_seat("m-1", "ALTO", 1, 1)], None);
    let imported: ImportedArrangement = import_recommendation(&response, None).unwrap();
    let fresh: EditorState = EditorState::new("arr-1");

    let state: EditorState = imported.apply_to(&fresh);

    assert_eq!(state.workflow_step, WorkflowStep::MemberSelection);
    assert_eq!(state.layout_source, LayoutSource::Recommendation);
    assert_eq!(state.assignments.len(), 1);
    assert!(!state.is_pristine());
}

#[test]
fn test_export_placements_is_one_based() {
    let state: EditorState = create_test_state();

    let exported: Vec<RecommendedSeat> = export_placements(&state.assignments);

    assert_eq!(exported.len(), 4);
    assert_eq!(exported[0], create_recommended_seat("s-1", "SOPRANO", 1, 1));
    assert_eq!((exported[3].row, exported[3].col), (2, 2));
}
