// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::bulk_save::{SeatRepository, save_editor_state};
use crate::error::{ApiError, translate_core_error};
use choir_seat::{EditorState, EditorStore, EmergencyChangePreview, apply_emergency_change};
use tracing::{info, warn};

/// Confirms an emergency change preview.
///
/// The previewed grid is saved to `repository` first. Only when the save
/// succeeds is it committed to `store`, as a single undoable step.
///
/// # Arguments
///
/// * `repository` - Server-side seat storage
/// * `store` - The editor state owner
/// * `preview` - A preview computed against the store's current state
///
/// # Returns
///
/// The number of seats saved.
///
/// # Errors
///
/// Returns an error if the preview no longer applies, or the repository
/// rejects the save (for example because the arrangement is confirmed).
/// `store` is unchanged on error.
pub fn commit_emergency_change<R: SeatRepository + ?Sized>(
    repository: &mut R,
    store: &mut EditorStore,
    preview: &EmergencyChangePreview,
) -> Result<usize, ApiError> {
    let next: EditorState =
        apply_emergency_change(store.get_state(), preview).map_err(translate_core_error)?;

    let saved: usize = save_editor_state(repository, &next).inspect_err(|err| {
        warn!(
            arrangement_id = %next.arrangement_id,
            error = %err,
            "Emergency change rejected by seat repository"
        );
    })?;

    info!(
        arrangement_id = %next.arrangement_id,
        moved = preview.moved_member_count,
        saved,
        "Committed emergency change"
    );
    store.commit(next);
    Ok(saved)
}
