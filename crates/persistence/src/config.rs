// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::Duration;

/// Quiet period after the last edit before a draft is written.
pub const DEFAULT_DEBOUNCE: Duration = Duration::seconds(2);

/// Period of the forced backup write.
pub const DEFAULT_INTERVAL: Duration = Duration::seconds(30);

/// Age after which a stored draft is swept.
pub const DEFAULT_DRAFT_TTL: Duration = Duration::days(7);

/// Autosave timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutosaveConfig {
    /// Quiet period after an edit before writing.
    pub debounce: Duration,
    /// Period of the forced write. Zero or negative disables it.
    pub interval: Duration,
    /// Maximum age of a draft kept by the startup sweep.
    pub draft_ttl: Duration,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            interval: DEFAULT_INTERVAL,
            draft_ttl: DEFAULT_DRAFT_TTL,
        }
    }
}
