// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the drag session.

/// A drag session could not be started.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Another drag is already in progress; it must be dropped or cancelled first.
    #[error("a drag session is already active")]
    AlreadyActive,
}
