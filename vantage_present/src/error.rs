// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Error returned when a drawing surface cannot be created.
///
/// This is a capability failure, not a fatal one: hosts are expected to show a
/// textual fallback instead of the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// The host does not offer a 2D drawing context.
    Unsupported,
    /// Creating the context failed with a host-reported message.
    Context(String),
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported => f.write_str("2D drawing context is not available"),
            Self::Context(msg) => write!(f, "failed to create 2D drawing context: {msg}"),
        }
    }
}

impl core::error::Error for SurfaceError {}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn display_mentions_cause() {
        assert_eq!(
            SurfaceError::Unsupported.to_string(),
            "2D drawing context is not available"
        );
        let err = SurfaceError::Context("blocked".into());
        assert!(err.to_string().ends_with("blocked"));
    }
}
