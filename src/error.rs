// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error taxonomy for OS queries

use std::io;
use std::time::Duration;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("`{program}` is not available: {reason}")]
    Unavailable { program: String, reason: String },

    #[error("`{program}` exited with {status}: {stderr}")]
    CommandFailed {
        program: String,
        status: String,
        stderr: String,
    },

    #[error("`{program}` did not finish within {timeout:?}")]
    TimedOut { program: String, timeout: Duration },

    #[error("failed to invoke `{program}`")]
    Invocation {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid value {value:?} for {key}")]
    InvalidConfig { key: &'static str, value: String },
}

impl Error {
    /// True when the error only means "this data source gave us nothing".
    ///
    /// Readers failing this way are skipped; every other error is a fault in
    /// the invocation machinery and aborts the query.
    pub fn is_source_unavailable(&self) -> bool {
        matches!(
            self,
            Error::Unavailable { .. } | Error::CommandFailed { .. } | Error::TimedOut { .. }
        )
    }
}
