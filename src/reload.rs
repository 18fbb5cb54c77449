// Copyright 2024 the zoneedit developers.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! A wrapper around `rndc` for requesting zone reloads from `named`.
//!
//! ```no_run
//! use zoneedit::reload::ZoneReload;
//!
//! # fn main() -> Result<(), zoneedit::reload::ReloadError> {
//! ZoneReload::new().reload("example.com")?;
//! # Ok(())
//! # }
//! ```

use std::ffi::OsString;
use std::fmt;
use std::io;
use std::process::Command;

use log::debug;

/// A wrapper around BIND's `rndc` utility, used for reloading a
/// modified DNS zone.
pub struct ZoneReload {
    rndc: OsString,
}

impl ZoneReload {
    /// Creates a `ZoneReload` that runs `rndc` from the default
    /// `PATH`.
    pub fn new() -> Self {
        Self::with_program("rndc")
    }

    /// Creates a `ZoneReload` that runs the control program at
    /// `program`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            rndc: program.into(),
        }
    }

    /// Asks `named` to reload `zone`. There is no result on success;
    /// a non-zero exit fails with the exit code.
    pub fn reload(&self, zone: &str) -> Result<(), ReloadError> {
        debug!("reloading zone {} with {:?}", zone, self.rndc);
        let status = Command::new(&self.rndc)
            .arg("reload")
            .arg(zone)
            .status()
            .map_err(ReloadError::Io)?;

        if status.success() {
            Ok(())
        } else {
            // A process killed by a signal has no exit code; report it
            // the way subprocess conventions do, as a negative value.
            Err(ReloadError::Failed {
                code: status.code().unwrap_or(-1),
            })
        }
    }
}

impl Default for ZoneReload {
    fn default() -> Self {
        Self::new()
    }
}

/// An error from a [`ZoneReload`] request.
#[derive(Debug)]
pub enum ReloadError {
    /// The control program ran but exited non-zero.
    Failed { code: i32 },

    /// The control program could not be invoked.
    Io(io::Error),
}

impl fmt::Display for ReloadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Failed { code } => write!(f, "rndc failed with return code {}", code),
            Self::Io(error) => write!(f, "failed to run rndc: {}", error),
        }
    }
}

impl std::error::Error for ReloadError {}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_zero_exit_is_success() {
        let reload = ZoneReload::with_program("true");
        assert!(reload.reload("example.com").is_ok());
    }

    #[test]
    fn a_nonzero_exit_carries_the_code() {
        let reload = ZoneReload::with_program("false");
        match reload.reload("example.com") {
            Err(ReloadError::Failed { code }) => {
                assert_eq!(code, 1);
            }
            other => panic!("unexpected result: {:?}", other.err()),
        }
    }

    #[test]
    fn a_missing_program_is_an_io_error() {
        let reload = ZoneReload::with_program("zoneedit-no-such-program");
        assert!(matches!(
            reload.reload("example.com"),
            Err(ReloadError::Io(_)),
        ));
    }
}
