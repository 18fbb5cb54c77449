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

//! A wrapper around `named-checkzone` for checking the validity and
//! syntax of zone files.
//!
//! ```no_run
//! use std::path::Path;
//! use zoneedit::check::ZoneCheck;
//!
//! # fn main() -> std::io::Result<()> {
//! let mut check = ZoneCheck::new();
//! if !check.is_valid("example.com", Path::new("/var/named/zones/example.com"))? {
//!     eprintln!("{}", check.error().unwrap_or("unknown"));
//! }
//! # Ok(())
//! # }
//! ```

use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::Command;

use log::debug;

/// A wrapper around BIND's `named-checkzone` utility, used for
/// checking the syntax of a zone file.
pub struct ZoneCheck {
    checkzone: OsString,
    error: Option<&'static str>,
}

impl ZoneCheck {
    /// Creates a `ZoneCheck` that runs `named-checkzone` from the
    /// default `PATH`.
    pub fn new() -> Self {
        Self::with_program("named-checkzone")
    }

    /// Creates a `ZoneCheck` that runs the checking program at
    /// `program`.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            checkzone: program.into(),
            error: None,
        }
    }

    /// Asks the checking program whether the zone file at `path` is a
    /// valid rendition of `zone_name`.
    ///
    /// The program's exit status is collapsed into a bool; a failed
    /// check additionally records a fixed "bad syntax" classification,
    /// readable through [`ZoneCheck::error`] until the next check.
    /// Only a failure to invoke the program at all is an error.
    pub fn is_valid(&mut self, zone_name: &str, path: &Path) -> io::Result<bool> {
        debug!(
            "checking zone {} at {} with {:?}",
            zone_name,
            path.display(),
            self.checkzone,
        );
        let status = Command::new(&self.checkzone)
            .arg("-q")
            .arg(zone_name)
            .arg(path)
            .status()?;

        if status.success() {
            self.error = None;
            Ok(true)
        } else {
            self.error = Some("bad syntax");
            Ok(false)
        }
    }

    /// Returns the classification of the most recent failed check, or
    /// [`None`] if the most recent check passed.
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }
}

impl Default for ZoneCheck {
    fn default() -> Self {
        Self::new()
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////
