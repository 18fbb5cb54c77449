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

//! Implementation of the [`Error`] type for zone-related errors.

use std::fmt;
use std::io;

use crate::name::{self, Name};
use crate::rr::{Type, ValueError};
use crate::zone_file;

/// Errors reported by [`Zone`](super::Zone) and its record-set
/// operations.
#[derive(Debug)]
pub enum Error {
    /// A [`Zone`](super::Zone) was constructed with an empty or
    /// malformed domain.
    InvalidDomain(name::Error),

    /// A name passed to a zone operation was malformed.
    InvalidName(name::Error),

    /// A record value does not have the shape its target type
    /// requires.
    InvalidValue(ValueError),

    /// A value of one type was passed to a record set of another.
    TypeMismatch { expected: Type, found: Type },

    /// A value to be deleted is not present in the record set. The
    /// presentation form of the missing value is carried.
    RecordNotFound(String),

    /// A record's owner is not within the zone.
    NotInZone(Name),

    /// The loaded zone data has no SOA record at the apex.
    MissingSoa,

    /// The loaded zone data has an SOA record away from the apex.
    SoaNotAtApex(Name),

    /// The loaded zone data has more than one SOA record.
    DuplicateSoa,

    /// A save was requested but the zone was not loaded from a file
    /// and no path was given.
    NoSavePath,

    /// The zone file could not be parsed. The parser's diagnostic is
    /// carried unchanged.
    Parse(zone_file::Error),

    /// An I/O error occurred while loading or saving.
    Io(io::Error),
}

impl From<zone_file::Error> for Error {
    fn from(error: zone_file::Error) -> Self {
        Self::Parse(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidDomain(error) => write!(f, "invalid domain: {}", error),
            Self::InvalidName(error) => write!(f, "invalid name: {}", error),
            Self::InvalidValue(error) => write!(f, "invalid record value: {}", error),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {} record data, found {}", expected, found)
            }
            Self::RecordNotFound(value) => write!(f, "no such item in record set: {}", value),
            Self::NotInZone(name) => write!(f, "{} is not within the zone", name),
            Self::MissingSoa => f.write_str("the zone has no SOA record at its apex"),
            Self::SoaNotAtApex(name) => {
                write!(f, "SOA record at {} is not at the zone apex", name)
            }
            Self::DuplicateSoa => f.write_str("the zone has more than one SOA record"),
            Self::NoSavePath => {
                f.write_str("the zone was not loaded from a file and no save path was given")
            }
            Self::Parse(error) => write!(f, "failed to parse zone data: {}", error),
            Self::Io(error) => write!(f, "I/O error: {}", error),
        }
    }
}

impl std::error::Error for Error {}
