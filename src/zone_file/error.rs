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

//! Error types for zone file parsing.
//!
//! In order to maintain consistency in error messages (and to avoid
//! unnecessary allocation of strings), syntax errors are recorded with
//! an [`ErrorKind`] value that can be used by calling code to get an
//! appropriate error message, together with the [`Position`] at which
//! the problem was found.

use std::fmt;
use std::num::ParseIntError;

use crate::name;
use crate::rr::ValueError;

////////////////////////////////////////////////////////////////////////
// ERROR STRUCTURE                                                     //
////////////////////////////////////////////////////////////////////////

/// A zone file syntax error: an [`ErrorKind`] plus the [`Position`] at
/// which it was detected.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    position: Position,
    kind: ErrorKind,
}

impl Error {
    pub(super) fn new(position: Position, kind: ErrorKind) -> Self {
        Self { position, kind }
    }

    /// Returns the line in the file at which the error occurred.
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Returns the column in the file at which the error occurred.
    pub fn column(&self) -> usize {
        self.position.column
    }

    /// Returns the kind of syntax error that occurred.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} at line {} column {}",
            self.kind, self.position.line, self.position.column,
        )
    }
}

impl std::error::Error for Error {}

/// A result type for zone file parsing.
pub type Result<T> = std::result::Result<T, Error>;

/// A position (line and column, both 1-based) in a zone file.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

////////////////////////////////////////////////////////////////////////
// SYNTAX ERROR KINDS                                                  //
////////////////////////////////////////////////////////////////////////

/// Kinds of zone file syntax errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    EmptyOwnerWithNoPrevious,
    EofBeforeCloseParen,
    EofInQuotedCharacterString,
    EolInQuotedCharacterString,
    Expected(&'static str),
    ExpectedEol,
    IncludeNotSupported,
    InvalidInt(ParseIntError),
    InvalidName(name::Error),
    InvalidValue(ValueError),
    NestedParens,
    OmittedTtlWithNoDefaultOrPrevious,
    UnknownDirective(String),
    UnmatchedCloseParen,
    UnsupportedClass(String),
    UnsupportedType(String),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EmptyOwnerWithNoPrevious => {
                f.write_str("the owner cannot be empty when no previous owner is available")
            }
            Self::EofBeforeCloseParen => {
                f.write_str("reached end of file before close parenthesis")
            }
            Self::EofInQuotedCharacterString => {
                f.write_str("reached end of file in quoted <character-string>")
            }
            Self::EolInQuotedCharacterString => {
                f.write_str("reached end of line in quoted <character-string>")
            }
            Self::Expected(what) => write!(f, "expected {}", what),
            Self::ExpectedEol => f.write_str("expected end of line"),
            Self::IncludeNotSupported => f.write_str("$INCLUDE is not supported"),
            Self::InvalidInt(error) => write!(f, "invalid integer: {}", error),
            Self::InvalidName(error) => write!(f, "invalid name: {}", error),
            Self::InvalidValue(error) => write!(f, "invalid record data: {}", error),
            Self::NestedParens => f.write_str("nested parentheses"),
            Self::OmittedTtlWithNoDefaultOrPrevious => {
                f.write_str("the TTL cannot be omitted when no default or previous TTL is available")
            }
            Self::UnknownDirective(directive) => write!(f, "unknown directive {}", directive),
            Self::UnmatchedCloseParen => f.write_str("unmatched close parenthesis"),
            Self::UnsupportedClass(class) => write!(f, "unsupported class {}", class),
            Self::UnsupportedType(rr_type) => write!(f, "unsupported record type {}", rr_type),
        }
    }
}
