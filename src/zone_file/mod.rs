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

//! Parsing and serialization of the [RFC 1035 § 5] zone file format.
//!
//! This module provides the [`Parser`] structure, which accepts zone
//! file text and an origin name. It can subsequently be iterated over
//! to read the DNS records stored in [RFC 1035 § 5] format. Relative
//! names are qualified against the origin (which `$ORIGIN` directives
//! may change mid-file), so every produced record carries fully
//! qualified names. `$INCLUDE` directives are reported as an error.
//!
//! Errors are reported through the [`Error`] type, which carries the
//! position of the problem. Iteration ends and parsing cannot be
//! continued after an error is returned.
//!
//! ```
//! use zoneedit::name::Name;
//! use zoneedit::zone_file::{ParsedRdata, Parser};
//!
//! const ZONE_FILE: &str = r#"
//! $ORIGIN example.test.
//! $TTL 86400
//! @   IN SOA ns1 admin (
//!     123     ; SERIAL
//!     3600    ; REFRESH
//!     900     ; RETRY
//!     86400   ; EXPIRE
//!     3600    ; MINIMUM
//! )
//!     IN NS ns1
//! ns1 IN A 127.0.0.1
//!     IN AAAA ::1
//! "#;
//!
//! let origin: Name = "example.test.".parse().unwrap();
//! let mut parser = Parser::new(ZONE_FILE, &origin);
//! assert!(matches!(parser.next().unwrap().unwrap().data, ParsedRdata::Soa(_)));
//! let ns = parser.next().unwrap().unwrap();
//! assert_eq!(ns.owner.as_str(), "example.test.");
//! assert_eq!(parser.count(), 2);
//! ```
//!
//! The reverse direction, rendering a zone back to master file text,
//! lives in the private `writer` submodule and is exposed through
//! [`Zone::to_text`](crate::zone::Zone::to_text).
//!
//! [RFC 1035 § 5]: https://datatracker.ietf.org/doc/html/rfc1035#section-5

use crate::name::Name;
use crate::rr::{Rdata, Soa, Ttl, Type};

pub mod error;
mod reader;
mod record;
mod writer;

pub use error::{Error, ErrorKind, Position, Result};
use reader::{Field, LogicalLine, Reader};
pub(crate) use writer::ZoneText;

////////////////////////////////////////////////////////////////////////
// STRUCTURES                                                          //
////////////////////////////////////////////////////////////////////////

/// A parser for [RFC 1035 § 5] DNS zone files.
///
/// A [`Parser`] accepts zone file text and can then be iterated to
/// read DNS records. See the [module-level documentation](`self`) for
/// details and example usage.
///
/// [RFC 1035 § 5]: https://datatracker.ietf.org/doc/html/rfc1035#section-5
pub struct Parser<'a> {
    error: bool,
    reader: Reader<'a>,
    origin: Name,
    default_ttl: Option<Ttl>,
    previous_owner: Option<Name>,
    previous_ttl: Option<Ttl>,
}

/// A resource record parsed from a zone file, as returned by
/// [`Parser::next`]. This represents a logical line; if parentheses
/// are used, it may span several physical lines, and `line` is the
/// physical line on which it started.
#[derive(Clone, Debug)]
pub struct ParsedRr {
    pub line: usize,
    pub owner: Name,
    pub ttl: Ttl,
    pub data: ParsedRdata,
}

/// The data of a [`ParsedRr`]. SOA records are kept apart from the
/// editable record types, mirroring how the zone model stores them.
#[derive(Clone, Debug)]
pub enum ParsedRdata {
    Soa(Soa),
    Set(Type, Rdata),
}

////////////////////////////////////////////////////////////////////////
// PARSER CONSTRUCTION AND ITERATION                                   //
////////////////////////////////////////////////////////////////////////

impl<'a> Parser<'a> {
    /// Creates a new [`Parser`] to read zone file text. Relative names
    /// are qualified against `origin` until an `$ORIGIN` directive
    /// changes it.
    pub fn new(text: &'a str, origin: &Name) -> Self {
        Self {
            error: false,
            reader: Reader::new(text),
            origin: origin.clone(),
            default_ttl: None,
            previous_owner: None,
            previous_ttl: None,
        }
    }

    /// An internal helper to parse a single logical line. Directives
    /// are processed internally and produce `Ok(None)`.
    fn parse_line(&mut self, line: LogicalLine) -> Result<Option<ParsedRr>> {
        if !line.leading_whitespace && line.fields[0].text.starts_with('$') {
            self.parse_directive(line).map(|()| None)
        } else {
            self.parse_record(line).map(Some)
        }
    }

    /// Parses a `$ORIGIN` or `$TTL` directive. `$INCLUDE` and unknown
    /// directives are errors.
    fn parse_directive(&mut self, line: LogicalLine) -> Result<()> {
        let mut fields = line.fields.into_iter();
        let directive = match fields.next() {
            Some(field) => field,
            None => return Ok(()),
        };

        if directive.text.eq_ignore_ascii_case("$ORIGIN") {
            let argument = match fields.next() {
                Some(field) => field,
                None => {
                    return Err(Error::new(
                        directive.position,
                        ErrorKind::Expected("a name after $ORIGIN"),
                    ));
                }
            };
            self.origin = self.qualify(&argument)?;
        } else if directive.text.eq_ignore_ascii_case("$TTL") {
            let argument = match fields.next() {
                Some(field) => field,
                None => {
                    return Err(Error::new(
                        directive.position,
                        ErrorKind::Expected("a TTL after $TTL"),
                    ));
                }
            };
            let value = argument
                .text
                .parse::<u32>()
                .map_err(|e| Error::new(argument.position, ErrorKind::InvalidInt(e)))?;
            self.default_ttl = Some(Ttl::from(value));
        } else if directive.text.eq_ignore_ascii_case("$INCLUDE") {
            return Err(Error::new(
                directive.position,
                ErrorKind::IncludeNotSupported,
            ));
        } else {
            return Err(Error::new(
                directive.position,
                ErrorKind::UnknownDirective(directive.text),
            ));
        }

        if let Some(extra) = fields.next() {
            return Err(Error::new(extra.position, ErrorKind::ExpectedEol));
        }
        Ok(())
    }

    /// Qualifies a name field: `@` is the current origin, names ending
    /// with a dot are taken as given, and anything else has the
    /// current origin appended.
    fn qualify(&self, field: &Field) -> Result<Name> {
        if field.quoted {
            return Err(Error::new(field.position, ErrorKind::Expected("a name")));
        }
        let text = if field.text == "@" {
            return Ok(self.origin.clone());
        } else if field.text.ends_with('.') {
            field.text.clone()
        } else if self.origin.is_root() {
            format!("{}.", field.text)
        } else {
            format!("{}.{}", field.text, self.origin)
        };
        text.parse()
            .map_err(|e| Error::new(field.position, ErrorKind::InvalidName(e)))
    }
}

impl Iterator for Parser<'_> {
    type Item = Result<ParsedRr>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error {
            // We don't try to guarantee that internal state is
            // consistent after an error, so iteration stops there.
            return None;
        }

        loop {
            match self.reader.next_line() {
                Ok(None) => return None,
                Ok(Some(line)) => match self.parse_line(line) {
                    Ok(None) => continue,
                    Ok(Some(record)) => return Some(Ok(record)),
                    Err(e) => {
                        self.error = true;
                        return Some(Err(e));
                    }
                },
                Err(e) => {
                    self.error = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////
