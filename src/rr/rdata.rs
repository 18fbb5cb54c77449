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

//! Typed record data and its presentation-format codec.

use std::fmt;
use std::net::{AddrParseError, Ipv4Addr, Ipv6Addr};
use std::num::ParseIntError;

use super::Type;
use crate::name::{self, Name};
use crate::util::quote;

////////////////////////////////////////////////////////////////////////
// RDATA                                                               //
////////////////////////////////////////////////////////////////////////

/// The data of a single resource record, one variant per supported
/// [`Type`].
///
/// Each variant carries its payload in validated, structured form:
/// addresses as [`Ipv4Addr`]/[`Ipv6Addr`], names as [`Name`], the MX
/// preference as `u16` (which is exactly the field's wire range). The
/// codec between this representation and master file text is
/// [`Rdata::from_text`] in one direction and the [`Display`]
/// implementation in the other.
///
/// Equality is structural, so it compares addresses rather than
/// address spellings (`::1` equals `0:0:0:0:0:0:0:1`), compares names
/// case-insensitively, and compares the full MX pair rather than the
/// exchange alone. Record sets rely on this for duplicate suppression.
///
/// TXT data is stored in its quoted presentation form. [`Rdata::txt`]
/// and [`Rdata::from_text`] wrap unquoted caller input in double
/// quotes, so decoding a TXT record always yields a quoted string even
/// if the caller omitted the quotes when adding it.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rdata {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Cname(Name),
    Mx { preference: u16, exchange: Name },
    Ns(Name),
    Txt(String),
}

impl Rdata {
    /// Returns the [`Type`] whose sets this data belongs in.
    pub fn rr_type(&self) -> Type {
        match *self {
            Self::A(_) => Type::A,
            Self::Aaaa(_) => Type::Aaaa,
            Self::Cname(_) => Type::Cname,
            Self::Mx { .. } => Type::Mx,
            Self::Ns(_) => Type::Ns,
            Self::Txt(_) => Type::Txt,
        }
    }

    /// Parses record data of type `rr_type` from its presentation
    /// format. This is the decoding direction of the codec; the
    /// [`Display`](fmt::Display) implementation is the encoding
    /// direction.
    ///
    /// For MX, `text` is the full RDATA, `<preference> <exchange>`.
    /// For TXT, `text` is stored quoted, wrapping it in double quotes
    /// if the caller did not.
    pub fn from_text(rr_type: Type, text: &str) -> Result<Self, ValueError> {
        match rr_type {
            Type::A => Ok(Self::A(text.parse().map_err(ValueError::Address)?)),
            Type::Aaaa => Ok(Self::Aaaa(text.parse().map_err(ValueError::Address)?)),
            Type::Cname => Ok(Self::Cname(text.parse()?)),
            Type::Ns => Ok(Self::Ns(text.parse()?)),
            Type::Mx => {
                let mut fields = text.split_whitespace();
                let preference = fields
                    .next()
                    .ok_or(ValueError::MissingField)?
                    .parse()
                    .map_err(ValueError::Preference)?;
                let exchange = fields.next().ok_or(ValueError::MissingField)?.parse()?;
                if fields.next().is_some() {
                    return Err(ValueError::TrailingData);
                }
                Ok(Self::Mx {
                    preference,
                    exchange,
                })
            }
            Type::Txt => Ok(Self::Txt(quote(text))),
        }
    }

    /// Builds MX record data from its preference and exchange fields.
    pub fn mx(preference: u16, exchange: &str) -> Result<Self, ValueError> {
        Ok(Self::Mx {
            preference,
            exchange: exchange.parse()?,
        })
    }

    /// Builds TXT record data, wrapping `text` in double quotes if the
    /// caller did not.
    pub fn txt(text: &str) -> Self {
        Self::Txt(quote(text))
    }
}

impl fmt::Display for Rdata {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::A(address) => write!(f, "{}", address),
            Self::Aaaa(address) => write!(f, "{}", address),
            Self::Cname(name) => write!(f, "{}", name),
            Self::Mx {
                preference,
                exchange,
            } => write!(f, "{} {}", preference, exchange),
            Self::Ns(name) => write!(f, "{}", name),
            Self::Txt(text) => f.write_str(text),
        }
    }
}

////////////////////////////////////////////////////////////////////////
// ERRORS                                                              //
////////////////////////////////////////////////////////////////////////

/// An error signaling that a value does not have the shape its target
/// record type requires.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ValueError {
    /// An A or AAAA value is not a valid address literal.
    Address(AddrParseError),

    /// A name-valued field (NS, CNAME, or the MX exchange) is not a
    /// valid domain name.
    Name(name::Error),

    /// An MX preference is not an integer between 0 and 65,535.
    Preference(ParseIntError),

    /// A required field is missing (e.g. MX data without an exchange).
    MissingField,

    /// Extra data followed the last expected field.
    TrailingData,
}

impl From<name::Error> for ValueError {
    fn from(error: name::Error) -> Self {
        Self::Name(error)
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Address(error) => write!(f, "invalid address: {}", error),
            Self::Name(error) => write!(f, "invalid name: {}", error),
            Self::Preference(error) => write!(f, "invalid MX preference: {}", error),
            Self::MissingField => f.write_str("required field is missing"),
            Self::TrailingData => f.write_str("extra data after the last field"),
        }
    }
}

impl std::error::Error for ValueError {}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////
