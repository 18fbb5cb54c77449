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

//! The registry of record types this crate can edit.

use std::fmt;
use std::str::FromStr;

use crate::util::Caseless;

/// The RR type of an editable record set.
///
/// This enumeration is the registry of record types whose data the
/// crate can parse from and render to master file text. SOA is
/// deliberately absent: the zone apex carries its SOA as a dedicated
/// [`Soa`](super::Soa) value, never as a record set, so a `Type` value
/// always names a set of [`Rdata`](super::Rdata).
///
/// Like name comparison, the textual representation is
/// ASCII-case-insensitive; parsing an unknown mnemonic fails with an
/// [`UnknownTypeError`] naming the offending text.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Type {
    A,
    Aaaa,
    Cname,
    Mx,
    Ns,
    Txt,
}

impl FromStr for Type {
    type Err = UnknownTypeError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match Caseless(text) {
            Caseless("A") => Ok(Self::A),
            Caseless("AAAA") => Ok(Self::Aaaa),
            Caseless("CNAME") => Ok(Self::Cname),
            Caseless("MX") => Ok(Self::Mx),
            Caseless("NS") => Ok(Self::Ns),
            Caseless("TXT") => Ok(Self::Txt),
            _ => Err(UnknownTypeError(text.to_owned())),
        }
    }
}

impl fmt::Debug for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::A => f.write_str("A"),
            Self::Aaaa => f.write_str("AAAA"),
            Self::Cname => f.write_str("CNAME"),
            Self::Mx => f.write_str("MX"),
            Self::Ns => f.write_str("NS"),
            Self::Txt => f.write_str("TXT"),
        }
    }
}

/// An error signaling that a record type mnemonic is not in the
/// supported registry. The offending text is carried so that error
/// messages can name it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownTypeError(pub String);

impl fmt::Display for UnknownTypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unsupported record type: {}", self.0)
    }
}

impl std::error::Error for UnknownTypeError {}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////
