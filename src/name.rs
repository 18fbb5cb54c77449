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

//! Implementation of the domain name type used throughout the crate.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// The maximum length of a label in a domain name (not including the
/// octet that provides the length on the wire).
const MAX_LABEL_LEN: usize = 63;

/// The maximum length of the presentation form of a fully qualified
/// domain name, including the trailing dot. This corresponds to the
/// 255-octet limit on the wire representation.
const MAX_NAME_LEN: usize = 254;

////////////////////////////////////////////////////////////////////////
// NAME STRUCTURE                                                      //
////////////////////////////////////////////////////////////////////////

/// A fully qualified domain name in presentation format.
///
/// A `Name` always ends with the root dot; the [`FromStr`]
/// implementation appends one if the input omits it, so
/// `"example.com".parse::<Name>()` and `"example.com.".parse::<Name>()`
/// produce the same value. Construction validates that the input is
/// ASCII and that the RFC 1035 label and name length limits hold.
///
/// Since this crate works entirely with the [RFC 1035 § 5] master file
/// format, names are stored in presentation form rather than in their
/// on-the-wire representation. The original case of the input is
/// preserved, but comparisons, hashing, and ordering are
/// ASCII-case-insensitive, following the rule of [RFC 1035 § 2.3.3]
/// that name comparisons are case-insensitive.
///
/// [RFC 1035 § 2.3.3]: https://datatracker.ietf.org/doc/html/rfc1035#section-2.3.3
/// [RFC 1035 § 5]: https://datatracker.ietf.org/doc/html/rfc1035#section-5
#[derive(Clone, Debug)]
pub struct Name {
    inner: Box<str>,
}

impl Name {
    /// Returns the presentation form of the `Name`, including the
    /// trailing dot.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Returns whether this is the root name `.`.
    pub fn is_root(&self) -> bool {
        &*self.inner == "."
    }

    /// Returns whether `self` equals `other` or is a subdomain of
    /// `other`. Like name equality, this is ASCII-case-insensitive.
    pub fn eq_or_subdomain_of(&self, other: &Name) -> bool {
        if other.is_root() || self == other {
            return true;
        }
        let suffix_len = other.inner.len() + 1;
        if self.inner.len() < suffix_len {
            return false;
        }
        let suffix = &self.inner[self.inner.len() - suffix_len..];
        suffix.as_bytes()[0] == b'.' && suffix[1..].eq_ignore_ascii_case(&other.inner)
    }
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Err(Error::Empty);
        }
        if !text.is_ascii() {
            return Err(Error::NotAscii);
        }
        if text == "." {
            return Ok(Self { inner: ".".into() });
        }

        let absolute = text.ends_with('.');
        let without_root = if absolute {
            &text[..text.len() - 1]
        } else {
            text
        };
        for label in without_root.split('.') {
            if label.is_empty() {
                return Err(Error::EmptyLabel);
            }
            if label.len() > MAX_LABEL_LEN {
                return Err(Error::LabelTooLong);
            }
            if label
                .bytes()
                .any(|b| b.is_ascii_whitespace() || b.is_ascii_control())
            {
                return Err(Error::InvalidCharacter);
            }
        }
        if without_root.len() + 1 > MAX_NAME_LEN {
            return Err(Error::NameTooLong);
        }

        let inner = if absolute {
            text.into()
        } else {
            let mut owned = String::with_capacity(text.len() + 1);
            owned.push_str(text);
            owned.push('.');
            owned.into_boxed_str()
        };
        Ok(Self { inner })
    }
}

impl PartialEq for Name {
    fn eq(&self, other: &Self) -> bool {
        self.inner.eq_ignore_ascii_case(&other.inner)
    }
}

impl Eq for Name {}

impl Hash for Name {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for octet in self.inner.bytes() {
            state.write_u8(octet.to_ascii_lowercase());
        }
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.inner.bytes().map(|b| b.to_ascii_lowercase());
        let rhs = other.inner.bytes().map(|b| b.to_ascii_lowercase());
        lhs.cmp(rhs)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.inner
    }
}

////////////////////////////////////////////////////////////////////////
// ERRORS                                                              //
////////////////////////////////////////////////////////////////////////

/// An error type used to report problems constructing [`Name`]s.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Error {
    /// The string was empty.
    Empty,

    /// The string was not strictly ASCII.
    NotAscii,

    /// A label was empty (two consecutive dots, or a leading dot).
    EmptyLabel,

    /// A label was longer than 63 octets.
    LabelTooLong,

    /// The name is too long (longer than 255 octets on the wire).
    NameTooLong,

    /// A label contained whitespace or a control character.
    InvalidCharacter,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Self::Empty => f.write_str("name is empty"),
            Self::NotAscii => f.write_str("name is not ASCII"),
            Self::EmptyLabel => f.write_str("name contains an empty label"),
            Self::LabelTooLong => f.write_str("label is longer than 63 octets"),
            Self::NameTooLong => f.write_str("name is longer than 255 octets on the wire"),
            Self::InvalidCharacter => f.write_str("label contains an invalid character"),
        }
    }
}

impl std::error::Error for Error {}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_appends_the_root_dot() {
        let name: Name = "example.com".parse().unwrap();
        assert_eq!(name.as_str(), "example.com.");
    }

    #[test]
    fn from_str_preserves_an_existing_root_dot() {
        let name: Name = "example.com.".parse().unwrap();
        assert_eq!(name.as_str(), "example.com.");
    }

    #[test]
    fn from_str_accepts_the_root() {
        let name: Name = ".".parse().unwrap();
        assert!(name.is_root());
    }

    #[test]
    fn from_str_rejects_bad_input() {
        assert_eq!("".parse::<Name>(), Err(Error::Empty));
        assert_eq!("exämple.com.".parse::<Name>(), Err(Error::NotAscii));
        assert_eq!("a..b.".parse::<Name>(), Err(Error::EmptyLabel));
        assert_eq!(".example.com.".parse::<Name>(), Err(Error::EmptyLabel));
        assert_eq!("bad name.com.".parse::<Name>(), Err(Error::InvalidCharacter));

        let long_label = format!("{}.com.", "x".repeat(64));
        assert_eq!(long_label.parse::<Name>(), Err(Error::LabelTooLong));

        let long_name = "label.".repeat(50);
        assert_eq!(long_name.parse::<Name>(), Err(Error::NameTooLong));
    }

    #[test]
    fn comparison_is_case_insensitive() {
        let lower: Name = "example.com.".parse().unwrap();
        let upper: Name = "EXAMPLE.COM.".parse().unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.cmp(&upper), Ordering::Equal);
    }

    #[test]
    fn eq_or_subdomain_of_works() {
        let apex: Name = "example.com.".parse().unwrap();
        let sub: Name = "foo.example.com.".parse().unwrap();
        let other: Name = "example.org.".parse().unwrap();
        let tricky: Name = "badexample.com.".parse().unwrap();
        let root: Name = ".".parse().unwrap();

        assert!(apex.eq_or_subdomain_of(&apex));
        assert!(sub.eq_or_subdomain_of(&apex));
        assert!(sub.eq_or_subdomain_of(&root));
        assert!(!other.eq_or_subdomain_of(&apex));
        assert!(!tricky.eq_or_subdomain_of(&apex));
        assert!(!apex.eq_or_subdomain_of(&sub));
    }
}
