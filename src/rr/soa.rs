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

//! The [`Soa`] structure.

use std::fmt;

use super::Ttl;
use crate::name::Name;

/// The start-of-authority data of a zone.
///
/// An SOA is carried only by the zone apex, and this crate keeps it as
/// a dedicated field of the apex node rather than as a record set, so
/// it is never touched by record-set operations such as
/// [`Node::clear_all_records`](crate::zone::Node::clear_all_records).
///
/// All fields are public: the structure lives inside the apex node, so
/// assigning to a field through [`Zone::root_mut`](crate::zone::Zone::root_mut)
/// immediately updates the zone data that the next save renders.
///
/// Note that [RFC 1035 § 3.3.13] does not state whether REFRESH,
/// RETRY, and EXPIRE are signed or unsigned. BIND, NSD, and Knot all
/// seem to agree that they are unsigned, and that makes more sense
/// than signed, so we've gone with that.
///
/// [RFC 1035 § 3.3.13]: https://datatracker.ietf.org/doc/html/rfc1035#section-3.3.13
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Soa {
    /// The primary master name server for the zone.
    pub mname: Name,

    /// The mailbox of the party responsible for the zone, encoded as a
    /// domain name.
    pub rname: Name,

    /// The version number of the zone data. Secondary servers compare
    /// serials to detect changes, so it must increase across
    /// meaningful edits; see the auto-serial behavior of
    /// [`Zone::save`](crate::zone::Zone::save).
    pub serial: u32,

    /// The interval, in seconds, at which secondaries refresh.
    pub refresh: u32,

    /// The interval, in seconds, after which a failed refresh is
    /// retried.
    pub retry: u32,

    /// The interval, in seconds, after which secondaries stop serving
    /// the zone if refreshes keep failing.
    pub expire: u32,

    /// The MINIMUM field, used by this crate as the zone's default
    /// TTL for record sets that do not set their own.
    pub minimum: u32,

    /// The TTL of the SOA record itself.
    pub ttl: Ttl,
}

impl fmt::Display for Soa {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {} {}",
            self.mname,
            self.rname,
            self.serial,
            self.refresh,
            self.retry,
            self.expire,
            self.minimum,
        )
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////
