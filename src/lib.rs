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

//! A library to load, edit, and save DNS zone files.
//!
//! `zoneedit` manages the common record types of a zone, including the
//! SOA. A [`Zone`] is loaded from [RFC 1035 § 5] master file text,
//! edited through the record sets attached to each of its names, and
//! written back out with deterministic formatting. Saving can bump the
//! SOA serial automatically, with a guarantee that it strictly
//! increases on every save.
//!
//! ```no_run
//! use zoneedit::rr::Type;
//! use zoneedit::zone::zone_from_file;
//!
//! # fn main() -> Result<(), zoneedit::zone::Error> {
//! let mut zone = zone_from_file("example.com", "/var/named/zones/example.com")?;
//!
//! // NS records at the apex.
//! if let Some(root) = zone.root_mut() {
//!     let ns = root.records_mut_or_create(Type::Ns);
//!     ns.add_text("ns3.example.com.")?;
//! }
//!
//! // An A record at a new name.
//! zone.add_name("zip.example.com.")?;
//! if let Some(node) = zone.node_mut("zip.example.com.") {
//!     node.records_mut_or_create(Type::A).add_text("10.9.8.7")?;
//! }
//!
//! // Write back over the loaded file, bumping the serial.
//! zone.save(true)?;
//! # Ok(())
//! # }
//! ```
//!
//! The [`check`] and [`reload`] modules wrap the external
//! `named-checkzone` and `rndc` tools, for callers that validate
//! their edits and tell a running `named` to pick them up.
//!
//! [RFC 1035 § 5]: https://datatracker.ietf.org/doc/html/rfc1035#section-5

pub mod check;
pub mod name;
pub mod reload;
pub mod rr;
mod util;
pub mod zone;
pub mod zone_file;

pub use zone::{zone_from_file, Zone};
