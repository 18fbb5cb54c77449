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

//! Serialization of zones back to master file text.

use std::fmt;

use crate::zone::{Node, Zone};

/// A [`Display`](fmt::Display) adapter that renders a [`Zone`] as
/// master file text.
///
/// The output is deterministic: the apex comes first, the remaining
/// names follow in lexicographic order, and within a node the SOA (if
/// any) precedes the record sets, which appear in type order with
/// their values in insertion order. Every record is written on its own
/// line with a fully qualified owner, an explicit TTL, and the IN
/// class, so the output parses without any directives.
pub(crate) struct ZoneText<'a>(pub &'a Zone);

impl fmt::Display for ZoneText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let zone = self.0;

        if let Some(apex) = zone.root() {
            write_node(f, apex)?;
        }

        let mut names: Vec<_> = zone
            .names()
            .keys()
            .filter(|name| *name != zone.domain())
            .collect();
        names.sort();
        for name in names {
            write_node(f, &zone.names()[name])?;
        }
        Ok(())
    }
}

fn write_node(f: &mut fmt::Formatter, node: &Node) -> fmt::Result {
    if let Some(soa) = node.soa() {
        writeln!(f, "{} {} IN SOA {}", node.name(), soa.ttl, soa)?;
    }
    for set in node.record_sets() {
        for value in set.values() {
            writeln!(
                f,
                "{} {} IN {} {}",
                node.name(),
                set.ttl(),
                set.rr_type(),
                value,
            )?;
        }
    }
    Ok(())
}
