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

//! Nodes and the record sets they own.

use crate::name::Name;
use crate::rr::{Rdata, Soa, Ttl, Type};

use super::Error;

////////////////////////////////////////////////////////////////////////
// RECORD SETS                                                         //
////////////////////////////////////////////////////////////////////////

/// All values of one record type at one name.
///
/// Values are kept in insertion order, which is also the order in
/// which they are rendered on save. Following the behavior of other
/// nameservers, adding a value that is already present is silently
/// ignored; presence is decided by the structural equality of
/// [`Rdata`], so for MX it compares the full preference/exchange pair.
/// Deleting, by contrast, insists that the value exist; see
/// [`RecordSet::delete`].
#[derive(Clone, Debug)]
pub struct RecordSet {
    rr_type: Type,
    ttl: Ttl,
    values: Vec<Rdata>,
}

impl RecordSet {
    pub(crate) fn new(rr_type: Type) -> Self {
        Self {
            rr_type,
            ttl: Ttl::ZERO,
            values: Vec::new(),
        }
    }

    /// Returns the record type of this set.
    pub fn rr_type(&self) -> Type {
        self.rr_type
    }

    /// Returns the TTL of this set. Zero means unset; an unset TTL is
    /// replaced with the zone's default TTL when the set is next
    /// obtained for mutation.
    pub fn ttl(&self) -> Ttl {
        self.ttl
    }

    /// Sets the TTL of this set.
    pub fn set_ttl(&mut self, ttl: Ttl) {
        self.ttl = ttl;
    }

    /// Adds a value to the set. If an equal value is already present,
    /// the set is left unchanged (same length, same order); otherwise
    /// the value is appended. Fails if the value belongs to a
    /// different record type than this set holds.
    pub fn add(&mut self, value: Rdata) -> Result<(), Error> {
        self.check_type(&value)?;
        if !self.values.contains(&value) {
            self.values.push(value);
        }
        Ok(())
    }

    /// Parses `text` as a value of this set's type and adds it. This
    /// is the add path for callers holding presentation text, e.g.
    /// `"10 mail.example.com."` for an MX set.
    pub fn add_text(&mut self, text: &str) -> Result<(), Error> {
        let value = Rdata::from_text(self.rr_type, text).map_err(Error::InvalidValue)?;
        self.add(value)
    }

    /// Deletes a value from the set, removing exactly one matching
    /// entry and preserving the order of the rest. Unlike [`add`],
    /// which ignores duplicates, deleting a value that is not present
    /// fails with [`Error::RecordNotFound`] naming the value.
    ///
    /// [`add`]: RecordSet::add
    pub fn delete(&mut self, value: &Rdata) -> Result<(), Error> {
        self.check_type(value)?;
        match self.values.iter().position(|existing| existing == value) {
            Some(index) => {
                self.values.remove(index);
                Ok(())
            }
            None => Err(Error::RecordNotFound(value.to_string())),
        }
    }

    /// Parses `text` as a value of this set's type and deletes it.
    pub fn delete_text(&mut self, text: &str) -> Result<(), Error> {
        let value = Rdata::from_text(self.rr_type, text).map_err(Error::InvalidValue)?;
        self.delete(&value)
    }

    /// Returns the values of the set, in insertion order.
    pub fn values(&self) -> &[Rdata] {
        &self.values
    }

    /// Returns whether the set contains `value`.
    pub fn contains(&self, value: &Rdata) -> bool {
        self.values.contains(value)
    }

    /// Returns the number of values in the set.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn check_type(&self, value: &Rdata) -> Result<(), Error> {
        if value.rr_type() == self.rr_type {
            Ok(())
        } else {
            Err(Error::TypeMismatch {
                expected: self.rr_type,
                found: value.rr_type(),
            })
        }
    }
}

////////////////////////////////////////////////////////////////////////
// NODES                                                               //
////////////////////////////////////////////////////////////////////////

/// A node in the zone: one name and the record sets attached to it.
///
/// There is at most one record set per type, and repeated
/// [`records`](Node::records) calls borrow that single set, so a
/// mutation made through one access is seen by every later access.
/// The apex node additionally carries the zone's [`Soa`], which is a
/// dedicated field rather than a record set and is therefore untouched
/// by [`clear_all_records`](Node::clear_all_records).
#[derive(Clone, Debug)]
pub struct Node {
    name: Name,
    default_ttl: Ttl,
    soa: Option<Soa>,
    rrsets: Vec<RecordSet>,
}

impl Node {
    pub(crate) fn new(name: Name, default_ttl: Ttl) -> Self {
        Self {
            name,
            default_ttl,
            soa: None,
            rrsets: Vec::new(),
        }
    }

    /// Returns the fully qualified name of this node.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Returns the node's SOA data. Only the zone apex has one.
    pub fn soa(&self) -> Option<&Soa> {
        self.soa.as_ref()
    }

    /// Returns the node's SOA data for mutation. Field assignments
    /// through this reference are immediately part of the zone data.
    pub fn soa_mut(&mut self) -> Option<&mut Soa> {
        self.soa.as_mut()
    }

    pub(crate) fn set_soa(&mut self, soa: Soa) {
        self.soa = Some(soa);
    }

    pub(crate) fn set_default_ttl(&mut self, default_ttl: Ttl) {
        self.default_ttl = default_ttl;
    }

    /// Returns the record set of type `rr_type`, or [`None`] if this
    /// node has no set of that type. An existing-but-empty set is
    /// `Some`; callers can tell the two cases apart.
    pub fn records(&self, rr_type: Type) -> Option<&RecordSet> {
        self.lookup(rr_type).ok().map(|index| &self.rrsets[index])
    }

    /// Returns the record set of type `rr_type` for mutation, or
    /// [`None`] if this node has no set of that type. If the set's
    /// TTL is unset, it inherits the zone's default TTL at this point.
    pub fn records_mut(&mut self, rr_type: Type) -> Option<&mut RecordSet> {
        match self.lookup(rr_type) {
            Ok(index) => {
                self.backfill_ttl(index);
                Some(&mut self.rrsets[index])
            }
            Err(_) => None,
        }
    }

    /// Returns the record set of type `rr_type` for mutation, creating
    /// an empty set if this node has no set of that type. If the set's
    /// TTL is unset, it inherits the zone's default TTL at this point.
    pub fn records_mut_or_create(&mut self, rr_type: Type) -> &mut RecordSet {
        let index = match self.lookup(rr_type) {
            Ok(index) => index,
            Err(index) => {
                self.rrsets.insert(index, RecordSet::new(rr_type));
                index
            }
        };
        self.backfill_ttl(index);
        &mut self.rrsets[index]
    }

    /// Removes every record set from this node, except the set whose
    /// type matches `exclude`, if given. The apex SOA is a dedicated
    /// field, not a record set, and is never cleared by this call.
    pub fn clear_all_records(&mut self, exclude: Option<Type>) {
        match exclude {
            None => self.rrsets.clear(),
            Some(keep) => self.rrsets.retain(|set| set.rr_type() == keep),
        }
    }

    /// Returns the record sets of this node, in type order.
    pub fn record_sets(&self) -> &[RecordSet] {
        &self.rrsets
    }

    fn lookup(&self, rr_type: Type) -> Result<usize, usize> {
        self.rrsets.binary_search_by_key(&rr_type, RecordSet::rr_type)
    }

    fn backfill_ttl(&mut self, index: usize) {
        let set = &mut self.rrsets[index];
        if set.ttl.is_zero() && !self.default_ttl.is_zero() {
            set.ttl = self.default_ttl;
        }
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////
