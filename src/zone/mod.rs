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

//! Implementation of the DNS zone data structures, for loading,
//! editing, and saving zones.
//!
//! The central structure is [`Zone`], which owns one [`Node`] per name
//! in the zone. Each node in turn owns one [`RecordSet`] per record
//! type, plus (at the apex only) the zone's [`Soa`](crate::rr::Soa).
//! Typical use is load, mutate, save:
//!
//! ```no_run
//! use zoneedit::rr::Type;
//! use zoneedit::zone::Zone;
//!
//! # fn main() -> Result<(), zoneedit::zone::Error> {
//! let mut zone = Zone::new("example.com.")?;
//! zone.load_from_file("/var/named/zones/example.com")?;
//! if let Some(root) = zone.root_mut() {
//!     root.records_mut_or_create(Type::Ns)
//!         .add_text("ns3.example.com.")?;
//! }
//! zone.save(true)?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use log::debug;

use crate::name::Name;
use crate::rr::{Soa, Ttl};
use crate::zone_file::{ParsedRdata, Parser, ZoneText};

mod error;
mod node;
pub use error::Error;
pub use node::{Node, RecordSet};

////////////////////////////////////////////////////////////////////////
// ZONES                                                               //
////////////////////////////////////////////////////////////////////////

/// A DNS zone loaded into memory.
///
/// A `Zone` is constructed with [`Zone::new`], which normalizes the
/// domain to its fully qualified form, and filled either by
/// [`Zone::load_from_file`] or by [`Zone::add_name`] and the record
/// set operations on [`Node`]. A freshly constructed zone is empty:
/// [`Zone::root`] returns [`None`] until the apex node exists. After a
/// successful load the apex always exists, since the parser requires
/// an SOA there.
///
/// All mutations are synchronous and immediately visible through any
/// later access; [`Zone::save`] renders the current state, nothing is
/// batched. A failed load leaves the previous state untouched, and a
/// failed save leaves both the in-memory model and the target file
/// intact (the new text is written to a temporary sibling file which
/// is then renamed over the target).
#[derive(Clone, Debug)]
pub struct Zone {
    domain: Name,
    nodes: HashMap<Name, Node>,
    default_ttl: Ttl,
    path: Option<PathBuf>,
}

impl Zone {
    /// Creates a new, empty `Zone` for `domain`. The domain is
    /// normalized to end with the root dot; an empty or malformed
    /// domain fails with [`Error::InvalidDomain`].
    pub fn new(domain: &str) -> Result<Self, Error> {
        let domain = domain.parse().map_err(Error::InvalidDomain)?;
        Ok(Self {
            domain,
            nodes: HashMap::new(),
            default_ttl: Ttl::ZERO,
            path: None,
        })
    }

    /// Returns the fully qualified domain of the zone.
    pub fn domain(&self) -> &Name {
        &self.domain
    }

    /// Returns the path the zone was loaded from, which is also the
    /// default target of [`Zone::save`].
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the zone's contents from the zone file at `path`,
    /// replacing any previously loaded contents. The path is recorded
    /// as the default target for [`Zone::save`]. On failure the
    /// previous contents are left untouched.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        debug!("loading zone {} from {}", self.domain, path.display());
        let text = fs::read_to_string(path)?;
        self.load_from_str(&text)?;
        self.path = Some(path.to_owned());
        Ok(())
    }

    /// Loads the zone's contents from zone file text, replacing any
    /// previously loaded contents. Relative names in the text are
    /// qualified against the zone's domain (until an `$ORIGIN`
    /// directive changes the origin). The text must contain exactly
    /// one SOA record, owned by the apex, and every owner must be
    /// within the zone. On failure the previous contents are left
    /// untouched.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), Error> {
        let mut nodes: HashMap<Name, Node> = HashMap::new();
        let mut soa: Option<Soa> = None;

        for record in Parser::new(text, &self.domain) {
            let record = record?;
            if !record.owner.eq_or_subdomain_of(&self.domain) {
                return Err(Error::NotInZone(record.owner));
            }
            match record.data {
                ParsedRdata::Soa(parsed) => {
                    if record.owner != self.domain {
                        return Err(Error::SoaNotAtApex(record.owner));
                    }
                    if soa.is_some() {
                        return Err(Error::DuplicateSoa);
                    }
                    soa = Some(parsed);
                }
                ParsedRdata::Set(rr_type, rdata) => {
                    let node = nodes
                        .entry(record.owner.clone())
                        .or_insert_with(|| Node::new(record.owner.clone(), Ttl::ZERO));
                    let set = node.records_mut_or_create(rr_type);
                    if set.is_empty() {
                        set.set_ttl(record.ttl);
                    }
                    set.add(rdata)?;
                }
            }
        }

        let soa = soa.ok_or(Error::MissingSoa)?;
        let default_ttl = Ttl::from(soa.minimum);
        nodes
            .entry(self.domain.clone())
            .or_insert_with(|| Node::new(self.domain.clone(), Ttl::ZERO))
            .set_soa(soa);
        for node in nodes.values_mut() {
            node.set_default_ttl(default_ttl);
        }

        self.nodes = nodes;
        self.default_ttl = default_ttl;
        Ok(())
    }

    /// Returns the apex node, or [`None`] if the zone is empty.
    pub fn root(&self) -> Option<&Node> {
        self.nodes.get(&self.domain)
    }

    /// Returns the apex node for mutation, or [`None`] if the zone is
    /// empty.
    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.nodes.get_mut(&self.domain)
    }

    /// Returns the mapping from every known fully qualified name to
    /// its node. The mapping is unordered.
    pub fn names(&self) -> &HashMap<Name, Node> {
        &self.nodes
    }

    /// Looks up the node for `name`, which need not end with the root
    /// dot. Returns [`None`] for unknown and malformed names alike.
    pub fn node(&self, name: &str) -> Option<&Node> {
        let name: Name = name.parse().ok()?;
        self.nodes.get(&name)
    }

    /// Looks up the node for `name` for mutation. Returns [`None`]
    /// for unknown and malformed names alike.
    pub fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
        let name: Name = name.parse().ok()?;
        self.nodes.get_mut(&name)
    }

    /// Adds an empty node for `name`. If a node with that name already
    /// exists, it is left untouched; adding an existing name is not an
    /// error. The name must be within the zone.
    pub fn add_name(&mut self, name: &str) -> Result<(), Error> {
        let name: Name = name.parse().map_err(Error::InvalidName)?;
        if !name.eq_or_subdomain_of(&self.domain) {
            return Err(Error::NotInZone(name));
        }
        let default_ttl = self.default_ttl;
        self.nodes
            .entry(name.clone())
            .or_insert_with(|| Node::new(name, default_ttl));
        Ok(())
    }

    /// Removes the node for `name` and all its record sets. Removing
    /// a name that does not exist is not an error. Note the asymmetry
    /// with [`RecordSet::delete`], which insists that the value exist:
    /// name-level add and delete are idempotent.
    pub fn delete_name(&mut self, name: &str) -> Result<(), Error> {
        let name: Name = name.parse().map_err(Error::InvalidName)?;
        self.nodes.remove(&name);
        Ok(())
    }

    /// Writes the zone back to the file it was loaded from. Fails with
    /// [`Error::NoSavePath`] if the zone was not loaded from a file.
    /// See [`Zone::save_as`] for the `auto_serial` behavior.
    pub fn save(&mut self, auto_serial: bool) -> Result<(), Error> {
        match self.path.clone() {
            Some(path) => self.save_as(path, auto_serial),
            None => Err(Error::NoSavePath),
        }
    }

    /// Writes the zone to the file at `path`.
    ///
    /// If `auto_serial` is true, the SOA serial is first set to the
    /// current local date in the common `YYYYMMDD00` format. If that
    /// value would not exceed the current serial, the current serial
    /// plus one is used instead, so every auto-serial save strictly
    /// increases the serial, even several times on the same day.
    ///
    /// The text is written to a temporary sibling file which is then
    /// renamed over `path`, so a failed write cannot truncate an
    /// existing file.
    pub fn save_as(&mut self, path: impl AsRef<Path>, auto_serial: bool) -> Result<(), Error> {
        if auto_serial {
            self.bump_serial()?;
        }

        let path = path.as_ref();
        let text = self.to_text();
        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, &text)?;
        fs::rename(&tmp, path)?;
        debug!("saved zone {} to {}", self.domain, path.display());
        Ok(())
    }

    /// Renders the zone as master file text; this is exactly what
    /// [`Zone::save_as`] writes.
    pub fn to_text(&self) -> String {
        ZoneText(self).to_string()
    }

    fn bump_serial(&mut self) -> Result<(), Error> {
        let today = Local::now();
        let candidate =
            (today.year() as u32) * 1_000_000 + today.month() * 10_000 + today.day() * 100;
        let soa = self
            .root_mut()
            .and_then(Node::soa_mut)
            .ok_or(Error::MissingSoa)?;
        soa.serial = if candidate <= soa.serial {
            soa.serial + 1
        } else {
            candidate
        };
        Ok(())
    }
}

/// Reads a zone file and returns the contents as a [`Zone`].
pub fn zone_from_file(domain: &str, path: impl AsRef<Path>) -> Result<Zone, Error> {
    let mut zone = Zone::new(domain)?;
    zone.load_from_file(path)?;
    Ok(zone)
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Datelike, Local};

    use super::*;
    use crate::rr::{Rdata, Type};

    const EXAMPLE_COM: &str = "\
$TTL 86400
$ORIGIN example.com.
@ IN SOA ns1.example.com. hostmaster.example.com. (
    2007012501 ; serial
    28800      ; refresh
    7200       ; retry
    864000     ; expire
    86400 )    ; minimum
@ IN NS ns1.example.com.
@ IN NS ns2.example.com.
@ IN MX 10 mail.example.com.
@ IN MX 20 mail2.example.com.
@ IN A 10.0.0.1
foo IN A 10.0.0.1
foo IN MX 10 mail.example.com.
bar IN A 10.0.0.2
bar IN A 10.0.0.3
foofoo IN CNAME foo.example.com.
barbar IN AAAA ::1
barbar IN AAAA ::2
";

    fn example_zone() -> Zone {
        let mut zone = Zone::new("example.com.").unwrap();
        zone.load_from_str(EXAMPLE_COM).unwrap();
        zone
    }

    fn items(zone: &Zone, name: &str, rr_type: Type) -> Vec<String> {
        zone.node(name)
            .unwrap()
            .records(rr_type)
            .unwrap()
            .values()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn new_appends_a_missing_dot() {
        let zone = Zone::new("example.com").unwrap();
        assert_eq!(zone.domain().as_str(), "example.com.");
    }

    #[test]
    fn new_rejects_an_empty_domain() {
        assert!(matches!(Zone::new(""), Err(Error::InvalidDomain(_))));
    }

    #[test]
    fn a_fresh_zone_has_no_root() {
        let zone = Zone::new("example.com.").unwrap();
        assert!(zone.root().is_none());
        assert!(zone.names().is_empty());
    }

    #[test]
    fn load_reads_the_soa() {
        let zone = example_zone();
        let soa = zone.root().unwrap().soa().unwrap();
        assert_eq!(soa.mname.as_str(), "ns1.example.com.");
        assert_eq!(soa.rname.as_str(), "hostmaster.example.com.");
        assert_eq!(soa.serial, 2007012501);
        assert_eq!(soa.refresh, 28800);
        assert_eq!(soa.retry, 7200);
        assert_eq!(soa.expire, 864000);
        assert_eq!(soa.minimum, 86400);
    }

    #[test]
    fn load_reads_the_apex_record_sets() {
        let zone = example_zone();
        assert_eq!(items(&zone, "example.com.", Type::A), ["10.0.0.1"]);
        assert_eq!(
            items(&zone, "example.com.", Type::Ns),
            ["ns1.example.com.", "ns2.example.com."],
        );
        assert_eq!(
            items(&zone, "example.com.", Type::Mx),
            ["10 mail.example.com.", "20 mail2.example.com."],
        );
    }

    #[test]
    fn load_reads_the_other_names() {
        let zone = example_zone();
        assert_eq!(items(&zone, "foo.example.com.", Type::A), ["10.0.0.1"]);
        assert_eq!(
            items(&zone, "foo.example.com.", Type::Mx),
            ["10 mail.example.com."],
        );
        assert_eq!(
            items(&zone, "bar.example.com.", Type::A),
            ["10.0.0.2", "10.0.0.3"],
        );
        assert_eq!(
            items(&zone, "foofoo.example.com.", Type::Cname),
            ["foo.example.com."],
        );
        assert_eq!(items(&zone, "barbar.example.com.", Type::Aaaa), ["::1", "::2"]);
    }

    #[test]
    fn load_requires_an_soa() {
        let mut zone = Zone::new("example.com.").unwrap();
        let result = zone.load_from_str("@ 3600 IN NS ns1.example.com.\n");
        assert!(matches!(result, Err(Error::MissingSoa)));
        assert!(zone.root().is_none());
    }

    #[test]
    fn load_rejects_an_soa_away_from_the_apex() {
        let mut zone = Zone::new("example.com.").unwrap();
        let text = "sub 3600 IN SOA ns1 hostmaster 1 2 3 4 5\n";
        assert!(matches!(
            zone.load_from_str(text),
            Err(Error::SoaNotAtApex(_)),
        ));
    }

    #[test]
    fn load_rejects_out_of_zone_owners() {
        let mut zone = Zone::new("example.com.").unwrap();
        let text = "other.test. 3600 IN A 10.0.0.1\n";
        assert!(matches!(zone.load_from_str(text), Err(Error::NotInZone(_))));
    }

    #[test]
    fn a_failed_load_leaves_the_zone_untouched() {
        let mut zone = example_zone();
        let result = zone.load_from_str("@ 3600 IN SPF oops\n");
        assert!(matches!(result, Err(Error::Parse(_))));
        assert_eq!(
            items(&zone, "example.com.", Type::Ns),
            ["ns1.example.com.", "ns2.example.com."],
        );
    }

    #[test]
    fn added_ns_records_are_visible_through_names() {
        let mut zone = example_zone();
        zone.root_mut()
            .unwrap()
            .records_mut(Type::Ns)
            .unwrap()
            .add_text("ns3.example.com.")
            .unwrap();
        assert_eq!(
            items(&zone, "example.com.", Type::Ns),
            ["ns1.example.com.", "ns2.example.com.", "ns3.example.com."],
        );
    }

    #[test]
    fn adding_a_duplicate_ns_has_no_effect() {
        let mut zone = example_zone();
        zone.root_mut()
            .unwrap()
            .records_mut(Type::Ns)
            .unwrap()
            .add_text("ns1.example.com.")
            .unwrap();
        assert_eq!(
            items(&zone, "example.com.", Type::Ns),
            ["ns1.example.com.", "ns2.example.com."],
        );
    }

    #[test]
    fn deleting_an_ns_record_removes_only_it() {
        let mut zone = example_zone();
        zone.root_mut()
            .unwrap()
            .records_mut(Type::Ns)
            .unwrap()
            .delete_text("ns2.example.com.")
            .unwrap();
        assert_eq!(items(&zone, "example.com.", Type::Ns), ["ns1.example.com."]);
    }

    #[test]
    fn deleting_a_nonexistent_ns_record_fails() {
        let mut zone = example_zone();
        let result = zone
            .root_mut()
            .unwrap()
            .records_mut(Type::Ns)
            .unwrap()
            .delete_text("ns99.example.com.");
        assert!(matches!(result, Err(Error::RecordNotFound(_))));
    }

    #[test]
    fn mx_records_can_be_added_and_deleted_as_pairs() {
        let mut zone = example_zone();
        let mx = zone
            .node_mut("example.com.")
            .unwrap()
            .records_mut(Type::Mx)
            .unwrap();
        mx.add(Rdata::mx(30, "mail3.example.com.").unwrap()).unwrap();
        assert_eq!(
            items(&zone, "example.com.", Type::Mx),
            [
                "10 mail.example.com.",
                "20 mail2.example.com.",
                "30 mail3.example.com.",
            ],
        );

        let mx = zone
            .node_mut("example.com.")
            .unwrap()
            .records_mut(Type::Mx)
            .unwrap();
        mx.delete(&Rdata::mx(10, "mail.example.com.").unwrap())
            .unwrap();
        assert_eq!(
            items(&zone, "example.com.", Type::Mx),
            ["20 mail2.example.com.", "30 mail3.example.com."],
        );
    }

    #[test]
    fn replacing_an_mx_record_works_through_one_set() {
        let mut zone = example_zone();
        let mx = zone
            .node_mut("foo.example.com.")
            .unwrap()
            .records_mut(Type::Mx)
            .unwrap();
        mx.delete(&Rdata::mx(10, "mail.example.com.").unwrap())
            .unwrap();
        mx.add(Rdata::mx(30, "anothermail.example.com.").unwrap())
            .unwrap();
        assert_eq!(
            items(&zone, "foo.example.com.", Type::Mx),
            ["30 anothermail.example.com."],
        );
    }

    #[test]
    fn absent_record_types_read_as_none() {
        let zone = example_zone();
        assert!(zone
            .node("bar.example.com.")
            .unwrap()
            .records(Type::Ns)
            .is_none());
    }

    #[test]
    fn new_names_can_be_added_with_records() {
        let mut zone = example_zone();
        zone.add_name("zip.example.com.").unwrap();
        zone.node_mut("zip.example.com.")
            .unwrap()
            .records_mut_or_create(Type::A)
            .add_text("10.9.8.7")
            .unwrap();
        assert_eq!(items(&zone, "zip.example.com.", Type::A), ["10.9.8.7"]);
    }

    #[test]
    fn add_name_is_idempotent() {
        let mut zone = example_zone();
        zone.add_name("bar.example.com.").unwrap();
        assert_eq!(
            items(&zone, "bar.example.com.", Type::A),
            ["10.0.0.2", "10.0.0.3"],
        );
    }

    #[test]
    fn add_name_rejects_out_of_zone_names() {
        let mut zone = example_zone();
        assert!(matches!(
            zone.add_name("zip.example.org."),
            Err(Error::NotInZone(_)),
        ));
    }

    #[test]
    fn delete_name_removes_exactly_that_name() {
        let mut zone = example_zone();
        zone.delete_name("foo.example.com.").unwrap();
        let keys: HashSet<&str> = zone.names().keys().map(Name::as_str).collect();
        let expected: HashSet<&str> = [
            "example.com.",
            "bar.example.com.",
            "foofoo.example.com.",
            "barbar.example.com.",
        ]
        .into_iter()
        .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn delete_name_of_an_absent_name_is_a_no_op() {
        let mut zone = example_zone();
        let before = zone.names().len();
        zone.delete_name("nonexistent.example.com.").unwrap();
        assert_eq!(zone.names().len(), before);
    }

    #[test]
    fn delete_name_accepts_a_name_without_the_root_dot() {
        let mut zone = example_zone();
        zone.delete_name("barbar.example.com").unwrap();
        assert!(zone.node("barbar.example.com.").is_none());
    }

    #[test]
    fn clear_all_records_with_an_exclusion() {
        let mut zone = example_zone();
        zone.node_mut("foo.example.com.")
            .unwrap()
            .clear_all_records(Some(Type::Mx));
        let node = zone.node("foo.example.com.").unwrap();
        assert!(node.records(Type::A).is_none());
        assert_eq!(
            items(&zone, "foo.example.com.", Type::Mx),
            ["10 mail.example.com."],
        );
    }

    #[test]
    fn txt_records_normalize_quoting() {
        let mut zone = example_zone();
        let txt = zone
            .node_mut("bar.example.com.")
            .unwrap()
            .records_mut_or_create(Type::Txt);
        txt.add_text("v=spf1 a mx include:mailseat.com ?all").unwrap();
        txt.add_text("\"v=spf1 a mx ?all\"").unwrap();
        assert_eq!(
            items(&zone, "bar.example.com.", Type::Txt),
            [
                "\"v=spf1 a mx include:mailseat.com ?all\"",
                "\"v=spf1 a mx ?all\"",
            ],
        );
    }

    #[test]
    fn created_sets_inherit_the_soa_minimum_as_ttl() {
        let mut zone = example_zone();
        zone.add_name("zip.example.com.").unwrap();
        let set = zone
            .node_mut("zip.example.com.")
            .unwrap()
            .records_mut_or_create(Type::A);
        assert_eq!(u32::from(set.ttl()), 86400);
    }

    #[test]
    fn save_without_a_path_fails() {
        let mut zone = example_zone();
        assert!(matches!(zone.save(false), Err(Error::NoSavePath)));
    }

    #[test]
    fn save_and_reload_round_trips_mutations() {
        let mut zone = example_zone();

        {
            let soa = zone.root_mut().unwrap().soa_mut().unwrap();
            soa.mname = "mname.example.com.".parse().unwrap();
            soa.rname = "rname.example.com.".parse().unwrap();
            soa.serial += 1;
            soa.refresh = 1;
            soa.retry = 2;
            soa.expire = 3;
            soa.minimum = 4;
        }

        zone.add_name("zip.example.com.").unwrap();
        zone.node_mut("zip.example.com.")
            .unwrap()
            .records_mut_or_create(Type::A)
            .add_text("10.9.8.7")
            .unwrap();

        let mx = zone
            .node_mut("foo.example.com.")
            .unwrap()
            .records_mut(Type::Mx)
            .unwrap();
        mx.delete(&Rdata::mx(10, "mail.example.com.").unwrap())
            .unwrap();
        mx.add(Rdata::mx(30, "anothermail.example.com.").unwrap())
            .unwrap();

        zone.node_mut("bar.example.com.")
            .unwrap()
            .records_mut(Type::A)
            .unwrap()
            .add_text("10.20.30.40")
            .unwrap();

        zone.delete_name("foofoo.example.com.").unwrap();
        zone.delete_name("barbar.example.com").unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.com.zone");
        zone.save_as(&path, false).unwrap();

        let reloaded = zone_from_file("example.com.", &path).unwrap();
        let soa = reloaded.root().unwrap().soa().unwrap();
        assert_eq!(soa.mname.as_str(), "mname.example.com.");
        assert_eq!(soa.rname.as_str(), "rname.example.com.");
        assert_eq!(soa.serial, 2007012502);
        assert_eq!(soa.refresh, 1);
        assert_eq!(soa.retry, 2);
        assert_eq!(soa.expire, 3);
        assert_eq!(soa.minimum, 4);

        assert_eq!(items(&reloaded, "zip.example.com.", Type::A), ["10.9.8.7"]);
        assert_eq!(
            items(&reloaded, "foo.example.com.", Type::Mx),
            ["30 anothermail.example.com."],
        );
        assert_eq!(
            items(&reloaded, "bar.example.com.", Type::A),
            ["10.0.0.2", "10.0.0.3", "10.20.30.40"],
        );
        assert!(reloaded.node("foofoo.example.com.").is_none());
        assert!(reloaded.node("barbar.example.com.").is_none());
        assert_eq!(
            items(&reloaded, "example.com.", Type::Ns),
            ["ns1.example.com.", "ns2.example.com."],
        );
    }

    #[test]
    fn save_records_the_reload_path() {
        let mut zone = example_zone();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.com.zone");
        zone.save_as(&path, false).unwrap();

        let mut reloaded = zone_from_file("example.com.", &path).unwrap();
        reloaded
            .root_mut()
            .unwrap()
            .records_mut(Type::Ns)
            .unwrap()
            .add_text("ns3.example.com.")
            .unwrap();
        reloaded.save(false).unwrap();

        let again = zone_from_file("example.com.", &path).unwrap();
        assert_eq!(
            items(&again, "example.com.", Type::Ns),
            ["ns1.example.com.", "ns2.example.com.", "ns3.example.com."],
        );
    }

    #[test]
    fn serialization_is_stable_across_a_round_trip() {
        let zone = example_zone();
        let text = zone.to_text();

        let mut reloaded = Zone::new("example.com.").unwrap();
        reloaded.load_from_str(&text).unwrap();
        assert_eq!(reloaded.to_text(), text);
    }

    #[test]
    fn auto_serial_uses_the_date_when_it_is_larger() {
        let mut zone = example_zone();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.com.zone");

        let before = date_serial();
        zone.save_as(&path, true).unwrap();
        let after = date_serial();

        let serial = zone.root().unwrap().soa().unwrap().serial;
        assert!(serial == before || serial == after);
    }

    #[test]
    fn auto_serial_strictly_increases_within_a_day() {
        let mut zone = example_zone();
        zone.root_mut().unwrap().soa_mut().unwrap().serial = 4_200_000_000;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("example.com.zone");
        zone.save_as(&path, true).unwrap();
        assert_eq!(zone.root().unwrap().soa().unwrap().serial, 4_200_000_001);

        zone.save_as(&path, true).unwrap();
        assert_eq!(zone.root().unwrap().soa().unwrap().serial, 4_200_000_002);
    }

    fn date_serial() -> u32 {
        let today = Local::now();
        (today.year() as u32) * 1_000_000 + today.month() * 10_000 + today.day() * 100
    }
}
