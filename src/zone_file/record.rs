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

//! Parsing of resource records.

use std::vec;

use super::reader::{Field, LogicalLine};
use super::{Error, ErrorKind, ParsedRdata, ParsedRr, Parser, Position, Result};
use crate::rr::{Rdata, Soa, Ttl, Type};

impl Parser<'_> {
    /// Parses a resource record from a logical line.
    ///
    /// The owner may be inherited from the previous record (signaled
    /// by leading whitespace), the class may be omitted (only IN is
    /// supported anyway), and the TTL may be omitted if a `$TTL`
    /// directive or a previous record supplies one. The RDATA format
    /// depends on the record type; SOA records are parsed into a
    /// dedicated variant since the zone model stores them apart from
    /// the editable record sets.
    pub(super) fn parse_record(&mut self, line: LogicalLine) -> Result<ParsedRr> {
        let number = line.number;
        // Missing-field errors are reported at the last field present.
        let end = line.fields.last().map_or(
            Position {
                line: number,
                column: 1,
            },
            |field| field.position,
        );
        let mut fields = line.fields.into_iter();

        let owner = if line.leading_whitespace {
            match self.previous_owner.clone() {
                Some(owner) => owner,
                None => {
                    return Err(Error::new(
                        Position {
                            line: number,
                            column: 1,
                        },
                        ErrorKind::EmptyOwnerWithNoPrevious,
                    ));
                }
            }
        } else {
            let field = next_field(&mut fields, "an owner name", end)?;
            self.qualify(&field)?
        };

        // The next fields are the TTL and class. They may appear in
        // either order, and both may be omitted. As noted in RFC 1035
        // § 5.1, the possible TTL, class, and subsequent type fields
        // are disjoint, so the parse is unique.
        let mut ttl = None;
        let type_field = loop {
            let field = next_field(&mut fields, "a record type", end)?;
            if field.quoted {
                return Err(Error::new(field.position, ErrorKind::Expected("a record type")));
            }
            if ttl.is_none() && field.text.bytes().all(|b| b.is_ascii_digit()) {
                let value = field
                    .text
                    .parse::<u32>()
                    .map_err(|e| Error::new(field.position, ErrorKind::InvalidInt(e)))?;
                ttl = Some(Ttl::from(value));
                continue;
            }
            if field.text.eq_ignore_ascii_case("IN") {
                continue;
            }
            if ["CH", "CS", "HS"]
                .iter()
                .any(|class| field.text.eq_ignore_ascii_case(class))
            {
                return Err(Error::new(
                    field.position,
                    ErrorKind::UnsupportedClass(field.text),
                ));
            }
            break field;
        };

        let ttl = match ttl.or(self.default_ttl).or(self.previous_ttl) {
            Some(ttl) => ttl,
            None => {
                return Err(Error::new(
                    type_field.position,
                    ErrorKind::OmittedTtlWithNoDefaultOrPrevious,
                ));
            }
        };

        let data = if type_field.text.eq_ignore_ascii_case("SOA") {
            ParsedRdata::Soa(self.parse_soa_rdata(&mut fields, ttl, end)?)
        } else {
            let rr_type = type_field
                .text
                .parse::<Type>()
                .map_err(|e| Error::new(type_field.position, ErrorKind::UnsupportedType(e.0)))?;
            ParsedRdata::Set(rr_type, self.parse_rdata(rr_type, &mut fields, end)?)
        };

        if let Some(extra) = fields.next() {
            return Err(Error::new(extra.position, ErrorKind::ExpectedEol));
        }

        self.previous_owner = Some(owner.clone());
        self.previous_ttl = Some(ttl);

        Ok(ParsedRr {
            line: number,
            owner,
            ttl,
            data,
        })
    }

    /// Parses the seven SOA RDATA fields.
    fn parse_soa_rdata(
        &self,
        fields: &mut vec::IntoIter<Field>,
        ttl: Ttl,
        end: Position,
    ) -> Result<Soa> {
        let mname = self.qualify(&next_field(fields, "the SOA MNAME", end)?)?;
        let rname = self.qualify(&next_field(fields, "the SOA RNAME", end)?)?;
        let serial = parse_u32(&next_field(fields, "the SOA SERIAL", end)?)?;
        let refresh = parse_u32(&next_field(fields, "the SOA REFRESH", end)?)?;
        let retry = parse_u32(&next_field(fields, "the SOA RETRY", end)?)?;
        let expire = parse_u32(&next_field(fields, "the SOA EXPIRE", end)?)?;
        let minimum = parse_u32(&next_field(fields, "the SOA MINIMUM", end)?)?;
        Ok(Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
            ttl,
        })
    }

    /// Parses RDATA for a record of type `rr_type`.
    fn parse_rdata(
        &self,
        rr_type: Type,
        fields: &mut vec::IntoIter<Field>,
        end: Position,
    ) -> Result<Rdata> {
        match rr_type {
            Type::A => {
                let field = next_field(fields, "an IPv4 address", end)?;
                decode(rr_type, &field)
            }
            Type::Aaaa => {
                let field = next_field(fields, "an IPv6 address", end)?;
                decode(rr_type, &field)
            }
            Type::Ns => {
                let field = next_field(fields, "a domain name", end)?;
                Ok(Rdata::Ns(self.qualify(&field)?))
            }
            Type::Cname => {
                let field = next_field(fields, "a domain name", end)?;
                Ok(Rdata::Cname(self.qualify(&field)?))
            }
            Type::Mx => {
                let preference_field = next_field(fields, "an MX preference", end)?;
                let preference = preference_field
                    .text
                    .parse::<u16>()
                    .map_err(|e| Error::new(preference_field.position, ErrorKind::InvalidInt(e)))?;
                let exchange_field = next_field(fields, "an MX exchange", end)?;
                let exchange = self.qualify(&exchange_field)?;
                Ok(Rdata::Mx {
                    preference,
                    exchange,
                })
            }
            Type::Txt => {
                // TXT RDATA is one or more <character-string>s. They
                // are stored in quoted presentation form, joined with
                // single spaces.
                let mut strings = Vec::new();
                for field in fields.by_ref() {
                    strings.push(format!("\"{}\"", field.text));
                }
                if strings.is_empty() {
                    return Err(Error::new(end, ErrorKind::Expected("a <character-string>")));
                }
                Ok(Rdata::Txt(strings.join(" ")))
            }
        }
    }
}

/// Takes the next field, reporting a missing one at `end`.
fn next_field(
    fields: &mut vec::IntoIter<Field>,
    what: &'static str,
    end: Position,
) -> Result<Field> {
    fields
        .next()
        .ok_or_else(|| Error::new(end, ErrorKind::Expected(what)))
}

/// Parses an unsigned 32-bit integer field.
fn parse_u32(field: &Field) -> Result<u32> {
    field
        .text
        .parse()
        .map_err(|e| Error::new(field.position, ErrorKind::InvalidInt(e)))
}

/// Decodes a single-field RDATA through the record data codec.
fn decode(rr_type: Type, field: &Field) -> Result<Rdata> {
    Rdata::from_text(rr_type, &field.text)
        .map_err(|e| Error::new(field.position, ErrorKind::InvalidValue(e)))
}
