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

//! Crate-private utilities.

/// A wrapper around [`str`] references whose [`PartialEq`] and [`Eq`]
/// implementations are ASCII-case-insensitive.
#[derive(Debug)]
pub struct Caseless<'a>(pub &'a str);

impl PartialEq for Caseless<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(other.0)
    }
}

impl Eq for Caseless<'_> {}

/// Returns whether `text` is wrapped in a pair of double quotes.
pub fn is_quoted(text: &str) -> bool {
    text.len() >= 2 && text.starts_with('"') && text.ends_with('"')
}

/// Wraps `text` in double quotes unless it is already wrapped in them.
/// TXT record data is stored in its quoted presentation form, so caller
/// input is normalized through this helper.
pub fn quote(text: &str) -> String {
    if is_quoted(text) {
        text.to_owned()
    } else {
        format!("\"{}\"", text)
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caseless_compares_case_insensitively() {
        assert_eq!(Caseless("mx"), Caseless("MX"));
        assert_ne!(Caseless("mx"), Caseless("ns"));
    }

    #[test]
    fn quote_wraps_unquoted_text() {
        assert_eq!(quote("v=spf1 a mx ?all"), "\"v=spf1 a mx ?all\"");
    }

    #[test]
    fn quote_leaves_quoted_text_alone() {
        assert_eq!(quote("\"v=spf1 a mx ?all\""), "\"v=spf1 a mx ?all\"");
    }

    #[test]
    fn a_lone_quote_is_not_quoted() {
        assert!(!is_quoted("\""));
        assert_eq!(quote("\""), "\"\"\"");
    }
}
