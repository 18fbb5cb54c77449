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

//! The low-level tokenizer behind the zone file [`Parser`].
//!
//! The [`Reader`] splits input into logical lines of whitespace-
//! separated fields, taking care of the lexical features of the
//! [RFC 1035 § 5] format: comments, quoted `<character-string>`s, and
//! parentheses, which extend a record across physical lines. Anything
//! beyond that (directives, owner inheritance, TTL/class/type
//! juggling, RDATA formats) is the [`Parser`]'s business.
//!
//! [`Parser`]: super::Parser
//! [RFC 1035 § 5]: https://datatracker.ietf.org/doc/html/rfc1035#section-5

use super::error::{Error, ErrorKind, Position, Result};

////////////////////////////////////////////////////////////////////////
// STRUCTURES                                                          //
////////////////////////////////////////////////////////////////////////

/// A tokenizer over zone file text.
pub(super) struct Reader<'a> {
    rest: &'a str,
    line: usize,
    column: usize,
}

/// One logical line of a zone file. When parentheses are used, this
/// may span several physical lines; `number` is the physical line on
/// which it started.
#[derive(Debug)]
pub(super) struct LogicalLine {
    pub number: usize,
    pub leading_whitespace: bool,
    pub fields: Vec<Field>,
}

/// A single field of a logical line. For quoted fields, `text` holds
/// the content between the quotes.
#[derive(Debug)]
pub(super) struct Field {
    pub text: String,
    pub quoted: bool,
    pub position: Position,
}

////////////////////////////////////////////////////////////////////////
// IMPLEMENTATION                                                      //
////////////////////////////////////////////////////////////////////////

impl<'a> Reader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            line: 1,
            column: 1,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    fn peek(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.rest = &self.rest[c.len_utf8()..];
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Returns the next non-empty logical line, or [`None`] at the end
    /// of the input. Blank lines and comment-only lines are skipped.
    pub fn next_line(&mut self) -> Result<Option<LogicalLine>> {
        loop {
            if self.peek().is_none() {
                return Ok(None);
            }

            let number = self.line;
            let leading_whitespace = matches!(self.peek(), Some(' ') | Some('\t'));
            let mut fields = Vec::new();
            let mut in_parens = false;

            loop {
                while matches!(self.peek(), Some(' ') | Some('\t') | Some('\r')) {
                    self.advance();
                }
                match self.peek() {
                    None => {
                        if in_parens {
                            return Err(Error::new(
                                self.position(),
                                ErrorKind::EofBeforeCloseParen,
                            ));
                        }
                        break;
                    }
                    Some('\n') => {
                        self.advance();
                        if !in_parens {
                            break;
                        }
                    }
                    Some(';') => {
                        while !matches!(self.peek(), None | Some('\n')) {
                            self.advance();
                        }
                    }
                    Some('(') => {
                        if in_parens {
                            return Err(Error::new(self.position(), ErrorKind::NestedParens));
                        }
                        in_parens = true;
                        self.advance();
                    }
                    Some(')') => {
                        if !in_parens {
                            return Err(Error::new(
                                self.position(),
                                ErrorKind::UnmatchedCloseParen,
                            ));
                        }
                        in_parens = false;
                        self.advance();
                    }
                    Some('"') => fields.push(self.read_quoted_field()?),
                    Some(_) => fields.push(self.read_unquoted_field()),
                }
            }

            if !fields.is_empty() {
                return Ok(Some(LogicalLine {
                    number,
                    leading_whitespace,
                    fields,
                }));
            }
        }
    }

    /// Reads a quoted `<character-string>`, positioned on the opening
    /// quote. Escape sequences are passed through verbatim so that the
    /// presentation form survives a round trip, but an escaped quote
    /// does not terminate the field.
    fn read_quoted_field(&mut self) -> Result<Field> {
        let position = self.position();
        self.advance();

        let mut text = String::new();
        loop {
            match self.peek() {
                None => {
                    return Err(Error::new(
                        self.position(),
                        ErrorKind::EofInQuotedCharacterString,
                    ));
                }
                Some('\n') => {
                    return Err(Error::new(
                        self.position(),
                        ErrorKind::EolInQuotedCharacterString,
                    ));
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    text.push('\\');
                    match self.peek() {
                        None => {
                            return Err(Error::new(
                                self.position(),
                                ErrorKind::EofInQuotedCharacterString,
                            ));
                        }
                        Some(escaped) => {
                            self.advance();
                            text.push(escaped);
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
            }
        }

        Ok(Field {
            text,
            quoted: true,
            position,
        })
    }

    fn read_unquoted_field(&mut self) -> Field {
        let position = self.position();
        let mut text = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() || matches!(c, ';' | '(' | ')' | '"') {
                break;
            }
            self.advance();
            text.push(c);
        }
        Field {
            text,
            quoted: false,
            position,
        }
    }
}

////////////////////////////////////////////////////////////////////////
// TESTS                                                               //
////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<LogicalLine> {
        let mut reader = Reader::new(text);
        let mut collected = Vec::new();
        while let Some(line) = reader.next_line().unwrap() {
            collected.push(line);
        }
        collected
    }

    fn texts(line: &LogicalLine) -> Vec<&str> {
        line.fields.iter().map(|f| f.text.as_str()).collect()
    }

    #[test]
    fn fields_are_split_on_whitespace() {
        let lines = lines("foo 3600 IN A 10.0.0.1\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), ["foo", "3600", "IN", "A", "10.0.0.1"]);
        assert!(!lines[0].leading_whitespace);
    }

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        let lines = lines("\n; comment\n  \nfoo IN A 10.0.0.1 ; trailing\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(texts(&lines[0]), ["foo", "IN", "A", "10.0.0.1"]);
        assert_eq!(lines[0].number, 4);
    }

    #[test]
    fn leading_whitespace_is_reported() {
        let lines = lines("  IN A 10.0.0.1\n");
        assert!(lines[0].leading_whitespace);
    }

    #[test]
    fn parens_extend_a_line() {
        let lines = lines("@ IN SOA ns1 admin (\n 1 ; serial\n 2 3 4 5 )\nnext IN A 10.0.0.1\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(
            texts(&lines[0]),
            ["@", "IN", "SOA", "ns1", "admin", "1", "2", "3", "4", "5"],
        );
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[1].number, 4);
    }

    #[test]
    fn quoted_fields_keep_spaces_and_semicolons() {
        let lines = lines("foo IN TXT \"v=spf1 a mx ?all; ok\"\n");
        let field = lines[0].fields.last().unwrap();
        assert!(field.quoted);
        assert_eq!(field.text, "v=spf1 a mx ?all; ok");
    }

    #[test]
    fn escaped_quotes_do_not_terminate_a_field() {
        let lines = lines("foo IN TXT \"say \\\"hi\\\"\"\n");
        assert_eq!(lines[0].fields.last().unwrap().text, "say \\\"hi\\\"");
    }

    #[test]
    fn unterminated_input_is_rejected() {
        let mut reader = Reader::new("@ IN SOA (\n1 2");
        let err = reader.next_line().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EofBeforeCloseParen);

        let mut reader = Reader::new("foo IN TXT \"oops\n");
        let err = reader.next_line().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::EolInQuotedCharacterString);

        let mut reader = Reader::new("foo IN A )\n");
        let err = reader.next_line().unwrap_err();
        assert_eq!(err.kind(), &ErrorKind::UnmatchedCloseParen);
    }

    #[test]
    fn the_final_line_may_lack_a_newline() {
        let lines = lines("foo IN A 10.0.0.1");
        assert_eq!(texts(&lines[0]), ["foo", "IN", "A", "10.0.0.1"]);
    }
}
