// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Road description loader.
//!
//! Turns a line-oriented text stream into a validated `Road`. The expected
//! layout is:
//!
//! ```raw
//! T            // road length
//! N            // number of cities
//! X_1 Name_1   // position, whitespace, name (may contain spaces)
//! ...
//! X_N Name_N
//! ```
//!
//! Blank lines are skipped wherever a header value or record is expected and
//! never count as a record. Only the first token of the `T` and `N` lines is
//! read. Anything after the `N`-th record is left unread.
//!
//! Lines are decoded as UTF-8 when they are valid UTF-8 and as Latin-1
//! otherwise, so files written in a single-byte charset load unchanged.
//!
//! Loading is all-or-nothing: the first violation aborts with an error that
//! names the line it was found on, and no partial road is returned. The source
//! is owned by the call and dropped on every exit path.

use crate::{
    error::{FormatError, RoadLoaderError},
    limits::RoadLimits,
    road::{Road, RoadBuilder},
};
use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

/// A configurable loader for road description files.
///
/// # Examples
///
/// ```rust
/// # use roadside_model::loading::RoadLoader;
///
/// let road = RoadLoader::new()
///     .from_str("20\n4\n2 A\n7 B\n13 C\n18 D\n")
///     .unwrap();
/// assert_eq!(road.length(), 20);
/// assert_eq!(road.num_cities(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RoadLoader {
    limits: RoadLimits,
}

impl RoadLoader {
    /// Creates a loader with the default `RoadLimits`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the bounds applied to loaded roads.
    #[inline]
    pub fn limits(mut self, limits: RoadLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Returns the bounds applied to loaded roads.
    #[inline]
    pub fn road_limits(&self) -> &RoadLimits {
        &self.limits
    }

    /// Loads a road from a type implementing `BufRead`.
    pub fn from_bufread<R: BufRead>(&self, rdr: R) -> Result<Road, RoadLoaderError> {
        let mut lines = LineScanner::new(rdr);

        let (length_line, length) = lines.next_header("road length")?;
        let (count_line, declared) = lines.next_header("city count")?;

        let mut builder = RoadBuilder::new(length, declared, &self.limits).map_err(|e| {
            let line = match e {
                FormatError::LengthOutOfBounds { .. } => length_line,
                _ => count_line,
            };
            RoadLoaderError::format(line, e)
        })?;

        tracing::debug!(length, declared, "read road header");

        while !builder.is_complete() {
            let Some((line, record)) = lines.next_non_blank()? else {
                return Err(RoadLoaderError::format(
                    lines.line(),
                    FormatError::MissingRecords {
                        declared: builder.declared_cities(),
                        found: builder.num_cities(),
                    },
                ));
            };

            let (token, name) = split_record(record);
            let position = parse_integer(token, "city position")
                .map_err(|e| RoadLoaderError::format(line, e))?;
            let Some(name) = name else {
                return Err(RoadLoaderError::format(
                    line,
                    FormatError::MissingName { position },
                ));
            };

            let index = builder
                .add_city(position, name)
                .map_err(|e| RoadLoaderError::constraint(line, e))?;

            tracing::trace!(line, position, %index, "read city record");
        }

        builder
            .build()
            .map_err(|e| RoadLoaderError::format(lines.line(), e))
    }

    /// Loads a road from a file path.
    #[inline]
    pub fn from_path<P: AsRef<Path>>(&self, path: P) -> Result<Road, RoadLoaderError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading road");
        let file = File::open(path)?;
        self.from_bufread(BufReader::new(file))
    }

    /// Loads a road from a generic reader.
    #[inline]
    pub fn from_reader<R: Read>(&self, r: R) -> Result<Road, RoadLoaderError> {
        self.from_bufread(BufReader::new(r))
    }

    /// Loads a road from a string slice.
    #[inline]
    pub fn from_str(&self, s: &str) -> Result<Road, RoadLoaderError> {
        self.from_reader(s.as_bytes())
    }
}

/// Splits a trimmed record line into its position token and the name.
///
/// The name is everything after the first run of whitespace, or `None` if the
/// line holds a single token.
fn split_record(record: &str) -> (&str, Option<&str>) {
    match record.split_once(char::is_whitespace) {
        Some((token, rest)) => {
            let name = rest.trim();
            (token, (!name.is_empty()).then_some(name))
        }
        None => (record, None),
    }
}

fn parse_integer(token: &str, field: &'static str) -> Result<i64, FormatError> {
    token.parse::<i64>().map_err(|_| FormatError::InvalidInteger {
        token: token.to_owned(),
        field,
    })
}

/// Decodes a raw line as UTF-8, falling back to Latin-1.
///
/// Every byte sequence decodes, so the loader never rejects a file for its
/// charset alone.
fn decode_line(bytes: &[u8], out: &mut String) {
    out.clear();
    match std::str::from_utf8(bytes) {
        Ok(text) => out.push_str(text),
        Err(_) => out.extend(bytes.iter().map(|&b| char::from(b))),
    }
}

/// Reads trimmed, non-blank lines while counting physical lines.
struct LineScanner<R> {
    rdr: R,
    raw: Vec<u8>,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineScanner<R> {
    #[inline]
    fn new(rdr: R) -> Self {
        Self {
            rdr,
            raw: Vec::new(),
            buf: String::new(),
            line: 0,
        }
    }

    /// The 1-based number of the last line read, or `0` before any read.
    #[inline]
    fn line(&self) -> usize {
        self.line
    }

    /// Returns the next non-blank line, trimmed, with its line number.
    /// Returns `None` at end of input.
    fn next_non_blank(&mut self) -> Result<Option<(usize, &str)>, RoadLoaderError> {
        loop {
            self.raw.clear();
            if self.rdr.read_until(b'\n', &mut self.raw)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            decode_line(&self.raw, &mut self.buf);
            if !self.buf.trim().is_empty() {
                return Ok(Some((self.line, self.buf.trim())));
            }
        }
    }

    /// Reads the leading integer of the next non-blank line, with its line number.
    fn next_header(&mut self, field: &'static str) -> Result<(usize, i64), RoadLoaderError> {
        let Some((line, text)) = self.next_non_blank()? else {
            return Err(RoadLoaderError::format(
                self.line,
                FormatError::UnexpectedEof { expected: field },
            ));
        };
        // Non-blank, so there is at least one token.
        let token = text.split_whitespace().next().unwrap_or(text);
        parse_integer(token, field)
            .map(|value| (line, value))
            .map_err(|e| RoadLoaderError::format(line, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConstraintError;
    use crate::index::CityIndex;
    use std::io::Write;

    const SAMPLE: &str = "20\n4\n2 A\n7 B\n13 C\n18 D\n";

    fn load(s: &str) -> Result<Road, RoadLoaderError> {
        RoadLoader::new().from_str(s)
    }

    fn format_err(s: &str) -> (usize, FormatError) {
        match load(s) {
            Err(RoadLoaderError::Format { line, source }) => (line, source),
            other => panic!("expected a format error, got {:?}", other),
        }
    }

    fn constraint_err(s: &str) -> (usize, ConstraintError) {
        match load(s) {
            Err(RoadLoaderError::Constraint { line, source }) => (line, source),
            other => panic!("expected a constraint error, got {:?}", other),
        }
    }

    #[test]
    fn test_loads_sample() {
        let road = load(SAMPLE).expect("sample should load");
        assert_eq!(road.length(), 20);
        assert_eq!(road.declared_cities(), 4);
        let names: Vec<_> = road.cities().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
        assert_eq!(road.positions().collect::<Vec<_>>(), vec![2, 7, 13, 18]);
    }

    #[test]
    fn test_keeps_read_order_and_multiword_names() {
        let data = "100\n3\n80   Porto   Alegre  \n10\tBelo Horizonte\n45 Rio\n";
        let road = load(data).unwrap();
        assert_eq!(road.city(CityIndex::new(0)).name(), "Porto   Alegre");
        assert_eq!(road.city(CityIndex::new(0)).position(), 80);
        assert_eq!(road.city(CityIndex::new(1)).name(), "Belo Horizonte");
        assert_eq!(road.city(CityIndex::new(2)).position(), 45);
    }

    #[test]
    fn test_skips_blank_lines_everywhere() {
        let data = "\n\n  20  \n\n\t\n4\n\n2 A\n   \n7 B\r\n\r\n13 C\n\n18 D";
        let road = load(data).unwrap();
        assert_eq!(road.length(), 20);
        assert_eq!(road.num_cities(), 4);
        assert_eq!(road.city(CityIndex::new(1)).name(), "B");
    }

    #[test]
    fn test_ignores_trailing_content() {
        let data = "20\n2\n5 A\n15 B\n15 B again\ngarbage\n";
        let road = load(data).unwrap();
        assert_eq!(road.num_cities(), 2);
    }

    #[test]
    fn test_header_uses_first_token_only() {
        let road = load("20 km\n2 cities\n5 A\n15 B\n").unwrap();
        assert_eq!(road.length(), 20);
        assert_eq!(road.declared_cities(), 2);
    }

    #[test]
    fn test_missing_header_values() {
        assert_eq!(
            format_err(""),
            (
                0,
                FormatError::UnexpectedEof {
                    expected: "road length"
                }
            )
        );
        assert_eq!(
            format_err("20\n\n"),
            (
                2,
                FormatError::UnexpectedEof {
                    expected: "city count"
                }
            )
        );
    }

    #[test]
    fn test_non_numeric_header() {
        let (line, err) = format_err("twenty\n4\n");
        assert_eq!(line, 1);
        assert_eq!(
            err,
            FormatError::InvalidInteger {
                token: "twenty".to_owned(),
                field: "road length"
            }
        );

        let (line, err) = format_err("\n20\n4.5\n");
        assert_eq!(line, 3);
        assert!(matches!(err, FormatError::InvalidInteger { field: "city count", .. }));
    }

    #[test]
    fn test_header_bounds() {
        assert!(matches!(
            format_err("2\n2\n1 A\n"),
            (1, FormatError::LengthOutOfBounds { length: 2, .. })
        ));
        assert!(matches!(
            format_err("\n2\n\n\n5\n"),
            (2, FormatError::LengthOutOfBounds { length: 2, .. })
        ));
        assert!(matches!(
            format_err("1000001\n2\n"),
            (_, FormatError::LengthOutOfBounds { .. })
        ));
        assert!(matches!(
            format_err("20\n\n1\n5 A\n"),
            (3, FormatError::CityCountOutOfBounds { count: 1, .. })
        ));
        assert!(matches!(
            format_err("20\n10001\n"),
            (_, FormatError::CityCountOutOfBounds { .. })
        ));
        assert!(matches!(
            format_err("99999999999999999999\n2\n"),
            (1, FormatError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_insufficient_records() {
        let data = "20\n5\n2 A\n7 B\n\n13 C\n\n";
        let (line, err) = format_err(data);
        assert_eq!(line, 7);
        assert_eq!(
            err,
            FormatError::MissingRecords {
                declared: 5,
                found: 3
            }
        );
    }

    #[test]
    fn test_record_without_name() {
        let (line, err) = format_err("20\n2\n5 A\n9\n");
        assert_eq!(line, 4);
        assert_eq!(err, FormatError::MissingName { position: 9 });

        let (_, err) = format_err("20\n2\n5 A\n9   \t \n");
        assert_eq!(err, FormatError::MissingName { position: 9 });
    }

    #[test]
    fn test_record_with_bad_position() {
        let (line, err) = format_err("20\n2\nA 5\n9 B\n");
        assert_eq!(line, 3);
        assert!(matches!(
            err,
            FormatError::InvalidInteger { ref token, field: "city position" } if token == "A"
        ));
    }

    #[test]
    fn test_position_out_of_range() {
        let (line, err) = constraint_err("20\n2\n0 Start\n9 B\n");
        assert_eq!(line, 3);
        assert_eq!(
            err,
            ConstraintError::PositionOutOfRange {
                position: 0,
                length: 20
            }
        );

        let (line, err) = constraint_err("20\n2\n9 B\n20 End\n");
        assert_eq!(line, 4);
        assert!(matches!(
            err,
            ConstraintError::PositionOutOfRange { position: 20, .. }
        ));

        let (_, err) = constraint_err("20\n2\n-1 Neg\n9 B\n");
        assert!(matches!(
            err,
            ConstraintError::PositionOutOfRange { position: -1, .. }
        ));
    }

    #[test]
    fn test_duplicate_position() {
        let (line, err) = constraint_err("20\n3\n7 A\n\n12 B\n7 C\n");
        assert_eq!(line, 6);
        assert_eq!(
            err,
            ConstraintError::DuplicatePosition {
                position: 7,
                first: CityIndex::new(0)
            }
        );
    }

    #[test]
    fn test_custom_limits() {
        let loader =
            RoadLoader::new().limits(RoadLimits::default().length_bounds(1, 10).name_limit(3));
        assert_eq!(loader.road_limits().max_length(), 10);
        let road = loader.from_str("10\n2\n1 Alpha\n2 Be\n").unwrap();
        assert_eq!(road.cities()[0].name(), "Alp");
        assert!(loader.from_str("11\n2\n1 A\n2 B\n").is_err());
    }

    #[test]
    fn test_latin1_names() {
        let road = RoadLoader::new()
            .from_reader(&b"20\n2\n5 S\xe3o Paulo\n15 Bel\xe9m\n"[..])
            .unwrap();
        assert_eq!(road.cities()[0].name(), "São Paulo");
        assert_eq!(road.cities()[1].name(), "Belém");
    }

    #[test]
    fn test_utf8_names_are_kept() {
        let road = load("20\n2\n5 São Paulo\n15 Goiânia\n").unwrap();
        assert_eq!(road.cities()[0].name(), "São Paulo");
        assert_eq!(road.cities()[1].name(), "Goiânia");
    }

    #[test]
    fn test_zero_name_limit_fails_on_first_record() {
        let loader = RoadLoader::new().limits(RoadLimits::default().name_limit(0));
        match loader.from_str("20\n2\n5 A\n15 B\n") {
            Err(RoadLoaderError::Constraint { line, source }) => {
                assert_eq!(line, 3);
                assert_eq!(source, ConstraintError::EmptyName { position: 5 });
            }
            other => panic!("expected a constraint error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        file.flush().unwrap();

        let road = RoadLoader::new().from_path(file.path()).unwrap();
        assert_eq!(road.num_cities(), 4);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist.txt");
        match RoadLoader::new().from_path(&missing) {
            Err(RoadLoaderError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_split_record() {
        assert_eq!(split_record("7 B"), ("7", Some("B")));
        assert_eq!(split_record("7\t\tSan  Jose"), ("7", Some("San  Jose")));
        assert_eq!(split_record("7"), ("7", None));
    }
}
