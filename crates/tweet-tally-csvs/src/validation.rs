/*!
# Line Reading, Validation & Field Extraction

Byte-level checks applied to every line of a tweets CSV before any of its
content reaches the tally table, plus the one-time header analysis that
locates the `"name"` column.

Lines are raw bytes with their terminator still attached; scanning stops at
the first `\n`, `\r` or NUL byte. No encoding is assumed.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{
        is_header_space, is_line_end, HeaderLayout, TweetRow, COLUMN_DELIMITER, NAME_HEADER,
        QUOTE, TWEETS_CSV_HEADERS,
    },
};
use csv::{QuoteStyle, WriterBuilder};
use std::io::{BufRead, Read};
use std::path::Path;

// ================================================================================================
// Line Reading
// ================================================================================================

/// Read the next line into `buf` (cleared first), terminator included.
///
/// At most `max_line_length + 2` bytes are consumed, room for the content and
/// a `\r\n`. When that much arrives without a `\n` the line is rejected
/// before the rest of it is read. Returns the number of bytes read; 0 at end
/// of input.
pub fn read_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    max_line_length: usize,
) -> CsvResult<usize> {
    buf.clear();
    let limit = max_line_length.saturating_add(2);

    let read = reader.by_ref().take(limit as u64).read_until(b'\n', buf)?;

    if read == limit && buf.last() != Some(&b'\n') {
        return Err(CsvError::LineTooLong {
            length: read,
            max: max_line_length,
        });
    }

    Ok(read)
}

// ================================================================================================
// Line Validation
// ================================================================================================

/// Length and column count of a line that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineShape {
    /// Bytes before the line terminator
    pub length: usize,
    pub column_count: usize,
}

/// Check the structure of one raw line.
///
/// A `"` toggles the quoted state; a `,` outside quotes starts a new column and
/// a `,` inside quotes is rejected outright. The header is validated with
/// `expected = None`, every data line against the header's layout.
pub fn validate_line(
    line: &[u8],
    max_line_length: usize,
    expected: Option<&HeaderLayout>,
) -> CsvResult<LineShape> {
    let mut length = 0;
    let mut column_count = 1;
    let mut between_quotes = false;

    for &byte in line {
        if is_line_end(byte) {
            break;
        }

        if byte == COLUMN_DELIMITER {
            if between_quotes {
                return Err(CsvError::CommaInsideQuotation {
                    position: length + 1,
                });
            }
            column_count += 1;
        } else if byte == QUOTE {
            between_quotes = !between_quotes;
        }

        length += 1;
    }

    if length == 0 {
        return Err(CsvError::EmptyLine);
    }
    if length > max_line_length {
        return Err(CsvError::LineTooLong {
            length,
            max: max_line_length,
        });
    }

    if let Some(layout) = expected {
        if column_count != layout.column_count {
            return Err(CsvError::ColumnCountMismatch {
                found: column_count,
                expected: layout.column_count,
            });
        }
    }

    Ok(LineShape {
        length,
        column_count,
    })
}

// ================================================================================================
// Header Analysis
// ================================================================================================

/// Locate the `"name"` column and count the header's columns.
///
/// Within a column, whitespace before the token starts or after it completes
/// is ignored, but whitespace in the middle of the token breaks the match, as
/// does any other character outside the token.
pub fn analyze_header(header_line: &[u8]) -> CsvResult<HeaderLayout> {
    let token = NAME_HEADER.as_bytes();
    let bytes = header_line;

    let mut current_column = 1;
    let mut name_column: Option<usize> = None;
    let mut matched = 0;
    let mut match_possible = true;

    let mut index = 0;
    loop {
        // Running off the end behaves like a NUL terminator.
        let byte = bytes.get(index).copied().unwrap_or(b'\0');
        index += 1;

        if byte == COLUMN_DELIMITER || is_line_end(byte) {
            if match_possible && matched == token.len() {
                if let Some(first) = name_column {
                    return Err(CsvError::DuplicateNameColumn {
                        first,
                        second: current_column,
                    });
                }
                name_column = Some(current_column);
            }

            if byte != COLUMN_DELIMITER {
                break;
            }

            matched = 0;
            match_possible = true;
            current_column += 1;
        } else if is_header_space(byte) {
            if matched != 0 && matched != token.len() {
                match_possible = false;
            }
        } else if match_possible && matched < token.len() && token[matched] == byte {
            matched += 1;
        } else {
            match_possible = false;
        }
    }

    let name_column = name_column.ok_or(CsvError::NoNameColumn)?;

    Ok(HeaderLayout {
        name_column,
        column_count: current_column,
    })
}

// ================================================================================================
// Field Extraction
// ================================================================================================

/// Return the field at 1-based `column`, without the line terminator.
///
/// `None` when the line has fewer fields than `column` (or `column` is 0).
pub fn extract_field(line: &[u8], column: usize) -> Option<&[u8]> {
    let content = match line.iter().position(|&byte| is_line_end(byte)) {
        Some(end) => &line[..end],
        None => line,
    };

    let index = column.checked_sub(1)?;
    content.split(|&byte| byte == COLUMN_DELIMITER).nth(index)
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write a tweets CSV with every field quoted, so the header carries `"name"`
pub fn write_tweets_csv<P: AsRef<Path>>(path: P, rows: &[TweetRow]) -> CsvResult<()> {
    let mut wtr = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)?;

    // Header comes from the field names of the first serialized row; an
    // empty file still gets one.
    if rows.is_empty() {
        wtr.write_record(TWEETS_CSV_HEADERS)?;
    }

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::MAX_LINE_LENGTH;
    use chrono::NaiveDate;
    use tempfile::NamedTempFile;

    fn layout(name_column: usize, column_count: usize) -> HeaderLayout {
        HeaderLayout {
            name_column,
            column_count,
        }
    }

    #[test]
    fn test_read_line_keeps_terminator() {
        let mut input: &[u8] = b"a,b\r\nc,d\nlast";
        let mut buf = Vec::new();

        assert_eq!(read_line(&mut input, &mut buf, MAX_LINE_LENGTH).unwrap(), 5);
        assert_eq!(buf, b"a,b\r\n");
        assert_eq!(read_line(&mut input, &mut buf, MAX_LINE_LENGTH).unwrap(), 4);
        assert_eq!(buf, b"c,d\n");
        assert_eq!(read_line(&mut input, &mut buf, MAX_LINE_LENGTH).unwrap(), 4);
        assert_eq!(buf, b"last");
        assert_eq!(read_line(&mut input, &mut buf, MAX_LINE_LENGTH).unwrap(), 0);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_read_line_accepts_longest_line_with_crlf() {
        let line = [vec![b'x'; MAX_LINE_LENGTH], b"\r\n".to_vec()].concat();
        let mut input: &[u8] = &line;
        let mut buf = Vec::new();

        let read = read_line(&mut input, &mut buf, MAX_LINE_LENGTH).unwrap();
        assert_eq!(read, MAX_LINE_LENGTH + 2);
        validate_line(&buf, MAX_LINE_LENGTH, None).unwrap();
    }

    #[test]
    fn test_read_line_stops_consuming_unterminated_line() {
        let data = vec![b'x'; 1 << 20];
        let mut input: &[u8] = &data;
        let mut buf = Vec::new();

        let err = read_line(&mut input, &mut buf, MAX_LINE_LENGTH).unwrap_err();
        assert!(matches!(
            err,
            CsvError::LineTooLong {
                length: 376,
                max: 374
            }
        ));

        let consumed = data.len() - input.len();
        assert_eq!(consumed, MAX_LINE_LENGTH + 2);
        assert!(buf.len() <= MAX_LINE_LENGTH + 2);
    }

    #[test]
    fn test_read_line_reports_length_before_late_quoted_comma() {
        // A quoted comma past the limit is never reached.
        let mut line = b"1,\"".to_vec();
        line.extend(vec![b'x'; 400]);
        line.extend(b",y\"\n");
        let mut input: &[u8] = &line;
        let mut buf = Vec::new();

        assert!(matches!(
            read_line(&mut input, &mut buf, MAX_LINE_LENGTH),
            Err(CsvError::LineTooLong { max: 374, .. })
        ));
    }

    #[test]
    fn test_validate_counts_columns_and_length() {
        let shape = validate_line(b"1,\"Alice\",hi\n", MAX_LINE_LENGTH, None).unwrap();
        assert_eq!(shape.column_count, 3);
        assert_eq!(shape.length, 12);

        let shape = validate_line(b"a,b\r\n", MAX_LINE_LENGTH, None).unwrap();
        assert_eq!(shape.length, 3);
        assert_eq!(shape.column_count, 2);
    }

    #[test]
    fn test_validate_without_terminator() {
        let shape = validate_line(b"a,b,c", MAX_LINE_LENGTH, None).unwrap();
        assert_eq!(shape.column_count, 3);
        assert_eq!(shape.length, 5);
    }

    #[test]
    fn test_validate_accepts_non_ascii_bytes() {
        let shape = validate_line(b"1,\"Jos\xe9\"\n", MAX_LINE_LENGTH, None).unwrap();
        assert_eq!(shape.column_count, 2);
        assert_eq!(shape.length, 8);
    }

    #[test]
    fn test_comma_inside_quotation_is_rejected() {
        let err = validate_line(b"1,\"Smith, John\"\n", MAX_LINE_LENGTH, None).unwrap_err();
        assert!(matches!(
            err,
            CsvError::CommaInsideQuotation { position: 9 }
        ));
    }

    #[test]
    fn test_unbalanced_quote_swallows_following_commas() {
        // The opening quote is never closed, so the next delimiter is "inside".
        let err = validate_line(b"\"abc,def\n", MAX_LINE_LENGTH, None).unwrap_err();
        assert!(matches!(err, CsvError::CommaInsideQuotation { .. }));

        // Two quotes close again.
        validate_line(b"\"a\"\"b\",c\n", MAX_LINE_LENGTH, None).unwrap();
    }

    #[test]
    fn test_empty_line() {
        for line in [&b"\n"[..], b"\r\n", b""] {
            assert!(
                matches!(
                    validate_line(line, MAX_LINE_LENGTH, None),
                    Err(CsvError::EmptyLine)
                ),
                "{line:?} should be empty"
            );
        }
    }

    #[test]
    fn test_line_length_limit() {
        let at_limit = format!("{}\n", "x".repeat(MAX_LINE_LENGTH));
        validate_line(at_limit.as_bytes(), MAX_LINE_LENGTH, None).unwrap();

        let over_limit = format!("{}\n", "x".repeat(MAX_LINE_LENGTH + 1));
        let err = validate_line(over_limit.as_bytes(), MAX_LINE_LENGTH, None).unwrap_err();
        assert!(matches!(
            err,
            CsvError::LineTooLong {
                length: 375,
                max: 374
            }
        ));
    }

    #[test]
    fn test_column_count_checked_only_with_layout() {
        validate_line(b"a,b\n", MAX_LINE_LENGTH, None).unwrap();
        validate_line(b"a,b\n", MAX_LINE_LENGTH, Some(&layout(1, 2))).unwrap();

        let err = validate_line(b"a,b,c\n", MAX_LINE_LENGTH, Some(&layout(1, 2))).unwrap_err();
        assert!(matches!(
            err,
            CsvError::ColumnCountMismatch {
                found: 3,
                expected: 2
            }
        ));

        let err = validate_line(b"a\n", MAX_LINE_LENGTH, Some(&layout(1, 2))).unwrap_err();
        assert!(matches!(
            err,
            CsvError::ColumnCountMismatch {
                found: 1,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_analyze_header_finds_name_column() {
        let layout = analyze_header(b"\"id\",\"name\"\n").unwrap();
        assert_eq!(layout.name_column, 2);
        assert_eq!(layout.column_count, 2);

        let layout = analyze_header(b"\"name\",\"id\",\"text\"").unwrap();
        assert_eq!(layout.name_column, 1);
        assert_eq!(layout.column_count, 3);
    }

    #[test]
    fn test_analyze_header_ignores_surrounding_whitespace() {
        let layout = analyze_header(b"\"id\",  \"name\" \t,\"text\"\r\n").unwrap();
        assert_eq!(layout.name_column, 2);
        assert_eq!(layout.column_count, 3);
    }

    #[test]
    fn test_analyze_header_whitespace_inside_token_breaks_match() {
        assert!(matches!(
            analyze_header(b"\"id\",\"na me\"\n"),
            Err(CsvError::NoNameColumn)
        ));
        assert!(matches!(
            analyze_header(b"\"id\",\" name\"\n"),
            Err(CsvError::NoNameColumn)
        ));
    }

    #[test]
    fn test_analyze_header_requires_quoted_exact_token() {
        for header in [
            &b"id,name\n"[..],
            b"\"id\",\"Name\"\n",
            b"\"id\",\"names\"\n",
            b"\"id\",\"name\"x\n",
            b"\"id\",x\"name\"\n",
            b"\"id\",\"n\xe4me\"\n",
        ] {
            assert!(
                matches!(analyze_header(header), Err(CsvError::NoNameColumn)),
                "header {header:?} should have no name column"
            );
        }
    }

    #[test]
    fn test_analyze_header_duplicate_name_column() {
        let err = analyze_header(b"\"name\",\"id\",\"name\"\n").unwrap_err();
        assert!(matches!(
            err,
            CsvError::DuplicateNameColumn {
                first: 1,
                second: 3
            }
        ));
    }

    #[test]
    fn test_analyze_header_counts_empty_columns() {
        let layout = analyze_header(b",\"name\",,\n").unwrap();
        assert_eq!(layout.name_column, 2);
        assert_eq!(layout.column_count, 4);
    }

    #[test]
    fn test_extract_field() {
        let line = b"1,\"Alice\",hello\n";
        assert_eq!(extract_field(line, 1), Some(&b"1"[..]));
        assert_eq!(extract_field(line, 2), Some(&b"\"Alice\""[..]));
        assert_eq!(extract_field(line, 3), Some(&b"hello"[..]));
        assert_eq!(extract_field(line, 4), None);
        assert_eq!(extract_field(line, 0), None);
    }

    #[test]
    fn test_extract_last_field_strips_terminator() {
        assert_eq!(extract_field(b"1,\"Alice\"\r\n", 2), Some(&b"\"Alice\""[..]));
        assert_eq!(extract_field(b"1,\"Alice\"", 2), Some(&b"\"Alice\""[..]));
    }

    #[test]
    fn test_extract_empty_field() {
        assert_eq!(extract_field(b"1,,x\n", 2), Some(&b""[..]));
    }

    #[test]
    fn test_extract_non_utf8_field() {
        assert_eq!(extract_field(b"1,\"\xff\xfe\"\n", 2), Some(&b"\"\xff\xfe\""[..]));
    }

    #[test]
    fn test_written_fixture_passes_validation() {
        let created = NaiveDate::from_ymd_opt(2015, 2, 24)
            .unwrap()
            .and_hms_opt(11, 35, 52)
            .unwrap();
        let rows = vec![
            TweetRow {
                tweet_id: 1,
                name: "alice".to_string(),
                text: "first flight delayed again".to_string(),
                tweet_created: created,
            },
            TweetRow {
                tweet_id: 2,
                name: "bob".to_string(),
                text: "great crew today".to_string(),
                tweet_created: created,
            },
        ];

        let temp_file = NamedTempFile::new().unwrap();
        write_tweets_csv(temp_file.path(), &rows).unwrap();
        let contents = std::fs::read(temp_file.path()).unwrap();

        let mut input: &[u8] = &contents;
        let mut header = Vec::new();
        read_line(&mut input, &mut header, MAX_LINE_LENGTH).unwrap();
        validate_line(&header, MAX_LINE_LENGTH, None).unwrap();
        let layout = analyze_header(&header).unwrap();
        assert_eq!(layout.name_column, 2);
        assert_eq!(layout.column_count, 4);

        let mut names = Vec::new();
        let mut line = Vec::new();
        while read_line(&mut input, &mut line, MAX_LINE_LENGTH).unwrap() > 0 {
            validate_line(&line, MAX_LINE_LENGTH, Some(&layout)).unwrap();
            names.push(layout.name_field(&line).unwrap().to_vec());
        }
        assert_eq!(names, vec![b"\"alice\"".to_vec(), b"\"bob\"".to_vec()]);
    }

    #[test]
    fn test_write_empty_fixture_still_has_header() {
        let temp_file = NamedTempFile::new().unwrap();
        write_tweets_csv(temp_file.path(), &[]).unwrap();
        let contents = std::fs::read(temp_file.path()).unwrap();
        let layout = analyze_header(&contents).unwrap();
        assert_eq!(layout.name_column, 2);
    }
}
