use crate::position::Positioned;
use std::io;

/// A QueryRegion is one row of the BED3+ input. Only the first three columns are
/// interpreted; the rest of the line is kept so it can be echoed to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRegion<'a> {
    pub chrom: &'a str,
    pub start: u64,
    pub stop: u64,
    /// the input line with trailing whitespace removed.
    pub line: &'a str,
}

/// What a single line of the query file holds.
#[derive(Debug, PartialEq, Eq)]
pub enum QueryLine<'a> {
    Region(QueryRegion<'a>),
    /// `#`, `track` and `browser` lines. Copied through untouched.
    Header(&'a str),
    Empty,
}

impl<'a> QueryRegion<'a> {
    #[inline]
    pub fn chrom(&self) -> &str {
        self.chrom
    }
}

impl Positioned for QueryRegion<'_> {
    #[inline]
    fn start(&self) -> u64 {
        self.start
    }
    #[inline]
    fn stop(&self) -> u64 {
        self.stop
    }
}

fn invalid(line_number: u64, line: &str, msg: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidData,
        format!("bed line#{}:{:?} error: {}", line_number, line, msg),
    )
}

/// `#` comments and UCSC `track`/`browser` lines. A chromosome named like `track_1` is data.
fn is_header(line: &str) -> bool {
    if line.starts_with('#') {
        return true;
    }
    let first = line.split_whitespace().next().unwrap_or("");
    first == "track" || first == "browser"
}

/// Parse one line of a BED file. `line_number` is only used for error messages.
pub fn parse_query_line(line: &str, line_number: u64) -> io::Result<QueryLine<'_>> {
    let line = line.trim_end();
    if line.trim_start().is_empty() {
        return Ok(QueryLine::Empty);
    }
    if is_header(line) {
        return Ok(QueryLine::Header(line));
    }

    let mut fields = line.split_whitespace();
    let (chrom, start, stop) = match (fields.next(), fields.next(), fields.next()) {
        (Some(c), Some(s), Some(e)) => (c, s, e),
        _ => return Err(invalid(line_number, line, "expected at least 3 columns")),
    };
    let start = start
        .parse::<u64>()
        .map_err(|e| invalid(line_number, line, &format!("start: {}", e)))?;
    let stop = stop
        .parse::<u64>()
        .map_err(|e| invalid(line_number, line, &format!("end: {}", e)))?;

    Ok(QueryLine::Region(QueryRegion {
        chrom,
        start,
        stop,
        line,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bed3_plus() {
        let q = parse_query_line("chr1\t10\t20\tpeak1\t0\t+\n", 1).unwrap();
        match q {
            QueryLine::Region(r) => {
                assert_eq!(r.chrom(), "chr1");
                assert_eq!(r.start, 10);
                assert_eq!(r.stop, 20);
                assert_eq!(r.line, "chr1\t10\t20\tpeak1\t0\t+");
            }
            _ => panic!("expected a region"),
        }
    }

    #[test]
    fn test_parse_headers_and_blanks() {
        assert_eq!(parse_query_line("\n", 1).unwrap(), QueryLine::Empty);
        assert_eq!(
            parse_query_line("track name=peaks\n", 1).unwrap(),
            QueryLine::Header("track name=peaks")
        );
        assert_eq!(
            parse_query_line("#chrom\tstart\tend", 1).unwrap(),
            QueryLine::Header("#chrom\tstart\tend")
        );
    }

    #[test]
    fn test_header_words_in_chromosome_names() {
        assert_eq!(
            parse_query_line("browser position chr1:1-100", 1).unwrap(),
            QueryLine::Header("browser position chr1:1-100")
        );
        assert_eq!(parse_query_line("track", 1).unwrap(), QueryLine::Header("track"));
        for line in ["track_1\t10\t20", "browserX\t10\t20"] {
            match parse_query_line(line, 1).unwrap() {
                QueryLine::Region(r) => assert_eq!((r.start, r.stop), (10, 20)),
                other => panic!("expected a region, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_errors_report_line_number() {
        let e = parse_query_line("chr1\t10", 7).unwrap_err();
        assert_eq!(e.kind(), io::ErrorKind::InvalidData);
        assert!(e.to_string().contains("line#7"));

        let e = parse_query_line("chr1\tx\t20", 3).unwrap_err();
        assert!(e.to_string().contains("start"));
    }
}
