use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[derive(Debug, PartialEq)]
pub enum Compression {
    None,
    GZ,
    BGZF,
}

/// Look at the first bytes of `reader` (without consuming them) to decide how it is compressed.
pub(crate) fn detect_compression<R: BufRead>(reader: &mut R) -> io::Result<Compression> {
    let buf = reader.fill_buf()?;
    if buf.len() < 2 || &buf[0..2] != b"\x1f\x8b" {
        return Ok(Compression::None);
    }
    // FEXTRA set and the BC subfield present.
    if buf.len() >= 16 && buf[3] & 4 != 0 && &buf[12..16] == b"BC\x02\x00" {
        Ok(Compression::BGZF)
    } else {
        Ok(Compression::GZ)
    }
}

/// Wrap `reader` in a decoder if it is gzip or bgzip compressed.
pub fn decompress<'a, R: BufRead + 'a>(mut reader: R) -> io::Result<Box<dyn BufRead + 'a>> {
    let compression = detect_compression(&mut reader)?;
    log::debug!("input compression: {:?}", compression);
    Ok(match compression {
        Compression::None => Box::new(reader),
        // BGZF is a series of gzip members.
        Compression::GZ | Compression::BGZF => Box::new(BufReader::new(MultiGzDecoder::new(reader))),
    })
}

/// Open a plain or compressed text file. `-` reads stdin.
pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    if path == Path::new("-") {
        return decompress(BufReader::new(io::stdin()));
    }
    let fh = File::open(path).map_err(|e| {
        io::Error::new(
            e.kind(),
            format!("could not open {}: {}", path.display(), e),
        )
    })?;
    decompress(BufReader::new(fh))
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use std::io::{Read, Write};

    fn gzipped(text: &str) -> Vec<u8> {
        let mut enc = GzEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(text.as_bytes()).unwrap();
        enc.finish().unwrap()
    }

    #[test]
    fn test_detect_plain() {
        let mut rdr = io::Cursor::new(b"chr1\t1\t2\n".to_vec());
        assert_eq!(detect_compression(&mut rdr).unwrap(), Compression::None);
        let mut empty = io::Cursor::new(Vec::new());
        assert_eq!(detect_compression(&mut empty).unwrap(), Compression::None);
    }

    #[test]
    fn test_decompress_gzip() {
        let data = gzipped("chr1\t1\t2\n");
        let mut rdr = io::Cursor::new(data.clone());
        assert_eq!(detect_compression(&mut rdr).unwrap(), Compression::GZ);

        let mut out = String::new();
        decompress(io::Cursor::new(data))
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "chr1\t1\t2\n");
    }

    #[test]
    fn test_open_missing_file_names_path() {
        let err = open("does/not/exist.bed").err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("does/not/exist.bed"));
    }
}
