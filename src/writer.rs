use flate2::write::GzEncoder;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Output destination for annotated lines. `-` is stdout; a path ending in `.gz` is gzip compressed.
pub struct Writer {
    inner: Box<dyn Write>,
}

impl Writer {
    pub fn init<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref();
        let inner: Box<dyn Write> = if path == Path::new("-") {
            Box::new(BufWriter::new(io::stdout().lock()))
        } else {
            let fh = File::create(path).map_err(|e| {
                io::Error::new(
                    e.kind(),
                    format!("could not create {}: {}", path.display(), e),
                )
            })?;
            if path.extension().is_some_and(|ext| ext == "gz") {
                Box::new(GzEncoder::new(
                    BufWriter::new(fh),
                    flate2::Compression::default(),
                ))
            } else {
                Box::new(BufWriter::new(fh))
            }
        };
        Ok(Writer { inner })
    }

    /// Wrap an existing writer; used by tests and library callers.
    pub fn from_writer<W: Write + 'static>(w: W) -> Self {
        Writer { inner: Box::new(w) }
    }

    /// Write `line` followed by a newline.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")
    }

    /// Write `line`, a tab, the fields and a newline.
    pub fn write_annotated<D: std::fmt::Display>(&mut self, line: &str, fields: D) -> io::Result<()> {
        writeln!(self.inner, "{}\t{}", line, fields)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl Drop for Writer {
    fn drop(&mut self) {
        if let Err(e) = self.inner.flush() {
            log::error!("error flushing output: {}", e);
        }
    }
}

/// `peaks.bed` -> `peaks_annotation.txt`, next to the input.
pub fn default_output_path<P: AsRef<Path>>(bed_path: P) -> PathBuf {
    let bed_path = bed_path.as_ref();
    let stem = bed_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("bed"));
    bed_path.with_file_name(format!("{}_annotation.txt", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path("data/peaks.bed"),
            PathBuf::from("data/peaks_annotation.txt")
        );
        assert_eq!(
            default_output_path("peaks.narrowPeak.bed"),
            PathBuf::from("peaks.narrowPeak_annotation.txt")
        );
        assert_eq!(
            default_output_path("regions"),
            PathBuf::from("regions_annotation.txt")
        );
    }

    #[test]
    fn test_gz_output_round_trip() {
        use flate2::read::MultiGzDecoder;
        use std::io::Read;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt.gz");
        {
            let mut w = Writer::init(&path).unwrap();
            w.write_annotated("chr1\t1\t2", "intergenic\tNA\tNA").unwrap();
        }
        let mut text = String::new();
        MultiGzDecoder::new(File::open(&path).unwrap())
            .read_to_string(&mut text)
            .unwrap();
        assert_eq!(text, "chr1\t1\t2\tintergenic\tNA\tNA\n");
    }
}
