use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

#[derive(Debug, PartialEq)]
pub enum Compression {
    None,
    GZ,
}

pub(crate) fn detect_compression<R: BufRead>(reader: &mut R) -> io::Result<Compression> {
    let buf = reader.fill_buf()?;
    if buf.len() >= 2 && &buf[0..2] == b"\x1f\x8b" {
        Ok(Compression::GZ)
    } else {
        Ok(Compression::None)
    }
}

/// Wrap `reader`, decompressing it if it starts with the gzip magic number.
pub fn decompress<R: BufRead + 'static>(mut reader: R) -> io::Result<Box<dyn BufRead>> {
    match detect_compression(&mut reader)? {
        Compression::GZ => Ok(Box::new(BufReader::new(MultiGzDecoder::new(reader)))),
        Compression::None => Ok(Box::new(reader)),
    }
}

/// Open `path` for reading, `-` being stdin. Gzipped input (bgzf included) is decompressed.
pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    if path == Path::new("-") {
        log::debug!("reading from stdin");
        decompress(BufReader::new(io::stdin()))
    } else {
        log::debug!("reading {}", path.display());
        decompress(BufReader::new(File::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use std::io::{Read, Write};

    #[test]
    fn test_detect_plain() {
        let mut r = io::Cursor::new(b"{\"1\": [[1, 2]]}".to_vec());
        assert_eq!(detect_compression(&mut r).unwrap(), Compression::None);
        let mut empty = io::Cursor::new(Vec::new());
        assert_eq!(detect_compression(&mut empty).unwrap(), Compression::None);
    }

    #[test]
    fn test_decompress_gz() {
        let mut enc = GzEncoder::new(Vec::new(), flate2::Compression::default());
        enc.write_all(b"315252 1,2,3\n").unwrap();
        let gz = enc.finish().unwrap();

        let mut r = io::Cursor::new(gz);
        assert_eq!(detect_compression(&mut r).unwrap(), Compression::GZ);

        let mut s = String::new();
        decompress(r).unwrap().read_to_string(&mut s).unwrap();
        assert_eq!(s, "315252 1,2,3\n");
    }
}
