// glb.rs       GLB container module
//
// Copyright (c) 2026  Douglas Lau
//
use crate::error::{Error, Result};
use std::io::Write;

/// Chunk header size (length + type)
const CHUNK_HEADER: usize = 8;

/// File header size (magic + version + length)
const FILE_HEADER: usize = 12;

/// GLB writer
struct Glb<W: Write> {
    writer: W,
}

/// Get padding needed for 4-byte alignment
fn padding(len: usize) -> usize {
    (4 - len % 4) % 4
}

/// Convert a length to a GLB `u32`
fn glb_len(len: usize) -> Result<u32> {
    len.try_into().map_err(|_| Error::TooLarge(len))
}

impl<W: Write> Glb<W> {
    /// Create new GLB writer
    fn new(writer: W) -> Self {
        Glb { writer }
    }

    /// Write GLB header
    fn write_header(&mut self, total_len: usize) -> Result<()> {
        self.writer.write_all(b"glTF")?;
        self.writer.write_all(&2u32.to_le_bytes())?;
        self.writer.write_all(&glb_len(total_len)?.to_le_bytes())?;
        Ok(())
    }

    /// Write one chunk, padded to 4-byte alignment
    fn write_chunk(
        &mut self,
        ctype: &[u8],
        data: &[u8],
        pad: u8,
    ) -> Result<()> {
        let n_pad = padding(data.len());
        let len = glb_len(data.len() + n_pad)?;
        self.writer.write_all(&len.to_le_bytes())?;
        self.writer.write_all(ctype)?;
        self.writer.write_all(data)?;
        for _ in 0..n_pad {
            self.writer.write_all(&[pad])?;
        }
        Ok(())
    }

    /// Write a JSON chunk
    fn write_json(&mut self, json: &str) -> Result<()> {
        self.write_chunk(b"JSON", json.as_bytes(), b' ')
    }

    /// Write a BIN chunk
    fn write_bin(&mut self, bin: &[u8]) -> Result<()> {
        self.write_chunk(b"BIN\0", bin, 0)
    }
}

/// Get the total length of a GLB file
pub fn total_len(json_len: usize, bin_len: usize) -> usize {
    FILE_HEADER
        + CHUNK_HEADER
        + json_len
        + padding(json_len)
        + CHUNK_HEADER
        + bin_len
        + padding(bin_len)
}

/// Write a GLB file with JSON and BIN chunks
pub fn write<W: Write>(writer: W, json: &str, bin: &[u8]) -> Result<()> {
    let mut glb = Glb::new(writer);
    glb.write_header(total_len(json.len(), bin.len()))?;
    glb.write_json(json)?;
    glb.write_bin(bin)?;
    glb.writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    fn u32_at(buf: &[u8], at: usize) -> u32 {
        u32::from_le_bytes(buf[at..at + 4].try_into().unwrap())
    }

    #[test]
    fn header() {
        let mut buf = vec![];
        write(&mut buf, "{}", &[1, 2, 3, 4]).unwrap();
        assert_eq!(&buf[0..4], b"glTF");
        assert_eq!(u32_at(&buf, 4), 2);
        assert_eq!(u32_at(&buf, 8) as usize, buf.len());
        assert_eq!(buf.len(), 12 + 8 + 4 + 8 + 4);
    }

    #[test]
    fn json_padding() {
        let mut buf = vec![];
        write(&mut buf, "{\"a\":1}", &[]).unwrap();
        // 7 bytes of JSON padded with one space
        assert_eq!(u32_at(&buf, 12), 8);
        assert_eq!(&buf[16..20], b"JSON");
        assert_eq!(&buf[20..28], b"{\"a\":1} ");
        assert_eq!(u32_at(&buf, 28), 0);
        assert_eq!(&buf[32..36], b"BIN\0");
        assert_eq!(buf.len(), 36);
        assert_eq!(total_len(7, 0), 36);
    }

    #[test]
    fn bin_padding() {
        let mut buf = vec![];
        write(&mut buf, "{}  ", &[7; 5]).unwrap();
        assert_eq!(u32_at(&buf, 24), 8);
        assert_eq!(&buf[32..40], &[7, 7, 7, 7, 7, 0, 0, 0]);
        assert_eq!(u32_at(&buf, 8) as usize, buf.len());
    }
}
