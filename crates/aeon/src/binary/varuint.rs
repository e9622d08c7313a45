//! Variable-length unsigned integer codec.
//!
//! Used as the length prefix for strings, arrays, maps and binary blobs.
//!
//! Layout: a single header byte below `0x7F` is the value itself. Otherwise
//! the top 3 bits of the header hold the follow-up byte count `n` and the
//! next `n` bytes are the value, little-endian. Headers at or above `0x7F`
//! decode to `n` in `3..=7` (`0x7F` ⇒ 3, `0x80` ⇒ 4, `0xA0` ⇒ 5, `0xC0` ⇒ 6,
//! `0xE0` ⇒ 7); counts 1 and 2 are unrepresentable because their headers
//! would fall below `0x7F`, so the encoder's minimum large count is 3.

use aeon_buffers::{Reader, Writer};

use super::error::AeonError;

/// Largest value under the single-byte fast path.
const SMALL_MAX: u64 = 0x7E;

/// Reads a varuint at the reader's cursor.
pub fn read_varuint(rd: &mut Reader) -> Result<u64, AeonError> {
    let header = rd.try_u8()?;
    if header < 0x7F {
        return Ok(header as u64);
    }
    let num_bytes = (header >> 5) as usize;
    let bytes = rd.try_buf(num_bytes)?;
    let mut value = 0u64;
    for (i, b) in bytes.iter().enumerate() {
        value |= (*b as u64) << (8 * i);
    }
    Ok(value)
}

/// Writes a varuint using the minimal representable byte count.
///
/// Values at or above 2^56 need 8 follow-up bytes, which the header cannot
/// express; they are rejected with `UnsupportedValue`.
pub fn write_varuint(wr: &mut Writer, value: u64) -> Result<(), AeonError> {
    if value <= SMALL_MAX {
        wr.u8(value as u8);
        return Ok(());
    }
    if value >= 1 << 56 {
        return Err(AeonError::UnsupportedValue("varuint out of range"));
    }
    let mut num_bytes = 3usize;
    while num_bytes < 7 && value >= 1 << (8 * num_bytes) {
        num_bytes += 1;
    }
    let header = if num_bytes == 3 {
        0x7F
    } else {
        (num_bytes as u8) << 5
    };
    wr.u8(header);
    let le = value.to_le_bytes();
    wr.buf(&le[..num_bytes]);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(n: u64) -> u64 {
        let mut wr = Writer::new();
        write_varuint(&mut wr, n).unwrap();
        let data = wr.flush();
        let mut rd = Reader::new(&data);
        let back = read_varuint(&mut rd).unwrap();
        assert_eq!(rd.size(), 0, "varuint must consume its own bytes exactly");
        back
    }

    #[test]
    fn small_values_are_one_byte() {
        for n in [0u64, 1, 63, 126] {
            let mut wr = Writer::new();
            write_varuint(&mut wr, n).unwrap();
            assert_eq!(wr.flush(), [n as u8]);
            assert_eq!(roundtrip(n), n);
        }
    }

    #[test]
    fn boundary_127_uses_large_form() {
        let mut wr = Writer::new();
        write_varuint(&mut wr, 127).unwrap();
        assert_eq!(wr.flush(), [0x7F, 0x7F, 0x00, 0x00]);
        assert_eq!(roundtrip(127), 127);
    }

    #[test]
    fn required_roundtrip_values() {
        for n in [0u64, 1, 126, 127, 128, 65535, 16_777_216] {
            assert_eq!(roundtrip(n), n);
        }
    }

    #[test]
    fn four_byte_header() {
        let mut wr = Writer::new();
        write_varuint(&mut wr, 1 << 24).unwrap();
        assert_eq!(wr.flush(), [0x80, 0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn seven_byte_maximum() {
        let max = (1u64 << 56) - 1;
        assert_eq!(roundtrip(max), max);
        let mut wr = Writer::new();
        assert_eq!(
            write_varuint(&mut wr, 1 << 56),
            Err(AeonError::UnsupportedValue("varuint out of range"))
        );
    }

    #[test]
    fn truncated_large_form() {
        let data = [0x80u8, 0x01, 0x02]; // header says 4 bytes, only 3 remain
        let mut rd = Reader::new(&data);
        assert_eq!(read_varuint(&mut rd), Err(AeonError::TruncatedInput));
    }
}
