//! UTF-16 transfer encoding for `.strings` files.
//!
//! Xcode tooling reads and writes these files as UTF-16 with a byte order
//! mark. We always write little-endian with a BOM and accept either byte
//! order on the way in.

const BOM_LE: [u8; 2] = [0xFF, 0xFE];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Utf16Error {
    #[error("odd byte length {0}")]
    OddLength(usize),
    #[error("unpaired surrogate in UTF-16 data")]
    UnpairedSurrogate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteOrder {
    Little,
    Big,
}

/// Encode text as UTF-16LE prefixed with a byte order mark.
pub fn encode_utf16(text: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(2 + text.len() * 2);
    bytes.extend_from_slice(&BOM_LE);
    for unit in text.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

/// Decode UTF-16 bytes, honouring and stripping a leading BOM.
///
/// Data without a BOM is read as little-endian.
pub fn decode_utf16(bytes: &[u8]) -> Result<String, Utf16Error> {
    let (order, body) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (ByteOrder::Little, rest),
        [0xFE, 0xFF, rest @ ..] => (ByteOrder::Big, rest),
        _ => (ByteOrder::Little, bytes),
    };

    if body.len() % 2 != 0 {
        return Err(Utf16Error::OddLength(bytes.len()));
    }

    let units: Vec<u16> = body
        .chunks_exact(2)
        .map(|pair| match order {
            ByteOrder::Little => u16::from_le_bytes([pair[0], pair[1]]),
            ByteOrder::Big => u16::from_be_bytes([pair[0], pair[1]]),
        })
        .collect();

    String::from_utf16(&units).map_err(|_| Utf16Error::UnpairedSurrogate)
}
