//! Protocol-level bit sequence assembly.
//!
//! All bit orders are transmission order: MSB first within each source byte
//! or hex nibble.

use crate::error::{Error, Result};
use crate::utils::consts::{
    FRAME_HEX_CHARS_2G, FRAME_SYNC_NORMAL, FRAME_SYNC_SELF_TEST, MESSAGE_BITS_2G,
    PREAMBLE_BITS_1G, PREAMBLE_BITS_2G,
};

/// Convert a byte to its bit array, MSB first
pub fn byte_to_bits(byte: u8) -> [u8; 8] {
    let mut bits = [0u8; 8];
    for (i, bit) in bits.iter_mut().enumerate() {
        *bit = (byte >> (7 - i)) & 1;
    }
    bits
}

/// Convert bytes to a bit vector, MSB first per byte
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        bits.extend_from_slice(&byte_to_bits(byte));
    }
    bits
}

/// Strip separators (spaces, dashes, underscores) from a hex string.
pub fn clean_hex(hex: &str) -> String {
    hex.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .collect()
}

/// Parse a hex string into bytes. Separators are ignored; an odd nibble
/// count or a non-hex character is `InvalidInput`.
pub fn parse_hex_bytes(hex: &str) -> Result<Vec<u8>> {
    let cleaned = clean_hex(hex);
    if cleaned.len() % 2 != 0 {
        return Err(Error::InvalidInput(format!(
            "hex message has an odd number of digits ({})",
            cleaned.len()
        )));
    }

    (0..cleaned.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&cleaned[i..i + 2], 16).map_err(|_| {
                Error::InvalidInput(format!("invalid hex digits {:?}", &cleaned[i..i + 2]))
            })
        })
        .collect()
}

/// Parse a hex string into bits, MSB first per nibble.
pub fn parse_hex_bits(hex: &str) -> Result<Vec<u8>> {
    let cleaned = clean_hex(hex);
    let mut bits = Vec::with_capacity(cleaned.len() * 4);
    for c in cleaned.chars() {
        let value = c
            .to_digit(16)
            .ok_or_else(|| Error::InvalidInput(format!("invalid hex digit {c:?}")))?;
        for i in (0..4).rev() {
            bits.push(((value >> i) & 1) as u8);
        }
    }
    Ok(bits)
}

/// Build the modulated portion of a 1G frame: 15-bit preamble of ones,
/// 9-bit frame sync (normal or self-test pattern), then the message bits
/// MSB first. The unmodulated carrier is not part of the bit sequence.
pub fn build_frame_1g(data_bytes: &[u8], test_mode: bool) -> Vec<u8> {
    let data_bits = bytes_to_bits(data_bytes);
    let sync = if test_mode {
        FRAME_SYNC_SELF_TEST
    } else {
        FRAME_SYNC_NORMAL
    };

    let mut bits = Vec::with_capacity(PREAMBLE_BITS_1G + sync.len() + data_bits.len());
    bits.extend(std::iter::repeat_n(1u8, PREAMBLE_BITS_1G));
    bits.extend_from_slice(&sync);
    bits.extend(data_bits);
    bits
}

/// Build a 2G frame from a T.018 hex message: 50-bit all-zero preamble
/// followed by the 250 message bits (202 information + 48 BCH parity,
/// computed by the caller).
///
/// The hex message must be exactly 63 characters; the trailing two bits of
/// the last nibble are padding and are discarded.
pub fn build_frame_2g(hex_message: &str) -> Result<Vec<u8>> {
    let cleaned = clean_hex(hex_message);
    if cleaned.len() != FRAME_HEX_CHARS_2G {
        return Err(Error::InvalidInput(format!(
            "2G frame must be {} hex characters, got {}",
            FRAME_HEX_CHARS_2G,
            cleaned.len()
        )));
    }

    let mut message_bits = parse_hex_bits(&cleaned)?;
    message_bits.truncate(MESSAGE_BITS_2G);

    let mut bits = Vec::with_capacity(PREAMBLE_BITS_2G + MESSAGE_BITS_2G);
    bits.extend(std::iter::repeat_n(0u8, PREAMBLE_BITS_2G));
    bits.extend(message_bits);
    Ok(bits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_msb_first_bit_order() {
        assert_eq!(byte_to_bits(0b1011_0011), [1, 0, 1, 1, 0, 0, 1, 1]);
        assert_eq!(bytes_to_bits(&[0x80, 0x01])[0], 1);
        assert_eq!(bytes_to_bits(&[0x80, 0x01])[15], 1);
    }

    #[test]
    fn test_parse_hex_bytes() {
        assert_eq!(parse_hex_bytes("0AFF").unwrap(), vec![0x0A, 0xFF]);
        assert_eq!(parse_hex_bytes("0a-ff 00").unwrap(), vec![0x0A, 0xFF, 0x00]);
        assert!(parse_hex_bytes("0AF").is_err());
        assert!(parse_hex_bytes("0G").is_err());
    }

    #[test]
    fn test_parse_hex_bits() {
        assert_eq!(parse_hex_bits("A").unwrap(), vec![1, 0, 1, 0]);
        assert_eq!(parse_hex_bits("3").unwrap(), vec![0, 0, 1, 1]);
        assert!(parse_hex_bits("XY").is_err());
    }

    #[test]
    fn test_frame_1g_layout() {
        let bits = build_frame_1g(&[0xFF], false);
        assert_eq!(bits.len(), 15 + 9 + 8);
        assert!(bits[..15].iter().all(|&b| b == 1));
        assert_eq!(&bits[15..24], &[0, 0, 0, 1, 0, 1, 1, 1, 1]);
        assert!(bits[24..].iter().all(|&b| b == 1));
    }

    #[test]
    fn test_frame_1g_self_test_sync() {
        let bits = build_frame_1g(&[0x00], true);
        assert_eq!(&bits[15..24], &[0, 1, 1, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn test_frame_2g_layout() {
        let hex = "0".repeat(63);
        let bits = build_frame_2g(&hex).unwrap();
        assert_eq!(bits.len(), 300);
        assert!(bits[..50].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_frame_2g_rejects_wrong_length() {
        assert!(build_frame_2g("ABC").is_err());
        assert!(build_frame_2g(&"0".repeat(64)).is_err());
    }

    #[test]
    fn test_frame_2g_ignores_separators() {
        let spaced = "0C 0E 74 56 39 09 56 CC D0 27 99 A2 46 8A CF 13 57 87 FF F0 0C 02 83 20 00 03 77 07 60 9B C0 F";
        let bits = build_frame_2g(spaced).unwrap();
        assert_eq!(bits.len(), 300);
    }
}
