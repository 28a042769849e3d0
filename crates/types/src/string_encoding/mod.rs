// Path: crates/types/src/string_encoding/mod.rs

//! Checksummed base-32 text encoding (bech32m, BIP-350) for human-facing identifiers.
//!
//! A payload is packed into 5-bit groups most-significant-bit first, a six-group
//! BCH checksum is computed over the expanded human-readable prefix and the data,
//! and every group is rendered through a fixed 32-symbol alphabet. The constants
//! below are fixed by BIP-350; changing any of them breaks every consumer that
//! validates the checksum.

use crate::error::EncodeError;

/// The 32-symbol alphabet, indexed by 5-bit group value.
pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// The constant XORed into the final checksum state for the bech32m variant.
pub const BECH32M_CONST: u32 = 0x2BC8_30A3;

/// The generator coefficients of the checksum polynomial.
pub const GENERATOR: [u32; 5] = [
    0x3B6A_57B2,
    0x2650_8E6D,
    0x1EA1_19FA,
    0x3D42_33DD,
    0x2A14_62B3,
];

/// The number of 5-bit checksum groups appended to the data part.
pub const CHECKSUM_LENGTH: usize = 6;

/// The separator between the human-readable prefix and the data part.
pub const SEPARATOR: char = '1';

/// The human-readable prefix used for chain addresses.
pub const ADDRESS_HRP: &str = "tnam";

const MAX_HRP_LEN: usize = 83;

/// Packs bytes into 5-bit groups, most-significant bits first.
///
/// A trailing remainder of fewer than 5 bits is left-shifted into a final group
/// padded with zero bits.
pub fn to_base32(data: &[u8]) -> Vec<u8> {
    let mut groups = Vec::with_capacity((data.len() * 8).div_ceil(5));
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &byte in data {
        acc = (acc << 8) | u32::from(byte);
        bits += 8;
        while bits >= 5 {
            bits -= 5;
            groups.push(((acc >> bits) & 31) as u8);
        }
        acc &= (1 << bits) - 1;
    }
    if bits > 0 {
        groups.push(((acc << (5 - bits)) & 31) as u8);
    }
    groups
}

/// Unpacks 5-bit groups back into bytes.
///
/// Fails if a group is out of range, or if the trailing padding is longer than
/// four bits or contains a set bit.
pub fn from_base32(groups: &[u8]) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::with_capacity(groups.len() * 5 / 8);
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    for &group in groups {
        if group > 31 {
            return Err(EncodeError::ChecksumInputInvalid {
                reason: format!("group value {} is not a 5-bit value", group),
            });
        }
        acc = (acc << 5) | u32::from(group);
        bits += 5;
        if bits >= 8 {
            bits -= 8;
            out.push(((acc >> bits) & 0xff) as u8);
        }
        acc &= (1 << bits) - 1;
    }
    if bits >= 5 || acc != 0 {
        return Err(EncodeError::InvalidPadding);
    }
    Ok(out)
}

/// Expands the prefix for checksum computation: high bits, a zero, then low bits.
pub fn hrp_expand(hrp: &str) -> Vec<u8> {
    let mut expanded = Vec::with_capacity(hrp.len() * 2 + 1);
    expanded.extend(hrp.bytes().map(|c| c >> 5));
    expanded.push(0);
    expanded.extend(hrp.bytes().map(|c| c & 31));
    expanded
}

/// Runs the checksum polynomial over a sequence of 5-bit values.
pub fn polymod(values: &[u8]) -> u32 {
    let mut state: u32 = 1;
    for &v in values {
        let top = state >> 25;
        state = ((state & 0x01FF_FFFF) << 5) ^ u32::from(v);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                state ^= generator;
            }
        }
    }
    state
}

fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; CHECKSUM_LENGTH]);
    let state = polymod(&values) ^ BECH32M_CONST;
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, group) in checksum.iter_mut().enumerate() {
        *group = ((state >> (5 * (5 - i))) & 31) as u8;
    }
    checksum
}

fn verify_checksum(hrp: &str, data_with_checksum: &[u8]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data_with_checksum);
    polymod(&values) == BECH32M_CONST
}

/// Validates a prefix and returns it in lowercase.
fn check_hrp(hrp: &str) -> Result<String, EncodeError> {
    let invalid = |reason: String| EncodeError::ChecksumInputInvalid { reason };
    if hrp.is_empty() || hrp.len() > MAX_HRP_LEN {
        return Err(invalid(format!(
            "prefix length {} is outside 1..={}",
            hrp.len(),
            MAX_HRP_LEN
        )));
    }
    if let Some(c) = hrp.chars().find(|c| !(33..=126).contains(&u32::from(*c))) {
        return Err(invalid(format!("prefix character {:?} is not printable ASCII", c)));
    }
    let has_lower = hrp.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = hrp.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(invalid("prefix mixes upper and lower case".to_string()));
    }
    Ok(hrp.to_ascii_lowercase())
}

/// Renders `payload` as `hrp + "1" + data + checksum`.
pub fn encode(hrp: &str, payload: &[u8]) -> Result<String, EncodeError> {
    let hrp = check_hrp(hrp)?;
    let data = to_base32(payload);
    tracing::debug!(payload = %hex::encode(payload), groups = ?data, "packed payload into base32 groups");
    let checksum = create_checksum(&hrp, &data);

    let mut out = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    out.push_str(&hrp);
    out.push(SEPARATOR);
    for group in data.iter().chain(checksum.iter()) {
        // Every group is < 32 by construction.
        let symbol = CHARSET.get(usize::from(*group)).copied().unwrap_or(b'q');
        out.push(char::from(symbol));
    }
    Ok(out)
}

/// Parses and verifies an encoded string, returning its lowercase prefix and payload.
pub fn decode(s: &str) -> Result<(String, Vec<u8>), EncodeError> {
    let has_lower = s.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = s.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(EncodeError::MixedCase);
    }
    let lower = s.to_ascii_lowercase();
    let (hrp, data) = lower
        .rsplit_once(SEPARATOR)
        .ok_or(EncodeError::MissingSeparator)?;
    let hrp = check_hrp(hrp)?;
    if data.len() < CHECKSUM_LENGTH {
        return Err(EncodeError::InvalidChecksum);
    }

    let groups = data
        .chars()
        .map(|c| {
            CHARSET
                .iter()
                .position(|&sym| char::from(sym) == c)
                .map(|p| p as u8)
                .ok_or(EncodeError::InvalidCharacter(c))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if !verify_checksum(&hrp, &groups) {
        return Err(EncodeError::InvalidChecksum);
    }
    let payload_groups = groups
        .get(..groups.len() - CHECKSUM_LENGTH)
        .ok_or(EncodeError::InvalidChecksum)?;
    let payload = from_base32(payload_groups)?;
    Ok((hrp, payload))
}

#[cfg(test)]
mod tests;
