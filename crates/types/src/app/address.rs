// Path: crates/types/src/app/address.rs

//! Defines the on-chain `Address` union and its checksummed text form.
//!
//! Established and implicit addresses are rendered by prefixing their 20-byte
//! hash with a one-byte discriminant and encoding the resulting 21 bytes with
//! bech32m. Internal addresses have no byte layout of their own and are shown
//! by variant name only.

use crate::codec::{BinaryDecode, BinaryEncode, Reader, Writer};
use crate::error::{DecodeError, EncodeError};
use crate::string_encoding;
use crate::{ADDR_ENCODING_LEN, HASH_LEN};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 20-byte address hash.
pub type Hash20 = [u8; HASH_LEN];

/// Leading payload byte of an encoded established address.
pub const ESTABLISHED_DISCRIMINANT: u8 = 0x00;
/// Leading payload byte of an encoded implicit address.
///
/// Identical to [`ESTABLISHED_DISCRIMINANT`]; the two variants cannot be told
/// apart from their text form.
pub const IMPLICIT_DISCRIMINANT: u8 = 0x00;

/// A protocol-owned address, identified by which subsystem it belongs to.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InternalAddress {
    /// Implicit-account virtual address.
    Implicit,
    /// Established-account virtual address.
    Established,
    /// Proof-of-stake.
    Pos,
    /// Slashed funds pool.
    SlashPool,
    /// Protocol parameters.
    Parameters,
    /// Governance.
    Governance,
    /// IBC.
    Ibc,
    /// Ethereum bridge.
    EthBridge,
    /// Ethereum bridge pool.
    BridgePool,
    /// Multi-token balances.
    Multitoken,
    /// Public goods funding.
    Pgf,
    /// A bridged ERC20 token, keyed by its Ethereum address.
    Erc20(Hash20),
    /// A non-usable token, keyed by its Ethereum address.
    Nut(Hash20),
    /// An IBC token, keyed by its denomination hash.
    IbcToken(Hash20),
    /// The shielded pool.
    Masp,
    /// Temporary storage.
    TempStorage,
    /// Replay protection.
    ReplayProtection,
}

impl InternalAddress {
    /// The number of declared variants.
    pub const VARIANT_COUNT: u8 = 17;

    /// The 0-based declaration index, used as the wire discriminant.
    pub fn discriminant(&self) -> u8 {
        match self {
            Self::Implicit => 0,
            Self::Established => 1,
            Self::Pos => 2,
            Self::SlashPool => 3,
            Self::Parameters => 4,
            Self::Governance => 5,
            Self::Ibc => 6,
            Self::EthBridge => 7,
            Self::BridgePool => 8,
            Self::Multitoken => 9,
            Self::Pgf => 10,
            Self::Erc20(_) => 11,
            Self::Nut(_) => 12,
            Self::IbcToken(_) => 13,
            Self::Masp => 14,
            Self::TempStorage => 15,
            Self::ReplayProtection => 16,
        }
    }

    /// The variant name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Implicit => "Implicit",
            Self::Established => "Established",
            Self::Pos => "Pos",
            Self::SlashPool => "SlashPool",
            Self::Parameters => "Parameters",
            Self::Governance => "Governance",
            Self::Ibc => "Ibc",
            Self::EthBridge => "EthBridge",
            Self::BridgePool => "BridgePool",
            Self::Multitoken => "Multitoken",
            Self::Pgf => "Pgf",
            Self::Erc20(_) => "Erc20",
            Self::Nut(_) => "Nut",
            Self::IbcToken(_) => "IbcToken",
            Self::Masp => "Masp",
            Self::TempStorage => "TempStorage",
            Self::ReplayProtection => "ReplayProtection",
        }
    }
}

impl fmt::Display for InternalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl BinaryDecode for InternalAddress {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let addr = match reader.read_tag()? {
            (_, 0) => Self::Implicit,
            (_, 1) => Self::Established,
            (_, 2) => Self::Pos,
            (_, 3) => Self::SlashPool,
            (_, 4) => Self::Parameters,
            (_, 5) => Self::Governance,
            (_, 6) => Self::Ibc,
            (_, 7) => Self::EthBridge,
            (_, 8) => Self::BridgePool,
            (_, 9) => Self::Multitoken,
            (_, 10) => Self::Pgf,
            (_, 11) => Self::Erc20(reader.read_array()?),
            (_, 12) => Self::Nut(reader.read_array()?),
            (_, 13) => Self::IbcToken(reader.read_array()?),
            (_, 14) => Self::Masp,
            (_, 15) => Self::TempStorage,
            (_, 16) => Self::ReplayProtection,
            (offset, found) => {
                return Err(DecodeError::invalid_discriminant(
                    "InternalAddress",
                    found,
                    Self::VARIANT_COUNT,
                    offset,
                ))
            }
        };
        Ok(addr)
    }
}

impl BinaryEncode for InternalAddress {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        writer.write_u8(self.discriminant());
        match self {
            Self::Erc20(hash) | Self::Nut(hash) | Self::IbcToken(hash) => writer.write_bytes(hash),
            _ => {}
        }
        Ok(())
    }
}

/// An account address.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    /// A protocol-owned address.
    Internal(InternalAddress),
    /// An address created by an account-initialisation transaction.
    Established(Hash20),
    /// An address derived from a public key hash.
    Implicit(Hash20),
}

impl Address {
    /// The number of declared variants.
    pub const VARIANT_COUNT: u8 = 3;

    /// The 21-byte payload fed to the text encoder, or `None` for internal addresses.
    pub fn to_raw_bytes(&self) -> Option<[u8; ADDR_ENCODING_LEN]> {
        match self {
            Self::Internal(_) => None,
            Self::Established(hash) => Some(raw_bytes(ESTABLISHED_DISCRIMINANT, hash)),
            Self::Implicit(hash) => Some(raw_bytes(IMPLICIT_DISCRIMINANT, hash)),
        }
    }

    /// Renders the address for display under the given human-readable prefix.
    ///
    /// Internal addresses render as `Internal(<Variant>)`.
    pub fn to_text(&self, hrp: &str) -> Result<String, EncodeError> {
        match self {
            Self::Internal(internal) => Ok(format!("Internal({})", internal.name())),
            Self::Established(hash) => {
                string_encoding::encode(hrp, &raw_bytes(ESTABLISHED_DISCRIMINANT, hash))
            }
            Self::Implicit(hash) => {
                string_encoding::encode(hrp, &raw_bytes(IMPLICIT_DISCRIMINANT, hash))
            }
        }
    }

    /// Parses a bech32m address text produced by [`Address::to_text`].
    ///
    /// Established and implicit addresses share a discriminant byte, so a
    /// parsed address is always reported as [`Address::Established`].
    pub fn from_text(text: &str, hrp: &str) -> Result<Self, EncodeError> {
        let (found_hrp, payload) = string_encoding::decode(text)?;
        if !found_hrp.eq_ignore_ascii_case(hrp) {
            return Err(EncodeError::InvalidAddress(format!(
                "expected prefix {:?}, found {:?}",
                hrp, found_hrp
            )));
        }
        let raw: [u8; ADDR_ENCODING_LEN] = payload.as_slice().try_into().map_err(|_| {
            EncodeError::InvalidAddress(format!(
                "expected {} payload bytes, found {}",
                ADDR_ENCODING_LEN,
                payload.len()
            ))
        })?;
        let [discriminant, hash @ ..] = raw;
        if discriminant != ESTABLISHED_DISCRIMINANT {
            return Err(EncodeError::InvalidAddress(format!(
                "unknown address discriminant {:#04x}",
                discriminant
            )));
        }
        Ok(Self::Established(hash))
    }
}

fn raw_bytes(discriminant: u8, hash: &Hash20) -> [u8; ADDR_ENCODING_LEN] {
    let mut raw = [discriminant; ADDR_ENCODING_LEN];
    raw.iter_mut()
        .skip(1)
        .zip(hash)
        .for_each(|(dst, src)| *dst = *src);
    raw
}

impl BinaryDecode for Address {
    fn decode(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        match reader.read_tag()? {
            (_, 0) => InternalAddress::decode(reader).map(Self::Internal),
            (_, 1) => Ok(Self::Established(reader.read_array()?)),
            (_, 2) => Ok(Self::Implicit(reader.read_array()?)),
            (offset, found) => Err(DecodeError::invalid_discriminant(
                "Address",
                found,
                Self::VARIANT_COUNT,
                offset,
            )),
        }
    }
}

impl BinaryEncode for Address {
    fn encode_to(&self, writer: &mut Writer) -> Result<(), String> {
        match self {
            Self::Internal(internal) => {
                writer.write_u8(0);
                internal.encode_to(writer)
            }
            Self::Established(hash) => {
                writer.write_u8(1);
                writer.write_bytes(hash);
                Ok(())
            }
            Self::Implicit(hash) => {
                writer.write_u8(2);
                writer.write_bytes(hash);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{from_bytes, to_bytes};
    use crate::error::DecodeErrorKind;
    use crate::string_encoding::ADDRESS_HRP;

    #[test]
    fn test_established_address_text() {
        let addr = Address::Established([0x11; 20]);
        assert_eq!(
            addr.to_text(ADDRESS_HRP).unwrap(),
            "tnam1qqg3zyg3zyg3zyg3zyg3zyg3zyg3zyg3zyznre5j"
        );
    }

    #[test]
    fn test_implicit_and_established_share_text_form() {
        let hash = [0x42; 20];
        assert_eq!(
            Address::Implicit(hash).to_text(ADDRESS_HRP).unwrap(),
            Address::Established(hash).to_text(ADDRESS_HRP).unwrap()
        );
        let raw = Address::Implicit(hash).to_raw_bytes().unwrap();
        assert_eq!(raw[0], 0x00);
        assert_eq!(&raw[1..], &hash);
    }

    #[test]
    fn test_internal_address_renders_name_only() {
        let addr = Address::Internal(InternalAddress::Governance);
        assert_eq!(addr.to_raw_bytes(), None);
        assert_eq!(addr.to_text(ADDRESS_HRP).unwrap(), "Internal(Governance)");
        assert_eq!(
            Address::Internal(InternalAddress::Erc20([9; 20]))
                .to_text(ADDRESS_HRP)
                .unwrap(),
            "Internal(Erc20)"
        );
    }

    #[test]
    fn test_address_text_roundtrip() {
        let addr = Address::Established([0xa5; 20]);
        let text = addr.to_text(ADDRESS_HRP).unwrap();
        assert_eq!(Address::from_text(&text, ADDRESS_HRP).unwrap(), addr);
        assert!(matches!(
            Address::from_text(&text, "atest"),
            Err(EncodeError::InvalidAddress(_))
        ));
        let short = string_encoding::encode(ADDRESS_HRP, &[0u8; 20]).unwrap();
        assert!(matches!(
            Address::from_text(&short, ADDRESS_HRP),
            Err(EncodeError::InvalidAddress(_))
        ));
    }

    #[test]
    fn test_internal_address_wire_format() {
        let addr = Address::Internal(InternalAddress::IbcToken([7; 20]));
        let bytes = to_bytes(&addr).unwrap();
        assert_eq!(bytes.len(), 22);
        assert_eq!(&bytes[..2], &[0, 13]);
        assert_eq!(from_bytes::<Address>(&bytes).unwrap(), addr);

        let bytes = to_bytes(&Address::Internal(InternalAddress::ReplayProtection)).unwrap();
        assert_eq!(bytes, vec![0, 16]);
    }

    #[test]
    fn test_out_of_range_discriminants() {
        let err = from_bytes::<Address>(&[3]).unwrap_err();
        assert_eq!(
            err.kind,
            DecodeErrorKind::InvalidDiscriminant {
                type_name: "Address",
                found: 3,
                variant_count: 3
            }
        );

        let err = from_bytes::<Address>(&[0, 17]).unwrap_err();
        assert_eq!(err.offset, 1);
        assert!(matches!(
            err.kind,
            DecodeErrorKind::InvalidDiscriminant {
                type_name: "InternalAddress",
                found: 17,
                ..
            }
        ));
    }
}
