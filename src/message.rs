//! Signed message hashing and verification.
//!
//! Messages are hashed with SHA-256 and signed with secp256k1 recoverable
//! signatures. A recoverable signature is 65 bytes: `r` (32), `s` (32) and a
//! one byte recovery id, with the recovery id either leading
//! ([`SignatureMode::Vrs`]) or trailing ([`SignatureMode::Rsv`]).
//!
//! ```rust
//! use stacks_devkit::message::{hash_message, verify_signed_message, SignatureMode};
//!
//! let hash = hash_message("Hello, Stacks!");
//! // Not a 65-byte signature: rejected loudly instead of returning `false`.
//! assert!(verify_signed_message(&hash, "0xdead", SignatureMode::Vrs).is_err());
//! ```

use crate::utils::{sha256, strip_hex_prefix};
use rustc_hex::{FromHex, ToHex};
use secp256k1::ecdsa::{self, RecoveryId};
use secp256k1::{Message, PublicKey, Secp256k1, VerifyOnly};
use std::{fmt, ops::Deref, result::Result, str::FromStr};

/// Failures caused by malformed verification input.
///
/// A signature that is well-formed but does not match is not an error:
/// verification functions report it as `Ok(false)`.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum CryptoError {
    /// Message hash is not a 32-byte digest.
    #[error("message hash must be 32 bytes long, got {0}")]
    InvalidHashLength(usize),
    /// Signature string is not valid hex.
    #[error("signature is not a valid hex string")]
    InvalidHex,
    /// Decoded signature is not 65 bytes long.
    #[error("recoverable signature must be 65 bytes long, got {0}")]
    InvalidSignatureLength(usize),
    /// Recovery id is outside of `0..=3`.
    #[error("recovery id must be in range 0..=3, got {0}")]
    InvalidRecoveryId(u8),
    /// `r` or `s` cannot form a compact signature (e.g. overflow the curve order).
    #[error("malformed signature: {0}")]
    MalformedSignature(secp256k1::Error),
    /// Unknown signature byte ordering name.
    #[error("unknown signature mode: {0}")]
    UnknownMode(String),
}

/// Position of the recovery id in a serialized recoverable signature.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SignatureMode {
    /// Recovery id first, then `r` and `s`.
    #[default]
    Vrs,
    /// `r` and `s` first, recovery id last.
    Rsv,
}

impl fmt::Display for SignatureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vrs => f.write_str("vrs"),
            Self::Rsv => f.write_str("rsv"),
        }
    }
}

impl FromStr for SignatureMode {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vrs" => Ok(Self::Vrs),
            "rsv" => Ok(Self::Rsv),
            other => Err(CryptoError::UnknownMode(other.to_string())),
        }
    }
}

/// Parsed recoverable signature.
///
/// Construction validates the encoding, so every value of this type
/// holds a recovery id in `0..=3` and in-range `r`, `s` scalars.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RecoverableSignature(ecdsa::RecoverableSignature);

impl Deref for RecoverableSignature {
    type Target = ecdsa::RecoverableSignature;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<ecdsa::RecoverableSignature> for RecoverableSignature {
    fn from(signature: ecdsa::RecoverableSignature) -> Self {
        Self(signature)
    }
}

impl RecoverableSignature {
    /// Length of serialized signature in bytes.
    pub const LENGTH: usize = 65;

    pub fn parse(signature: &str, mode: SignatureMode) -> Result<Self, CryptoError> {
        //! Parse a hex-encoded (optionally `0x`-prefixed) signature.
        let bytes: Vec<u8> = strip_hex_prefix(signature)
            .from_hex()
            .map_err(|_| CryptoError::InvalidHex)?;
        Self::from_bytes(&bytes, mode)
    }

    pub fn from_bytes(bytes: &[u8], mode: SignatureMode) -> Result<Self, CryptoError> {
        //! Parse a raw 65-byte signature in the given byte ordering.
        if bytes.len() != Self::LENGTH {
            return Err(CryptoError::InvalidSignatureLength(bytes.len()));
        }
        let (recovery_byte, compact) = match mode {
            SignatureMode::Vrs => (bytes[0], &bytes[1..]),
            SignatureMode::Rsv => (bytes[64], &bytes[..64]),
        };
        if recovery_byte > 3 {
            return Err(CryptoError::InvalidRecoveryId(recovery_byte));
        }
        let recovery_id = RecoveryId::from_i32(i32::from(recovery_byte))
            .map_err(|_| CryptoError::InvalidRecoveryId(recovery_byte))?;
        ecdsa::RecoverableSignature::from_compact(compact, recovery_id)
            .map(Self)
            .map_err(CryptoError::MalformedSignature)
    }

    pub fn recovery_id(&self) -> u8 {
        //! Recovery id (`0..=3`).
        let (recovery_id, _) = self.0.serialize_compact();
        // Always in 0..=3.
        recovery_id.to_i32() as u8
    }

    pub fn to_bytes(&self, mode: SignatureMode) -> [u8; 65] {
        //! Serialize to 65 bytes in the given byte ordering.
        let (recovery_id, compact) = self.0.serialize_compact();
        let mut out = [0u8; Self::LENGTH];
        match mode {
            SignatureMode::Vrs => {
                out[0] = recovery_id.to_i32() as u8;
                out[1..].copy_from_slice(&compact);
            }
            SignatureMode::Rsv => {
                out[..64].copy_from_slice(&compact);
                out[64] = recovery_id.to_i32() as u8;
            }
        }
        out
    }

    pub fn to_hex(&self, mode: SignatureMode) -> String {
        //! Serialize to a lowercase hex string without prefix.
        self.to_bytes(mode).to_hex()
    }
}

pub fn hash_message(message: &str) -> [u8; 32] {
    //! SHA-256 digest of UTF-8 encoded message.
    sha256(&[message])
}

pub fn hash_message_hex(message: &str) -> String {
    //! Hex form of [`hash_message`].
    hash_message(message).to_hex()
}

fn message_from_hash(hash: &[u8]) -> Result<Message, CryptoError> {
    if hash.len() != 32 {
        return Err(CryptoError::InvalidHashLength(hash.len()));
    }
    Message::from_slice(hash).map_err(|_| CryptoError::InvalidHashLength(hash.len()))
}

fn recover(
    secp: &Secp256k1<VerifyOnly>,
    message: &Message,
    signature: &RecoverableSignature,
) -> Option<PublicKey> {
    secp.recover_ecdsa(message, &signature.0).ok()
}

pub fn recover_public_key(
    hash: &[u8],
    signature: &str,
    mode: SignatureMode,
) -> Result<Option<PublicKey>, CryptoError> {
    //! Recover the signer's public key.
    //!
    //! Returns [`None`] when no public key is consistent with the
    //! signature and hash.
    let message = message_from_hash(hash)?;
    let signature = RecoverableSignature::parse(signature, mode)?;
    Ok(recover(&Secp256k1::verification_only(), &message, &signature))
}

pub fn verify_signed_message(
    hash: &[u8],
    signature: &str,
    mode: SignatureMode,
) -> Result<bool, CryptoError> {
    //! Verify a signature against the public key recovered from itself.
    //!
    //! This proves that *some* key signed `hash`, not which one: recovery
    //! only yields keys the signature is valid for, so a signature made by
    //! any key passes. Use [`verify_signed_message_with_key`] to
    //! authenticate a known signer.
    //!
    //! Returns an error for malformed input (hash length, hex, signature
    //! length, recovery id, out-of-range scalars) and `Ok(false)` when the
    //! signature does not verify.
    let message = message_from_hash(hash)?;
    let signature = RecoverableSignature::parse(signature, mode)?;
    let secp = Secp256k1::verification_only();
    let Some(public_key) = recover(&secp, &message, &signature) else {
        return Ok(false);
    };
    Ok(secp
        .verify_ecdsa(&message, &signature.to_standard(), &public_key)
        .is_ok())
}

pub fn verify_signed_message_with_key(
    hash: &[u8],
    signature: &str,
    mode: SignatureMode,
    expected: &PublicKey,
) -> Result<bool, CryptoError> {
    //! Verify that `expected` produced the signature over `hash`.
    //!
    //! Same error semantics as [`verify_signed_message`].
    let message = message_from_hash(hash)?;
    let signature = RecoverableSignature::parse(signature, mode)?;
    let secp = Secp256k1::verification_only();
    match recover(&secp, &message, &signature) {
        Some(public_key) if &public_key == expected => Ok(secp
            .verify_ecdsa(&message, &signature.to_standard(), expected)
            .is_ok()),
        _ => Ok(false),
    }
}
