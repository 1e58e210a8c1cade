// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Hybrid-Encryption Envelope Codec
//!
//! Flattens the four fields produced by one hybrid encryption operation into
//! a single wire buffer and back:
//!
//! ```text
//! [marker (1) | IV (16) | compressed ephemeral key (33) | MAC (32) | ciphertext]
//! ```
//!
//! The ephemeral key is held in memory in its 65-byte uncompressed form and
//! shrunk to 33 bytes on the wire through point compression. Both directions
//! validate every fixed-size field; decoding a buffer with an unknown marker
//! byte is rejected rather than guessed at.

use super::error::CryptoError;
use super::point::{self, COMPRESSED_KEY_LEN, UNCOMPRESSED_KEY_LEN};

/// Wire-format marker byte identifying this envelope scheme.
pub const ENVELOPE_MARKER: u8 = 0x2e;

/// Initialization vector size in bytes.
pub const IV_LEN: usize = 16;

/// Authentication code size in bytes (HMAC-SHA256 output).
pub const MAC_LEN: usize = 32;

/// Smallest decodable buffer: marker + IV + compressed key + MAC.
pub const MIN_ENCODED_LEN: usize = 1 + IV_LEN + COMPRESSED_KEY_LEN + MAC_LEN;

/// Everything needed to decrypt one message given the recipient's private
/// key. Produced once per encryption operation and consumed once per
/// decryption; immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedEnvelope {
    /// Symmetric ciphertext, length a multiple of the cipher block size.
    pub ciphertext: Vec<u8>,
    /// One-time public key in 65-byte uncompressed form.
    pub ephemeral_public_key: Vec<u8>,
    /// 16-byte CBC initialization vector.
    pub initialization_vector: Vec<u8>,
    /// 32-byte HMAC over IV, ephemeral key, and ciphertext.
    pub message_authentication_code: Vec<u8>,
}

/// Serialize an envelope into its wire form.
///
/// Fails with [`CryptoError::EncodeError`] if any fixed-size field is
/// mis-sized; malformed input is rejected, never truncated or padded.
pub fn encode(envelope: &EncryptedEnvelope) -> Result<Vec<u8>, CryptoError> {
    if envelope.initialization_vector.len() != IV_LEN {
        return Err(CryptoError::EncodeError {
            field: "initialization_vector".to_string(),
            reason: format!(
                "expected {} bytes, got {}",
                IV_LEN,
                envelope.initialization_vector.len()
            ),
        });
    }

    if envelope.message_authentication_code.len() != MAC_LEN {
        return Err(CryptoError::EncodeError {
            field: "message_authentication_code".to_string(),
            reason: format!(
                "expected {} bytes, got {}",
                MAC_LEN,
                envelope.message_authentication_code.len()
            ),
        });
    }

    let compressed_key = point::compress(&envelope.ephemeral_public_key).map_err(|e| {
        CryptoError::EncodeError {
            field: "ephemeral_public_key".to_string(),
            reason: e.to_string(),
        }
    })?;

    let mut out = Vec::with_capacity(MIN_ENCODED_LEN + envelope.ciphertext.len());
    out.push(ENVELOPE_MARKER);
    out.extend_from_slice(&envelope.initialization_vector);
    out.extend_from_slice(&compressed_key);
    out.extend_from_slice(&envelope.message_authentication_code);
    out.extend_from_slice(&envelope.ciphertext);
    Ok(out)
}

/// Parse a wire buffer back into an envelope, decompressing the embedded
/// ephemeral key to its 65-byte form.
pub fn decode(buffer: &[u8]) -> Result<EncryptedEnvelope, CryptoError> {
    if buffer.len() < MIN_ENCODED_LEN {
        return Err(CryptoError::DecodeError {
            reason: format!(
                "buffer too short: need at least {} bytes, got {}",
                MIN_ENCODED_LEN,
                buffer.len()
            ),
        });
    }

    if buffer[0] != ENVELOPE_MARKER {
        return Err(CryptoError::DecodeError {
            reason: format!(
                "unknown envelope marker 0x{:02x}, expected 0x{:02x}",
                buffer[0], ENVELOPE_MARKER
            ),
        });
    }

    let iv_end = 1 + IV_LEN;
    let key_end = iv_end + COMPRESSED_KEY_LEN;
    let mac_end = key_end + MAC_LEN;

    let ephemeral_public_key =
        point::decompress(&buffer[iv_end..key_end]).map_err(|e| CryptoError::DecodeError {
            reason: format!("ephemeral key: {}", e),
        })?;
    debug_assert_eq!(ephemeral_public_key.len(), UNCOMPRESSED_KEY_LEN);

    Ok(EncryptedEnvelope {
        ciphertext: buffer[mac_end..].to_vec(),
        ephemeral_public_key: ephemeral_public_key.to_vec(),
        initialization_vector: buffer[1..iv_end].to_vec(),
        message_authentication_code: buffer[key_end..mac_end].to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn must_hex(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    // Recorded wire captures with known field values.
    fn envelope_a() -> EncryptedEnvelope {
        EncryptedEnvelope {
            ciphertext: must_hex("a6537a3781ed4927228bd7d80d1d6f07"),
            ephemeral_public_key: must_hex("049dce5444ad23a68a76dd1821b9b2b3a9c6e53d464420e2363a80df94cc7b05f5c0896985fc8156846a42d1b922f253e1e2537b9279cafe44bce66552cbc58c04"),
            initialization_vector: must_hex("b3d72325f94ed8b9e1b7f28e2fb26492"),
            message_authentication_code: must_hex("8412f3436593821021308c64d4d18482d224e79b9cb2b14b177214f3b023ebe6"),
        }
    }

    const WIRE_A: &str = "2eb3d72325f94ed8b9e1b7f28e2fb26492029dce5444ad23a68a76dd1821b9b2b3a9c6e53d464420e2363a80df94cc7b05f58412f3436593821021308c64d4d18482d224e79b9cb2b14b177214f3b023ebe6a6537a3781ed4927228bd7d80d1d6f07";

    fn envelope_b() -> EncryptedEnvelope {
        EncryptedEnvelope {
            ciphertext: must_hex("9110ac2e87fcbe9c73faf41183d23a27"),
            ephemeral_public_key: must_hex("0487a2cd646044a0f9639aa3b50aa26b170f21fbedd20e079ab890d3a9c880dea4cbdaab93155fa43441dca3e7e94dc2ff67882ec4908e82b0496821cffb4d7cc8"),
            initialization_vector: must_hex("f8307114bb283da496056a8502376cdf"),
            message_authentication_code: must_hex("58b3398eccbfeaaa08b350c6226e984a7e70a04f8a97c07f0f5a8e9a36394cf1"),
        }
    }

    const WIRE_B: &str = "2ef8307114bb283da496056a8502376cdf0287a2cd646044a0f9639aa3b50aa26b170f21fbedd20e079ab890d3a9c880dea458b3398eccbfeaaa08b350c6226e984a7e70a04f8a97c07f0f5a8e9a36394cf19110ac2e87fcbe9c73faf41183d23a27";

    #[test]
    fn test_encode_known_vectors() {
        assert_eq!(hex::encode(encode(&envelope_a()).unwrap()), WIRE_A);
        assert_eq!(hex::encode(encode(&envelope_b()).unwrap()), WIRE_B);
    }

    #[test]
    fn test_decode_known_vectors() {
        assert_eq!(decode(&must_hex(WIRE_A)).unwrap(), envelope_a());
        assert_eq!(decode(&must_hex(WIRE_B)).unwrap(), envelope_b());
    }

    #[test]
    fn test_round_trip_from_wire() {
        for wire in [WIRE_A, WIRE_B] {
            let wire = must_hex(wire);
            let decoded = decode(&wire).unwrap();
            assert_eq!(encode(&decoded).unwrap(), wire);
        }
    }

    #[test]
    fn test_round_trip_from_envelope() {
        // Round-trip must hold for any ciphertext length, including empty.
        for ciphertext_len in [0usize, 1, 16, 31, 1024] {
            let mut envelope = envelope_a();
            envelope.ciphertext = vec![0xabu8; ciphertext_len];
            let decoded = decode(&encode(&envelope).unwrap()).unwrap();
            assert_eq!(decoded, envelope);
        }
    }

    #[test]
    fn test_encoded_length() {
        let envelope = envelope_a();
        let wire = encode(&envelope).unwrap();
        assert_eq!(wire.len(), MIN_ENCODED_LEN + envelope.ciphertext.len());
        assert_eq!(wire[0], ENVELOPE_MARKER);
    }

    #[test]
    fn test_encode_rejects_bad_iv() {
        let mut envelope = envelope_a();
        envelope.initialization_vector.truncate(15);
        assert!(matches!(
            encode(&envelope),
            Err(CryptoError::EncodeError { field, .. }) if field == "initialization_vector"
        ));
    }

    #[test]
    fn test_encode_rejects_bad_mac() {
        let mut envelope = envelope_a();
        envelope.message_authentication_code.push(0x00);
        assert!(matches!(
            encode(&envelope),
            Err(CryptoError::EncodeError { field, .. }) if field == "message_authentication_code"
        ));
    }

    #[test]
    fn test_encode_rejects_bad_ephemeral_key() {
        let mut envelope = envelope_a();
        envelope.ephemeral_public_key.truncate(64);
        assert!(matches!(
            encode(&envelope),
            Err(CryptoError::EncodeError { field, .. }) if field == "ephemeral_public_key"
        ));
    }

    #[test]
    fn test_decode_rejects_short_buffer() {
        let wire = must_hex(WIRE_A);
        assert!(matches!(
            decode(&wire[..MIN_ENCODED_LEN - 1]),
            Err(CryptoError::DecodeError { .. })
        ));
        assert!(matches!(
            decode(&[]),
            Err(CryptoError::DecodeError { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_unknown_marker() {
        let mut wire = must_hex(WIRE_A);
        wire[0] = 0x2f;
        assert!(matches!(
            decode(&wire),
            Err(CryptoError::DecodeError { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_off_curve_ephemeral_key() {
        let mut wire = must_hex(WIRE_A);
        // Zero the embedded x-coordinate; x = 0 is not on the curve.
        for byte in wire.iter_mut().take(1 + IV_LEN + COMPRESSED_KEY_LEN).skip(1 + IV_LEN + 1) {
            *byte = 0;
        }
        assert!(matches!(
            decode(&wire),
            Err(CryptoError::DecodeError { .. })
        ));
    }
}
