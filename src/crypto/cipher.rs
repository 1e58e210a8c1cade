//! Hybrid Encryption (ECIES, AES-256-CBC + HMAC-SHA256)
//!
//! Encrypts a message to a recipient's secp256k1 public key without any
//! prior handshake:
//!
//! 1. Generate a fresh ephemeral secp256k1 keypair.
//! 2. ECDH between the ephemeral secret and the recipient key; the shared
//!    secret is the x-coordinate of the resulting point.
//! 3. SHA-512 the shared secret; the first 32 bytes key AES-256-CBC, the
//!    last 32 bytes key HMAC-SHA256.
//! 4. Encrypt under a random 16-byte IV with PKCS#7 padding, authenticate
//!    `IV || uncompressed ephemeral key || ciphertext`, and hand the four
//!    fields to the envelope codec.
//!
//! Decryption mirrors this and verifies the authentication code in constant
//! time before touching the ciphertext; an attacker never learns whether
//! padding was valid.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use k256::elliptic_curve::sec1::{FromEncodedPoint, ToEncodedPoint};
use k256::{EncodedPoint, SecretKey};
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256, Sha512};

use super::envelope::{self, EncryptedEnvelope, IV_LEN};
use super::error::CryptoError;
use super::keys::PublicKey;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// secp256k1 secret key size in bytes.
pub const SECRET_KEY_LEN: usize = 32;

/// Encrypt `plaintext` for the holder of `recipient`'s private key.
///
/// Returns the encoded wire envelope. Only secp256k1 recipients can be
/// encrypted to; other kinds fail with [`CryptoError::InvalidKeyFormat`].
pub fn encrypt(recipient: &PublicKey, plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let PublicKey::Secp256k1(verifying_key) = recipient else {
        return Err(CryptoError::InvalidKeyFormat {
            reason: format!(
                "cannot encrypt to a '{}' key, recipient must be secp256k1",
                recipient.kind()
            ),
        });
    };
    let recipient_point = k256::PublicKey::from(verifying_key);

    // Fresh ephemeral keypair per message, so every envelope has its own
    // shared secret.
    let ephemeral = SecretKey::random(&mut OsRng);
    let ephemeral_public = ephemeral.public_key().to_encoded_point(false);

    let shared = k256::ecdh::diffie_hellman(
        ephemeral.to_nonzero_scalar(),
        recipient_point.as_affine(),
    );
    let (encryption_key, mac_key) = derive_keys(shared.raw_secret_bytes());

    let mut iv = [0u8; IV_LEN];
    OsRng.fill_bytes(&mut iv);

    let ciphertext = Aes256CbcEnc::new_from_slices(&encryption_key, &iv)
        .map_err(|e| CryptoError::Other(format!("cipher init: {}", e)))?
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mac = authenticator(&mac_key, &iv, ephemeral_public.as_bytes(), &ciphertext)?
        .finalize()
        .into_bytes();

    envelope::encode(&EncryptedEnvelope {
        ciphertext,
        ephemeral_public_key: ephemeral_public.as_bytes().to_vec(),
        initialization_vector: iv.to_vec(),
        message_authentication_code: mac.to_vec(),
    })
}

/// Decrypt a wire envelope with the recipient's 32-byte secp256k1 secret.
///
/// The authentication code is checked in constant time before any
/// decryption; a mismatch is [`CryptoError::AuthenticationFailed`] and bad
/// padding after a valid MAC is [`CryptoError::DecryptionFailed`]. Both are
/// terminal, never retried.
pub fn decrypt(recipient_secret: &[u8], buffer: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let envelope = envelope::decode(buffer)?;

    if recipient_secret.len() != SECRET_KEY_LEN {
        return Err(CryptoError::InvalidKeyLength {
            expected: SECRET_KEY_LEN,
            actual: recipient_secret.len(),
        });
    }
    let secret = SecretKey::from_slice(recipient_secret).map_err(|e| {
        CryptoError::InvalidKeyFormat {
            reason: format!("not a valid secp256k1 secret scalar: {}", e),
        }
    })?;

    // Decoding already proved the point is on the curve; this re-parse just
    // moves it into curve arithmetic form.
    let encoded = EncodedPoint::from_bytes(&envelope.ephemeral_public_key)
        .map_err(|_| CryptoError::InvalidPoint)?;
    let ephemeral_public = Option::<k256::PublicKey>::from(k256::PublicKey::from_encoded_point(
        &encoded,
    ))
    .ok_or(CryptoError::InvalidPoint)?;

    let shared =
        k256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), ephemeral_public.as_affine());
    let (encryption_key, mac_key) = derive_keys(shared.raw_secret_bytes());

    // MAC first, in constant time. Nothing about the plaintext exists until
    // this passes.
    authenticator(
        &mac_key,
        &envelope.initialization_vector,
        &envelope.ephemeral_public_key,
        &envelope.ciphertext,
    )?
    .verify_slice(&envelope.message_authentication_code)
    .map_err(|_| CryptoError::AuthenticationFailed)?;

    Aes256CbcDec::new_from_slices(&encryption_key, &envelope.initialization_vector)
        .map_err(|e| CryptoError::Other(format!("cipher init: {}", e)))?
        .decrypt_padded_vec_mut::<Pkcs7>(&envelope.ciphertext)
        .map_err(|_| CryptoError::DecryptionFailed)
}

/// Split SHA-512 of the ECDH shared secret into cipher and MAC keys.
fn derive_keys(shared_secret: &[u8]) -> ([u8; 32], [u8; 32]) {
    let digest = Sha512::digest(shared_secret);
    let mut encryption_key = [0u8; 32];
    let mut mac_key = [0u8; 32];
    encryption_key.copy_from_slice(&digest[..32]);
    mac_key.copy_from_slice(&digest[32..]);
    (encryption_key, mac_key)
}

/// HMAC over the authenticated portion of the envelope.
fn authenticator(
    mac_key: &[u8; 32],
    iv: &[u8],
    ephemeral_key: &[u8],
    ciphertext: &[u8],
) -> Result<HmacSha256, CryptoError> {
    let mut mac = HmacSha256::new_from_slice(mac_key)
        .map_err(|e| CryptoError::Other(format!("mac init: {}", e)))?;
    mac.update(iv);
    mac.update(ephemeral_key);
    mac.update(ciphertext);
    Ok(mac)
}
