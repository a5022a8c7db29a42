//! Session token codec
//!
//! A token is `base64(tag):base64(iv):base64(ciphertext)`. The plaintext is the
//! JSON form of a [`GameState`] tagged with a schema version, encrypted with
//! AES-256-CBC under a fresh random IV. The tag is HMAC-SHA256 over the encoded
//! `iv:ciphertext` text and is checked before anything is decrypted.

use super::key::SessionKey;
use super::state::GameState;
use crate::error::{KeyError, TokenError};
use aes::Aes256;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::{Hmac, Mac};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::Sha256;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;
type HmacSha256 = Hmac<Sha256>;

/// Version written into every plaintext; tokens with any other version are rejected
pub const SCHEMA_VERSION: u8 = 1;

/// Separates the three token fields; never produced by base64
pub const DELIMITER: char = ':';

const IV_LEN: usize = 16;

#[derive(Serialize)]
struct SealedState<'a> {
    v: u8,
    #[serde(flatten)]
    state: &'a GameState,
}

#[derive(Deserialize)]
struct OpenedState {
    v: u8,
    #[serde(flatten)]
    state: GameState,
}

/// Encrypts and authenticates game states for the client to hold
#[derive(Clone)]
pub struct SessionCodec {
    cipher_key: [u8; 32],
    mac: HmacSha256,
}

impl SessionCodec {
    /// Build a codec around the server key
    ///
    /// # Errors
    /// Returns `KeyError::MacKey` if HMAC-SHA256 refuses the MAC half of the key.
    pub fn new(key: &SessionKey) -> Result<Self, KeyError> {
        let mac = <HmacSha256 as Mac>::new_from_slice(key.mac_key())
            .map_err(|_| KeyError::MacKey)?;

        Ok(Self {
            cipher_key: key.cipher_key(),
            mac,
        })
    }

    /// HMAC-SHA256 tag over `payload`
    #[must_use]
    pub fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let mut mac = self.mac.clone();
        mac.update(payload);
        mac.finalize().into_bytes().to_vec()
    }

    /// Seal `state` into a token
    ///
    /// Every call draws a fresh IV, so encrypting the same state twice gives
    /// two different tokens.
    ///
    /// # Errors
    /// Returns an error if the state cannot be serialized.
    pub fn encrypt(&self, state: &GameState) -> serde_json::Result<String> {
        let plaintext = serde_json::to_vec(&SealedState {
            v: SCHEMA_VERSION,
            state,
        })?;

        let mut iv = [0u8; IV_LEN];
        rand::rng().fill(&mut iv);

        let ciphertext = Aes256CbcEnc::new(&self.cipher_key.into(), &iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(&plaintext);

        let sealed = format!(
            "{}{DELIMITER}{}",
            STANDARD.encode(iv),
            STANDARD.encode(ciphertext)
        );
        let tag = self.sign(sealed.as_bytes());

        Ok(format!("{}{DELIMITER}{sealed}", STANDARD.encode(tag)))
    }

    /// Open a token produced by [`SessionCodec::encrypt`]
    ///
    /// The tag is verified in constant time before the ciphertext is touched.
    /// Nothing partially decoded is ever returned.
    ///
    /// # Errors
    /// `TokenError::Forged` if the tag does not match, `TokenError::Malformed`
    /// for anything else wrong with the token or its contents.
    pub fn decrypt(&self, token: &str) -> Result<GameState, TokenError> {
        let (tag, sealed) = token.split_once(DELIMITER).ok_or(TokenError::Malformed)?;
        let (iv, ciphertext) = sealed.split_once(DELIMITER).ok_or(TokenError::Malformed)?;
        if ciphertext.contains(DELIMITER) {
            return Err(TokenError::Malformed);
        }

        let tag = STANDARD.decode(tag).map_err(|_| TokenError::Malformed)?;
        let mut mac = self.mac.clone();
        mac.update(sealed.as_bytes());
        mac.verify_slice(&tag).map_err(|_| TokenError::Forged)?;

        let iv: [u8; IV_LEN] = STANDARD
            .decode(iv)
            .ok()
            .and_then(|bytes| bytes.try_into().ok())
            .ok_or(TokenError::Malformed)?;
        let ciphertext = STANDARD
            .decode(ciphertext)
            .map_err(|_| TokenError::Malformed)?;

        let plaintext = Aes256CbcDec::new(&self.cipher_key.into(), &iv.into())
            .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
            .map_err(|_| TokenError::Malformed)?;

        let opened: OpenedState =
            serde_json::from_slice(&plaintext).map_err(|_| TokenError::Malformed)?;

        if opened.v != SCHEMA_VERSION || !opened.state.is_consistent() {
            return Err(TokenError::Malformed);
        }

        Ok(opened.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::session::KEY_LEN;

    fn codec() -> SessionCodec {
        SessionCodec::new(&SessionKey::from_bytes(&[42u8; KEY_LEN]).unwrap()).unwrap()
    }

    #[test]
    fn mac_key_error_names_the_mac_half() {
        let message = KeyError::MacKey.to_string();
        assert!(message.contains("MAC"));
        assert!(!message.contains(&KEY_LEN.to_string()));
    }

    #[test]
    fn any_full_length_key_builds_a_codec() {
        for fill in [0u8, 1, 0x80, 0xff] {
            let key = SessionKey::from_bytes(&[fill; KEY_LEN]).unwrap();
            assert!(SessionCodec::new(&key).is_ok());
        }
    }

    fn sample_state() -> GameState {
        let mut state = GameState::new(12, Word::new("cadet").unwrap());
        state.push_guess(Word::new("tests").unwrap());
        state.push_guess(Word::new("crane").unwrap());
        state.toggle_hints();
        state
    }

    /// Seal arbitrary plaintext the same way `encrypt` does
    fn seal_raw(codec: &SessionCodec, plaintext: &[u8]) -> String {
        let iv = [3u8; IV_LEN];
        let ciphertext = Aes256CbcEnc::new(&codec.cipher_key.into(), &iv.into())
            .encrypt_padded_vec_mut::<Pkcs7>(plaintext);
        let sealed = format!("{}:{}", STANDARD.encode(iv), STANDARD.encode(ciphertext));
        format!("{}:{sealed}", STANDARD.encode(codec.sign(sealed.as_bytes())))
    }

    #[test]
    fn round_trip_preserves_state() {
        let codec = codec();
        let state = sample_state();

        let token = codec.encrypt(&state).unwrap();
        let decoded = codec.decrypt(&token).unwrap();

        assert_eq!(decoded, state);
        assert_eq!(decoded.guesses()[0].score().to_code(), "YY---");
        assert!(decoded.hints_enabled());
        assert!(decoded.color_enabled());
    }

    #[test]
    fn token_has_three_base64_fields() {
        let token = codec().encrypt(&sample_state()).unwrap();
        let fields: Vec<&str> = token.split(':').collect();

        assert_eq!(fields.len(), 3);
        assert_eq!(STANDARD.decode(fields[0]).unwrap().len(), 32);
        assert_eq!(STANDARD.decode(fields[1]).unwrap().len(), IV_LEN);
        assert!(token.is_ascii());
    }

    #[test]
    fn token_does_not_reveal_secret() {
        let token = codec().encrypt(&sample_state()).unwrap();
        assert!(!token.contains("CADET"));
        assert!(!token.contains(&STANDARD.encode("CADET")));
    }

    #[test]
    fn same_state_gives_different_tokens() {
        let codec = codec();
        let state = sample_state();
        assert_ne!(codec.encrypt(&state).unwrap(), codec.encrypt(&state).unwrap());
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let codec = codec();
        let token = codec.encrypt(&sample_state()).unwrap();

        assert_eq!(codec.decrypt(""), Err(TokenError::Malformed));
        assert_eq!(codec.decrypt("abc"), Err(TokenError::Malformed));
        assert_eq!(codec.decrypt("a:b"), Err(TokenError::Malformed));
        assert_eq!(
            codec.decrypt(&format!("{token}:extra")),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn foreign_key_is_rejected_as_forged() {
        let token = codec().encrypt(&sample_state()).unwrap();
        let other = SessionCodec::new(&SessionKey::from_bytes(&[7u8; KEY_LEN]).unwrap()).unwrap();
        assert_eq!(other.decrypt(&token), Err(TokenError::Forged));
    }

    #[test]
    fn swapped_tag_is_forged() {
        let codec = codec();
        let a = codec.encrypt(&sample_state()).unwrap();
        let b = codec.encrypt(&GameState::new(1, Word::new("crane").unwrap())).unwrap();

        let (tag_a, _) = a.split_once(':').unwrap();
        let (_, sealed_b) = b.split_once(':').unwrap();
        assert_eq!(
            codec.decrypt(&format!("{tag_a}:{sealed_b}")),
            Err(TokenError::Forged)
        );
    }

    #[test]
    fn every_single_bit_flip_is_rejected() {
        let codec = codec();
        let token = codec.encrypt(&sample_state()).unwrap();
        let bytes = token.as_bytes();

        for index in 0..bytes.len() {
            for bit in 0..8 {
                let mut tampered = bytes.to_vec();
                tampered[index] ^= 1 << bit;

                // Flips that break UTF-8 cannot even be submitted as a token
                if let Ok(text) = String::from_utf8(tampered) {
                    assert!(
                        codec.decrypt(&text).is_err(),
                        "flip at byte {index} bit {bit} was accepted"
                    );
                }
            }
        }
    }

    #[test]
    fn authenticated_garbage_is_malformed() {
        let codec = codec();
        assert_eq!(
            codec.decrypt(&seal_raw(&codec, b"not json")),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn unknown_schema_version_is_malformed() {
        let codec = codec();
        let plaintext = br#"{"v":2,"id":1,"word":"CRANE","guesses":[],"solved":false}"#;
        assert_eq!(
            codec.decrypt(&seal_raw(&codec, plaintext)),
            Err(TokenError::Malformed)
        );
    }

    #[test]
    fn older_plaintext_without_preferences_still_opens() {
        let codec = codec();
        let plaintext = br#"{"v":1,"id":4,"word":"CRANE","guesses":[],"solved":false}"#;
        let state = codec.decrypt(&seal_raw(&codec, plaintext)).unwrap();

        assert_eq!(state.solution_id(), 4);
        assert!(!state.hints_enabled());
        assert!(!state.color_enabled());
    }

    #[test]
    fn inconsistent_state_is_malformed() {
        let codec = codec();
        // Score does not match the secret
        let plaintext = concat!(
            r#"{"v":1,"id":4,"word":"CRANE","#,
            r#""guesses":[{"word":"CRATE","score":"GGGGG"}],"solved":false}"#,
        )
        .as_bytes();
        assert_eq!(
            codec.decrypt(&seal_raw(&codec, plaintext)),
            Err(TokenError::Malformed)
        );
    }
}
