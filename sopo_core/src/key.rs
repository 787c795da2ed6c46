use std::fmt;

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::message::SignedMessage;

pub type HmacSha256 = Hmac<Sha256>;

/// Length of an HMAC-SHA256 tag.
pub const SIGNATURE_LEN: usize = 32;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("signing secret is empty")]
    Empty,
}

/// The shared secret, pre-keyed into an HMAC instance.
///
/// Loaded once at startup and handed to the issuer and verifier by
/// reference. Never printed.
#[derive(Clone)]
pub struct SigningKey {
    mac: HmacSha256,
}

impl SigningKey {
    pub fn new(secret: impl AsRef<[u8]>) -> Result<Self, KeyError> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            return Err(KeyError::Empty);
        }
        let mac = HmacSha256::new_from_slice(secret).expect("HMAC accepts keys of any length");
        Ok(Self { mac })
    }

    fn keyed(&self, msg: &SignedMessage) -> HmacSha256 {
        let mut mac = self.mac.clone();
        mac.update(&msg.to_bytes());
        mac
    }

    pub fn sign(&self, msg: &SignedMessage) -> [u8; SIGNATURE_LEN] {
        let res = self.keyed(msg).finalize().into_bytes();
        let mut out = [0u8; SIGNATURE_LEN];
        out.copy_from_slice(&res);
        out
    }

    /// Constant-time check of `tag` against the signature of `msg`.
    pub fn verify(&self, msg: &SignedMessage, tag: &[u8]) -> bool {
        self.keyed(msg).verify_slice(tag).is_ok()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SigningKey(<redacted>)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::code::ResultCode;

    #[test]
    fn empty_secret_is_rejected() {
        assert_eq!(SigningKey::new("").unwrap_err(), KeyError::Empty);
    }

    #[test]
    fn secrets_longer_than_a_block_are_accepted() {
        let key = SigningKey::new(vec![7u8; 200]).unwrap();
        let msg = SignedMessage::new(ResultCode::SOPOTAN, 1000);
        assert!(key.verify(&msg, &key.sign(&msg)));
    }

    #[test]
    fn matches_plain_hmac() {
        let key = SigningKey::new("secret").unwrap();
        let msg = SignedMessage::new(ResultCode::SOPOTAN, 1000);

        let mut mac = HmacSha256::new_from_slice(b"secret").unwrap();
        mac.update(b"sptn:1000");
        let expected = mac.finalize().into_bytes();

        assert_eq!(key.sign(&msg).as_slice(), expected.as_slice());
        assert!(key.verify(&msg, &expected));
    }

    #[test]
    fn verify_rejects_other_key_and_short_tags() {
        let key = SigningKey::new("secret").unwrap();
        let other = SigningKey::new("other").unwrap();
        let msg = SignedMessage::new(ResultCode::SOPOTAN, 1000);
        let tag = key.sign(&msg);
        assert!(!other.verify(&msg, &tag));
        assert!(!key.verify(&msg, &tag[..31]));
        assert!(!key.verify(&msg, &[]));
    }

    #[test]
    fn debug_hides_secret() {
        let key = SigningKey::new("hunter2").unwrap();
        assert!(!format!("{key:?}").contains("hunter2"));
    }
}
