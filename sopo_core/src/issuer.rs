use chrono::Utc;
use tracing::debug;

use crate::code::{CodeError, ResultCode};
use crate::key::SigningKey;
use crate::message::SignedMessage;
use crate::token::{encode_signature, Token};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IssueError {
    #[error("invalid result: {0}")]
    InvalidInput(#[from] CodeError),
}

/// Signs results reported by the front-end.
///
/// Only codes from the common alphabet are accepted, so `gktn` cannot be
/// requested here. The verifier classifies rarity on its own.
#[derive(Debug, Clone, Copy)]
pub struct Issuer<'k> {
    key: &'k SigningKey,
}

impl<'k> Issuer<'k> {
    pub fn new(key: &'k SigningKey) -> Self {
        Self { key }
    }

    pub fn issue(&self, result: &str) -> Result<Token, IssueError> {
        self.issue_at(result, Utc::now().timestamp())
    }

    pub fn issue_at(&self, result: &str, now: i64) -> Result<Token, IssueError> {
        let code = ResultCode::parse_common(result)?;
        debug!(%code, issued_at = now, "issuing result token");
        Ok(mint(self.key, code, now))
    }
}

/// Sign any well-formed code, bypassing the issuer's alphabet check.
pub fn mint(key: &SigningKey, code: ResultCode, issued_at: i64) -> Token {
    let signature = key.sign(&SignedMessage::new(code, issued_at));
    Token {
        signature: encode_signature(&signature),
        issued_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> SigningKey {
        SigningKey::new("test-secret").unwrap()
    }

    #[test]
    fn issues_for_common_codes() {
        let key = key();
        let token = Issuer::new(&key).issue_at("sptn", 1000).unwrap();
        assert_eq!(token.issued_at, 1000);
        assert_eq!(token.signature.len(), 43);
        assert_eq!(token, mint(&key, ResultCode::SOPOTAN, 1000));
    }

    #[test]
    fn rejects_everything_else() {
        let key = key();
        let issuer = Issuer::new(&key);
        for bad in ["gktn", "", "abcd", "sptnn", "SPTN"] {
            assert!(
                matches!(issuer.issue_at(bad, 1000), Err(IssueError::InvalidInput(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn later_issue_gives_a_different_token() {
        let key = key();
        let issuer = Issuer::new(&key);
        let a = issuer.issue_at("ssss", 1000).unwrap();
        let b = issuer.issue_at("ssss", 1001).unwrap();
        assert_ne!(a.signature, b.signature);
    }

    #[test]
    fn wall_clock_issue_is_recent() {
        let key = key();
        let before = Utc::now().timestamp();
        let token = Issuer::new(&key).issue("tttt").unwrap();
        assert!(token.issued_at >= before);
        assert!(token.issued_at <= Utc::now().timestamp());
    }
}
