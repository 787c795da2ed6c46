use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

/// URL-safe Base64. Output is unpadded; input is accepted with or without
/// `=` padding.
pub const SIGNATURE_ENCODING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode_signature(bytes: &[u8]) -> String {
    SIGNATURE_ENCODING.encode(bytes)
}

/// `None` on anything that is not valid URL-safe Base64.
pub fn decode_signature(encoded: &str) -> Option<Vec<u8>> {
    SIGNATURE_ENCODING.decode(encoded).ok()
}

/// A signature plus the time it was issued, as carried in a share URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub signature: String,
    pub issued_at: i64,
}

impl Token {
    /// Build a token from raw `sig`/`ts` query values. Missing values or a
    /// non-numeric timestamp yield `None`, the same as an unsigned visit.
    pub fn from_query(sig: Option<&str>, ts: Option<&str>) -> Option<Self> {
        let signature = sig.filter(|s| !s.is_empty())?;
        let issued_at = ts?.trim().parse().ok()?;
        Some(Self {
            signature: signature.to_string(),
            issued_at,
        })
    }

    pub fn signature_bytes(&self) -> Option<Vec<u8>> {
        decode_signature(&self.signature)
    }

    /// `sig=...&ts=...`. The signature alphabet needs no percent-encoding.
    pub fn query_string(&self) -> String {
        format!("sig={}&ts={}", self.signature, self.issued_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hmac_sized_signature_round_trips_unpadded() {
        let bytes: Vec<u8> = (0..32u8).map(|b| b.wrapping_mul(37).wrapping_add(250)).collect();
        let encoded = encode_signature(&bytes);
        assert_eq!(encoded.len(), 43);
        assert!(!encoded.contains(['=', '+', '/']));
        assert_eq!(decode_signature(&encoded).unwrap(), bytes);
    }

    #[test]
    fn url_safe_characters() {
        assert_eq!(encode_signature(&[0xfb, 0xff]), "-_8");
        assert_eq!(decode_signature("-_8").unwrap(), vec![0xfb, 0xff]);
        assert_eq!(decode_signature("-_8=").unwrap(), vec![0xfb, 0xff]);
    }

    #[test]
    fn malformed_base64_is_none() {
        assert_eq!(decode_signature("+/8"), None);
        assert_eq!(decode_signature("a"), None);
        assert_eq!(decode_signature("ab!d"), None);
    }

    #[test]
    fn from_query_needs_both_parts() {
        assert_eq!(Token::from_query(None, Some("1")), None);
        assert_eq!(Token::from_query(Some("abc"), None), None);
        assert_eq!(Token::from_query(Some(""), Some("1")), None);
        assert_eq!(Token::from_query(Some("abc"), Some("soon")), None);
        assert_eq!(
            Token::from_query(Some("abc"), Some("1000")),
            Some(Token {
                signature: "abc".into(),
                issued_at: 1000
            })
        );
    }

    #[test]
    fn wire_names() {
        let token = Token {
            signature: "abc".into(),
            issued_at: 7,
        };
        assert_eq!(token.query_string(), "sig=abc&ts=7");
    }
}
