use crate::code::ResultCode;

/// Layout of the bytes covered by a token signature.
///
/// Tokens carry no format marker, so the verifier assumes `V1`. A new
/// variant must only be introduced together with a way to tell the formats
/// apart on the wire; changing `V1` invalidates every token already shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MessageFormat {
    /// `<code>:<issued_at>` with the timestamp in decimal.
    #[default]
    V1,
}

/// The claim a token signs: this code was rolled at `issued_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignedMessage {
    pub format: MessageFormat,
    pub code: ResultCode,
    pub issued_at: i64,
}

impl SignedMessage {
    pub fn new(code: ResultCode, issued_at: i64) -> Self {
        Self {
            format: MessageFormat::default(),
            code,
            issued_at,
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        match self.format {
            MessageFormat::V1 => format!("{}:{}", self.code, self.issued_at).into_bytes(),
        }
    }
}
