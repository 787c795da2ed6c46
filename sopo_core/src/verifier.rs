use chrono::Utc;
use tracing::debug;

use crate::code::{CodeError, RareKind, ResultCode};
use crate::key::SigningKey;
use crate::message::SignedMessage;
use crate::token::Token;

/// How long after issuance a token is honoured, inclusive.
pub const VALIDITY_WINDOW_SECS: i64 = 30 * 60;

pub const TITLE_MISSED: &str = "そぽたんになれませんでした...";
pub const TITLE_SPUN: &str = "そぽたんスロットを回しました";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("result not found: {0}")]
    NotFound(#[from] CodeError),
}

/// What a result page is allowed to claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Common,
    /// Rare code without a valid token: missing, expired and forged tokens
    /// all land here.
    RareUnverified(RareKind),
    RareVerified(RareKind),
}

impl Outcome {
    pub fn is_rare(&self) -> bool {
        !matches!(self, Outcome::Common)
    }

    pub fn is_authentic_rare(&self) -> bool {
        matches!(self, Outcome::RareVerified(_))
    }
}

/// Which OGP image a page embeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetImage {
    Result(ResultCode),
    Fallback,
}

impl AssetImage {
    pub fn url(&self, base_url: &str) -> String {
        match self {
            AssetImage::Result(code) => format!("{base_url}/image/{code}.png"),
            AssetImage::Fallback => format!("{base_url}/image/ogp.png"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub code: ResultCode,
    pub glyphs: String,
    pub outcome: Outcome,
}

impl Classification {
    /// How a visit carrying no token is classified. Needs no key.
    pub fn without_token(code: ResultCode) -> Self {
        let outcome = match code.rare_kind() {
            None => Outcome::Common,
            Some(kind) => Outcome::RareUnverified(kind),
        };
        Self {
            code,
            glyphs: code.glyphs(),
            outcome,
        }
    }

    pub fn is_rare(&self) -> bool {
        self.outcome.is_rare()
    }

    pub fn is_authentic_rare(&self) -> bool {
        self.outcome.is_authentic_rare()
    }

    pub fn image(&self) -> AssetImage {
        match self.outcome {
            Outcome::Common | Outcome::RareVerified(_) => AssetImage::Result(self.code),
            Outcome::RareUnverified(_) => AssetImage::Fallback,
        }
    }

    pub fn title(&self) -> &'static str {
        match self.outcome {
            Outcome::Common => TITLE_MISSED,
            Outcome::RareVerified(RareKind::Sopotan) => "そぽ〜",
            Outcome::RareVerified(RareKind::Gukitan) => "ぐき〜",
            Outcome::RareUnverified(_) => TITLE_SPUN,
        }
    }
}

/// Decides what a result page may show for a code and an optional token.
#[derive(Debug, Clone, Copy)]
pub struct Verifier<'k> {
    key: &'k SigningKey,
}

impl<'k> Verifier<'k> {
    pub fn new(key: &'k SigningKey) -> Self {
        Self { key }
    }

    pub fn classify(
        &self,
        result: &str,
        token: Option<&Token>,
    ) -> Result<Classification, ClassifyError> {
        self.classify_at(result, token, Utc::now().timestamp())
    }

    pub fn classify_at(
        &self,
        result: &str,
        token: Option<&Token>,
        now: i64,
    ) -> Result<Classification, ClassifyError> {
        let code = ResultCode::parse(result)?;
        let mut classification = Classification::without_token(code);
        if let (Some(kind), Some(token)) = (code.rare_kind(), token) {
            if self.authenticate(code, token, now) {
                classification.outcome = Outcome::RareVerified(kind);
            }
        }
        debug!(%code, outcome = ?classification.outcome, "classified result");
        Ok(classification)
    }

    /// True when `token` is unexpired at `now` and signs `code`.
    pub fn authenticate(&self, code: ResultCode, token: &Token, now: i64) -> bool {
        if now.saturating_sub(token.issued_at) > VALIDITY_WINDOW_SECS {
            return false;
        }
        let Some(signature) = token.signature_bytes() else {
            return false;
        };
        self.key.verify(&SignedMessage::new(code, token.issued_at), &signature)
    }
}
