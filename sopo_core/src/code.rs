use std::fmt;
use std::str::FromStr;

use crate::symbols::Symbol;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    #[error("malformed result code: {0:?}")]
    Malformed(String),
    #[error("not a common result code: {0}")]
    NotCommon(ResultCode),
}

/// The four-symbol outcome of one spin, e.g. `sptn`.
///
/// A code is well-formed when every symbol is from the common alphabet, or
/// when it is one of the rare sentinels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResultCode([Symbol; ResultCode::LEN]);

/// The two special outcomes whose artwork is gated behind a signed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RareKind {
    Sopotan,
    Gukitan,
}

impl RareKind {
    pub const ALL: [RareKind; 2] = [RareKind::Sopotan, RareKind::Gukitan];

    pub fn code(self) -> ResultCode {
        match self {
            RareKind::Sopotan => ResultCode::SOPOTAN,
            RareKind::Gukitan => ResultCode::GUKITAN,
        }
    }

    /// Character name, used as alt text.
    pub fn name(self) -> &'static str {
        match self {
            RareKind::Sopotan => "そぽたん",
            RareKind::Gukitan => "ぐきたん",
        }
    }

    /// File name of the character artwork shown in the page body.
    pub fn artwork(self) -> &'static str {
        match self {
            RareKind::Sopotan => "sopotan.png",
            RareKind::Gukitan => "gukitan.png",
        }
    }
}

impl ResultCode {
    pub const LEN: usize = 4;

    pub const SOPOTAN: ResultCode = ResultCode([Symbol::So, Symbol::Po, Symbol::Ta, Symbol::N]);
    pub const GUKITAN: ResultCode = ResultCode([Symbol::Gu, Symbol::Ki, Symbol::Ta, Symbol::N]);

    /// Parse any well-formed code, rare sentinels included.
    pub fn parse(s: &str) -> Result<Self, CodeError> {
        let malformed = || CodeError::Malformed(s.to_string());
        let mut symbols = [Symbol::So; Self::LEN];
        let mut chars = s.chars();
        for slot in symbols.iter_mut() {
            *slot = chars.next().and_then(Symbol::from_char).ok_or_else(malformed)?;
        }
        if chars.next().is_some() {
            return Err(malformed());
        }
        let code = ResultCode(symbols);
        if code.is_common() || code.rare_kind().is_some() {
            Ok(code)
        } else {
            Err(malformed())
        }
    }

    /// Parse a code drawn purely from the common alphabet. `gktn` is refused.
    pub fn parse_common(s: &str) -> Result<Self, CodeError> {
        let code = Self::parse(s)?;
        if code.is_common() {
            Ok(code)
        } else {
            Err(CodeError::NotCommon(code))
        }
    }

    pub fn symbols(&self) -> [Symbol; Self::LEN] {
        self.0
    }

    pub fn is_common(&self) -> bool {
        self.0.iter().all(|s| s.is_common())
    }

    pub fn rare_kind(&self) -> Option<RareKind> {
        RareKind::ALL.into_iter().find(|kind| kind.code() == *self)
    }

    pub fn is_rare(&self) -> bool {
        self.rare_kind().is_some()
    }

    /// Display string, e.g. `そぽたん`.
    pub fn glyphs(&self) -> String {
        self.0.iter().map(|s| s.glyph()).collect()
    }

    /// Every code a spin can produce, in reel order (`ssss`, `sssp`, ...).
    pub fn all_common() -> impl Iterator<Item = ResultCode> {
        let n = Symbol::COMMON.len();
        (0..n.pow(Self::LEN as u32)).map(move |mut i| {
            let mut symbols = [Symbol::So; Self::LEN];
            for slot in symbols.iter_mut().rev() {
                *slot = Symbol::COMMON[i % n];
                i /= n;
            }
            ResultCode(symbols)
        })
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for s in &self.0 {
            write!(f, "{}", s.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for ResultCode {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
