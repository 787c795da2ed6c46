use serde::{Deserialize, Serialize};
use sopo_core::{ClassifyError, IssueError, Token};

/// Body of `POST /api/sign`.
#[derive(Debug, Deserialize, Clone)]
pub struct SignRequest {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SignResponse {
    pub sig: String,
    pub ts: i64,
}

impl From<Token> for SignResponse {
    fn from(token: Token) -> Self {
        Self {
            sig: token.signature,
            ts: token.issued_at,
        }
    }
}

/// Query string of a result page. Both values stay raw strings so a bad
/// `ts` falls through to an unsigned visit instead of a rejection.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ResultQuery {
    pub sig: Option<String>,
    pub ts: Option<String>,
}

impl ResultQuery {
    pub fn token(&self) -> Option<Token> {
        Token::from_query(self.sig.as_deref(), self.ts.as_deref())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("Invalid result")]
    InvalidInput,
    #[error("Not Found")]
    NotFound,
}

impl ApiError {
    pub fn status(&self) -> u16 {
        match self {
            ApiError::InvalidInput => 400,
            ApiError::NotFound => 404,
        }
    }
}

impl From<IssueError> for ApiError {
    fn from(_: IssueError) -> Self {
        ApiError::InvalidInput
    }
}

impl From<ClassifyError> for ApiError {
    fn from(_: ClassifyError) -> Self {
        ApiError::NotFound
    }
}
