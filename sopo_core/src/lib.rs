pub mod code;
pub mod issuer;
pub mod key;
pub mod message;
pub mod page;
pub mod symbols;
pub mod token;
pub mod verifier;

pub use crate::code::{CodeError, RareKind, ResultCode};
pub use crate::issuer::{mint, IssueError, Issuer};
pub use crate::key::{KeyError, SigningKey, SIGNATURE_LEN};
pub use crate::message::{MessageFormat, SignedMessage};
pub use crate::page::{render_result_page, write_static_pages, DEFAULT_BASE_URL};
pub use crate::symbols::Symbol;
pub use crate::token::{decode_signature, encode_signature, Token};
pub use crate::verifier::{
    AssetImage, Classification, ClassifyError, Outcome, Verifier, VALIDITY_WINDOW_SECS,
};
