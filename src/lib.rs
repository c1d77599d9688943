pub mod classify;
pub mod tokenize;
pub mod unicode;

pub use classify::{Mode, ModeError, TokenKind, classify};
pub use tokenize::{Token, Tokens, tokenize, tokenize_detailed, tokenize_with, tokens};
