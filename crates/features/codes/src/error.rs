use std::borrow::Cow;

/// Codes slice error type.
#[glint_derive::glint_error]
pub enum CodesError {
    #[error("Unknown fun-mode code{}: {message}", format_context(.context))]
    UnknownCode { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
