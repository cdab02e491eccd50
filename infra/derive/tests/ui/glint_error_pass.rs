use glint_derive::glint_error;
use std::borrow::Cow;

#[glint_error]
pub enum DemoError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse {
        #[source]
        source: std::num::ParseIntError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Invalid code{}: {message}", format_context(.context))]
    InvalidCode { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u64, DemoError> {
    Ok(raw.parse::<u64>().context("Parsing bitset")?)
}

fn main() {
    let _ = parse("8");
}
