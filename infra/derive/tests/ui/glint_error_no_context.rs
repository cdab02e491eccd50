use glint_derive::glint_error;

#[glint_error]
pub enum DemoError {
    #[error("I/O error: {source}")]
    Io { source: std::io::Error },
}

fn main() {}
