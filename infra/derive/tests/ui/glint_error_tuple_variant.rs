use glint_derive::glint_error;

#[glint_error]
pub enum DemoError {
    #[error("I/O error: {0}")]
    Io(std::io::Error),
}

fn main() {}
