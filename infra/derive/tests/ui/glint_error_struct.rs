use glint_derive::glint_error;

#[glint_error]
pub struct DemoError {
    message: String,
}

fn main() {}
