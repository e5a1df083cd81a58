use apb_derive::apb_error;
use std::borrow::Cow;

#[apb_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Malformed rank {value:?}")]
    Malformed { value: String },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err = DemoError::Malformed { value: "x".to_owned() };
    let _ = err.kind();
}
