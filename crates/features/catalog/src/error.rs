use std::borrow::Cow;

/// A specialized [`CatalogError`] enum of this crate.
#[apb_derive::apb_error]
pub enum CatalogError {
    /// A rank field is missing or not an integer, so the record cannot be placed.
    #[error("Malformed {field} {value} on record '{record_id}'{}", format_context(.context))]
    MalformedOrder {
        record_id: String,
        field: &'static str,
        /// Raw upstream value, or `<missing>`.
        value: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The document tree does not have the expected shape.
    #[error("Unexpected snapshot shape{}: {message}", format_context(.context))]
    Snapshot { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Snapshot JSON error{}: {source}", format_context(.context))]
    Serde { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Snapshot IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal catalog error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
