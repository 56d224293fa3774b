use std::borrow::Cow;

/// A specialized [`DatabaseError`] enum of this crate.
#[zoo_derive::zoo_error]
pub enum DatabaseError {
    /// The builder was not given everything it needs.
    #[error("Validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A record with the same key already exists in the table.
    #[error("Duplicate key{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
