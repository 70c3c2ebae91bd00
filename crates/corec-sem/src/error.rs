//! Exceptional conditions distinct from diagnosed source-program errors.
//!
//! A malformed program produces [`corec_util::diagnostic::Diagnostic`]s via
//! the [`corec_util::diagnostic::Handler`] and resolution/inference keeps
//! going. `CoreError` is for the other kind of failure: misuse of this
//! crate's own API that no source program could trigger.

use corec_ast::TypeHandle;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// A type context was reset while a handle minted before the reset was
    /// still in use.
    #[error("type handle {0:?} used after its type context was reset")]
    HandleAfterReset(TypeHandle),

    /// A factory call received a key that cannot denote a real type, e.g.
    /// an `Applied` with zero arguments.
    #[error("malformed type factory key: {0}")]
    MalformedKey(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_after_reset_message_mentions_the_handle() {
        let err = CoreError::HandleAfterReset(TypeHandle::DUMMY);
        assert!(err.to_string().contains("used after"));
    }
}
