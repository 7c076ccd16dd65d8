//! Identity Models

/// An authenticated session reference used to attribute an order to a user.
///
/// The identity provider's "current user" is process-wide mutable state in
/// the surrounding app; order placement takes an explicit `Option<&Identity>`
/// instead of reading it ambiently, so the commit path is testable without a
/// live session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The provider-assigned user id.
    pub user_id: String,
}

impl Identity {
    /// Creates an identity for the given user id.
    pub fn new(user_id: impl Into<String>) -> Self {
        Identity {
            user_id: user_id.into(),
        }
    }
}
