use thiserror::Error;

/// Errors emitted while masking protected regions.
#[derive(Debug, Error)]
pub enum MaskError {
    /// The input already contains text shaped like a placeholder token.
    ///
    /// Placeholders must be the only occupants of their grammar so that
    /// restoration can resolve every token in a single sweep. Rather than
    /// looping until a collision happens to resolve, such input is refused
    /// up front.
    #[error("input already contains placeholder-shaped text: {token}")]
    TokenCollision {
        /// The colliding substring found in the input.
        token: String,
    },
}
