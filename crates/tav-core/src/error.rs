/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building or rendering core types.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A string did not name one of the six abilities.
    #[error("unknown ability: \"{0}\"")]
    UnknownAbility(String),

    /// A score set was missing an entry for an ability.
    #[error("missing score for {0}")]
    MissingAbility(crate::Ability),

    /// A score set named the same ability twice.
    #[error("duplicate score for {0}")]
    DuplicateAbility(crate::Ability),

    /// A textual score set could not be parsed.
    #[error("invalid scores: {0}")]
    InvalidScores(String),

    /// An export format name was not recognized.
    #[error("unsupported format: \"{0}\" (use: txt, json, html)")]
    UnknownFormat(String),

    /// JSON serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
