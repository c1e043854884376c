use thiserror::Error;

/// Error conditions surfaced at the core's boundaries.
///
/// `apply_turn` only ever sees validated `Move` values, so `InvalidToken`
/// can only arise while parsing a turn-token string (`Move::from_str`,
/// `scramble::scramble_from_str`). Search-time failures (missing tables,
/// unreachable coordinates) are reported here for the caller that wants
/// to know *why* a solve degraded, but the hot search path itself never
/// propagates them: see `solver::Solver::solve`.
#[derive(Error, Debug)]
pub enum Error {
    #[error("'{0}' is not one of the 18 turn tokens")]
    InvalidToken(String),

    #[error("phase table file missing: {0}")]
    TableFileMissing(String),

    #[error("phase table file corrupt: {0}")]
    TableFileCorrupt(String),

    #[error("state's phase coordinate has no table entry")]
    UnreachableCoordinate,

    #[error("input state violates a cube invariant (unreachable from solved)")]
    UnsolvableInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    BincodeEncode(#[from] bincode::error::EncodeError),

    #[error(transparent)]
    BincodeDecode(#[from] bincode::error::DecodeError),
}
