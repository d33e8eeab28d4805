use thiserror::Error;

#[derive(Error, Debug)]
pub enum HuffmanError {
    /// Artifact shorter than the 4-byte size header.
    #[error("malformed header: need 4 bytes, got {0}")]
    MalformedHeader(usize),

    /// Bit sequence ended while the tree was still being read.
    #[error("truncated tree: bit sequence ended inside the tree encoding")]
    TruncatedTree,

    /// Serialized tree holds more leaves than there are byte values.
    #[error("tree has more than 256 leaves")]
    TreeTooLarge,

    /// Bit sequence ended before the declared number of symbols was decoded.
    #[error("truncated payload: decoded {decoded} of {declared} symbols")]
    TruncatedPayload { decoded: usize, declared: usize },

    /// Header declares a nonempty payload but the tree has no leaves.
    #[error("empty alphabet but header declares {0} bytes")]
    EmptyAlphabetMismatch(usize),

    /// Whole bytes left after the last payload bit.
    #[error("{0} trailing bytes after payload")]
    TrailingBytes(usize),

    /// Declared size is above the configured output limit.
    #[error("declared size {declared} exceeds output limit {limit}")]
    OutputLimitExceeded { declared: usize, limit: usize },

    /// Input does not fit the 32-bit size header.
    #[error("input of {0} bytes does not fit the 32-bit size header")]
    InputTooLarge(usize),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
