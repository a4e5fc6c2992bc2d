/// Errors from decoding a textual digest representation.
///
/// Computing and encoding digests never fails; only parsing does.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
    #[error("invalid base64 digest: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
