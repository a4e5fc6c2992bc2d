//! Incremental digests over pluggable hash algorithms.
//!
//! An [`Algorithm`] is an incremental hash state machine. A [`DigestBuffer`] owns one and lets
//! callers append [`Digestible`] data and read a [`Digest`] at any point without ending the
//! computation, because reading a digest finishes a clone of the state rather than the state itself.

#[macro_use]
mod macros;
mod buffer;
mod digestible;
mod encoding;
mod error;
mod value;
pub mod sha1;
pub mod sha2;

pub use self::buffer::DigestBuffer;
pub use self::digestible::{BigEndian, Digestible, LittleEndian};
pub use self::encoding::{Alphabet, Base64Options, LineEnding, LineLength};
pub use self::error::{Error, Result};
pub use self::value::Digest;

/// An in-progress hash computation.
///
/// Implementations must have value semantics: a clone is a fully independent state, so appending to
/// one never affects the other. Wrappers around native contexts must deep-copy that context in
/// `clone`.
///
/// `finish` consumes the state, so a finished algorithm cannot be appended to or finished again.
pub trait Algorithm: Clone {
    /// Human readable algorithm name.
    const NAME: &'static str;
    /// Length in bytes of the output of [`finish`](Algorithm::finish).
    const OUTPUT_LEN: usize;

    /// Feeds `input` into the state. An empty slice is a no-op.
    fn append(&mut self, input: &[u8]);

    /// Completes the computation and returns the digest bytes.
    fn finish(self) -> Vec<u8>;

    fn compute(input: &[u8]) -> Digest
    where
        Self: Default,
    {
        let mut state = Self::default();
        state.append(input);
        Digest::from_algorithm(state)
    }
}

/// Digests a single value in one step.
///
/// ```
/// use digestbuf::digest::sha1::SHA1;
///
/// let digest = digestbuf::digest("abc", SHA1::new());
/// assert_eq!(digest.hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
/// ```
pub fn digest<A: Algorithm, D: Digestible + ?Sized>(data: &D, algorithm: A) -> Digest {
    let mut buffer = DigestBuffer::new(algorithm);
    buffer.append(data);
    buffer.into_digest()
}

/// Digests a byte slice in one step.
pub fn digest_bytes<A: Algorithm>(data: &[u8], algorithm: A) -> Digest {
    let mut buffer = DigestBuffer::new(algorithm);
    buffer.append_bytes(data);
    buffer.into_digest()
}

/// Digests every item of `data` in iteration order, as if their bytes were concatenated.
///
/// Items are appended one at a time, so lazy iterators are never collected.
pub fn digest_all<A, I>(data: I, algorithm: A) -> Digest
where
    A: Algorithm,
    I: IntoIterator,
    I::Item: Digestible,
{
    data.into_iter()
        .fold(DigestBuffer::new(algorithm), |buffer, item| buffer.chain(&item))
        .into_digest()
}
