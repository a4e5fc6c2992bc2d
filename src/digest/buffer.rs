use std::fmt;

use log::trace;

use super::{Algorithm, Digest, Digestible};

/// An in-progress digest.
///
/// Append data in any grouping and read [`digest`](DigestBuffer::digest) at any point; the buffer
/// stays appendable afterwards. Cloning a buffer branches the computation: the clone and the original
/// evolve independently from then on.
#[derive(Clone, Default)]
pub struct DigestBuffer<A: Algorithm> {
    // Hash state
    algorithm: A,
    // Total bytes appended
    len: u64,
}

impl<A: Algorithm> DigestBuffer<A> {
    /// Creates a buffer feeding into `algorithm`, which should be in its initial state.
    pub fn new(algorithm: A) -> Self {
        DigestBuffer { algorithm, len: 0 }
    }

    /// Adds raw bytes to the digest.
    pub fn append_bytes(&mut self, input: &[u8]) {
        if input.is_empty() {
            return;
        }
        self.len += input.len() as u64;
        self.algorithm.append(input);
    }

    /// Adds the bytes of a [`Digestible`] value to the digest.
    pub fn append<D: Digestible + ?Sized>(&mut self, data: &D) {
        data.with_digestible_data(&mut |bytes: &[u8]| self.append_bytes(bytes));
    }

    /// Appends `data` and returns the buffer, for chaining.
    pub fn chain<D: Digestible + ?Sized>(mut self, data: &D) -> Self {
        self.append(data);
        self
    }

    /// Returns a copy of this buffer with `data` appended, leaving this one untouched.
    pub fn copy_and_append<D: Digestible + ?Sized>(&self, data: &D) -> Self {
        self.clone().chain(data)
    }

    /// Number of bytes appended so far.
    pub fn len(&self) -> u64 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The digest of everything appended so far.
    ///
    /// Finishes a copy of the algorithm state, so the buffer can keep accumulating.
    pub fn digest(&self) -> Digest {
        trace!("digesting {} bytes with {}", self.len, A::NAME);
        Digest::from_algorithm(self.algorithm.clone())
    }

    /// Consumes the buffer and returns its digest without copying the algorithm state.
    pub fn into_digest(self) -> Digest {
        trace!("finishing {} bytes with {}", self.len, A::NAME);
        Digest::from_algorithm(self.algorithm)
    }
}

impl<A: Algorithm> Extend<u8> for DigestBuffer<A> {
    fn extend<I: IntoIterator<Item = u8>>(&mut self, iter: I) {
        for byte in iter {
            self.append_bytes(&[byte]);
        }
    }
}

impl<'a, A: Algorithm> Extend<&'a u8> for DigestBuffer<A> {
    fn extend<I: IntoIterator<Item = &'a u8>>(&mut self, iter: I) {
        <Self as Extend<u8>>::extend(self, iter.into_iter().copied())
    }
}

impl<A: Algorithm> fmt::Debug for DigestBuffer<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("DigestBuffer")
            .field("algorithm", &A::NAME)
            .field("len", &self.len)
            .finish()
    }
}
