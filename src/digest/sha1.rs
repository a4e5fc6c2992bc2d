//! SHA-1 (FIPS PUB 180-4), backed by the RustCrypto `sha1` crate.
//!
//! SHA-1 is no longer collision resistant. Prefer [`SHA256`](super::sha2::SHA256) in new designs.

define_algorithm!(
    /// SHA-1, producing a 20 byte digest.
    SHA1, ::sha1::Sha1, ::sha1::Digest, 20
);
