extern crate byteorder;
#[cfg(test)]
#[macro_use]
extern crate binary_macros;

pub mod digest;

pub use digest::{
    digest, digest_all, digest_bytes, Algorithm, Base64Options, Digest, DigestBuffer, Digestible,
    Error,
};
