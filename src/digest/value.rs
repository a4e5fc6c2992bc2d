use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::str::FromStr;
use std::sync::OnceLock;

use byteorder::{ByteOrder, BE};
use bytes::Bytes;
use log::debug;

use super::{Algorithm, Base64Options, Error, Result};

/// A completed digest.
///
/// The raw bytes are the canonical form; every other representation is derived from them. Digests
/// are immutable and can be shared freely between threads.
///
/// Equality and ordering look only at the bytes, never at which algorithm produced them, so digests
/// from different algorithms compare but are equal only when byte-identical. Ordering sorts shorter
/// digests first, then compares bytes lexicographically. It is a total order suitable for sorting
/// and deduplication, not a comparison of magnitude.
#[derive(Clone)]
pub struct Digest {
    bytes: Box<[u8]>,
    hex: OnceLock<String>,
}

impl Digest {
    /// Wraps finished digest bytes.
    pub fn new(bytes: impl Into<Box<[u8]>>) -> Digest {
        Digest { bytes: bytes.into(), hex: OnceLock::new() }
    }

    /// Finishes `algorithm` and wraps its output. Pass a copy to keep the original running.
    pub fn from_algorithm<A: Algorithm>(algorithm: A) -> Digest {
        Digest::new(algorithm.finish())
    }

    /// Parses a hex digest in either case.
    pub fn from_hex(input: &str) -> Result<Digest> {
        let bytes = hex::decode(input).map_err(|err| {
            debug!("rejecting hex digest {:?}: {}", input, err);
            err
        })?;
        Ok(Digest::new(bytes))
    }

    /// Parses a base64 digest written with `options`. Line breaks are ignored.
    pub fn from_base64(input: &str, options: Base64Options) -> Result<Digest> {
        let bytes = options.decode(input).map_err(|err| {
            debug!("rejecting base64 digest {:?}: {}", input, err);
            err
        })?;
        Ok(Digest::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Lowercase hex, two digits per byte, no prefix or separators. Computed on first use.
    pub fn hex(&self) -> &str {
        self.hex.get_or_init(|| hex::encode(&self.bytes))
    }

    pub fn base64(&self, options: Base64Options) -> String {
        options.encode(&self.bytes)
    }

    /// Base64 as ASCII bytes.
    pub fn base64_bytes(&self, options: Base64Options) -> Vec<u8> {
        self.base64(options).into_bytes()
    }

    pub fn base64_data(&self, options: Base64Options) -> Bytes {
        Bytes::from(self.base64_bytes(options))
    }

    /// The raw bytes as a [`Bytes`] container.
    pub fn to_bytes(&self) -> Bytes {
        Bytes::copy_from_slice(&self.bytes)
    }

    /// Folds the leading word-size bytes, shifting left a byte at a time and XOR-ing in the next.
    ///
    /// Digest bytes are already uniformly distributed, so the prefix is as good as the whole.
    pub fn hash_code(&self) -> u64 {
        let used = self.bytes.len().min(mem::size_of::<usize>()).min(8);
        if used == 0 {
            return 0;
        }
        // Each byte lands in its own lane, so the fold is a big-endian read.
        BE::read_uint(&self.bytes[..used], used)
    }
}

impl PartialEq for Digest {
    fn eq(&self, other: &Digest) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Digest {}

impl PartialOrd for Digest {
    fn partial_cmp(&self, other: &Digest) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Digest {
    fn cmp(&self, other: &Digest) -> Ordering {
        self.bytes.len().cmp(&other.bytes.len()).then_with(|| self.bytes.cmp(&other.bytes))
    }
}

impl Hash for Digest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl From<Vec<u8>> for Digest {
    fn from(bytes: Vec<u8>) -> Digest {
        Digest::new(bytes)
    }
}

impl From<&[u8]> for Digest {
    fn from(bytes: &[u8]) -> Digest {
        Digest::new(bytes)
    }
}

impl From<Digest> for Box<[u8]> {
    fn from(digest: Digest) -> Box<[u8]> {
        digest.bytes
    }
}

impl From<Digest> for Vec<u8> {
    fn from(digest: Digest) -> Vec<u8> {
        digest.bytes.into_vec()
    }
}

impl FromStr for Digest {
    type Err = Error;

    fn from_str(s: &str) -> Result<Digest> {
        Digest::from_hex(s)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Digest(\"{}\")", self.hex())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.bytes))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Digest {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.serialize_str(self.hex())
        } else {
            serializer.serialize_bytes(&self.bytes)
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Digest {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Digest, D::Error> {
        if deserializer.is_human_readable() {
            let hex = <String as serde::Deserialize>::deserialize(deserializer)?;
            Digest::from_hex(&hex).map_err(serde::de::Error::custom)
        } else {
            <Vec<u8> as serde::Deserialize>::deserialize(deserializer).map(Digest::from)
        }
    }
}
