use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use byteorder::{ByteOrder, BE, LE};
use bytes::Bytes;

use super::Digest;

/// A value that can be part of a digest.
///
/// `with_digestible_data` must call `append` exactly once with a contiguous view of the value's
/// bytes, and must not mutate the value. Composite types should lay out their fields in a fixed,
/// documented order and hand the result over in that single call.
///
/// Integer types wider than a byte are deliberately not `Digestible`: their in-memory layout depends
/// on the platform. Wrap them in [`BigEndian`] or [`LittleEndian`] to pick a byte order explicitly.
pub trait Digestible {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8]));
}

/// Strings are digested as their UTF-8 bytes, without any Unicode normalization.
impl Digestible for str {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(self.as_bytes())
    }
}

impl Digestible for String {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(self.as_bytes())
    }
}

impl Digestible for Cow<'_, str> {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(self.as_bytes())
    }
}

/// A single byte with the same bit pattern as the `u8`.
impl Digestible for u8 {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(std::slice::from_ref(self))
    }
}

impl Digestible for [u8] {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(self)
    }
}

impl<const N: usize> Digestible for [u8; N] {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(&self[..])
    }
}

impl Digestible for Vec<u8> {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(self.as_slice())
    }
}

impl Digestible for Cow<'_, [u8]> {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(self.as_ref())
    }
}

impl Digestible for Bytes {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(self.as_ref())
    }
}

/// A digest contributes its raw bytes, so digests can feed further digests.
impl Digestible for Digest {
    fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
        append(self.as_bytes())
    }
}

macro_rules! forward_digestible {
    ($($wrapper:ty),*) => {
        $(
            impl<T: Digestible + ?Sized> Digestible for $wrapper {
                fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
                    (**self).with_digestible_data(append)
                }
            }
        )*
    }
}

forward_digestible!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// An integer digested in big-endian (network) byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BigEndian<T>(pub T);

/// An integer digested in little-endian byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LittleEndian<T>(pub T);

macro_rules! define_endian {
    ($wrapper:ident, $order:ty; $($int:ty => $write:ident),*) => {
        $(
            impl Digestible for $wrapper<$int> {
                fn with_digestible_data(&self, append: &mut dyn FnMut(&[u8])) {
                    let mut buf = [0; ::std::mem::size_of::<$int>()];
                    <$order>::$write(&mut buf, self.0);
                    append(&buf[..])
                }
            }
        )*
    }
}

define_endian!(BigEndian, BE;
    u16 => write_u16, u32 => write_u32, u64 => write_u64, u128 => write_u128,
    i16 => write_i16, i32 => write_i32, i64 => write_i64, i128 => write_i128
);
define_endian!(LittleEndian, LE;
    u16 => write_u16, u32 => write_u32, u64 => write_u64, u128 => write_u128,
    i16 => write_i16, i32 => write_i32, i64 => write_i64, i128 => write_i128
);
