//! The SHA-2 family (FIPS PUB 180-4), backed by the RustCrypto `sha2` crate.

use ::sha2 as imp;

define_algorithm!(
    /// SHA-224, producing a 28 byte digest.
    SHA224, imp::Sha224, imp::Digest, 28
);
define_algorithm!(
    /// SHA-256, producing a 32 byte digest.
    SHA256, imp::Sha256, imp::Digest, 32
);
define_algorithm!(
    /// SHA-384, producing a 48 byte digest.
    SHA384, imp::Sha384, imp::Digest, 48
);
define_algorithm!(
    /// SHA-512, producing a 64 byte digest.
    SHA512, imp::Sha512, imp::Digest, 64
);
define_algorithm!(
    /// SHA-512/224, producing a 28 byte digest.
    SHA512T224, imp::Sha512_224, imp::Digest, 28
);
define_algorithm!(
    /// SHA-512/256, producing a 32 byte digest.
    SHA512T256, imp::Sha512_256, imp::Digest, 32
);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::Algorithm;
    use super::*;

    fn test<A: Algorithm + Default>(input: &[u8], expected: &[u8]) {
        let actual = A::compute(input);
        assert_eq!(actual.len(), A::OUTPUT_LEN);
        assert_eq!(actual.as_bytes(), expected);
    }

    #[test]
    fn sha224() {
        test::<SHA224>(b"", base16!("d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"));
        test::<SHA224>(b"The quick brown fox jumps over the lazy dog", base16!("730e109bd7a8a32b1cb9d9a09aa2325d2430587ddbc0c38bad911525"));
    }

    #[test]
    fn sha256() {
        test::<SHA256>(b"", base16!("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"));
        test::<SHA256>(b"abc", base16!("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"));
        test::<SHA256>(b"The quick brown fox jumps over the lazy dog", base16!("d7a8fbb307d7809469ca9abcb0082e4f8d5651e46d3cdb762d02d0bf37c9e592"));
    }

    #[test]
    fn sha384() {
        test::<SHA384>(b"", base16!("38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da274edebfe76f65fbd51ad2f14898b95b"));
        test::<SHA384>(b"The quick brown fox jumps over the lazy dog", base16!("ca737f1014a48f4c0b6dd43cb177b0afd9e5169367544c494011e3317dbf9a509cb1e5dc1e85a941bbee3d7f2afbc9b1"));
    }

    #[test]
    fn sha512() {
        test::<SHA512>(b"", base16!("cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"));
        test::<SHA512>(b"The quick brown fox jumps over the lazy dog", base16!("07e547d9586f6a73f73fbac0435ed76951218fb7d0c8d788a309d785436bbb642e93a252a954f23912547d1e8a3b5ed6e1bfd7097821233fa0538f3db854fee6"));
    }

    #[test]
    fn sha512_t224() {
        test::<SHA512T224>(b"", base16!("6ed0dd02806fa89e25de060c19d3ac86cabb87d6a0ddd05c333b84f4"));
        test::<SHA512T224>(b"The quick brown fox jumps over the lazy dog", base16!("944cd2847fb54558d4775db0485a50003111c8e5daa63fe722c6aa37"));
    }

    #[test]
    fn sha512_t256() {
        test::<SHA512T256>(b"", base16!("c672b8d1ef56ed28ab87c3622c5114069bdd3ad7b8f9737498d0c01ecef0967a"));
        test::<SHA512T256>(b"The quick brown fox jumps over the lazy dog", base16!("dd9d67b371519c339ed8dbd25af90e976a1eeefd4ad3d889005e532fc5bef04d"));
    }

    #[test]
    fn names() {
        assert_eq!(SHA256::NAME, "SHA256");
        assert_eq!(SHA512T256::NAME, "SHA512T256");
    }
}
