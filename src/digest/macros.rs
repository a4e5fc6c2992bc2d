
macro_rules! define_algorithm {
    ($(#[$attr:meta])* $algorithm:ident, $inner:ty, $contract:path, $size:expr) => {
        $(#[$attr])*
        #[derive(Clone, Default)]
        pub struct $algorithm($inner);

        impl $algorithm {
            pub fn new() -> Self {
                $algorithm(<$inner as $contract>::new())
            }
        }

        impl ::std::fmt::Debug for $algorithm {
            fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
                f.debug_struct(stringify!($algorithm)).finish_non_exhaustive()
            }
        }

        impl $crate::digest::Algorithm for $algorithm {
            const NAME: &'static str = stringify!($algorithm);
            const OUTPUT_LEN: usize = $size;

            fn append(&mut self, input: &[u8]) {
                <$inner as $contract>::update(&mut self.0, input);
            }

            fn finish(self) -> Vec<u8> {
                <$inner as $contract>::finalize(self.0).to_vec()
            }
        }
    }
}
