use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::{DecodeError, Engine as _};

/// Base64 alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// `+` and `/` (RFC 4648 §4).
    #[default]
    Standard,
    /// `-` and `_` (RFC 4648 §5).
    UrlSafe,
}

/// Maximum number of characters per line when wrapping base64 output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineLength {
    Chars64,
    Chars76,
}

impl LineLength {
    pub fn chars(self) -> usize {
        match self {
            LineLength::Chars64 => 64,
            LineLength::Chars76 => 76,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEnding {
    CarriageReturn,
    LineFeed,
    CarriageReturnLineFeed,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::CarriageReturn => "\r",
            LineEnding::LineFeed => "\n",
            LineEnding::CarriageReturnLineFeed => "\r\n",
        }
    }
}

/// Options for base64 output of a [`Digest`](super::Digest).
///
/// The default is the standard padded alphabet on a single line. Line endings only take effect when
/// a line length is set; wrapped output without an explicit ending uses CRLF. The last line is never
/// terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Base64Options {
    alphabet: Alphabet,
    line_length: Option<LineLength>,
    line_ending: Option<LineEnding>,
}

impl Base64Options {
    pub const fn new() -> Self {
        Base64Options { alphabet: Alphabet::Standard, line_length: None, line_ending: None }
    }

    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }

    pub fn line_length(mut self, line_length: LineLength) -> Self {
        self.line_length = Some(line_length);
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = Some(line_ending);
        self
    }

    pub(crate) fn encode(&self, bytes: &[u8]) -> String {
        let encoded = match self.alphabet {
            Alphabet::Standard => STANDARD.encode(bytes),
            Alphabet::UrlSafe => URL_SAFE.encode(bytes),
        };
        let width = match self.line_length {
            None => return encoded,
            Some(line_length) => line_length.chars(),
        };
        let ending = self.line_ending.unwrap_or(LineEnding::CarriageReturnLineFeed).as_str();

        // Output is ASCII, so chars and bytes line up.
        let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / width * ending.len());
        for (i, c) in encoded.chars().enumerate() {
            if i > 0 && i % width == 0 {
                wrapped.push_str(ending);
            }
            wrapped.push(c);
        }
        wrapped
    }

    /// Decodes `input` in this alphabet, ignoring line breaks.
    pub(crate) fn decode(&self, input: &str) -> Result<Vec<u8>, DecodeError> {
        let joined: String = input.chars().filter(|&c| c != '\r' && c != '\n').collect();
        match self.alphabet {
            Alphabet::Standard => STANDARD.decode(joined),
            Alphabet::UrlSafe => URL_SAFE.decode(joined),
        }
    }
}
