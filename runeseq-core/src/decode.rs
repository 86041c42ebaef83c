//! Decoding raw encoded buffers into code points
//!
//! The byte tokenizer consumes a [`Decoder`] so that the decoding step can be
//! swapped out. [`Utf8Decoder`] is the default.

/// Decodes one code point at a time from an encoded buffer
pub trait Decoder {
    /// Decode the code point starting at `offset` in `buf`.
    ///
    /// Returns the code point and the number of bytes it occupies. `None`
    /// (or a zero width) means nothing could be decoded at `offset`, either
    /// because the input is malformed or because `offset` is at the end.
    fn decode_one(&self, buf: &[u8], offset: usize) -> Option<(char, usize)>;
}

/// Strict UTF-8 decoder
///
/// Rejects overlong encodings, surrogates, values above U+10FFFF and
/// sequences cut short by the end of the buffer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8Decoder;

impl Decoder for Utf8Decoder {
    fn decode_one(&self, buf: &[u8], offset: usize) -> Option<(char, usize)> {
        let lead = *buf.get(offset)?;
        let width = sequence_width(lead)?;
        let unit = buf.get(offset..offset.checked_add(width)?)?;
        let ch = std::str::from_utf8(unit).ok()?.chars().next()?;
        Some((ch, width))
    }
}

/// Width of the sequence announced by a UTF-8 lead byte.
fn sequence_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        // Continuation bytes, overlong leads and out-of-range leads
        _ => None,
    }
}

/// Iterator over the code points of a buffer that stops at the first
/// undecodable offset
#[derive(Debug)]
pub(crate) struct DecodeIter<'a, D: ?Sized> {
    decoder: &'a D,
    buf: &'a [u8],
    offset: usize,
}

impl<'a, D: Decoder + ?Sized> DecodeIter<'a, D> {
    pub(crate) fn new(decoder: &'a D, buf: &'a [u8]) -> Self {
        Self {
            decoder,
            buf,
            offset: 0,
        }
    }

    /// Offset where decoding stopped early, if it did.
    ///
    /// Only meaningful once the iterator has returned `None`.
    pub(crate) fn stopped_at(&self) -> Option<usize> {
        (self.offset < self.buf.len()).then_some(self.offset)
    }
}

impl<D: Decoder + ?Sized> Iterator for DecodeIter<'_, D> {
    type Item = char;

    fn next(&mut self) -> Option<char> {
        if self.offset >= self.buf.len() {
            return None;
        }
        match self.decoder.decode_one(self.buf, self.offset) {
            Some((ch, width)) if width > 0 => {
                self.offset += width;
                Some(ch)
            }
            _ => None,
        }
    }
}
