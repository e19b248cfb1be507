use std::io::{self, Bytes, Read};

use crate::config::NewlinePolicy;

const CR: u8 = b'\r';
const LF: u8 = b'\n';

/// Byte reader backing the `,` command.
///
/// CR LF is always delivered as a single LF. A lone CR is handled according
/// to the configured `NewlinePolicy`.
pub struct Input {
    bytes: Bytes<Box<dyn Read>>,
    /// Byte read ahead while looking for the LF of a CR LF pair.
    peeked: Option<u8>,
    policy: NewlinePolicy,
}

impl Input {
    pub fn new(reader: Box<dyn Read>, policy: NewlinePolicy) -> Self {
        Input {
            bytes: reader.bytes(),
            peeked: None,
            policy,
        }
    }

    /// Read the next byte, or `None` at end of stream.
    pub fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = match self.peeked.take() {
            Some(byte) => byte,
            None => match self.bytes.next().transpose()? {
                Some(byte) => byte,
                None => return Ok(None),
            },
        };

        if byte != CR {
            return Ok(Some(byte));
        }

        match self.bytes.next().transpose()? {
            Some(LF) => return Ok(Some(LF)),
            Some(other) => self.peeked = Some(other),
            None => {}
        }

        Ok(Some(match self.policy {
            NewlinePolicy::Normalize => LF,
            NewlinePolicy::Preserve => CR,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(data: &[u8], policy: NewlinePolicy) -> Vec<u8> {
        let mut input = Input::new(Box::new(Cursor::new(data.to_vec())), policy);
        let mut out = Vec::new();

        while let Some(byte) = input.read_byte().unwrap() {
            out.push(byte);
        }

        out
    }

    #[test]
    fn passes_plain_bytes_through() {
        assert_eq!(read_all(b"abc\n", NewlinePolicy::Normalize), b"abc\n");
    }

    #[test]
    fn crlf_becomes_lf() {
        assert_eq!(read_all(b"a\r\nb", NewlinePolicy::Normalize), b"a\nb");
        assert_eq!(read_all(b"a\r\nb", NewlinePolicy::Preserve), b"a\nb");
    }

    #[test]
    fn lone_cr_follows_policy() {
        assert_eq!(read_all(b"a\rb", NewlinePolicy::Normalize), b"a\nb");
        assert_eq!(read_all(b"a\rb", NewlinePolicy::Preserve), b"a\rb");
        assert_eq!(read_all(b"\r", NewlinePolicy::Normalize), b"\n");
        assert_eq!(read_all(b"\r", NewlinePolicy::Preserve), b"\r");
    }

    #[test]
    fn consecutive_crs_are_each_handled() {
        assert_eq!(read_all(b"\r\r\n", NewlinePolicy::Preserve), b"\r\n");
        assert_eq!(read_all(b"\r\r\n", NewlinePolicy::Normalize), b"\n\n");
    }

    #[test]
    fn end_of_stream_is_none() {
        let mut input = Input::new(Box::new(io::empty()), NewlinePolicy::default());
        assert_eq!(input.read_byte().unwrap(), None);
        assert_eq!(input.read_byte().unwrap(), None);
    }
}
