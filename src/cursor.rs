use std::io::{Error, Read};

/// Forward-only reader that counts the bytes it has handed out.
///
/// This is the only I/O primitive the parsers need: no seeking, just
/// sequential reads. The wrapped source can be owned or borrowed, since
/// `&mut R` is also `Read`.
#[derive(Debug)]
pub struct ByteCursor<R: Read> {
    inner: R,
    position: u64,
}

impl<R: Read> ByteCursor<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Count of bytes consumed since the cursor was created.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Unwrap the inner reader.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for ByteCursor<R> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let n = self.inner.read(buf)?;
        self.position += n as u64;
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_position_tracks_reads() {
        let mut c = ByteCursor::new(Cursor::new(vec![1u8, 2, 3, 4, 5]));
        let mut buf = [0u8; 3];
        c.read_exact(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(c.position(), 3);

        let mut rest = vec![];
        c.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, vec![4, 5]);
        assert_eq!(c.position(), 5);
    }

    #[test]
    fn test_borrowed_source() {
        let mut source = Cursor::new(vec![9u8; 4]);
        {
            let mut c = ByteCursor::new(&mut source);
            let mut buf = [0u8; 2];
            c.read_exact(&mut buf).unwrap();
        }
        assert_eq!(source.position(), 2);
    }

    #[test]
    fn test_into_inner_keeps_place() {
        let mut c = ByteCursor::new(Cursor::new(vec![1u8, 2, 3, 4]));
        let mut buf = [0u8; 3];
        c.read_exact(&mut buf).unwrap();
        assert_eq!(c.get_ref().position(), c.position());

        let mut inner = c.into_inner();
        assert_eq!(inner.position(), 3);
        let mut rest = vec![];
        inner.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, vec![4]);
    }
}
