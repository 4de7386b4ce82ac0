//! Writing to a raw file descriptor

use std::io;
use std::os::fd::BorrowedFd;

/// `io::Write` over a borrowed descriptor, one `write(2)` per call
///
/// Nothing is buffered, so `flush` is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct FdWriter<'fd> {
    fd: BorrowedFd<'fd>,
}

impl<'fd> FdWriter<'fd> {
    /// Wrap a borrowed descriptor
    pub fn new(fd: BorrowedFd<'fd>) -> Self {
        Self { fd }
    }
}

impl io::Write for FdWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        nix::unistd::write(self.fd, buf).map_err(io::Error::from)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Seek, Write};
    use std::os::fd::AsFd;

    #[test]
    fn test_fd_writer_writes_through() {
        let mut file = tempfile::tempfile().unwrap();
        {
            let mut writer = FdWriter::new(file.as_fd());
            assert_eq!(writer.write(b"abc").unwrap(), 3);
            writer.flush().unwrap();
        }
        file.rewind().unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "abc");
    }
}
