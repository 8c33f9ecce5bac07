use crate::serial_service::SerialError;
use serialport::SerialPort;
use std::io::{self, ErrorKind, Read};

/// A byte stream that can report how many bytes are waiting without blocking.
pub trait ByteSource: Read {
    fn bytes_available(&mut self) -> io::Result<usize>;
}

impl ByteSource for Box<dyn SerialPort> {
    fn bytes_available(&mut self) -> io::Result<usize> {
        Ok(self.bytes_to_read()? as usize)
    }
}

/// Cuts a raw, unframed byte stream into fixed-size frames of `N` bytes.
///
/// Bytes received before a timeout are kept, so a frame split across two
/// reads is still delivered whole and in order.
pub struct FrameReader<S, const N: usize> {
    source: S,
    buf: [u8; N],
    filled: usize,
}

impl<S: Read, const N: usize> FrameReader<S, N> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            buf: [0; N],
            filled: 0,
        }
    }

    /// Bytes of the next frame received so far.
    pub fn pending(&self) -> usize {
        self.filled
    }

    pub fn into_inner(self) -> S {
        self.source
    }

    /// Blocks until a full frame is available. Read timeouts just retry.
    pub fn next_frame(&mut self) -> Result<[u8; N], SerialError> {
        loop {
            if let Some(frame) = self.take_frame() {
                return Ok(frame);
            }
            match self.source.read(&mut self.buf[self.filled..]) {
                Ok(0) => return Err(SerialError::Disconnected),
                Ok(n) => self.filled += n,
                Err(e) if is_retryable(e.kind()) => {
                    log::trace!("read timed out with {} of {N} bytes pending", self.filled);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Endless stream of frames; stop at the first `Err`.
    pub fn frames(&mut self) -> impl Iterator<Item = Result<[u8; N], SerialError>> + '_ {
        std::iter::from_fn(move || Some(self.next_frame()))
    }

    fn take_frame(&mut self) -> Option<[u8; N]> {
        if self.filled < N {
            return None;
        }
        self.filled = 0;
        log::trace!("frame {:02X?}", self.buf);
        Some(self.buf)
    }
}

impl<S: ByteSource, const N: usize> FrameReader<S, N> {
    /// Reads only what is already waiting. Returns a frame once `N` bytes
    /// are buffered, `None` otherwise.
    pub fn poll_frame(&mut self) -> Result<Option<[u8; N]>, SerialError> {
        let want = self.source.bytes_available()?.min(N - self.filled);
        if want > 0 {
            let end = self.filled + want;
            match self.source.read(&mut self.buf[self.filled..end]) {
                Ok(0) => return Err(SerialError::Disconnected),
                Ok(n) => self.filled += n,
                Err(e) if is_retryable(e.kind()) => {}
                Err(e) => return Err(e.into()),
            }
        }
        Ok(self.take_frame())
    }
}

fn is_retryable(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::TimedOut | ErrorKind::WouldBlock | ErrorKind::Interrupted
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    enum Step {
        Data(Vec<u8>),
        Timeout,
        Fail(ErrorKind),
    }

    /// Replays a fixed script of reads; runs dry as end of stream.
    struct Scripted(VecDeque<Step>);

    impl Scripted {
        fn new(steps: Vec<Step>) -> Self {
            Self(steps.into())
        }
    }

    impl Read for Scripted {
        fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
            match self.0.pop_front() {
                None => Ok(0),
                Some(Step::Timeout) => Err(ErrorKind::TimedOut.into()),
                Some(Step::Fail(kind)) => Err(kind.into()),
                Some(Step::Data(mut bytes)) => {
                    let n = bytes.len().min(out.len());
                    out[..n].copy_from_slice(&bytes[..n]);
                    if n < bytes.len() {
                        self.0.push_front(Step::Data(bytes.split_off(n)));
                    }
                    Ok(n)
                }
            }
        }
    }

    impl ByteSource for Scripted {
        fn bytes_available(&mut self) -> io::Result<usize> {
            match self.0.front() {
                Some(Step::Data(bytes)) => Ok(bytes.len()),
                Some(Step::Timeout) => {
                    self.0.pop_front();
                    Ok(0)
                }
                Some(Step::Fail(kind)) => Err((*kind).into()),
                None => Ok(0),
            }
        }
    }

    #[test]
    fn frames_split_across_timeouts_stay_aligned() {
        let src = Scripted::new(vec![
            Step::Data(vec![1, 2]),
            Step::Timeout,
            Step::Data(vec![3, 4, 5, 6, 7]),
            Step::Timeout,
            Step::Timeout,
            Step::Data(vec![8, 9, 10, 11, 12]),
        ]);
        let mut reader = FrameReader::<_, 6>::new(src);
        assert_eq!(reader.next_frame().unwrap(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(reader.next_frame().unwrap(), [7, 8, 9, 10, 11, 12]);
        assert!(matches!(reader.next_frame(), Err(SerialError::Disconnected)));
    }

    #[test]
    fn io_errors_propagate() {
        let src = Scripted::new(vec![Step::Data(vec![1]), Step::Fail(ErrorKind::BrokenPipe)]);
        let mut reader = FrameReader::<_, 2>::new(src);
        match reader.next_frame() {
            Err(SerialError::Io(e)) => assert_eq!(e.kind(), ErrorKind::BrokenPipe),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn frames_iterator() {
        let src = Scripted::new(vec![Step::Data(vec![0x34, 0x12, 0xFF, 0xFF, 0x00])]);
        let mut reader = FrameReader::<_, 2>::new(src);
        let got: Vec<_> = reader.frames().take(2).collect::<Result<_, _>>().unwrap();
        assert_eq!(got, vec![[0x34, 0x12], [0xFF, 0xFF]]);
        assert_eq!(reader.pending(), 0);
        assert!(reader.next_frame().is_err());
        assert_eq!(reader.pending(), 1);
    }

    #[test]
    fn poll_waits_for_a_full_frame() {
        let src = Scripted::new(vec![
            Step::Data(vec![0x00, 0x01, 0x00]),
            Step::Timeout,
            Step::Data(vec![0x00, 0xFF, 0xFF, 0xAA]),
        ]);
        let mut reader = FrameReader::<_, 6>::new(src);
        assert_eq!(reader.poll_frame().unwrap(), None);
        assert_eq!(reader.pending(), 3);
        assert_eq!(reader.poll_frame().unwrap(), None);
        assert_eq!(
            reader.poll_frame().unwrap(),
            Some([0x00, 0x01, 0x00, 0x00, 0xFF, 0xFF])
        );
        assert_eq!(reader.pending(), 0);
        assert_eq!(reader.poll_frame().unwrap(), None);
        assert_eq!(reader.pending(), 1);
        // nothing left waiting
        assert_eq!(reader.poll_frame().unwrap(), None);
    }

    #[test]
    fn poll_propagates_device_errors() {
        let src = Scripted::new(vec![Step::Fail(ErrorKind::NotFound)]);
        let mut reader = FrameReader::<_, 6>::new(src);
        assert!(matches!(reader.poll_frame(), Err(SerialError::Io(_))));
    }
}
