//! Terminal share capability.

use std::io::Write;
use std::sync::Mutex;

use rallycal_core::calendar::{ShareCapability, ShareError, SharePayload};

/// Shares by writing the payload to a writer (stdout in the CLI).
pub struct WriterShare<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> WriterShare<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W, ShareError> {
        self.out
            .into_inner()
            .map_err(|_| ShareError::Failed("share writer poisoned".to_string()))
    }
}

impl<W: Write> ShareCapability for WriterShare<W> {
    fn share(&self, payload: &SharePayload) -> Result<(), ShareError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ShareError::Failed("share writer poisoned".to_string()))?;

        let mut write = || -> std::io::Result<()> {
            writeln!(out, "{}", payload.title)?;
            writeln!(out)?;
            writeln!(out, "{}", payload.text)?;
            if let Some(url) = &payload.url {
                writeln!(out)?;
                writeln!(out, "{url}")?;
            }
            out.flush()
        };

        write().map_err(|e| ShareError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(url: Option<&str>) -> SharePayload {
        SharePayload {
            title: "집회 일정 - 밤샘 집회".to_string(),
            text: "[집회 알림] 밤샘 집회".to_string(),
            url: url.map(str::to_string),
        }
    }

    #[test]
    fn test_writer_share() {
        let share = WriterShare::new(Vec::new());
        share.share(&payload(None)).unwrap();

        let written = String::from_utf8(share.into_inner().unwrap()).unwrap();
        assert_eq!(written, "집회 일정 - 밤샘 집회\n\n[집회 알림] 밤샘 집회\n");
    }

    #[test]
    fn test_writer_share_with_url() {
        let share = WriterShare::new(Vec::new());
        share
            .share(&payload(Some("https://example.org/cal")))
            .unwrap();

        let written = String::from_utf8(share.into_inner().unwrap()).unwrap();
        assert!(written.ends_with("\n\nhttps://example.org/cal\n"));
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_share_reports_io_failure() {
        let err = WriterShare::new(Closed).share(&payload(None)).unwrap_err();
        assert_eq!(err, ShareError::Failed("closed".to_string()));
    }
}
