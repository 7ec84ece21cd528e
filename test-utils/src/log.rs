//! Captured `tracing` output for asserting on log events.

use std::{
    io,
    sync::{Arc, Mutex, MutexGuard},
};

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::fmt::MakeWriter;

/// In-memory sink for formatted log lines.
///
/// The subscriber installed by [`LogCapture::install`] is the thread default only, so
/// tests must run on a current-thread runtime (the `#[tokio::test]` default).
#[derive(Clone, Default)]
pub struct LogCapture {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Installs a `WARN` and above capturing subscriber for the current thread.
    ///
    /// # Returns
    /// - `LogCapture` - Handle for reading captured output
    /// - `DefaultGuard` - Restores the previous subscriber when dropped
    pub fn install() -> (Self, DefaultGuard) {
        let capture = Self::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(capture.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);

        (capture, guard)
    }

    /// Returns everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.lock()).into_owned()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        self.buffer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Holds the buffer lock for one formatted event.
pub struct CaptureWriter<'a> {
    guard: MutexGuard<'a, Vec<u8>>,
}

impl io::Write for CaptureWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.guard.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = CaptureWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        CaptureWriter { guard: self.lock() }
    }
}
