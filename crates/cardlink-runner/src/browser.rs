use std::io;

/// Seam for the "open a new browsing context" side effect, so tests can
/// record opens instead of spawning a real browser.
pub trait Browser {
    fn open(&self, url: &str) -> io::Result<()>;
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBrowser;

impl Browser for SystemBrowser {
    fn open(&self, url: &str) -> io::Result<()> {
        open::that(url)
    }
}

/// Swallows every open. Used for dry runs where the schedule should be
/// observed without side effects.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullBrowser;

impl Browser for NullBrowser {
    fn open(&self, _url: &str) -> io::Result<()> {
        Ok(())
    }
}
