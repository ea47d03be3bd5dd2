//! Core utilities and shared types
//!
//! Output plumbing shared by the binary and the history commands.

use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Set to any value to print history straight to stdout
pub const NO_PAGER_ENV: &str = "NO_PAGER";

/// Whether long output should go through the pager
///
/// Only when stdout is a terminal and `NO_PAGER` is unset.
pub fn should_page() -> bool {
    std::env::var_os(NO_PAGER_ENV).is_none() && io::stdout().is_terminal()
}

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// adapts it to be compatible with Rust's standard I/O traits. This allows
/// using the pager as a drop-in replacement for stdout in `log` and `global-log`.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "Some long output...")?;
/// page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
