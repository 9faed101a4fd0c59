//! Line-based terminal console.

use std::io::{self, BufRead, IsTerminal, StdinLock, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{self, Clear, ClearType},
};
use runtime::{Console, RuntimeError};

use crate::CliConfig;

const PAUSE_HINT: &str = "Press any key to continue...";

/// [`Console`] over a line reader and a writer.
///
/// Screen clearing and key-press waits are off unless explicitly enabled;
/// [`StdConsole::stdio`] enables them only when both stdin and stdout are
/// terminals.
pub struct StdConsole<R, W> {
    reader: R,
    writer: W,
    clear_screen: bool,
    pause: bool,
}

impl StdConsole<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio(config: &CliConfig) -> Self {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();
        tracing::debug!(interactive, "terminal console created");

        Self::new(io::stdin().lock(), io::stdout())
            .with_clear_screen(config.clear_screen && interactive)
            .with_pause(config.pause && interactive)
    }
}

impl<R: BufRead, W: Write> StdConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            clear_screen: false,
            pause: false,
        }
    }

    #[must_use]
    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    #[must_use]
    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Console for StdConsole<R, W> {
    fn write_line(&mut self, line: &str) -> runtime::Result<()> {
        writeln!(self.writer, "{line}")?;
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> runtime::Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(RuntimeError::InputClosed);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(trimmed.to_owned())
    }

    fn clear(&mut self) -> runtime::Result<()> {
        if self.clear_screen {
            execute!(self.writer, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        Ok(())
    }

    fn pause(&mut self) -> runtime::Result<()> {
        if !self.pause {
            return Ok(());
        }

        write!(self.writer, "{PAUSE_HINT}")?;
        self.writer.flush()?;
        wait_for_key()?;
        writeln!(self.writer)?;
        Ok(())
    }
}

/// Restores cooked mode even if reading the key fails.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to disable raw mode: {}", e);
        }
    }
}

fn wait_for_key() -> io::Result<()> {
    let _guard = RawModeGuard::enable()?;

    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}
