use std::io::{stdout, BufWriter};
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use crossterm::{cursor, event, terminal, ExecutableCommand};
use rand::thread_rng;

use lane_runner::app::App;
use lane_runner::console::TerminalConsole;

fn main() -> Result<()> {
    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter the alternate screen")?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<event::Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = {
        let mut console = TerminalConsole::new(&mut out, rx);
        App::new(thread_rng()).run(&mut console)
    };

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("game terminated with a terminal error")
}
