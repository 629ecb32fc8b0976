//! modular status bar based on dwmblocks

use std::{
    io,
    time::{Duration, Instant},
};

use config::Config;
use signals::{Event, Signals};
use sink::Sink;
use status::StatusBar;

pub mod args;
pub mod block;
pub mod config;
pub mod signals;
pub mod sink;
pub mod status;
pub mod util;

#[cfg(test)]
mod tests;

/// Length of one timer tick
pub const TICK: Duration = Duration::from_secs(1);

/// Only write the status if it has changed
fn writestatus(bar: &mut StatusBar, sink: &mut Sink) {
    if !bar.getstatus() {
        return;
    }
    if let Err(e) = sink.writestatus(bar.text()) {
        log::warn!("failed to write status: {e}");
    }
}

/// Run every block once, then update blocks on their intervals and signals
/// until SIGTERM or SIGINT is received
pub fn statusloop(
    config: &Config,
    signals: &Signals,
    sink: &mut Sink,
) -> io::Result<()> {
    let mut bar = StatusBar::new(config);
    bar.getcmds(None);
    writestatus(&mut bar, sink);

    let mut time: u64 = 0;
    let mut next = Instant::now() + TICK;
    loop {
        let now = Instant::now();
        if now >= next {
            time += 1;
            bar.getcmds(Some(time));
            writestatus(&mut bar, sink);
            next += TICK;
            // slow commands can push us more than a tick behind; don't try to
            // catch up
            if next <= now {
                next = now + TICK;
            }
            continue;
        }

        match signals.wait(next - now)? {
            Some(Event::Term) => {
                log::info!("exiting");
                return Ok(());
            }
            Some(Event::Refresh) => bar.getcmds(None),
            Some(Event::Block(signal)) => bar.getsigcmds(signal),
            None => continue,
        }
        writestatus(&mut bar, sink);
    }
}
