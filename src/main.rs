//! modular status bar for rwm and dwm

use clap::Parser;
use rwmblocks::args::Args;
use rwmblocks::config::Config;
use rwmblocks::signals::Signals;
use rwmblocks::sink::{RootWindow, Sink};
use rwmblocks::statusloop;
use rwmblocks::util::die;

fn main() {
    env_logger::init();

    let args = Args::parse();
    if args.version {
        println!("rwmblocks-{}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let config = match &args.config {
        Some(path) => Config::load(path),
        None => Config::load_home(),
    };
    let mut config = match config {
        Ok(config) => config,
        Err(e) => die(&format!("rwmblocks: {e}")),
    };
    if let Some(delim) = args.delim {
        config.set_delim(delim);
    }

    let Ok(signals) = Signals::setupsignals(&config.blocks) else {
        die("rwmblocks: failed to set up signals");
    };

    let mut sink = if args.stdout {
        Sink::stdout()
    } else {
        let Some(root) = RootWindow::open() else {
            die("rwmblocks: cannot open display");
        };
        Sink::Root(root)
    };

    if let Err(e) = statusloop(&config, &signals, &mut sink) {
        die(&format!("rwmblocks: {e}"));
    }
}
