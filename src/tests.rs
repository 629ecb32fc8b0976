use std::time::{Duration, Instant};

use super::*;
use crate::config::{Block, Delim};

fn scenario() -> Config {
    Config {
        blocks: vec![
            Block::new("", "echo A", 30, 0),
            Block::new("", "echo B", 5, 0),
            Block::new("", "echo never", 0, 0),
            Block::new("", "echo sig", 600, 9),
        ],
        delim: Delim::new(" | "),
    }
}

/// Record which blocks the timer updates during the first minute
#[test]
fn minute_of_ticks() {
    let config = scenario();
    let mut updates = vec![Vec::new(); config.blocks.len()];
    for t in 1..=60 {
        for (i, block) in config.blocks.iter().enumerate() {
            if block.is_due(t) {
                updates[i].push(t);
            }
        }
    }
    assert_eq!(updates[0], [30, 60]);
    assert_eq!(updates[1], (1..=12).map(|n| n * 5).collect::<Vec<_>>());
    assert!(updates[2].is_empty());
    assert!(updates[3].is_empty());
}

#[test]
fn forced_then_signal() {
    let config = scenario();
    let mut bar = StatusBar::new(&config);

    bar.getcmds(Some(5));
    assert!(bar.getstatus());
    assert_eq!(bar.text(), "B");

    bar.getsigcmds(9);
    assert!(bar.getstatus());
    assert_eq!(bar.text(), "B | sig");

    bar.getcmds(None);
    assert!(bar.getstatus());
    insta::assert_snapshot!(bar.text(), @"A | B | never | sig");
}

#[test]
fn config_file_to_status() {
    let config = Config::from_lua(
        r#"
        return {
            delim = " :: ",
            blocks = {
                { icon = "x=", command = "echo 1" },
                { icon = "y=", command = "echo $((1 + 1))", interval = 2 },
            },
        }
        "#,
    )
    .unwrap();
    let mut bar = StatusBar::new(&config);
    bar.getcmds(None);
    bar.getstatus();
    assert_eq!(bar.text(), "x=1 :: y=2");
}

#[test]
fn statusloop_exits_on_term() {
    let config = Config {
        blocks: vec![Block::new("", "true", 1, 0)],
        delim: Delim::new(""),
    };
    let signals = Signals::setupsignals(&config.blocks).unwrap();
    unsafe {
        libc::raise(libc::SIGTERM);
    }
    let start = Instant::now();
    let mut sink = sink::Sink::stdout();
    statusloop(&config, &signals, &mut sink).unwrap();
    assert!(start.elapsed() < Duration::from_secs(5));
}
