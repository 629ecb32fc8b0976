use std::{borrow::Cow, process::Command};

/// Maximum length in bytes of a single rendered block, icon included
pub const CMDLENGTH: usize = 50;

/// One segment of the status bar
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Block {
    #[serde(default)]
    pub icon: Cow<'static, str>,
    /// Passed to `sh -c`, so environment variables like `$HOME` are expanded
    /// by the shell
    pub command: Cow<'static, str>,
    /// Seconds between updates. 0 means the timer never updates this block
    #[serde(default)]
    pub interval: u32,
    /// Update on `SIGRTMIN + signal`. 0 means no signal
    #[serde(default)]
    pub signal: u32,
}

impl Block {
    pub const fn new(
        icon: &'static str,
        command: &'static str,
        interval: u32,
        signal: u32,
    ) -> Self {
        Self {
            icon: Cow::Borrowed(icon),
            command: Cow::Borrowed(command),
            interval,
            signal,
        }
    }

    /// Whether the timer should update this block at `time` seconds after
    /// startup
    pub fn is_due(&self, time: u64) -> bool {
        self.interval != 0 && time % self.interval as u64 == 0
    }

    /// Check that the block can actually be run, with `max_signal` being the
    /// largest signal offset the runner can bind
    pub fn validate(&self, max_signal: u32) -> Result<(), String> {
        if self.command.trim().is_empty() {
            return Err("empty command".into());
        }
        if self.signal > max_signal {
            return Err(format!(
                "signal {} is out of range (max {max_signal})",
                self.signal
            ));
        }
        Ok(())
    }

    /// Run the command and return the icon followed by the first line of its
    /// output
    pub fn getcmd(&self) -> String {
        log::trace!("getcmd: {}", self.command);
        let mut cmd = Command::new("sh");
        let out = match cmd.arg("-c").arg(&*self.command).output() {
            Ok(output) => output,
            Err(e) => {
                log::warn!("command `{}` failed with `{e}`", self.command);
                return String::new();
            }
        };
        if !out.status.success() {
            log::debug!(
                "command `{}` exited with {}",
                self.command,
                out.status
            );
        }
        let stdout = String::from_utf8_lossy(&out.stdout);
        let line = stdout.lines().next().unwrap_or("");

        let mut output = String::with_capacity(CMDLENGTH);
        output.extend(
            self.icon.chars().chain(line.chars()).filter(|&c| c != '\0'),
        );
        truncate(&mut output, CMDLENGTH);
        output
    }
}

/// Truncate `s` to at most `max` bytes without splitting a character
fn truncate(s: &mut String, max: usize) {
    if s.len() <= max {
        return;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
