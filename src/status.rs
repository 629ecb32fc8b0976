use crate::config::Config;

/// Cached output of every block plus the last two joined status strings
pub struct StatusBar<'a> {
    config: &'a Config,
    statusbar: Vec<String>,
    /// current and previous status text
    statusstr: [String; 2],
}

impl<'a> StatusBar<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            statusbar: vec![String::new(); config.blocks.len()],
            statusstr: [String::new(), String::new()],
        }
    }

    /// Update every block due at `time`, or every block at all if `time` is
    /// `None`
    pub fn getcmds(&mut self, time: Option<u64>) {
        log::trace!("getcmds: {time:?}");
        for (i, current) in self.config.blocks.iter().enumerate() {
            if time.is_none_or(|t| current.is_due(t)) {
                log::debug!("updating block {i} at {time:?}");
                self.statusbar[i] = current.getcmd();
            }
        }
    }

    /// Update every block bound to `signal`
    pub fn getsigcmds(&mut self, signal: u32) {
        log::trace!("getsigcmds: {signal}");
        if signal == 0 {
            return;
        }
        for (i, current) in self.config.blocks.iter().enumerate() {
            if current.signal == signal {
                log::debug!("updating block {i} on signal {signal}");
                self.statusbar[i] = current.getcmd();
            }
        }
    }

    /// Join the block outputs and report whether the result differs from the
    /// last call. Blocks that rendered nothing are skipped so they don't
    /// leave doubled delimiters behind
    pub fn getstatus(&mut self) -> bool {
        let joined = self
            .statusbar
            .iter()
            .filter(|s| !s.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(self.config.delim.as_str());
        self.statusstr[1] = std::mem::replace(&mut self.statusstr[0], joined);
        self.statusstr[0] != self.statusstr[1]
    }

    /// The status text from the last [StatusBar::getstatus]
    pub fn text(&self) -> &str {
        &self.statusstr[0]
    }

    /// The cached output of each block, in table order
    pub fn outputs(&self) -> &[String] {
        &self.statusbar
    }
}
