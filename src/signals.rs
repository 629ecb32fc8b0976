//! Signals are blocked for the whole process and collected synchronously with
//! `sigtimedwait` from the main loop, so no work happens in a signal handler

use std::{io, mem::MaybeUninit, ptr::null_mut, time::Duration};

use libc::{SIG_BLOCK, SIGINT, SIGRTMIN, SIGTERM, SIGUSR1, c_int, sigset_t};

use crate::config::Block;

/// Something the runner was asked to do by a signal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    /// SIGTERM or SIGINT
    Term,
    /// SIGUSR1, update all blocks
    Refresh,
    /// `SIGRTMIN + n`, update blocks bound to `n`
    Block(u32),
}

pub struct Signals {
    set: sigset_t,
}

impl Signals {
    /// Block the termination and refresh signals plus `SIGRTMIN + n` for
    /// every block bound to a signal `n`
    pub fn setupsignals(blocks: &[Block]) -> io::Result<Self> {
        let rt = blocks.iter().filter(|b| b.signal > 0).map(|b| {
            c_int::try_from(b.signal)
                .ok()
                .and_then(|s| SIGRTMIN().checked_add(s))
                .ok_or_else(|| invalid_signal(b.signal))
        });
        let mut signums = vec![SIGTERM, SIGINT, SIGUSR1];
        for signum in rt {
            signums.push(signum?);
        }
        Self::block(&signums)
    }

    fn block(signums: &[c_int]) -> io::Result<Self> {
        let mut set = MaybeUninit::<sigset_t>::uninit();
        unsafe {
            libc::sigemptyset(set.as_mut_ptr());
            for &signum in signums {
                log::trace!("setupsignals: blocking {signum}");
                if libc::sigaddset(set.as_mut_ptr(), signum) != 0 {
                    return Err(io::Error::last_os_error());
                }
            }
            let set = set.assume_init();
            let ret = libc::pthread_sigmask(SIG_BLOCK, &set, null_mut());
            if ret != 0 {
                return Err(io::Error::from_raw_os_error(ret));
            }
            Ok(Self { set })
        }
    }

    /// Wait up to `timeout` for one of the blocked signals. Returns `None` on
    /// timeout or if the wait was interrupted
    pub fn wait(&self, timeout: Duration) -> io::Result<Option<Event>> {
        let ts = libc::timespec {
            tv_sec: timeout.as_secs() as libc::time_t,
            tv_nsec: timeout.subsec_nanos() as libc::c_long,
        };
        let signum =
            unsafe { libc::sigtimedwait(&self.set, null_mut(), &ts) };
        if signum < 0 {
            let err = io::Error::last_os_error();
            return match err.raw_os_error() {
                Some(libc::EAGAIN) | Some(libc::EINTR) => Ok(None),
                _ => Err(err),
            };
        }
        log::debug!("received signal {signum}");
        Ok(Some(match signum {
            SIGTERM | SIGINT => Event::Term,
            SIGUSR1 => Event::Refresh,
            s => Event::Block((s - SIGRTMIN()) as u32),
        }))
    }
}

fn invalid_signal(signal: u32) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("signal {signal} is out of range"),
    )
}
