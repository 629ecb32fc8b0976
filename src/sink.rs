use std::{
    ffi::{CStr, CString},
    io::{self, Write},
    ptr::null,
};

use x11::xlib::{self, Display, Window};

/// Where the status text ends up
pub enum Sink {
    /// The root window name, which dwm and rwm draw in their bar
    Root(RootWindow),
    /// One line per status change, useful for debugging or other bars
    Stdout(io::Stdout),
}

impl Sink {
    pub fn stdout() -> Self {
        Self::Stdout(io::stdout())
    }

    pub fn writestatus(&mut self, status: &str) -> io::Result<()> {
        log::trace!("writestatus: {status}");
        match self {
            Sink::Root(root) => root.setroot(status),
            Sink::Stdout(stdout) => {
                let mut lock = stdout.lock();
                writeln!(lock, "{status}")?;
                lock.flush()
            }
        }
    }
}

pub struct RootWindow {
    dpy: *mut Display,
    root: Window,
}

impl RootWindow {
    /// Open the default display. Returns `None` if it can't be opened
    pub fn open() -> Option<Self> {
        Self::open_display(None)
    }

    /// Open the display called `name`, or `$DISPLAY` if `name` is `None`
    pub fn open_display(name: Option<&CStr>) -> Option<Self> {
        unsafe {
            let dpy = xlib::XOpenDisplay(name.map_or(null(), CStr::as_ptr));
            if dpy.is_null() {
                return None;
            }
            let screen = xlib::XDefaultScreen(dpy);
            let root = xlib::XRootWindow(dpy, screen);
            Some(Self { dpy, root })
        }
    }

    fn setroot(&mut self, status: &str) -> io::Result<()> {
        let s = CString::new(status)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        unsafe {
            xlib::XStoreName(self.dpy, self.root, s.as_ptr());
            xlib::XFlush(self.dpy);
        }
        Ok(())
    }
}

impl Drop for RootWindow {
    fn drop(&mut self) {
        unsafe {
            xlib::XCloseDisplay(self.dpy);
        }
    }
}
