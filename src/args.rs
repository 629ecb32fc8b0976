use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(name = "rwmblocks")]
#[command(about = "modular status bar for rwm and dwm")]
pub struct Args {
    /// Print to stdout instead of setting the root window name
    #[arg(short = 'p')]
    pub stdout: bool,

    /// Text inserted between blocks, overriding the config
    #[arg(short = 'd', allow_hyphen_values = true)]
    pub delim: Option<String>,

    /// Config file to load instead of ~/.config/rwmblocks/config.lua
    #[arg(short = 'c')]
    pub config: Option<PathBuf>,

    /// Print version information and exit
    #[arg(short = 'v')]
    pub version: bool,
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;

    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        let argv = std::iter::once("rwmblocks").chain(args.iter().copied());
        Args::try_parse_from(argv)
    }

    #[test]
    fn empty() {
        assert_eq!(parse(&[]).unwrap(), Args::default());
    }

    #[test]
    fn all_flags() {
        let args = parse(&["-p", "-d", " | ", "-c", "/tmp/config.lua"]);
        assert_eq!(
            args.unwrap(),
            Args {
                stdout: true,
                delim: Some(" | ".into()),
                config: Some("/tmp/config.lua".into()),
                version: false,
            }
        );
    }

    #[test]
    fn version() {
        assert!(parse(&["-v"]).unwrap().version);
    }

    #[test]
    fn delim_values() {
        assert_eq!(parse(&["-d", ""]).unwrap().delim.as_deref(), Some(""));
        let args = parse(&["-d", " - "]).unwrap();
        assert_eq!(args.delim.as_deref(), Some(" - "));
        let args = parse(&["-d", "-"]).unwrap();
        assert_eq!(args.delim.as_deref(), Some("-"));
    }

    #[test]
    fn help() {
        let err = parse(&["-h"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn missing_value() {
        assert!(parse(&["-d"]).is_err());
        assert!(parse(&["-p", "-c"]).is_err());
    }

    #[test]
    fn unknown() {
        let err = parse(&["-x"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
