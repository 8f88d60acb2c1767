//! Command-line argument parsing.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chipflow_types::Rect;

pub const USAGE: &str = "usage: chipflow <layout.toml|layout.json> [--width W] [--query X Y W H]";

/// Parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub layout: PathBuf,
    /// Overrides the content width from the layout file.
    pub width: Option<f32>,
    /// Only report placements intersecting this region.
    pub query: Option<Rect>,
}

fn number(flag: &str, value: Option<String>) -> Result<f32> {
    let value = value.with_context(|| format!("{flag} needs a value\n{USAGE}"))?;
    value
        .parse()
        .with_context(|| format!("{flag}: not a number: {value}"))
}

impl Args {
    /// Parse the arguments after the program name. Returns `None` when help
    /// was requested.
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Option<Self>> {
        let mut args = args.into_iter();
        let mut layout = None;
        let mut width = None;
        let mut query = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--width" => width = Some(number("--width", args.next())?),
                "--query" => {
                    let x = number("--query", args.next())?;
                    let y = number("--query", args.next())?;
                    let w = number("--query", args.next())?;
                    let h = number("--query", args.next())?;
                    query = Some(Rect::new(x, y, w, h));
                },
                "-h" | "--help" => return Ok(None),
                flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
                path => {
                    if layout.is_some() {
                        bail!("unexpected argument {path}\n{USAGE}");
                    }
                    layout = Some(PathBuf::from(path));
                },
            }
        }

        Ok(Some(Self {
            layout: layout.with_context(|| format!("missing layout file\n{USAGE}"))?,
            width,
            query,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args> {
        Args::parse(args.iter().map(|s| s.to_string()))
            .map(|parsed| parsed.expect("help was not requested"))
    }

    #[test]
    fn layout_only() {
        let a = parse(&["chips.toml"]).unwrap();
        assert_eq!(a.layout, PathBuf::from("chips.toml"));
        assert_eq!(a.width, None);
        assert_eq!(a.query, None);
    }

    #[test]
    fn width_and_query() {
        let a = parse(&["--width", "150", "chips.toml", "--query", "0", "10", "150", "40"]).unwrap();
        assert_eq!(a.width, Some(150.0));
        assert_eq!(a.query, Some(Rect::new(0.0, 10.0, 150.0, 40.0)));
    }

    #[test]
    fn missing_layout() {
        let err = parse(&["--width", "10"]).unwrap_err();
        assert!(format!("{err}").contains("missing layout file"));
    }

    #[test]
    fn bad_number() {
        let err = parse(&["a.toml", "--width", "wide"]).unwrap_err();
        assert!(format!("{err:#}").contains("not a number"));
    }

    #[test]
    fn short_query() {
        assert!(parse(&["a.toml", "--query", "1", "2"]).is_err());
    }

    #[test]
    fn unknown_flag() {
        assert!(parse(&["a.toml", "--verbose"]).is_err());
    }

    #[test]
    fn help_is_not_an_error() {
        for flag in ["-h", "--help"] {
            let parsed = Args::parse([flag.to_string()]).unwrap();
            assert_eq!(parsed, None);
        }
        let parsed = Args::parse(["a.toml".to_string(), "--help".to_string()]).unwrap();
        assert_eq!(parsed, None);
    }
}
