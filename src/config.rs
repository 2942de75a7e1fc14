use anyhow::{Context, bail};
use std::path::PathBuf;

const USAGE: &str = "usage: staticd <webdir> [host [port]]";

/// Startup configuration: the document root plus the listen address.
///
/// The document root is resolved once here and threaded into the
/// connection handlers; request paths are only ever joined onto it.
#[derive(Clone, Debug)]
pub struct Config {
    pub root: PathBuf,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Builds a `Config` from positional arguments (program name excluded):
    /// required document root, optional host, optional port.
    pub fn from_args<I>(args: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let args: Vec<String> = args.into_iter().collect();
        if args.is_empty() || args.len() > 3 {
            bail!("{USAGE}");
        }

        let root = std::fs::canonicalize(&args[0])
            .with_context(|| format!("cannot access webdir {:?}", args[0]))?;
        if !root.is_dir() {
            bail!("webdir {:?} is not a directory", args[0]);
        }

        let host = args
            .get(1)
            .cloned()
            .unwrap_or_else(|| "127.0.0.1".to_string());

        let port = match args.get(2) {
            Some(p) => p
                .parse()
                .with_context(|| format!("invalid port {p:?}\n{USAGE}"))?,
            None => 8080,
        };

        Ok(Self { root, host, port })
    }
}
