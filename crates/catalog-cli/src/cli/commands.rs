use clap::{Args, Subcommand};

use crate::start::StartupOptions;

/// Default catalog source directory
pub const DEFAULT_SOURCE_DIR: &str = "catalog";

/// Default dev server port
pub const DEFAULT_PORT: u16 = 4000;

/// Default dev server host
pub const DEFAULT_HOST: &str = "localhost";

/// Available Catalog subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the catalog development server
    ///
    /// Detects the host project's framework, loads catalog.config.toml if
    /// present, prepares the catalog directory and serves it, then opens a
    /// browser tab.
    Start(StartArgs),
}

/// Arguments for the start command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct StartArgs {
    /// Directory containing the catalog sources
    ///
    /// Relative paths are resolved against the current directory.
    #[arg(value_name = "SOURCE_DIR", default_value = DEFAULT_SOURCE_DIR)]
    pub source_dir: String,

    /// Port on which the Catalog server runs
    ///
    /// If the port is taken, the next free port is used instead.
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Serve over HTTPS
    ///
    /// Requires webpack.devServer.https.cert and .key in the config file.
    #[arg(long)]
    pub https: bool,

    /// Host the server binds to and the browser opens
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Forward requests the catalog cannot answer to this URL
    ///
    /// Example: --proxy http://localhost:8080
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Use the local .babelrc file
    ///
    /// `--babelrc` forces it on, `--babelrc=false` or `--no-babelrc` forces it
    /// off. Without the flag the config file's `useBabelrc` decides, and
    /// without that the presence of a .babelrc file.
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub babelrc: Option<bool>,

    /// Ignore the local .babelrc file (same as --babelrc=false)
    #[arg(long, conflicts_with = "babelrc")]
    pub no_babelrc: bool,
}

impl StartArgs {
    /// The babelrc choice made on the command line, if any.
    pub fn babelrc_choice(&self) -> Option<bool> {
        if self.no_babelrc {
            Some(false)
        } else {
            self.babelrc
        }
    }
}

impl From<StartArgs> for StartupOptions {
    fn from(args: StartArgs) -> Self {
        let babelrc = args.babelrc_choice();
        Self {
            source_dir: args.source_dir,
            port: args.port,
            https: args.https,
            host: args.host,
            proxy: args.proxy,
            babelrc,
        }
    }
}
