use clap::{value_t, App, Arg, ArgMatches};
use log::{info, LevelFilter};
use std::default;

#[derive(Debug, Clone, PartialEq)]
pub struct CliConfig {
    pub width: u32,
    pub height: u32,
    pub blocks: u32,
    pub walkers: u32,
    pub pillars: u32,
    pub seed: Option<u64>,
    pub verbosity: u64,
}

impl CliConfig {
    pub fn new() -> Self {
        Self::from_matches(&Self::app().get_matches())
    }

    /// Parses an explicit argument list (first item is the program name).
    pub fn from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::app().get_matches_from_safe(args)?;
        Self::try_from_matches(&matches)
    }

    fn app() -> App<'static, 'static> {
        let version = env!("CARGO_PKG_VERSION");
        let authors = env!("CARGO_PKG_AUTHORS");

        App::new("J*Man")
            .version(version)
            .author(authors)
            .arg(
                Arg::with_name("WIDTH")
                    .short("W")
                    .long("width")
                    .takes_value(true)
                    .default_value("20")
                    .help("Board width in cells"),
            )
            .arg(
                Arg::with_name("HEIGHT")
                    .short("H")
                    .long("height")
                    .takes_value(true)
                    .default_value("20")
                    .help("Board height in cells"),
            )
            .arg(
                Arg::with_name("BLOCKS")
                    .short("b")
                    .long("blocks")
                    .takes_value(true)
                    .default_value("20")
                    .help("Number of immobile blocks"),
            )
            .arg(
                Arg::with_name("WALKERS")
                    .short("w")
                    .long("walkers")
                    .takes_value(true)
                    .default_value("10")
                    .help("Number of walkers"),
            )
            .arg(
                Arg::with_name("PILLARS")
                    .short("p")
                    .long("pillars")
                    .takes_value(true)
                    .default_value("10")
                    .help("Number of pillars"),
            )
            .arg(
                Arg::with_name("SEED")
                    .short("s")
                    .long("seed")
                    .takes_value(true)
                    .help("If specified, games are generated and played from this seed"),
            )
            .arg(
                Arg::with_name("VERBOSE")
                    .short("v")
                    .multiple(true)
                    .help("Raise log output (-v for debug, -vv for trace)"),
            )
    }

    fn from_matches(args: &ArgMatches) -> Self {
        Self::try_from_matches(args).unwrap_or_else(|e| e.exit())
    }

    fn try_from_matches(args: &ArgMatches) -> Result<Self, clap::Error> {
        let seed = if args.is_present("SEED") {
            Some(value_t!(args, "SEED", u64)?)
        } else {
            None
        };

        Ok(Self {
            width: value_t!(args, "WIDTH", u32)?,
            height: value_t!(args, "HEIGHT", u32)?,
            blocks: value_t!(args, "BLOCKS", u32)?,
            walkers: value_t!(args, "WALKERS", u32)?,
            pillars: value_t!(args, "PILLARS", u32)?,
            seed,
            verbosity: args.occurrences_of("VERBOSE"),
        })
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    pub fn log(&self) {
        info!("[Config]");

        let mut default = false;
        if self == &CliConfig::default() {
            default = true;
        }

        info!("Default: {}", default);
        info!("| WIDTH: {}", self.width);
        info!("| HEIGHT: {}", self.height);
        info!("| BLOCKS: {}", self.blocks);
        info!("| WALKERS: {}", self.walkers);
        info!("| PILLARS: {}", self.pillars);
        match self.seed {
            Some(seed) => info!("| SEED: {}", seed),
            None => info!("| SEED: (entropy)"),
        }
    }
}

impl default::Default for CliConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            blocks: 20,
            walkers: 10,
            pillars: 10,
            seed: None,
            verbosity: 0,
        }
    }
}
