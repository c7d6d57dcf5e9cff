// Run configuration for the visualizer

use crate::algorithms::Algorithm;
use crate::ui::theme::ThemeKind;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ffi::OsString;
use std::fmt;
use std::time::Duration;

/// Number of bars when `--size` is not given
pub const DEFAULT_ARRAY_SIZE: usize = 15;

/// Largest array the bar chart is meant to show
pub const MAX_ARRAY_SIZE: usize = 200;

/// Inclusive value range when `--min`/`--max` are not given
pub const DEFAULT_MIN_VALUE: i64 = 1;
pub const DEFAULT_MAX_VALUE: i64 = 100;

/// Time between animation frames when `--interval` is not given
pub const DEFAULT_INTERVAL_MS: u64 = 500;

/// Memory budget for the materialized step history (64 MB)
pub const DEFAULT_SNAPSHOT_LIMIT: usize = 64 * 1024 * 1024;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "sortty",
    about = "Step-by-step sorting algorithm visualizer",
    version,
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Sorting algorithm, e.g. bubble_sort or merge-sort
    #[arg(value_name = "ALGORITHM", conflicts_with = "algorithm")]
    pub name: Option<Algorithm>,

    /// Sorting algorithm [default: selection_sort]
    #[arg(short, long, value_name = "NAME")]
    pub algorithm: Option<Algorithm>,

    /// Number of bars
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Smallest random value
    #[arg(long, default_value_t = DEFAULT_MIN_VALUE)]
    pub min: i64,

    /// Largest random value
    #[arg(long, default_value_t = DEFAULT_MAX_VALUE)]
    pub max: i64,

    /// Sort this comma-separated list first instead of a random array
    #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
    pub values: Option<Vec<i64>>,

    /// Milliseconds per step
    #[arg(short, long, value_name = "MS", default_value_t = DEFAULT_INTERVAL_MS)]
    pub interval: u64,

    /// Seed the random generator
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// dark or light
    #[arg(short, long, default_value = "dark")]
    pub theme: ThemeKind,

    /// Print steps instead of animating
    #[arg(short, long, conflicts_with = "list")]
    pub print: bool,

    /// List algorithms
    #[arg(short, long)]
    pub list: bool,
}

/// What the binary should do after parsing its arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Animate in the terminal UI
    Tui,
    /// Print every step to stdout and exit
    Print,
    /// Print the supported algorithm names and exit
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    pub array_size: usize,
    pub min_value: i64,
    pub max_value: i64,
    pub interval: Duration,
    pub theme: ThemeKind,
    /// Fixed RNG seed; `None` seeds from the OS
    pub seed: Option<u64>,
    /// Explicit input for the first run; later restarts are random
    pub values: Option<Vec<i64>>,
    pub snapshot_limit: usize,
    pub mode: Mode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            algorithm: Algorithm::Selection,
            array_size: DEFAULT_ARRAY_SIZE,
            min_value: DEFAULT_MIN_VALUE,
            max_value: DEFAULT_MAX_VALUE,
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            theme: ThemeKind::Dark,
            seed: None,
            values: None,
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
            mode: Mode::Tui,
        }
    }
}

/// Configuration errors
#[derive(Debug)]
pub enum ConfigError {
    /// Arguments rejected by the command-line parser
    Parse(clap::Error),
    InvalidRange { min: i64, max: i64 },
    InvalidSize { size: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "{}", e),
            ConfigError::InvalidRange { min, max } => {
                write!(f, "Invalid value range: min {} is greater than max {}", min, max)
            }
            ConfigError::InvalidSize { size } => {
                write!(
                    f,
                    "Invalid array size {}: must be between 1 and {}",
                    size, MAX_ARRAY_SIZE
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        let mode = if cli.list {
            Mode::List
        } else if cli.print {
            Mode::Print
        } else {
            Mode::Tui
        };

        let config = Config {
            algorithm: cli.name.or(cli.algorithm).unwrap_or(Algorithm::Selection),
            array_size: cli.size,
            min_value: cli.min,
            max_value: cli.max,
            interval: Duration::from_millis(cli.interval),
            theme: cli.theme,
            seed: cli.seed,
            values: cli.values,
            snapshot_limit: DEFAULT_SNAPSHOT_LIMIT,
            mode,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Config {
    /// Parse command-line arguments, excluding the program name
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let argv = std::iter::once(OsString::from("sortty"))
            .chain(args.into_iter().map(Into::into));
        let cli = Cli::try_parse_from(argv).map_err(ConfigError::Parse)?;
        Config::try_from(cli)
    }

    /// Check size and range
    ///
    /// Both are checked even with explicit values: restarts always generate a
    /// random array from them.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.array_size == 0 || self.array_size > MAX_ARRAY_SIZE {
            return Err(ConfigError::InvalidSize {
                size: self.array_size,
            });
        }
        if let Some(values) = &self.values {
            if values.len() > MAX_ARRAY_SIZE {
                return Err(ConfigError::InvalidSize { size: values.len() });
            }
        }
        if self.min_value > self.max_value {
            return Err(ConfigError::InvalidRange {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    /// RNG for input generation, reproducible when a seed was given
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Generate a random input array in the configured range
    pub fn generate_array<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        (0..self.array_size)
            .map(|_| rng.gen_range(self.min_value..=self.max_value))
            .collect()
    }

    /// Input for the first run: the explicit values if any, otherwise random
    pub fn initial_array<R: Rng>(&self, rng: &mut R) -> Vec<i64> {
        match &self.values {
            Some(values) => values.clone(),
            None => self.generate_array(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, ConfigError> {
        Config::from_args(args.iter().copied())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.algorithm, Algorithm::Selection);
        assert_eq!(config.interval, Duration::from_millis(500));
    }

    #[test]
    fn test_positional_algorithm_and_flags() {
        let config = parse(&["merge-sort", "--size", "30", "--seed", "7", "-t", "light"]).unwrap();
        assert_eq!(config.algorithm, Algorithm::Merge);
        assert_eq!(config.array_size, 30);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.theme, ThemeKind::Light);

        let config = parse(&["-a", "heap_sort", "--min", "-20", "--max", "-5"]).unwrap();
        assert_eq!(config.algorithm, Algorithm::Heap);
        assert_eq!((config.min_value, config.max_value), (-20, -5));
    }

    #[test]
    fn test_values_list() {
        let config = parse(&["--values", "5,-3,4", "--print"]).unwrap();
        assert_eq!(config.values, Some(vec![5, -3, 4]));
        assert_eq!(config.mode, Mode::Print);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            parse(&["shell_sort"]).unwrap_err(),
            ConfigError::Parse(_)
        ));
        assert!(matches!(
            parse(&["--size"]).unwrap_err(),
            ConfigError::Parse(_)
        ));
        assert!(matches!(
            parse(&["--theme", "sepia"]).unwrap_err(),
            ConfigError::Parse(_)
        ));
        assert!(matches!(
            parse(&["--bogus"]).unwrap_err(),
            ConfigError::Parse(_)
        ));
        assert!(matches!(
            parse(&["--min", "10", "--max", "5"]).unwrap_err(),
            ConfigError::InvalidRange { min: 10, max: 5 }
        ));
        assert!(matches!(
            parse(&["--size", "0"]).unwrap_err(),
            ConfigError::InvalidSize { size: 0 }
        ));
    }

    #[test]
    fn test_explicit_values_do_not_skip_validation() {
        // Restarts generate from size and range, so both must be usable
        assert!(matches!(
            parse(&["--values", "3,1,2", "--min", "10", "--max", "5"]).unwrap_err(),
            ConfigError::InvalidRange { min: 10, max: 5 }
        ));
        assert!(matches!(
            parse(&["--values", "3,1,2", "--size", "1000"]).unwrap_err(),
            ConfigError::InvalidSize { size: 1000 }
        ));

        let too_many = vec!["7"; MAX_ARRAY_SIZE + 1].join(",");
        assert!(matches!(
            parse(&["--values", too_many.as_str()]).unwrap_err(),
            ConfigError::InvalidSize { size } if size == MAX_ARRAY_SIZE + 1
        ));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let config = parse(&["--seed", "42", "--min", "3", "--max", "9"]).unwrap();
        let first = config.generate_array(&mut config.rng());
        let second = config.generate_array(&mut config.rng());
        assert_eq!(first, second);
        assert_eq!(first.len(), DEFAULT_ARRAY_SIZE);
        assert!(first.iter().all(|&v| (3..=9).contains(&v)));
    }
}
