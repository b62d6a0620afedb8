use std::io::Write;

use clap::{ ArgAction, Parser };
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use passmix::logging;
use passmix::password::{
    compose,
    PasswordRequest,
    DEFAULT_LENGTH,
    DEFAULT_MAX_NUMERIC,
    DEFAULT_MAX_SPECIAL,
    DEFAULT_MIN_NUMERIC,
    DEFAULT_MIN_SPECIAL,
};

#[derive(Parser, Debug)]
#[command(name = "passmix", version)]
#[command(about = "Generate a random password with bounded numeric and special character counts")]
#[command(after_help = "Example:\n  passmix --length 16 --min-nums 2 --max-nums 4 --min-spec 2 --max-spec 3")]
struct Cli {
    /// Total password length
    #[arg(short, long, env = "PASSMIX_LENGTH", default_value_t = DEFAULT_LENGTH, allow_negative_numbers = true)]
    length: i64,

    /// Minimum number of numeric characters
    #[arg(long, env = "PASSMIX_MIN_NUMS", default_value_t = DEFAULT_MIN_NUMERIC, allow_negative_numbers = true)]
    min_nums: i64,

    /// Maximum number of numeric characters
    #[arg(long, env = "PASSMIX_MAX_NUMS", default_value_t = DEFAULT_MAX_NUMERIC, allow_negative_numbers = true)]
    max_nums: i64,

    /// Minimum number of special characters
    #[arg(long, env = "PASSMIX_MIN_SPEC", default_value_t = DEFAULT_MIN_SPECIAL, allow_negative_numbers = true)]
    min_spec: i64,

    /// Maximum number of special characters
    #[arg(long, env = "PASSMIX_MAX_SPEC", default_value_t = DEFAULT_MAX_SPECIAL, allow_negative_numbers = true)]
    max_spec: i64,

    /// Seed the generator for reproducible output
    #[arg(long, env = "PASSMIX_SEED")]
    seed: Option<u64>,

    /// Log more detail to stderr (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn request(&self) -> PasswordRequest {
        PasswordRequest {
            length: self.length,
            min_numeric: self.min_nums,
            max_numeric: self.max_nums,
            min_special: self.min_spec,
            max_special: self.max_spec,
        }
    }
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);

    let mut request = match cli.request().validate() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    request.fit_maxima();

    let password = match cli.seed {
        Some(seed) => {
            info!(seed, "using seeded generator");
            compose(&mut StdRng::seed_from_u64(seed), &request)
        }
        None => compose(&mut rand::rng(), &request),
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", password)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    use super::*;
    use passmix::errors::RequestError;

    #[test]
    fn cli_definition_test() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_test() {
        let cli = Cli::try_parse_from(["passmix"]).unwrap();

        assert_eq!(cli.request(), PasswordRequest::default());
        assert_eq!(cli.seed, None);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parses_bounds_test() {
        let cli = Cli::try_parse_from([
            "passmix", "-l", "16", "--min-nums", "2", "--max-nums", "4", "--min-spec", "2", "--max-spec", "3", "--seed", "9",
        ])
        .unwrap();

        assert_eq!(
            cli.request(),
            PasswordRequest { length: 16, min_numeric: 2, max_numeric: 4, min_special: 2, max_special: 3 }
        );
        assert_eq!(cli.seed, Some(9));
    }

    #[test]
    fn negative_values_reach_validation_test() {
        let cli = Cli::try_parse_from(["passmix", "--min-nums", "-1"]).unwrap();

        assert_eq!(cli.min_nums, -1);
        assert_eq!(cli.request().validate(), Err(RequestError::NegativeBound));
    }

    #[test]
    fn zero_length_rejected_test() {
        let cli = Cli::try_parse_from(["passmix", "--length", "0"]).unwrap();

        assert_eq!(cli.request().validate(), Err(RequestError::LengthTooShort));
    }

    #[test]
    fn inverted_numeric_rejected_test() {
        let cli = Cli::try_parse_from(["passmix", "--min-nums", "5", "--max-nums", "2"]).unwrap();

        assert_eq!(cli.request().validate(), Err(RequestError::NumericBoundsInverted));
    }

    #[test]
    fn help_is_not_a_failure_test() {
        let err = Cli::try_parse_from(["passmix", "--help"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }

    #[test]
    fn help_shows_example_test() {
        let help = Cli::command().render_help().to_string();

        assert!(help.contains("--min-spec"));
        assert!(help.contains("Example:"));
    }

    #[test]
    fn verbose_and_quiet_conflict_test() {
        let err = Cli::try_parse_from(["passmix", "-v", "-q"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }
}
