use clap::{Args, Parser, Subcommand};
use sodium_ms::DEFAULT_LOCALE;
use sodium_snowflake::{DISCORD_EPOCH, MAX_PROCESS_ID, MAX_WORKER_ID};

/// Command-line arguments for the `sodium` binary.
///
/// Every option can also be set through the environment variable named in its
/// help text, or in a `.env` file in the working directory.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "sodium",
    version,
    about = "Mint and inspect snowflake IDs, parse and format durations"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Snowflake ID codec.
    #[command(subcommand)]
    Snowflake(SnowflakeCommand),
    /// Human-readable durations.
    #[command(subcommand)]
    Ms(MsCommand),
}

#[derive(Subcommand, Debug, Clone)]
pub enum SnowflakeCommand {
    /// Generate one or more snowflakes.
    Generate(GenerateArgs),
    /// Split snowflakes into their fields.
    Deconstruct(DeconstructArgs),
    /// Compare two snowflakes, given as decimal strings.
    Compare(CompareArgs),
}

#[derive(Args, Debug, Clone)]
pub struct EpochArgs {
    /// Epoch in milliseconds since the UNIX epoch. Defaults to Discord's.
    ///
    /// Environment variable: `SODIUM_EPOCH`
    #[arg(long, env = "SODIUM_EPOCH", default_value_t = DISCORD_EPOCH)]
    pub epoch: u64,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub epoch: EpochArgs,

    /// Worker ID stored in each snowflake.
    ///
    /// Environment variable: `SODIUM_WORKER_ID`
    #[arg(
        long,
        env = "SODIUM_WORKER_ID",
        default_value_t = 0,
        value_parser = clap::value_parser!(u64).range(0..=u64::from(MAX_WORKER_ID))
    )]
    pub worker_id: u64,

    /// Process ID stored in each snowflake.
    ///
    /// Environment variable: `SODIUM_PROCESS_ID`
    #[arg(
        long,
        env = "SODIUM_PROCESS_ID",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(0..=u64::from(MAX_PROCESS_ID))
    )]
    pub process_id: u64,

    /// Timestamp in milliseconds since the UNIX epoch. Defaults to now.
    #[arg(long)]
    pub timestamp: Option<u64>,

    /// Number of snowflakes to generate.
    #[arg(
        short = 'n',
        long,
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..=4096)
    )]
    pub count: u64,
}

#[derive(Args, Debug, Clone)]
pub struct DeconstructArgs {
    /// Snowflakes to decode.
    #[arg(required = true)]
    pub ids: Vec<String>,

    #[command(flatten)]
    pub epoch: EpochArgs,

    /// Print the fields as JSON, one object per line.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    pub a: String,
    pub b: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MsCommand {
    /// Parse a duration such as `1h 30m` into milliseconds.
    Parse(ParseArgs),
    /// Format milliseconds as a duration.
    Format(FormatArgs),
}

#[derive(Args, Debug, Clone)]
pub struct LocaleArgs {
    /// Locale code: en, fr, de or es.
    ///
    /// Environment variable: `SODIUM_LOCALE`
    #[arg(long, env = "SODIUM_LOCALE", default_value = DEFAULT_LOCALE)]
    pub locale: String,
}

#[derive(Args, Debug, Clone)]
pub struct ParseArgs {
    pub text: String,

    #[command(flatten)]
    pub locale: LocaleArgs,
}

#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    #[arg(allow_negative_numbers = true)]
    pub ms: f64,

    #[command(flatten)]
    pub locale: LocaleArgs,

    /// Write unit names in full.
    #[arg(long, default_value_t = false)]
    pub long: bool,

    /// Split the duration over several units.
    #[arg(long, default_value_t = false)]
    pub compound: bool,

    /// With --compound, stop after this many units. 0 means no limit.
    #[arg(long, default_value_t = 0)]
    pub max_units: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn generate_defaults() {
        let args = CliArgs::try_parse_from(["sodium", "snowflake", "generate"]).unwrap();
        let Command::Snowflake(SnowflakeCommand::Generate(args)) = args.command else {
            panic!("expected generate");
        };
        assert_eq!(args.worker_id, 0);
        assert_eq!(args.process_id, 1);
        assert_eq!(args.count, 1);
        assert_eq!(args.timestamp, None);
    }

    #[test]
    fn worker_id_is_bounded() {
        let res = CliArgs::try_parse_from(["sodium", "snowflake", "generate", "--worker-id", "32"]);
        assert!(res.is_err());
        let res = CliArgs::try_parse_from(["sodium", "snowflake", "generate", "--count", "0"]);
        assert!(res.is_err());
    }

    #[test]
    fn deconstruct_requires_an_id() {
        assert!(CliArgs::try_parse_from(["sodium", "snowflake", "deconstruct"]).is_err());
        let args = CliArgs::try_parse_from([
            "sodium",
            "snowflake",
            "deconstruct",
            "1",
            "2",
            "--epoch",
            "0",
            "--json",
        ])
        .unwrap();
        let Command::Snowflake(SnowflakeCommand::Deconstruct(args)) = args.command else {
            panic!("expected deconstruct");
        };
        assert_eq!(args.ids, ["1", "2"]);
        assert_eq!(args.epoch.epoch, 0);
        assert!(args.json);
    }

    #[test]
    fn format_accepts_negative_numbers() {
        let args = CliArgs::try_parse_from(["sodium", "ms", "format", "-1500", "--long"]).unwrap();
        let Command::Ms(MsCommand::Format(args)) = args.command else {
            panic!("expected format");
        };
        assert_eq!(args.ms, -1_500.0);
        assert!(args.long);
        assert_eq!(args.locale.locale, "en");
    }
}
