use anyhow::{Context, bail};
use core::cmp::Ordering;
use sodium_ms::Options;
use sodium_snowflake::{GenerateOptions, Snowflake};

use crate::cli::{
    Command, CompareArgs, DeconstructArgs, FormatArgs, GenerateArgs, MsCommand, ParseArgs,
    SnowflakeCommand,
};

/// Runs a command and returns the lines to print.
pub fn run(command: Command) -> anyhow::Result<Vec<String>> {
    match command {
        Command::Snowflake(SnowflakeCommand::Generate(args)) => generate(&args),
        Command::Snowflake(SnowflakeCommand::Deconstruct(args)) => deconstruct(&args),
        Command::Snowflake(SnowflakeCommand::Compare(args)) => compare(&args).map(|l| vec![l]),
        Command::Ms(MsCommand::Parse(args)) => parse(&args).map(|l| vec![l]),
        Command::Ms(MsCommand::Format(args)) => format(&args).map(|l| vec![l]),
    }
}

fn generate(args: &GenerateArgs) -> anyhow::Result<Vec<String>> {
    let snowflake = Snowflake::new(args.epoch.epoch);
    snowflake.set_worker_id(args.worker_id);
    snowflake.set_process_id(args.process_id);

    let mut options = GenerateOptions::new();
    if let Some(timestamp) = args.timestamp {
        options = options.timestamp(timestamp);
    }

    tracing::debug!(
        epoch = snowflake.epoch(),
        worker_id = args.worker_id,
        process_id = args.process_id,
        count = args.count,
        "generating snowflakes"
    );

    (0..args.count)
        .map(|_| -> anyhow::Result<String> {
            let id = snowflake.generate(options)?;
            Ok(id.to_string())
        })
        .collect()
}

fn deconstruct(args: &DeconstructArgs) -> anyhow::Result<Vec<String>> {
    let snowflake = Snowflake::new(args.epoch.epoch);
    args.ids
        .iter()
        .map(|id| -> anyhow::Result<String> {
            let parts = snowflake
                .deconstruct(id.as_str())
                .with_context(|| format!("failed to deconstruct {id:?}"))?;
            if args.json {
                Ok(serde_json::to_string(&parts)?)
            } else {
                Ok(parts.to_string())
            }
        })
        .collect()
}

fn compare(args: &CompareArgs) -> anyhow::Result<String> {
    let ordering = Snowflake::compare(args.a.as_str(), args.b.as_str())?;
    let symbol = match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    };
    Ok(format!("{} {symbol} {}", args.a, args.b))
}

fn parse(args: &ParseArgs) -> anyhow::Result<String> {
    let options = Options::new().locale(args.locale.locale.as_str());
    match sodium_ms::parse(&args.text, &options)? {
        Some(ms) => Ok(ms.to_string()),
        None => bail!(
            "{:?} is not a duration in locale {:?}",
            args.text,
            options.locale
        ),
    }
}

fn format(args: &FormatArgs) -> anyhow::Result<String> {
    let options = Options::new()
        .locale(args.locale.locale.as_str())
        .long(args.long)
        .compound(args.compound)
        .max_units(args.max_units);
    Ok(sodium_ms::format(args.ms, &options)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::CliArgs;
    use clap::Parser;

    fn run_args(args: &[&str]) -> anyhow::Result<Vec<String>> {
        let args = CliArgs::try_parse_from(std::iter::once("sodium").chain(args.iter().copied()))?;
        run(args.command)
    }

    #[test]
    fn generate_at_fixed_timestamp() {
        let lines = run_args(&["snowflake", "generate", "--timestamp", "1768617781186"]).unwrap();
        assert_eq!(lines, ["1461913675097968640"]);
    }

    #[test]
    fn generate_many_increments() {
        let lines = run_args(&[
            "snowflake",
            "generate",
            "--timestamp",
            "1768617781186",
            "-n",
            "3",
        ])
        .unwrap();
        let ids: Vec<u64> = lines.iter().map(|l| l.parse().unwrap()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[1] - ids[0], 1);
        assert_eq!(ids[2] - ids[1], 1);
    }

    #[test]
    fn deconstruct_text_and_json() {
        let lines = run_args(&["snowflake", "deconstruct", "1461913675098095707"]).unwrap();
        assert_eq!(
            lines,
            ["1461913675098095707 (timestamp: 1768617781186, worker: 1, process: 0, increment: 91, epoch: 1420070400000)"]
        );

        let lines =
            run_args(&["snowflake", "deconstruct", "1461913675098095707", "--json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["id"], "1461913675098095707");
        assert_eq!(value["timestamp"], 1_768_617_781_186_u64);
        assert_eq!(value["increment"], 91);
    }

    #[test]
    fn deconstruct_rejects_garbage() {
        let err = run_args(&["snowflake", "deconstruct", "12ab"]).unwrap_err();
        assert!(err.to_string().contains("12ab"), "{err}");
    }

    #[test]
    fn compare_strings() {
        let lines = run_args(&["snowflake", "compare", "9", "10"]).unwrap();
        assert_eq!(lines, ["9 < 10"]);
        let lines = run_args(&["snowflake", "compare", "42", "42"]).unwrap();
        assert_eq!(lines, ["42 = 42"]);
    }

    #[test]
    fn ms_parse_and_format() {
        assert_eq!(run_args(&["ms", "parse", "1h 30m"]).unwrap(), ["5400000"]);
        assert_eq!(
            run_args(&["ms", "parse", "3j2secondes", "--locale", "fr"]).unwrap(),
            ["259202000"]
        );
        let compound = [
            "ms",
            "format",
            "259202001",
            "--locale",
            "fr",
            "--compound",
            "--max-units",
            "2",
        ];
        assert_eq!(run_args(&compound).unwrap(), ["3j2s"]);
        assert_eq!(
            run_args(&["ms", "format", "-1500", "--long"]).unwrap(),
            ["-1 second"]
        );
    }

    #[test]
    fn ms_errors() {
        assert!(run_args(&["ms", "parse", "soon"]).is_err());
        assert!(run_args(&["ms", "format", "1000", "--locale", "xx"]).is_err());
    }
}
