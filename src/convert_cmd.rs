//! Convert command: render Gregorian dates as era dates.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use wareki_format::{FormatOptions, JapaneseDate};

use crate::cli::ConvertArgs;
use crate::config::WarekiConfig;

/// Run the conversion.
pub fn run(args: ConvertArgs) -> Result<()> {
    let _cmd = info_span!("convert").entered();

    let options = options(&args)?;
    info!(
        n = args.dates.len(),
        gannen = options.gannen(),
        full_width = options.full_width(),
        "converting dates"
    );

    let lines = render(&args, &options)?;
    let mut out = io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}").context("failed to write output")?;
    }
    Ok(())
}

/// Loads the optional config file and applies the CLI flags over it.
fn options(args: &ConvertArgs) -> Result<FormatOptions> {
    let config = match args.config {
        Some(ref path) => WarekiConfig::load(path)?,
        None => WarekiConfig::default(),
    };
    Ok(config.format_options(args.gannen_flag(), args.full_width_flag()))
}

/// Converts every date, failing on the first one outside the catalog.
fn render(args: &ConvertArgs, options: &FormatOptions) -> Result<Vec<String>> {
    args.dates
        .iter()
        .map(|&date| {
            let jp = JapaneseDate::from_options(date, options)
                .with_context(|| format!("failed to convert {date}"))?;
            if args.json {
                serde_json::to_string(&jp).context("failed to serialize result")
            } else {
                Ok(jp.date_text().to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::Parser;
    use wareki_era::CivilDate;

    use crate::cli::{Cli, Command};

    fn args(dates: &[&str], json: bool) -> ConvertArgs {
        ConvertArgs {
            dates: dates.iter().map(|d| d.parse::<CivilDate>().unwrap()).collect(),
            config: None,
            gannen: false,
            no_gannen: false,
            full_width: false,
            no_full_width: false,
            json,
        }
    }

    #[test]
    fn renders_text() {
        let args = args(&["2019-05-01", "2020-03-03"], false);
        let lines = render(&args, &FormatOptions::new()).unwrap();
        assert_eq!(lines, ["令和1年5月1日", "令和2年3月3日"]);
    }

    #[test]
    fn renders_with_options() {
        let options = FormatOptions::new().with_gannen(true).with_full_width(true);
        let lines = render(&args(&["2019-05-01"], false), &options).unwrap();
        assert_eq!(lines, ["令和元年５月１日"]);
    }

    #[test]
    fn renders_json() {
        let lines = render(&args(&["1989-01-07"], true), &FormatOptions::new()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["era"], 3);
        assert_eq!(value["yearInEra"], 64);
        assert_eq!(value["dateText"], "昭和64年1月7日");
    }

    #[test]
    fn out_of_range_is_error() {
        let err = render(&args(&["1850-01-01"], false), &FormatOptions::new()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("failed to convert 1850-01-01"));
        assert!(msg.contains("before the first known era"));
    }

    fn parse(argv: &[&str]) -> ConvertArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Convert(args) => args,
            Command::Eras(_) => panic!("expected convert"),
        }
    }

    #[test]
    fn negative_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[format]\ngannen = true\nfull_width = true").unwrap();
        let config = file.path().to_str().unwrap();

        let args = parse(&["wareki", "convert", "-c", config, "2019-05-01"]);
        let lines = render(&args, &options(&args).unwrap()).unwrap();
        assert_eq!(lines, ["令和元年５月１日"]);

        let args = parse(&["wareki", "convert", "-c", config, "--no-gannen", "2019-05-01"]);
        let lines = render(&args, &options(&args).unwrap()).unwrap();
        assert_eq!(lines, ["令和１年５月１日"]);

        let args = parse(&[
            "wareki",
            "convert",
            "-c",
            config,
            "--no-gannen",
            "--no-full-width",
            "2019-05-01",
        ]);
        let lines = render(&args, &options(&args).unwrap()).unwrap();
        assert_eq!(lines, ["令和1年5月1日"]);
    }
}
