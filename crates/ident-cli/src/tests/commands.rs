use crate::{Cli, CliError, execute};

use ident_config::UserConfig;
use ident_core::FixedClock;

use chrono::FixedOffset;
use clap::Parser;
use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use log::LevelFilter;

const NOW_MILLIS: i64 = 1_257_600_000_000;

fn user() -> UserConfig {
    UserConfig {
        name: Some("A U Thor".to_string()),
        email: Some("author@example.com".to_string()),
        ..UserConfig::default()
    }
}

fn plus_two_hours() -> FixedOffset {
    FixedOffset::east_opt(2 * 3600).unwrap()
}

fn run(args: &[&str]) -> Result<String, CliError> {
    let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
    execute(&cli.command, &user(), &FixedClock(NOW_MILLIS), &plus_two_hours())
}

// =========================================================================
// committer / show
// =========================================================================

#[test]
fn given_no_time_args_when_committer_then_clock_and_local_zone_used() {
    let output = run(&["ident", "committer"]).unwrap();

    assert_that!(
        output.as_str(),
        eq("A U Thor <author@example.com> 1257600000 +0200")
    );
}

#[test]
fn given_when_and_tz_when_committer_then_both_used() {
    let output = run(&[
        "ident",
        "committer",
        "--when",
        "1142878449000",
        "--tz",
        "-300",
    ])
    .unwrap();

    assert_that!(
        output.as_str(),
        eq("A U Thor <author@example.com> 1142878449 -0500")
    );
}

#[test]
fn given_only_when_when_committer_then_local_zone_offset() {
    let output = run(&["ident", "committer", "--when=-1500"]).unwrap();

    assert_that!(output.as_str(), eq("A U Thor <author@example.com> -1 +0200"));
}

#[test]
fn given_json_flag_when_committer_then_serialized_record() {
    let output = run(&["ident", "committer", "--json"]).unwrap();

    assert_that!(output, contains_substring("\"name\":\"A U Thor\""));
    assert_that!(output, contains_substring("\"when_millis\":1257600000000"));
    assert_that!(output, contains_substring("\"tz_offset\":120"));
}

#[test]
fn given_time_args_when_show_then_human_readable() {
    let output = run(&["ident", "show", "--when", "1142878449000", "--tz", "-300"]).unwrap();

    assert_that!(
        output.as_str(),
        eq("PersonIdent[A U Thor, author@example.com, Mon Mar 20 13:14:09 2006 -0500]")
    );
}

// =========================================================================
// format / sanitize / timezone
// =========================================================================

#[test]
fn given_explicit_values_when_format_then_canonical_line() {
    let output = run(&[
        "ident",
        "format",
        "--name",
        "  John Doe ",
        "--email",
        "<john@example.com>",
        "--when",
        "1257600000999",
        "--tz",
        "120",
    ])
    .unwrap();

    assert_that!(
        output.as_str(),
        eq("John Doe <john@example.com> 1257600000 +0200")
    );
}

#[test]
fn given_missing_required_flag_when_format_parsed_then_error() {
    let result = Cli::try_parse_from(["ident", "format", "--name", "n", "--email", "e"]);

    assert!(result.is_err());
}

#[test]
fn given_text_when_sanitize_then_cleaned() {
    let output = run(&["ident", "sanitize", "  a\n<b>c  "]).unwrap();

    assert_that!(output.as_str(), eq("abc"));
}

#[test]
fn given_negative_minutes_when_timezone_then_formatted() {
    assert_that!(run(&["ident", "timezone", "-90"]).unwrap().as_str(), eq("-0130"));
    assert_that!(run(&["ident", "timezone", "330"]).unwrap().as_str(), eq("+0530"));
}

// =========================================================================
// Global flags
// =========================================================================

#[test]
fn given_log_level_flag_when_parsed_then_level_set() {
    let cli = Cli::try_parse_from(["ident", "timezone", "0", "--log-level", "debug"]).unwrap();

    assert_that!(cli.log_level.map(|level| *level), eq(Some(LevelFilter::Debug)));
}

#[test]
fn given_unknown_log_level_when_parsed_then_error() {
    let result = Cli::try_parse_from(["ident", "--log-level", "loud", "timezone", "0"]);

    assert_that!(result.map(|_| ()), err(anything()));
}
