use crate::LogLevel;

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
struct Wrapper {
    level: LogLevel,
}

#[test]
fn given_level_names_in_any_case_when_parsed_then_matching_filter() {
    assert_that!(*LogLevel::from_str("off").unwrap(), eq(LevelFilter::Off));
    assert_that!(*LogLevel::from_str("ERROR").unwrap(), eq(LevelFilter::Error));
    assert_that!(*LogLevel::from_str("Warn").unwrap(), eq(LevelFilter::Warn));
    assert_that!(*LogLevel::from_str(" info ").unwrap(), eq(LevelFilter::Info));
    assert_that!(*LogLevel::from_str("debug").unwrap(), eq(LevelFilter::Debug));
    assert_that!(*LogLevel::from_str("trace").unwrap(), eq(LevelFilter::Trace));
}

#[test]
fn given_unknown_name_when_parsed_then_logging_error() {
    let result = LogLevel::from_str("chatty");

    assert_that!(result, err(anything()));
    let err_msg = result.unwrap_err().to_string();
    assert_that!(err_msg, contains_substring("Logging error"));
    assert_that!(err_msg, contains_substring("chatty"));
}

#[test]
fn given_default_when_displayed_then_lowercase_warn() {
    assert_that!(LogLevel::default().to_string().as_str(), eq("warn"));
}

#[test]
fn given_toml_value_when_deserialized_then_level_set() {
    let wrapper: Wrapper = toml::from_str("level = \"debug\"").unwrap();

    assert_that!(LevelFilter::from(wrapper.level), eq(LevelFilter::Debug));
}
