// Copyright 2025 The Drasi Authors.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Integration tests for interpolation against the process environment.
//!
//! Every test that touches process variables is `#[serial]` and cleans up the
//! variables it set.

mod test_support;

use pretty_assertions::assert_eq;
use serial_test::serial;
use std::env;
use test_case::test_case;
use test_support::CERTIFICATE;
use yaml_env_config::expand;

#[test_case("${TEST}" ; "braced upper")]
#[test_case("$TEST" ; "bare upper")]
#[test_case("${test}" ; "braced lower")]
#[test_case("$test" ; "bare lower")]
#[serial]
fn test_interpolates_env_placeholder(placeholder: &str) {
    env::set_var("TEST", "test");

    let interpolated = expand(&format!("property: {placeholder}"));

    assert_eq!(interpolated, "property: test");
    // Lookup never removes the variable
    assert_eq!(env::var("TEST").ok().as_deref(), Some("test"));

    env::remove_var("TEST");
}

#[test_case("${NOT_FOUND}" ; "braced upper")]
#[test_case("$NOT_FOUND" ; "bare upper")]
#[test_case("${not_found}" ; "braced lower")]
#[test_case("$not_found" ; "bare lower")]
#[serial]
fn test_missing_placeholder_is_empty(placeholder: &str) {
    env::remove_var("NOT_FOUND");

    assert_eq!(expand(&format!("property: {placeholder}")), "property: ");
}

#[test_case("${DEFAULT:test}" ; "upper")]
#[test_case("${default:test}" ; "lower")]
#[serial]
fn test_default_when_missing(placeholder: &str) {
    env::remove_var("DEFAULT");

    assert_eq!(expand(&format!("property: {placeholder}")), "property: test");
}

#[test_case("${PARTIAL}" ; "braced upper")]
#[test_case("$PARTIAL" ; "bare upper")]
#[test_case("${partial}" ; "braced lower")]
#[test_case("$partial" ; "bare lower")]
#[serial]
fn test_partial_context(placeholder: &str) {
    env::set_var("PARTIAL", "test");

    assert_eq!(
        expand(&format!("property: {placeholder}:partial")),
        "property: test:partial"
    );

    env::remove_var("PARTIAL");
}

#[test_case("${RESPECT_ESCAPED}" ; "braced upper")]
#[test_case("$RESPECT_ESCAPED" ; "bare upper")]
#[test_case("${respect_escaped}" ; "braced lower")]
#[test_case("$respect_escaped" ; "bare lower")]
#[serial]
fn test_respects_escaped_dollar(placeholder: &str) {
    env::set_var("RESPECT_ESCAPED", "test");

    assert_eq!(
        expand(&format!("property: {placeholder}$$partial")),
        "property: test$partial"
    );

    env::remove_var("RESPECT_ESCAPED");
}

#[test_case("${RESPECT_ESCAPED:ZWkT33c$xpYg@6Q?}" ; "upper")]
#[test_case("${respect_escaped:ZWkT33c$xpYg@6Q?}" ; "lower")]
#[serial]
fn test_dollar_in_default_is_kept(placeholder: &str) {
    env::remove_var("RESPECT_ESCAPED");
    env::set_var("XPYG", "must-not-be-used");

    assert_eq!(
        expand(&format!("property: {placeholder}")),
        "property: ZWkT33c$xpYg@6Q?"
    );

    env::remove_var("XPYG");
}

#[test_case("${MULTILINE}" ; "braced upper")]
#[test_case("$MULTILINE" ; "bare upper")]
#[test_case("${multiline}" ; "braced lower")]
#[test_case("$multiline" ; "bare lower")]
#[serial]
fn test_multiline_value_is_quoted(placeholder: &str) {
    env::set_var("MULTILINE", CERTIFICATE);

    let interpolated = expand(&format!("property: {placeholder}"));
    let expected = format!("property: \"{}\"", CERTIFICATE.replace('\n', "\\n"));

    assert_eq!(interpolated, expected);
    assert_eq!(interpolated.lines().count(), 1);

    env::remove_var("MULTILINE");
}

#[test]
#[serial]
fn test_empty_value_falls_back_to_default() {
    env::set_var("EMPTY_WITH_DEFAULT", "");

    assert_eq!(expand("v: ${EMPTY_WITH_DEFAULT:fallback}"), "v: fallback");

    env::remove_var("EMPTY_WITH_DEFAULT");
}

#[test]
#[serial]
fn test_multiline_round_trips_through_yaml() {
    env::set_var("ROUND_TRIP_CERT", CERTIFICATE);

    let interpolated = expand("cert: ${ROUND_TRIP_CERT}\nname: ok");
    let parsed: serde_yaml::Value = serde_yaml::from_str(&interpolated).unwrap();

    assert_eq!(parsed["cert"].as_str(), Some(CERTIFICATE));
    assert_eq!(parsed["name"].as_str(), Some("ok"));

    env::remove_var("ROUND_TRIP_CERT");
}

#[test]
#[serial]
fn test_full_document() {
    env::set_var("DOC_DB_HOST", "db.example.com");
    env::set_var("DOC_DB_PASSWORD", "s3cr3t");
    env::remove_var("DOC_DB_PORT");

    let input = r#"
database:
  host: $DOC_DB_HOST
  port: ${DOC_DB_PORT:5432}
  url: postgres://${doc_db_host}:${DOC_DB_PORT:5432}/app
  password: "${DOC_DB_PASSWORD}"
  price_tag: $$5
"#;

    let expected = r#"
database:
  host: db.example.com
  port: 5432
  url: postgres://db.example.com:5432/app
  password: "s3cr3t"
  price_tag: $5
"#;

    assert_eq!(expand(input), expected);

    env::remove_var("DOC_DB_HOST");
    env::remove_var("DOC_DB_PASSWORD");
}
