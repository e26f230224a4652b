use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::commands::print;
use crate::models::{Category, Issue, Priority};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `--created-at` value: RFC 3339, a naive date-time or a bare date.
/// Naive values are taken as UTC.
pub fn parse_created_at(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, DATETIME_FORMAT) {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    bail!(
        "Invalid created-at '{}'. Expected RFC 3339, YYYY-MM-DDTHH:MM:SS or YYYY-MM-DD",
        value
    );
}

pub fn build(
    description: Option<&str>,
    priority: Priority,
    category: Category,
    created_at: Option<&str>,
) -> Result<Issue> {
    let created_at = created_at.map(parse_created_at).transpose()?;
    let issue = Issue::from_optional(description, priority, category, created_at)?;
    Ok(issue)
}

pub fn run(
    description: Option<&str>,
    priority: Priority,
    category: Category,
    created_at: Option<&str>,
    json: bool,
) -> Result<()> {
    let issue = build(description, priority, category, created_at)?;

    if json {
        let text = serde_json::to_string_pretty(&issue).context("Failed to serialize issue")?;
        println!("{}", text);
        return Ok(());
    }

    print::run(std::slice::from_ref(&issue))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueError;
    use chrono::Datelike;
    use proptest::prelude::*;

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_created_at("2022-10-11T12:30:00+02:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2022-10-11T10:30:00+00:00");
    }

    #[test]
    fn test_parse_naive_datetime() {
        let dt = parse_created_at("2022-10-11T12:30:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2022-10-11T12:30:00+00:00");
    }

    #[test]
    fn test_parse_date_only() {
        let dt = parse_created_at("2000-10-10").unwrap();
        assert_eq!(dt.year(), 2000);
        assert_eq!(dt.to_rfc3339(), "2000-10-10T00:00:00+00:00");
    }

    #[test]
    fn test_parse_garbage_fails() {
        let result = parse_created_at("yesterday");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("yesterday"));
    }

    #[test]
    fn test_build_with_date() {
        let issue = build(Some("issue #1"), Priority::Urgent, Category::Software, Some("2000-10-10")).unwrap();
        assert!(issue.key().starts_with("SW-2000-U-"));
    }

    #[test]
    fn test_build_missing_description_fails() {
        let err = build(None, Priority::Low, Category::Hardware, None).unwrap_err();
        assert_eq!(
            err.downcast_ref::<IssueError>(),
            Some(&IssueError::InvalidDescription)
        );
    }

    #[test]
    fn test_build_bad_date_fails_before_validation() {
        let result = build(Some("ok"), Priority::Low, Category::Hardware, Some("10/10/2000"));
        assert!(result.unwrap_err().to_string().contains("Invalid created-at"));
    }

    proptest! {
        #[test]
        fn prop_date_year_lands_in_key(year in 1000i32..=9999, month in 1u32..=12, day in 1u32..=28) {
            let date = format!("{:04}-{:02}-{:02}", year, month, day);
            let issue = build(Some("desc"), Priority::High, Category::Hardware, Some(date.as_str())).unwrap();
            let expected = format!("HW-{:04}-H-", year);
            prop_assert!(issue.key().starts_with(&expected));
        }
    }
}
