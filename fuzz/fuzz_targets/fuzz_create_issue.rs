#![no_main]

//! Fuzz target for issue construction and printing.
//!
//! Any description, timestamp and enum combination must either be rejected
//! with `InvalidDescription` or yield an issue whose key has the expected
//! shape. Printing must never panic on arbitrary Unicode.

use arbitrary::Arbitrary;
use chrono::{DateTime, Datelike};
use libfuzzer_sys::fuzz_target;

use issuedesk::commands::print::print_issues;
use issuedesk::key::{category_segment, priority_segment, year_segment};
use issuedesk::{Category, Issue, IssueError, Priority};

#[derive(Arbitrary, Debug)]
struct CreateInput {
    /// Issue description - can contain any Unicode, or be missing
    description: Option<String>,
    /// Seconds since the epoch, `None` means "now"
    created_at: Option<i32>,
    priority: u8,
    category: u8,
}

fuzz_target!(|input: CreateInput| {
    let priority = match input.priority % 4 {
        0 => Priority::Urgent,
        1 => Priority::High,
        2 => Priority::Medium,
        _ => Priority::Low,
    };
    let category = match input.category % 3 {
        0 => Category::Hardware,
        1 => Category::Software,
        _ => Category::Unknown,
    };
    let created_at = input
        .created_at
        .and_then(|secs| DateTime::from_timestamp(i64::from(secs), 0));

    let blank = input
        .description
        .as_deref()
        .map_or(true, |d| d.trim().is_empty());

    match Issue::from_optional(input.description.as_deref(), priority, category, created_at) {
        Ok(issue) => {
            assert!(!blank);
            let segments: Vec<&str> = issue.key().split('-').collect();
            assert_eq!(segments.len(), 4);
            assert_eq!(segments[0], category_segment(category));
            assert_eq!(segments[1], year_segment(issue.created_at().year()));
            assert_eq!(segments[2], priority_segment(priority));
            assert_eq!(segments[3].len(), 8);

            colored::control::set_override(false);
            let mut buf = Vec::new();
            let _ = print_issues(&mut buf, std::slice::from_ref(&issue));
        }
        Err(err) => {
            assert!(blank);
            assert_eq!(err, IssueError::InvalidDescription);
        }
    }
});
