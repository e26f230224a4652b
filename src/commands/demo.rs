use anyhow::Result;
use chrono::Utc;

use crate::commands::print;
use crate::models::{Category, Issue, Priority};

const SAMPLE_ISSUES: [(&str, Priority, Category); 5] = [
    ("Secretary laptop giving blue screen", Priority::High, Category::Unknown),
    ("Printer switch at office #104 is broken", Priority::Urgent, Category::Hardware),
    ("Upgrade OS for Laptop 101 to windows 11", Priority::Medium, Category::Software),
    ("Install Password manager application on Laptop 112", Priority::Low, Category::Unknown),
    ("Change HDMI Cable for Cafeteria TV", Priority::Low, Category::Hardware),
];

pub fn sample_issues() -> Result<Vec<Issue>> {
    let now = Utc::now();
    let mut issues = Vec::with_capacity(SAMPLE_ISSUES.len());
    for (description, priority, category) in SAMPLE_ISSUES {
        issues.push(Issue::new(description, priority, category, Some(now))?);
    }
    Ok(issues)
}

pub fn run() -> Result<()> {
    let issues = sample_issues()?;
    print::run(&issues)
}
