use std::io::{self, Write};

use colored::{Color, Colorize};

use crate::models::{Issue, Priority};

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Urgent => Color::BrightRed,
        Priority::High => Color::Red,
        Priority::Medium => Color::BrightYellow,
        Priority::Low => Color::Yellow,
    }
}

/// Write every issue on its own line, colored by priority, followed by the
/// total count.
pub fn print_issues<W: Write>(out: &mut W, issues: &[Issue]) -> io::Result<()> {
    for issue in issues {
        let line = issue.to_string();
        writeln!(out, "{}", line.as_str().color(priority_color(issue.priority())))?;
    }
    writeln!(out, "\n\nTotal Issues: [{}]", issues.len())?;
    Ok(())
}

pub fn run(issues: &[Issue]) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_issues(&mut out, issues)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn render(issues: &[Issue]) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        print_issues(&mut buf, issues).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_priority_colors() {
        assert_eq!(priority_color(Priority::Urgent), Color::BrightRed);
        assert_eq!(priority_color(Priority::High), Color::Red);
        assert_eq!(priority_color(Priority::Medium), Color::BrightYellow);
        assert_eq!(priority_color(Priority::Low), Color::Yellow);
    }

    #[test]
    fn test_print_empty() {
        let out = render(&[]);
        assert_eq!(out, "\n\nTotal Issues: [0]\n");
    }

    #[test]
    fn test_print_lists_every_issue_and_count() {
        let issues = vec![
            Issue::new("Laptop blue screen", Priority::High, Category::Unknown, None).unwrap(),
            Issue::new("Upgrade OS", Priority::Medium, Category::Software, None).unwrap(),
        ];
        let out = render(&issues);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], issues[0].to_string());
        assert_eq!(lines[1], issues[1].to_string());
        assert!(out.ends_with("Total Issues: [2]\n"));
    }
}
