use anyhow::Result;
use chrono::{Datelike, Utc};

use crate::key::{generate_key, RandomIdSource};
use crate::models::{Category, Priority};

pub fn run(priority: Priority, category: Category, year: Option<i32>) -> Result<()> {
    let year = year.unwrap_or_else(|| Utc::now().year());
    let key = generate_key(category, priority, year, &RandomIdSource);
    tracing::debug!(%key, year, "generated standalone key");
    println!("{}", key);
    Ok(())
}
