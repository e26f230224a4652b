//! Issue key derivation.
//!
//! A key looks like `HW-2022-U-1F7531A6`: category code, creation year,
//! priority code and an 8 character token cut from a random UUID. The token
//! is not unique across issues.

use uuid::Uuid;

use crate::models::{Category, Priority};

/// Length of the random token at the end of every key.
pub const TOKEN_LEN: usize = 8;

/// Source of the random identifier a key token is cut from.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Fresh v4 UUID on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIdSource;

impl IdSource for RandomIdSource {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Always hands out the same UUID, for callers that need a predictable key.
#[derive(Debug, Clone, Copy)]
pub struct FixedIdSource(pub Uuid);

impl IdSource for FixedIdSource {
    fn next_id(&self) -> Uuid {
        self.0
    }
}

pub fn category_segment(category: Category) -> &'static str {
    match category {
        Category::Hardware => "HW",
        Category::Software => "SW",
        Category::Unknown => "NA",
    }
}

pub fn priority_segment(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "L",
        Priority::Medium => "M",
        Priority::High => "H",
        Priority::Urgent => "U",
    }
}

/// Four-digit year. Years outside `0..=9999` saturate so the segment never
/// grows or picks up a sign.
pub fn year_segment(year: i32) -> String {
    format!("{:04}", year.clamp(0, 9999))
}

/// First [`TOKEN_LEN`] hex digits of `id`, upper-cased.
pub fn random_segment(id: Uuid) -> String {
    let mut buf = Uuid::encode_buffer();
    let hex = id.simple().encode_upper(&mut buf);
    hex[..TOKEN_LEN].to_string()
}

/// Build a key from its parts, drawing the token from `ids`.
pub fn generate_key(
    category: Category,
    priority: Priority,
    year: i32,
    ids: &dyn IdSource,
) -> String {
    format!(
        "{}-{}-{}-{}",
        category_segment(category),
        year_segment(year),
        priority_segment(priority),
        random_segment(ids.next_id())
    )
}
