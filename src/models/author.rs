//! Author model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Full author record from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: String,
    pub full_name: String,
    pub nationality: Option<String>,
    pub biography: Option<String>,
}

/// Register/update author request carrying the author's full name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthorFullName {
    pub full_name: String,
    pub nationality: Option<String>,
    pub biography: Option<String>,
}

/// Derive the base author id from a full name.
///
/// Leading name words contribute their first letter, the final word is kept
/// whole; non-alphanumeric characters are stripped ("Mark Twain" -> "MTwain").
/// Returns an empty string when the name has no alphanumeric content; callers
/// must reject that case before persisting.
pub fn author_id_from_name(full_name: &str) -> String {
    let words: Vec<String> = full_name
        .split_whitespace()
        .map(|w| w.chars().filter(|c| c.is_alphanumeric()).collect())
        .filter(|w: &String| !w.is_empty())
        .collect();

    match words.split_last() {
        None => String::new(),
        Some((last, leading)) => {
            let mut id = String::new();
            for word in leading {
                // word is non-empty, checked above
                id.extend(word.chars().next());
            }
            id.push_str(last);
            id
        }
    }
}
