//! Query string parameters shared by the listing handlers.
//!
//! Values arrive as raw strings and are parsed here so that a malformed value
//! produces a 422 with a readable message. Unknown parameters are ignored.

use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// `GET /projects` parameters (`?category=&featured=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct ProjectParams {
    pub category: Option<String>,
    pub featured: Option<String>,
    pub limit: Option<String>,
}

/// `GET /testimonials` parameters (`?limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

/// Parses a non-negative `limit`, falling back to `default` when absent.
pub fn parse_limit(raw: Option<&str>, default: usize) -> AppResult<usize> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse::<usize>().map_err(|_| {
            AppError::InvalidInput(format!(
                "query parameter limit must be a non-negative integer, got {value:?}"
            ))
        }),
    }
}

/// Parses a boolean flag such as `featured`.
///
/// Accepts `true/false`, `t/f`, `1/0`, `yes/no`, `y/n` and `on/off`, case-insensitively.
pub fn parse_flag(name: &str, raw: Option<&str>) -> AppResult<Option<bool>> {
    let Some(value) = raw else {
        return Ok(None);
    };

    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "t" | "1" | "yes" | "y" | "on" => Ok(Some(true)),
        "false" | "f" | "0" | "no" | "n" | "off" => Ok(Some(false)),
        _ => Err(AppError::InvalidInput(format!(
            "query parameter {name} must be a boolean, got {value:?}"
        ))),
    }
}

/// An empty string counts as not supplied.
pub fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| !value.is_empty())
}
