//! Git revision identifier
//!
//! Revisions end up as arguments to `git`, so only a conservative character
//! set is accepted: alphanumerics plus `.`, `_`, `-`, `/`, `^` and `~`.

use std::fmt;

use crate::error::AffectedError;

const FORBIDDEN_SEQUENCES: &[&str] = &[";", "&&", "||", "|", "$", "`", "(", ")"];

/// A validated revision identifier (`HEAD^`, `origin/main`, a commit SHA).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GitRef(String);

impl GitRef {
    /// Validate and trim a revision identifier.
    pub fn parse(raw: &str) -> Result<Self, AffectedError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid(raw, "must be a non-empty string"));
        }

        // would be taken as an option by git
        if trimmed.starts_with('-') {
            return Err(invalid(raw, "must not start with '-'"));
        }

        if let Some(bad) = FORBIDDEN_SEQUENCES.iter().find(|s| trimmed.contains(*s)) {
            return Err(invalid(
                raw,
                &format!("contains potentially dangerous sequence '{}'", bad),
            ));
        }

        if !trimmed.chars().all(is_allowed_char) {
            return Err(invalid(
                raw,
                "only alphanumerics, '.', '_', '-', '/', '^' and '~' are allowed",
            ));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GitRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '/' | '^' | '~')
}

fn invalid(raw: &str, reason: &str) -> AffectedError {
    AffectedError::InvalidGitRef {
        reference: raw.to_string(),
        reason: reason.to_string(),
    }
}
