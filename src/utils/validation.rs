//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{self, ADMIN_SCORE_MAX, SUPERVISOR_SCORE_MAX};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex")
});

/// Validate email format
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}

/// Validate user role
pub fn validate_role(role: &str) -> Result<(), &'static str> {
    if constants::roles::ALL.contains(&role) {
        Ok(())
    } else {
        Err("Invalid role")
    }
}

/// Validate submission stage
pub fn validate_stage(stage: &str) -> Result<(), &'static str> {
    if constants::stages::ALL.contains(&stage) {
        Ok(())
    } else {
        Err("Invalid submission stage")
    }
}

/// Validate supervisor score range
pub fn validate_supervisor_score(score: f64) -> Result<(), &'static str> {
    if (0.0..=SUPERVISOR_SCORE_MAX).contains(&score) {
        Ok(())
    } else {
        Err("Supervisor score must be between 0 and 10")
    }
}

/// Validate admin score range
pub fn validate_admin_score(score: f64) -> Result<(), &'static str> {
    if (0.0..=ADMIN_SCORE_MAX).contains(&score) {
        Ok(())
    } else {
        Err("Admin score must be between 0 and 20")
    }
}

/// Validate an uploaded document reference
///
/// The reference is an opaque pre-validated URL; only non-emptiness and
/// scheme shape are checked here.
pub fn validate_document_ref(url: &str, name: &str) -> Result<(), &'static str> {
    if url.trim().is_empty() {
        return Err("Document URL cannot be empty");
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err("Document URL must be an http(s) link");
    }
    if name.trim().is_empty() {
        return Err("Document name cannot be empty");
    }
    Ok(())
}

/// Sanitize string input (remove control characters, trim whitespace)
pub fn sanitize_string(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validate and sanitize a team name
pub fn validate_team_name(name: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(name);
    if sanitized.is_empty() {
        return Err("Team name cannot be empty");
    }
    if sanitized.len() > constants::MAX_TEAM_NAME_LENGTH as usize {
        return Err("Team name must be at most 128 characters");
    }
    Ok(sanitized)
}

/// Validate and sanitize a project title
pub fn validate_project_title(title: &str) -> Result<String, &'static str> {
    let sanitized = sanitize_string(title);
    if sanitized.is_empty() {
        return Err("Project title cannot be empty");
    }
    if sanitized.len() > constants::MAX_PROJECT_TITLE_LENGTH as usize {
        return Err("Project title must be at most 256 characters");
    }
    Ok(sanitized)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("first.last@dept.university.edu").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
    }

    #[test]
    fn test_validate_role() {
        assert!(validate_role("student").is_ok());
        assert!(validate_role("supervisor").is_ok());
        assert!(validate_role("admin").is_ok());
        assert!(validate_role("organizer").is_err());
    }

    #[test]
    fn test_validate_stage() {
        assert!(validate_stage("synopsis").is_ok());
        assert!(validate_stage("final_submission").is_ok());
        assert!(validate_stage("midterm").is_err());
    }

    #[test]
    fn test_validate_scores() {
        assert!(validate_supervisor_score(0.0).is_ok());
        assert!(validate_supervisor_score(8.5).is_ok());
        assert!(validate_supervisor_score(10.0).is_ok());
        assert!(validate_supervisor_score(10.5).is_err());
        assert!(validate_supervisor_score(-0.1).is_err());

        assert!(validate_admin_score(20.0).is_ok());
        assert!(validate_admin_score(20.1).is_err());
    }

    #[test]
    fn test_validate_document_ref() {
        assert!(validate_document_ref("https://drive.example.com/f/1", "synopsis.pdf").is_ok());
        assert!(validate_document_ref("", "synopsis.pdf").is_err());
        assert!(validate_document_ref("ftp://host/f", "synopsis.pdf").is_err());
        assert!(validate_document_ref("https://drive.example.com/f/1", "  ").is_err());
    }

    #[test]
    fn test_validate_team_name() {
        assert_eq!(validate_team_name("  Alpha  ").unwrap(), "Alpha");
        assert!(validate_team_name("   ").is_err());
    }
}
