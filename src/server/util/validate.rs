//! Format checks for registration fields. Each returns the client-facing message on failure.

use regex::Regex;
use std::sync::LazyLock;

static USERNAME_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$"));
static EMAIL_PATTERN: LazyLock<Result<Regex, regex::Error>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$"));

fn matches(pattern: &LazyLock<Result<Regex, regex::Error>>, value: &str) -> bool {
    pattern.as_ref().is_ok_and(|re| re.is_match(value))
}

pub fn check_username(username: &str) -> Result<(), &'static str> {
    if username.chars().count() < 3 {
        return Err("Username must be at least 3 characters");
    }
    if !matches(&USERNAME_PATTERN, username) {
        return Err("Username can only contain letters, numbers, and underscores");
    }
    Ok(())
}

pub fn check_email(email: &str) -> Result<(), &'static str> {
    if !matches(&EMAIL_PATTERN, email) {
        return Err("Invalid email format");
    }
    Ok(())
}

pub fn check_student_id(student_id: &str) -> Result<(), &'static str> {
    if student_id.is_empty() || !student_id.chars().all(|c| c.is_ascii_digit()) {
        return Err("Student ID must contain only numbers");
    }
    Ok(())
}

pub fn check_name(name: &str) -> Result<(), &'static str> {
    if name.trim().chars().count() < 2 {
        return Err("Name must be at least 2 characters");
    }
    Ok(())
}
