use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Random lowercase base36 string of `len` characters.
pub fn random_base36(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
        .collect()
}

/// Deadline id: `{unix_millis}-{9 random base36 chars}-{first 8 chars of external id}`.
pub fn deadline_id(now_millis: i64, creator_external_id: &str) -> String {
    let prefix: String = creator_external_id.chars().take(8).collect();
    format!("{}-{}-{}", now_millis, random_base36(9), prefix)
}

/// Trims, lowercases and dedupes interests, dropping empty entries and keeping the
/// first occurrence order.
pub fn normalize_interests(interests: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for interest in interests {
        let interest = interest.trim().to_lowercase();
        if !interest.is_empty() && !normalized.contains(&interest) {
            normalized.push(interest);
        }
    }
    normalized
}

/// Username derived from the local part of an email address.
pub fn username_from_email(email: &str) -> String {
    email.split('@').next().unwrap_or_default().to_string()
}

/// Room slug used when the host does not pick one.
pub fn default_room_slug() -> String {
    format!("study-{}", random_base36(6))
}
