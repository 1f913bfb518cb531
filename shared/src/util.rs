/// Current UTC timestamp in milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a prefixed record ID: `{prefix}_{millis}_{9 base36 chars}`.
///
/// Same shape as the IDs in collections written by earlier client builds
/// (`user_1712345678901_k3f9x2m1q`). Uniqueness at guest-app scale comes
/// from the millisecond timestamp plus the random suffix; collisions are
/// not actively detected.
pub fn record_id(prefix: &str) -> String {
    use rand::Rng;
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    format!("{prefix}_{}_{suffix}", now_millis())
}
