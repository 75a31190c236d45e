/// Highest page a listing accepts. Keeps `page * limit` far from `u64` overflow for
/// every page size the services allow.
pub const MAX_PAGE: u64 = u32::MAX as u64;

/// Raises a 1-based page to at least 1 and caps it at [`MAX_PAGE`].
pub fn clamp_page(page: u64) -> u64 {
    page.clamp(1, MAX_PAGE)
}

/// Number of rows before `page` for pages of `limit` rows.
pub fn offset(page: u64, limit: u64) -> u64 {
    clamp_page(page).saturating_sub(1).saturating_mul(limit)
}
