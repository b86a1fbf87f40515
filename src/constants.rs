/// Row cap for the public-facing project listing. The admin listing is
/// uncapped.
pub const PUBLIC_PROJECT_LIMIT: i64 = 3;
