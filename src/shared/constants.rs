/// Public path prefix under which stored uploads are served and referenced
pub const UPLOADS_PATH_PREFIX: &str = "/uploads/";

/// bcrypt work factor for user and volunteer passwords
pub const PASSWORD_HASH_COST: u32 = 10;
