use near_sdk::NearToken;

pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 250;
pub const MAX_PLATFORM_FEE_BPS: u16 = 1_000; // 10%
pub const BASIS_POINTS: u16 = 10_000; // 100%

pub const MAX_SLUG_LEN: usize = 64;
pub const MAX_CONTENT_REF_LEN: usize = 512;

// Storage key invariant: delimiter cannot appear in NEAR account IDs, preventing purchase key collisions.
pub const DELIMETER: &str = ":";
pub const ONE_YOCTO: NearToken = NearToken::from_yoctonear(1);

pub const DEFAULT_PAGE_LIMIT: u32 = 50;
pub const MAX_PAGE_LIMIT: u32 = 100;

pub const GAS_RESOLVE_PURCHASE_TGAS: u64 = 40;
pub const GAS_LEG_CALLBACK_TGAS: u64 = 10;
pub const GAS_MIGRATE_TGAS: u64 = 200;
