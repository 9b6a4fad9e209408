#![no_std]

pub const RAY: u128 = 1_000_000_000_000_000_000_000_000_000;
pub const RAY_PRECISION: usize = 27;

/// 1 internal unit of any asset, and 1.0 of the reference asset
pub const WAD: u128 = 1_000_000_000_000_000_000;
pub const WAD_PRECISION: usize = 18;

pub const BPS: usize = 10_000; // 100%
pub const BPS_PRECISION: usize = 4;

/// Extra precision carried by debt amounts on top of the internal 18 decimals
pub const INTERNAL_DEBT_PRECISION: u128 = 1_000_000_000;

/// Internal amounts are normalized to this many decimals
pub const INTERNAL_DECIMALS: usize = 18;

/// 2^112 - 1
pub const MAX_SANE_AMOUNT: u128 = 5_192_296_858_534_827_628_530_496_329_220_095;

/// Scaled supply seeded into reserves when a market is activated
pub const INITIAL_RESERVES: u64 = 1_000_000;

pub const SECONDS_PER_YEAR: u64 = 31_556_926;

/// 1.25 in WAD
pub const TARGET_HEALTH: u128 = 1_250_000_000_000_000_000;

/// 20% in WAD
pub const MAX_DISCOUNT: u128 = 200_000_000_000_000_000;

/// Health of an account without liabilities, in raw WAD units like
/// `TARGET_HEALTH`: `u128::MAX`, about 3.4e20 as a ratio. `getHealth`
/// returns these raw units unchanged.
pub const MAX_HEALTH: u128 = u128::MAX;

pub const MAX_ENTERED_MARKETS: usize = 10;

pub const DEFAULT_TWAP_WINDOW: u64 = 1_800;
pub const DEFAULT_POOL_FEE: u32 = 3_000;
pub const DEFAULT_BORROW_FACTOR: usize = 2_800;

/// 1.0001 in RAY, the price ratio between two adjacent ticks
pub const TICK_BASE: u128 = 1_000_100_000_000_000_000_000_000_000;
pub const MAX_TICK: i64 = 887_272;

/// ln(2) in RAY
pub const LN_2: u128 = 693_147_180_559_945_309_417_232_121;

pub const PRICING_TYPE_PEGGED: u8 = 1;
pub const PRICING_TYPE_TWAP: u8 = 2;
pub const PRICING_TYPE_FORWARDED: u8 = 3;
pub const PRICING_TYPE_FEED: u8 = 4;
pub const PRICING_TYPE_CUSTOM: u8 = 5;

/// Custom adapters quote against the reference asset
pub const QUOTE_TYPE_REFERENCE: u32 = 0;

pub const FEED_DECIMALS_SHIFT: u32 = 24;
pub const FEED_TIMEOUT_MASK: u32 = 0x00ff_ffff;
