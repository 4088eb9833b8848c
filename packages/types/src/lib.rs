pub mod adapters;
pub mod coin;
pub mod market;
pub mod oracle;

/// Reserve asset every stable denomination is priced against.
pub const MICRO_LUNA_DENOM: &str = "uluna";

/// Internal pricing denomination swaps are normalized through.
pub const MICRO_SDR_DENOM: &str = "usdr";
