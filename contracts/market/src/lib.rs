pub mod contract;
pub mod error;
mod events;
pub mod execute;
pub mod pool;
pub mod providers;
pub mod query;
pub mod simulate;
pub mod state;
pub mod supply;
pub mod swap;
pub mod traits;
