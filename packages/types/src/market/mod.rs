mod msg;
mod params;

pub use msg::*;
pub use params::*;
