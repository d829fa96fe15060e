pub mod initialize;
pub use initialize::*;

pub mod distribute_native;
pub use distribute_native::*;

pub mod distribute_tokens;
pub use distribute_tokens::*;

pub mod distribution_data;
pub use distribution_data::*;

pub mod query_distribution;
pub use query_distribution::*;
