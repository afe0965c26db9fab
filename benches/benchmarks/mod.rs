pub mod distribution;
pub mod encode;
