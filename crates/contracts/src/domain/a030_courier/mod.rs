pub mod dto;
pub mod scorecard;

pub use dto::*;
pub use scorecard::Scorecard;
