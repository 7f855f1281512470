pub mod category;
pub mod dto;
pub mod params;

pub use category::Category;
pub use dto::*;
pub use params::{ParamField, CATEGORY_PARAMS};
