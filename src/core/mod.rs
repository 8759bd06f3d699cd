pub mod stats;
pub mod validator;

pub use crate::domain::model::{NumericList, Summary};
pub use stats::{calculate_percentage, is_positive, summarize};
pub use validator::validate_summarize_request;
