//! 表单数据类型

mod fields;
mod state;

pub use fields::{FieldName, FormFields};
pub use state::{FormSnapshot, SubmissionState, FAILURE_MESSAGE, SUCCESS_MESSAGE};
