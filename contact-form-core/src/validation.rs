//! 表单校验

use crate::error::ValidationError;
use crate::types::FormFields;

/// All three fields must be non-empty. Values are checked as stored, without trimming.
pub fn validate(fields: &FormFields) -> Result<(), ValidationError> {
    let missing = fields.empty_fields();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}
