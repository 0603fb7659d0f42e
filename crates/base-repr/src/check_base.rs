use crate::constants::{MAX_BASE, MIN_BASE};
use crate::BaseReprError;

/// Fails with [`BaseReprError::InvalidBase`] unless `base` is within
/// [`MIN_BASE`]..=[`MAX_BASE`].
pub fn check_base(base: u32) -> Result<(), BaseReprError> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(BaseReprError::InvalidBase(base))
    }
}
