//! Range validation for allocated blocks

use crate::models::NetworkBlock;
use crate::{Error, Result};

/// Check that `block` lies entirely within `base`
pub fn validate(block: &NetworkBlock, base: &NetworkBlock) -> Result<()> {
    if !base.contains(block) {
        return Err(Error::NotContained {
            block: *block,
            base: *base,
        });
    }
    Ok(())
}
