use anyhow::Result;

use crate::output;

pub fn execute(format: &str) -> Result<()> {
    output::print_keys(format);
    Ok(())
}
