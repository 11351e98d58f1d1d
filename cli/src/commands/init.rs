use std::path::Path;

use anyhow::bail;
use tracing::info;

use crate::commands::InitArgs;
use contractr_common::{contract::ContractConfig, success};
use contractr_core::export;

pub fn init(args: &InitArgs) -> anyhow::Result<()> {
    write_sample(&args.path, args.force)?;

    success!("Sample contract parameters written to {}", args.path.display());
    info!(
        "Edit it, then run `contractr generate --config {}`",
        args.path.display()
    );
    Ok(())
}

/// Writes the sample parameters to `path`. An existing file is only replaced
/// when `force` is set.
fn write_sample(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!("{} already exists, pass --force to overwrite it", path.display());
    }

    let raw: String = ContractConfig::sample().to_toml_string()?;
    export::write(path, &raw)
}
