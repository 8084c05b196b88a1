//! Clean command - batch cleansing of measurement exports

use std::path::Path;

use anyhow::{Context, Result};
use vcds_conv::batch_clean;

use crate::output::OutputContext;

/// Clean every raw export in `input_dir` into `output_dir`
pub fn clean(input_dir: &Path, output_dir: &Path, ctx: &OutputContext) -> Result<()> {
    let summary = batch_clean(input_dir, output_dir)
        .with_context(|| format!("Failed to clean exports in {}", input_dir.display()))?;

    if summary.found == 0 {
        ctx.info(&format!("No *.csv exports in {}", input_dir.display()));
        return Ok(());
    }

    ctx.print_kv(&[
        ("Found", summary.found.to_string()),
        ("Cleaned", summary.written.to_string()),
        ("Empty", summary.empty.to_string()),
        ("Failed", summary.failed.to_string()),
    ]);

    if summary.failed > 0 {
        ctx.warn(&format!(
            "{} file(s) could not be cleaned (run with --verbose for details)",
            summary.failed
        ));
    } else {
        ctx.success(&format!("Cleaned tables written to {}", output_dir.display()));
    }
    Ok(())
}
