//! Rendering and writing of the generated C file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::plan::{EmissionPlan, VectorSlot};

/// Fixed header text. No timestamp: re-runs on the same input must produce
/// a byte-identical file.
const HEADER: &str = "// Auto-generated vector table stubs\n\n";

/// Render the alias block and the `.isr_vector` array for `plan`.
pub fn render(plan: &EmissionPlan) -> String {
    let mut out = String::from(HEADER);

    for name in &plan.aliases {
        out.push_str(&format!(
            "void {name}_Handler(void) __attribute__((weak, alias(\"Default_Handler\")));\n"
        ));
    }
    out.push('\n');

    out.push_str("uint32_t vectors[] __attribute__((section(\".isr_vector\"))) = {\n");
    for slot in &plan.slots {
        match slot {
            VectorSlot::Reserved => out.push_str("STACK_START,\n"),
            VectorSlot::Placeholder => out.push_str("0,\n"),
            VectorSlot::Handler(name) => {
                out.push_str(&format!("(uint32_t)&{name}_Handler,\n"));
            }
        }
    }
    out.push_str("};\n");

    out
}

/// Write the rendered table to `path`, replacing any previous contents.
///
/// Reports the number of named vectors on success. A write failure
/// propagates to the caller; no partial-file cleanup is attempted.
pub fn write_vector_table(plan: &EmissionPlan, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, render(plan))
        .with_context(|| format!("failed to write vector table to {}", path.display()))?;
    info!(
        vectors = plan.aliases.len(),
        output = %path.display(),
        "wrote vector table"
    );
    Ok(())
}
