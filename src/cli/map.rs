use anyhow::Result;
use console::style;
use std::path::Path;

use crate::emit::MappingOutput;
use crate::resolve::{BreakpointTranslator, FsResolver};

pub fn run_map(base: &Path, extension: &Path, lines: &[usize], json: bool) -> Result<()> {
    let mappings = BreakpointTranslator::new(FsResolver).translate_all(base, lines, extension);

    if json {
        let output = MappingOutput::new(
            base.display().to_string(),
            extension.display().to_string(),
            mappings,
        );
        println!("{}", output.to_json());
        return Ok(());
    }

    for mapping in &mappings {
        if mapping.is_mapped() {
            let targets: Vec<String> = mapping
                .extension_lines
                .iter()
                .map(|l| l.to_string())
                .collect();
            println!(
                "{}:{} -> {}:{}",
                base.display(),
                mapping.base_line,
                extension.display(),
                style(targets.join(",")).green()
            );
        } else {
            println!(
                "{}:{} -> {}",
                base.display(),
                mapping.base_line,
                style("unmapped").dim()
            );
        }
    }

    Ok(())
}
