use anyhow::{Context, Result};
use console::style;
use std::path::Path;

use crate::analyze::parse_module;
use crate::emit::OutlineOutput;
use crate::resolve::{FsResolver, SourceResolver};

pub fn run_outline(file: &Path, json: bool) -> Result<()> {
    let content = FsResolver
        .read(file)
        .with_context(|| format!("cannot outline {}", file.display()))?;
    let procedures = parse_module(&content);

    if json {
        let output = OutlineOutput::new(file.display().to_string(), procedures);
        println!("{}", output.to_json());
        return Ok(());
    }

    if procedures.is_empty() {
        println!("No procedures found in {}", style(file.display()).italic());
        return Ok(());
    }

    println!(
        "\n{} ({} procedures)\n",
        style(file.display()).green().bold(),
        style(procedures.len()).cyan()
    );

    for record in &procedures {
        let lines = style(format!("L{}-{}", record.start_line, record.end_line)).dim();
        match &record.binding {
            Some(binding) => println!(
                "  {} {} {} {}",
                record.kind,
                style(&record.name).yellow(),
                lines,
                style(format!("[{} {}]", binding.directive, binding.base_proc_name)).cyan()
            ),
            None => println!("  {} {} {}", record.kind, style(&record.name).yellow(), lines),
        }
    }
    println!();

    Ok(())
}
