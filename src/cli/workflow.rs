//! `workflow` and `commands` subcommands: inspect the workflow documents the
//! server would hand out

use super::Settings;
use crate::models::WorkflowDefinition;
use crate::parser::section_summary;
use crate::Result;
use colored::Colorize;
use std::fmt::Write as _;

/// Print one parsed workflow
pub fn show(settings: &Settings, name: &str, json: bool) -> Result<()> {
    let loader = settings.loader();
    let workflow = loader.try_load(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&*workflow)?);
        return Ok(());
    }

    print!("{}", render(&workflow));
    Ok(())
}

/// Human-readable view of a workflow: goal, the three lists, then the
/// instruction blocks that are present
pub fn render(workflow: &WorkflowDefinition) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format!("Workflow: {}", workflow.name).cyan().bold());
    let _ = writeln!(out, "\n{}\n{}", "Goal".bold(), workflow.goal);

    let lists = [
        ("User Interaction Flow", &workflow.user_interaction_flow),
        ("Inputs Required", &workflow.inputs_required),
        ("Outputs Generated", &workflow.outputs_generated),
    ];
    for (title, items) in lists {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{}", title.bold());
        for (i, item) in items.iter().enumerate() {
            let _ = writeln!(out, "   {}. {}", i + 1, item);
        }
    }

    if workflow.is_unstructured() {
        let _ = writeln!(
            out,
            "\n{}\n{}",
            "No recognized sections; raw document follows".yellow(),
            workflow.full_content
        );
        return out;
    }

    let blocks = [
        ("Instructions", &workflow.instructions),
        ("File Templates", &workflow.file_templates),
        ("Error Handling", &workflow.error_handling),
    ];
    for (title, body) in blocks {
        if !body.is_empty() {
            let _ = writeln!(out, "\n{}\n{}", title.bold(), body);
        }
    }

    out
}

/// List available commands with the first line of their goal
pub fn list(settings: &Settings) -> Result<()> {
    let loader = settings.loader();
    let commands = loader.available_commands();

    if commands.is_empty() {
        println!(
            "{}",
            format!("No workflow documents in {}", loader.commands_dir().display()).yellow()
        );
        return Ok(());
    }

    for name in commands {
        let summary = loader
            .load(&name)
            .map(|workflow| section_summary(&workflow.goal, 80))
            .unwrap_or_default();
        println!("{:<14} {}", name.green(), summary);
    }

    Ok(())
}
