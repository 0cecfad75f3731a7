use super::Settings;
use crate::models::{ProjectContext, ProjectState};
use crate::state::{ContextReader, ProjectStateDetector};
use crate::Result;
use colored::Colorize;
use serde::Serialize;

/// Snapshot printed by `sdd-mcp status`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    pub state: ProjectState,
    pub description: String,
    pub ready: bool,
    pub context: Option<ProjectContext>,
    pub available_specs: Vec<String>,
}

pub fn collect(settings: &Settings) -> StatusReport {
    let detector = ProjectStateDetector::new(&settings.project_root);
    let state = detector.detect();

    StatusReport {
        state,
        description: state.describe().to_string(),
        ready: state == ProjectState::Configured,
        context: ContextReader::new(&settings.project_root).read(),
        available_specs: detector.available_specs(),
    }
}

pub fn run(settings: &Settings, json: bool) -> Result<()> {
    let report = collect(settings);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("Project: {}", settings.project_root.display()).cyan().bold()
    );
    println!();

    let state_label = match report.state {
        ProjectState::New => report.state.name().yellow(),
        ProjectState::Existing => report.state.name().blue(),
        ProjectState::Partial => report.state.name().yellow(),
        ProjectState::Configured => report.state.name().green(),
    };
    println!("   State:       {}", state_label);
    println!("   Description: {}", report.description);
    println!(
        "   Ready:       {}",
        if report.ready { "yes".green() } else { "no".red() }
    );

    match &report.context {
        Some(context) => {
            println!("   Active spec: {}", context.active_spec);
            println!("   Updated:     {}", context.last_updated);
            println!("   Phase:       {}", context.project_state);
        }
        None => println!("   Context:     {}", "no .github/context.md".bright_black()),
    }

    if !report.available_specs.is_empty() {
        println!();
        println!("{}", "Specs:".bold());
        for spec in &report.available_specs {
            println!("   - {}", spec);
        }
    }

    Ok(())
}
