use super::Settings;
use crate::context::{foundation_documents, relevant_docs};
use crate::models::DocumentMetadata;
use crate::state::ProjectStateDetector;
use crate::Result;
use colored::Colorize;

fn print_doc(doc: &DocumentMetadata, detector: &ProjectStateDetector) {
    let marker = if detector.document_exists(doc.name) {
        "✓".green()
    } else {
        "✗".red()
    };
    println!("   {} {:<28} {}", marker, doc.path, doc.description.bright_black());
}

/// Show which documents to fetch, optionally narrowed by intent
pub fn run(settings: &Settings, intent: Option<&str>) -> Result<()> {
    let detector = ProjectStateDetector::new(&settings.project_root);

    println!("{}", "Foundation documents (always fetched)".cyan().bold());
    for doc in foundation_documents() {
        print_doc(doc, &detector);
    }

    if let Some(intent) = intent {
        println!();
        println!("{}", format!("Relevant to \"{}\"", intent).cyan().bold());
        let docs = relevant_docs(intent);
        if docs.is_empty() {
            println!("   No additional technical docs needed");
        }
        for doc in docs {
            print_doc(doc, &detector);
        }
    }

    Ok(())
}
