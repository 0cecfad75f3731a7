pub mod markdown;
pub mod workflow;

pub use markdown::{extract_sections, section_key, section_summary, SectionMap};
pub use workflow::{parse_list_section, WorkflowParser};
