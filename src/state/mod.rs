//! Project State Module
//!
//! Derives the project lifecycle state from well-known paths and reads the
//! `.github/context.md` record:
//! - Lifecycle classification (NEW / EXISTING / PARTIAL / CONFIGURED)
//! - Spec folder discovery
//! - Active spec tracking

mod context_file;
mod detector;

pub use context_file::ContextReader;
pub use detector::ProjectStateDetector;

/// Configuration directory; its presence alone means PARTIAL
pub const CONFIG_DIR: &str = ".github";

/// Foundation marker; its presence means CONFIGURED
pub const FOUNDATION_DOC: &str = ".github/product.md";

/// Pre-existing code checked out next to the specs
pub const LEGACY_CODE_DIR: &str = "repos";

pub const SPECS_DIR: &str = "specs";

/// Spec folders are named `SPEC-YYYYMMDD-slug`
pub const SPEC_PREFIX: &str = "SPEC-";

pub const CONTEXT_FILE: &str = ".github/context.md";
