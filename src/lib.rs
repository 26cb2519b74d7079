pub mod api;
pub mod cli;
pub mod error;
pub mod logging;
pub mod output;
pub mod parser;
pub mod progress;
pub mod rename;
pub mod resolver;
pub mod sanitizer;
pub mod scanner;
pub mod selection;

pub use api::{ApiConfig, ApiError, CandidateRecord, MetadataProvider, MovieDetail, TmdbClient};
pub use error::{AppError, ExitCode};
pub use parser::{parse_folder_name, ParsedGuess};
pub use rename::{
    build_canonical_name, build_plan, rename_folder_and_files, verify_plan, Collision,
    FileRename, RenameError, RenameOutcome, RenamePlan,
};
pub use resolver::{MetadataResolver, ResolveError};
pub use sanitizer::sanitise;
pub use scanner::{scan_folder, FolderEntry, ScannerError};
