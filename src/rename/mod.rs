mod engine;
mod name_builder;
mod types;

pub use engine::{
    apply_plan, build_plan, execute_plan, find_collision, rename_folder_and_files, verify_plan,
    RenameError,
};
pub use name_builder::build_canonical_name;
pub use types::{Collision, FileRename, RenameOutcome, RenamePlan};
