use std::path::{Path, PathBuf};

/// A single file rename inside the relocated folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRename {
    /// Original file name
    pub source_name: String,
    /// New file name, with the old folder prefix replaced
    pub destination_name: String,
}

impl FileRename {
    /// Where the file sits once the folder has moved, before its own rename
    pub fn relocated_path(&self, plan: &RenamePlan) -> PathBuf {
        plan.target_folder.join(&self.source_name)
    }

    /// Final location of the file
    pub fn destination_path(&self, plan: &RenamePlan) -> PathBuf {
        plan.target_folder.join(&self.destination_name)
    }
}

/// Every path change of one coordinated rename, computed before anything on
/// disk is touched
#[derive(Debug, Clone)]
pub struct RenamePlan {
    /// Full path to the folder being renamed
    pub source_folder: PathBuf,
    /// Full path the folder will be moved to
    pub target_folder: PathBuf,
    /// Folder base name before the rename
    pub old_base: String,
    /// New folder base name
    pub target_name: String,
    /// Prefix-matching files, in execution order
    pub file_renames: Vec<FileRename>,
    /// Names of children left untouched (non-matching files, subdirectories)
    pub untouched: Vec<String>,
}

impl RenamePlan {
    /// Old and new full paths of each planned file rename, in order
    pub fn file_paths(&self) -> Vec<(PathBuf, PathBuf)> {
        self.file_renames
            .iter()
            .map(|f| {
                (
                    self.source_folder.join(&f.source_name),
                    f.destination_path(self),
                )
            })
            .collect()
    }

    pub fn is_noop(&self) -> bool {
        self.source_folder == self.target_folder
    }
}

/// Why a plan was rejected before any mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collision {
    /// The target folder already exists
    TargetFolder(PathBuf),
    /// A renamed file would overwrite an existing entry in the folder
    File { existing: String },
}

/// Result of a rename attempt that did not hit a hard failure
#[derive(Debug, Clone)]
pub enum RenameOutcome {
    /// Folder and every planned file were renamed
    Renamed(RenamePlan),
    /// Pre-flight check failed; the source was left untouched
    Rejected { plan: RenamePlan, collision: Collision },
}

impl RenameOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, RenameOutcome::Renamed(_))
    }

    pub fn plan(&self) -> &RenamePlan {
        match self {
            RenameOutcome::Renamed(plan) => plan,
            RenameOutcome::Rejected { plan, .. } => plan,
        }
    }
}

impl Collision {
    pub fn describe(&self, folder: &Path) -> String {
        match self {
            Collision::TargetFolder(path) => {
                format!("Target folder already exists: {}", path.display())
            }
            Collision::File { existing } => format!(
                "A file named \"{}\" already exists in {}",
                existing,
                folder.display()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_plan() -> RenamePlan {
        RenamePlan {
            source_folder: PathBuf::from("/movies/Heat (1995)"),
            target_folder: PathBuf::from("/movies/Heat (1995) {imdb-tt0113277}"),
            old_base: "Heat (1995)".to_string(),
            target_name: "Heat (1995) {imdb-tt0113277}".to_string(),
            file_renames: vec![FileRename {
                source_name: "Heat (1995).mkv".to_string(),
                destination_name: "Heat (1995) {imdb-tt0113277}.mkv".to_string(),
            }],
            untouched: vec!["poster.jpg".to_string()],
        }
    }

    #[test]
    fn test_file_paths() {
        let plan = create_test_plan();

        let paths = plan.file_paths();

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].0, PathBuf::from("/movies/Heat (1995)/Heat (1995).mkv"));
        assert_eq!(
            paths[0].1,
            PathBuf::from("/movies/Heat (1995) {imdb-tt0113277}/Heat (1995) {imdb-tt0113277}.mkv")
        );
    }

    #[test]
    fn test_relocated_path() {
        let plan = create_test_plan();

        assert_eq!(
            plan.file_renames[0].relocated_path(&plan),
            PathBuf::from("/movies/Heat (1995) {imdb-tt0113277}/Heat (1995).mkv")
        );
    }

    #[test]
    fn test_outcome_succeeded() {
        let plan = create_test_plan();

        assert!(RenameOutcome::Renamed(plan.clone()).succeeded());

        let rejected = RenameOutcome::Rejected {
            collision: Collision::TargetFolder(plan.target_folder.clone()),
            plan,
        };
        assert!(!rejected.succeeded());
        assert_eq!(rejected.plan().old_base, "Heat (1995)");
    }

    #[test]
    fn test_collision_describe() {
        let folder = PathBuf::from("/movies/Heat (1995)");
        let collision = Collision::File {
            existing: "Heat.mkv".to_string(),
        };

        assert!(collision.describe(&folder).contains("Heat.mkv"));
    }
}
