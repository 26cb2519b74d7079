use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::scanner::{scan_folder, ScannerError};

use super::types::{Collision, FileRename, RenameOutcome, RenamePlan};

/// Errors that can occur during a coordinated rename
#[derive(Error, Debug)]
pub enum RenameError {
    #[error("Invalid target name: {0:?}")]
    InvalidTargetName(String),

    #[error("Source folder has no usable name: {0}")]
    InvalidSource(PathBuf),

    #[error(transparent)]
    Scan(#[from] ScannerError),

    #[error("Failed to rename '{from}' to '{to}': {source}")]
    FolderRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Folder was renamed to {folder}, but renaming '{from}' to '{to}' failed \
         after {completed} file(s): {source}"
    )]
    PartialRename {
        folder: PathBuf,
        from: String,
        to: String,
        completed: usize,
        /// Files still under their old name, including the one that failed
        remaining: Vec<String>,
        #[source]
        source: std::io::Error,
    },
}

/// Rename `source_folder` to `target_name` and carry every file whose name
/// starts with the old folder name along with it.
///
/// Returns [`RenameOutcome::Rejected`] without touching anything if the
/// target folder, or any renamed file's new name, already exists.
pub fn rename_folder_and_files(
    source_folder: &Path,
    target_name: &str,
) -> Result<RenameOutcome, RenameError> {
    let plan = build_plan(source_folder, target_name)?;
    apply_plan(plan)
}

/// Compute every path change without touching the filesystem
pub fn build_plan(source_folder: &Path, target_name: &str) -> Result<RenamePlan, RenameError> {
    validate_target_name(target_name)?;

    let old_base = source_folder
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| RenameError::InvalidSource(source_folder.to_path_buf()))?
        .to_string();

    let parent = source_folder
        .parent()
        .ok_or_else(|| RenameError::InvalidSource(source_folder.to_path_buf()))?;

    let target_folder = parent.join(target_name);

    let mut file_renames = Vec::new();
    let mut untouched = Vec::new();

    for entry in scan_folder(source_folder)? {
        let prefixed_rest = entry
            .name_str()
            .filter(|_| entry.is_file)
            .and_then(|name| name.strip_prefix(old_base.as_str()).map(|rest| (name, rest)));

        match prefixed_rest {
            Some((name, rest)) => {
                let destination_name = format!("{}{}", target_name, rest);
                debug!(from = %name, to = %destination_name, "Planned file rename");
                file_renames.push(FileRename {
                    source_name: name.to_string(),
                    destination_name,
                });
            }
            None => {
                let name = entry.name.to_string_lossy().to_string();
                debug!(name = %name, "Leaving entry untouched");
                untouched.push(name);
            }
        }
    }

    Ok(RenamePlan {
        source_folder: source_folder.to_path_buf(),
        target_folder,
        old_base,
        target_name: target_name.to_string(),
        file_renames,
        untouched,
    })
}

/// Pre-flight check and execute a plan
pub fn apply_plan(plan: RenamePlan) -> Result<RenameOutcome, RenameError> {
    if let Some(collision) = find_collision(&plan)? {
        warn!(
            reason = %collision.describe(&plan.source_folder),
            "Rename rejected, nothing was changed"
        );
        return Ok(RenameOutcome::Rejected { plan, collision });
    }

    execute_plan(&plan)?;

    Ok(RenameOutcome::Renamed(plan))
}

/// Check that no path the plan writes to is already taken.
///
/// Any existing entry matching a new file name counts as a collision, even
/// one that the plan itself would move away first.
pub fn find_collision(plan: &RenamePlan) -> Result<Option<Collision>, RenameError> {
    // symlink_metadata also catches dangling links
    if fs::symlink_metadata(&plan.target_folder).is_ok() {
        return Ok(Some(Collision::TargetFolder(plan.target_folder.clone())));
    }

    let existing: HashSet<_> = scan_folder(&plan.source_folder)?
        .into_iter()
        .map(|e| e.name)
        .collect();

    let clash = plan.file_renames.iter().find(|f| {
        f.destination_name != f.source_name
            && existing.contains(std::ffi::OsStr::new(&f.destination_name))
    });

    Ok(clash.map(|f| Collision::File {
        existing: f.destination_name.clone(),
    }))
}

/// Perform the renames: the folder first, then each file inside it in plan
/// order. Callers must run [`find_collision`] first.
pub fn execute_plan(plan: &RenamePlan) -> Result<(), RenameError> {
    info!(
        "Renaming folder: {} -> {}",
        plan.source_folder.display(),
        plan.target_folder.display()
    );

    fs::rename(&plan.source_folder, &plan.target_folder).map_err(|e| {
        RenameError::FolderRename {
            from: plan.source_folder.clone(),
            to: plan.target_folder.clone(),
            source: e,
        }
    })?;

    for (i, file) in plan.file_renames.iter().enumerate() {
        let from = file.relocated_path(plan);
        let to = file.destination_path(plan);

        if let Err(e) = fs::rename(&from, &to) {
            let remaining: Vec<String> = plan.file_renames[i..]
                .iter()
                .map(|f| f.source_name.clone())
                .collect();

            warn!(
                completed = i,
                remaining = remaining.len(),
                "File rename failed after folder was moved"
            );

            return Err(RenameError::PartialRename {
                folder: plan.target_folder.clone(),
                from: file.source_name.clone(),
                to: file.destination_name.clone(),
                completed: i,
                remaining,
                source: e,
            });
        }

        info!("Renamed: {} -> {}", file.source_name, file.destination_name);
    }

    Ok(())
}

/// List every path the plan should have produced that is missing on disk.
/// Empty after a fully successful rename.
pub fn verify_plan(plan: &RenamePlan) -> Vec<PathBuf> {
    let expected = std::iter::once(plan.target_folder.clone())
        .chain(plan.file_renames.iter().map(|f| f.destination_path(plan)))
        .chain(plan.untouched.iter().map(|name| plan.target_folder.join(name)));

    expected
        .filter(|path| fs::symlink_metadata(path).is_err())
        .collect()
}

fn validate_target_name(name: &str) -> Result<(), RenameError> {
    let invalid = name.trim().is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);

    if invalid {
        return Err(RenameError::InvalidTargetName(name.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_folder(base: &Path, name: &str, files: &[&str]) -> PathBuf {
        let folder = base.join(name);
        fs::create_dir(&folder).unwrap();
        for file in files {
            fs::write(folder.join(file), "").unwrap();
        }
        folder
    }

    fn file_names(folder: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(folder)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_build_plan_splits_matching_and_untouched() {
        let dir = tempdir().unwrap();
        let folder = create_folder(
            dir.path(),
            "Heat (1995)",
            &["Heat (1995).mkv", "Heat (1995).en.srt", "poster.jpg"],
        );
        fs::create_dir(folder.join("Heat (1995) extras")).unwrap();

        let plan = build_plan(&folder, "Heat (1995) {imdb-tt0113277}").unwrap();

        assert_eq!(plan.old_base, "Heat (1995)");
        assert_eq!(plan.target_folder, dir.path().join("Heat (1995) {imdb-tt0113277}"));
        assert_eq!(
            plan.file_renames,
            vec![
                FileRename {
                    source_name: "Heat (1995).en.srt".to_string(),
                    destination_name: "Heat (1995) {imdb-tt0113277}.en.srt".to_string(),
                },
                FileRename {
                    source_name: "Heat (1995).mkv".to_string(),
                    destination_name: "Heat (1995) {imdb-tt0113277}.mkv".to_string(),
                },
            ]
        );
        // Subdirectories are never renamed, even when they share the prefix
        assert_eq!(plan.untouched, vec!["Heat (1995) extras", "poster.jpg"]);
        // Planning alone changes nothing
        assert!(folder.exists());
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        let dir = tempdir().unwrap();
        let folder = create_folder(dir.path(), "Heat (1995)", &["heat (1995).mkv"]);

        let plan = build_plan(&folder, "Heat (1995) {imdb-tt0113277}").unwrap();

        assert!(plan.file_renames.is_empty());
        assert_eq!(plan.untouched, vec!["heat (1995).mkv"]);
    }

    #[test]
    fn test_invalid_target_names() {
        let dir = tempdir().unwrap();
        let folder = create_folder(dir.path(), "Heat (1995)", &["Heat (1995).mkv"]);

        for name in ["", "   ", ".", "..", "a/b", "a\\b"] {
            let result = rename_folder_and_files(&folder, name);
            assert!(
                matches!(result, Err(RenameError::InvalidTargetName(_))),
                "name: {:?}",
                name
            );
        }

        assert_eq!(file_names(&folder), vec!["Heat (1995).mkv"]);
    }

    #[test]
    fn test_missing_source_folder() {
        let dir = tempdir().unwrap();

        let result = rename_folder_and_files(&dir.path().join("Nope (2000)"), "Other (2000)");

        assert!(matches!(
            result,
            Err(RenameError::Scan(ScannerError::PathNotFound(_)))
        ));
    }

    #[test]
    fn test_file_collision_rejects_without_mutation() {
        let dir = tempdir().unwrap();
        let folder = create_folder(
            dir.path(),
            "Heat",
            &["Heat.mkv", "Heat (1995).mkv"],
        );

        // "Heat.mkv" would become "Heat (1995).mkv", which already exists
        let outcome = rename_folder_and_files(&folder, "Heat (1995)").unwrap();

        assert!(!outcome.succeeded());
        assert!(matches!(
            outcome,
            RenameOutcome::Rejected {
                collision: Collision::File { .. },
                ..
            }
        ));
        assert!(folder.exists());
        assert!(!dir.path().join("Heat (1995)").exists());
        assert_eq!(file_names(&folder), vec!["Heat (1995).mkv", "Heat.mkv"]);
    }

    #[test]
    fn test_same_name_is_rejected_as_existing_target() {
        let dir = tempdir().unwrap();
        let folder = create_folder(dir.path(), "Heat (1995)", &["Heat (1995).mkv"]);

        let outcome = rename_folder_and_files(&folder, "Heat (1995)").unwrap();

        assert!(outcome.plan().is_noop());
        assert!(matches!(
            outcome,
            RenameOutcome::Rejected {
                collision: Collision::TargetFolder(_),
                ..
            }
        ));
        assert_eq!(file_names(&folder), vec!["Heat (1995).mkv"]);
    }

    #[test]
    fn test_file_named_exactly_like_folder() {
        let dir = tempdir().unwrap();
        let folder = create_folder(dir.path(), "Heat (1995)", &["Heat (1995)"]);

        let outcome = rename_folder_and_files(&folder, "Heat (1995) {imdb-tt0113277}").unwrap();

        assert!(outcome.succeeded());
        let target = dir.path().join("Heat (1995) {imdb-tt0113277}");
        assert_eq!(file_names(&target), vec!["Heat (1995) {imdb-tt0113277}"]);
    }

    #[test]
    fn test_partial_rename_is_reported() {
        let dir = tempdir().unwrap();
        let folder = create_folder(dir.path(), "Heat (1995)", &["Heat (1995).mkv"]);

        let mut plan = build_plan(&folder, "Heat (1995) {imdb-tt0113277}").unwrap();
        // A planned file that vanished before execution
        plan.file_renames.push(FileRename {
            source_name: "Heat (1995).zz.srt".to_string(),
            destination_name: "Heat (1995) {imdb-tt0113277}.zz.srt".to_string(),
        });

        let result = execute_plan(&plan);

        match result {
            Err(RenameError::PartialRename {
                completed,
                remaining,
                from,
                ..
            }) => {
                assert_eq!(completed, 1);
                assert_eq!(remaining, vec!["Heat (1995).zz.srt"]);
                assert_eq!(from, "Heat (1995).zz.srt");
            }
            other => panic!("Expected PartialRename, got {:?}", other),
        }

        // Folder move is committed; the first file was renamed
        assert!(!folder.exists());
        assert_eq!(
            file_names(&plan.target_folder),
            vec!["Heat (1995) {imdb-tt0113277}.mkv"]
        );

        let missing = verify_plan(&plan);
        assert_eq!(
            missing,
            vec![plan.target_folder.join("Heat (1995) {imdb-tt0113277}.zz.srt")]
        );
    }

    #[test]
    fn test_verify_plan_after_success() {
        let dir = tempdir().unwrap();
        let folder = create_folder(
            dir.path(),
            "Heat (1995)",
            &["Heat (1995).mkv", "fanart.jpg"],
        );

        let outcome = rename_folder_and_files(&folder, "Heat (1995) {imdb-tt0113277}").unwrap();

        assert!(outcome.succeeded());
        assert!(verify_plan(outcome.plan()).is_empty());
    }

    #[test]
    fn test_verify_plan_before_execution_reports_everything() {
        let dir = tempdir().unwrap();
        let folder = create_folder(dir.path(), "Heat (1995)", &["Heat (1995).mkv"]);

        let plan = build_plan(&folder, "Heat (1995) {imdb-tt0113277}").unwrap();

        assert_eq!(verify_plan(&plan).len(), 2);
    }
}
