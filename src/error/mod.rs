mod codes;

pub use codes::ExitCode;

use crate::rename::RenameError;
use crate::resolver::ResolveError;
use crate::scanner::ScannerError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Folder not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    #[error("Path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("No metadata found for \"{title}\"")]
    NoMatch { title: String, year: Option<String> },

    #[error("Movie {id} not found")]
    LookupError { id: u64 },

    #[error("Metadata request failed: {context}")]
    TransportError { context: String, message: String },

    #[error("Target already exists")]
    TargetExists { folder: PathBuf, reason: String },

    #[error("Rename only partially completed in {folder}")]
    PartialRename {
        folder: PathBuf,
        from: String,
        to: String,
        remaining: Vec<String>,
        message: String,
    },

    #[error("Rename failed: {from} -> {to}")]
    RenameError {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::DirectoryNotFound { .. } => ExitCode::DirectoryNotFound,
            AppError::NotADirectory { .. } => ExitCode::DirectoryNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::InvalidArguments(_) => ExitCode::InvalidArguments,
            AppError::ConfigError { .. } => ExitCode::ConfigError,
            AppError::NoMatch { .. } => ExitCode::NoMatch,
            AppError::LookupError { .. } => ExitCode::LookupError,
            AppError::TransportError { .. } => ExitCode::TransportError,
            AppError::TargetExists { .. } => ExitCode::TargetExists,
            AppError::PartialRename { .. } => ExitCode::PartialRename,
            AppError::RenameError { .. } => ExitCode::RenameError,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::DirectoryNotFound { path } => {
                format!(
                    "The specified folder does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotADirectory { path } => {
                format!(
                    "The specified path is not a directory:\n  {}\n\n\
                     Please provide the movie folder itself.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::InvalidArguments(message) => message.clone(),

            AppError::ConfigError { message } => {
                format!(
                    "{}\n\n\
                     Set TMDB_API_KEY in the environment or in a .env file\n\
                     in the working directory.",
                    message
                )
            }

            AppError::NoMatch { title, year } => {
                let year_info = year
                    .as_ref()
                    .map(|y| format!("\n  Year:  {}", y))
                    .unwrap_or_default();

                format!(
                    "No metadata found on TMDB for:\n  Title: {}{}\n\n\
                     Nothing was renamed. Rename the folder to \"<Title> (<Year>)\"\n\
                     or pass --id with the TMDB movie id.",
                    title, year_info
                )
            }

            AppError::LookupError { id } => {
                format!(
                    "TMDB does not recognise movie id {}.\n\n\
                     The id may have been merged or removed. Search again without --id.",
                    id
                )
            }

            AppError::TransportError { context, message } => {
                format!(
                    "Failed to fetch metadata ({}):\n  {}\n\n\
                     This could be due to:\n\
                     - Network connectivity issues\n\
                     - TMDB rate limiting\n\
                     - An invalid API key\n\n\
                     Nothing was renamed. Try again later.",
                    context, message
                )
            }

            AppError::TargetExists { folder, reason } => {
                format!(
                    "{}\n\n\
                     Nothing was renamed; {} is unchanged.\n\
                     Move or remove the existing entry, or pick a different match.",
                    reason,
                    folder.display()
                )
            }

            AppError::PartialRename {
                folder,
                from,
                to,
                remaining,
                message,
            } => {
                let mut msg = format!(
                    "RENAME INCOMPLETE\n\n\
                     The folder was renamed to:\n  {}\n\
                     but renaming a file inside it failed:\n\
                     From:  {}\n\
                     To:    {}\n\
                     Error: {}\n\n\
                     Files still under their old name:\n",
                    folder.display(),
                    from,
                    to,
                    message
                );
                for name in remaining {
                    msg.push_str(&format!("  - {}\n", name));
                }
                msg.push_str("\nRename these files by hand to finish the operation.");
                msg
            }

            AppError::RenameError { from, to, source } => {
                format!(
                    "Failed to rename folder:\n\
                     From: {}\n\
                     To:   {}\n\
                     Error: {}\n\n\
                     Nothing was changed. Check permissions and ensure no files are open.",
                    from.display(),
                    to.display(),
                    source
                )
            }

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ScannerError> for AppError {
    fn from(err: ScannerError) -> Self {
        match err {
            ScannerError::PathNotFound(path) => AppError::DirectoryNotFound { path },
            ScannerError::NotADirectory(path) => AppError::NotADirectory { path },
            ScannerError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ScannerError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

impl From<ResolveError> for AppError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::EmptyTitle => {
                AppError::InvalidArguments("Folder name has no title to search for".to_string())
            }
            ResolveError::NoMatch { title, year } => AppError::NoMatch { title, year },
            ResolveError::Lookup { id } => AppError::LookupError { id },
            ResolveError::Transport { context, source } => AppError::TransportError {
                context,
                message: source.to_string(),
            },
            ResolveError::SelectionCancelled => {
                AppError::Other("No candidate selected, nothing was renamed".to_string())
            }
            ResolveError::NotConfigured(source) => AppError::ConfigError {
                message: source.to_string(),
            },
        }
    }
}

impl From<RenameError> for AppError {
    fn from(err: RenameError) -> Self {
        match err {
            RenameError::InvalidTargetName(name) => {
                AppError::InvalidArguments(format!("Invalid target name: {:?}", name))
            }
            RenameError::InvalidSource(path) => {
                AppError::InvalidArguments(format!("Not a usable folder path: {}", path.display()))
            }
            RenameError::Scan(e) => e.into(),
            RenameError::FolderRename { from, to, source } => {
                AppError::RenameError { from, to, source }
            }
            RenameError::PartialRename {
                folder,
                from,
                to,
                remaining,
                source,
                ..
            } => AppError::PartialRename {
                folder,
                from,
                to,
                remaining,
                message: source.to_string(),
            },
        }
    }
}
