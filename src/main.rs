use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, error, info, warn};

use media_renamer::api::config_from_env;
use media_renamer::cli::Args;
use media_renamer::logging;
use media_renamer::output::{display_execution_result, display_plan};
use media_renamer::progress::Progress;
use media_renamer::rename::{apply_plan, find_collision};
use media_renamer::scanner::ensure_directory;
use media_renamer::selection::{choose_candidate, confirm, SelectionPolicy};
use media_renamer::{
    build_canonical_name, build_plan, parse_folder_name, verify_plan, AppError, MetadataResolver,
    MovieDetail, ParsedGuess, RenameOutcome, ResolveError,
};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut progress = Progress::new(args.verbose > 0);

    // Step 1: Validate the folder and credentials before any lookup
    ensure_directory(&args.folder)?;
    let folder = resolve_folder_path(args.folder.clone())?;
    let folder_name = folder
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            AppError::InvalidArguments(format!(
                "Folder has no usable UTF-8 name: {}",
                folder.display()
            ))
        })?
        .to_string();

    let api_config = config_from_env();
    if !api_config.is_configured() {
        return Err(AppError::ConfigError {
            message: "TMDB_API_KEY is not set".to_string(),
        });
    }

    // Step 2: Guess title and year from the folder name
    let guess = parse_folder_name(&folder_name);
    progress.parsed(&folder_name, &guess);
    debug!(title = %guess.title, year = ?guess.year, "Parsed folder name");

    // Step 3: Resolve to a single TMDB record
    let resolver = MetadataResolver::from_config(api_config)?;
    let policy = if args.first {
        SelectionPolicy::First
    } else {
        SelectionPolicy::Interactive
    };

    let detail = match args.id {
        Some(id) => {
            info!("Using TMDB id {} from the command line", id);
            progress.fetch_start(id);
            let detail = resolver.fetch_detail(id)?;
            progress.fetch_complete();
            detail
        }
        None => resolve_by_search(&resolver, &guess, policy, &mut progress)?,
    };

    // Step 4: Build the canonical name and plan the rename
    let canonical = build_canonical_name(&detail);
    progress.canonical_name(&canonical);

    let plan = build_plan(&folder, &canonical)?;

    if plan.is_noop() {
        println!("\"{}\" already has its canonical name.", folder_name);
        return Ok(());
    }

    let mut stdout = io::stdout();

    if args.dry {
        if let Some(collision) = find_collision(&plan)? {
            progress.warn(&collision.describe(&plan.source_folder));
        }
        display_plan(&plan, true, &mut stdout)
            .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
        return Ok(());
    }

    // Reject collisions before asking, so nobody confirms a doomed rename
    if let Some(collision) = find_collision(&plan)? {
        return Err(AppError::TargetExists {
            folder: plan.source_folder.clone(),
            reason: collision.describe(&plan.source_folder),
        });
    }

    display_plan(&plan, false, &mut stdout)
        .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
    let _ = stdout.flush();

    if !args.yes {
        let approved = confirm("Apply these changes?", &mut io::stdin().lock(), &mut io::stderr())
            .map_err(|e| AppError::Other(format!("Failed to read confirmation: {}", e)))?;
        if !approved {
            println!("Cancelled, nothing was renamed.");
            return Ok(());
        }
    }

    // Step 5: Execute
    match apply_plan(plan)? {
        RenameOutcome::Renamed(plan) => {
            let missing = verify_plan(&plan);
            if !missing.is_empty() {
                warn!(count = missing.len(), "Renamed paths missing after rename");
                return Err(AppError::PartialRename {
                    folder: plan.target_folder.clone(),
                    from: plan.old_base.clone(),
                    to: plan.target_name.clone(),
                    remaining: missing.iter().map(|p| p.display().to_string()).collect(),
                    message: "expected paths are missing after the rename".to_string(),
                });
            }

            display_execution_result(&plan, &mut stdout)
                .map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))?;
            Ok(())
        }
        RenameOutcome::Rejected { plan, collision } => Err(AppError::TargetExists {
            reason: collision.describe(&plan.source_folder),
            folder: plan.source_folder,
        }),
    }
}

/// Paths like "." or "movies/.." have no file name of their own
fn resolve_folder_path(folder: PathBuf) -> Result<PathBuf, AppError> {
    if folder.file_name().is_some() {
        return Ok(folder);
    }

    std::fs::canonicalize(&folder).map_err(|e| {
        AppError::Other(format!("Cannot resolve {}: {}", folder.display(), e))
    })
}

fn resolve_by_search(
    resolver: &MetadataResolver,
    guess: &ParsedGuess,
    policy: SelectionPolicy,
    progress: &mut Progress,
) -> Result<MovieDetail, AppError> {
    let mut prompt_error = None;

    progress.search_start(guess);

    let result = resolver.resolve(guess, |candidates| {
        progress.search_complete(candidates.len());

        let chosen = choose_candidate(
            candidates,
            policy,
            &mut io::stdin().lock(),
            &mut io::stderr(),
        );

        match chosen {
            Ok(Some(index)) => {
                progress.fetch_start(candidates[index].id);
                Some(index)
            }
            Ok(None) => None,
            Err(e) => {
                prompt_error = Some(e);
                None
            }
        }
    });

    match result {
        Ok(detail) => {
            progress.fetch_complete();
            Ok(detail)
        }
        Err(e @ ResolveError::NoMatch { .. }) => {
            progress.search_complete(0);
            Err(e.into())
        }
        Err(ResolveError::SelectionCancelled) if prompt_error.is_some() => {
            let e = prompt_error.map(|e| e.to_string()).unwrap_or_default();
            Err(AppError::Other(format!("Failed to read selection: {}", e)))
        }
        Err(e) => Err(e.into()),
    }
}
