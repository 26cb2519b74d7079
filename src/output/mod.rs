use crate::rename::RenamePlan;
use std::io::{self, Write};

/// Display a rename plan in a formatted output.
///
/// Used both for `--dry` runs and before the confirmation prompt.
pub fn display_plan(plan: &RenamePlan, dry_run: bool, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    if dry_run {
        writeln!(writer, "========================================")?;
        writeln!(writer, "              DRY RUN")?;
        writeln!(writer, "========================================")?;
        writeln!(writer)?;
    }

    writeln!(writer, "Folder:")?;
    writeln!(writer, "  From: {}", plan.old_base)?;
    writeln!(writer, "  To:   {}", plan.target_name)?;
    writeln!(writer)?;

    if plan.file_renames.is_empty() {
        writeln!(writer, "No files share the folder name.")?;
    } else {
        writeln!(writer, "Files:")?;
        for (i, file) in plan.file_renames.iter().enumerate() {
            writeln!(writer, "  {}. {}", i + 1, file.source_name)?;
            writeln!(writer, "     -> {}", file.destination_name)?;
        }
    }

    if !plan.untouched.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "Left unchanged:")?;
        for name in &plan.untouched {
            writeln!(writer, "  - {}", name)?;
        }
    }

    if dry_run {
        writeln!(writer)?;
        writeln!(writer, "----------------------------------------")?;
        writeln!(writer, "Summary:")?;
        writeln!(
            writer,
            "  1 folder and {} files would be renamed",
            plan.file_renames.len()
        )?;
        writeln!(writer)?;
        writeln!(writer, "Run without --dry to apply these changes.")?;
    }

    Ok(())
}

/// Display the result of a completed rename
pub fn display_execution_result(plan: &RenamePlan, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "Renamed folder to \"{}\" and {} files.",
        plan.target_name,
        plan.file_renames.len()
    )?;

    if !plan.untouched.is_empty() {
        writeln!(writer, "  {} entries left unchanged.", plan.untouched.len())?;
    }

    Ok(())
}
