use crate::types::{SelectedFile, TaskOutcome, TaskSpec};
use crate::{archive, remove, select, validate};
use anyhow::{Context, Result};
use std::path::Path;

/* =========================
   Per-task execution
   ========================= */

/// Run one validated task to its terminal state.
///
/// Skips are successes: a task with nothing enabled, or with no matching
/// files, ends the task without touching the disk. Everything else either
/// completes or fails the whole run.
pub fn execute_task(spec: &TaskSpec) -> Result<TaskOutcome> {
    if !spec.arc && !spec.del {
        println!("Nothing to do (arc=false, del=false) => skip.");
        return Ok(TaskOutcome::NothingToDo);
    }

    let days = validate::parsed_days(spec)?;
    let dir = Path::new(&spec.path);
    let cutoff = select::cutoff_for(days, select::local_now());
    let files = select::select_files(dir, &spec.filter, cutoff)?;

    if files.is_empty() {
        println!("No files matched => skip.");
        return Ok(TaskOutcome::NoFiles);
    }

    println!("Matched files: {}", files.len());
    for file in &files {
        println!("  - {}", file.name);
    }

    if spec.single {
        run_single(spec, dir, &files)
    } else {
        run_bundle(spec, dir, &files)
    }
}

/// Single mode: each file gets its own archive, then its own deletion,
/// strictly one file at a time. The first failing operation stops the loop
/// with later files untouched.
fn run_single(spec: &TaskSpec, dir: &Path, files: &[SelectedFile]) -> Result<TaskOutcome> {
    let mut archived = 0usize;
    let mut removed = 0usize;

    for file in files {
        if spec.arc {
            let dest =
                archive::single_archive_path(dir, &file.name, &spec.marker, select::local_now());
            archive::compress_one(file, &dest)
                .with_context(|| format!("archive {}", file.name))?;
            println!("Wrote: {}", dest.display());
            archived += 1;
        }
        if spec.del {
            remove::remove_one(&file.path).with_context(|| format!("delete {}", file.name))?;
            println!("Removed: {}", file.path.display());
            removed += 1;
        }
    }

    println!("DONE: archived={archived}, removed={removed}");
    Ok(TaskOutcome::Done { archived, removed })
}

/// Bundle mode: one archive for the whole set, then one deletion pass over
/// the whole set. A failed archive step fails the task before any deletion.
fn run_bundle(spec: &TaskSpec, dir: &Path, files: &[SelectedFile]) -> Result<TaskOutcome> {
    let mut archived = 0usize;
    let mut removed = 0usize;

    if spec.arc {
        let dest =
            archive::bundle_archive_path(dir, files.len(), &spec.marker, select::local_now());
        archive::compress_many(files, &dest)
            .with_context(|| format!("archive {} file(s)", files.len()))?;
        println!("Wrote: {}", dest.display());
        archived = files.len();
    }

    if spec.del {
        remove::remove_many(files).context("delete matched set")?;
        println!("Removed: {} file(s)", files.len());
        removed = files.len();
    }

    println!("DONE: archived={archived}, removed={removed}");
    Ok(TaskOutcome::Done { archived, removed })
}

/* =========================
   Run loop
   ========================= */

/// Execute the task list in declaration order, validating each task just
/// before it runs. The first validation or execution failure aborts the
/// whole run; completed tasks keep their effects.
pub fn run_tasks(tasks: &[TaskSpec]) -> Result<()> {
    println!("=== RUN TASKS === ({} task(s))", tasks.len());

    for (i, task) in tasks.iter().enumerate() {
        let n = i + 1;
        println!("\n--- task #{n} ---");
        if !task.comment.trim().is_empty() {
            println!("# {}", task.comment);
        }
        println!("Path   : {}", task.path);
        println!("Filter : {}", task.filter);
        println!(
            "Age    : {} day(s), arc={}, del={}, mode={}",
            task.days,
            task.arc,
            task.del,
            if task.single { "single" } else { "bundle" }
        );

        validate::validate_task(task).with_context(|| format!("task #{n} invalid"))?;
        execute_task(task).with_context(|| format!("task #{n} failed"))?;
    }

    Ok(())
}
