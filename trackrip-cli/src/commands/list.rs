use crate::cli::ListArgs;
use crate::output::{print_info, print_warning};
use trackrip_core::{CoreError, CoreResult, find_selectable_files};

/// Execute the list command: show selectable container files in a directory.
///
/// An empty directory is reported as status text, not a failure; it is the
/// "nothing picked" outcome of a file-picker, not an error state.
pub fn run_list(args: ListArgs) -> CoreResult<()> {
    let files = match find_selectable_files(&args.directory, args.all) {
        Ok(files) => files,
        Err(CoreError::NoFilesFound) => {
            print_warning("No selectable video files found.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    print_info("Directory", args.directory.display());
    for file in &files {
        println!("  {}", file.display());
    }
    print_info("Found", format!("{} file(s)", files.len()));

    Ok(())
}
