//! Pre-flight validation of command-line input descriptors.
//!
//! These checks are preconditions of the combine pipeline and are owned by
//! the caller; the core never repeats them.

use std::fs;
use std::fs::File;
use std::path::Path;

use xor_core::Input;

use crate::error::UsageError;

/// Validates both input descriptors before the transform runs.
///
/// # Parameters
///
/// * `raw1` - First positional argument as given on the command line
/// * `raw2` - Second positional argument as given on the command line
///
/// # Errors
///
/// Returns a [`UsageError`] (exit code 2) when:
///
/// - A path does not exist, is not a regular file / FIFO / character device,
///   or is not readable
/// - Both descriptors name standard input
/// - Both paths refer to the same underlying file
pub fn validate_inputs(raw1: &str, raw2: &str) -> Result<(), UsageError> {
    let input1 = Input::parse(raw1);
    let input2 = Input::parse(raw2);

    check_file_access(&input1, raw1, "first input file")?;
    check_file_access(&input2, raw2, "second input file")?;

    if input1.is_stdin() && input2.is_stdin() {
        return Err(UsageError::MultipleStdin);
    }

    if !input1.is_stdin() && !input2.is_stdin() && is_same_file(Path::new(raw1), Path::new(raw2))
    {
        return Err(UsageError::SameFileInputs);
    }

    Ok(())
}

fn check_file_access(
    input: &Input,
    raw: &str,
    description: &'static str,
) -> Result<(), UsageError> {
    // stdin is always considered available.
    if input.is_stdin() {
        return Ok(());
    }

    let path = Path::new(raw);
    let metadata = fs::metadata(path).map_err(|_| UsageError::InputNotFound {
        description,
        path: raw.to_string(),
    })?;

    let file_type = metadata.file_type();
    if !is_streamable(&file_type) {
        return Err(UsageError::NotReadableFile {
            description,
            path: raw.to_string(),
        });
    }

    // Readability probe for regular files only; opening a FIFO here would
    // block until a writer connects.
    if file_type.is_file() && File::open(path).is_err() {
        return Err(UsageError::InputNotReadable {
            description,
            path: raw.to_string(),
        });
    }

    Ok(())
}

/// Regular files, FIFOs (named pipes), and character devices can be streamed.
fn is_streamable(file_type: &fs::FileType) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::FileTypeExt;

        file_type.is_file() || file_type.is_fifo() || file_type.is_char_device()
    }
    #[cfg(not(unix))]
    {
        file_type.is_file()
    }
}

#[cfg(unix)]
fn is_same_file(path1: &Path, path2: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    match (fs::metadata(path1), fs::metadata(path2)) {
        (Ok(meta1), Ok(meta2)) => meta1.dev() == meta2.dev() && meta1.ino() == meta2.ino(),
        _ => false,
    }
}

#[cfg(not(unix))]
fn is_same_file(path1: &Path, path2: &Path) -> bool {
    match (fs::canonicalize(path1), fs::canonicalize(path2)) {
        (Ok(canon1), Ok(canon2)) => canon1 == canon2,
        _ => false,
    }
}
