use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::core::error::TableError;

pub const HEADER_SUFFIX: &str = ".h";

pub fn extract_base_name(path: &str) -> Option<&str> {
    Path::new(path)
        .file_stem() // Get the base name component of the path
        .and_then(|name| name.to_str())
}

/// `params/inferno.json` --> `inferno.h`, in the current directory.
pub fn output_path_for_params(params_path: &str) -> PathBuf {
    let base_name = extract_base_name(params_path).unwrap_or("colormap");
    PathBuf::from(base_name.to_owned() + HEADER_SUFFIX)
}

pub fn read_params_file<T: DeserializeOwned>(params_path: &str) -> Result<T, TableError> {
    let content =
        std::fs::read_to_string(params_path).map_err(|err| TableError::io(params_path, err))?;
    serde_json::from_str(&content).map_err(|source| TableError::ParamFile {
        path: PathBuf::from(params_path),
        source,
    })
}

/**
 * Create (or truncate) the file at `path` and hand a buffered writer to
 * `write_contents`. The buffer is flushed before returning, so a failed write
 * is reported here rather than being lost when the writer is dropped.
 */
pub fn write_file_with<F>(path: &Path, write_contents: F) -> Result<(), TableError>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let file = File::create(path).map_err(|err| TableError::io(path, err))?;
    let mut writer = BufWriter::new(file);
    write_contents(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|err| TableError::io(path, err))?;
    log::info!("Wrote header file to: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "colormap_header_file_io_{}_{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_output_path_for_params() {
        assert_eq!(
            output_path_for_params("params/inferno.json"),
            PathBuf::from("inferno.h")
        );
        assert_eq!(
            output_path_for_params("hot_reversed.json"),
            PathBuf::from("hot_reversed.h")
        );
        assert_eq!(output_path_for_params(""), PathBuf::from("colormap.h"));
    }

    #[test]
    fn test_write_file_with_overwrites() {
        let path = scratch_dir("overwrite").join("table.h");
        std::fs::write(&path, "stale contents that are longer than the new ones").unwrap();

        write_file_with(&path, |writer| writer.write_all(b"fresh")).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let path = scratch_dir("missing").join("no_such_dir").join("table.h");
        match write_file_with(&path, |writer| writer.write_all(b"x")) {
            Err(TableError::Io { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected an I/O error, got {:?}", other),
        }
    }

    #[test]
    fn test_read_params_file_errors() {
        let dir = scratch_dir("params");
        let missing = dir.join("missing.json");
        let result: Result<serde_json::Value, _> = read_params_file(missing.to_str().unwrap());
        assert!(matches!(result, Err(TableError::Io { .. })));

        let malformed = dir.join("malformed.json");
        std::fs::write(&malformed, "{ not json").unwrap();
        let result: Result<serde_json::Value, _> = read_params_file(malformed.to_str().unwrap());
        assert!(matches!(result, Err(TableError::ParamFile { .. })));
    }
}
