use crate::PreprocessError;
use std::fs::File;
use std::io::Read;
use std::path::{Component, Path, PathBuf};
use std::str::Lines;

/// Somewhere shader sources can be read from.
pub trait SourceProvider {
    fn read(&self, path: &Path) -> Result<String, PreprocessError>;
}

/// Reads sources relative to a directory on disk.
pub struct FileSystem {
    root: PathBuf,
}

impl FileSystem {
    pub fn new(root: impl AsRef<Path>) -> Self {
        FileSystem {
            root: root.as_ref().to_path_buf(),
        }
    }
}

impl SourceProvider for FileSystem {
    fn read(&self, path: &Path) -> Result<String, PreprocessError> {
        let path = self.root.join(path);
        let mut source = String::new();
        File::open(&path)
            .and_then(|mut f| f.read_to_string(&mut source))
            .map_err(|e| PreprocessError::IOError(path, e))?;
        Ok(source)
    }
}

trait SourceOutput {
    fn push_line(&mut self, str: &str);
    fn mark_line(&mut self, line_no: usize, comment: &str) {
        if cfg!(feature = "line_directives") {
            self.push_line(&format!("#line {} \"{}\"", line_no, comment))
        }
    }
}

impl SourceOutput for String {
    fn push_line(&mut self, str: &str) {
        self.push_str(str);
        self.push('\n');
    }
}

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|f| f.to_str()).unwrap_or("")
}

/// Collapse `.` and `..` without touching the file system, so that every
/// spelling of a path compares equal on the include stack.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else {
                    normalized.push(component);
                }
            }
            _ => normalized.push(component),
        }
    }
    normalized
}

/// Read a source and splice every `#include "file"` into it.
///
/// Includes are resolved relative to the including file.
pub fn read_source(
    provider: &impl SourceProvider,
    path: impl AsRef<Path>,
) -> Result<String, PreprocessError> {
    let path = normalize(path.as_ref());
    let source = provider.read(&path)?;
    let mut output = String::new();
    let mut stack = vec![path.clone()];

    output.mark_line(1, file_name(&path));
    preprocess(provider, source.lines(), &path, &mut output, &mut stack)?;

    Ok(output)
}

fn preprocess(
    provider: &impl SourceProvider,
    lines: Lines,
    path: &Path,
    output: &mut String,
    stack: &mut Vec<PathBuf>,
) -> Result<(), PreprocessError> {
    let include_root = path.parent().unwrap_or(Path::new(""));
    let name = file_name(path);

    for (line_no, line) in lines.enumerate() {
        let Some(include) = line.trim_start().strip_prefix("#include") else {
            output.push_line(line);
            continue;
        };

        let include_file = include.trim().trim_matches('"');
        if include_file.is_empty() {
            return Err(PreprocessError::UnexpectedEol(line_no));
        }

        let include_path = normalize(&include_root.join(include_file));
        if stack.contains(&include_path) {
            return Err(PreprocessError::RecursiveInclude(include_path));
        }

        let source = provider.read(&include_path)?;
        stack.push(include_path.clone());
        output.mark_line(1, include_file);
        preprocess(provider, source.lines(), &include_path, output, stack)?;
        stack.pop();
        output.mark_line(line_no + 2, name);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn normalize_collapses_dots() {
        assert_eq!(normalize(Path::new("lib/../a.hlsl")), PathBuf::from("a.hlsl"));
        assert_eq!(normalize(Path::new("./lib/./b.hlsl")), PathBuf::from("lib/b.hlsl"));
        assert_eq!(normalize(Path::new("lib/x/../../a.hlsl")), PathBuf::from("a.hlsl"));
    }

    #[test]
    fn normalize_keeps_leading_parents() {
        assert_eq!(normalize(Path::new("../a.hlsl")), PathBuf::from("../a.hlsl"));
        assert_eq!(normalize(Path::new("lib/../../a.hlsl")), PathBuf::from("../a.hlsl"));
    }
}
