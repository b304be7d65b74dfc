use std::{path::{PathBuf, Path}, io, env};

pub fn cleaned_path_str(file_path: &str) -> String {
  return path_clean::clean(&file_path.replace("\\", "/"));
}

pub fn cleaned_pathbuf(file_path: PathBuf) -> PathBuf {
  let replaced_path: String = cleaned_path_str(&file_path.to_string_lossy());
  return PathBuf::from(replaced_path);
}

/// Splits a multi-line block into its trimmed, non-blank entries. Order and
/// duplicates are kept as written.
pub fn split_path_block(block: &str) -> Vec<String> {
  return block
    .lines()
    .map(|line| line.trim())
    .filter(|line| !line.is_empty())
    .map(|line| line.to_string())
    .collect();
}

/// Joins `relative` onto an already absolute `root` and normalizes the
/// result to forward slashes.
pub fn rooted_path_str(root: &Path, relative: &str) -> String {
  return cleaned_path_str(&format!(
    "{}/{}",
    root.to_string_lossy(),
    relative
  ));
}

fn absolute_path_internal<T>(a_path: &T) -> io::Result<PathBuf>
  where T: AsRef<Path> + ToString
{
  let abs_path: PathBuf = cleaned_pathbuf(env::current_dir()?.join(a_path));
  return Ok(abs_path);
}

pub fn absolute_path<T>(a_path: T) -> Result<PathBuf, String>
  where T: AsRef<Path> + ToString
{
  match absolute_path_internal(&a_path) {
    Ok(abs_pathbuf) => Ok(abs_pathbuf),
    Err(err) => Err(format!(
      "Failed to resolve absolute path from '{}'. More details: {}",
      a_path.to_string(),
      err.to_string())
    )
  }
}
