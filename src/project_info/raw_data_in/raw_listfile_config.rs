use std::{fs, path::Path};
use serde::Deserialize;

/// Optional overrides for the built-in Ming blocks. Every key is optional;
/// keys which are absent keep the built-in value.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RawListfileConfig {
  pub project: Option<String>,
  // Newline separated, same shape as the built-in blocks.
  pub includes: Option<String>,
  pub libs: Option<String>,
  pub system_libs: Option<Vec<String>>,
  pub defines: Option<String>
}

pub fn parse_listfile_config(yaml_contents: &str) -> Result<RawListfileConfig, String> {
  return serde_yaml::from_str(yaml_contents)
    .map_err(|err| err.to_string());
}

pub fn load_listfile_config(config_path: impl AsRef<Path>) -> Result<RawListfileConfig, String> {
  let config_path: &Path = config_path.as_ref();

  let contents: String = fs::read_to_string(config_path)
    .map_err(|err| format!(
      "Unable to read listfile config '{}': {}",
      config_path.to_string_lossy(),
      err
    ))?;

  return parse_listfile_config(&contents)
    .map_err(|err_message| format!(
      "Invalid listfile config '{}': {}",
      config_path.to_string_lossy(),
      err_message
    ));
}
