use std::path::PathBuf;

use crate::project_info::{build_config::BuildConfiguration, ming_project::{MingProjectSettings, MingSample, ProjectBlocks}, path_manipulation::{absolute_path, cleaned_pathbuf}, raw_data_in::load_listfile_config};

use self::clap_cli_config::{CLISampleIn, Opts};
pub mod clap_cli_config;

const CMAKELISTS_FILE_NAME: &'static str = "CMakeLists.txt";

impl From<CLISampleIn> for MingSample {
  fn from(sample: CLISampleIn) -> Self {
    match sample {
      CLISampleIn::M01Triangle => MingSample::Triangle,
      CLISampleIn::M02Texture => MingSample::Texture,
      CLISampleIn::M03TextEditor => MingSample::TextEditor
    }
  }
}

pub fn settings_from_opts(opts: &Opts) -> Result<MingProjectSettings, String> {
  let ming_root: PathBuf = absolute_path(&opts.ming_root)?;

  // Tutorials/Ming lives inside a repository which sits next to the Diligent checkouts.
  // ming_root is already absolute and cleaned, so only the joined '..' need collapsing.
  let top_root: PathBuf = match &opts.top_root {
    Some(given_root) => absolute_path(given_root)?,
    None => cleaned_pathbuf(ming_root.join("../../.."))
  };

  let build_root: PathBuf = match &opts.build_root {
    Some(given_root) => absolute_path(given_root)?,
    None => top_root.join("build")
  };

  let save_path: PathBuf = match &opts.output {
    Some(given_path) => absolute_path(given_path)?,
    None => ming_root.join(CMAKELISTS_FILE_NAME)
  };

  let blocks: ProjectBlocks = match &opts.config {
    Some(config_path) => ProjectBlocks::default().with_overrides(load_listfile_config(config_path)?),
    None => ProjectBlocks::default()
  };

  return Ok(MingProjectSettings {
    sample: MingSample::from(opts.sample),
    build_config: BuildConfiguration::from_debug_flag(!opts.release),
    top_root,
    build_root,
    save_path,
    blocks
  });
}
