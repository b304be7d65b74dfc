use std::path::PathBuf;
use enum_iterator::Sequence;

use crate::{file_writers::{listfile_contents, write_configurations, ProjectDescriptor, DEFAULT_PROJECT_NAME}, logger};

use super::{build_config::{has_config_segment, BuildConfiguration}, path_manipulation::{rooted_path_str, split_path_block}, raw_data_in::RawListfileConfig, validators::{is_valid_define, is_valid_project_name, is_valid_target_name}};

const DEFAULT_INCLUDES: &'static str = include_str!("default_blocks/includes.txt");
const DEFAULT_LIBS: &'static str = include_str!("default_blocks/libs.txt");
const DEFAULT_SYSTEM_LIBS: &'static str = include_str!("default_blocks/system_libs.txt");
const DEFAULT_DEFINES: &'static str = include_str!("default_blocks/defines.txt");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum MingSample {
  Triangle,
  Texture,
  TextEditor
}

impl MingSample {
  pub fn target_name(&self) -> &'static str {
    match self {
      Self::Triangle => "M_01_Triangle",
      Self::Texture => "M_02_Texture",
      Self::TextEditor => "M_03_TextEditor"
    }
  }

  pub fn sources(&self) -> Vec<String> {
    vec![format!("{}.cpp", self.target_name())]
  }
}

/// The text blocks a Ming listfile is generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectBlocks {
  pub project: String,
  pub includes: String,
  pub libs: String,
  pub system_libs: Vec<String>,
  pub defines: String
}

impl Default for ProjectBlocks {
  fn default() -> Self {
    Self {
      project: DEFAULT_PROJECT_NAME.to_string(),
      includes: DEFAULT_INCLUDES.to_string(),
      libs: DEFAULT_LIBS.to_string(),
      system_libs: split_path_block(DEFAULT_SYSTEM_LIBS),
      defines: DEFAULT_DEFINES.to_string()
    }
  }
}

impl ProjectBlocks {
  pub fn with_overrides(self, overrides: RawListfileConfig) -> Self {
    Self {
      project: overrides.project.unwrap_or(self.project),
      includes: overrides.includes.unwrap_or(self.includes),
      libs: overrides.libs.unwrap_or(self.libs),
      system_libs: overrides.system_libs.unwrap_or(self.system_libs),
      defines: overrides.defines.unwrap_or(self.defines)
    }
  }
}

pub struct MingProjectSettings {
  pub sample: MingSample,
  pub build_config: BuildConfiguration,
  pub top_root: PathBuf,
  pub build_root: PathBuf,
  pub save_path: PathBuf,
  pub blocks: ProjectBlocks
}

/// Library entries which link the same file in every configuration. Only
/// reported for Release, where they would silently pull in the Debug build.
pub fn single_config_libs(settings: &MingProjectSettings) -> Vec<String> {
  if settings.build_config != BuildConfiguration::Release {
    return Vec::new();
  }

  return split_path_block(&settings.blocks.libs)
    .into_iter()
    .filter(|lib_path| !has_config_segment(lib_path))
    .collect();
}

fn resolved_libs(settings: &MingProjectSettings) -> Vec<String> {
  let build_config: BuildConfiguration = settings.build_config;

  for lib_path in single_config_libs(settings) {
    logger::warn(format!(
      "Library '{}' has no Debug directory, so the same file is linked in every configuration.",
      lib_path
    ));
  }

  let mut libs: Vec<String> = split_path_block(&settings.blocks.libs)
    .iter()
    .map(|lib_path| {
      rooted_path_str(
        &settings.build_root,
        &build_config.substitute_config_segment(lib_path)
      )
    })
    .collect();

  // System libraries are found by the linker, not resolved against a root.
  libs.extend(
    settings.blocks.system_libs.iter()
      .map(|system_lib| system_lib.trim())
      .filter(|system_lib| !system_lib.is_empty())
      .map(|system_lib| system_lib.to_string())
  );

  return libs;
}

fn resolved_defines(settings: &MingProjectSettings) -> Vec<String> {
  let defines: Vec<String> = split_path_block(&settings.blocks.defines);

  for define in &defines {
    if !is_valid_define(define) {
      logger::warn(format!(
        "'{}' doesn't look like a preprocessor define (NAME or NAME=VALUE). It will be written anyway.",
        define
      ));
    }
  }

  return defines;
}

pub fn ming_project_descriptor(settings: &MingProjectSettings) -> Result<ProjectDescriptor, String> {
  let target_name: &str = settings.sample.target_name();

  if !is_valid_target_name(target_name) {
    return Err(format!("'{}' is not a valid CMake target name.", target_name));
  }

  if !is_valid_project_name(&settings.blocks.project) {
    return Err(format!(
      "Project name '{}' is invalid. Project names may only contain letters, digits, '-' and '_'.",
      settings.blocks.project
    ));
  }

  let includes: Vec<String> = split_path_block(&settings.blocks.includes)
    .iter()
    .map(|include_dir| rooted_path_str(&settings.top_root, include_dir))
    .collect();

  return Ok(ProjectDescriptor {
    name: target_name.to_string(),
    project: settings.blocks.project.clone(),
    save_path: settings.save_path.clone(),
    srcs: settings.sample.sources(),
    includes,
    libs: resolved_libs(settings),
    defines: resolved_defines(settings)
  });
}

pub fn dry_run_listfile(settings: &MingProjectSettings) -> Result<String, String> {
  return ming_project_descriptor(settings)
    .map(|descriptor| listfile_contents(&descriptor));
}

pub fn create_ming_project(settings: &MingProjectSettings) -> Result<ProjectDescriptor, String> {
  let descriptor: ProjectDescriptor = ming_project_descriptor(settings)?;

  write_configurations(
    &descriptor,
    |config_name| logger::info(format!(
      "Writing {} configuration for {} ({})",
      config_name,
      descriptor.name,
      settings.build_config.name_string()
    )),
    |(config_name, write_result)| if write_result.is_ok() {
      logger::info(format!(
        "{} configuration written to {}",
        config_name,
        descriptor.save_path.to_string_lossy()
      ));
    }
  )
    .map_err(|err| format!(
      "Failed to write '{}': {}",
      descriptor.save_path.to_string_lossy(),
      err
    ))?;

  return Ok(descriptor);
}
