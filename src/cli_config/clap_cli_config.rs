use clap::{Parser, ValueEnum};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CLISampleIn {
  #[value(name = "M_01_Triangle")]
  M01Triangle,
  #[value(name = "M_02_Texture")]
  M02Texture,
  #[value(name = "M_03_TextEditor")]
  M03TextEditor
}

/// Generate the CMakeLists.txt for a Ming sample against a prebuilt Diligent Engine tree.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Opts {
  /// Directory containing the Ming sample sources (Tutorials/Ming)
  #[arg(long, default_value = ".")]
  pub ming_root: String,

  /// Directory containing the DiligentCore, DiligentTools and DiligentSamples
  /// checkouts. Defaults to three levels above the Ming root.
  #[arg(long)]
  pub top_root: Option<String>,

  /// Root of the prebuilt Diligent tree. Defaults to <TOP_ROOT>/build.
  #[arg(long)]
  pub build_root: Option<String>,

  /// Listfile to write. Defaults to <MING_ROOT>/CMakeLists.txt.
  #[arg(short, long)]
  pub output: Option<String>,

  /// Link the Release artifacts instead of the Debug ones.
  #[arg(long)]
  pub release: bool,

  /// Sample executable to generate the listfile for.
  #[arg(value_enum, short, long, default_value_t = CLISampleIn::M01Triangle)]
  pub sample: CLISampleIn,

  /// YAML file overriding the built-in include, library and define blocks.
  #[arg(short, long)]
  pub config: Option<String>,

  /// Print the known samples and exit.
  #[arg(long)]
  pub list_samples: bool,

  /// Print the listfile instead of writing it.
  #[arg(long)]
  pub dry_run: bool
}
