use enum_iterator::Sequence;

// Segment the prebuilt tree uses for per-configuration output directories.
const CONFIG_SEGMENT_PLACEHOLDER: &'static str = "Debug";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum BuildConfiguration {
  Debug,
  Release
}

impl BuildConfiguration {
  pub fn from_debug_flag(is_debug: bool) -> Self {
    return if is_debug
      { Self::Debug }
      else { Self::Release };
  }

  pub fn name_string(&self) -> &'static str {
    match self {
      Self::Debug => "Debug",
      Self::Release => "Release"
    }
  }

  /// Replaces every path segment that is exactly `Debug` with this
  /// configuration's name. File names such as `spirv-cross-cored.lib` and
  /// segments which merely start with `Debug` are left alone.
  pub fn substitute_config_segment(&self, lib_path: &str) -> String {
    return lib_path
      .split('/')
      .map(|segment| {
        if segment == CONFIG_SEGMENT_PLACEHOLDER
          { self.name_string() }
          else { segment }
      })
      .collect::<Vec<&str>>()
      .join("/");
  }
}

pub fn has_config_segment(lib_path: &str) -> bool {
  return lib_path
    .split('/')
    .any(|segment| segment == CONFIG_SEGMENT_PLACEHOLDER);
}
