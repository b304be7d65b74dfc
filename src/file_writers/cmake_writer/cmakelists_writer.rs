use std::{fs::File, io::{self, Write}, path::{Path, PathBuf}};

const CMAKE_MINIMUM_VERSION: &'static str = "3.10";
pub const DEFAULT_PROJECT_NAME: &'static str = "Ming";

/// Everything needed to write the listfile for a single executable target.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDescriptor {
  pub name: String,
  pub project: String,
  pub save_path: PathBuf,
  pub srcs: Vec<String>,
  pub includes: Vec<String>,
  pub libs: Vec<String>,
  pub defines: Vec<String>
}

enum EntryFormat {
  Quoted,
  DefineFlag
}

fn flattened_entries(entries: &[String], entry_format: EntryFormat) -> String {
  entries.iter()
    .map(|entry| match entry_format {
      EntryFormat::Quoted => format!("\"{}\"", entry),
      EntryFormat::DefineFlag => format!("-D{}", entry)
    })
    .collect::<Vec<String>>()
    .join(" \n")
}

struct CMakeListsWriter<'a> {
  descriptor: &'a ProjectDescriptor
}

impl<'a> CMakeListsWriter<'a> {
  fn new(descriptor: &'a ProjectDescriptor) -> Self {
    Self { descriptor }
  }

  fn project_header(&self) -> Vec<String> {
    vec![
      format!("cmake_minimum_required(VERSION {})", CMAKE_MINIMUM_VERSION),
      format!("project({} CXX)", self.descriptor.project)
    ]
  }

  // Empty entry lists produce no block at all.
  fn target_block(
    &self,
    command: &str,
    scope: Option<&str>,
    entries: &[String],
    entry_format: EntryFormat
  ) -> Option<String> {
    if entries.is_empty() {
      return None;
    }

    let scope_string: String = match scope {
      Some(scope_name) => format!(" {}", scope_name),
      None => String::new()
    };

    return Some(format!(
      "{}({}{} \n{}\n)",
      command,
      self.descriptor.name,
      scope_string,
      flattened_entries(entries, entry_format)
    ));
  }

  fn contents(&self) -> String {
    let descriptor: &ProjectDescriptor = self.descriptor;

    let target_blocks: Vec<Option<String>> = vec![
      self.target_block("add_executable", None, &descriptor.srcs, EntryFormat::Quoted),
      self.target_block("target_link_libraries", Some("PRIVATE"), &descriptor.libs, EntryFormat::Quoted),
      self.target_block("target_include_directories", Some("PRIVATE"), &descriptor.includes, EntryFormat::Quoted),
      self.target_block("target_compile_definitions", Some("PRIVATE"), &descriptor.defines, EntryFormat::DefineFlag)
    ];

    let mut lines: Vec<String> = self.project_header();
    lines.extend(target_blocks.into_iter().flatten());

    return lines.join("\n");
  }

  // Overwrites any existing file. Does not create the parent directory.
  fn write_cmakelists(&self) -> io::Result<()> {
    let mut cmakelists_file: File = File::create(&self.descriptor.save_path)?;
    cmakelists_file.write_all(self.contents().as_bytes())?;
    Ok(())
  }
}

pub fn listfile_contents(descriptor: &ProjectDescriptor) -> String {
  return CMakeListsWriter::new(descriptor).contents();
}

pub fn make_project(
  name: &str,
  save_path: impl AsRef<Path>,
  srcs: &[String],
  includes: &[String],
  libs: &[String],
  defines: &[String],
  project: Option<&str>
) -> io::Result<()> {
  let descriptor = ProjectDescriptor {
    name: name.to_string(),
    project: project.unwrap_or(DEFAULT_PROJECT_NAME).to_string(),
    save_path: save_path.as_ref().to_path_buf(),
    srcs: srcs.to_vec(),
    includes: includes.to_vec(),
    libs: libs.to_vec(),
    defines: defines.to_vec()
  };

  return CMakeListsWriter::new(&descriptor).write_cmakelists();
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::fs;

  fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
  }

  fn descriptor_named(name: &str) -> ProjectDescriptor {
    ProjectDescriptor {
      name: name.to_string(),
      project: DEFAULT_PROJECT_NAME.to_string(),
      save_path: PathBuf::from("CMakeLists.txt"),
      srcs: Vec::new(),
      includes: Vec::new(),
      libs: Vec::new(),
      defines: Vec::new()
    }
  }

  #[test]
  fn sources_and_libs_only() {
    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join("CMakeLists.txt");

    make_project("X", &save_path, &strings(&["a.cpp"]), &[], &strings(&["l.lib"]), &[], None).unwrap();

    let written: String = fs::read_to_string(&save_path).unwrap();
    assert_eq!(
      written,
      "cmake_minimum_required(VERSION 3.10)\n\
       project(Ming CXX)\n\
       add_executable(X \n\"a.cpp\"\n)\n\
       target_link_libraries(X PRIVATE \n\"l.lib\"\n)"
    );
    assert!(!written.contains("target_include_directories"));
    assert!(!written.contains("target_compile_definitions"));
  }

  #[test]
  fn header_only_when_every_list_is_empty() {
    assert_eq!(
      listfile_contents(&descriptor_named("Empty")),
      "cmake_minimum_required(VERSION 3.10)\nproject(Ming CXX)"
    );
  }

  #[test]
  fn blocks_follow_fixed_order() {
    let mut descriptor = descriptor_named("T");
    descriptor.project = String::from("Other");
    descriptor.defines = strings(&["DEBUG", "GL_SUPPORTED=1"]);
    descriptor.includes = strings(&["/inc/a", "/inc/b"]);
    descriptor.libs = strings(&["/lib/a.lib"]);
    descriptor.srcs = strings(&["t.cpp"]);

    assert_eq!(
      listfile_contents(&descriptor),
      "cmake_minimum_required(VERSION 3.10)\n\
       project(Other CXX)\n\
       add_executable(T \n\"t.cpp\"\n)\n\
       target_link_libraries(T PRIVATE \n\"/lib/a.lib\"\n)\n\
       target_include_directories(T PRIVATE \n\"/inc/a\" \n\"/inc/b\"\n)\n\
       target_compile_definitions(T PRIVATE \n-DDEBUG \n-DGL_SUPPORTED=1\n)"
    );
  }

  #[test]
  fn defines_without_sources() {
    let mut descriptor = descriptor_named("T");
    descriptor.defines = strings(&["PLATFORM_WIN32=1"]);

    let contents: String = listfile_contents(&descriptor);
    assert!(contents.ends_with("target_compile_definitions(T PRIVATE \n-DPLATFORM_WIN32=1\n)"));
    assert!(!contents.contains("add_executable"));
    assert!(!contents.contains("\"PLATFORM_WIN32=1\""));
  }

  #[test]
  fn overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join("CMakeLists.txt");
    fs::write(&save_path, "stale contents that are much longer than the new ones").unwrap();

    make_project("X", &save_path, &[], &[], &[], &[], Some("P")).unwrap();

    assert_eq!(
      fs::read_to_string(&save_path).unwrap(),
      "cmake_minimum_required(VERSION 3.10)\nproject(P CXX)"
    );
  }

  #[test]
  fn missing_parent_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let save_path = dir.path().join("not_created").join("CMakeLists.txt");

    let write_result = make_project("X", &save_path, &strings(&["a.cpp"]), &[], &[], &[], None);
    assert_eq!(write_result.unwrap_err().kind(), io::ErrorKind::NotFound);
    assert!(!save_path.exists());
  }
}
