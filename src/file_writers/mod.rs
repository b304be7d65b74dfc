mod cmake_writer;

use std::{io::{self}};

pub use self::cmake_writer::{listfile_contents, ProjectDescriptor, DEFAULT_PROJECT_NAME};

pub struct ProjectWriteConfiguration {
  name: String,
  config_func: fn(&ProjectDescriptor) -> io::Result<()>,
}

/// Runs every configured writer for `descriptor`. The first failed write is
/// returned after `after_write` has been told about it.
pub fn write_configurations<FBefore, FAfter>(
  descriptor: &ProjectDescriptor,
  before_write: FBefore,
  after_write: FAfter
) -> io::Result<()>
  where
    FBefore: Fn(&str),
    FAfter: Fn((&str, &io::Result<()>))
{
  let project_configurers = [
    ProjectWriteConfiguration {
      name: String::from("CMake"),
      config_func: cmake_writer::configure_cmake
    }
  ];

  for config in project_configurers {
    let config_name_str = config.name.as_str();
    before_write(config_name_str);

    let write_result = (config.config_func)(descriptor);
    after_write((config_name_str, &write_result));
    write_result?;
  }

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::{cell::RefCell, fs, path::PathBuf};

  fn descriptor_at(save_path: PathBuf) -> ProjectDescriptor {
    ProjectDescriptor {
      name: String::from("M_01_Triangle"),
      project: DEFAULT_PROJECT_NAME.to_string(),
      save_path,
      srcs: vec![String::from("M_01_Triangle.cpp")],
      includes: Vec::new(),
      libs: Vec::new(),
      defines: Vec::new()
    }
  }

  #[test]
  fn reports_each_configuration() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = descriptor_at(dir.path().join("CMakeLists.txt"));
    let events: RefCell<Vec<String>> = RefCell::new(Vec::new());

    write_configurations(
      &descriptor,
      |name| events.borrow_mut().push(format!("before {}", name)),
      |(name, result)| events.borrow_mut().push(format!("after {} {}", name, result.is_ok()))
    ).unwrap();

    assert_eq!(*events.borrow(), vec!["before CMake", "after CMake true"]);
    assert_eq!(
      fs::read_to_string(&descriptor.save_path).unwrap(),
      listfile_contents(&descriptor)
    );
  }

  #[test]
  fn failed_write_is_reported_and_returned() {
    let dir = tempfile::tempdir().unwrap();
    let descriptor = descriptor_at(dir.path().join("missing").join("CMakeLists.txt"));
    let saw_failure: RefCell<bool> = RefCell::new(false);

    let write_result = write_configurations(
      &descriptor,
      |_| {},
      |(_, result)| *saw_failure.borrow_mut() = result.is_err()
    );

    assert!(write_result.is_err());
    assert!(*saw_failure.borrow());
  }
}
