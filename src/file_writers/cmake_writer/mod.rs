mod cmakelists_writer;

use std::io;

pub use self::cmakelists_writer::{listfile_contents, make_project, ProjectDescriptor, DEFAULT_PROJECT_NAME};

pub fn configure_cmake(descriptor: &ProjectDescriptor) -> io::Result<()> {
  make_project(
    &descriptor.name,
    &descriptor.save_path,
    &descriptor.srcs,
    &descriptor.includes,
    &descriptor.libs,
    &descriptor.defines,
    Some(descriptor.project.as_str())
  )
}
