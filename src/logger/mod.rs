use std::{io::{self, Write}, process::exit};
use colored::{ColoredString, Colorize};

// Diagnostics never go to stdout, which --dry-run reserves for the listfile.
fn write_labeled(out: &mut impl Write, label: ColoredString, message: &str) {
  let _ = writeln!(out, "{}: {}", label, message);
}

pub fn warn(message: impl AsRef<str>) {
  write_labeled(&mut io::stderr(), "Warning".yellow(), message.as_ref());
}

pub fn info(message: impl AsRef<str>) {
  write_labeled(&mut io::stderr(), "Info".green(), message.as_ref());
}

pub fn exit_error_log(error_message: impl AsRef<str>) -> ! {
  eprintln!("{}", error_message.as_ref().red());
  exit(1);
}
