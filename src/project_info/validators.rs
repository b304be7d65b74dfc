use regex::Regex;

lazy_static! {
  static ref TARGET_NAME_REGEX: Regex = Regex::new("^[-_a-zA-Z0-9]+$").unwrap();
  static ref PROJECT_NAME_REGEX: Regex = Regex::new("^[-_a-zA-Z0-9]+$").unwrap();
  // NAME or NAME=VALUE, where NAME is a C identifier.
  static ref DEFINE_REGEX: Regex = Regex::new("^[_a-zA-Z][_a-zA-Z0-9]*(=.*)?$").unwrap();
}

pub fn is_valid_target_name(name: &str) -> bool {
  return TARGET_NAME_REGEX.is_match(name);
}

pub fn is_valid_project_name(name: &str) -> bool {
  return PROJECT_NAME_REGEX.is_match(name);
}

pub fn is_valid_define(define: &str) -> bool {
  return DEFINE_REGEX.is_match(define);
}
