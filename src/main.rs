#[macro_use]
extern crate lazy_static;

mod cli_config;
mod file_writers;
mod logger;
mod project_info;

use clap::Parser;
use cli_config::{clap_cli_config::Opts, settings_from_opts};
use logger::exit_error_log;
use project_info::ming_project::{create_ming_project, dry_run_listfile, MingSample};

fn main() {
  let opts = Opts::parse();

  if opts.list_samples {
    for sample in enum_iterator::all::<MingSample>() {
      println!("{}", sample.target_name());
    }
    return;
  }

  let settings = match settings_from_opts(&opts) {
    Ok(settings) => settings,
    Err(err_message) => exit_error_log(err_message)
  };

  if opts.dry_run {
    match dry_run_listfile(&settings) {
      Ok(contents) => println!("{}", contents),
      Err(err_message) => exit_error_log(err_message)
    }
    return;
  }

  if let Err(err_message) = create_ming_project(&settings) {
    exit_error_log(err_message);
  }
}
