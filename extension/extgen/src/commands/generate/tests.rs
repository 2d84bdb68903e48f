use super::*;
use ext_gen::{Artifact, GenError};
use pretty_assertions::assert_eq;

fn options_in(dir: &Path) -> GenerateOptions {
    GenerateOptions {
        out_dir: dir.join("boost/extension"),
        ..GenerateOptions::default()
    }
}

#[test]
fn writes_every_header() {
    let tmp = tempfile::tempdir().unwrap();
    let options = options_in(tmp.path());
    let mut stdout = Vec::new();

    let written = run_generate(&options, &mut stdout).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "factory.hpp",
            "counted_factory.hpp",
            "shared_library.hpp",
            "factory_map.hpp",
            "counted_factory_map.hpp",
        ]
    );
    assert!(stdout.is_empty());

    let factory = fs::read_to_string(&written[0]).unwrap();
    assert!(factory.starts_with("/*\n * Generated for max_params = 6."));
    assert!(factory.contains("#ifndef BOOST_EXTENSION_FACTORY_HPP"));
}

#[test]
fn only_restricts_output() {
    let tmp = tempfile::tempdir().unwrap();
    let mut options = options_in(tmp.path());
    options.only = vec![Artifact::SharedLibrary];

    let written = run_generate(&options, &mut Vec::new()).unwrap();
    assert_eq!(written, vec![options.out_dir.join("shared_library.hpp")]);
    assert!(!options.out_dir.join("factory.hpp").exists());
}

#[test]
fn stdout_mode_writes_no_files() {
    let tmp = tempfile::tempdir().unwrap();
    let mut options = options_in(tmp.path());
    options.to_stdout = true;
    options.only = vec![Artifact::Factory, Artifact::FactoryMap];
    options.config.max_params = 1;

    let mut stdout = Vec::new();
    let written = run_generate(&options, &mut stdout).unwrap();
    assert!(written.is_empty());
    assert!(!options.out_dir.exists());

    let text = String::from_utf8(stdout).unwrap();
    let factory = text.find("// ---- factory.hpp ----").unwrap();
    let map = text.find("// ---- factory_map.hpp ----").unwrap();
    assert!(factory < map);
}

#[test]
fn invalid_configuration_writes_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let mut options = options_in(tmp.path());
    options.config.namespace.clear();

    let err = run_generate(&options, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Gen(GenError::EmptyNamespace)));
    assert_eq!(err.exit_code(), 1);
    assert!(!options.out_dir.exists());
}

#[test]
fn unwritable_directory_reports_path() {
    let tmp = tempfile::tempdir().unwrap();
    let blocker = tmp.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();
    let options = GenerateOptions {
        out_dir: blocker.join("sub"),
        ..GenerateOptions::default()
    };

    let err = run_generate(&options, &mut Vec::new()).unwrap_err();
    let CliError::Io { path, .. } = &err else {
        panic!("expected an I/O error, got {err:?}");
    };
    assert_eq!(path, &blocker.join("sub"));
    assert!(err.to_string().contains("sub"));
}
