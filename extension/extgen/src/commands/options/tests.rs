use super::*;
use ext_gen::GenError;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<Invocation, CliError> {
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    parse_args(&args)
}

fn options(args: &[&str]) -> GenerateOptions {
    match parse(args) {
        Ok(Invocation::Generate(options)) => options,
        other => panic!("expected generate options, got {other:?}"),
    }
}

#[test]
fn defaults() {
    assert_eq!(options(&[]), GenerateOptions::default());
    assert_eq!(options(&[]).config.max_params, 6);
}

#[test]
fn all_flags() {
    let parsed = options(&[
        "3",
        "--out-dir=include/acme",
        "--namespace=acme::ext",
        "--include-dir=/acme/ext/",
        "--only=factory",
        "--only=counted-factory-map",
        "--only=factory",
        "--stdout",
        "--no-license",
        "-v",
    ]);
    assert_eq!(parsed.config.max_params, 3);
    assert_eq!(parsed.out_dir, PathBuf::from("include/acme"));
    assert_eq!(parsed.config.namespace, vec!["acme", "ext"]);
    assert_eq!(parsed.config.include_dir, "acme/ext");
    assert_eq!(
        parsed.only,
        vec![Artifact::Factory, Artifact::CountedFactoryMap]
    );
    assert!(parsed.to_stdout);
    assert!(!parsed.config.license_header);
    assert!(parsed.verbose);
}

#[test]
fn help_wins() {
    assert_eq!(parse(&["4", "--help"]).ok(), Some(Invocation::Help));
    assert_eq!(parse(&["-h"]).ok(), Some(Invocation::Help));
}

#[test]
fn negative_max_params_is_a_configuration_error() {
    let Err(CliError::Gen(GenError::InvalidMaxParams { input, reason })) = parse(&["-3"]) else {
        panic!("negative max_params must be rejected");
    };
    assert_eq!(input, "-3");
    assert_eq!(reason, "must not be negative");
}

#[test]
fn non_integral_max_params_is_a_configuration_error() {
    for input in ["2.5", "six", "-1.5"] {
        assert!(
            matches!(parse(&[input]), Err(CliError::Gen(GenError::InvalidMaxParams { .. }))),
            "{input}"
        );
    }
}

#[test]
fn usage_errors() {
    for args in [&["--frobnicate"][..], &["--only=widget"], &["2", "3"]] {
        let err = parse(args).err();
        assert!(matches!(err, Some(CliError::Usage(_))), "{args:?}");
        assert_eq!(err.map(|e| e.exit_code()), Some(2));
    }
}
