use super::*;
use pretty_assertions::assert_eq;

#[test]
fn default_matches_stock_layout() {
    let config = GeneratorConfig::default();
    assert_eq!(config.max_params, 6);
    assert_eq!(config.namespace, vec!["boost", "extensions"]);
    assert_eq!(config.include_dir, "boost/extension");
    assert!(config.validate().is_ok());
}

#[test]
fn parse_max_params_accepts_integers() {
    assert_eq!(GeneratorConfig::parse_max_params("0"), Ok(0));
    assert_eq!(GeneratorConfig::parse_max_params("6"), Ok(6));
    assert_eq!(GeneratorConfig::parse_max_params(" 12 "), Ok(12));
}

#[test]
fn parse_max_params_rejects_negative() {
    let err = GeneratorConfig::parse_max_params("-1").unwrap_err();
    assert_eq!(
        err,
        GenError::InvalidMaxParams {
            input: "-1".to_string(),
            reason: "must not be negative",
        }
    );
}

#[test]
fn parse_max_params_rejects_non_integral() {
    for input in ["2.5", "six", "", "0x6"] {
        let err = GeneratorConfig::parse_max_params(input).unwrap_err();
        assert!(
            matches!(err, GenError::InvalidMaxParams { reason: "not an integer", .. }),
            "{input:?} -> {err:?}"
        );
    }
}

#[test]
fn parse_max_params_reports_overflow_as_out_of_range() {
    for input in ["99999999999999999999", "-99999999999999999999"] {
        let err = GeneratorConfig::parse_max_params(input).unwrap_err();
        assert!(
            matches!(err, GenError::InvalidMaxParams { reason: "out of range", .. }),
            "{input:?} -> {err:?}"
        );
    }
}

#[test]
fn parse_max_params_rejects_too_large() {
    let err = GeneratorConfig::parse_max_params("65").unwrap_err();
    assert_eq!(err, GenError::TooManyParams { value: 65, limit: 64 });
}

#[test]
fn validate_rejects_bad_namespace() {
    let config = GeneratorConfig::default().with_namespace("boost::3d");
    assert_eq!(
        config.validate(),
        Err(GenError::InvalidIdentifier {
            what: "namespace segment",
            value: "3d".to_string(),
        })
    );

    let config = GeneratorConfig::default().with_namespace("");
    assert_eq!(config.validate(), Err(GenError::EmptyNamespace));
}

#[test]
fn validate_rejects_bad_include_dir() {
    let config = GeneratorConfig {
        include_dir: "boost//extension".to_string(),
        ..GeneratorConfig::default()
    };
    assert!(matches!(
        config.validate(),
        Err(GenError::InvalidIdentifier { what: "include directory", .. })
    ));
}

#[test]
fn validate_rejects_oversized_max_params() {
    let config = GeneratorConfig::default().with_max_params(100);
    assert_eq!(
        config.validate(),
        Err(GenError::TooManyParams { value: 100, limit: 64 })
    );
}

#[test]
fn guard_prefix_from_include_dir() {
    assert_eq!(GeneratorConfig::default().guard_prefix(), "BOOST_EXTENSION_");
    let config = GeneratorConfig {
        include_dir: "plugins/ext".to_string(),
        ..GeneratorConfig::default()
    };
    assert_eq!(config.guard_prefix(), "PLUGINS_EXT_");
    assert_eq!(config.include_path("factory.hpp"), "plugins/ext/factory.hpp");
}

#[test]
fn with_namespace_splits_path() {
    let config = GeneratorConfig::default().with_namespace("acme::plugins::v2");
    assert_eq!(config.namespace, vec!["acme", "plugins", "v2"]);
}
