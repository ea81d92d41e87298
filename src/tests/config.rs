use super::Config;
use crate::controller::RowHeights;
use crate::policy::ExpansionPolicy;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_defaults_when_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = Config::load_from(&dir.path().join("concertina.toml"));

    assert_eq!(cfg.policy, "single");
    assert_eq!(cfg.expansion_policy(), Ok(ExpansionPolicy::SingleExpanded));
    assert_eq!(
        cfg.row_heights(),
        RowHeights {
            parent: 2,
            child: 1
        }
    );
    assert_eq!(cfg.child_indent, 4);
    assert!(cfg.log_file.is_empty());
}

#[test]
fn test_values_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "policy = \"multiple\"\nparent_row_height = 3\nchild_indent = 2\nlog_file = \"list.log\""
    )
    .unwrap();

    let cfg = Config::load_from(file.path());

    assert_eq!(cfg.expansion_policy(), Ok(ExpansionPolicy::MultipleExpanded));
    assert_eq!(cfg.parent_row_height, 3);
    assert_eq!(cfg.child_row_height, 1, "Unset keys keep their default");
    assert_eq!(cfg.child_indent, 2);
    assert_eq!(cfg.log_file, "list.log");
}

#[test]
fn test_unknown_policy_is_reported() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "policy = \"sometimes\"").unwrap();

    let cfg = Config::load_from(file.path());
    assert!(cfg.expansion_policy().is_err());
}

#[test]
fn test_zero_heights_are_raised_to_one() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "parent_row_height = 0\nchild_row_height = 0").unwrap();

    let cfg = Config::load_from(file.path());
    assert_eq!(
        cfg.row_heights(),
        RowHeights {
            parent: 1,
            child: 1
        }
    );
}
