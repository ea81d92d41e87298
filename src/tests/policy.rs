use super::{ExpansionPolicy, ParsePolicyError};

#[test]
fn test_parse_policy_names() {
    assert_eq!(
        "single".parse::<ExpansionPolicy>(),
        Ok(ExpansionPolicy::SingleExpanded)
    );
    assert_eq!(
        " Multiple ".parse::<ExpansionPolicy>(),
        Ok(ExpansionPolicy::MultipleExpanded)
    );
    assert_eq!(
        "several".parse::<ExpansionPolicy>(),
        Ok(ExpansionPolicy::MultipleExpanded)
    );
    assert_eq!(
        "one".parse::<ExpansionPolicy>(),
        Ok(ExpansionPolicy::SingleExpanded)
    );
}

#[test]
fn test_unknown_policy() {
    assert_eq!(
        "some".parse::<ExpansionPolicy>(),
        Err(ParsePolicyError("some".to_string()))
    );
}

#[test]
fn test_display_parses_back() {
    for policy in [
        ExpansionPolicy::SingleExpanded,
        ExpansionPolicy::MultipleExpanded,
    ] {
        assert_eq!(policy.to_string().parse::<ExpansionPolicy>(), Ok(policy));
    }
}
