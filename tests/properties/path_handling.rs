//! Property tests for path normalization, revisions and source extraction.

use proptest::prelude::*;

use tfaffected::domain::services::extract_module_references;
use tfaffected::{DirPath, GitRef};

const FORBIDDEN: &[&str] = &[";", "&&", "|", "$", "`", "(", ")", " "];

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(s in "(?s).{0,256}") {
        let _ = DirPath::parse(&s);
        let _ = DirPath::parent_of_file(&s);
        let _ = DirPath::root().join_relative(&s);
    }

    /// PROPERTY: Canonical paths hold only plain segments.
    #[test]
    fn property_segments_are_plain(s in "[a-z./\\\\]{0,64}") {
        if let Some(dir) = DirPath::parse(&s) {
            for segment in dir.segments() {
                prop_assert!(!segment.is_empty());
                prop_assert!(segment != "." && segment != "..");
                prop_assert!(!segment.contains('/') && !segment.contains('\\'));
            }
        }
    }

    /// PROPERTY: Displaying and reparsing a path is stable.
    #[test]
    fn property_display_reparses(s in "[a-z./]{0,64}") {
        if let Some(dir) = DirPath::parse(&s) {
            prop_assert_eq!(DirPath::parse(&dir.to_string()), Some(dir));
        }
    }

    /// PROPERTY: Revisions carrying shell metacharacters are rejected.
    #[test]
    fn property_git_ref_rejects_metacharacters(
        left in "[a-z0-9]{0,8}",
        bad in proptest::sample::select(FORBIDDEN),
        right in "[a-z0-9]{0,8}",
    ) {
        let raw = format!("{}{}{}", left, bad, right);
        prop_assert!(GitRef::parse(&raw).is_err());
    }

    /// PROPERTY: Source extraction never panics and every source is captured verbatim.
    #[test]
    fn property_extraction_never_panics(content in "(?s).{0,512}") {
        for reference in extract_module_references("svc/prod/main.tf", &content) {
            prop_assert!(!reference.source.is_empty());
            prop_assert!(!reference.source.contains('"'));
            let _ = reference.resolve();
        }
    }

    /// PROPERTY: A relative source resolves against the declaring file's directory.
    #[test]
    fn property_relative_source_resolves(
        name in "[a-z]{1,8}",
    ) {
        let content = format!("module \"x\" {{\n  source = \"../../modules/{}\"\n}}\n", name);
        let refs = extract_module_references("svc/prod/main.tf", &content);
        prop_assert_eq!(refs.len(), 1);
        prop_assert_eq!(
            refs[0].resolve(),
            DirPath::parse(&format!("modules/{}", name))
        );
    }
}
