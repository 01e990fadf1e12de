#[cfg(test)]
mod tests {
    use omop_onco::vocabulary::{ConceptEntry, FamilyDef, VocabularyFamily};
    use omop_onco::OncoModelError;

    #[test]
    fn test_absent_code_is_always_a_member() {
        let family = VocabularyFamily::new("t_stage", &[("t0", 1_634_213), ("t1", 1_635_564)]);
        let empty = VocabularyFamily::new("treatment_modifiers", &[]);

        assert!(family.is_member(None));
        assert!(empty.is_member(None));
    }

    #[test]
    fn test_unknown_code_is_not_a_member() {
        let family = VocabularyFamily::new("m_stage", &[("m0", 1_635_624), ("m1", 1_635_142)]);

        assert!(!family.is_member(Some(999)));
        assert!(family.is_member(Some(1_635_142)));
    }

    #[test]
    fn test_labels_and_codes_keep_declaration_order() {
        let family = VocabularyFamily::new(
            "episode_concepts",
            &[
                ("episode_of_care", 32_533),
                ("treatment_regimen", 32_531),
                ("treatment_cycle", 32_532),
            ],
        );

        assert_eq!(
            family.labels(),
            vec!["episode_of_care", "treatment_regimen", "treatment_cycle"]
        );
        assert_eq!(
            family.codes().collect::<Vec<_>>(),
            vec![32_533, 32_531, 32_532]
        );
        // A second iteration starts over from the beginning
        assert_eq!(family.codes().count(), 3);
    }

    #[test]
    fn test_json_form_preserves_member_order() {
        let family = VocabularyFamily::new("n_stage", &[("n0", 1_633_440), ("n1", 1_634_434)]);

        let json = serde_json::to_string(&family).unwrap();
        let parsed: VocabularyFamily = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.name(), "n_stage");
        assert_eq!(parsed.labels(), vec!["n0", "n1"]);
        assert_eq!(parsed.code_of("n1"), Some(1_634_434));
    }

    #[test]
    fn test_duplicate_label_in_definition_is_an_error() {
        let def = FamilyDef {
            name: "m_stage".to_string(),
            members: vec![
                ConceptEntry {
                    label: "m0".to_string(),
                    code: 1_635_624,
                },
                ConceptEntry {
                    label: "m0".to_string(),
                    code: 1_635_142,
                },
            ],
        };
        let json = serde_json::to_string(&def).unwrap();

        let result: Result<VocabularyFamily, _> = serde_json::from_str(&json);
        assert!(result.is_err());

        let err = VocabularyFamily::try_from(def).unwrap_err();
        assert!(matches!(err, OncoModelError::DuplicateLabel { .. }));
    }
}
