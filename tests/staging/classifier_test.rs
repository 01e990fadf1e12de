#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use omop_onco::vocabulary::VocabularyFamily;
    use omop_onco::{
        ConditionOccurrence, Measurement, OncoModelError, OncologyVocabularies,
        StagingClassifier, TNM_BUNDLE, TnmVocabulary,
    };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn modifier(id: i64, concept: Option<i32>, measurement_date: NaiveDate) -> Measurement {
        Measurement::new(id, 1, concept, measurement_date, 32_544).as_modifier_of(100, 1_147_127)
    }

    fn condition() -> ConditionOccurrence {
        ConditionOccurrence::new(100, 1, 4_112_853, 32_020, date(2020, 11, 15))
    }

    fn reference_bundle() -> TnmVocabulary {
        let path_stage = VocabularyFamily::new("path_stage", &[("pathological", 900_001)]);
        TnmVocabulary::from_reference(&OncologyVocabularies::new(), path_stage)
    }

    #[test]
    fn test_staging_is_unknown_without_a_registered_bundle() {
        let classifier = StagingClassifier::new();
        let mut condition = condition();
        condition.add_modifier(modifier(1, Some(1_635_564), date(2021, 1, 1)));

        assert_eq!(classifier.path_confirmation(&condition), None);
        assert!(classifier.t_stage(&condition).is_none());
        assert!(classifier.n_stage(&condition).is_none());
        assert!(classifier.m_stage(&condition).is_none());
        assert!(classifier.group_stage(&condition).is_none());
    }

    #[test]
    fn test_t_stage_orders_modifiers_by_date() {
        let _ = env_logger::builder().is_test(true).try_init();

        let t_stage = VocabularyFamily::new("t_stage", &[("t1", 1_635_564), ("t2", 1_635_562)]);
        let empty = VocabularyFamily::new("unused", &[]);
        let bundle = TnmVocabulary::new(
            empty.clone(),
            empty.clone(),
            t_stage,
            empty.clone(),
            empty,
        );

        let mut classifier = StagingClassifier::new();
        classifier.register_bundle(TNM_BUNDLE, bundle).unwrap();

        let mut condition = condition();
        condition.add_modifier(modifier(1, Some(1_635_562), date(2021, 3, 1)));
        condition.add_modifier(modifier(2, Some(1_635_564), date(2021, 1, 1)));

        let staged = classifier.t_stage(&condition).unwrap();
        assert_eq!(staged.len(), 2);
        assert_eq!(staged[0].measurement_date, date(2021, 1, 1));
        assert_eq!(staged[0].measurement_concept_id, Some(1_635_564));
        assert_eq!(staged[1].measurement_date, date(2021, 3, 1));
        assert_eq!(staged[1].measurement_concept_id, Some(1_635_562));
    }

    #[test]
    fn test_get_stage_filters_sorts_and_breaks_ties_by_stored_order() {
        let classifier = StagingClassifier::new();
        let n_stage = VocabularyFamily::new("n_stage", &[("n0", 1_633_440), ("n1", 1_634_434)]);

        let mut condition = condition();
        condition.add_modifier(modifier(1, Some(1_634_434), date(2021, 5, 1)));
        condition.add_modifier(modifier(2, Some(999), date(2021, 1, 1)));
        condition.add_modifier(modifier(3, Some(1_633_440), date(2021, 5, 1)));
        condition.add_modifier(modifier(4, Some(1_633_440), date(2021, 2, 1)));

        let staged = classifier.get_stage(&condition, &n_stage);

        // Out-of-family modifier dropped, rest sorted ascending by date
        assert_eq!(
            staged.iter().map(|m| m.measurement_id).collect::<Vec<_>>(),
            vec![4, 1, 3]
        );
        for m in &staged {
            assert!(n_stage.is_member(m.measurement_concept_id));
        }
        let dates: Vec<_> = staged.iter().map(|m| m.measurement_date).collect();
        assert!(dates.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_get_stage_on_condition_without_modifiers_is_empty() {
        let classifier = StagingClassifier::new();
        let condition = condition();
        let family = VocabularyFamily::new("m_stage", &[("m0", 1_635_624)]);

        assert!(classifier.get_stage(&condition, &family).is_empty());
    }

    #[test]
    fn test_modifier_without_a_code_appears_in_every_stage_listing() {
        let mut classifier = StagingClassifier::new();
        classifier
            .register_bundle(TNM_BUNDLE, reference_bundle())
            .unwrap();

        let mut condition = condition();
        condition.add_modifier(modifier(1, None, date(2021, 4, 1)));

        assert_eq!(classifier.t_stage(&condition).unwrap().len(), 1);
        assert_eq!(classifier.n_stage(&condition).unwrap().len(), 1);
        assert_eq!(classifier.m_stage(&condition).unwrap().len(), 1);
        assert_eq!(classifier.group_stage(&condition).unwrap().len(), 1);
        // A code-less modifier also counts as pathological evidence
        assert_eq!(classifier.path_confirmation(&condition), Some(true));
    }

    #[test]
    fn test_path_confirmation_with_registered_bundle() {
        let mut classifier = StagingClassifier::new();
        classifier
            .register_bundle(TNM_BUNDLE, reference_bundle())
            .unwrap();

        let mut unconfirmed = condition();
        unconfirmed.add_modifier(modifier(1, Some(1_635_564), date(2021, 1, 1)));
        assert_eq!(classifier.path_confirmation(&unconfirmed), Some(false));

        let mut confirmed = condition();
        confirmed.add_modifier(modifier(2, Some(900_001), date(2021, 2, 1)));
        assert_eq!(classifier.path_confirmation(&confirmed), Some(true));
    }

    #[test]
    fn test_bundle_registration_is_write_once() {
        let mut classifier = StagingClassifier::new();
        classifier
            .register_bundle(TNM_BUNDLE, reference_bundle())
            .unwrap();

        let err = classifier
            .register_bundle(TNM_BUNDLE, reference_bundle())
            .unwrap_err();
        assert!(matches!(err, OncoModelError::BundleAlreadyRegistered(_)));

        // Other keys are unaffected
        assert!(classifier.bundle(TNM_BUNDLE).is_some());
        assert!(classifier.bundle("ajcc8").is_none());
    }

    #[test]
    fn test_bundle_from_json_configuration() -> anyhow::Result<()> {
        let json = r#"{
            "path_stage_concepts": {
                "name": "path_stage",
                "members": [{"label": "pathological", "code": 900001}]
            },
            "group_stage_concepts": {
                "name": "group_stage",
                "members": [
                    {"label": "stageIII", "code": 1633650},
                    {"label": "stageIV", "code": 1633650}
                ]
            },
            "t_stage_concepts": {
                "name": "t_stage",
                "members": [{"label": "t1", "code": 1635564}]
            },
            "n_stage_concepts": {"name": "n_stage", "members": []},
            "m_stage_concepts": {"name": "m_stage", "members": []}
        }"#;

        let bundle = TnmVocabulary::from_json(json)?;
        assert_eq!(bundle.group_stage_concepts.code_of("stageIII"), Some(1_633_650));
        assert_eq!(bundle.group_stage_concepts.code_of("stageIV"), Some(1_633_650));

        let mut classifier = StagingClassifier::new();
        classifier.register_bundle(TNM_BUNDLE, bundle)?;

        let mut condition = condition();
        condition.add_modifier(modifier(1, Some(1_633_650), date(2021, 7, 1)));
        assert_eq!(classifier.group_stage(&condition).unwrap().len(), 1);
        assert!(classifier.n_stage(&condition).unwrap().is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_bundle_configuration_is_an_error() {
        let result = TnmVocabulary::from_json("{\"t_stage_concepts\": 42}");
        assert!(matches!(result, Err(OncoModelError::BundleDefinition(_))));
    }
}
