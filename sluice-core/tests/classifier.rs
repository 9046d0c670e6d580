#[cfg(test)]
mod tests {
    use sluice_core::{
        AnnotationKind, ConventionRegistry, ModelConfig, PlanStatement, QueryPlan,
        QuerySplittingBehavior, classify,
    };

    fn single_plan() -> QueryPlan {
        QueryPlan::new(PlanStatement::root("authors", &["id", "name"]))
    }

    fn split_plan() -> QueryPlan {
        single_plan().expanded(PlanStatement::collection("books", &["author_id", "title"]))
    }

    #[test]
    fn split_plan_is_always_split() {
        for requested in [
            QuerySplittingBehavior::Unspecified,
            QuerySplittingBehavior::SingleQuery,
            QuerySplittingBehavior::SplitQuery,
        ] {
            let classification = classify(&split_plan(), requested, &ModelConfig::default());
            assert_eq!(classification.splitting, QuerySplittingBehavior::SplitQuery);
        }
    }

    #[test]
    fn single_plan_defaults_to_single_query() {
        let classification = classify(
            &single_plan(),
            QuerySplittingBehavior::Unspecified,
            &ModelConfig::default(),
        );
        assert_eq!(classification.splitting, QuerySplittingBehavior::SingleQuery);
        assert!(!classification.base_is_buffering);
    }

    #[test]
    fn model_default_applies_when_the_query_is_silent() {
        let mut model = ModelConfig::default();
        model.set_splitting_default(QuerySplittingBehavior::SplitQuery);
        let classification = classify(&single_plan(), QuerySplittingBehavior::Unspecified, &model);
        assert_eq!(classification.splitting, QuerySplittingBehavior::SplitQuery);
    }

    #[test]
    fn explicit_choice_wins_over_the_model_default() {
        let mut model = ModelConfig::default();
        model.set_splitting_default(QuerySplittingBehavior::SplitQuery);
        let classification = classify(&single_plan(), QuerySplittingBehavior::SingleQuery, &model);
        assert_eq!(classification.splitting, QuerySplittingBehavior::SingleQuery);
    }

    #[test]
    fn client_eval_forces_base_buffering() {
        let plan = QueryPlan::new(
            PlanStatement::root("authors", &["id", "name"]).client_evaluated(),
        );
        let classification = classify(
            &plan,
            QuerySplittingBehavior::Unspecified,
            &ModelConfig::default(),
        );
        assert!(classification.base_is_buffering);
    }

    #[test]
    fn classification_is_always_resolved() {
        for plan in [single_plan(), split_plan()] {
            let classification = classify(
                &plan,
                QuerySplittingBehavior::Unspecified,
                &ModelConfig::default(),
            );
            assert!(classification.splitting.is_resolved());
        }
    }

    #[test]
    fn conventions_feed_the_model_default() {
        let mut model = ModelConfig::default();
        ConventionRegistry::new().apply([AnnotationKind::SplitQueriesByDefault], &mut model);
        assert_eq!(
            model.splitting_default(),
            QuerySplittingBehavior::SplitQuery
        );
        ConventionRegistry::new().apply(
            [
                AnnotationKind::SplitQueriesByDefault,
                AnnotationKind::SingleQueryByDefault,
            ],
            &mut model,
        );
        assert_eq!(
            model.splitting_default(),
            QuerySplittingBehavior::SingleQuery
        );
    }
}
