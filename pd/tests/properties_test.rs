//! Property tests for plan creation and clarification

use std::collections::HashSet;

use plandesk::{ClarificationRequest, DetailLevel, PlanRegistry, PlanRequest, clarify_plan};
use proptest::prelude::*;

/// Objectives with at least one visible character
fn objective() -> impl Strategy<Value = String> {
    "[ ]{0,3}[A-Za-z0-9][A-Za-z0-9 ,.'-]{0,40}"
}

proptest! {
    #[test]
    fn prop_default_plan_has_three_steps(objective in objective()) {
        let mut registry = PlanRegistry::new();
        let plan = registry.create_plan(&PlanRequest::new(objective.clone())).unwrap().plan;

        prop_assert_eq!(plan.steps.len(), 3);
        prop_assert!(plan.notes.is_none());
        prop_assert_eq!(plan.title, format!("Plan for: {}", objective));
    }

    #[test]
    fn prop_one_step_per_constraint(
        objective in objective(),
        constraints in prop::collection::vec("[a-z ]{1,20}", 1..8),
    ) {
        let mut registry = PlanRegistry::new();
        let request = PlanRequest::new(objective).with_constraints(constraints.clone());
        let steps = registry.create_plan(&request).unwrap().plan.steps;

        prop_assert_eq!(steps.len(), 3 + constraints.len());
        for (i, constraint) in constraints.iter().enumerate() {
            let step = &steps[3 + i];
            prop_assert_eq!(step.step_number as usize, 4 + i);
            prop_assert_eq!(&step.description, &format!("Address constraint: {}", constraint));
        }
    }

    #[test]
    fn prop_blank_objective_rejected(objective in "[ \t\n]{0,10}") {
        let mut registry = PlanRegistry::new();
        let err = registry.create_plan(&PlanRequest::new(objective)).unwrap_err();
        prop_assert_eq!(err.to_string(), "Objective is required");
    }

    #[test]
    fn prop_ids_pairwise_distinct(count in 1usize..40) {
        let mut registry = PlanRegistry::new();
        let ids: HashSet<_> = (0..count)
            .map(|n| registry.create_plan(&PlanRequest::new(format!("Objective {}", n))).unwrap().id)
            .collect();
        prop_assert_eq!(ids.len(), count);
    }

    #[test]
    fn prop_low_detail_never_lists_steps(
        objective in objective(),
        constraints in prop::collection::vec("[a-z]{1,10}", 0..5),
    ) {
        let mut registry = PlanRegistry::new();
        let created = registry
            .create_plan(&PlanRequest::new(objective).with_constraints(constraints))
            .unwrap();
        let request = ClarificationRequest::new(created.id.to_string()).with_detail_level(DetailLevel::Low);
        let clarification = clarify_plan(&registry, &request).unwrap();

        prop_assert!(!clarification.plan_summary.contains("Detailed Steps"));
        let risks = clarification.highlighted_risks.unwrap_or_default();
        prop_assert_eq!(risks.last().map(String::as_str), Some("Timeline may be affected by external factors."));
    }
}
