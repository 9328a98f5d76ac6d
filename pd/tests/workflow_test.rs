//! End-to-end workflows across the registry and both responders

use plandesk::{
    CannedInformation, ClarificationRequest, DetailLevel, InformationRequest, InformationSource, PlanRegistry,
    PlanRequest, PlanUpdate, clarify_plan,
};

#[tokio::test]
async fn test_project_planning_workflow() {
    let mut registry = PlanRegistry::new();

    // Research first
    let info = CannedInformation
        .get_information(
            &InformationRequest::new("Agile Project Management").with_sub_topics(["Scrum", "Sprint Planning"]),
        )
        .await
        .expect("information lookup failed");
    assert!(info.summary.contains("Agile Project Management"));
    assert!(info.detailed_explanation.contains("Scrum"));

    // Plan based on the research
    let request = PlanRequest::new("Implement Agile methodology for software team")
        .with_constraints(["Complete within 2 months", "Limited budget of $10,000"])
        .with_context(format!("Based on research: {}", info.summary));
    let created = registry.create_plan(&request).expect("plan creation failed");
    assert!(created.plan.title.contains("Implement Agile methodology"));
    assert!(created.plan.steps.len() > 3);

    // Clarify at high detail using the returned ID
    let plan_id = created.id.to_string();
    let clarification = clarify_plan(
        &registry,
        &ClarificationRequest::new(&plan_id).with_detail_level(DetailLevel::High),
    )
    .expect("clarification failed");
    assert!(clarification.plan_summary.contains("Implement Agile methodology"));
    assert!(!clarification.next_steps.is_empty());

    // Fold the risks back into the plan
    let risks = clarification.highlighted_risks.unwrap_or_default().join(", ");
    let updated = registry
        .update_plan(
            &plan_id,
            PlanUpdate::new().notes(format!("Updated after clarification. Risks identified: {}", risks)),
        )
        .expect("update failed");
    assert!(updated.notes.as_deref().unwrap_or("").contains("Risks identified"));
    assert_eq!(updated.steps, created.plan.steps);
}

#[tokio::test]
async fn test_research_and_learning_workflow() {
    let mut registry = PlanRegistry::new();

    let detailed = CannedInformation
        .get_information(
            &InformationRequest::new("Machine Learning").with_sub_topics(["Neural Networks", "Supervised Learning"]),
        )
        .await
        .expect("information lookup failed");
    assert!(detailed.detailed_explanation.contains("Neural Networks"));

    let created = registry
        .create_plan(
            &PlanRequest::new("Learn Machine Learning fundamentals in 3 months")
                .with_constraints(["Study 10 hours per week", "Focus on practical applications"])
                .with_context(format!("Based on research: {}", detailed.summary)),
        )
        .expect("plan creation failed");
    assert!(created.plan.title.contains("Learn Machine Learning"));

    let simplified = clarify_plan(
        &registry,
        &ClarificationRequest::new(created.id.to_string()).with_detail_level(DetailLevel::Low),
    )
    .expect("clarification failed");
    assert!(simplified.plan_summary.contains("Summary"));
    assert!(simplified.plan_summary.contains("5 steps"));
}

#[test]
fn test_mobile_app_medium_clarification() {
    let mut registry = PlanRegistry::new();
    let created = registry
        .create_plan(&PlanRequest::new("Build a mobile app"))
        .expect("plan creation failed");
    assert_eq!(created.plan.steps.len(), 3);
    assert!(created.plan.title.contains("Build a mobile app"));

    let clarification =
        clarify_plan(&registry, &ClarificationRequest::new(created.id.to_string())).expect("clarification failed");

    assert!(clarification.plan_summary.contains(&created.plan.title));
    let enumerated = clarification
        .plan_summary
        .lines()
        .filter(|line| line.split_once(". ").is_some_and(|(n, _)| n.parse::<u32>().is_ok()))
        .count();
    assert_eq!(enumerated, 3);
    assert_eq!(clarification.next_steps.len(), 2);
}

#[test]
fn test_high_detail_shows_duration_and_dependencies() {
    let mut registry = PlanRegistry::new();
    let created = registry.create_plan(&PlanRequest::new("X")).expect("plan creation failed");
    let plan_id = created.id.to_string();

    // Step 2 depends on step 1 but lasts a day; give it two
    let mut steps = created.plan.steps.clone();
    steps[1].duration = Some("2 days".to_string());
    registry
        .update_plan(&plan_id, PlanUpdate::new().steps(steps))
        .expect("update failed");

    let summary = clarify_plan(
        &registry,
        &ClarificationRequest::new(&plan_id).with_detail_level(DetailLevel::High),
    )
    .expect("clarification failed")
    .plan_summary;

    assert!(summary.contains("2. Analyze findings (2 days) - Depends on steps: 1"));
}

#[test]
fn test_multiple_dependency_risk_after_update() {
    let mut registry = PlanRegistry::new();
    let created = registry.create_plan(&PlanRequest::new("X")).expect("plan creation failed");
    let plan_id = created.id.to_string();

    let mut steps = created.plan.steps;
    steps[2].dependencies = Some(vec![1, 2]);
    registry
        .update_plan(&plan_id, PlanUpdate::new().steps(steps))
        .expect("update failed");

    let risks = clarify_plan(&registry, &ClarificationRequest::new(&plan_id))
        .expect("clarification failed")
        .highlighted_risks
        .unwrap_or_default();

    assert_eq!(
        risks,
        vec![
            "Step 3 has multiple dependencies".to_string(),
            "Timeline may be affected by external factors.".to_string(),
        ]
    );
}
