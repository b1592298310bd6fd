use clientdesk_core::{
    EngagementError, EngagementLog, FixtureEngagementRepository, Priority,
};

#[test]
fn fixture_history_loads_both_collections() {
    let log = EngagementLog::new(&FixtureEngagementRepository::try_new().unwrap()).unwrap();
    assert_eq!(log.past_meetings().len(), 3);
    assert_eq!(log.next_steps().len(), 3);
    assert_eq!(log.past_meetings()[0].title, "Quarterly Portfolio Review");
}

#[test]
fn added_steps_append_in_submission_order() {
    let mut log = EngagementLog::new(&FixtureEngagementRepository::try_new().unwrap()).unwrap();
    let added = log
        .add_next_step("Prepare acquisition brief", "Friday", Priority::High)
        .unwrap();
    assert_eq!(added.description, "Prepare acquisition brief");

    let steps = log.next_steps();
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[3].id, added.id);
}

#[test]
fn blank_descriptions_are_rejected() {
    let mut log = EngagementLog::new(&FixtureEngagementRepository::try_new().unwrap()).unwrap();
    let err = log.add_next_step("   ", "Friday", Priority::Low).unwrap_err();
    assert!(matches!(err, EngagementError::BlankDescription));
    assert_eq!(log.next_steps().len(), 3);
}

#[test]
fn session_steps_are_not_visible_to_other_logs() {
    let repo = FixtureEngagementRepository::try_new().unwrap();
    let mut first = EngagementLog::new(&repo).unwrap();
    first
        .add_next_step("Call about ESG mandate", "Tomorrow", Priority::Medium)
        .unwrap();

    let second = EngagementLog::new(&repo).unwrap();
    assert_eq!(second.next_steps().len(), 3);
}
