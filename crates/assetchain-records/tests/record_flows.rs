//! End-to-end record flows driven through the API handler over the
//! in-memory ledger, the way the host dispatcher drives the layer.

use assetchain_records::adapters::api_handler::functions;
use assetchain_records::{ApiHandler, InMemoryLedger, RecordError, RecordService, Ticket};

// =============================================================================
// TEST HELPERS
// =============================================================================

fn handler() -> ApiHandler<InMemoryLedger> {
    ApiHandler::new(RecordService::new(InMemoryLedger::new()))
}

fn strings(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

fn ticket_args(ticket_id: &str, owner: &str) -> Vec<String> {
    strings(&[
        ticket_id,
        "fan makes noise",
        "2024-03-01",
        "open",
        owner,
        "",
        "a1",
        "hardware",
        "1 Main St",
        "ThinkPad T14",
        "prod",
        "fan bearing worn",
        "hwpw",
        "ospw",
        "555-0100",
        "a@b.com",
    ])
}

fn json(bytes: Vec<u8>) -> serde_json::Value {
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// LIFECYCLE SCENARIO
// =============================================================================

#[test]
fn test_full_ticket_lifecycle() {
    let h = handler();

    h.dispatch(functions::INIT_EMPLOYEE, &strings(&["e1", "a@b.com", "Bob"]))
        .unwrap();
    h.dispatch(functions::INIT_TICKET, &ticket_args("t1", "e1"))
        .unwrap();

    // read returns the stored JSON object.
    let ticket = json(h.dispatch(functions::READ, &strings(&["t1"])).unwrap());
    assert_eq!(ticket["ticket_id"], "t1");
    assert_eq!(ticket["docType"], "ticket");
    assert_eq!(ticket["ticketowner"], "e1");
    assert_eq!(ticket["assignee"], "");

    // Reassignment rewrites only the assignee.
    h.dispatch(functions::SET_ASSIGNEE, &strings(&["t1", "e1"]))
        .unwrap();
    let ticket = json(h.dispatch(functions::READ, &strings(&["t1"])).unwrap());
    assert_eq!(ticket["assignee"], "e1");
    assert_eq!(ticket["status"], "open");

    // Deletion removes the current entry...
    h.dispatch(functions::DELETE_TICKET, &strings(&["t1", "any auth co"]))
        .unwrap();
    let err = h.dispatch(functions::READ, &strings(&["t1"])).unwrap_err();
    assert!(err.is_not_found());

    // ...but the version timeline survives, closing with the default-valued
    // ticket that signals the deletion.
    let audit = json(h.dispatch(functions::GET_HISTORY, &strings(&["t1"])).unwrap());
    let audit = audit.as_array().unwrap();
    assert_eq!(audit.len(), 3);
    assert_eq!(audit[0]["value"]["assignee"], "");
    assert_eq!(audit[1]["value"]["assignee"], "e1");
    assert_eq!(
        serde_json::from_value::<Ticket>(audit[2]["value"].clone()).unwrap(),
        Ticket::default()
    );
}

// =============================================================================
// CREATION RULES
// =============================================================================

#[test]
fn test_create_is_not_idempotent() {
    let h = handler();
    h.dispatch(functions::INIT_EMPLOYEE, &strings(&["e1", "a@b.com", "Bob"]))
        .unwrap();
    h.dispatch(functions::INIT_TICKET, &ticket_args("t1", "e1"))
        .unwrap();

    let err = h
        .dispatch(functions::INIT_TICKET, &ticket_args("t1", "e1"))
        .unwrap_err();
    assert!(matches!(err, RecordError::AlreadyExists { key } if key == "t1"));

    let err = h
        .dispatch(functions::INIT_EMPLOYEE, &strings(&["e1", "x@y.com", "Eve"]))
        .unwrap_err();
    assert!(matches!(err, RecordError::AlreadyExists { key } if key == "e1"));
}

#[test]
fn test_ticket_owner_must_exist_and_failure_writes_nothing() {
    let h = handler();
    let err = h
        .dispatch(functions::INIT_TICKET, &ticket_args("t1", "ghost"))
        .unwrap_err();
    assert!(
        matches!(err, RecordError::DependencyNotFound { ref employee_sn } if employee_sn == "ghost")
    );

    assert!(h
        .dispatch(functions::READ, &strings(&["t1"]))
        .unwrap_err()
        .is_not_found());
    assert!(h
        .dispatch(functions::GET_HISTORY, &strings(&["t1"]))
        .unwrap()
        .starts_with(b"[]"));
}

#[test]
fn test_forbidden_characters_abort_before_any_write() {
    let h = handler();
    h.dispatch(functions::INIT_EMPLOYEE, &strings(&["e1", "a@b.com", "Bob"]))
        .unwrap();

    let mut args = ticket_args("t2", "e1");
    args[1] = "injected\" , \"status\": \"closed".to_string();
    let err = h.dispatch(functions::INIT_TICKET, &args).unwrap_err();
    assert!(matches!(err, RecordError::ForbiddenCharacter { .. }));

    assert!(h
        .dispatch(functions::READ, &strings(&["t2"]))
        .unwrap_err()
        .is_not_found());
}

// =============================================================================
// QUERIES
// =============================================================================

#[test]
fn test_range_query_shape_and_ordering() {
    let h = handler();
    h.dispatch(functions::INIT_EMPLOYEE, &strings(&["e1", "a@b.com", "Bob"]))
        .unwrap();
    for id in ["t2", "t1", "t3"] {
        h.dispatch(functions::INIT_TICKET, &ticket_args(id, "e1"))
            .unwrap();
    }

    let result = json(
        h.dispatch(functions::GET_TICKETS_BY_RANGE, &strings(&["t1", "t2"]))
            .unwrap(),
    );
    let entries = result.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["Key"], "t1");
    assert_eq!(entries[1]["Key"], "t2");
    assert_eq!(entries[0]["Record"]["ticket_id"], "t1");
    assert_eq!(entries[0]["Record"]["docType"], "ticket");
}

#[test]
fn test_read_everything_aggregates_all_three_collections() {
    let h = handler();
    h.dispatch(functions::INIT_EMPLOYEE, &strings(&["e1", "a@b.com", "Bob"]))
        .unwrap();
    h.dispatch(functions::INIT_TICKET, &ticket_args("t1", "e1"))
        .unwrap();
    h.dispatch(functions::INIT_ASSET, &strings(&["a1", "laptop", "t1", "e1"]))
        .unwrap();
    // A foreign value in the same keyspace is not reported.
    h.dispatch(functions::WRITE, &strings(&["zz-note", "not a record"]))
        .unwrap();

    let everything = json(h.dispatch(functions::READ_EVERYTHING, &[]).unwrap());
    assert_eq!(everything["tickets"].as_array().unwrap().len(), 1);
    assert_eq!(everything["employee"].as_array().unwrap().len(), 1);
    assert_eq!(everything["ibmasset"].as_array().unwrap().len(), 1);
    assert_eq!(everything["tickets"][0]["ticket_id"], "t1");
    assert_eq!(everything["employee"][0]["fullname"], "Bob");
    assert_eq!(everything["ibmasset"][0]["serial_number"], "a1");
}

#[test]
fn test_history_entry_count_matches_recorded_versions() {
    let h = handler();
    h.dispatch(functions::INIT_EMPLOYEE, &strings(&["e1", "a@b.com", "Bob"]))
        .unwrap();
    h.dispatch(functions::INIT_TICKET, &ticket_args("t1", "e1"))
        .unwrap();
    for _ in 0..3 {
        h.dispatch(functions::SET_ASSIGNEE, &strings(&["t1", "e1"]))
            .unwrap();
    }

    let audit = json(h.dispatch(functions::GET_HISTORY, &strings(&["t1"])).unwrap());
    assert_eq!(audit.as_array().unwrap().len(), 4);
}
