//! # API Handler
//!
//! The invocation surface consumed by the host dispatcher: each request
//! names an operation and carries a flat ordered list of string arguments.
//!
//! The handler checks arity, parses positional arguments into typed inputs,
//! and delegates to the [`RecordApi`] service. Success payloads are raw
//! bytes (JSON for the query operations, empty for mutations); failures
//! carry the structured error. [`ApiHandler::handle`] additionally wraps
//! either outcome in the JSON result/error envelope used by admin tooling.

use crate::domain::codec::encode;
use crate::domain::entities::{Employee, IbmAsset, Ticket, TICKET_FIELD_COUNT};
use crate::domain::errors::RecordError;
use crate::ports::inbound::RecordApi;
use crate::ports::outbound::Ledger;
use crate::service::RecordService;

/// Operation names exposed to the host dispatcher.
pub mod functions {
    pub const READ: &str = "read";
    pub const WRITE: &str = "write";
    pub const READ_EVERYTHING: &str = "readEverything";
    pub const GET_HISTORY: &str = "getHistory";
    pub const GET_TICKETS_BY_RANGE: &str = "getTicketsByRange";
    pub const INIT_TICKET: &str = "initTicket";
    pub const INIT_EMPLOYEE: &str = "initEmployee";
    pub const INIT_ASSET: &str = "initAsset";
    pub const DELETE_TICKET: &str = "deleteTicket";
    pub const DELETE_EMPLOYEE: &str = "deleteEmployee";
    pub const DELETE_ASSET: &str = "deleteAsset";
    pub const SET_ASSIGNEE: &str = "setAssignee";
}

/// Flat string-argument dispatcher over a [`RecordService`].
pub struct ApiHandler<L: Ledger> {
    service: RecordService<L>,
}

fn expect_args(args: &[String], expected: usize) -> Result<(), RecordError> {
    if args.len() != expected {
        return Err(RecordError::WrongArgumentCount {
            expected,
            actual: args.len(),
        });
    }
    Ok(())
}

impl<L: Ledger> ApiHandler<L> {
    /// Wrap a record service.
    pub fn new(service: RecordService<L>) -> Self {
        Self { service }
    }

    /// Access the wrapped service.
    pub fn service(&self) -> &RecordService<L> {
        &self.service
    }

    /// Dispatch one request.
    ///
    /// Mutations return an empty payload on success; `read` returns the raw
    /// stored bytes; the query operations return their JSON payloads.
    pub fn dispatch(&self, function: &str, args: &[String]) -> Result<Vec<u8>, RecordError> {
        match function {
            functions::READ => {
                expect_args(args, 1)?;
                self.service.read(&args[0])
            }
            functions::WRITE => {
                expect_args(args, 2)?;
                self.service.write(&args[0], &args[1])?;
                Ok(Vec::new())
            }
            functions::READ_EVERYTHING => {
                expect_args(args, 0)?;
                encode(&self.service.read_everything()?)
            }
            functions::GET_HISTORY => {
                expect_args(args, 1)?;
                encode(&self.service.get_history(&args[0])?)
            }
            functions::GET_TICKETS_BY_RANGE => {
                expect_args(args, 2)?;
                encode(&self.service.get_tickets_by_range(&args[0], &args[1])?)
            }
            functions::INIT_TICKET => {
                let ticket = Ticket::from_args(args).ok_or(RecordError::WrongArgumentCount {
                    expected: TICKET_FIELD_COUNT,
                    actual: args.len(),
                })?;
                self.service.create_ticket(ticket)?;
                Ok(Vec::new())
            }
            functions::INIT_EMPLOYEE => {
                expect_args(args, 3)?;
                self.service
                    .create_employee(Employee::new(&args[0], &args[1], &args[2]))?;
                Ok(Vec::new())
            }
            functions::INIT_ASSET => {
                expect_args(args, 4)?;
                self.service
                    .create_asset(IbmAsset::new(&args[0], &args[1], &args[2], &args[3]))?;
                Ok(Vec::new())
            }
            // The second argument of the delete operations is the company
            // the host platform authed; authorization itself is the
            // platform's concern, only the arity is enforced here.
            functions::DELETE_TICKET => {
                expect_args(args, 2)?;
                self.service.delete_ticket(&args[0])?;
                Ok(Vec::new())
            }
            functions::DELETE_EMPLOYEE => {
                expect_args(args, 2)?;
                self.service.delete_employee(&args[0])?;
                Ok(Vec::new())
            }
            functions::DELETE_ASSET => {
                expect_args(args, 2)?;
                self.service.delete_asset(&args[0])?;
                Ok(Vec::new())
            }
            functions::SET_ASSIGNEE => {
                expect_args(args, 2)?;
                self.service.set_assignee(&args[0], &args[1])?;
                Ok(Vec::new())
            }
            other => Err(RecordError::UnknownFunction(other.to_string())),
        }
    }

    /// Dispatch one request and wrap the outcome in a JSON envelope.
    ///
    /// Success payloads land under `result` (parsed when they are JSON,
    /// `null` when empty); failures land under `error.message`.
    pub fn handle(&self, function: &str, args: &[String]) -> serde_json::Value {
        match self.dispatch(function, args) {
            Ok(payload) if payload.is_empty() => serde_json::json!({ "result": null }),
            Ok(payload) => {
                let result = serde_json::from_slice::<serde_json::Value>(&payload)
                    .unwrap_or_else(|_| {
                        serde_json::Value::String(String::from_utf8_lossy(&payload).into_owned())
                    });
                serde_json::json!({ "result": result })
            }
            Err(e) => serde_json::json!({
                "error": {
                    "message": e.to_string()
                }
            }),
        }
    }
}
