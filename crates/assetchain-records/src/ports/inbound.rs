//! # Inbound Ports (Driving Ports)
//!
//! The primary API of the record layer: the typed operations behind the host
//! dispatcher's invocation surface.

use crate::domain::entities::{AuditEntry, Employee, Everything, IbmAsset, RangeEntry, Ticket};
use crate::domain::errors::RecordError;

/// Primary API for the record layer.
///
/// Every operation is a single synchronous unit of work against the ledger.
/// Implementations must run argument sanitation before any mutating or
/// identity-check operation consumes its arguments.
pub trait RecordApi {
    /// Read the raw stored value under a key.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no value under this key
    fn read(&self, key: &str) -> Result<Vec<u8>, RecordError>;

    /// Write a raw value under a key, bypassing the entity codecs.
    fn write(&self, key: &str, value: &str) -> Result<(), RecordError>;

    /// Read a ticket by id.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no ticket with this id
    /// - `Decode`: the stored bytes do not parse as a ticket
    fn get_ticket(&self, id: &str) -> Result<Ticket, RecordError>;

    /// Read an employee by serial identifier.
    fn get_employee(&self, id: &str) -> Result<Employee, RecordError>;

    /// Read a hardware asset by serial number.
    fn get_asset(&self, id: &str) -> Result<IbmAsset, RecordError>;

    /// Create a ticket. Strictly first-write-wins per id.
    ///
    /// The ticket owner must already exist as an employee; on any failure no
    /// ledger write is performed.
    ///
    /// ## Errors
    ///
    /// - `DependencyNotFound`: `ticketowner` does not resolve to an employee
    /// - `AlreadyExists`: a ticket with this id is already stored
    /// - `ForbiddenCharacter`: a field fails sanitation
    fn create_ticket(&self, ticket: Ticket) -> Result<(), RecordError>;

    /// Create an employee. Strictly first-write-wins per serial identifier.
    fn create_employee(&self, employee: Employee) -> Result<(), RecordError>;

    /// Create a hardware asset. Strictly first-write-wins per serial number.
    fn create_asset(&self, asset: IbmAsset) -> Result<(), RecordError>;

    /// Delete a ticket after confirming it exists.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: no ticket with this id; deletion never silently
    ///   succeeds on an absent record
    fn delete_ticket(&self, id: &str) -> Result<(), RecordError>;

    /// Delete an employee after confirming it exists.
    fn delete_employee(&self, id: &str) -> Result<(), RecordError>;

    /// Delete a hardware asset after confirming it exists.
    fn delete_asset(&self, id: &str) -> Result<(), RecordError>;

    /// Reassign a ticket to an employee, rewriting only the assignee field.
    ///
    /// ## Errors
    ///
    /// - `NotFound`: the ticket or the employee is absent
    fn set_assignee(&self, ticket_id: &str, employee_sn: &str) -> Result<(), RecordError>;

    /// Ordered range query over `[start_key, end_key]`.
    ///
    /// Schema-agnostic: each stored value is re-embedded verbatim under
    /// `Record` with no entity validation.
    fn get_tickets_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Vec<RangeEntry>, RecordError>;

    /// Reconstruct the version timeline of a ticket, oldest first.
    ///
    /// A version in which the ticket was deleted carries the default-valued
    /// ticket; callers must treat a default-valued entry as "deleted at this
    /// point in time", not as "unchanged".
    fn get_history(&self, ticket_id: &str) -> Result<Vec<AuditEntry>, RecordError>;

    /// Combined view across all three collections.
    ///
    /// One full-keyspace scan, classified client-side by the `docType` tag.
    /// Values with no tag (written through [`RecordApi::write`]) are skipped;
    /// a tagged value that fails to decode surfaces `Decode`.
    fn read_everything(&self) -> Result<Everything, RecordError>;
}
