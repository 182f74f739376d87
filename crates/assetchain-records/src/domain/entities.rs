//! # Domain Entities
//!
//! The three record types managed by this layer, plus the wire-shaped result
//! types for the range, history, and aggregate queries.
//!
//! Each record is stored as a single JSON value under its unique business id.
//! The `docType` discriminator is carried as a struct field so it round-trips
//! through storage and appears in every response payload.

use serde::{Deserialize, Serialize};

/// `docType` tag for [`Ticket`] values.
pub const DOC_TYPE_TICKET: &str = "ticket";
/// `docType` tag for [`Employee`] values.
pub const DOC_TYPE_EMPLOYEE: &str = "employee";
/// `docType` tag for [`IbmAsset`] values.
pub const DOC_TYPE_IBM_ASSET: &str = "ibm_asset";

/// A service request.
///
/// Keyed by `ticket_id`, globally unique across the ledger keyspace.
/// `ticketowner` and `assignee` reference `Employee::employee_sn`; `asset`
/// references `IbmAsset::serial_number`. The owner reference is verified at
/// creation time, the others are free-form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "docType", default)]
    pub doc_type: String,
    pub ticket_id: String,
    pub description: String,
    pub date: String,
    pub status: String,
    pub ticketowner: String,
    pub assignee: String,
    pub asset: String,
    pub queue: String,
    pub address: String,
    pub descriptionproduct: String,
    pub prod: String,
    pub diagnostic: String,
    pub hardwarepw: String,
    pub ospw: String,
    pub contactphone: String,
    pub contactemail: String,
}

/// Number of positional arguments carried by the `initTicket` operation.
pub const TICKET_FIELD_COUNT: usize = 16;

impl Ticket {
    /// Build a ticket from the 16 positional `initTicket` arguments.
    ///
    /// Returns `None` when the slice does not carry exactly
    /// [`TICKET_FIELD_COUNT`] arguments.
    pub fn from_args(args: &[String]) -> Option<Self> {
        if args.len() != TICKET_FIELD_COUNT {
            return None;
        }
        Some(Self {
            doc_type: DOC_TYPE_TICKET.to_string(),
            ticket_id: args[0].clone(),
            description: args[1].clone(),
            date: args[2].clone(),
            status: args[3].clone(),
            ticketowner: args[4].clone(),
            assignee: args[5].clone(),
            asset: args[6].clone(),
            queue: args[7].clone(),
            address: args[8].clone(),
            descriptionproduct: args[9].clone(),
            prod: args[10].clone(),
            diagnostic: args[11].clone(),
            hardwarepw: args[12].clone(),
            ospw: args[13].clone(),
            contactphone: args[14].clone(),
            contactemail: args[15].clone(),
        })
    }

    /// The argument strings this ticket was built from, in positional order.
    ///
    /// Used to run the full field set through sanitation before a write.
    pub fn field_values(&self) -> [&str; TICKET_FIELD_COUNT] {
        [
            &self.ticket_id,
            &self.description,
            &self.date,
            &self.status,
            &self.ticketowner,
            &self.assignee,
            &self.asset,
            &self.queue,
            &self.address,
            &self.descriptionproduct,
            &self.prod,
            &self.diagnostic,
            &self.hardwarepw,
            &self.ospw,
            &self.contactphone,
            &self.contactemail,
        ]
    }
}

/// A person able to own or be assigned tickets.
///
/// Keyed by `employee_sn`, a serial identifier rather than a display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(rename = "docType", default)]
    pub doc_type: String,
    pub employee_sn: String,
    pub email: String,
    pub fullname: String,
}

impl Employee {
    pub fn new(
        employee_sn: impl Into<String>,
        email: impl Into<String>,
        fullname: impl Into<String>,
    ) -> Self {
        Self {
            doc_type: DOC_TYPE_EMPLOYEE.to_string(),
            employee_sn: employee_sn.into(),
            email: email.into(),
            fullname: fullname.into(),
        }
    }
}

/// A tracked hardware unit.
///
/// Keyed by `serial_number`. `owner` references `Employee::employee_sn`;
/// `tickets` is a free-form associated ticket reference string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IbmAsset {
    #[serde(rename = "docType", default)]
    pub doc_type: String,
    pub serial_number: String,
    pub asset_type: String,
    pub tickets: String,
    pub owner: String,
}

impl IbmAsset {
    pub fn new(
        serial_number: impl Into<String>,
        asset_type: impl Into<String>,
        tickets: impl Into<String>,
        owner: impl Into<String>,
    ) -> Self {
        Self {
            doc_type: DOC_TYPE_IBM_ASSET.to_string(),
            serial_number: serial_number.into(),
            asset_type: asset_type.into(),
            tickets: tickets.into(),
            owner: owner.into(),
        }
    }
}

/// Combined view across all three collections, built by the aggregator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Everything {
    pub tickets: Vec<Ticket>,
    #[serde(rename = "employee")]
    pub employees: Vec<Employee>,
    #[serde(rename = "ibmasset")]
    pub assets: Vec<IbmAsset>,
}

/// One element of a range-query result.
///
/// `record` is the stored JSON value re-embedded verbatim; the range query is
/// schema-agnostic and performs no entity validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeEntry {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Record")]
    pub record: serde_json::Value,
}

/// One element of a ticket history result, oldest first.
///
/// A version in which the ticket was deleted carries the default-valued
/// [`Ticket`]; deletion is signaled only implicitly through the default
/// value, never through an explicit flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    #[serde(rename = "txId")]
    pub tx_id: String,
    pub value: Ticket,
}
