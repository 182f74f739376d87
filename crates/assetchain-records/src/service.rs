//! # Record Service
//!
//! The single implementation of [`RecordApi`] over an injected [`Ledger`].
//!
//! The service is stateless between calls: every operation is a pure
//! function of the ledger port plus its arguments. It validates arguments,
//! enforces existence and dependency rules, and translates between entity
//! structs and the stored byte representation through the codec. It holds no
//! in-memory caches and performs no retries; a ledger failure propagates
//! immediately.

use tracing::{debug, warn};

use crate::domain::codec::{decode, doc_type_of, encode};
use crate::domain::entities::{
    AuditEntry, Employee, Everything, IbmAsset, RangeEntry, Ticket, DOC_TYPE_EMPLOYEE,
    DOC_TYPE_IBM_ASSET, DOC_TYPE_TICKET,
};
use crate::domain::errors::RecordError;
use crate::domain::sanitize::sanitize_arguments;
use crate::ports::inbound::RecordApi;
use crate::ports::outbound::Ledger;

/// Record service over an injected ledger capability.
pub struct RecordService<L: Ledger> {
    ledger: L,
}

impl<L: Ledger> RecordService<L> {
    /// Create a service over the given ledger.
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// Access the underlying ledger port.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Read and decode the record under `key`, or fail with `NotFound`.
    fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        key: &str,
        expected: &'static str,
    ) -> Result<T, RecordError> {
        let bytes = self
            .ledger
            .get(key)?
            .ok_or_else(|| RecordError::NotFound { key: key.to_string() })?;
        decode(key, &bytes, expected)
    }

    /// Whether any record is stored under `key`.
    fn exists(&self, key: &str) -> Result<bool, RecordError> {
        Ok(self.ledger.get(key)?.is_some())
    }

    /// Resolve a ticket owner to an existing employee.
    ///
    /// Pre-condition for ticket creation; a missing employee aborts the
    /// operation before any ledger write.
    fn resolve_owner(&self, employee_sn: &str) -> Result<Employee, RecordError> {
        self.fetch(employee_sn, "employee").map_err(|e| {
            if e.is_not_found() {
                RecordError::DependencyNotFound {
                    employee_sn: employee_sn.to_string(),
                }
            } else {
                e
            }
        })
    }

    /// Shared create path: existence check, canonical encoding, write.
    fn store_new<T: serde::Serialize>(&self, key: &str, record: &T) -> Result<(), RecordError> {
        if self.exists(key)? {
            return Err(RecordError::AlreadyExists { key: key.to_string() });
        }
        let bytes = encode(record)?;
        self.ledger.put(key, &bytes)?;
        Ok(())
    }
}

impl<L: Ledger> RecordApi for RecordService<L> {
    fn read(&self, key: &str) -> Result<Vec<u8>, RecordError> {
        sanitize_arguments(&[key])?;
        debug!(key, "read");
        self.ledger
            .get(key)?
            .ok_or_else(|| RecordError::NotFound { key: key.to_string() })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), RecordError> {
        sanitize_arguments(&[key, value])?;
        debug!(key, "write");
        self.ledger.put(key, value.as_bytes())?;
        Ok(())
    }

    fn get_ticket(&self, id: &str) -> Result<Ticket, RecordError> {
        self.fetch(id, "ticket")
    }

    fn get_employee(&self, id: &str) -> Result<Employee, RecordError> {
        self.fetch(id, "employee")
    }

    fn get_asset(&self, id: &str) -> Result<IbmAsset, RecordError> {
        self.fetch(id, "ibm_asset")
    }

    fn create_ticket(&self, ticket: Ticket) -> Result<(), RecordError> {
        sanitize_arguments(&ticket.field_values())?;
        debug!(ticket_id = %ticket.ticket_id, owner = %ticket.ticketowner, "create_ticket");

        // Owner must resolve before the duplicate check, matching the
        // operation's documented failure order.
        let owner = self.resolve_owner(&ticket.ticketowner)?;

        let canonical = Ticket {
            doc_type: DOC_TYPE_TICKET.to_string(),
            ticketowner: owner.employee_sn,
            ..ticket
        };
        let key = canonical.ticket_id.clone();
        self.store_new(&key, &canonical)
    }

    fn create_employee(&self, employee: Employee) -> Result<(), RecordError> {
        sanitize_arguments(&[
            employee.employee_sn.as_str(),
            employee.email.as_str(),
            employee.fullname.as_str(),
        ])?;
        debug!(employee_sn = %employee.employee_sn, "create_employee");

        let canonical = Employee {
            doc_type: DOC_TYPE_EMPLOYEE.to_string(),
            ..employee
        };
        let key = canonical.employee_sn.clone();
        self.store_new(&key, &canonical)
    }

    fn create_asset(&self, asset: IbmAsset) -> Result<(), RecordError> {
        sanitize_arguments(&[
            asset.serial_number.as_str(),
            asset.asset_type.as_str(),
            asset.tickets.as_str(),
            asset.owner.as_str(),
        ])?;
        debug!(serial_number = %asset.serial_number, "create_asset");

        let canonical = IbmAsset {
            doc_type: DOC_TYPE_IBM_ASSET.to_string(),
            ..asset
        };
        let key = canonical.serial_number.clone();
        self.store_new(&key, &canonical)
    }

    fn delete_ticket(&self, id: &str) -> Result<(), RecordError> {
        sanitize_arguments(&[id])?;
        debug!(ticket_id = id, "delete_ticket");

        // Fetch first so deletion never silently succeeds on an absent id,
        // then delete under the record's own key field.
        let ticket = self.get_ticket(id)?;
        self.ledger.delete(&ticket.ticket_id)?;
        Ok(())
    }

    fn delete_employee(&self, id: &str) -> Result<(), RecordError> {
        sanitize_arguments(&[id])?;
        debug!(employee_sn = id, "delete_employee");

        let employee = self.get_employee(id)?;
        self.ledger.delete(&employee.employee_sn)?;
        Ok(())
    }

    fn delete_asset(&self, id: &str) -> Result<(), RecordError> {
        sanitize_arguments(&[id])?;
        debug!(serial_number = id, "delete_asset");

        let asset = self.get_asset(id)?;
        self.ledger.delete(&asset.serial_number)?;
        Ok(())
    }

    fn set_assignee(&self, ticket_id: &str, employee_sn: &str) -> Result<(), RecordError> {
        sanitize_arguments(&[ticket_id, employee_sn])?;
        debug!(ticket_id, employee_sn, "set_assignee");

        // Both sides must exist; the employee is reported under its own key.
        let employee = self.get_employee(employee_sn)?;
        let mut ticket = self.get_ticket(ticket_id)?;

        ticket.assignee = employee.employee_sn;
        let bytes = encode(&ticket)?;
        self.ledger.put(ticket_id, &bytes)?;
        Ok(())
    }

    fn get_tickets_by_range(
        &self,
        start_key: &str,
        end_key: &str,
    ) -> Result<Vec<RangeEntry>, RecordError> {
        debug!(start_key, end_key, "get_tickets_by_range");

        let mut entries = Vec::new();
        for item in self.ledger.scan(start_key, end_key)? {
            let (key, bytes) = item?;
            // Re-embed the stored JSON as-is; the range query trusts the
            // stored representation and applies no entity schema.
            let record = serde_json::from_slice(&bytes).map_err(|e| RecordError::Decode {
                key: key.clone(),
                expected: "json value",
                message: e.to_string(),
            })?;
            entries.push(RangeEntry { key, record });
        }
        Ok(entries)
    }

    fn get_history(&self, ticket_id: &str) -> Result<Vec<AuditEntry>, RecordError> {
        debug!(ticket_id, "get_history");

        let mut audit = Vec::new();
        for item in self.ledger.history(ticket_id)? {
            let entry = item?;
            let value = match entry.value {
                Some(bytes) => decode(ticket_id, &bytes, "ticket")?,
                // Tombstone: the record was deleted as of this version. The
                // wire shape signals this only through the default value.
                None => Ticket::default(),
            };
            audit.push(AuditEntry {
                tx_id: entry.tx_id,
                value,
            });
        }
        Ok(audit)
    }

    fn read_everything(&self) -> Result<Everything, RecordError> {
        debug!("read_everything");

        let mut everything = Everything::default();
        for item in self.ledger.scan("", "")? {
            let (key, bytes) = item?;
            match doc_type_of(&bytes).as_deref() {
                Some(DOC_TYPE_TICKET) => {
                    everything.tickets.push(decode(&key, &bytes, "ticket")?);
                }
                Some(DOC_TYPE_EMPLOYEE) => {
                    everything.employees.push(decode(&key, &bytes, "employee")?);
                }
                Some(DOC_TYPE_IBM_ASSET) => {
                    everything.assets.push(decode(&key, &bytes, "ibm_asset")?);
                }
                // Untagged or unknown values can legitimately share the
                // keyspace (generic writes); they are not ours to report.
                tag => {
                    warn!(key = %key, ?tag, "skipping value with no known docType");
                }
            }
        }
        Ok(everything)
    }
}
