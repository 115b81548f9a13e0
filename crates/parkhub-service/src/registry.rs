//! Id-keyed store of outstanding tickets.

use std::collections::HashMap;

use parkhub_entity::{Ticket, TicketId};

#[derive(Debug)]
struct Registered {
    /// Insertion sequence, breaks ties between equal issue times.
    seq: u64,
    ticket: Ticket,
}

/// Outstanding tickets keyed by [`TicketId`].
///
/// Like [`crate::pool::SlotPool`], the registry is not synchronized on its
/// own.
#[derive(Debug, Default)]
pub struct TicketRegistry {
    tickets: HashMap<TicketId, Registered>,
    next_seq: u64,
}

impl TicketRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a freshly issued ticket under its id.
    pub fn insert(&mut self, ticket: Ticket) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tickets.insert(ticket.id, Registered { seq, ticket });
    }

    /// Look up an outstanding ticket.
    pub fn get(&self, id: &TicketId) -> Option<&Ticket> {
        self.tickets.get(id).map(|r| &r.ticket)
    }

    /// Remove a ticket, returning it if it was outstanding.
    pub fn remove(&mut self, id: &TicketId) -> Option<Ticket> {
        self.tickets.remove(id).map(|r| r.ticket)
    }

    /// Number of outstanding tickets.
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether no tickets are outstanding.
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }

    /// All outstanding tickets, oldest issue time first.
    pub fn ordered(&self) -> Vec<Ticket> {
        let mut entries: Vec<&Registered> = self.tickets.values().collect();
        entries.sort_by(|a, b| {
            a.ticket
                .issued_at
                .cmp(&b.ticket.issued_at)
                .then(a.seq.cmp(&b.seq))
        });
        entries.into_iter().map(|r| r.ticket.clone()).collect()
    }
}
