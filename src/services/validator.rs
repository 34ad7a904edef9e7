use crate::models::ticket::Ticket;

/// Whether a previously issued ticket covers a newly selected route.
///
/// Exact, case-sensitive match on both ends; a reversed direction does not
/// count.
pub fn matches_route(ticket: &Ticket, source: &str, destination: &str) -> bool {
    ticket.source == source && ticket.destination == destination
}
