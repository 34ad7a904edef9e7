//! Fare computation and ticket issuance/verification for a metro ticket
//! booking service.
//!
//! The purchase flow: quote a fare from the static [`network`] table, charge
//! the payment externally, hand the receipt to a
//! [`TicketIssuer`](services::issuer::TicketIssuer) which persists a
//! token-addressed [`Ticket`](models::ticket::Ticket), and later look the
//! ticket up again through a
//! [`TicketVerifier`](services::verifier::TicketVerifier). Where the ticket
//! is stored is behind the [`TicketStore`](stores::store::TicketStore) trait.
//!
//! HTTP routing, user accounts and rendering are the caller's business.

pub mod fare;
pub mod models;
pub mod network;
pub mod services;
pub mod stores;
