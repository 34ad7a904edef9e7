use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::price::Price;

/// Opaque identifier issued at purchase time, used later to retrieve the
/// ticket.
pub type TicketToken = Uuid;

/// Created once at purchase, read back at verification, never mutated in
/// between. Serializes to the wire shape the clients expect (camelCase
/// fields, lowercase status).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub token: TicketToken,
    pub source: String,
    pub destination: String,
    pub price: Price,
    pub issued_at: DateTime<Utc>,
    pub status: TicketStatus,
}

impl Ticket {
    /// JSON blob embedded in the ticket QR code. Rendering is up to the
    /// client.
    pub fn qr_payload(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    Active,
    Used,
    Invalid,
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Used => write!(f, "used"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_wire_shape() {
        let ticket = Ticket {
            token: Uuid::nil(),
            source: "Versova".to_string(),
            destination: "Andheri".to_string(),
            price: Price::from_paise(5000),
            issued_at: Utc.with_ymd_and_hms(2024, 12, 1, 9, 30, 0).unwrap(),
            status: TicketStatus::Active,
        };
        let payload = ticket.qr_payload().unwrap();
        assert!(payload.contains("\"issuedAt\""), "{payload}");
        assert!(payload.contains("\"status\":\"active\""), "{payload}");

        let back: Ticket = serde_json::from_str(&payload).unwrap();
        assert_eq!(ticket, back);
    }
}
