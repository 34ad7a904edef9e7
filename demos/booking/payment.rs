use std::{error::Error, fmt};

use metro_ticketing::models::price::Price;
use uuid::Uuid;

pub type PaymentId = Uuid;

/// Stand-in for the payment gateway; roughly one charge in ten is declined.
pub async fn charge(amount: Price) -> Result<PaymentId, PaymentError> {
    println!("charging {amount}");
    if rand::random::<f32>() < 0.1 {
        Err(PaymentError {})
    } else {
        Ok(Uuid::new_v4())
    }
}

#[derive(Debug)]
pub struct PaymentError {}

impl fmt::Display for PaymentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "payment declined")
    }
}

impl Error for PaymentError {}
