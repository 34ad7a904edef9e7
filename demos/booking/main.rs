use std::env;

use metro_ticketing::{
    fare,
    network::LINES,
    services::{
        issuer::{PaymentReceipt, TicketIssuer},
        validator::matches_route,
        verifier::TicketVerifier,
    },
    stores::{in_memory::InMemoryTicketStore, store::TicketStore},
};
use rand::seq::SliceRandom;
use sqlx::postgres::PgPoolOptions;
use tokio::spawn;

use crate::pg_store::PgTicketStore;

mod payment;
mod pg_store;

// quote fare - line table
// charge payment - external service
// issue ticket - local store
// verify ticket + validate route - local store
#[tokio::main]
async fn main() {
    env_logger::init();

    if let Ok(url) = env::var("DATABASE_URL") {
        let pool = PgPoolOptions::new()
            .connect(&url)
            .await
            .expect("postgres pool");
        run_bookings(PgTicketStore::new(pool)).await;
    } else {
        run_bookings(InMemoryTicketStore::new()).await;
    }
}

async fn run_bookings<S>(store: S)
where
    S: TicketStore + Clone + Send + Sync + 'static,
{
    let mut rides = Vec::new();
    for _ in 0..20 {
        let store = store.clone();
        rides.push(spawn(book_and_ride(store)));
    }
    for ride in rides {
        ride.await.expect("booking task");
    }
}

async fn book_and_ride<S: TicketStore + Clone>(store: S) {
    let (line, source, destination) = {
        let mut rng = rand::thread_rng();
        let line = LINES.choose(&mut rng).expect("line table is not empty");
        let source = line.stations.choose(&mut rng).expect("line has stations");
        let destination = line.stations.choose(&mut rng).expect("line has stations");
        (line.name, source.name, destination.name)
    };

    let price = match fare::quote(line, source, destination) {
        Ok(price) => price,
        Err(e) => {
            println!("No fare for {source} to {destination}: {e}");
            return;
        }
    };

    let payment_id = match payment::charge(price).await {
        Ok(payment_id) => payment_id,
        Err(e) => {
            println!("Payment failed for {source} to {destination}: {e}");
            return;
        }
    };
    println!("Payment {payment_id} settled, {price} for {source} to {destination}");

    let issuer = TicketIssuer::new(store.clone());
    let ticket = match issuer
        .issue(PaymentReceipt {
            line: line.to_string(),
            source: source.to_string(),
            destination: destination.to_string(),
            amount: price,
        })
        .await
    {
        Ok(ticket) => ticket,
        Err(e) => {
            println!("{e}");
            return;
        }
    };

    let verifier = TicketVerifier::new(store);
    match verifier.verify(ticket.token).await {
        Ok(verified) => {
            println!(
                "Ticket {} is {} and valid for the chosen route: {}",
                verified.token,
                verified.status,
                matches_route(&verified, source, destination)
            );
            if let Ok(payload) = verified.qr_payload() {
                println!("QR payload: {payload}");
            }
        }
        Err(e) => println!("{e}"),
    }
}
