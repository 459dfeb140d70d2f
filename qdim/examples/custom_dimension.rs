//! Declaring application-specific dimensions and restricting what they can do.
//!
//! Run with: cargo run --example custom_dimension

use qdim::{Caps, Dimension, Quantity, Signature, Singleton, Unity};

#[derive(Dimension)]
#[dimension(id = 16, crate = "qdim")]
pub enum Requests {}

#[derive(Dimension)]
#[dimension(id = 17, name = "worker", crate = "qdim")]
pub enum Workers {}

#[derive(Dimension)]
#[dimension(id = 18, name = "account", crate = "qdim")]
pub enum Account {}

type RequestCount = Singleton<u64, Requests>;
type WorkerCount = Singleton<u64, Workers>;
type Load = Quantity<u64, Unity, qdim::dims!(Requests; Workers)>;

// Identifiers can be compared and hashed, but adding two account ids is meaningless.
type AccountId = Singleton<u64, Account, Caps<false, false, true>>;

fn main() {
    let served = RequestCount::new(1200) + RequestCount::new(300);
    let pool = WorkerCount::new(5);

    let load: Load = (served / pool).cast();
    println!("load: {} ({})", load, Signature::<qdim::dims!(Requests; Workers)>::new());
    assert_eq!(load.value(), 300);

    let owner = AccountId::new(42);
    assert_eq!(owner, AccountId::new(42));
    println!("owner: {}", owner);
}
