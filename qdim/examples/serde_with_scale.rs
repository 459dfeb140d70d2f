//! Example demonstrating the serde_with_scale helper module.
//!
//! Fields marked with `#[serde(with = "qdim::serde_with_scale")]` carry their scale next to the
//! value; other fields stay as bare numbers.
//!
//! Run with: cargo run --example serde_with_scale --features serde

#[cfg(feature = "serde")]
fn main() {
    use qdim::{Kilometers, Meters, Seconds};
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug)]
    struct Segment {
        #[serde(with = "qdim::serde_with_scale")]
        length: Kilometers,
        climb: Meters,
        #[serde(with = "qdim::serde_with_scale")]
        elapsed: Seconds,
    }

    let segment = Segment {
        length: Kilometers::new(12),
        climb: Meters::new(340),
        elapsed: Seconds::new(3000),
    };

    let json = serde_json::to_string_pretty(&segment).unwrap();
    println!("{}", json);

    let back: Segment = serde_json::from_str(&json).unwrap();
    assert_eq!(back.length, segment.length);
    assert_eq!(back.climb, segment.climb);

    // A scale that does not match the field type is rejected.
    let wrong = r#"{"length":{"value":12,"scale":"1/1"},"climb":340,"elapsed":{"value":3000}}"#;
    match serde_json::from_str::<Segment>(wrong) {
        Ok(_) => unreachable!("scale mismatch must fail"),
        Err(err) => println!("rejected: {}", err),
    }
}

#[cfg(not(feature = "serde"))]
fn main() {
    println!("This example requires the 'serde' feature.");
    println!("Run with: cargo run --example serde_with_scale --features serde");
}
