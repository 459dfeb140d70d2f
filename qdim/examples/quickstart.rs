//! Minimal end-to-end example: mixed-scale sums, compound dimensions and a bare ratio.

use qdim::{Feet, Inches, Kilometers, Meters, MetersPerSecond, Seconds};

fn main() {
    let leg = Kilometers::new(5) + Meters::new(10);
    assert_eq!(leg, Meters::new(5010));
    println!("5 km + 10 m = {} m", leg);

    let v: MetersPerSecond = (Meters::new(5010) / Seconds::new(10)).cast();
    assert_eq!(v.value(), 501);
    println!("over 10 s that is {} m/s", v);

    let ratio: i64 = Kilometers::new(3) / Meters::new(1);
    assert_eq!(ratio, 3000);
    println!("3 km / 1 m = {}", ratio);

    let board = Feet::new(6).cast::<Inches>();
    assert_eq!(board.value(), 72);
    println!("6 ft = {} in", board);
}
