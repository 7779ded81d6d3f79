//! Distances and durations share representations but never mix.
//!
//! Run with: `cargo run --example units`

use named_caps::prelude::*;

named_type! {
    /// Metres travelled.
    pub type Metres = u64: Addable, Orderable;

    /// Seconds elapsed. Same representation as Metres, unrelated type.
    pub type Seconds = u64: Addable, Orderable;

    /// Sensor identifier; identity operations only.
    pub type SensorId = u32: EqualityComparable, Hashable;
}

fn leg_distance(from: Metres, to: Metres) -> Metres {
    Metres::new(to.into_inner().saturating_sub(from.into_inner()))
}

fn main() {
    let first = leg_distance(Metres::new(0), Metres::new(1200));
    let second = leg_distance(Metres::new(1200), Metres::new(3000));
    let total = first + second;
    println!("total distance: {total} m");

    let elapsed = Seconds::new(360) + Seconds::new(95);
    println!("total time: {elapsed} s");

    // None of these compile:
    //   total + elapsed                      (different tags)
    //   leg_distance(total, elapsed)         (Seconds is not Metres)
    //   SensorId::new(1) < SensorId::new(2)  (Orderable not selected)

    let mut readings = std::collections::HashMap::new();
    readings.insert(SensorId::new(7), total);
    if let Some(d) = readings.get(&SensorId::new(7)) {
        println!("sensor 7 covered {d} m (seed-42 hash {:x})", SensorId::new(7).hash_with_seed(42));
    }
}
