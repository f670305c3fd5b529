//! Walks a capacity-10 ring through fill, drain, and a wrapping refill,
//! printing what each transfer actually moved.
//!
//! Run with `cargo run --example wraparound`.

use byte_ring::ByteRing;

fn put(ring: &mut ByteRing<'_>, data: &[u8]) {
    let n = ring.put(data);
    println!(
        "put {:>2} of {:>2} bytes {:?}  (used {}, free {})",
        n,
        data.len(),
        String::from_utf8_lossy(data),
        ring.len(),
        ring.free(),
    );
}

fn get(ring: &mut ByteRing<'_>, requested: usize) {
    let mut out = [0u8; 10];
    let n = ring.get(&mut out[..requested]);
    println!(
        "got {:>2} of {:>2} bytes {:?}  (used {}, free {})",
        n,
        requested,
        String::from_utf8_lossy(&out[..n]),
        ring.len(),
        ring.free(),
    );
}

fn main() {
    let mut region = [0u8; 10];
    let mut ring = ByteRing::new_pool(&mut region);

    put(&mut ring, b"++++++++++");
    get(&mut ring, 10);

    put(&mut ring, b"55555");
    get(&mut ring, 5);

    put(&mut ring, b"7777777");
    get(&mut ring, 2);

    // This put splits at the region boundary; the drain below still comes
    // out in arrival order.
    put(&mut ring, b"55555");
    get(&mut ring, 10);
    get(&mut ring, 5);

    ring.reset_pool().expect("pool ring resets in pool mode");
    println!("reset: capacity {}, free {}", ring.capacity(), ring.free());
}
