use dynamic_array::DynamicArray;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Tracked(usize, Arc<AtomicUsize>);

impl Drop for Tracked {
    fn drop(&mut self) {
        println!("Dropping element {}", self.0);
        self.1.fetch_add(1, Ordering::SeqCst);
    }
}

fn main() {
    println!("--- Drop Tracking Example ---");
    let drop_count = Arc::new(AtomicUsize::new(0));

    {
        let mut arr = DynamicArray::new();
        for i in 0..6 {
            arr.push(Tracked(i, drop_count.clone()));
        }
        println!("Array created with {} elements.", arr.len());

        arr.remove_range(1, 2).expect("range is in bounds");
        println!("Removed a range, dropped so far: {}", drop_count.load(Ordering::SeqCst));

        let taken = arr.remove_at(0).expect("index is in bounds");
        println!("Took element {} out of the array", taken.0);

        arr.clear();
        println!("Cleared, capacity is now {}", arr.capacity());
        drop(taken);
    }

    println!("Total elements dropped: {}", drop_count.load(Ordering::SeqCst));
    assert_eq!(drop_count.load(Ordering::SeqCst), 6);
}
