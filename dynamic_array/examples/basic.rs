use dynamic_array::DynamicArray;

fn main() -> dynamic_array::Result<()> {
    // RUST_LOG=dynamic_array=trace shows every buffer resize.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("--- Basic Usage Example ---");
    let mut arr = DynamicArray::new();

    for i in 1..=5 {
        arr.push(i * 10);
        println!("Pushed: {}, len: {}, cap: {}", i * 10, arr.len(), arr.capacity());
    }

    arr.insert(1, 15)?;
    arr.insert_range(3, [25, 26])?;
    println!("After inserts: {:?}", arr.as_slice());

    arr.remove_range(0, 2)?;
    arr.reverse();
    println!("Trimmed and reversed: {:?} ({arr})", arr.as_slice());

    println!("Index of 30: {:?}", arr.index_of(&30));

    while let Some(val) = arr.pop() {
        println!("Popped: {}, len: {}", val, arr.len());
    }
    Ok(())
}
