//! Walks through the public API of `AvlTree`.

use allocated::CountingAllocator;
use allocated_avl::{AvlTree, TreeError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Global allocator ===\n");
    global_demo()?;

    println!("\n=== Counting allocator ===\n");
    counting_demo()?;

    Ok(())
}

fn global_demo() -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = AvlTree::new();

    for key in [3, 1, 4, 5, 9, 2, 6] {
        tree.insert(key)?;
    }

    // Duplicates are rejected rather than overwritten
    if let Err(TreeError::AlreadyPresent) = tree.insert(1) {
        println!("1 is already present");
    }

    println!("Inserted {} keys, height {:?}", tree.len(), tree.height());
    println!("min = {}, max = {}", tree.min()?, tree.max()?);

    print!("\nIn order:   ");
    for k in &tree {
        print!("{} ", k);
    }
    print!("\nPre order:  ");
    for k in tree.pre_order() {
        print!("{} ", k);
    }
    print!("\nPost order: ");
    for k in tree.post_order() {
        print!("{} ", k);
    }
    println!();

    tree.remove(&3)?;
    println!("\nAfter removing 3: {:?}", tree);

    match tree.remove(&3) {
        Err(err) => println!("Removing 3 again: {err}"),
        Ok(()) => unreachable!("3 was already removed"),
    }

    Ok(())
}

fn counting_demo() -> Result<(), Box<dyn std::error::Error>> {
    let alloc = CountingAllocator::default();
    let mut tree = AvlTree::new_in(&alloc);

    for i in 0..10 {
        tree.insert(i * i)?;
    }

    println!(
        "{} keys in {} allocations ({} bytes)",
        tree.len(),
        alloc.n_allocations(),
        alloc.n_bytes_allocated()
    );

    if tree.contains(&49) {
        println!("49 is a square");
    }

    tree.clear();
    println!("After clear: {} live allocations", alloc.net_allocations());

    Ok(())
}
