use log::LevelFilter;
use rand::Rng;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use allocated::CountingAllocator;
use allocated_avl::{AvlTree, TreeError};

fn main() -> Result<(), TreeError> {
    TermLogger::init(
        LevelFilter::Info,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| eprintln!("logging disabled: {err}"));

    let mut rng = rand::thread_rng();

    for i in 0..100 {
        let alloc = CountingAllocator::default();
        let mut tree = AvlTree::<u32, _>::new_in(&alloc);

        for _ in 0..1000 {
            let k: u32 = rng.gen_range(0..4096);

            if rng.gen_bool(0.7) {
                match tree.insert(k) {
                    Ok(()) | Err(TreeError::AlreadyPresent) => {}
                    Err(err) => return Err(err),
                }
            } else {
                match tree.remove(&k) {
                    Ok(()) | Err(TreeError::NotFound | TreeError::EmptyTree) => {}
                    Err(err) => return Err(err),
                }
            }

            println!(
                "{},{},{},{},{}",
                i,
                alloc.net_allocations(),
                tree.height().map_or(-1, |h| h as i64),
                alloc.n_allocations(),
                alloc.n_bytes_allocated()
            );
        }

        log::info!(
            "run {i}: {} keys, height {:?}, {} allocations",
            tree.len(),
            tree.height(),
            alloc.n_allocations()
        );

        std::mem::drop(tree);

        assert_eq!(alloc.net_allocations(), 0);
    }

    Ok(())
}
