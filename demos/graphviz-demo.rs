//! Prints the Graphviz rendering of a small tree after each step.
//!
//! Pipe the output through `dot -Tsvg` to see the rotations.

use allocated_avl::AvlTree;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut tree = AvlTree::new();

    for key in [5, 3, 8, 1, 4, 7, 9, 2] {
        tree.insert(key)?;
    }
    println!("// after inserting 5, 3, 8, 1, 4, 7, 9, 2");
    tree.write_graphviz(&mut std::io::stdout())?;
    println!();

    tree.remove(&5)?;
    println!("// after removing 5");
    println!("{}", tree.to_graphviz()?);

    Ok(())
}
