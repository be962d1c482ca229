//! Builds a small 2D tree and prints the neighborhoods of a few query points.

use kd_neighbors::kdtree::{KDTreeBuilder, NeighborhoodParams};

fn main() -> kd_neighbors::Result<()> {
    let mut builder = KDTreeBuilder::<f64, 2>::new(3, f64::INFINITY)?;
    for p in [[0., 0.], [1., 0.], [0., 1.], [5., 5.], [1., 1.]] {
        builder.add(p)?;
    }
    let tree = builder.build();
    println!("Built a tree of {} points, depth {}", tree.len(), tree.depth());

    for query in [[0., 0.], [4., 4.], [0.6, 0.6]] {
        println!("\nThree nearest to {:?}:", query);
        for neighbor in tree.query(&query)?.into_sorted_vec() {
            println!(
                "  #{} at {:?}, squared distance {}",
                neighbor.id(),
                neighbor.coords(),
                neighbor.sq_dist()
            );
        }
    }

    let params = NeighborhoodParams::within(1.5)?;
    let within = tree.query_with(&[0., 0.], &params)?;
    println!("\n{} points within sqrt(1.5) of the origin", within.len());
    Ok(())
}
