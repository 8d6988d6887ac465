use anyhow::{Context, Result};
use log::LevelFilter;

use arraylab::array;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("ARRAYLAB_LOG", "error,arraylab=info"))
        .init();

    // A flat list gives a 1D array; the float literal promotes every entry.
    let sequence = array![10, 100, 1000.];
    log::debug!("sequence {:?}: {}", sequence.shape(), sequence);

    // A nested list gives a 2D array.
    let grid = array![[1., 2., 3.], [4., 5., 6.]];
    log::debug!("grid {:?}", grid.shape());

    // Arithmetic between arrays happens element by element.
    let squared = grid
        .try_mul(&grid)
        .context("failed to square the grid element-wise")?;
    log::debug!("squared a {:?} grid element-wise", squared.shape());

    println!("{}", squared);
    Ok(())
}
