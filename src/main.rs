use anyhow::Context;

use dynvoke::{Holder, Invoker, Shape};

fn main() -> anyhow::Result<()> {
    let invoker = Invoker::with_demo_types();

    let shape = Shape::new(5.0, 5.0);
    let holder = Holder::new(shape);

    let area = holder
        .compute_derived(&invoker)
        .context("derived area computation failed")?;
    println!("{}", area);
    Ok(())
}
