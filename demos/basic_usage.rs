// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_container::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== Numeric Container Example ===\n");

    // Scalars and sequences
    let a = number![5];
    let b = number![3];
    let c = number![1, 2, 3];
    let d = number![4, 5, 6];

    println!("a + b       = {}", a.checked_add(&b)?);
    println!("c + d       = {}", c.checked_add(&d)?);
    println!("d / c       = {}", d.checked_div(&c)?);
    println!("c ** 2      = {}", c.checked_pow(2)?);
    println!("10 - c      = {}", (10i64 - &c)?);

    // Shape rules are enforced
    match a.checked_add(&c) {
        Ok(_) => println!("unexpected broadcast"),
        Err(e) => println!("a + c       -> {} ({:?})", e, e.kind()),
    }

    // Statistics
    let data = number![1, 2, 2, 3, 7, 9];
    println!("\nData: {}", data);
    println!("  mean      = {}", data.mean()?);
    println!("  median    = {}", data.median()?);
    println!("  mode      = {}", data.mode());
    println!("  std_dev   = {:.4}", data.std_dev()?);
    println!("  normalize = {}", data.normalize().display_with(&DisplayConfig::value_only().with_precision(3)));
    println!("  moving(3) = {}", data.moving_average(3)?);

    let stats = data.cumulative_stats()?;
    println!("  cum. max  = {}", stats.max);

    // Expressions
    let parsed = Number::create(&["2 ** 10", "(1 + 2) / 4", "-3 ** 2"])?;
    println!("\nFrom expressions: {}", parsed);
    if let Err(e) = Number::create(&["__import__('os')"]) {
        println!("Rejected: {}", e);
    }

    // In-place mutation
    let mut n = number![10, 20, 30];
    n.append(40);
    n.remove(&[0, -1])?;
    n.mul_assign(0.5)?;
    println!("\nAfter edits: {}", n);

    // Utilities
    let kv: KeyValueString = "keys:x,y;values:1,2".parse()?;
    println!("\n{} -> y = {}", kv, kv.get_or("y", "?"));

    let range = RangePlusPlus::new(1, 10).step(2)?.map(|x| x * x).kind(RangeKind::Tuple);
    println!("Squares of odd numbers: {}", range);

    Ok(())
}
