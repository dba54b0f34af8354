pub fn run() -> anyhow::Result<()> {
    println!("dailyverse {}", env!("CARGO_PKG_VERSION"));
    println!("A daily poem, tuned to the mood of the news");
    Ok(())
}
