//! Top-K selection demo
//!
//! Streams `label,weight` records through a [`TopKSelector`] and prints the
//! heaviest and lightest `k`, then dumps a small queue's tree view.
//!
//! ## Running
//!
//! ```bash
//! # Built-in sample data, k = 3
//! cargo run --example top_k_demo
//!
//! # Your own CSV (label,weight per line), k = 10, with resize tracing
//! RUST_LOG=heap_pqueue=trace cargo run --example top_k_demo -- data.csv 10
//! ```

use heap_pqueue::{smallest_k, BinaryHeapQueue, Entry, TopKSelector};
use std::env;
use std::error::Error;
use std::fs;

const SAMPLE: &str = "\
Denali,6190
Mount Logan,5959
Pico de Orizaba,5636
Mount Saint Elias,5489
Popocatepetl,5393
Mount Foraker,5304
Mount Lucania,5226
Iztaccihuatl,5230
King Peak,5173
Mount Bona,5044
";

/// Parses `label,weight` lines, skipping blanks and `#` comments
fn parse_records(text: &str) -> Result<Vec<Entry<String, f64>>, Box<dyn Error>> {
    let mut records = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (label, weight) = line
            .rsplit_once(',')
            .ok_or_else(|| format!("line {}: expected label,weight", line_no + 1))?;
        let weight: f64 = weight
            .trim()
            .parse()
            .map_err(|e| format!("line {}: bad weight {:?}: {}", line_no + 1, weight, e))?;
        records.push(Entry::new(label.trim().to_string(), weight));
    }
    Ok(records)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let text = match args.next() {
        Some(path) => fs::read_to_string(&path)?,
        None => SAMPLE.to_string(),
    };
    let k: usize = match args.next() {
        Some(k) => k.parse()?,
        None => 3,
    };

    let records = parse_records(&text)?;
    println!("{} records, k = {}", records.len(), k);

    let mut selector = TopKSelector::new(k);
    selector.extend(records.iter().cloned());
    println!("\nHeaviest {}:", k);
    for (rank, entry) in selector.into_sorted_vec().iter().enumerate() {
        println!("{:>4}. {}", rank + 1, entry);
    }

    println!("\nLightest {}:", k);
    for (rank, entry) in smallest_k(records.iter().cloned(), k).iter().enumerate() {
        println!("{:>4}. {}", rank + 1, entry);
    }

    let queue: BinaryHeapQueue<String, f64> = records.into_iter().take(7).collect();
    println!("\n{}", queue.tree_view());

    Ok(())
}
