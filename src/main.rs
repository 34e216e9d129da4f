use std::error::Error;
use std::io::stdout;
use tsv_aggregator::model::{FieldSelector, ParsePolicy};
use tsv_aggregator::process_file_and_output;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        Err("usage: tsv_aggregator <filename> <keyfield> <valuefield> [zero_fill|skip]")?;
    }

    let path = &args[1];
    // Index arguments that are not valid integers fall back to column 0.
    let key_index = args[2].parse().unwrap_or(0);
    let value_index = args[3].parse().unwrap_or(0);
    let policy = match args.get(4) {
        Some(raw) => raw.parse::<ParsePolicy>()?,
        None => ParsePolicy::default(),
    };

    let selector = FieldSelector::new(key_index, value_index);
    process_file_and_output(path, selector, policy, &mut stdout()).await?;
    Ok(())
}
