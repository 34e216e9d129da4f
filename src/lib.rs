use crate::aggregator::Aggregator;
use crate::model::{FieldSelector, ParsePolicy};
use futures::TryStreamExt;
use std::io;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_stream::wrappers::LinesStream;

pub mod aggregator;
pub mod model;

const DELIMITER: char = '\t';

#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("IoError: {0}")]
    IoError(#[from] io::Error),
    #[error("ParseError: {0}")]
    ParseError(#[from] strum::ParseError),
}

pub async fn process_file_and_output<OUT: io::Write>(
    path: &str,
    selector: FieldSelector,
    policy: ParsePolicy,
    stdout: &mut OUT,
) -> Result<(), AggregateError> {
    let file = File::open(path).await?;
    let reader = BufReader::new(file);
    let lines = reader.lines();
    let line_stream = LinesStream::new(lines);

    // Convert Lines to a record stream and feed the aggregator. Line
    // terminators are already stripped by lines(), so the last field of each
    // record parses clean.
    let record_stream = line_stream
        .map_err(AggregateError::IoError)
        .map_ok(split_fields);

    let mut aggregator = Aggregator::new(selector, policy);
    aggregator.process_input(record_stream).await?;

    // Write output
    writeln!(stdout, "{}", aggregator.into_report())?;
    Ok(())
}

fn split_fields(line: String) -> Vec<String> {
    line.split(DELIMITER).map(str::to_owned).collect()
}
