use tsv_aggregator::model::{FieldSelector, ParsePolicy};
use tsv_aggregator::process_file_and_output;
use tsv_aggregator::AggregateError;

async fn run_on_fixture(
    name: &str,
    selector: FieldSelector,
    policy: ParsePolicy,
) -> Result<String, AggregateError> {
    let file = format!("{}/tests/{name}", env!("CARGO_MANIFEST_DIR"));

    let mut output = vec![];
    process_file_and_output(&file, selector, policy, &mut output).await?;

    Ok(String::from_utf8(output).unwrap())
}

#[tokio::test]
async fn main_test() {
    let output = run_on_fixture("example.tsv", FieldSelector::new(0, 1), ParsePolicy::ZeroFill)
        .await
        .unwrap();

    assert_eq!(output, "max_key: 1 sum: 17\n");
}

#[tokio::test]
async fn malformed_values_zero_fill() {
    let output = run_on_fixture(
        "malformed.tsv",
        FieldSelector::new(0, 1),
        ParsePolicy::ZeroFill,
    )
    .await
    .unwrap();

    // "abc" keys collapse into key 0, bad values contribute 0.
    assert_eq!(output, "max_key: 0 sum: 12\n");
}

#[tokio::test]
async fn malformed_values_skip() {
    let output = run_on_fixture("malformed.tsv", FieldSelector::new(0, 1), ParsePolicy::Skip)
        .await
        .unwrap();

    assert_eq!(output, "max_key: 1 sum: 4\n");
}

#[tokio::test]
async fn records_too_narrow_report_no_entries() {
    let output = run_on_fixture("example.tsv", FieldSelector::new(0, 5), ParsePolicy::ZeroFill)
        .await
        .unwrap();

    assert_eq!(output, "No entries\n");
}

#[tokio::test]
async fn empty_file_reports_no_entries() {
    let output = run_on_fixture("empty.tsv", FieldSelector::new(0, 1), ParsePolicy::ZeroFill)
        .await
        .unwrap();

    assert_eq!(output, "No entries\n");
}

#[tokio::test]
async fn missing_file_is_fatal() {
    let err = run_on_fixture(
        "does_not_exist.tsv",
        FieldSelector::new(0, 1),
        ParsePolicy::ZeroFill,
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AggregateError::IoError(_)));
}
