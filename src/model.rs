use std::fmt;
use strum_macros::EnumString;

pub type Key = i64;
pub type Value = i64;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "snake_case")]
pub enum ParsePolicy {
    #[default]
    ZeroFill,
    Skip,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FieldSelector {
    pub key_index: usize,
    pub value_index: usize,
}

impl FieldSelector {
    pub fn new(key_index: usize, value_index: usize) -> FieldSelector {
        FieldSelector {
            key_index,
            value_index,
        }
    }

    pub fn required_width(&self) -> usize {
        self.key_index.max(self.value_index) + 1
    }
}

#[derive(Debug, Eq, PartialEq)]
pub enum Report {
    NoEntries,
    MaxKey { key: Key, sum: Value },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::NoEntries => write!(f, "No entries"),
            Report::MaxKey { key, sum } => write!(f, "max_key: {key} sum: {sum}"),
        }
    }
}

#[test]
fn test_model() {
    assert_eq!(FieldSelector::new(0, 1).required_width(), 2);
    assert_eq!(FieldSelector::new(3, 1).required_width(), 4);

    assert_eq!("skip".parse::<ParsePolicy>().unwrap(), ParsePolicy::Skip);
    assert_eq!(
        "ZERO_FILL".parse::<ParsePolicy>().unwrap(),
        ParsePolicy::ZeroFill
    );
    assert_eq!(ParsePolicy::default(), ParsePolicy::ZeroFill);
    "keep".parse::<ParsePolicy>().unwrap_err();

    assert_eq!(Report::NoEntries.to_string(), "No entries");
    assert_eq!(
        Report::MaxKey { key: 1, sum: 17 }.to_string(),
        "max_key: 1 sum: 17"
    );
}
