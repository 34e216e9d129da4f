use crate::model::{FieldSelector, Key, ParsePolicy, Report, Value};
use crate::AggregateError;
use futures::stream::{Stream, StreamExt};
use std::collections::HashMap;

pub struct Aggregator {
    selector: FieldSelector,
    policy: ParsePolicy,
    sum_by_key: HashMap<Key, Value>,
}

impl Aggregator {
    pub fn new(selector: FieldSelector, policy: ParsePolicy) -> Aggregator {
        Self {
            selector,
            policy,
            sum_by_key: HashMap::new(),
        }
    }

    pub async fn process_input<S>(&mut self, mut records: S) -> Result<(), AggregateError>
    where
        S: Stream<Item = Result<Vec<String>, AggregateError>> + Unpin,
    {
        while let Some(record) = records.next().await {
            self.accumulate(&record?);
        }
        Ok(())
    }

    // Records narrower than the selected columns are dropped; what happens to
    // records with non-integer fields depends on the configured policy.
    fn accumulate(&mut self, fields: &[String]) {
        if fields.len() < self.selector.required_width() {
            return;
        }

        let key = fields[self.selector.key_index].parse::<Key>();
        let value = fields[self.selector.value_index].parse::<Value>();
        match self.policy {
            ParsePolicy::ZeroFill => {
                self.add(key.unwrap_or(0), value.unwrap_or(0));
            }
            ParsePolicy::Skip => {
                if let (Ok(key), Ok(value)) = (key, value) {
                    self.add(key, value);
                }
            }
        }
    }

    fn add(&mut self, key: Key, value: Value) {
        *self.sum_by_key.entry(key).or_insert(0) += value;
    }

    pub fn sums(&self) -> &HashMap<Key, Value> {
        &self.sum_by_key
    }

    pub fn into_report(self) -> Report {
        let mut best: Option<(Key, Value)> = None;
        for (&key, &sum) in &self.sum_by_key {
            // First entry with the strictly greatest sum wins; among tied
            // keys the winner follows HashMap iteration order.
            let replace = match best {
                None => true,
                Some((_, best_sum)) => sum > best_sum,
            };
            if replace {
                best = Some((key, sum));
            }
        }

        match best {
            None => Report::NoEntries,
            Some((key, sum)) => Report::MaxKey { key, sum },
        }
    }
}
