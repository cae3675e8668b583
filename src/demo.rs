use dynamic_array::{DynamicArray, Result};

/// The steps of the walkthrough: push `items`, insert `insert` at `at`,
/// remove `remove`, append `append`, then search for `append` from the back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub items: Vec<String>,
    pub insert: String,
    pub at: usize,
    pub remove: String,
    pub append: String,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            items: ["aaa", "bbb", "ccc", "ddd"].map(String::from).to_vec(),
            insert: "qqq".to_string(),
            at: 2,
            remove: "ccc".to_string(),
            append: "aaa".to_string(),
        }
    }
}

/// Runs `scenario` and returns the lines to print, in order.
///
/// A missing search result prints as `-1`.
pub fn run(scenario: &Scenario) -> Result<Vec<String>> {
    let mut lines = vec![];
    let mut list = DynamicArray::new();

    for item in &scenario.items {
        list.push(item.clone());
    }
    tracing::debug!(len = list.len(), capacity = list.capacity(), "pushed initial items");

    list.insert(scenario.at, scenario.insert.clone())?;
    tracing::debug!(at = scenario.at, value = %scenario.insert, "inserted");
    lines.push(list.to_string());

    if !list.remove(&scenario.remove) {
        tracing::warn!(value = %scenario.remove, "value to remove is not in the list");
    }
    lines.push(list.to_string());

    list.push(scenario.append.clone());

    let mut cursor = list.cursor();
    while let Some(item) = cursor.next(&list)? {
        lines.push(item.clone());
    }

    let last = list
        .last_index_of(&scenario.append)
        .map_or(-1, |index| index as i64);
    tracing::info!(value = %scenario.append, index = last, "searched from the back");
    lines.push(last.to_string());

    Ok(lines)
}
