use std::collections::HashSet;

pub fn remove_duplicate_ids(ids: &mut Vec<String>) {
    let mut seen_ids = HashSet::new();
    ids.retain(|id| seen_ids.insert(id.clone()));
}

pub fn format_duration_ms(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

pub fn parse_positive_count(input: &str) -> Result<u32, String> {
    match input.trim().parse::<u32>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(count) => Ok(count),
        Err(_) => Err(format!(
            "invalid value '{}': expected a positive number",
            input
        )),
    }
}
