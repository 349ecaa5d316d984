/// Parse a stored vector literal into `f32` components.
///
/// Accepts the JSON/pgvector form `[0.1, 0.2]` and the Postgres array form
/// `{0.1,0.2}`. Every component must be a finite number; nothing is ever
/// evaluated.
pub fn parse_vector(raw: &str) -> Result<Vec<f32>, String> {
    let trimmed = raw.trim();
    let body = if let Some(inner) = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
    {
        format!("[{inner}]")
    } else if trimmed.starts_with('[') {
        trimmed.to_string()
    } else {
        return Err("expected a bracketed list of numbers".into());
    };

    let values: Vec<f64> =
        serde_json::from_str(&body).map_err(|err| format!("invalid number list: {err}"))?;
    if values.is_empty() {
        return Err("vector has no components".into());
    }

    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| {
            let v = value as f32;
            if v.is_finite() {
                Ok(v)
            } else {
                Err(format!("component {idx} is out of range"))
            }
        })
        .collect()
}
