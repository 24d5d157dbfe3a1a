/// Parse a stop list of the form `"0:f80a19,50:f8e800,100:00862d"` into
/// `(position, hex)` pairs. Empty entries are skipped, the hex part is kept
/// verbatim for the builder to validate.
pub fn parse_stop_list(raw: &str) -> Result<Vec<(i32, String)>, String> {
    let mut stops = Vec::new();

    for entry in raw.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }

        let (position, hex) = entry
            .split_once(':')
            .ok_or_else(|| format!("Invalid stop '{}': expected position:hex", entry))?;

        let position = position
            .trim()
            .parse()
            .map_err(|e| format!("Invalid position in '{}': {}", entry, e))?;

        stops.push((position, hex.trim().to_string()));
    }

    Ok(stops)
}
