const NAME_PREFIXES: [&str; 3] = ["Seeds", "Gear", "Egg"];

/// Returns the display name of an item: trimmed, with one leading
/// category prefix (`Seeds`, `Gear` or `Egg`, any casing) removed.
pub fn clean_name(raw: &str) -> String {
    let trimmed = raw.trim();
    let stripped = NAME_PREFIXES
        .iter()
        .find_map(|prefix| strip_prefix_ignore_case(trimmed, prefix))
        .unwrap_or(trimmed);
    stripped.trim().to_string()
}

/// Key under which items of one category are merged.
pub fn dedup_key(clean: &str) -> String {
    clean.to_lowercase()
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_prefix_at_start_only() {
        assert_eq!(clean_name("Gear Handgun"), "Handgun");
        assert_eq!(clean_name("Speargear"), "Speargear");
        assert_eq!(clean_name("SeedsCarrot"), "Carrot");
        assert_eq!(clean_name("  egg  Rare "), "Rare");
    }

    #[test]
    fn strips_a_single_prefix() {
        assert_eq!(clean_name("GEAR Gear Box"), "Gear Box");
        assert_eq!(clean_name("Seed Packet"), "Seed Packet");
    }

    #[test]
    fn handles_multibyte_names() {
        assert_eq!(clean_name("Ég Spécial"), "Ég Spécial");
        assert_eq!(dedup_key("Ég Spécial"), "ég spécial");
    }
}
