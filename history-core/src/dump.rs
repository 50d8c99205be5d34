//! Rendering the history for the character sheet and death dump.

use crate::entry::HistoryEntry;

/// Column header of the history table.
pub const DUMP_HEADER: &str = "      Turn   Depth  Note";

/// Feet per dungeon level.
const FEET_PER_LEVEL: u32 = 50;

/// Depth label for one entry, e.g. `"250ft"` or `"Town"`.
pub fn depth_label(dungeon_level: u16) -> String {
    if dungeon_level == 0 {
        "Town".to_string()
    } else {
        format!("{}ft", u32::from(dungeon_level) * FEET_PER_LEVEL)
    }
}

/// Whether an entry is shown to the player.
///
/// Artifacts whose identity is still hidden stay out of the table until the
/// log has been unmasked.
pub fn is_visible(entry: &HistoryEntry) -> bool {
    !entry.flags().is_unknown()
}

/// Format one table row.
pub fn format_entry(entry: &HistoryEntry) -> String {
    let mut line = format!(
        "{:>10}{:>8}  {}",
        entry.turn(),
        depth_label(entry.dungeon_level()),
        entry.text()
    );
    if entry.artifact().is_some() && entry.flags().is_lost() {
        line.push_str(" (LOST)");
    }
    line
}

/// Render the visible entries as a text table, header first.
pub fn format_entries(entries: &[HistoryEntry]) -> String {
    let mut out = String::new();
    out.push_str(DUMP_HEADER);
    out.push('\n');
    for entry in entries.iter().filter(|e| is_visible(e)) {
        out.push_str(&format_entry(entry));
        out.push('\n');
    }
    out
}

/// Serialize all entries, hidden ones included, as pretty JSON.
pub fn to_json(entries: &[HistoryEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::ArtifactId;
    use crate::flags::HistoryFlags;

    fn artifact_entry(flags: HistoryFlags, text: &str) -> HistoryEntry {
        HistoryEntry::new(flags, ArtifactId::new(1), 5, 10, 1234, text, 80)
    }

    #[test]
    fn test_depth_label() {
        assert_eq!(depth_label(0), "Town");
        assert_eq!(depth_label(1), "50ft");
        assert_eq!(depth_label(40), "2000ft");
    }

    #[test]
    fn test_format_entry() {
        let entry = HistoryEntry::new(HistoryFlags::GAIN_LEVEL, None, 5, 10, 1234, "Reached level 10", 80);
        assert_eq!(format_entry(&entry), "      1234   250ft  Reached level 10");
    }

    #[test]
    fn test_lost_artifact_suffix() {
        let entry = artifact_entry(
            HistoryFlags::ARTIFACT_KNOWN | HistoryFlags::ARTIFACT_LOST,
            "Found the Phial",
        );
        assert!(format_entry(&entry).ends_with("Found the Phial (LOST)"));
    }

    #[test]
    fn test_unknown_artifacts_hidden() {
        let entries = vec![
            HistoryEntry::new(HistoryFlags::PLAYER_BIRTH, None, 0, 1, 0, "Born", 80),
            artifact_entry(HistoryFlags::ARTIFACT_UNKNOWN, "Found the Phial"),
        ];
        let table = format_entries(&entries);
        assert!(table.starts_with(DUMP_HEADER));
        assert!(table.contains("Born"));
        assert!(!table.contains("Phial"));
        assert_eq!(table.lines().count(), 2);
    }

    #[test]
    fn test_table_one_line_per_visible_entry() {
        let entries = vec![
            HistoryEntry::new(HistoryFlags::PLAYER_BIRTH, None, 0, 1, 0, "Born", 80),
            HistoryEntry::new(HistoryFlags::GAIN_LEVEL, None, 2, 2, 40, "Reached level 2", 80),
        ];
        let table = format_entries(&entries);
        assert_eq!(
            table,
            format!(
                "{DUMP_HEADER}\n{}\n{}\n",
                format_entry(&entries[0]),
                format_entry(&entries[1])
            )
        );
    }

    #[test]
    fn test_json_includes_hidden_entries() {
        let entries = vec![artifact_entry(HistoryFlags::ARTIFACT_UNKNOWN, "Found the Phial")];
        let json = to_json(&entries).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["text"], "Found the Phial");
        assert_eq!(value[0]["turn"], 1234);
    }
}
