use crate::table::RawTable;

/// Flatten a block into the plain text pasted into the WhatsApp group.
///
/// Cells are trimmed and joined with one space, blank lines are dropped and
/// the remaining lines are joined with `\n`.
pub fn to_text(table: &RawTable) -> String {
    table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.trim())
                .collect::<Vec<_>>()
                .join(" ")
                .trim()
                .to_string()
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw_table;

    #[test]
    fn test_blank_rows_dropped_and_cells_trimmed() {
        let table = raw_table![["A", "B"], ["", " "], ["C"]];
        assert_eq!(to_text(&table), "A B\nC");
    }

    #[test]
    fn test_empty_table_is_empty_text() {
        assert_eq!(to_text(&RawTable::default()), "");
        assert_eq!(to_text(&raw_table![[], ["  "]]), "");
    }

    #[test]
    fn test_inner_empty_cells_keep_their_separator() {
        let table = raw_table![[" Total ", "", "250.00 "], ["", "Covers", "31"]];
        assert_eq!(to_text(&table), "Total  250.00\nCovers 31");
    }
}
