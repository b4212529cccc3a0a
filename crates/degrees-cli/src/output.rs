//! Output formatting utilities

use serde::Serialize;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            "csv" => Self::Csv,
            _ => Self::Table,
        }
    }
}

/// Pretty JSON for any serializable value
pub fn to_json<T: Serialize>(data: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// CSV with a header row taken from the record fields
pub fn to_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!(e.to_string()))?;
    Ok(String::from_utf8(bytes)?.trim_end().to_string())
}

/// Left-aligned columns separated by two spaces
pub fn to_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let render = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![render(headers.to_vec())];
    lines.extend(
        rows.iter()
            .map(|row| render(row.iter().map(String::as_str).collect())),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Row {
        id: &'static str,
        name: &'static str,
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!(OutputFormat::from("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from("csv"), OutputFormat::Csv);
        assert_eq!(OutputFormat::from("anything"), OutputFormat::Table);
    }

    #[test]
    fn test_csv() {
        let rows = [
            Row { id: "1", name: "Kevin Bacon" },
            Row { id: "2", name: "Smith, Will" },
        ];
        assert_eq!(
            to_csv(&rows).unwrap(),
            "id,name\n1,Kevin Bacon\n2,\"Smith, Will\""
        );
    }

    #[test]
    fn test_table_alignment() {
        let table = to_table(
            &["ID", "Name"],
            &[
                vec!["102".to_string(), "Kevin Bacon".to_string()],
                vec!["7".to_string(), "X".to_string()],
            ],
        );
        assert_eq!(table, "ID   Name\n102  Kevin Bacon\n7    X");
    }
}
