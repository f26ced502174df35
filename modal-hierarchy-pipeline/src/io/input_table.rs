use crate::PipelineError;
use csv::StringRecord;
use kdam::tqdm;
use modal_hierarchy::driver::TripRow;
use std::{collections::HashMap, path::Path};

/// a CSV dataset held in memory with a header lookup. the record index is the row id
/// used in failure reports.
pub struct InputTable {
    pub filename: String,
    pub headers: StringRecord,
    pub records: Vec<StringRecord>,
    header_lookup: HashMap<String, usize>,
}

impl InputTable {
    pub fn read(filename: &str) -> Result<InputTable, PipelineError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(Path::new(filename))?;
        let headers = reader.headers()?.clone();
        let header_lookup = headers
            .iter()
            .enumerate()
            .map(|(i, s)| (s.to_string(), i))
            .collect::<HashMap<_, _>>();
        let row_iter = tqdm!(reader.into_records(), desc = format!("reading {filename}"));
        let records = row_iter.collect::<Result<Vec<_>, csv::Error>>()?;
        eprintln!();
        log::info!("loaded {} trip records from {filename}", records.len());
        Ok(InputTable {
            filename: filename.to_string(),
            headers,
            records,
            header_lookup,
        })
    }

    pub fn column_index(&self, column: &str) -> Result<usize, PipelineError> {
        self.header_lookup
            .get(column)
            .copied()
            .ok_or_else(|| PipelineError::MissingColumn {
                file: self.filename.clone(),
                column: column.to_string(),
            })
    }

    /// builds trip rows from one column. a missing cell is read as blank text, which
    /// the pipeline reports as an empty route.
    pub fn trip_rows(&self, column: &str) -> Result<Vec<TripRow>, PipelineError> {
        let idx = self.column_index(column)?;
        let rows = self
            .records
            .iter()
            .enumerate()
            .map(|(row_id, record)| TripRow::new(row_id, record.get(idx).unwrap_or_default()))
            .collect();
        Ok(rows)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::InputTable;
    use crate::PipelineError;

    #[test]
    fn test_read_and_lookup() {
        let path = std::env::temp_dir().join(format!(
            "modal-hierarchy-input-{}.csv",
            std::process::id()
        ));
        std::fs::write(
            &path,
            "Origin,Optimized Route\n\"1,2\",walking(3분) -> bus(4분)\n\"5,6\",bus(",
        )
        .expect("test invariant failed");
        let filename = path.to_string_lossy().to_string();
        let table = InputTable::read(&filename).expect("test invariant failed");
        assert_eq!(table.len(), 2);
        assert_eq!(table.column_index("Optimized Route").expect("test invariant failed"), 1);
        let rows = table.trip_rows("Optimized Route").expect("test invariant failed");
        assert_eq!(rows[0].row_id, 0);
        assert_eq!(rows[0].itinerary, "walking(3분) -> bus(4분)");
        assert_eq!(rows[1].itinerary, "bus(");
        assert!(matches!(
            table.column_index("Total Trip"),
            Err(PipelineError::MissingColumn { .. })
        ));
        let _ = std::fs::remove_file(&path);
    }
}
