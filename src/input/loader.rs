//! Loading skill tables from delimited files

use crate::error::{Result, SkillsDashboardError};
use crate::input::file_detector::FileType;
use crate::input::record::{Record, REQUIRED_COLUMNS};
use log::{debug, info, warn};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Immutable in-memory table loaded from one source file.
#[derive(Debug, Clone)]
pub struct SkillTable {
    source: PathBuf,
    records: Vec<Record>,
}

impl SkillTable {
    pub fn new(source: PathBuf, records: Vec<Record>) -> Self {
        Self { source, records }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

pub struct TableLoader {
    delimiter: u8,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self::new(b',')
    }
}

impl TableLoader {
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    pub fn load(&self, path: &Path) -> Result<SkillTable> {
        if !path.exists() {
            return Err(SkillsDashboardError::InvalidInput(
                format!("File does not exist: {}", path.display())
            ));
        }

        let file_type = Self::detect_file_type(path)?;
        let delimiter = file_type.delimiter(self.delimiter).ok_or_else(|| {
            SkillsDashboardError::UnsupportedFormat(
                format!("Unsupported table file: {}", path.display())
            )
        })?;

        info!("Loading skills table from {} ({:?})", path.display(), file_type);
        let file = std::fs::File::open(path)?;
        let records = Self::read_records(file, delimiter)?;
        info!("Loaded {} records from {}", records.len(), path.display());

        Ok(SkillTable::new(path.to_path_buf(), records))
    }

    /// Parse records from any reader, validating the header first.
    pub fn load_from_reader<R: Read>(&self, reader: R) -> Result<Vec<Record>> {
        Self::read_records(reader, self.delimiter)
    }

    fn read_records<R: Read>(reader: R, delimiter: u8) -> Result<Vec<Record>> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|column| !headers.iter().any(|h| h == *column))
            .collect();
        if !missing.is_empty() {
            return Err(SkillsDashboardError::MissingColumn(missing.join(", ")));
        }
        debug!("Table header: {:?}", headers);

        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            let record: Record = row?;
            records.push(record);
        }

        let uncategorized = records.iter().filter(|r| r.category().is_none()).count();
        if uncategorized > 0 {
            warn!(
                "{} of {} records have a Type outside TECHNICAL, TECHNOLOGY, BUSINESS and SOFT",
                uncategorized,
                records.len()
            );
        }
        Ok(records)
    }

    fn detect_file_type(path: &Path) -> Result<FileType> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| SkillsDashboardError::InvalidInput(
                format!("File has no extension: {}", path.display())
            ))?;

        Ok(FileType::from_extension(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "company_name,Employment_type,Seniority_level,job_country,job_position,Skill,Type\n";

    #[test]
    fn test_reads_records_in_order() {
        let data = format!(
            "{}Acme,Full-time,Entry level,Germany,Data Scientist,Python,TECHNOLOGY\n\
             Acme,Full-time,Entry level,Germany,Data Scientist,Communication,SOFT\n",
            HEADER
        );
        let records = TableLoader::default().load_from_reader(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].skill, "Python");
        assert_eq!(records[0].employment_type, "Full-time");
        assert_eq!(records[1].skill_type, "SOFT");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let data = "id,company_name,Employment_type,Seniority_level,job_country,job_position,Skill,Type,url\n\
                    7,Acme,Contract,Director,France,Analyst,SQL,TECHNOLOGY,http://x\n";
        let records = TableLoader::default().load_from_reader(data.as_bytes()).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].company_name, "Acme");
        assert_eq!(records[0].skill, "SQL");
    }

    #[test]
    fn test_missing_columns_are_reported() {
        let data = "company_name,job_country,Skill\nAcme,Germany,Python\n";
        let err = TableLoader::default().load_from_reader(data.as_bytes()).unwrap_err();

        match err {
            SkillsDashboardError::MissingColumn(columns) => {
                assert!(columns.contains("Employment_type"));
                assert!(columns.contains("Type"));
                assert!(!columns.contains("company_name"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_delimiter() {
        let data = "company_name;Employment_type;Seniority_level;job_country;job_position;Skill;Type\n\
                    Acme;Full-time;Associate;Spain;Data Analyst;Excel;TECHNOLOGY\n";
        let records = TableLoader::new(b';').load_from_reader(data.as_bytes()).unwrap();

        assert_eq!(records[0].job_country, "Spain");
    }

    #[test]
    fn test_header_only_table_is_empty() {
        let records = TableLoader::default().load_from_reader(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_nonexistent_file() {
        let result = TableLoader::default().load(Path::new("does/not/exist.csv"));
        assert!(matches!(result, Err(SkillsDashboardError::InvalidInput(_))));
    }
}
