//! Table file type detection

#[derive(Debug, Clone, PartialEq)]
pub enum FileType {
    Csv,
    Tsv,
    Text,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "csv" => FileType::Csv,
            "tsv" | "tab" => FileType::Tsv,
            "txt" => FileType::Text,
            _ => FileType::Unknown,
        }
    }

    /// Field delimiter for this file type; `configured` applies to CSV and plain text.
    pub fn delimiter(&self, configured: u8) -> Option<u8> {
        match self {
            FileType::Csv | FileType::Text => Some(configured),
            FileType::Tsv => Some(b'\t'),
            FileType::Unknown => None,
        }
    }
}
