#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineStatus {
    Normal,
    Lento,
    Paralisado,
}

impl LineStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LineStatus::Normal => "Normal",
            LineStatus::Lento => "Lento",
            LineStatus::Paralisado => "Paralisado",
        }
    }
}

/// Live status of a bus line. Reference data only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceStatus {
    pub line: String,
    pub status: LineStatus,
    pub updated_at: String,
}
