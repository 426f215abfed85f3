use csv::StringRecord;

use super::DatasetError;

pub const FLIGHT_NUMBER: &str = "Flight Number";
pub const LAUNCH_SITE: &str = "Launch Site";
pub const OUTCOME_CLASS: &str = "class";
pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
pub const BOOSTER_VERSION: &str = "Booster Version";
pub const BOOSTER_CATEGORY: &str = "Booster Version Category";

struct Column {
    name: &'static str,
    required: bool,
}

const COLUMNS: &[Column] = &[
    Column {
        name: FLIGHT_NUMBER,
        required: false,
    },
    Column {
        name: LAUNCH_SITE,
        required: true,
    },
    Column {
        name: OUTCOME_CLASS,
        required: true,
    },
    Column {
        name: PAYLOAD_MASS,
        required: true,
    },
    Column {
        name: BOOSTER_VERSION,
        required: false,
    },
    Column {
        name: BOOSTER_CATEGORY,
        required: true,
    },
];

/// Positions of the known columns within a header row. Extra columns are ignored.
#[derive(Debug, Clone)]
pub struct ColumnLayout {
    positions: Vec<(&'static str, usize)>,
}

impl ColumnLayout {
    pub fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let mut positions = Vec::with_capacity(COLUMNS.len());

        for column in COLUMNS {
            match headers.iter().position(|h| h.trim() == column.name) {
                Some(idx) => positions.push((column.name, idx)),
                None if column.required => {
                    return Err(DatasetError::MissingColumn(column.name.to_string()))
                }
                None => {
                    tracing::debug!("Optional column '{}' not present", column.name);
                }
            }
        }

        Ok(Self { positions })
    }

    /// The trimmed cell for `column`, or `None` when the column is absent.
    pub fn get<'r>(&self, record: &'r StringRecord, column: &str) -> Option<&'r str> {
        self.positions
            .iter()
            .find(|(name, _)| *name == column)
            .and_then(|(_, idx)| record.get(*idx))
            .map(str::trim)
    }

    /// Like [`get`](Self::get), but for columns checked as required in
    /// [`from_headers`](Self::from_headers). Short rows read as empty cells.
    pub fn required<'r>(&self, record: &'r StringRecord, column: &str) -> &'r str {
        self.get(record, column).unwrap_or("")
    }
}
