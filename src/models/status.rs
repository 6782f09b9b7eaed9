use serde::Serialize;

/// Attendance status for one student on one date.
/// Stored in the DB as the capitalized word ('Absent', 'Here', ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Absent,
    Here,
    Excluded,
    Travel,
}

impl Status {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Status::Absent => "Absent",
            Status::Here => "Here",
            Status::Excluded => "Excluded",
            Status::Travel => "Travel",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Absent" => Some(Status::Absent),
            "Here" => Some(Status::Here),
            "Excluded" => Some(Status::Excluded),
            "Travel" => Some(Status::Travel),
            _ => None,
        }
    }

    /// Helper: convert input from the CLI (any casing)
    pub fn from_input(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "absent" => Some(Status::Absent),
            "here" => Some(Status::Here),
            "excluded" => Some(Status::Excluded),
            "travel" => Some(Status::Travel),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_db_strings() {
        for s in [Status::Absent, Status::Here, Status::Excluded, Status::Travel] {
            assert_eq!(Status::from_db_str(s.to_db_str()), Some(s));
        }
    }

    #[test]
    fn parses_input_case_insensitively() {
        assert_eq!(Status::from_input("here"), Some(Status::Here));
        assert_eq!(Status::from_input("TRAVEL"), Some(Status::Travel));
        assert_eq!(Status::from_input("late"), None);
    }
}
