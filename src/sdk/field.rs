use std::fmt;

/// The two address inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Start,
    Destination,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Start, Field::Destination];

    /// Name shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Start => "スタート地点",
            Field::Destination => "目的地",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Start => write!(f, "start"),
            Field::Destination => write!(f, "destination"),
        }
    }
}
