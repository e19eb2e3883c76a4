use std::fmt;

/// Machine-readable error codes a presentation layer can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    MissingField,
    BlankField,
    InvalidEnumValue,
    InvalidDate,
    AssetNotFound,
    TicketNotFound,
    DuplicateId,
    TimestampOrder,
}

impl ErrorCode {
    pub const ALL: [Self; 8] = [
        Self::MissingField,
        Self::BlankField,
        Self::InvalidEnumValue,
        Self::InvalidDate,
        Self::AssetNotFound,
        Self::TicketNotFound,
        Self::DuplicateId,
        Self::TimestampOrder,
    ];

    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingField => "E1001",
            Self::BlankField => "E1002",
            Self::InvalidEnumValue => "E1003",
            Self::InvalidDate => "E1004",
            Self::AssetNotFound => "E2001",
            Self::TicketNotFound => "E2002",
            Self::DuplicateId => "E3001",
            Self::TimestampOrder => "E3002",
        }
    }

    /// Short human-facing summary for logs and form banners.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingField => "Required field missing",
            Self::BlankField => "Required field is blank",
            Self::InvalidEnumValue => "Invalid type/status/priority/category value",
            Self::InvalidDate => "Invalid date",
            Self::AssetNotFound => "Asset not found",
            Self::TicketNotFound => "Ticket not found",
            Self::DuplicateId => "Seed records share an id",
            Self::TimestampOrder => "Seed ticket updated before it was created",
        }
    }

    /// Optional remediation hint for the person filling in the form.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::MissingField | Self::BlankField => Some("Fill in every required field."),
            Self::InvalidEnumValue => Some("Pick one of the listed options."),
            Self::InvalidDate => Some("Use the YYYY-MM-DD format."),
            Self::AssetNotFound | Self::TicketNotFound => {
                Some("The record may have been deleted; refresh the list.")
            }
            Self::DuplicateId => Some("Give every seeded record its own id."),
            Self::TimestampOrder => Some("Set updatedAt to createdAt or later."),
        }
    }

    /// Whether the failure came from form input rather than a stale id.
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(
            self,
            Self::MissingField | Self::BlankField | Self::InvalidEnumValue | Self::InvalidDate
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
