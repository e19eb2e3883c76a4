//! Raw form input and its validation.
//!
//! A draft carries every field as optional text, exactly as a form submits
//! it. Validation turns a draft into either a complete record description
//! ([`NewAsset`], [`NewTicket`]) or a set of field changes
//! ([`AssetChanges`], [`TicketChanges`]). Nothing reaches the store without
//! passing through here.
//!
//! # Field rules
//!
//! - Required text (`name`, `title`, `description`) must be present and
//!   non-blank. `name` and `title` are trimmed.
//! - Enum and date fields treat blank text as "not supplied". Any other text
//!   must name a member of the closed set; nothing is coerced.
//! - Optional text (`serialNumber`, `assignedTo`, `relatedAssetId`): absent
//!   keeps the current value, blank clears it.
//!
//! Drafts deserialize from camelCase form payloads. Keys a draft does not
//! know about (`id`, `createdAt`, `updatedAt`) are dropped, so those fields
//! cannot be written through a draft.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::{
    Asset, AssetStatus, AssetType, ParseEnumError, Ticket, TicketCategory, TicketPriority,
    TicketStatus,
};
use crate::error::ErrorCode;

const DATE_FORMAT: &str = "%Y-%m-%d";

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// A draft failed required-field or enum-membership checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` must not be blank")]
    BlankField { field: &'static str },

    #[error("field `{field}`: {source}")]
    InvalidEnum {
        field: &'static str,
        #[source]
        source: ParseEnumError,
    },

    #[error("field `{field}`: invalid date '{got}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, got: String },
}

impl ValidationError {
    /// Name of the offending draft field, as the form calls it.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::MissingField { field }
            | Self::BlankField { field }
            | Self::InvalidEnum { field, .. }
            | Self::InvalidDate { field, .. } => *field,
        }
    }

    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } => ErrorCode::MissingField,
            Self::BlankField { .. } => ErrorCode::BlankField,
            Self::InvalidEnum { .. } => ErrorCode::InvalidEnumValue,
            Self::InvalidDate { .. } => ErrorCode::InvalidDate,
        }
    }
}

// ---------------------------------------------------------------------------
// Asset drafts
// ---------------------------------------------------------------------------

/// Unvalidated asset form input, used for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssetDraft {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub asset_type: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<String>,
    pub assigned_to: Option<String>,
    pub status: Option<String>,
}

/// A validated asset ready to be assigned an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAsset {
    pub name: String,
    pub asset_type: AssetType,
    pub serial_number: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    pub status: Option<AssetStatus>,
}

/// Validated field changes for an existing asset. `None` leaves a field as is;
/// `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetChanges {
    pub name: Option<String>,
    pub asset_type: Option<AssetType>,
    pub serial_number: Option<Option<String>>,
    pub purchase_date: Option<NaiveDate>,
    pub assigned_to: Option<Option<String>>,
    pub status: Option<AssetStatus>,
}

impl AssetDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(value.into());
        self
    }

    #[must_use]
    pub fn asset_type(mut self, value: impl ToString) -> Self {
        self.asset_type = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn serial_number(mut self, value: impl Into<String>) -> Self {
        self.serial_number = Some(value.into());
        self
    }

    #[must_use]
    pub fn purchase_date(mut self, value: impl ToString) -> Self {
        self.purchase_date = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn assigned_to(mut self, value: impl Into<String>) -> Self {
        self.assigned_to = Some(value.into());
        self
    }

    #[must_use]
    pub fn status(mut self, value: impl ToString) -> Self {
        self.status = Some(value.to_string());
        self
    }

    /// Validate for creation: `name` and `type` are required.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking fields in form order.
    pub fn validate_new(&self) -> Result<NewAsset, ValidationError> {
        Ok(NewAsset {
            name: required_text(self.name.as_deref(), "name")?,
            asset_type: required_enum(self.asset_type.as_deref(), "type")?,
            serial_number: optional_text(self.serial_number.as_deref()).flatten(),
            purchase_date: optional_date(self.purchase_date.as_deref(), "purchaseDate")?,
            assigned_to: optional_text(self.assigned_to.as_deref()).flatten(),
            status: optional_enum(self.status.as_deref(), "status")?,
        })
    }

    /// Validate for update: every field is optional, present fields must be valid.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking fields in form order.
    pub fn validate_changes(&self) -> Result<AssetChanges, ValidationError> {
        Ok(AssetChanges {
            name: self
                .name
                .as_deref()
                .map(|raw| non_blank(raw, "name"))
                .transpose()?,
            asset_type: optional_enum(self.asset_type.as_deref(), "type")?,
            serial_number: optional_text(self.serial_number.as_deref()),
            purchase_date: optional_date(self.purchase_date.as_deref(), "purchaseDate")?,
            assigned_to: optional_text(self.assigned_to.as_deref()),
            status: optional_enum(self.status.as_deref(), "status")?,
        })
    }
}

impl AssetChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.asset_type.is_none()
            && self.serial_number.is_none()
            && self.purchase_date.is_none()
            && self.assigned_to.is_none()
            && self.status.is_none()
    }

    /// Merge the changes over `asset`. The id is never touched.
    pub fn apply_to(self, asset: &mut Asset) {
        if let Some(name) = self.name {
            asset.name = name;
        }
        if let Some(asset_type) = self.asset_type {
            asset.asset_type = asset_type;
        }
        if let Some(serial_number) = self.serial_number {
            asset.serial_number = serial_number;
        }
        if let Some(purchase_date) = self.purchase_date {
            asset.purchase_date = purchase_date;
        }
        if let Some(assigned_to) = self.assigned_to {
            asset.assigned_to = assigned_to;
        }
        if let Some(status) = self.status {
            asset.status = status;
        }
    }
}

// ---------------------------------------------------------------------------
// Ticket drafts
// ---------------------------------------------------------------------------

/// Unvalidated ticket form input, used for both create and update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TicketDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub assigned_to: Option<String>,
    pub related_asset_id: Option<String>,
}

/// A validated ticket ready to be assigned an id and timestamps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub priority: TicketPriority,
    pub status: Option<TicketStatus>,
    pub category: TicketCategory,
    pub assigned_to: Option<String>,
    pub related_asset_id: Option<String>,
}

/// Validated field changes for an existing ticket.
///
/// There is no way to express a change to `id`, `createdAt`, or `updatedAt`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<TicketPriority>,
    pub status: Option<TicketStatus>,
    pub category: Option<TicketCategory>,
    pub assigned_to: Option<Option<String>>,
    pub related_asset_id: Option<Option<String>>,
}

impl TicketDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(value.into());
        self
    }

    #[must_use]
    pub fn description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(value.into());
        self
    }

    #[must_use]
    pub fn priority(mut self, value: impl ToString) -> Self {
        self.priority = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn status(mut self, value: impl ToString) -> Self {
        self.status = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn category(mut self, value: impl ToString) -> Self {
        self.category = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn assigned_to(mut self, value: impl Into<String>) -> Self {
        self.assigned_to = Some(value.into());
        self
    }

    #[must_use]
    pub fn related_asset_id(mut self, value: impl Into<String>) -> Self {
        self.related_asset_id = Some(value.into());
        self
    }

    /// Validate for creation: `title`, `description`, `priority`, and
    /// `category` are required.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking fields in form order.
    pub fn validate_new(&self) -> Result<NewTicket, ValidationError> {
        Ok(NewTicket {
            title: required_text(self.title.as_deref(), "title")?,
            description: required_body(self.description.as_deref(), "description")?,
            priority: required_enum(self.priority.as_deref(), "priority")?,
            status: optional_enum(self.status.as_deref(), "status")?,
            category: required_enum(self.category.as_deref(), "category")?,
            assigned_to: optional_text(self.assigned_to.as_deref()).flatten(),
            related_asset_id: optional_text(self.related_asset_id.as_deref()).flatten(),
        })
    }

    /// Validate for update: every field is optional, present fields must be valid.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found, checking fields in form order.
    pub fn validate_changes(&self) -> Result<TicketChanges, ValidationError> {
        Ok(TicketChanges {
            title: self
                .title
                .as_deref()
                .map(|raw| non_blank(raw, "title"))
                .transpose()?,
            description: self
                .description
                .as_deref()
                .map(|raw| required_body(Some(raw), "description"))
                .transpose()?,
            priority: optional_enum(self.priority.as_deref(), "priority")?,
            status: optional_enum(self.status.as_deref(), "status")?,
            category: optional_enum(self.category.as_deref(), "category")?,
            assigned_to: optional_text(self.assigned_to.as_deref()),
            related_asset_id: optional_text(self.related_asset_id.as_deref()),
        })
    }
}

impl TicketChanges {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.status.is_none()
            && self.category.is_none()
            && self.assigned_to.is_none()
            && self.related_asset_id.is_none()
    }

    /// Merge the changes over `ticket`. Timestamps are the store's business.
    pub fn apply_to(self, ticket: &mut Ticket) {
        if let Some(title) = self.title {
            ticket.title = title;
        }
        if let Some(description) = self.description {
            ticket.description = description;
        }
        if let Some(priority) = self.priority {
            ticket.priority = priority;
        }
        if let Some(status) = self.status {
            ticket.status = status;
        }
        if let Some(category) = self.category {
            ticket.category = category;
        }
        if let Some(assigned_to) = self.assigned_to {
            ticket.assigned_to = assigned_to;
        }
        if let Some(related_asset_id) = self.related_asset_id {
            ticket.related_asset_id = related_asset_id;
        }
    }
}

// ---------------------------------------------------------------------------
// Field helpers
// ---------------------------------------------------------------------------

fn required_text(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    let raw = value.ok_or(ValidationError::MissingField { field })?;
    non_blank(raw, field)
}

fn non_blank(raw: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    Ok(trimmed.to_string())
}

/// Like [`required_text`], but keeps the text verbatim (multi-line bodies).
fn required_body(value: Option<&str>, field: &'static str) -> Result<String, ValidationError> {
    let raw = value.ok_or(ValidationError::MissingField { field })?;
    if raw.trim().is_empty() {
        return Err(ValidationError::BlankField { field });
    }
    Ok(raw.to_string())
}

fn optional_text(value: Option<&str>) -> Option<Option<String>> {
    value.map(|raw| {
        let trimmed = raw.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}

fn required_enum<T>(value: Option<&str>, field: &'static str) -> Result<T, ValidationError>
where
    T: FromStr<Err = ParseEnumError>,
{
    let raw = supplied(value).ok_or(ValidationError::MissingField { field })?;
    raw.parse()
        .map_err(|source| ValidationError::InvalidEnum { field, source })
}

fn optional_enum<T>(value: Option<&str>, field: &'static str) -> Result<Option<T>, ValidationError>
where
    T: FromStr<Err = ParseEnumError>,
{
    supplied(value)
        .map(|raw| {
            raw.parse()
                .map_err(|source| ValidationError::InvalidEnum { field, source })
        })
        .transpose()
}

fn optional_date(
    value: Option<&str>,
    field: &'static str,
) -> Result<Option<NaiveDate>, ValidationError> {
    supplied(value)
        .map(|raw| {
            NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|_| {
                ValidationError::InvalidDate {
                    field,
                    got: raw.to_string(),
                }
            })
        })
        .transpose()
}
