//! Vendor and historical-performance types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{DomainError, PerformanceMetrics};
use crate::models::{historical_performance, vendor};

pub const VENDOR_NAME_MAX_LEN: usize = 100;
pub const VENDOR_CODE_MAX_LEN: usize = 50;

/// Vendor data for API responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: i32,
    pub name: String,
    pub contact_details: String,
    pub address: String,
    pub vendor_code: String,
    pub on_time_delivery_rate: f64,
    pub quality_rating_avg: f64,
    pub average_response_time: f64,
    pub fulfillment_rate: f64,
}

impl Vendor {
    pub fn metrics(&self) -> PerformanceMetrics {
        PerformanceMetrics {
            on_time_delivery_rate: self.on_time_delivery_rate,
            quality_rating_avg: self.quality_rating_avg,
            average_response_time: self.average_response_time,
            fulfillment_rate: self.fulfillment_rate,
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<vendor::Model> for Vendor {
    fn from(model: vendor::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            contact_details: model.contact_details,
            address: model.address,
            vendor_code: model.vendor_code,
            on_time_delivery_rate: model.on_time_delivery_rate,
            quality_rating_avg: model.quality_rating_avg,
            average_response_time: model.average_response_time,
            fulfillment_rate: model.fulfillment_rate,
        }
    }
}

/// A frozen copy of a vendor's metrics on a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPerformance {
    pub id: i32,
    pub vendor_id: i32,
    pub date: NaiveDate,
    pub on_time_delivery_rate: f64,
    pub quality_rating_avg: f64,
    pub average_response_time: f64,
    pub fulfillment_rate: f64,
}

impl fmt::Display for HistoricalPerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.fulfillment_rate, self.date)
    }
}

impl From<historical_performance::Model> for HistoricalPerformance {
    fn from(model: historical_performance::Model) -> Self {
        Self {
            id: model.id,
            vendor_id: model.vendor_id,
            date: model.date,
            on_time_delivery_rate: model.on_time_delivery_rate,
            quality_rating_avg: model.quality_rating_avg,
            average_response_time: model.average_response_time,
            fulfillment_rate: model.fulfillment_rate,
        }
    }
}

/// Input for creating a vendor. Metrics always start at zero.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVendorInput {
    pub name: String,
    pub contact_details: String,
    pub address: String,
    pub vendor_code: String,
}

impl CreateVendorInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("name", &self.name, VENDOR_NAME_MAX_LEN)?;
        require_text("vendor_code", &self.vendor_code, VENDOR_CODE_MAX_LEN)
    }
}

/// Input for a partial vendor update
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVendorInput {
    pub name: Option<String>,
    pub contact_details: Option<String>,
    pub address: Option<String>,
    pub vendor_code: Option<String>,
}

impl UpdateVendorInput {
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(name) = &self.name {
            require_text("name", name, VENDOR_NAME_MAX_LEN)?;
        }
        if let Some(code) = &self.vendor_code {
            require_text("vendor_code", code, VENDOR_CODE_MAX_LEN)?;
        }
        Ok(())
    }
}

/// Reject blank values and values longer than `max_len` characters.
pub(crate) fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{} may not be blank", field)));
    }
    if value.chars().count() > max_len {
        return Err(DomainError::Validation(format!(
            "{} must be at most {} characters",
            field, max_len
        )));
    }
    Ok(())
}
