use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::user::UserDto;

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateJobDto {
    /// Work type name, e.g. "Mason"
    #[serde(rename = "type")]
    pub work_type: String,
    pub number_of_workers: i32,
    pub work_date: NaiveDate,
    pub working_days: i32,
    pub work_pay: f64,
    pub address_id: i32,
    pub requestor_id: i32,
    /// Defaults to "open" when omitted
    pub job_status: Option<String>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct JobDto {
    #[serde(rename = "type")]
    pub work_type: String,
    pub number_of_workers: i32,
    pub work_date: NaiveDate,
    pub working_days: i32,
    pub work_pay: f64,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct JobRecordDto {
    pub id: i32,
    #[serde(rename = "type")]
    pub work_type: String,
    pub number_of_workers: i32,
    pub workers_remaining: i32,
    pub work_date: NaiveDate,
    pub working_days: i32,
    pub work_pay: f64,
    pub address_id: i32,
    pub requestor_id: i32,
    pub job_status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub created_by: Option<i32>,
    pub updated_by: Option<i32>,
    pub is_deleted: bool,
}

/// Body for the offer workflow endpoints (apply, accept, reject)
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct OfferDto {
    pub user_id: i32,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicantsDto {
    pub job_id: i32,
    pub applicants: Vec<UserDto>,
}
