use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for the job search endpoint.
///
/// Which fields are present decides the filter combination that runs;
/// unsupported combinations match nothing.
#[derive(Clone, Deserialize, IntoParams)]
pub struct JobSearchDto {
    pub work_type: Option<String>,
    pub work_date: Option<NaiveDate>,
    pub days: Option<i32>,
    pub pay: Option<f64>,
}

#[derive(Clone, Deserialize, IntoParams)]
pub struct ProfessionSearchDto {
    pub profession: Option<String>,
    pub salary: Option<i32>,
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<String>,
}

#[derive(Clone, Deserialize, IntoParams)]
pub struct ShopSearchDto {
    pub name: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub category: Option<String>,
}

#[derive(Clone, Deserialize, IntoParams)]
pub struct MaterialSearchDto {
    #[serde(rename = "type")]
    pub category: Option<String>,
    pub brand: Option<String>,
    pub name: Option<String>,
}
