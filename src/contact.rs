use serde::Serialize;

/// Contact details in the shape the API's contact schema expects.
///
/// Optional fields are dropped from the serialized body entirely when
/// unset, so an update never overwrites them with empty values.
#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub address1: String,
    pub city: String,
    pub state_province: String,
    pub postal_code: String,
    pub country: String,
    pub email_address: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_ext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}
