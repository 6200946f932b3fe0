use serde::{Deserialize, Serialize};

use crate::models::company::{CompanyTime, UserTime};

/// Per-user breakdown row inside a company aggregate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserTimeDto {
    pub email: String,

    #[serde(rename = "totalTime", default)]
    pub total_time: f64,

    #[serde(rename = "activeDates", default)]
    pub active_dates: Vec<String>,

    #[serde(rename = "idleDates", default)]
    pub idle_dates: Vec<String>,
}

impl From<UserTimeDto> for UserTime {
    fn from(dto: UserTimeDto) -> Self {
        Self {
            email: dto.email,
            total_time: dto.total_time,
            active_dates: dto.active_dates,
            idle_dates: dto.idle_dates,
        }
    }
}

/// Company aggregate as returned by the times endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompanyTimeDto {
    pub company: String,

    #[serde(rename = "totalTime", default)]
    pub total_time: f64,

    #[serde(rename = "userCount", default)]
    pub user_count: u32,

    #[serde(default)]
    pub users: Vec<UserTimeDto>,
}

impl From<CompanyTimeDto> for CompanyTime {
    fn from(dto: CompanyTimeDto) -> Self {
        Self {
            company: dto.company,
            total_time: dto.total_time,
            user_count: dto.user_count,
            users: dto.users.into_iter().map(Into::into).collect(),
        }
    }
}
