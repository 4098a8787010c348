//! Grade lookup shapes (third-party score service binding).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeBindingStatus {
    pub bound: bool,
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub student_id: Option<String>,
    #[serde(default)]
    pub role_type: Option<i32>,
    #[serde(default)]
    pub bind_time: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeRole {
    Student,
    Parent,
}

impl GradeRole {
    #[must_use]
    pub fn code(self) -> i32 {
        match self {
            Self::Student => 1,
            Self::Parent => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BindGradeRequest {
    pub account: String,
    pub password: String,
    pub role_type: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamListItem {
    pub exam_id: i64,
    pub name: String,
    /// Epoch milliseconds.
    pub time: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    pub score: f64,
    /// Full marks.
    pub manfen: f64,
    pub class_rank: u32,
    pub grade_rank: u32,
    pub class_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamPage {
    pub list: Vec<ExamListItem>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankInfo {
    pub class_rank: u32,
    pub class_stu_num: u32,
    pub class_defeat_ratio: f64,
    pub grade_rank: u32,
    pub grade_stu_num: u32,
    pub grade_defeat_ratio: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareInfo {
    #[serde(default)]
    pub class_highest: Option<f64>,
    #[serde(default)]
    pub class_avg: Option<f64>,
    #[serde(default)]
    pub grade_highest: Option<f64>,
    #[serde(default)]
    pub grade_avg: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectScore {
    pub paper_id: String,
    pub subject: String,
    pub score: f64,
    pub manfen: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamDetail {
    pub exam_id: i64,
    pub name: String,
    pub time: i64,
    #[serde(rename = "type")]
    pub kind: i32,
    pub score: f64,
    pub manfen: f64,
    pub rank_info: RankInfo,
    pub compare_info: CompareInfo,
    #[serde(default)]
    pub subjects: Vec<SubjectScore>,
}

/// Display name for an exam type code.
#[must_use]
pub fn exam_type_name(kind: i32) -> &'static str {
    match kind {
        3 => "monthly exam",
        5 => "proficiency exam",
        _ => "other",
    }
}
