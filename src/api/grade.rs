#![allow(clippy::missing_errors_doc)]

use super::{ApiClient, ApiError, ApiResponse, Ignored, Query};
use crate::types::grade::{BindGradeRequest, ExamDetail, ExamPage, GradeBindingStatus};

impl ApiClient {
    /// `GET /grade/status`
    pub async fn grade_binding(&self) -> Result<ApiResponse<GradeBindingStatus>, ApiError> {
        self.get("/grade/status", Query::new()).await
    }

    /// `POST /grade/bind`
    pub async fn bind_grade(&self, req: &BindGradeRequest) -> Result<ApiResponse<GradeBindingStatus>, ApiError> {
        self.post("/grade/bind", req).await
    }

    /// `DELETE /grade/unbind`
    pub async fn unbind_grade(&self) -> Result<ApiResponse<Ignored>, ApiError> {
        self.delete("/grade/unbind").await
    }

    /// `GET /grade/exams?page=&pageSize=`
    pub async fn exams(&self, page: u32, page_size: u32) -> Result<ApiResponse<ExamPage>, ApiError> {
        let query = Query::new().with("page", page).with("pageSize", page_size);
        self.get("/grade/exams", query).await
    }

    /// `GET /grade/exams/{exam_id}`
    pub async fn exam(&self, exam_id: i64) -> Result<ApiResponse<ExamDetail>, ApiError> {
        self.get(&format!("/grade/exams/{exam_id}"), Query::new())
            .await
    }
}
