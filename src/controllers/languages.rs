use axum::Json;

use crate::domain::language::{LanguageCode, LanguageOption};

/// GET /api/languages - Target languages offered in the picker
pub async fn list_languages() -> Json<Vec<LanguageOption>> {
    Json(LanguageCode::targets().map(LanguageOption::from).collect())
}
