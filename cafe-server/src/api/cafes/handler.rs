//! Cafe page handlers

use axum::{
    Form,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::repository::{RepoError, cafe};
use crate::forms::{CafeForm, FormErrors};
use crate::utils::{AppError, AppResult};
use crate::views::{self, CafeFormTemplate, CafeTemplate, FormMode, IndexTemplate};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub key: String,
}

/// GET / - all cafes
pub async fn list(State(state): State<ServerState>) -> AppResult<Html<String>> {
    let cafes = cafe::find_all(&state.pool).await?;
    views::render(&IndexTemplate {
        cafes,
        search_key: "",
    })
}

/// GET /cafe/{id}
pub async fn detail(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let cafe = cafe::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::cafe_not_found(id))?;
    views::render(&CafeTemplate::new(cafe))
}

/// GET /search?key= - substring match on name or location
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Html<String>> {
    let cafes = if query.key.is_empty() {
        cafe::find_all(&state.pool).await?
    } else {
        cafe::search(&state.pool, &query.key).await?
    };
    views::render(&IndexTemplate {
        cafes,
        search_key: &query.key,
    })
}

/// GET /add
pub async fn new_form() -> AppResult<Html<String>> {
    let form = CafeForm::default();
    let errors = FormErrors::default();
    views::render(&CafeFormTemplate::new(FormMode::Create, &form, &errors))
}

/// POST /add
pub async fn create(
    State(state): State<ServerState>,
    Form(form): Form<CafeForm>,
) -> AppResult<Response> {
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            return render_form(FormMode::Create, &form, &errors, StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match cafe::create(&state.pool, fields).await {
        Ok(created) => {
            tracing::info!(id = created.id, name = %created.fields.name, "Cafe created");
            Ok(Redirect::to("/").into_response())
        }
        Err(RepoError::Duplicate(column)) => render_form(
            FormMode::Create,
            &form,
            &FormErrors::duplicate(&column),
            StatusCode::CONFLICT,
        ),
        Err(e) => Err(e.into()),
    }
}

/// GET /edit-cafe/{id} - form pre-filled with the stored values
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Html<String>> {
    let existing = cafe::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::cafe_not_found(id))?;
    let form = CafeForm::from_record(&existing);
    let errors = FormErrors::default();
    views::render(&CafeFormTemplate::new(FormMode::Edit(id), &form, &errors))
}

/// POST /edit-cafe/{id} - overwrite every field
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Form(form): Form<CafeForm>,
) -> AppResult<Response> {
    if cafe::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::cafe_not_found(id));
    }

    let mode = FormMode::Edit(id);
    let fields = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            return render_form(mode, &form, &errors, StatusCode::UNPROCESSABLE_ENTITY);
        }
    };

    match cafe::update(&state.pool, id, fields).await {
        Ok(updated) => {
            tracing::info!(id = updated.id, name = %updated.fields.name, "Cafe updated");
            Ok(Redirect::to(&format!("/cafe/{id}")).into_response())
        }
        Err(RepoError::Duplicate(column)) => {
            render_form(mode, &form, &FormErrors::duplicate(&column), StatusCode::CONFLICT)
        }
        Err(RepoError::NotFound(_)) => Err(AppError::cafe_not_found(id)),
        Err(e) => Err(e.into()),
    }
}

/// GET /delete/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Redirect> {
    if !cafe::delete(&state.pool, id).await? {
        return Err(AppError::cafe_not_found(id));
    }
    tracing::info!(id, "Cafe deleted");
    Ok(Redirect::to("/"))
}

/// Re-render a rejected submission with its errors
fn render_form(
    mode: FormMode,
    form: &CafeForm,
    errors: &FormErrors,
    status: StatusCode,
) -> AppResult<Response> {
    tracing::debug!(errors = %errors, "Cafe form rejected");
    let page = views::render(&CafeFormTemplate::new(mode, form, errors))?;
    Ok((status, page).into_response())
}
