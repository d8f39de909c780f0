//! HTML views
//!
//! Askama templates live in `cafe-server/templates/`. Each page struct carries
//! `search_key` so the navbar search box keeps the current query.

use askama::Template;
use axum::http::StatusCode;
use axum::response::Html;
use shared::models::{Cafe, CafeField, FieldKind, FieldValue};

use crate::forms::{CafeForm, FormErrors};
use crate::utils::AppResult;

/// Render a template into an HTML body
pub fn render<T: Template>(template: &T) -> AppResult<Html<String>> {
    Ok(Html(template.render()?))
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub cafes: Vec<Cafe>,
    pub search_key: &'a str,
}

/// Yes/no badge on the detail page
pub struct Amenity {
    pub label: &'static str,
    pub present: bool,
}

#[derive(Template)]
#[template(path = "cafe.html")]
pub struct CafeTemplate<'a> {
    pub cafe: Cafe,
    pub amenities: Vec<Amenity>,
    pub search_key: &'a str,
}

impl<'a> CafeTemplate<'a> {
    pub fn new(cafe: Cafe) -> Self {
        let amenities = CafeField::ALL
            .into_iter()
            .filter(|field| field.kind() == FieldKind::Checkbox)
            .map(|field| Amenity {
                label: field.label(),
                present: matches!(cafe.fields.value(field), FieldValue::Flag(true)),
            })
            .collect();
        Self {
            cafe,
            amenities,
            search_key: "",
        }
    }
}

/// Whether the cafe form creates a new record or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

impl FormMode {
    pub fn action(self) -> String {
        match self {
            FormMode::Create => "/add".to_string(),
            FormMode::Edit(id) => format!("/edit-cafe/{id}"),
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FormMode::Create => "Add a new cafe",
            FormMode::Edit(_) => "Edit cafe",
        }
    }

    pub fn button(self) -> &'static str {
        match self {
            FormMode::Create => "Add Cafe",
            FormMode::Edit(_) => "Save Changes",
        }
    }
}

/// One input of the cafe form with its current value and errors
pub struct FieldRow<'a> {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: &'a str,
    pub checked: bool,
    pub errors: &'a [String],
}

impl FieldRow<'_> {
    pub fn is_checkbox(&self) -> bool {
        self.kind == FieldKind::Checkbox
    }

    pub fn is_url(&self) -> bool {
        self.kind == FieldKind::Url
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[derive(Template)]
#[template(path = "cafe_form.html")]
pub struct CafeFormTemplate<'a> {
    pub is_edit: bool,
    pub title: &'static str,
    pub action: String,
    pub button: &'static str,
    pub cancel_url: String,
    pub rows: Vec<FieldRow<'a>>,
    pub search_key: &'a str,
}

impl<'a> CafeFormTemplate<'a> {
    pub fn new(mode: FormMode, form: &'a CafeForm, errors: &'a FormErrors) -> Self {
        let rows = CafeField::ALL
            .into_iter()
            .map(|field| FieldRow {
                name: field.column(),
                label: field.label(),
                kind: field.kind(),
                value: form.text(field),
                checked: form.is_checked(field),
                errors: errors.get(field),
            })
            .collect();
        let cancel_url = match mode {
            FormMode::Create => "/".to_string(),
            FormMode::Edit(id) => format!("/cafe/{id}"),
        };
        Self {
            is_edit: matches!(mode, FormMode::Edit(_)),
            title: mode.title(),
            action: mode.action(),
            button: mode.button(),
            cancel_url,
            rows,
            search_key: "",
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub status: u16,
    pub title: &'a str,
    pub message: &'a str,
    pub detail: Option<&'a str>,
    pub search_key: &'a str,
}

/// Error page for `status`; `detail` is only passed in debug mode
pub fn error_page(status: StatusCode, message: &str, detail: Option<&str>) -> Html<String> {
    let template = ErrorTemplate {
        status: status.as_u16(),
        title: status.canonical_reason().unwrap_or("Error"),
        message,
        detail,
        search_key: "",
    };
    match template.render() {
        Ok(body) => Html(body),
        Err(e) => {
            tracing::error!(error = %e, "Failed to render error page");
            Html(format!("<h1>{}</h1>", status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::CafeFields;

    fn joes() -> Cafe {
        Cafe {
            id: 1,
            fields: CafeFields {
                name: "Joe's".into(),
                map_url: "https://maps.example/1".into(),
                img_url: "https://img.example/1.png".into(),
                location: "Downtown".into(),
                has_sockets: true,
                has_toilet: false,
                has_wifi: true,
                can_take_calls: false,
                seats: "10-20".into(),
                coffee_price: "£2.50".into(),
            },
        }
    }

    #[test]
    fn test_index_escapes_names() {
        let mut cafe = joes();
        cafe.fields.name = "<script>alert(1)</script>".into();
        let html = IndexTemplate {
            cafes: vec![cafe],
            search_key: "",
        }
        .render()
        .unwrap();

        assert!(!html.contains("<script>"));
        assert!(html.contains("alert(1)"));
    }

    #[test]
    fn test_index_empty_state() {
        let html = IndexTemplate {
            cafes: vec![],
            search_key: "Nowhere",
        }
        .render()
        .unwrap();
        assert!(html.contains("No cafes found"));
        assert!(html.contains("value=\"Nowhere\""));
    }

    #[test]
    fn test_detail_lists_amenities() {
        let template = CafeTemplate::new(joes());
        let present: Vec<_> = template
            .amenities
            .iter()
            .filter(|a| a.present)
            .map(|a| a.label)
            .collect();
        assert_eq!(present, vec!["Has Sockets", "Has Wi-fi"]);

        let html = template.render().unwrap();
        assert!(html.contains("/edit-cafe/1"));
        assert!(html.contains("/delete/1"));
    }

    #[test]
    fn test_form_modes() {
        assert_eq!(FormMode::Create.action(), "/add");
        assert_eq!(FormMode::Edit(4).action(), "/edit-cafe/4");

        let form = CafeForm::from_record(&joes());
        let errors = FormErrors::default();
        let template = CafeFormTemplate::new(FormMode::Edit(1), &form, &errors);
        assert!(template.is_edit);
        assert_eq!(template.rows.len(), CafeField::ALL.len());

        let html = template.render().unwrap();
        assert!(html.contains("action=\"/edit-cafe/1\""));
        assert!(html.contains("Save Changes"));
        assert!(html.contains("value=\"Downtown\""));
    }

    #[test]
    fn test_form_shows_errors() {
        let form = CafeForm::default();
        let errors = form.validate().unwrap_err();
        let html = CafeFormTemplate::new(FormMode::Create, &form, &errors)
            .render()
            .unwrap();
        assert!(html.contains("This field is required."));
        assert!(html.contains("Add Cafe"));
    }

    #[test]
    fn test_error_page_detail_is_optional() {
        let Html(body) = error_page(StatusCode::NOT_FOUND, "Cafe 9 not found", None);
        assert!(body.contains("404"));
        assert!(body.contains("Cafe 9 not found"));

        let Html(body) = error_page(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Database error",
            Some("no such table: cafe"),
        );
        assert!(body.contains("no such table: cafe"));
    }
}
