//! Cafe form
//!
//! Rules follow each field's [`FieldKind`]: text is required, URLs must be
//! absolute http(s) links to a dotted host, checkboxes must be ticked.

use serde::Deserialize;
use shared::models::{Cafe, CafeField, CafeFields, FieldKind, MAX_TEXT_LEN};
use url::{Host, Url};

use super::{FormErrors, INVALID_URL_MESSAGE, REQUIRED_MESSAGE};

/// Value browsers send for a ticked checkbox without a `value` attribute
const CHECKED: &str = "y";

/// Raw cafe submission, as posted by the create and edit forms
///
/// An unticked checkbox is simply absent from the body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CafeForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub map_url: String,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub has_sockets: Option<String>,
    #[serde(default)]
    pub has_toilet: Option<String>,
    #[serde(default)]
    pub has_wifi: Option<String>,
    #[serde(default)]
    pub can_take_calls: Option<String>,
    #[serde(default)]
    pub seats: String,
    #[serde(default)]
    pub coffee_price: String,
}

impl CafeForm {
    /// Pre-fill the form from a stored cafe (edit flow)
    pub fn from_record(cafe: &Cafe) -> Self {
        let f = &cafe.fields;
        Self {
            name: f.name.clone(),
            map_url: f.map_url.clone(),
            img_url: f.img_url.clone(),
            location: f.location.clone(),
            has_sockets: checkbox(f.has_sockets),
            has_toilet: checkbox(f.has_toilet),
            has_wifi: checkbox(f.has_wifi),
            can_take_calls: checkbox(f.can_take_calls),
            seats: f.seats.clone(),
            coffee_price: f.coffee_price.clone(),
        }
    }

    /// Submitted text of a text or URL field; empty for checkboxes
    pub fn text(&self, field: CafeField) -> &str {
        match field {
            CafeField::Name => &self.name,
            CafeField::MapUrl => &self.map_url,
            CafeField::ImgUrl => &self.img_url,
            CafeField::Location => &self.location,
            CafeField::Seats => &self.seats,
            CafeField::CoffeePrice => &self.coffee_price,
            CafeField::HasSockets
            | CafeField::HasToilet
            | CafeField::HasWifi
            | CafeField::CanTakeCalls => "",
        }
    }

    pub fn is_checked(&self, field: CafeField) -> bool {
        let value = match field {
            CafeField::HasSockets => &self.has_sockets,
            CafeField::HasToilet => &self.has_toilet,
            CafeField::HasWifi => &self.has_wifi,
            CafeField::CanTakeCalls => &self.can_take_calls,
            CafeField::Name
            | CafeField::MapUrl
            | CafeField::ImgUrl
            | CafeField::Location
            | CafeField::Seats
            | CafeField::CoffeePrice => return false,
        };
        value.is_some()
    }

    /// Check every field; on success return the trimmed, typed fields
    pub fn validate(&self) -> Result<CafeFields, FormErrors> {
        let mut errors = FormErrors::default();

        for field in CafeField::ALL {
            match field.kind() {
                FieldKind::Checkbox => {
                    if !self.is_checked(field) {
                        errors.add(field, REQUIRED_MESSAGE);
                    }
                }
                kind @ (FieldKind::Text | FieldKind::Url) => {
                    let value = self.text(field).trim();
                    if value.is_empty() {
                        errors.add(field, REQUIRED_MESSAGE);
                        continue;
                    }
                    if value.chars().count() > MAX_TEXT_LEN {
                        errors.add(
                            field,
                            format!("Field cannot be longer than {MAX_TEXT_LEN} characters."),
                        );
                    }
                    if kind == FieldKind::Url && !is_web_url(value) {
                        errors.add(field, INVALID_URL_MESSAGE);
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CafeFields {
            name: self.name.trim().to_owned(),
            map_url: self.map_url.trim().to_owned(),
            img_url: self.img_url.trim().to_owned(),
            location: self.location.trim().to_owned(),
            has_sockets: self.has_sockets.is_some(),
            has_toilet: self.has_toilet.is_some(),
            has_wifi: self.has_wifi.is_some(),
            can_take_calls: self.can_take_calls.is_some(),
            seats: self.seats.trim().to_owned(),
            coffee_price: self.coffee_price.trim().to_owned(),
        })
    }
}

fn checkbox(checked: bool) -> Option<String> {
    checked.then(|| CHECKED.to_string())
}

/// Absolute http(s) link whose host is an IP address or a domain with a TLD
fn is_web_url(value: &str) -> bool {
    let Ok(url) = Url::parse(value) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    match url.host() {
        Some(Host::Domain(domain)) => has_tld(domain),
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        None => false,
    }
}

fn has_tld(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    let labels: Vec<&str> = domain.split('.').collect();
    let Some((tld, rest)) = labels.split_last() else {
        return false;
    };
    if rest.is_empty() || labels.iter().any(|label| label.is_empty()) {
        return false;
    }
    tld.starts_with("xn--") || (tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> CafeForm {
        CafeForm {
            name: "Joe's".into(),
            map_url: "https://maps.example/1".into(),
            img_url: "https://img.example/1.png".into(),
            location: "Downtown".into(),
            has_sockets: Some("y".into()),
            has_toilet: Some("y".into()),
            has_wifi: Some("on".into()),
            can_take_calls: Some("y".into()),
            seats: "10-20".into(),
            coffee_price: "£2.50".into(),
        }
    }

    #[test]
    fn test_valid_form_builds_fields() {
        let fields = valid_form().validate().unwrap();
        assert_eq!(fields.name, "Joe's");
        assert_eq!(fields.map_url, "https://maps.example/1");
        assert!(fields.has_sockets && fields.has_toilet && fields.has_wifi && fields.can_take_calls);
        assert_eq!(fields.coffee_price, "£2.50");
    }

    #[test]
    fn test_values_are_trimmed() {
        let mut form = valid_form();
        form.name = "  Joe's \n".into();
        assert_eq!(form.validate().unwrap().name, "Joe's");
    }

    #[test]
    fn test_map_url_must_be_url() {
        let mut form = valid_form();
        form.map_url = "not a url".into();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(CafeField::MapUrl), [INVALID_URL_MESSAGE.to_string()]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_img_url_must_be_url() {
        let mut form = valid_form();
        form.img_url = "img.example/1.png".into();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(CafeField::ImgUrl), [INVALID_URL_MESSAGE.to_string()]);
    }

    #[test]
    fn test_blank_fields_are_required() {
        let mut form = valid_form();
        form.name = "   ".into();
        form.seats = String::new();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(CafeField::Name), [REQUIRED_MESSAGE.to_string()]);
        assert_eq!(errors.get(CafeField::Seats), [REQUIRED_MESSAGE.to_string()]);
        assert!(errors.get(CafeField::Location).is_empty());
    }

    #[test]
    fn test_blank_url_reports_required_only() {
        let mut form = valid_form();
        form.map_url = String::new();

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(CafeField::MapUrl), [REQUIRED_MESSAGE.to_string()]);
    }

    #[test]
    fn test_unticked_checkbox_is_required() {
        let mut form = valid_form();
        form.has_toilet = None;

        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(CafeField::HasToilet), [REQUIRED_MESSAGE.to_string()]);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_empty_form_fails_every_field() {
        let errors = CafeForm::default().validate().unwrap_err();
        assert_eq!(errors.len(), CafeField::ALL.len());
    }

    #[test]
    fn test_too_long_text() {
        let mut form = valid_form();
        form.location = "x".repeat(MAX_TEXT_LEN + 1);

        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(CafeField::Location),
            ["Field cannot be longer than 250 characters.".to_string()]
        );
    }

    #[test]
    fn test_from_record_prefills() {
        let cafe = Cafe {
            id: 3,
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
        };

        let form = CafeForm::from_record(&cafe);
        assert_eq!(form.text(CafeField::Location), "Downtown");
        assert!(form.is_checked(CafeField::HasSockets));
        assert!(!form.is_checked(CafeField::HasToilet));
        assert_eq!(form.has_toilet, None);
        assert_eq!(form.coffee_price, "£2.50");
    }

    #[test]
    fn test_non_web_links_are_rejected() {
        for link in [
            "javascript:alert(1)",
            "javascript://maps.example/%0Aalert(1)",
            "foo:bar",
            "mailto:joe@maps.example",
            "ftp://maps.example/1",
            "http://localhost",
            "http://localhost:5000/map",
            "https://maps.example1/1",
            "https:///nohost",
        ] {
            let mut form = valid_form();
            form.map_url = link.into();

            let errors = form.validate().unwrap_err();
            assert_eq!(
                errors.get(CafeField::MapUrl),
                [INVALID_URL_MESSAGE.to_string()],
                "{link}"
            );
        }
    }

    #[test]
    fn test_web_links_are_accepted() {
        for link in [
            "http://maps.example",
            "https://www.google.com/maps/place/Joe's",
            "HTTPS://Maps.Example./1?q=a",
            "http://192.168.1.10/map",
            "https://xn--caf-dma.xn--p1ai/",
        ] {
            let mut form = valid_form();
            form.img_url = link.into();
            assert!(form.validate().is_ok(), "{link}");
        }
    }

    #[test]
    fn test_checkbox_value_is_irrelevant() {
        let form: CafeForm = serde_json::from_value(serde_json::json!({
            "name": "Joe's",
            "has_wifi": "whatever",
        }))
        .unwrap();
        assert!(form.is_checked(CafeField::HasWifi));
        assert!(!form.is_checked(CafeField::HasSockets));
        assert_eq!(form.map_url, "");
    }
}
