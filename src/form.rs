use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlFormElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// Field names checked first, in priority order.
pub const NAME_KEYS: [&str; 6] = [
    "name",
    "accountHolderName",
    "account_holder_name",
    "fullname",
    "fullName",
    "full_name",
];

const FIELD_SELECTOR: &str = "input,select,textarea";

/// What the extractor needs to know about one form control.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldSnapshot {
    pub id: String,
    pub name: String,
    pub placeholder: String,
    pub value: String,
}

impl FieldSnapshot {
    fn looks_like_name(&self) -> bool {
        [&self.id, &self.name, &self.placeholder]
            .iter()
            .any(|attr| attr.to_lowercase().contains("name"))
    }
}

/// Picks the submitted name out of the form controls (in document order).
///
/// Known keys win in priority order. Only the first control carrying a key is
/// consulted, like `FormData::get`. Failing that, any control whose id, name
/// or placeholder mentions "name" is taken. Returns an empty string when
/// nothing usable was typed.
pub fn extract_name(fields: &[FieldSnapshot]) -> String {
    for key in NAME_KEYS {
        if let Some(field) = fields.iter().find(|f| f.name == key) {
            let value = field.value.trim();
            if !value.is_empty() {
                return value.to_string();
            }
        }
    }

    fields
        .iter()
        .filter(|f| f.looks_like_name())
        .map(|f| f.value.trim())
        .find(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_default()
}

fn snapshot(element: &Element) -> Option<FieldSnapshot> {
    let (name, value) = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        (input.name(), input.value())
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        (select.name(), select.value())
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        (area.name(), area.value())
    } else {
        return None;
    };

    Some(FieldSnapshot {
        id: element.id(),
        name,
        placeholder: element.get_attribute("placeholder").unwrap_or_default(),
        value,
    })
}

pub fn snapshot_fields(form: &HtmlFormElement) -> Vec<FieldSnapshot> {
    let Ok(nodes) = form.query_selector_all(FIELD_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|el| snapshot(&el))
        .collect()
}

pub fn read_name(form: &HtmlFormElement) -> String {
    extract_name(&snapshot_fields(form))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: &str, name: &str, placeholder: &str, value: &str) -> FieldSnapshot {
        FieldSnapshot {
            id: id.to_string(),
            name: name.to_string(),
            placeholder: placeholder.to_string(),
            value: value.to_string(),
        }
    }

    #[test]
    fn known_key_is_preferred() {
        let fields = vec![
            field("nick", "nickname", "", "Nicky"),
            field("", "email", "", "ada@example.com"),
            field("", "name", "", "  Ada  "),
        ];
        assert_eq!(extract_name(&fields), "Ada");
    }

    #[test]
    fn keys_are_tried_in_priority_order() {
        let fields = vec![
            field("", "full_name", "", "Full Name"),
            field("", "accountHolderName", "", "Holder"),
        ];
        assert_eq!(extract_name(&fields), "Holder");
    }

    #[test]
    fn blank_known_key_falls_through() {
        let fields = vec![
            field("", "name", "", "   "),
            field("", "fullName", "", "Grace Hopper"),
        ];
        assert_eq!(extract_name(&fields), "Grace Hopper");
    }

    #[test]
    fn only_first_control_per_key_is_read() {
        let fields = vec![
            field("", "name", "", ""),
            field("", "name", "", "Second"),
        ];
        // The fallback scan still picks the second control up.
        assert_eq!(extract_name(&fields), "Second");
    }

    #[test]
    fn fallback_matches_id_name_or_placeholder() {
        let by_id = vec![field("signupUserName", "u", "", "Linus")];
        assert_eq!(extract_name(&by_id), "Linus");

        let by_placeholder = vec![
            field("", "email", "Email", "x@y.z"),
            field("", "q1", "Your NAME please", "Ken"),
        ];
        assert_eq!(extract_name(&by_placeholder), "Ken");

        let by_name = vec![field("", "displayName", "", " Barbara ")];
        assert_eq!(extract_name(&by_name), "Barbara");
    }

    #[test]
    fn nothing_usable_gives_empty() {
        assert_eq!(extract_name(&[]), "");
        let fields = vec![
            field("email", "email", "Email", "a@b.c"),
            field("name", "name", "Name", " "),
        ];
        assert_eq!(extract_name(&fields), "");
    }
}
