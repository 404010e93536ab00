//! Bootstrap Payload
//!
//! The host page embeds the initial shopping-list as JSON in a
//! `<script id="initial-items" type="application/json">` tag. A missing or
//! malformed payload logs a diagnostic and yields an empty list; the rest of
//! the page keeps working.

use crate::models::Item;

pub const BOOTSTRAP_ELEMENT_ID: &str = "initial-items";

/// Parse the embedded JSON payload
pub fn parse_initial_items(raw: &str) -> Result<Vec<Item>, String> {
    serde_json::from_str(raw).map_err(|e| e.to_string())
}

/// Read the initial item list from the page, or empty on any failure
pub fn read_initial_items() -> Vec<Item> {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(BOOTSTRAP_ELEMENT_ID));

    let Some(element) = element else {
        web_sys::console::error_1(
            &format!("[BOOT] #{} not found, starting empty", BOOTSTRAP_ELEMENT_ID).into(),
        );
        return Vec::new();
    };

    match parse_initial_items(&element.text_content().unwrap_or_default()) {
        Ok(items) => {
            web_sys::console::log_1(&format!("[BOOT] Loaded {} items", items.len()).into());
            items
        }
        Err(e) => {
            web_sys::console::error_1(&format!("[BOOT] Bad item payload: {}", e).into());
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_item_payload() {
        let raw = r#"[
            {"id":3,"item_name":"Pliers","category":"tools","quantity":5,"price":9.99},
            {"id":4,"item_name":"Bread","category":"food","quantity":2,"price":null}
        ]"#;
        let items = parse_initial_items(raw).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_name, "Pliers");
        assert_eq!(items[0].price, Some(9.99));
        assert_eq!(items[1].price, None);
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(parse_initial_items("[]").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(parse_initial_items("{not json").is_err());
        assert!(parse_initial_items(r#"{"id":1}"#).is_err());
    }
}
