//! Backend API Wrappers
//!
//! One async function per backend endpoint. The backend reports application
//! errors as JSON bodies (`status: "error"`), including on non-2xx responses,
//! so every call decodes the body and leaves status branching to the caller.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::models::{CartMutation, CartSnapshot, EditContract, EditDraft, EditStatus};

/// Characters escaped in form values; mirrors `encodeURIComponent`, which
/// leaves `A-Z a-z 0-9 - _ . ! ~ * ' ( )` intact.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn form_encode(value: &str) -> String {
    utf8_percent_encode(value, FORM_VALUE).to_string()
}

fn add_body(item_name: &str) -> String {
    format!("item_name={}", form_encode(item_name))
}

fn delete_body(cart_line_id: u32) -> String {
    format!("item_id={}", cart_line_id)
}

fn js_err(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

/// Issue a request and decode the JSON body into `T`
async fn request_json<T: DeserializeOwned>(
    url: &str,
    method: &str,
    content_type: Option<&str>,
    body: Option<String>,
) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method(method);
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_err)?;
    if let Some(content_type) = content_type {
        request
            .headers()
            .set("Content-Type", content_type)
            .map_err(js_err)?;
    }

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_err)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not yield a Response".to_string())?;
    let body: js_sys::Promise = resp.json().map_err(js_err)?;
    let json = JsFuture::from(body).await.map_err(js_err)?;
    serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())
}

// ========================
// Cart Endpoints
// ========================

pub async fn add_to_cart(item_name: &str) -> Result<CartMutation, String> {
    request_json(
        "/add-to-cart",
        "POST",
        Some("application/x-www-form-urlencoded"),
        Some(add_body(item_name)),
    )
    .await
}

pub async fn delete_from_cart(cart_line_id: u32) -> Result<CartMutation, String> {
    request_json(
        "/delete-from-cart",
        "POST",
        Some("application/x-www-form-urlencoded"),
        Some(delete_body(cart_line_id)),
    )
    .await
}

pub async fn get_cart() -> Result<CartSnapshot, String> {
    request_json("/get-cart", "GET", None, None).await
}

// ========================
// Item Endpoints
// ========================

pub async fn edit_item(
    item_id: u32,
    draft: &EditDraft,
    contract: &EditContract,
) -> Result<EditStatus, String> {
    let body = draft.to_payload(contract).to_string();
    request_json(
        &format!("/edit-item/{}", item_id),
        "PUT",
        Some("application/json"),
        Some(body),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_encode_matches_encode_uri_component() {
        assert_eq!(form_encode("Pliers"), "Pliers");
        assert_eq!(form_encode("Duct Tape & Glue"), "Duct%20Tape%20%26%20Glue");
        assert_eq!(form_encode("50%_off=deal"), "50%25_off%3Ddeal");
        // encodeURIComponent leaves these alone
        assert_eq!(form_encode("it's-a_thing.!~*()"), "it's-a_thing.!~*()");
    }

    #[test]
    fn test_mutation_bodies() {
        assert_eq!(add_body("Pliers"), "item_name=Pliers");
        assert_eq!(add_body("Duct Tape"), "item_name=Duct%20Tape");
        assert_eq!(delete_body(7), "item_id=7");
    }
}
