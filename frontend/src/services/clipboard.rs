use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

/// Write `text` to the system clipboard. Uses `navigator.clipboard` where the
/// page is a secure context, else a hidden textarea and the `copy` command.
pub async fn copy_text(text: &str) -> Result<(), String> {
    match copy_with_clipboard_api(text).await {
        Ok(()) => Ok(()),
        Err(e) => {
            gloo::console::debug!(format!("Clipboard API unavailable ({}), using copy command", e));
            copy_with_textarea(text)
        }
    }
}

async fn copy_with_clipboard_api(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let navigator = window.navigator();

    // Absent on plain http origins
    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard")).map_err(describe)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("Clipboard is not available in this browser".to_string());
    }

    let write_text = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(describe)?
        .dyn_into::<Function>()
        .map_err(describe)?;
    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(describe)?
        .dyn_into::<Promise>()
        .map_err(describe)?;

    JsFuture::from(promise).await.map_err(describe)?;
    Ok(())
}

/// Select `text` in a temporary off-screen textarea and run `copy`. The
/// textarea is always removed again.
pub fn copy_with_textarea(text: &str) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| "No document available".to_string())?;
    let body = document
        .body()
        .ok_or_else(|| "Document has no body".to_string())?;

    let textarea = document
        .create_element("textarea")
        .map_err(describe)?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|element| describe(element.into()))?;
    textarea.set_value(text);
    textarea
        .set_attribute("readonly", "")
        .map_err(describe)?;
    textarea
        .set_attribute("style", "position:fixed;top:0;left:-9999px;")
        .map_err(describe)?;

    body.append_child(&textarea).map_err(describe)?;
    textarea.select();
    let copied = match document.dyn_ref::<HtmlDocument>() {
        Some(html) => html.exec_command("copy").map_err(describe),
        None => Err("Document does not support the copy command".to_string()),
    };
    let _ = body.remove_child(&textarea);

    if copied? {
        Ok(())
    } else {
        Err("Browser refused the copy command".to_string())
    }
}

fn describe(value: JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_textarea_copy_cleans_up() {
        let document = web_sys::window().unwrap().document().unwrap();
        let before = document.get_elements_by_tag_name("textarea").length();

        // Headless browsers may refuse `copy`; either way the node must go
        let _ = copy_with_textarea("Total 120");

        let after = document.get_elements_by_tag_name("textarea").length();
        assert_eq!(before, after);
    }

    #[wasm_bindgen_test]
    async fn test_copy_text_settles_without_panicking() {
        // Outcome depends on browser permissions; both paths must return
        let _ = copy_text("Total 120").await;
    }
}
