use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use wasm_bindgen::prelude::*;

// Wasm bindings to Tauri API
#[wasm_bindgen(inline_js = r#"
export async function tauriInvoke(cmd, args) {
  const g = globalThis.__TAURI__;
  if (g?.core?.invoke) return g.core.invoke(cmd, args);   // v2
  if (g?.tauri?.invoke) return g.tauri.invoke(cmd, args); // v1
  throw new Error('Tauri invoke is not available on this page');
}
"#)]
extern "C" {
    #[wasm_bindgen(catch, js_name = tauriInvoke)]
    async fn tauri_invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum InvokeError {
    /// The command was rejected, or no Tauri bridge is present.
    Rejected(String),
    /// Arguments or reply did not fit the expected shape.
    Decode(String),
}

impl fmt::Display for InvokeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvokeError::Rejected(msg) => write!(f, "{}", msg),
            InvokeError::Decode(msg) => write!(f, "malformed payload: {}", msg),
        }
    }
}

impl std::error::Error for InvokeError {}

/// Calls a Tauri command and decodes its reply.
pub async fn invoke<A, R>(cmd: &str, args: Option<&A>) -> Result<R, InvokeError>
where
    A: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let args = match args {
        Some(a) => serde_wasm_bindgen::to_value(a).map_err(|e| InvokeError::Decode(e.to_string()))?,
        None => JsValue::NULL,
    };
    let reply = tauri_invoke(cmd, args)
        .await
        .map_err(|e| InvokeError::Rejected(js_error_message(e)))?;
    serde_wasm_bindgen::from_value(reply).map_err(|e| InvokeError::Decode(format!("{cmd}: {e}")))
}

fn js_error_message(err: JsValue) -> String {
    if let Some(s) = err.as_string() {
        return s;
    }
    js_sys::Reflect::get(&err, &"message".into())
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

/// Blocking browser dialog.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        window.alert_with_message(message).ok();
    }
}
