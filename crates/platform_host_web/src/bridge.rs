//! EIP-1193 transport to the injected `window.ethereum` provider.
//!
//! This module contains the WASM/JS interop layer and a non-WASM fallback that behaves like a
//! browser without a wallet extension.

use platform_host::WalletError;
use serde_json::Value;

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::*;
    use js_sys::Promise;
    use serde::Serialize;
    use serde_wasm_bindgen::{from_value, Serializer};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;

    #[wasm_bindgen(inline_js = r#"
function provider() {
  if (typeof window === 'undefined') {
    return null;
  }
  return window.ethereum ?? null;
}

export function jsEthereumPresent() {
  return provider() !== null;
}

export async function jsEthereumRequest(method, params) {
  const ethereum = provider();
  if (ethereum === null) {
    throw { code: 4900, message: 'window.ethereum is not available' };
  }
  return await ethereum.request({ method, params });
}
"#)]
    extern "C" {
        #[wasm_bindgen(js_name = jsEthereumPresent)]
        fn js_ethereum_present() -> bool;
        #[wasm_bindgen(js_name = jsEthereumRequest)]
        fn js_ethereum_request(method: &str, params: JsValue) -> Promise;
    }

    fn js_error_to_wallet_error(err: JsValue) -> WalletError {
        let code = js_sys::Reflect::get(&err, &JsValue::from_str("code"))
            .ok()
            .and_then(|code| code.as_f64());
        let message = js_sys::Reflect::get(&err, &JsValue::from_str("message"))
            .ok()
            .and_then(|message| message.as_string())
            .or_else(|| err.as_string())
            .unwrap_or_else(|| format!("{err:?}"));
        match code {
            Some(code) => WalletError::from_rpc_error(code as i64, &message),
            None => WalletError::NetworkUnavailable(message),
        }
    }

    pub fn ethereum_present() -> bool {
        js_ethereum_present()
    }

    pub async fn ethereum_request(method: &str, params: Value) -> Result<Value, WalletError> {
        if !js_ethereum_present() {
            return Err(WalletError::WalletUnavailable);
        }
        let params = params
            .serialize(&Serializer::json_compatible())
            .map_err(|e| WalletError::InvalidResponse(e.to_string()))?;
        let result = JsFuture::from(js_ethereum_request(method, params))
            .await
            .map_err(js_error_to_wallet_error)?;
        if result.is_null() || result.is_undefined() {
            return Ok(Value::Null);
        }
        from_value(result).map_err(|e| WalletError::InvalidResponse(e.to_string()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::*;

    pub fn ethereum_present() -> bool {
        false
    }

    pub async fn ethereum_request(_method: &str, _params: Value) -> Result<Value, WalletError> {
        Err(WalletError::WalletUnavailable)
    }
}

/// Returns whether `window.ethereum` is defined right now.
pub fn ethereum_present() -> bool {
    imp::ethereum_present()
}

/// Sends one EIP-1193 request and returns its JSON result.
pub async fn ethereum_request(method: &str, params: Value) -> Result<Value, WalletError> {
    imp::ethereum_request(method, params).await
}
