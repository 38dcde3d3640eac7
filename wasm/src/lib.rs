use dtmfgeo_core::{CodecError, Decoder, Encoder};
use wasm_bindgen::prelude::*;

fn to_js(e: CodecError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct WasmEncoder {
    inner: Encoder,
}

#[wasm_bindgen]
impl WasmEncoder {
    #[wasm_bindgen(constructor)]
    pub fn new(checksum_length: usize) -> Result<WasmEncoder, JsValue> {
        Encoder::new(checksum_length)
            .map(|encoder| WasmEncoder { inner: encoder })
            .map_err(to_js)
    }

    /// Encode numeric degrees at fixed precision
    #[wasm_bindgen]
    pub fn encode(&self, latitude: f64, longitude: f64) -> Result<String, JsValue> {
        self.inner.encode((latitude, longitude)).map_err(to_js)
    }

    /// Encode decimal strings exactly as written
    #[wasm_bindgen(js_name = encodeText)]
    pub fn encode_text(&self, latitude: &str, longitude: &str) -> Result<String, JsValue> {
        self.inner.encode((latitude, longitude)).map_err(to_js)
    }
}

#[wasm_bindgen]
pub struct WasmDecoder {
    inner: Decoder,
}

#[wasm_bindgen]
impl WasmDecoder {
    #[wasm_bindgen(constructor)]
    pub fn new(checksum_length: usize) -> Result<WasmDecoder, JsValue> {
        Decoder::new(checksum_length)
            .map(|decoder| WasmDecoder { inner: decoder })
            .map_err(to_js)
    }

    /// Decode a keypad sequence (e.g. from a tone detector) into `[latitude, longitude]`
    #[wasm_bindgen]
    pub fn decode(&self, payload: &str) -> Result<Vec<f64>, JsValue> {
        self.inner
            .decode(payload)
            .map(|c| vec![c.latitude, c.longitude])
            .map_err(to_js)
    }
}
