// Decoding service implemented by a separate JS/WASM module.
//
// The page must expose it as `window.chessDecoder` with functions `init()`,
// `decode_moves(compressed)` and `get_fen(game_config)`. Each may return either a value or
// a promise; `decode_moves` and `get_fen` resolve to the envelope JSON string.

use async_trait::async_trait;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use chess_replay::DecodingService;

use crate::web_error_handling::describe_js_error;


#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = chessDecoder, js_name = init, catch)]
    fn decoder_init() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = chessDecoder, js_name = decode_moves, catch)]
    fn decoder_decode_moves(compressed: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = chessDecoder, js_name = get_fen, catch)]
    fn decoder_get_fen(game_config: &str) -> Result<JsValue, JsValue>;
}

async fn resolve(result: Result<JsValue, JsValue>) -> Result<JsValue, String> {
    let value = result.map_err(|err| describe_js_error(&err))?;
    JsFuture::from(js_sys::Promise::resolve(&value))
        .await
        .map_err(|err| describe_js_error(&err))
}

async fn resolve_string(
    function: &str, result: Result<JsValue, JsValue>,
) -> Result<String, String> {
    resolve(result)
        .await?
        .as_string()
        .ok_or_else(|| format!("{function} returned a non-string value"))
}

pub struct JsDecodingService;

#[async_trait(?Send)]
impl DecodingService for JsDecodingService {
    async fn initialize(&self) -> Result<(), String> { resolve(decoder_init()).await.map(|_| ()) }

    async fn decode_moves(&self, compressed: &str) -> Result<String, String> {
        resolve_string("decode_moves", decoder_decode_moves(compressed)).await
    }

    async fn get_fen(&self, game_config: &str) -> Result<String, String> {
        resolve_string("get_fen", decoder_get_fen(game_config)).await
    }
}
