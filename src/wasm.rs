//! WebAssembly entry point for the rendering layer.

use crate::content::{ContentItem, ItemRecord};
use crate::generator::{BlueprintRunner, GeneratorConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Generates a blueprint from a configuration object (any subset of
/// `GeneratorConfig`, `undefined` for defaults) and an array of item
/// records. Returns the blueprint as a plain JS object.
#[wasm_bindgen(js_name = generateBlueprint)]
pub fn generate_blueprint(config: JsValue, items: JsValue) -> Result<JsValue, JsError> {
    let config: GeneratorConfig = if config.is_undefined() || config.is_null() {
        GeneratorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    let records: Vec<ItemRecord> = serde_wasm_bindgen::from_value(items)?;
    let items = records
        .into_iter()
        .map(ContentItem::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let result = BlueprintRunner::run(&items, &config)?;

    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(result.blueprint.serialize(&serializer)?)
}
