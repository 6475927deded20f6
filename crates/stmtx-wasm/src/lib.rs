//! WASM bindings for bank statement conversion.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! PDFs are read in the browser with pdf.js; its text items are fed to
//! [`PdfTextLayer`] page by page.

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use stmtx_core::models::config::SegmenterConfig;
use stmtx_core::models::row::ConversionStats;
use stmtx_core::{Conversion, KeywordConfig, StatementConverter, TextFragment, formats};

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Conversion result handed to JavaScript.
#[derive(Debug, Serialize)]
struct ConversionOutput {
    format_id: String,
    /// Header row first, then one row per transaction.
    table: Vec<Vec<String>>,
    warnings: Vec<String>,
    stats: ConversionStats,
}

impl From<Conversion> for ConversionOutput {
    fn from(conversion: Conversion) -> Self {
        Self {
            table: conversion.to_grid(),
            format_id: conversion.format_id,
            warnings: conversion.warnings,
            stats: conversion.stats,
        }
    }
}

fn to_js(conversion: Conversion) -> Result<JsValue, JsValue> {
    for warning in &conversion.warnings {
        web_sys::console::warn_1(&JsValue::from_str(warning));
    }

    serde_wasm_bindgen::to_value(&ConversionOutput::from(conversion))
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

fn converter_for(format_id: &str) -> Result<StatementConverter, JsValue> {
    StatementConverter::for_format_id(format_id).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert pasted statement text with the built-in keyword list.
///
/// `year` may be empty; otherwise it must be four digits.
#[wasm_bindgen]
pub fn convert_statement(format_id: &str, text: &str, year: Option<String>) -> Result<JsValue, JsValue> {
    let conversion = converter_for(format_id)?
        .convert(text, year.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    to_js(conversion)
}

/// List the supported statement formats as `{ id, bank, kind }` objects.
#[wasm_bindgen]
pub fn list_formats() -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&formats::infos()).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Registered format ids, in listing order.
#[wasm_bindgen]
pub fn format_ids() -> js_sys::Array {
    formats::ids().into_iter().map(JsValue::from_str).collect()
}

/// Statement converter class for browser use.
#[wasm_bindgen]
pub struct StatementConverterJs {
    converter: StatementConverter,
}

#[wasm_bindgen]
impl StatementConverterJs {
    /// Create a converter for a format id.
    #[wasm_bindgen(constructor)]
    pub fn new(format_id: &str) -> Result<StatementConverterJs, JsValue> {
        Ok(Self {
            converter: converter_for(format_id)?,
        })
    }

    /// Format id this converter was built for.
    #[wasm_bindgen(getter)]
    pub fn format_id(&self) -> String {
        self.converter.format().id.to_string()
    }

    /// Replace the keyword lists with a `{ "debit": [...], "credit": [...] }`
    /// document.
    #[wasm_bindgen]
    pub fn set_keywords(&mut self, json: &str) -> Result<(), JsValue> {
        let keywords = KeywordConfig::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.converter.set_keywords(keywords);
        Ok(())
    }

    /// Line reconstruction tolerances for [`PdfTextLayer`] input.
    #[wasm_bindgen]
    pub fn set_segmenter(&mut self, y_tolerance: f32, gap_factor: f32) {
        self.converter = self.converter.clone().with_segmenter_config(SegmenterConfig {
            y_tolerance,
            gap_factor,
        });
    }

    /// Convert statement text.
    #[wasm_bindgen]
    pub fn convert(&self, text: &str, year: Option<String>) -> Result<JsValue, JsValue> {
        let conversion = self
            .converter
            .convert(text, year.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        to_js(conversion)
    }

    /// Convert the pages collected in a text layer.
    #[wasm_bindgen]
    pub fn convert_pdf_text(&self, layer: &PdfTextLayer, year: Option<String>) -> Result<JsValue, JsValue> {
        let conversion = self
            .converter
            .convert_fragments(&layer.pages, year.as_deref())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        to_js(conversion)
    }
}

/// A pdf.js text item. Marked-content entries carry no `str` and are skipped.
#[derive(Debug, Deserialize)]
struct PdfJsItem {
    #[serde(default)]
    str: String,
    #[serde(default)]
    transform: Vec<f32>,
    #[serde(default)]
    width: f32,
}

impl PdfJsItem {
    fn into_fragment(self) -> Option<TextFragment> {
        // transform is [a, b, c, d, e, f]; e/f is the baseline origin
        let (x, y) = (*self.transform.get(4)?, *self.transform.get(5)?);
        if self.str.trim().is_empty() {
            return None;
        }
        Some(TextFragment::new(self.str, x, y, self.width))
    }
}

/// Positioned text of a PDF, collected page by page from pdf.js.
#[wasm_bindgen]
#[derive(Default)]
pub struct PdfTextLayer {
    pages: Vec<Vec<TextFragment>>,
}

#[wasm_bindgen]
impl PdfTextLayer {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one page from the `items` array of pdf.js `getTextContent()`.
    #[wasm_bindgen]
    pub fn add_page(&mut self, items: JsValue) -> Result<(), JsValue> {
        let items: Vec<PdfJsItem> =
            serde_wasm_bindgen::from_value(items).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.pages
            .push(items.into_iter().filter_map(PdfJsItem::into_fragment).collect());
        Ok(())
    }

    /// Start a new empty page for [`PdfTextLayer::add_fragment`].
    #[wasm_bindgen]
    pub fn begin_page(&mut self) {
        self.pages.push(Vec::new());
    }

    /// Add a single fragment to the current page.
    #[wasm_bindgen]
    pub fn add_fragment(&mut self, text: &str, x: f32, y: f32, width: f32) {
        if self.pages.is_empty() {
            self.pages.push(Vec::new());
        }
        if let Some(page) = self.pages.last_mut() {
            page.push(TextFragment::new(text, x, y, width));
        }
    }

    #[wasm_bindgen(getter)]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.pages.clear();
    }
}
