use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranslateOutput {
    html: String,
    diagnostics: Vec<JsDiagnostic>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDiagnostic {
    code: String,
    message: String,
    severity: String,
    range: JsRange,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsRange {
    start_line: usize,
    start_col: usize,
    end_line: usize,
    end_col: usize,
}

#[wasm_bindgen]
pub fn translate(source: &str) -> Result<JsValue, JsValue> {
    let result = aml_core::translate_full(source);

    let diagnostics = result
        .diagnostics
        .into_iter()
        .map(|diag| JsDiagnostic {
            code: diag.code.to_string(),
            message: diag.message,
            severity: match diag.severity {
                aml_core::DiagnosticSeverity::Error => "error".to_string(),
                aml_core::DiagnosticSeverity::Warning => "warning".to_string(),
            },
            range: JsRange {
                start_line: diag.range.start.line,
                start_col: diag.range.start.character,
                end_line: diag.range.end.line,
                end_col: diag.range.end.character,
            },
        })
        .collect();

    let output = TranslateOutput {
        html: result.html,
        diagnostics,
    };
    serde_wasm_bindgen::to_value(&output).map_err(|err| JsValue::from_str(&err.to_string()))
}

#[wasm_bindgen]
pub fn translate_sanitized(source: &str) -> String {
    aml_core::translate_sanitized(source)
}
