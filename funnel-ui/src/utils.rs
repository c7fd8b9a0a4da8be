/// Formats a stored step value as editable text for the input field.
///
/// Whole numbers print without a fraction (`40`, not `40.0`). Infinite values
/// print as `Infinity` / `-Infinity`, which the lenient policy reads back.
pub fn format_input_value(value: f64) -> String {
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        // Avoids "-0".
        return "0".to_string();
    }
    value.to_string()
}
