// Trigonometric evaluations of the input
use crate::models::TrigReport;

/// Evaluate sine/cosine/tangent of n twice, once reading n as degrees
/// and once as radians, plus both unit conversions of n itself. Total
/// over all inputs; tangent near its poles yields whatever f64 produces.
pub fn evaluate(n: i128) -> TrigReport {
    let v = n as f64;
    let radians = v.to_radians();
    TrigReport {
        sin_deg: radians.sin(),
        cos_deg: radians.cos(),
        tan_deg: radians.tan(),
        sin_rad: v.sin(),
        cos_rad: v.cos(),
        tan_rad: v.tan(),
        deg_to_rad: radians,
        rad_to_deg: v.to_degrees(),
    }
}
