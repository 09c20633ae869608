pub const ROW_UNIT_PX: f64 = 1.0;
pub const ROW_GAP_FALLBACK_PX: f64 = 16.0;

/// Number of grid row units a tile of the given rendered height occupies.
/// One unit is `ROW_UNIT_PX` tall and consecutive units are `row_gap_px` apart.
pub fn row_span(height_px: f64, row_gap_px: f64) -> u32 {
    let stride = ROW_UNIT_PX + row_gap_px;
    if stride <= 0.0 {
        return 1;
    }
    let span = ((height_px + row_gap_px) / stride).ceil();
    if span.is_finite() && span >= 1.0 {
        span as u32
    } else {
        1
    }
}

/// Leading pixel quantity of a computed `gap` value ("16px", "12.5px 24px").
/// Keywords such as "normal" carry no usable length and yield `None`.
pub fn parse_gap_px(value: &str) -> Option<f64> {
    let token = value.split_whitespace().next()?;
    let end = token
        .char_indices()
        .find(|(_, ch)| !ch.is_ascii_digit() && *ch != '.')
        .map(|(idx, _)| idx)
        .unwrap_or(token.len());
    if end == 0 {
        return None;
    }
    token[..end].parse::<f64>().ok().filter(|px| px.is_finite())
}

pub fn gap_from_style(value: Option<&str>) -> f64 {
    value.and_then(parse_gap_px).unwrap_or(ROW_GAP_FALLBACK_PX)
}
