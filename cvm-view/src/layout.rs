//! Page layout: DOM ids, container sizes and chart margins.

/// Element holding the tooltip text.
pub const TOOLTIP_ID: &str = "tooltip";
/// Container whose rendered size determines the chart drawing area.
pub const LINE_CHART_ID: &str = "line-chart";

/// Map svg size.
pub const MAP_WIDTH: f64 = 800.0;
pub const MAP_HEIGHT: f64 = 550.0;

/// Used when the chart container cannot be measured.
pub const DEFAULT_CONTAINER: ContainerSize = ContainerSize {
    width: 800.0,
    height: 450.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Space around the chart for the axes.
pub const CHART_MARGIN: Margin = Margin {
    top: 20.0,
    right: 20.0,
    bottom: 50.0,
    left: 70.0,
};

/// Rendered size of a container element, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

/// Inner drawing area of the chart: the container minus the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartArea {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
}

impl ChartArea {
    pub fn from_container(container: ContainerSize, margin: Margin) -> Self {
        Self {
            width: (container.width - margin.left - margin.right).max(0.0),
            height: (container.height - margin.top - margin.bottom).max(0.0),
            margin,
        }
    }

    /// Full width including margins.
    pub fn outer_width(&self) -> f64 {
        self.width + self.margin.left + self.margin.right
    }

    /// Full height including margins.
    pub fn outer_height(&self) -> f64 {
        self.height + self.margin.top + self.margin.bottom
    }
}

/// Parse a computed CSS length such as "845.5px" the way `parseInt` does:
/// leading integer digits only.
pub fn parse_px(value: &str) -> Option<f64> {
    let value = value.trim();
    let (sign, digits) = match value.strip_prefix('-') {
        Some(rest) => (-1.0, rest),
        None => (1.0, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<f64>().ok().map(|v| sign * v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_area_subtracts_margins() {
        let area = ChartArea::from_container(
            ContainerSize {
                width: 800.0,
                height: 450.0,
            },
            CHART_MARGIN,
        );
        assert_eq!(area.width, 710.0);
        assert_eq!(area.height, 380.0);
        assert_eq!(area.outer_width(), 800.0);
        assert_eq!(area.outer_height(), 450.0);
    }

    #[test]
    fn test_chart_area_never_negative() {
        let area = ChartArea::from_container(
            ContainerSize {
                width: 50.0,
                height: 10.0,
            },
            CHART_MARGIN,
        );
        assert_eq!(area.width, 0.0);
        assert_eq!(area.height, 0.0);
    }

    #[test]
    fn test_parse_px() {
        assert_eq!(parse_px("845.5px"), Some(845.0));
        assert_eq!(parse_px("400px"), Some(400.0));
        assert_eq!(parse_px(" 12 "), Some(12.0));
        assert_eq!(parse_px("-3px"), Some(-3.0));
        assert_eq!(parse_px("auto"), None);
        assert_eq!(parse_px(""), None);
    }
}
