use crate::model::Analytics;

#[derive(Clone, PartialEq, Debug)]
pub struct Bar {
    pub label: String,
    pub value: f64,
    /// Width relative to the largest bar, 0..=100.
    pub percent: u32,
}

#[derive(Clone, PartialEq, Debug)]
pub struct BarChart {
    pub title: &'static str,
    pub series: &'static str,
    pub bars: Vec<Bar>,
}

fn chart(title: &'static str, series: &'static str, points: Vec<(String, f64)>) -> BarChart {
    let max = points.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let bars = points
        .into_iter()
        .map(|(label, value)| {
            let percent = if max > 0.0 {
                (value.max(0.0) / max * 100.0).round() as u32
            } else {
                0
            };
            Bar {
                label,
                value,
                percent,
            }
        })
        .collect();
    BarChart {
        title,
        series,
        bars,
    }
}

pub fn top_products_chart(analytics: &Analytics) -> BarChart {
    chart(
        "Top Selling Products",
        "Units sold",
        analytics
            .top_products
            .iter()
            .map(|p| (format!("{} ({})", p.name, p.category), p.sales))
            .collect(),
    )
}

pub fn category_chart(analytics: &Analytics) -> BarChart {
    chart(
        "Sales by Category",
        "Products",
        analytics
            .categories
            .iter()
            .map(|c| (c.name.clone(), c.count))
            .collect(),
    )
}

pub fn monthly_sales_chart(analytics: &Analytics) -> BarChart {
    chart(
        "Monthly Sales Trend",
        "Units sold",
        analytics
            .monthly_sales
            .iter()
            .map(|m| (m.month.clone(), m.total))
            .collect(),
    )
}

pub fn inventory_chart(analytics: &Analytics) -> BarChart {
    chart(
        "Inventory Levels",
        "Units available",
        analytics
            .inventory
            .iter()
            .map(|p| (format!("{} ({})", p.name, p.category), p.inventory))
            .collect(),
    )
}

/// Whole numbers print with thousands separators and no fraction.
pub fn format_quantity(value: f64) -> String {
    if value.fract() != 0.0 {
        return format!("{:.2}", value);
    }
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
