//! Fixture dataset behind the dashboard panels

/// Month labels for the yearly series
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Headline metric card (customers, orders)
#[derive(Debug, Clone)]
pub struct Metric {
    pub label: &'static str,
    pub value: u64,
    /// Percent change against the previous month, signed
    pub delta_pct: f64,
}

impl Metric {
    pub fn delta_label(&self) -> String {
        format!("{:+.2}%", self.delta_pct)
    }

    pub fn is_up(&self) -> bool {
        self.delta_pct >= 0.0
    }
}

/// Monthly revenue target panel
#[derive(Debug, Clone)]
pub struct MonthlyTarget {
    pub progress_pct: f64,
    pub delta_pct: f64,
    pub summary: &'static str,
    pub target_usd: u64,
    pub revenue_usd: u64,
    pub today_usd: u64,
}

impl MonthlyTarget {
    /// Progress as a gauge ratio in [0, 1]
    pub fn ratio(&self) -> f64 {
        (self.progress_pct / 100.0).clamp(0.0, 1.0)
    }
}

/// Yearly sales and revenue curves
#[derive(Debug, Clone)]
pub struct Statistics {
    pub sales: [u64; 12],
    pub revenue: [u64; 12],
}

/// Customers per country for the demographics panel
#[derive(Debug, Clone)]
pub struct CountryShare {
    pub country: &'static str,
    pub customers: u64,
    pub share_pct: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    Delivered,
    Pending,
    Canceled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Pending => "Pending",
            OrderStatus::Canceled => "Canceled",
        }
    }
}

/// Row of the recent-orders table
#[derive(Debug, Clone)]
pub struct Order {
    pub product: &'static str,
    pub variants: u8,
    pub category: &'static str,
    pub price_usd: f64,
    pub status: OrderStatus,
}

/// Everything the home view renders. Constructed once, never mutated.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub metrics: Vec<Metric>,
    pub monthly_sales: [u64; 12],
    pub target: MonthlyTarget,
    pub statistics: Statistics,
    pub demographics: Vec<CountryShare>,
    pub recent_orders: Vec<Order>,
}

impl DashboardData {
    pub fn demo() -> Self {
        Self {
            metrics: vec![
                Metric {
                    label: "Customers",
                    value: 3_782,
                    delta_pct: 11.01,
                },
                Metric {
                    label: "Orders",
                    value: 5_359,
                    delta_pct: -9.05,
                },
            ],
            monthly_sales: [168, 385, 201, 298, 187, 195, 291, 110, 215, 390, 280, 112],
            target: MonthlyTarget {
                progress_pct: 75.55,
                delta_pct: 10.0,
                summary: "You earn $3287 today, it's higher than last month. \
                          Keep up your good work!",
                target_usd: 20_000,
                revenue_usd: 20_000,
                today_usd: 20_000,
            },
            statistics: Statistics {
                sales: [180, 190, 170, 160, 175, 165, 170, 205, 230, 210, 240, 235],
                revenue: [40, 30, 50, 40, 55, 40, 70, 100, 110, 120, 150, 140],
            },
            demographics: vec![
                CountryShare {
                    country: "USA",
                    customers: 2_379,
                    share_pct: 79,
                },
                CountryShare {
                    country: "France",
                    customers: 589,
                    share_pct: 23,
                },
            ],
            recent_orders: vec![
                Order {
                    product: "MacBook Pro 13\"",
                    variants: 2,
                    category: "Laptop",
                    price_usd: 2399.00,
                    status: OrderStatus::Delivered,
                },
                Order {
                    product: "Apple Watch Ultra",
                    variants: 1,
                    category: "Watch",
                    price_usd: 879.00,
                    status: OrderStatus::Pending,
                },
                Order {
                    product: "iPhone 15 Pro Max",
                    variants: 2,
                    category: "SmartPhone",
                    price_usd: 1869.00,
                    status: OrderStatus::Delivered,
                },
                Order {
                    product: "iPad Pro 3rd Gen",
                    variants: 2,
                    category: "Electronics",
                    price_usd: 1699.00,
                    status: OrderStatus::Canceled,
                },
                Order {
                    product: "AirPods Pro 2nd Gen",
                    variants: 1,
                    category: "Accessories",
                    price_usd: 240.00,
                    status: OrderStatus::Delivered,
                },
            ],
        }
    }
}

/// Format a count with thousands separators ("3782" -> "3,782")
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_inserts_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(3_782), "3,782");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_demo_metrics_present() {
        let data = DashboardData::demo();
        assert_eq!(data.metrics.len(), 2);
        assert!(data.metrics[0].is_up());
        assert!(!data.metrics[1].is_up());
        assert_eq!(data.metrics[0].delta_label(), "+11.01%");
        assert_eq!(data.metrics[1].delta_label(), "-9.05%");
    }

    #[test]
    fn test_demo_target_ratio_within_bounds() {
        let target = DashboardData::demo().target;
        assert!(target.ratio() > 0.0);
        assert!(target.ratio() <= 1.0);
    }

    #[test]
    fn test_demo_series_have_no_empty_months() {
        let data = DashboardData::demo();
        assert!(data.monthly_sales.iter().all(|v| *v > 0));
        assert!(data.statistics.sales.iter().all(|v| *v > 0));
        assert!(data.statistics.revenue.iter().all(|v| *v > 0));
    }

    #[test]
    fn test_demo_demographics_shares_within_bounds() {
        let data = DashboardData::demo();
        assert!(!data.demographics.is_empty());
        assert!(data.demographics.iter().all(|c| c.share_pct <= 100));
    }

    #[test]
    fn test_demo_orders_are_renderable() {
        let data = DashboardData::demo();
        assert!(!data.recent_orders.is_empty());
        assert!(data.recent_orders.iter().all(|o| o.price_usd > 0.0));
        assert!(data.recent_orders.iter().all(|o| o.variants > 0));
    }

    #[test]
    fn test_order_status_labels() {
        assert_eq!(OrderStatus::Delivered.label(), "Delivered");
        assert_eq!(OrderStatus::Pending.label(), "Pending");
        assert_eq!(OrderStatus::Canceled.label(), "Canceled");
    }
}
