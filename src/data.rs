//! Compiled-in sample datasets.
//!
//! Every record here is immutable and handed to the UI by reference; the
//! numbers are illustrative sample data, not live metrics.

use crate::ui::glyphs::Glyph;
use serde::Serialize;

/// Opaque `#RRGGBB` colour token. Converted to a terminal colour only when a
/// style is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HexColor(pub &'static str);

/// A change indicator that is a compile-time constant. It is never derived
/// from the numbers displayed next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PlaceholderTrend(pub &'static str);

/// Audience size on one platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlatformAudience {
    pub platform_name: &'static str,
    pub follower_count: u64,
    pub accent_color: HexColor,
    /// Path-like asset reference, resolved by the host and never validated here.
    pub logo_ref: &'static str,
}

/// Engagement totals for one period. Slice order is chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngagementSample {
    pub period: &'static str,
    pub likes: u64,
    pub comments: u64,
    pub shares: u64,
}

/// One wedge of the platform breakdown. Percentages conventionally sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownSlice {
    pub category_name: &'static str,
    pub percentage: f64,
    pub accent_color: HexColor,
}

/// A headline statistic shown in a metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MetricSpec {
    pub glyph: Glyph,
    pub glyph_color: HexColor,
    pub label: &'static str,
    pub value: &'static str,
    pub change: PlaceholderTrend,
}

/// Borrowed view over the datasets a dashboard renders.
#[derive(Debug, Clone, Copy)]
pub struct DashboardData<'a> {
    pub metrics: &'a [MetricSpec],
    pub audience: &'a [PlatformAudience],
    pub breakdown: &'a [BreakdownSlice],
}

impl DashboardData<'static> {
    /// The compiled-in sample data.
    pub fn sample() -> Self {
        Self {
            metrics: KEY_METRICS,
            audience: AUDIENCE_DATA,
            breakdown: PLATFORM_BREAKDOWN,
        }
    }
}

/// Trend badge shown on every platform follower card.
pub const FOLLOWER_TREND: PlaceholderTrend = PlaceholderTrend("+8.5%");

pub const AUDIENCE_DATA: &[PlatformAudience] = &[
    PlatformAudience {
        platform_name: "Instagram",
        follower_count: 50_000,
        accent_color: HexColor("#E1306C"),
        logo_ref: "assets/instagram.png",
    },
    PlatformAudience {
        platform_name: "Facebook",
        follower_count: 45_210,
        accent_color: HexColor("#4267B2"),
        logo_ref: "assets/facebook.png",
    },
    PlatformAudience {
        platform_name: "Twitter",
        follower_count: 32_101,
        accent_color: HexColor("#1DA1F2"),
        logo_ref: "assets/twitter.png",
    },
    PlatformAudience {
        platform_name: "LinkedIn",
        follower_count: 21_230,
        accent_color: HexColor("#0A66C2"),
        logo_ref: "assets/linkedin.png",
    },
];

pub const ENGAGEMENT_DATA: &[EngagementSample] = &[
    EngagementSample {
        period: "Jan",
        likes: 4000,
        comments: 2400,
        shares: 2400,
    },
    EngagementSample {
        period: "Feb",
        likes: 3000,
        comments: 1398,
        shares: 2210,
    },
    EngagementSample {
        period: "Mar",
        likes: 2000,
        comments: 9800,
        shares: 2290,
    },
    EngagementSample {
        period: "Apr",
        likes: 2780,
        comments: 3908,
        shares: 2000,
    },
    EngagementSample {
        period: "May",
        likes: 1890,
        comments: 4800,
        shares: 2181,
    },
];

pub const PLATFORM_BREAKDOWN: &[BreakdownSlice] = &[
    BreakdownSlice {
        category_name: "Instagram",
        percentage: 40.0,
        accent_color: HexColor("#E1306C"),
    },
    BreakdownSlice {
        category_name: "Facebook",
        percentage: 30.0,
        accent_color: HexColor("#4267B2"),
    },
    BreakdownSlice {
        category_name: "Twitter",
        percentage: 20.0,
        accent_color: HexColor("#1DA1F2"),
    },
    BreakdownSlice {
        category_name: "LinkedIn",
        percentage: 10.0,
        accent_color: HexColor("#0A66C2"),
    },
];

pub const KEY_METRICS: &[MetricSpec] = &[
    MetricSpec {
        glyph: Glyph::People,
        glyph_color: HexColor("#3B82F6"),
        label: "Total Followers",
        value: "158,200",
        change: PlaceholderTrend("+12.5%"),
    },
    MetricSpec {
        glyph: Glyph::Message,
        glyph_color: HexColor("#22C55E"),
        label: "Total Interactions",
        value: "456,789",
        change: PlaceholderTrend("+8.3%"),
    },
    MetricSpec {
        glyph: Glyph::Heart,
        glyph_color: HexColor("#EF4444"),
        label: "Total Likes",
        value: "234,567",
        change: PlaceholderTrend("+15.2%"),
    },
    MetricSpec {
        glyph: Glyph::Share,
        glyph_color: HexColor("#A855F7"),
        label: "Total Shares",
        value: "87,654",
        change: PlaceholderTrend("+9.7%"),
    },
];

/// Every dataset, in the shape printed by the `data` subcommand.
#[derive(Debug, Serialize)]
pub struct DatasetExport<'a> {
    pub audience: &'a [PlatformAudience],
    pub engagement: &'a [EngagementSample],
    pub breakdown: &'a [BreakdownSlice],
    pub key_metrics: &'a [MetricSpec],
}

impl DatasetExport<'static> {
    pub fn sample() -> Self {
        Self {
            audience: AUDIENCE_DATA,
            engagement: ENGAGEMENT_DATA,
            breakdown: PLATFORM_BREAKDOWN,
            key_metrics: KEY_METRICS,
        }
    }
}
