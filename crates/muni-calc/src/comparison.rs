//! # Everyday-Purchase Comparisons
//!
//! Translates an abstract daily dollar figure into a familiar purchase
//! ("about the same as a cup of coffee"). The reference table is fixed —
//! the costs are deliberately round, recognizable 2024-ish US prices, not
//! live market data.

/// A reference purchase used for daily-amount comparisons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EverydayComparison {
    /// The item, phrased to follow an article ("a cup of coffee").
    pub item: &'static str,
    /// Typical cost in USD.
    pub cost: f64,
    /// Emoji tag for rendering layers.
    pub icon: &'static str,
}

/// The fixed comparison table. Order matters: when two entries are
/// equally close to the target amount, the first listed wins (movie
/// ticket over streaming subscription at $15).
pub const EVERYDAY_COMPARISONS: &[EverydayComparison] = &[
    EverydayComparison { item: "cup of coffee", cost: 3.50, icon: "☕" },
    EverydayComparison { item: "latte", cost: 5.50, icon: "☕" },
    EverydayComparison { item: "fast food meal", cost: 10.00, icon: "🍔" },
    EverydayComparison { item: "movie ticket", cost: 15.00, icon: "🎬" },
    EverydayComparison { item: "streaming subscription", cost: 15.00, icon: "📺" },
    EverydayComparison { item: "gas tank fill-up", cost: 50.00, icon: "⛽" },
    EverydayComparison { item: "grocery trip", cost: 100.00, icon: "🛒" },
    EverydayComparison { item: "dinner out", cost: 60.00, icon: "🍽️" },
    EverydayComparison { item: "phone bill", cost: 80.00, icon: "📱" },
];

/// Describe a daily dollar amount relative to the nearest everyday
/// purchase.
///
/// Selects the table entry with the minimum absolute cost difference
/// (first listed wins ties), then phrases the ratio qualitatively:
/// below half, "less than half a X"; near 1, "about the same as a X";
/// at 2 or more, "about N Xs". Zero and negative amounts still produce
/// a best-effort phrase — the nearest entry is the cheapest one and the
/// ratio lands in the "less than half" band.
pub fn everyday_comparison(daily_amount: f64) -> String {
    // The table is non-empty by construction; seed with the first entry.
    let mut closest = &EVERYDAY_COMPARISONS[0];
    let mut best_diff = (closest.cost - daily_amount).abs();
    for candidate in &EVERYDAY_COMPARISONS[1..] {
        let diff = (candidate.cost - daily_amount).abs();
        if diff < best_diff {
            closest = candidate;
            best_diff = diff;
        }
    }

    let ratio = daily_amount / closest.cost;
    let item = closest.item;

    if ratio < 0.5 {
        format!("less than half a {item}")
    } else if ratio < 0.9 {
        format!("less than a {item}")
    } else if ratio < 1.1 {
        format!("about the same as a {item}")
    } else if ratio < 2.0 {
        format!("a bit more than a {item}")
    } else {
        format!("about {} {item}s", ratio.round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_coffee_match() {
        assert_eq!(
            everyday_comparison(3.50),
            "about the same as a cup of coffee"
        );
    }

    #[test]
    fn well_below_cheapest() {
        assert!(everyday_comparison(1.50).contains("less than half"));
    }

    #[test]
    fn latte_is_closer_than_coffee_at_7_50() {
        // 7.50 is 2.14x coffee but only 1.36x a latte, and the latte is
        // the closer entry (|5.50-7.50| = 2.00 < |3.50-7.50| = 4.00).
        assert_eq!(everyday_comparison(7.50), "a bit more than a latte");
    }

    #[test]
    fn tie_at_fifteen_prefers_movie_ticket() {
        // Movie ticket and streaming subscription both cost $15.00;
        // the first-listed entry wins.
        assert_eq!(
            everyday_comparison(15.00),
            "about the same as a movie ticket"
        );
    }

    #[test]
    fn multiple_phrasing_at_large_amounts() {
        // 210 is closest to the $100 grocery trip; ratio 2.1 rounds to 2.
        assert_eq!(everyday_comparison(210.0), "about 2 grocery trips");
    }

    #[test]
    fn slightly_below_match_phrases_less_than() {
        // 3.00 vs coffee 3.50: ratio ~0.857.
        assert_eq!(everyday_comparison(3.00), "less than a cup of coffee");
    }

    #[test]
    fn zero_amount_best_effort() {
        assert_eq!(everyday_comparison(0.0), "less than half a cup of coffee");
    }

    #[test]
    fn negative_amount_best_effort() {
        assert!(everyday_comparison(-2.0).contains("cup of coffee"));
    }

    #[test]
    fn table_is_stable() {
        assert_eq!(EVERYDAY_COMPARISONS.len(), 9);
        assert_eq!(EVERYDAY_COMPARISONS[0].item, "cup of coffee");
        assert_eq!(EVERYDAY_COMPARISONS[3].cost, EVERYDAY_COMPARISONS[4].cost);
    }

    #[test]
    fn determinism() {
        for _ in 0..5 {
            assert_eq!(everyday_comparison(42.0), everyday_comparison(42.0));
        }
    }
}
