//! Static content tables for the page: navigation anchors, the competition
//! timeline, prizes and the FAQ. All of it is fixed at compile time; the
//! sections in `pages::home` render these verbatim.

/// One navbar entry. `id` doubles as the section's anchor id.
#[derive(Clone, Copy, PartialEq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

/// Navbar entries in page order, top to bottom.
pub const NAV_ITEMS: [NavItem; 9] = [
    NavItem { id: "about", label: "About" },
    NavItem { id: "how", label: "How It Works" },
    NavItem { id: "prizes", label: "Prizes" },
    NavItem { id: "rules", label: "Rules" },
    NavItem { id: "eligibility", label: "Eligibility" },
    NavItem { id: "registration", label: "Registration" },
    NavItem { id: "dates", label: "Dates" },
    NavItem { id: "faq", label: "FAQ" },
    NavItem { id: "contact", label: "Contact" },
];

#[derive(Clone, Copy, PartialEq)]
pub struct TimelineEntry {
    pub label: &'static str,
    pub date: &'static str,
}

/// The five competition milestones, in chronological order.
pub const TIMELINE: [TimelineEntry; 5] = [
    TimelineEntry { label: "Registration opens", date: "Wednesday, August 20" },
    TimelineEntry { label: "Registration closes", date: "Friday, November 28" },
    TimelineEntry { label: "Trading begins", date: "Monday, December 1" },
    TimelineEntry { label: "Trading ends", date: "Monday, March 2" },
    TimelineEntry { label: "Winners announced", date: "Monday, March 9" },
];

#[derive(Clone, Copy, PartialEq)]
pub struct Prize {
    pub place: &'static str,
    pub amount: &'static str,
    pub medal: &'static str,
}

/// Top-three payouts out of the $1,000 pool.
pub const PRIZES: [Prize; 3] = [
    Prize { place: "First Place", amount: "$500", medal: "🥇" },
    Prize { place: "Second Place", amount: "$300", medal: "🥈" },
    Prize { place: "Third Place", amount: "$200", medal: "🥉" },
];

#[derive(Clone, Copy, PartialEq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub default_open: bool,
}

/// FAQ entries; only the first starts expanded.
pub const FAQ_ENTRIES: [FaqEntry; 4] = [
    FaqEntry {
        question: "Do I need real money to participate?",
        answer: "No. The competition uses virtual cash on the HTMW simulator, so there is no real financial risk.",
        default_open: true,
    },
    FaqEntry {
        question: "What happens if I create more than one account?",
        answer: "Only one account per student is allowed. Multiple accounts will result in removal of all accounts.",
        default_open: false,
    },
    FaqEntry {
        question: "Can I trade crypto or options?",
        answer: "No. Options, commodities, and short selling are prohibited. Stick to equities priced at $5 or higher.",
        default_open: false,
    },
    FaqEntry {
        question: "What time can I trade?",
        answer: "Trades follow real market hours: Monday–Friday, 9:30 AM to 4:00 PM EST, in line with the NYSE.",
        default_open: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config;

    #[test]
    fn nav_anchors_in_page_order() {
        let ids: Vec<&str> = NAV_ITEMS.iter().map(|item| item.id).collect();
        assert_eq!(
            ids,
            [
                "about",
                "how",
                "prizes",
                "rules",
                "eligibility",
                "registration",
                "dates",
                "faq",
                "contact"
            ]
        );
    }

    #[test]
    fn timeline_has_five_milestones_in_order() {
        assert_eq!(TIMELINE.len(), 5);
        let labels: Vec<&str> = TIMELINE.iter().map(|entry| entry.label).collect();
        assert_eq!(
            labels,
            [
                "Registration opens",
                "Registration closes",
                "Trading begins",
                "Trading ends",
                "Winners announced"
            ]
        );
        assert_eq!(TIMELINE[0].date, "Wednesday, August 20");
        assert_eq!(TIMELINE[1].date, "Friday, November 28");
        assert_eq!(TIMELINE[2].date, "Monday, December 1");
        assert_eq!(TIMELINE[3].date, "Monday, March 2");
        assert_eq!(TIMELINE[4].date, "Monday, March 9");
    }

    #[test]
    fn prizes_sum_to_the_pool() {
        assert_eq!(PRIZES.len(), 3);
        let total: u32 = PRIZES
            .iter()
            .map(|prize| prize.amount.trim_start_matches('$').parse::<u32>().unwrap())
            .sum();
        assert_eq!(total, 1_000);
        assert_eq!(PRIZES[0].amount, "$500");
        assert_eq!(PRIZES[1].amount, "$300");
        assert_eq!(PRIZES[2].amount, "$200");
    }

    #[test]
    fn only_the_first_faq_entry_starts_open() {
        let open: Vec<bool> = FAQ_ENTRIES.iter().map(|entry| entry.default_open).collect();
        assert_eq!(open, [true, false, false, false]);
    }

    #[test]
    fn outbound_targets_are_exact() {
        assert_eq!(
            config::HTMW_REGISTER_URL,
            "https://app.howthemarketworks.com/register/343878"
        );
        assert_eq!(
            config::ENTRY_FORM_URL,
            "https://docs.google.com/forms/d/e/1FAIpQLSfHwX6r2kgORMj8v_oUI4khJ-JMN6QuMfgs2zjoEb8wcUlaxw/viewform?usp=header"
        );
        assert_eq!(config::HTMW_HOME_URL, "https://www.howthemarketworks.com/");
        assert_eq!(config::REGISTRATION_PASSWORD, "West100");
    }
}
