use quorum_core::EsgBreakdown;

pub fn by_symbol(s: &str) -> Option<EsgBreakdown> {
    match s {
        "MSFT" => Some(EsgBreakdown {
            environment: Some(2.8),
            social: Some(8.4),
            governance: Some(3.2),
        }),
        // Partial coverage: only the governance pillar is published.
        "SPARSE" => Some(EsgBreakdown {
            environment: None,
            social: None,
            governance: Some(61.0),
        }),
        "MISSING" => None,
        _ => Some(EsgBreakdown {
            environment: Some(10.0),
            social: Some(12.0),
            governance: Some(14.0),
        }),
    }
}
