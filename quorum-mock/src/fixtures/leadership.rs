use quorum_core::Leadership;

pub fn by_symbol(s: &str) -> Option<Leadership> {
    match s {
        "MSFT" => Some(Leadership {
            ceo: Some("Satya Nadella".to_string()),
            chairman: Some("John W. Thompson".to_string()),
            board: [
                "Satya Nadella",
                "John W. Thompson",
                "Reid Hoffman",
                "Hugh Johnston",
                "Teri L. List",
                "Sandra E. Peterson",
            ]
            .iter()
            .map(ToString::to_string)
            .collect(),
            esg_total: Some(14.4),
        }),
        // A founder-led company where one person holds both roles.
        "DUAL" => Some(Leadership {
            ceo: Some("Pat Founder".to_string()),
            chairman: Some("Pat Founder".to_string()),
            board: ["Pat Founder", "Kim Lee", "Ana Cruz"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            esg_total: None,
        }),
        // Sparse coverage: officers published without titles.
        "SPARSE" => Some(Leadership::default()),
        "MISSING" => None,
        _ => Some(Leadership {
            ceo: Some("Alex Example".to_string()),
            chairman: Some("Blake Sample".to_string()),
            board: ["Alex Example", "Blake Sample", "Casey Demo"]
                .iter()
                .map(ToString::to_string)
                .collect(),
            esg_total: Some(20.0),
        }),
    }
}
