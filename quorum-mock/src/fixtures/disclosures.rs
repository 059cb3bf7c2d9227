use quorum_core::{DisclosureReport, ReportBundle};

pub fn by_symbol(s: &str) -> ReportBundle {
    let sina_text = if s == "600519" {
        "贵州茅台发布公司治理专项报告，董事会审议通过内部控制评价。".to_string()
    } else {
        format!("{s} 公司治理结构稳定，未发现重大缺陷。")
    };

    ReportBundle {
        reports: vec![
            DisclosureReport {
                source: "Sina Finance Report".to_string(),
                text: sina_text,
                translated: false,
            },
            DisclosureReport {
                source: "China SEC Report".to_string(),
                text: "证监会发布上市公司治理准则修订说明。".to_string(),
                translated: false,
            },
        ],
    }
}
