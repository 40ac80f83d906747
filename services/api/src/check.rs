use clap::Args;
use listing_audit::analysis::{
    ComplianceAnalyzer, ComplianceRequest, ComplianceResult, InvalidInputError, SeoAnalyzer,
    SeoRequest, SeoResult,
};
use listing_audit::config::{AppConfig, AuditLimits};
use listing_audit::error::AppError;
use serde_json::json;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct CheckArgs {
    /// Listing description to analyze
    #[arg(long, conflicts_with = "file")]
    pub(crate) text: Option<String>,
    /// Read the listing description from a file
    #[arg(long)]
    pub(crate) file: Option<PathBuf>,
    /// Listing title; enables the SEO check together with --location
    #[arg(long)]
    pub(crate) title: Option<String>,
    /// Target location for the SEO check (e.g. "Austin")
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Print machine-readable JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let limits = AppConfig::load()?.audit;
    let report = analyze_listing(args, &limits)?;

    if report.json {
        println!(
            "{:#}",
            json!({ "compliance": report.compliance, "seo": report.seo })
        );
    } else {
        render_compliance(&report.compliance);
        match &report.seo {
            Some(seo) => render_seo(seo),
            None => println!("\nSEO check skipped (pass --title and --location to enable)"),
        }
    }

    Ok(())
}

struct CheckReport {
    compliance: ComplianceResult,
    seo: Option<SeoResult>,
    json: bool,
}

fn analyze_listing(args: CheckArgs, limits: &AuditLimits) -> Result<CheckReport, AppError> {
    let CheckArgs {
        text,
        file,
        title,
        location,
        json,
    } = args;

    let text = match (text, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err(InvalidInputError::MissingField("text").into()),
    };

    let input = ComplianceRequest {
        listing_id: None,
        text: Some(text.clone()),
    }
    .validate(limits)?;
    let compliance = ComplianceAnalyzer::new().analyze(&input.text);

    let seo = if title.is_some() || location.is_some() {
        let input = SeoRequest {
            listing_id: None,
            title,
            description: Some(text),
            location,
        }
        .validate(limits)?;
        Some(SeoAnalyzer::new().analyze(&input.text, &input.title, &input.location)?)
    } else {
        None
    };

    Ok(CheckReport {
        compliance,
        seo,
        json,
    })
}

fn render_compliance(result: &ComplianceResult) {
    println!("Fair-housing compliance");
    println!(
        "Score: {}/100 ({})",
        result.score,
        if result.is_compliant {
            "compliant"
        } else {
            "not compliant"
        }
    );

    if result.issues.is_empty() {
        println!("Issues: none");
    } else {
        println!("Issues");
        for issue in &result.issues {
            println!(
                "- [{}] {} '{}': {}",
                issue.severity.label(),
                issue.category,
                issue.matched_text,
                issue.suggestion
            );
        }
    }

    if let Some(improved) = &result.improved_text {
        println!("Suggested rewrite:\n{improved}");
    }
}

fn render_seo(result: &SeoResult) {
    println!("\nSEO quality");
    println!("Score: {}/100", result.score);

    if !result.keywords.is_empty() {
        println!("Top keywords: {}", result.keywords.join(", "));
    }

    println!("Suggestions");
    for suggestion in &result.suggestions {
        println!("- {}: {}", suggestion.issue, suggestion.suggestion);
    }

    if let Some(improved) = &result.improved_text {
        println!("Suggested rewrite:\n{improved}");
    }
}
