use crate::infra::{load_dataset, InMemoryActionPlanRepository};
use chrono::{Local, NaiveDate};
use clap::Args;
use fra_dss::config::AppConfig;
use fra_dss::dss::{
    format_budget, EligibilityCriteria, GroupedRecommendations, Priority, Recommendation,
    RecommendationEngine, RecommendationFilter, RecommendationQuery, RecommendationSummary,
};
use fra_dss::error::AppError;
use fra_dss::ingest::sample_dataset;
use fra_dss::plans::{ActionPlanDraft, ActionPlanService, PlanStatus, RiskLevel};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    /// Village dataset (CSV, or JSON when the file ends in .json). Defaults to the sample data.
    #[arg(long)]
    pub(crate) villages: Option<PathBuf>,
    /// Scheme definitions as a JSON array. Defaults to the sample schemes.
    #[arg(long)]
    pub(crate) schemes: Option<PathBuf>,
    /// Only keep recommendations for this village id (repeatable)
    #[arg(long = "village")]
    pub(crate) village_ids: Vec<String>,
    /// Only keep recommendations at this priority (repeatable)
    #[arg(long = "priority")]
    pub(crate) priorities: Vec<Priority>,
    /// Only keep recommendations for this scheme id (repeatable)
    #[arg(long = "scheme")]
    pub(crate) scheme_ids: Vec<String>,
    /// Only score villages with a low groundwater index
    #[arg(long)]
    pub(crate) low_water: bool,
    /// Only score villages with substantial agricultural area
    #[arg(long)]
    pub(crate) has_agriculture: bool,
    /// Only score villages with degraded forest cover
    #[arg(long)]
    pub(crate) forest_degradation: bool,
    /// Only score villages with a high poverty score
    #[arg(long)]
    pub(crate) high_poverty: bool,
    /// Reject datasets with out-of-range indicators instead of warning
    #[arg(long)]
    pub(crate) strict: bool,
    /// Emit the recommendations as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Planned start for the demo action plan (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) plan_start: Option<NaiveDate>,
    /// Duration of the demo action plan in months
    #[arg(long, default_value_t = 6)]
    pub(crate) duration_months: u32,
    /// Skip the action planning portion of the demo.
    #[arg(long)]
    pub(crate) skip_plan: bool,
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let RecommendArgs {
        villages,
        schemes,
        village_ids,
        priorities,
        scheme_ids,
        low_water,
        has_agriculture,
        forest_degradation,
        high_poverty,
        strict,
        json,
    } = args;

    let mut config = AppConfig::load()?;
    if villages.is_some() {
        config.data.villages_path = villages;
    }
    if schemes.is_some() {
        config.data.schemes_path = schemes;
    }
    config.data.strict_validation |= strict;

    let dataset = load_dataset(&config.data)?;
    let query = RecommendationQuery {
        criteria: EligibilityCriteria {
            low_water,
            has_agriculture,
            forest_degradation,
            high_poverty,
        },
        filter: RecommendationFilter {
            villages: village_ids,
            priorities,
            schemes: scheme_ids,
        },
    };
    let recommendations = query.run(
        &RecommendationEngine::default(),
        &dataset.villages,
        &dataset.schemes,
    );

    if json {
        let rendered =
            serde_json::to_string_pretty(&recommendations).map_err(std::io::Error::from)?;
        println!("{rendered}");
        return Ok(());
    }

    render_recommendations(&recommendations);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        plan_start,
        duration_months,
        skip_plan,
    } = args;

    let dataset = sample_dataset();
    let engine = RecommendationEngine::default();

    println!("Decision support demo");
    println!(
        "- {} villages scored against {} schemes",
        dataset.villages.len(),
        dataset.schemes.len()
    );
    for scheme in &dataset.schemes {
        println!(
            "  - {} ({}): weights water {} | agri {} | forest {} | poverty {}",
            scheme.id,
            scheme.name,
            scheme.weights.low_water,
            scheme.weights.agri,
            scheme.weights.degradation,
            scheme.weights.poverty
        );
    }

    let recommendations = engine.generate(&dataset.villages, &dataset.schemes);
    render_recommendations(&recommendations);

    let water_stressed = RecommendationQuery {
        criteria: EligibilityCriteria {
            low_water: true,
            ..EligibilityCriteria::default()
        },
        filter: RecommendationFilter {
            priorities: vec![Priority::High],
            ..RecommendationFilter::default()
        },
    }
    .run(&engine, &dataset.villages, &dataset.schemes);
    println!(
        "\nWater-stressed villages: {} high priority recommendations",
        water_stressed.len()
    );
    for recommendation in &water_stressed {
        println!(
            "  - {} -> {}",
            recommendation.scheme_id, recommendation.village_name
        );
    }

    if skip_plan {
        return Ok(());
    }

    let Some(top) = recommendations.first() else {
        println!("\nNo recommendations available to plan against");
        return Ok(());
    };

    println!("\nAction planning demo");
    let repository = Arc::new(InMemoryActionPlanRepository::default());
    let service = ActionPlanService::new(repository);
    let draft = ActionPlanDraft {
        assigned_department: "Water Resources Department".to_string(),
        planned_start: Some(plan_start.unwrap_or_else(|| Local::now().date_naive())),
        estimated_duration_months: Some(duration_months),
        notes: format!("Drafted from: {}", top.justification),
        milestones: vec![
            "Gram sabha consultation".to_string(),
            "Detailed project report".to_string(),
            "Works completion".to_string(),
        ],
        risk_assessment: RiskLevel::Medium,
        ..ActionPlanDraft::for_recommendation(top.clone())
    };

    let plan = match service.create(draft) {
        Ok(plan) => plan,
        Err(err) => {
            println!("  Plan rejected: {}", err);
            return Ok(());
        }
    };
    println!(
        "- Saved plan {} for {} in {} ({})",
        plan.id.0,
        plan.recommendation.scheme_name,
        plan.recommendation.village_name,
        plan.status.label()
    );
    println!(
        "  Budget allocated: {} | risk {:?} | {} milestones",
        format_budget(plan.budget_allocated),
        plan.risk_assessment,
        plan.milestones.len()
    );
    match plan.timeline() {
        Some((start, end)) => println!("  Timeline: {start} - {end}"),
        None => println!("  Timeline: Not specified"),
    }

    match service.advance(&plan.id, PlanStatus::Approved) {
        Ok(approved) => println!("  Status advanced to {}", approved.status.label()),
        Err(err) => println!("  Status change refused: {}", err),
    }

    Ok(())
}

fn render_recommendations(recommendations: &[Recommendation]) {
    let summary = RecommendationSummary::from_recommendations(recommendations);
    println!("\n{}", summary.headline());
    println!(
        "- High {} | Medium {} | Low {}",
        summary.by_priority.high, summary.by_priority.medium, summary.by_priority.low
    );
    println!(
        "- Estimated budget {} covering {} households",
        format_budget(summary.total_estimated_budget),
        summary.total_affected_households
    );

    let grouped = GroupedRecommendations::from_recommendations(recommendations);
    for (priority, group) in grouped.iter() {
        println!("\n{} priority ({})", priority, group.len());
        for recommendation in group {
            println!(
                "  - [{}] {} -> {} (score {}, {}, {} households)",
                recommendation.scheme_id,
                recommendation.scheme_name,
                recommendation.village_name,
                recommendation.score,
                format_budget(recommendation.estimated_budget),
                recommendation.affected_households
            );
            for line in &recommendation.evidence {
                println!("      {}", line);
            }
            println!("      {}", recommendation.justification);
        }
    }
}
