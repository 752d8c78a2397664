use crate::core::{
    Level, MigrationPlan, OptimizationResult, ServiceBoundary, ServiceHealth, SystemMetrics,
};
use colored::*;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_optimization(&mut self, result: &OptimizationResult) -> anyhow::Result<()>;
    fn write_health(&mut self, health: &[ServiceHealth]) -> anyhow::Result<()>;
}

const METRIC_ROWS: [&str; 6] = [
    "Cohesion",
    "Coupling",
    "Complexity",
    "Maintainability",
    "Performance",
    "Domain alignment",
];

fn metric_values(metrics: &SystemMetrics) -> [f64; 6] {
    [
        metrics.cohesion,
        metrics.coupling,
        metrics.complexity,
        metrics.maintainability,
        metrics.performance,
        metrics.domain_alignment,
    ]
}

fn generated_at() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Health reports are wrapped the same way the HTTP endpoint wraps them.
#[derive(serde::Serialize)]
struct HealthReport<'a> {
    metrics: &'a [ServiceHealth],
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_optimization(&mut self, result: &OptimizationResult) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(result)?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn write_health(&mut self, health: &[ServiceHealth]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(&HealthReport { metrics: health })?;
        writeln!(self.writer, "{json}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "# {title}")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "Generated: {}", generated_at())?;
        writeln!(self.writer, "Version: {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, result: &OptimizationResult) -> anyhow::Result<()> {
        let metrics = &result.optimization_metrics;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Services: {} → {}",
            result.original_boundaries.len(),
            result.optimized_boundaries.len()
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Original | Optimized |")?;
        writeln!(self.writer, "|--------|----------|-----------|")?;
        let original = metric_values(&metrics.original);
        let optimized = metric_values(&metrics.optimized);
        for (i, name) in METRIC_ROWS.iter().enumerate() {
            writeln!(
                self.writer,
                "| {name} | {:.2} | {:.2} |",
                original[i], optimized[i]
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "- Complexity reduction: {:+.3}",
            metrics.complexity_reduction
        )?;
        writeln!(
            self.writer,
            "- Performance impact: {:+.3}",
            metrics.performance_impact
        )?;
        writeln!(
            self.writer,
            "- Maintainability improvement: {:+.3}",
            metrics.maintainability_improvement
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_boundaries(&mut self, boundaries: &[ServiceBoundary]) -> anyhow::Result<()> {
        if boundaries.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Optimized Services")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Id | Name | Domain | Features | Owns |")?;
        writeln!(self.writer, "|----|------|--------|----------|------|")?;
        for boundary in boundaries {
            writeln!(
                self.writer,
                "| `{}` | {} | {} | {} | {} |",
                boundary.id,
                boundary.name,
                boundary.domain,
                boundary.features.len(),
                boundary.data_ownership.join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_recommendations(&mut self, result: &OptimizationResult) -> anyhow::Result<()> {
        if result.recommendations.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "## Recommendations")?;
        writeln!(self.writer)?;
        for (i, rec) in result.recommendations.iter().enumerate() {
            writeln!(
                self.writer,
                "{}. **{}** ({} priority, {} complexity, {})",
                i + 1,
                rec.recommendation_type,
                rec.priority,
                rec.implementation_complexity,
                rec.estimated_effort
            )?;
            writeln!(self.writer, "   - Services: {}", rec.services.join(", "))?;
            writeln!(self.writer, "   - {}", rec.reasoning)?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_plan(&mut self, plan: &MigrationPlan) -> anyhow::Result<()> {
        writeln!(self.writer, "## Migration Plan ({})", plan.total_duration)?;
        writeln!(self.writer)?;
        for phase in &plan.phases {
            writeln!(
                self.writer,
                "### {}: {} ({})",
                phase.id, phase.name, phase.estimated_duration
            )?;
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", phase.description)?;
            writeln!(self.writer)?;
            for deliverable in &phase.deliverables {
                writeln!(self.writer, "- [ ] {deliverable}")?;
            }
            writeln!(self.writer)?;
        }

        let risk = &plan.risk_assessment;
        writeln!(self.writer, "### Risk: {}", risk.overall_risk)?;
        writeln!(self.writer)?;
        for factor in &risk.risk_factors {
            writeln!(
                self.writer,
                "- **{}** (impact {}, probability {}): {}",
                factor.factor, factor.impact, factor.probability, factor.mitigation
            )?;
        }
        writeln!(self.writer)?;
        writeln!(self.writer, "### Rollback")?;
        writeln!(self.writer)?;
        for (i, step) in plan.rollback_strategy.iter().enumerate() {
            writeln!(self.writer, "{}. {step}", i + 1)?;
        }
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_optimization(&mut self, result: &OptimizationResult) -> anyhow::Result<()> {
        self.write_header("Boundmap Optimization Report")?;
        self.write_summary(result)?;
        self.write_boundaries(&result.optimized_boundaries)?;
        self.write_recommendations(result)?;
        if let Some(plan) = &result.migration_plan {
            self.write_plan(plan)?;
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_health(&mut self, health: &[ServiceHealth]) -> anyhow::Result<()> {
        self.write_header("Boundmap Service Health")?;
        writeln!(
            self.writer,
            "| Service | Cohesion | Coupling | Complexity | Maintainability | Performance |"
        )?;
        writeln!(
            self.writer,
            "|---------|----------|----------|------------|-----------------|-------------|"
        )?;
        for entry in health {
            let m = &entry.metrics;
            writeln!(
                self.writer,
                "| {} | {:.2} | {:.2} | {:.2} | {:.2} | {:.2} |",
                entry.service_name,
                m.cohesion,
                m.coupling,
                m.complexity,
                m.maintainability,
                m.performance
            )?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

/// Color a score where higher is better.
fn score_cell(value: f64) -> String {
    let text = format!("{value:.2}");
    match value {
        x if x >= 0.7 => text.green().to_string(),
        x if x >= 0.4 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

fn level_label(level: Level) -> ColoredString {
    match level {
        Level::High => "HIGH".red().bold(),
        Level::Medium => "MEDIUM".yellow(),
        Level::Low => "LOW".green(),
    }
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_optimization(&mut self, result: &OptimizationResult) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Boundmap Optimization Report".bold().blue())?;
        writeln!(self.writer, "{}", "============================".blue())?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Services: {} → {}",
            result.original_boundaries.len(),
            result.optimized_boundaries.len().to_string().bold()
        )?;

        let metrics = &result.optimization_metrics;
        let mut table = new_table(vec!["Metric", "Original", "Optimized"]);
        let original = metric_values(&metrics.original);
        let optimized = metric_values(&metrics.optimized);
        for (i, name) in METRIC_ROWS.iter().enumerate() {
            table.add_row(vec![
                name.to_string(),
                format!("{:.2}", original[i]),
                format!("{:.2}", optimized[i]),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        writeln!(self.writer)?;

        if result.recommendations.is_empty() {
            writeln!(self.writer, "{} No restructuring recommended", "✓".green())?;
        } else {
            writeln!(self.writer, "{}", "Recommendations:".bold())?;
            for rec in &result.recommendations {
                writeln!(
                    self.writer,
                    "  [{}] {} - {} ({})",
                    level_label(rec.priority),
                    rec.recommendation_type.to_string().yellow(),
                    rec.services.join(", "),
                    rec.estimated_effort
                )?;
            }
        }

        if let Some(plan) = &result.migration_plan {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{} {} (risk: {})",
                "Migration plan:".bold(),
                plan.total_duration,
                level_label(plan.risk_assessment.overall_risk)
            )?;
            for phase in &plan.phases {
                writeln!(
                    self.writer,
                    "  {} {} ({})",
                    phase.id.dimmed(),
                    phase.name,
                    phase.estimated_duration
                )?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_health(&mut self, health: &[ServiceHealth]) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", "Service Health".bold().blue())?;
        let mut table = new_table(vec![
            "Service",
            "Cohesion",
            "Coupling",
            "Complexity",
            "Maintainability",
            "Performance",
        ]);
        for entry in health {
            let m = &entry.metrics;
            table.add_row(vec![
                entry.service_name.clone(),
                score_cell(m.cohesion),
                score_cell(1.0 - m.coupling),
                score_cell(1.0 - m.complexity),
                score_cell(m.maintainability),
                score_cell(m.performance),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub fn create_writer(format: OutputFormat, writer: Box<dyn Write>) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}
