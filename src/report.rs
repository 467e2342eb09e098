//! Text report for a calculation
//!
//! Each line carries a tag so front ends can colour it: section headers are
//! insights, recommendations are lay or back, everything else is normal.

use crate::engine::{PriceQuote, ResultBundle};
use crate::model::Outcome;
use crate::risk::{positive_edge, ExposureSide, Recommendation, Subject};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

/// Presentation class of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineTag {
    Insight,
    Lay,
    Back,
    Normal,
}

/// One rendered line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub tag: LineTag,
    pub text: String,
}

/// Tagged lines rendered from a `ResultBundle`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn from_bundle(bundle: &ResultBundle) -> Self {
        let mut report = Report::default();
        report.insight(format!("=== Betting Insights ({}) ===", bundle.profile));
        report.blank();

        report.normal(format!("Top {} Likely Scorelines:", bundle.top_scorelines.len()));
        for cell in &bundle.top_scorelines {
            report.normal(format!(
                "  {}-{}: {:.1}% (Fair Odds: {})",
                cell.home,
                cell.away,
                cell.probability * 100.0,
                odds(cell.fair_odds)
            ));
        }
        report.blank();

        let probs = &bundle.blended_probs;
        report.normal("Outcome Probabilities (Model | Blended):");
        for outcome in Outcome::ALL {
            report.normal(format!(
                "  {}: {:.1}% | {:.1}%",
                outcome.label(),
                bundle.model_probs.get(outcome) * 100.0,
                probs.get(outcome) * 100.0
            ));
        }
        report.normal(format!("  Non-Draw: {:.1}%", probs.non_draw() * 100.0));
        report.blank();

        let goal_line = &bundle.goal_line;
        match goal_line.over {
            Some(over) => {
                report.normal(format!("Over/Under {} Goals:", goal_line.line));
                report.normal(format!("  Over: {}", price(&over)));
            }
            None => report.normal(format!("Under {} Goals:", goal_line.line)),
        }
        report.normal(format!("  Under: {}", price(&goal_line.under)));
        report.blank();

        report.normal("Market Odds (Live | Fair):");
        for outcome in Outcome::ALL {
            let quote = bundle.match_odds.get(outcome);
            report.normal(format!(
                "  {}: {} | {}",
                outcome.label(),
                live(quote.live),
                odds(quote.fair)
            ));
        }
        report.blank();

        if !bundle.targets.is_empty() {
            report.normal("Correct Scores (Live | Fair):");
            for target in &bundle.targets {
                report.normal(format!(
                    "  {}-{}: {} | {} ({:.1}%)",
                    target.home,
                    target.away,
                    live(target.price.live),
                    odds(target.price.fair),
                    target.price.probability * 100.0
                ));
            }
            report.blank();
        }

        let xg = &bundle.expected_goals;
        report.normal("Likely Goals Remaining:");
        report.normal(format!(
            "  Total: {:.2} (Home: {:.2}, Away: {:.2})",
            xg.total(),
            xg.home,
            xg.away
        ));
        report.blank();

        report.insight("=== Recommendations ===");
        for rec in &bundle.recommendations {
            report.recommendation(rec);
        }
        for (side, subject, live_odds) in missed(bundle) {
            let side = match side {
                ExposureSide::Lay => "lay",
                ExposureSide::Back => "back",
            };
            match subject {
                Subject::Scoreline { .. } => report.normal(format!(
                    "  No {} edge for {} @ {}.",
                    side,
                    subject,
                    live(live_odds)
                )),
                _ => report.normal(format!("  No {} edge for {}.", side, subject)),
            }
        }

        report
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    fn push(&mut self, tag: LineTag, text: impl Into<String>) {
        self.lines.push(ReportLine {
            tag,
            text: text.into(),
        });
    }

    fn insight(&mut self, text: impl Into<String>) {
        self.push(LineTag::Insight, text);
    }

    fn normal(&mut self, text: impl Into<String>) {
        self.push(LineTag::Normal, text);
    }

    fn blank(&mut self) {
        self.normal("");
    }

    fn recommendation(&mut self, rec: &Recommendation) {
        match rec.side {
            ExposureSide::Lay => {
                let liability = rec.liability.unwrap_or(Decimal::ZERO);
                self.push(
                    LineTag::Lay,
                    format!(
                        "  Lay {} @ {}: Edge {:.2}%, Liability {:.2}, Stake {:.2}",
                        rec.subject,
                        live(rec.live_odds),
                        rec.edge * 100.0,
                        liability,
                        rec.stake
                    ),
                );
            }
            ExposureSide::Back => self.push(
                LineTag::Back,
                format!(
                    "  Back {} @ {}: Edge {:.2}%, Stake {:.2}",
                    rec.subject,
                    live(rec.live_odds),
                    rec.edge * 100.0,
                    rec.stake
                ),
            ),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}

/// Evaluated checks that produced no recommendation, once per distinct
/// side, selection and price
fn missed(bundle: &ResultBundle) -> Vec<(ExposureSide, Subject, f64)> {
    let checked = &bundle.checked;
    let mut checks: Vec<(ExposureSide, Subject, &PriceQuote)> = Vec::new();

    if checked.lay_draw {
        let outcome = Outcome::Draw;
        checks.push((
            ExposureSide::Lay,
            Subject::MatchOdds { outcome },
            bundle.match_odds.get(outcome),
        ));
    }
    if checked.back_match_odds {
        for outcome in Outcome::ALL {
            checks.push((
                ExposureSide::Back,
                Subject::MatchOdds { outcome },
                bundle.match_odds.get(outcome),
            ));
        }
    }
    if checked.lay_under {
        let line = bundle.goal_line.line;
        checks.push((ExposureSide::Lay, Subject::Under { line }, &bundle.goal_line.under));
    }
    for target in &bundle.targets {
        let subject = Subject::Scoreline {
            home: target.home,
            away: target.away,
        };
        if checked.lay_targets {
            checks.push((ExposureSide::Lay, subject, &target.price));
        }
        if checked.back_targets {
            checks.push((ExposureSide::Back, subject, &target.price));
        }
    }

    let mut missed = Vec::new();
    for (side, subject, quote) in checks {
        if positive_edge(side, quote.fair, quote.live).is_some() {
            continue;
        }
        let entry = (side, subject, quote.live);
        if !missed.contains(&entry) {
            missed.push(entry);
        }
    }
    missed
}

fn odds(value: f64) -> String {
    if value.is_infinite() {
        "inf".to_string()
    } else {
        format!("{:.2}", value)
    }
}

fn live(value: f64) -> String {
    if value > 0.0 {
        format!("{:.2}", value)
    } else {
        "-".to_string()
    }
}

fn price(quote: &PriceQuote) -> String {
    format!("Fair Odds {} | Live Odds {}", odds(quote.fair), live(quote.live))
}
