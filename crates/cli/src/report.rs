use std::fmt::Write;

use optima::{
    Advisory, Classification, Curvature, Expression, Integral, Location, Outcome, Sample,
    SolveError,
};
use serde_json::{Value, json};

/// Whatever a subcommand produced, ready to print.
#[derive(Debug)]
pub enum Report {
    Outcome(Outcome),
    Integral(Integral),
    Samples(Vec<Sample>),
    Derivative(Expression),
    Value { x: f64, value: f64 },
}

impl Report {
    pub fn render(&self, json: bool) -> serde_json::Result<String> {
        if !json {
            return Ok(match self {
                Self::Outcome(outcome) => outcome_text(outcome),
                Self::Integral(integral) => integral_text(integral),
                Self::Samples(samples) => samples_text(samples),
                Self::Derivative(derivative) => derivative.to_string(),
                Self::Value { value, .. } => value.to_string(),
            });
        }

        match self {
            Self::Outcome(outcome) => serde_json::to_string_pretty(outcome),
            Self::Integral(integral) => serde_json::to_string_pretty(integral),
            Self::Samples(samples) => Ok(samples_json(samples).to_string()),
            Self::Derivative(derivative) => {
                Ok(json!({ "derivative": derivative.to_string() }).to_string())
            }
            Self::Value { x, value } => {
                Ok(json!({ "location": Location::Scalar(*x), "value": value }).to_string())
            }
        }
    }
}

fn outcome_text(outcome: &Outcome) -> String {
    let kind = match outcome.classification {
        Classification::Root => "root",
        Classification::Minimum => "minimum",
        Classification::Maximum => "maximum",
        Classification::Indeterminate => "stationary point (kind indeterminate)",
    };

    let mut text = format!(
        "{kind} at {}\nf = {}\niterations: {}",
        outcome.location, outcome.value, outcome.iterations
    );

    match outcome.advisory {
        Some(Advisory::OppositeEstimate { value }) => {
            let _ = write!(text, "\nopposite extremum (rough estimate): {value}");
        }
        Some(Advisory::Curvature { curvature }) => {
            let label = match curvature {
                Curvature::Minimum => "positive (minimum of the antiderivative)",
                Curvature::Maximum => "negative (maximum of the antiderivative)",
                Curvature::Inconclusive => "inconclusive",
            };
            let _ = write!(text, "\ncurvature: {label}");
        }
        None => {}
    }
    text
}

fn integral_text(integral: &Integral) -> String {
    format!(
        "integral = {}\nsubintervals: {}, evaluations: {}",
        integral.value, integral.subintervals, integral.evaluations
    )
}

fn samples_text(samples: &[Sample]) -> String {
    samples
        .iter()
        .map(|s| match s.y {
            Some(y) => format!("{}\t{}", s.x, y),
            None => format!("{}\t-", s.x),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn samples_json(samples: &[Sample]) -> Value {
    Value::Array(
        samples
            .iter()
            .map(|s| json!({ "x": s.x, "y": s.y }))
            .collect(),
    )
}

pub fn error_json(err: &SolveError) -> Value {
    json!({ "error": { "kind": err.kind(), "message": err.to_string() } })
}

#[cfg(test)]
mod tests {
    use super::*;

    use optima::Probe;

    fn outcome(advisory: Option<Advisory>) -> Outcome {
        Outcome {
            location: Location::Scalar(2.0),
            value: 0.0,
            classification: Classification::Root,
            iterations: 4,
            advisory,
            path: vec![Probe {
                location: Location::Scalar(3.0),
                value: Some(5.0),
            }],
        }
    }

    #[test]
    fn text_names_the_classification() {
        let text = outcome_text(&outcome(None));
        assert_eq!(text, "root at x = 2\nf = 0\niterations: 4");
    }

    #[test]
    fn text_includes_advisory() {
        let text = outcome_text(&outcome(Some(Advisory::Curvature {
            curvature: Curvature::Maximum,
        })));
        assert!(text.ends_with("curvature: negative (maximum of the antiderivative)"));
    }

    #[test]
    fn gaps_render_as_dashes() {
        let samples = [Sample { x: 0.0, y: None }, Sample { x: 1.0, y: Some(1.0) }];

        assert_eq!(samples_text(&samples), "0\t-\n1\t1");
        assert_eq!(samples_json(&samples)[0]["y"], Value::Null);
    }

    #[test]
    fn json_value_report() {
        let report = Report::Value { x: 5.0, value: 11.0 };

        let text = report.render(true).expect("serializes");

        assert_eq!(text, r#"{"location":5.0,"value":11.0}"#);
        assert_eq!(report.render(false).expect("plain"), "11");
    }

    #[test]
    fn errors_carry_their_kind() {
        let err = SolveError::NonConvergence { iterations: 9 };
        let value = error_json(&err);

        assert_eq!(value["error"]["kind"], json!("non_convergence"));
        assert_eq!(value["error"]["message"], json!("no convergence after 9 iterations"));
    }
}
