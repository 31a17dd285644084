use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "optima",
    about = "Find roots and extrema of formulas in x (and y)",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct OptimaCli {
    /// Settings file (TOML); flags below override it
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Convergence tolerance
    #[arg(long = "tol", value_name = "EPS", global = true)]
    pub tolerance: Option<f64>,

    /// Iteration cap for the chosen method
    #[arg(long, value_name = "N", global = true)]
    pub max_iters: Option<usize>,

    /// Wall-clock budget in milliseconds
    #[arg(long, value_name = "MS", global = true)]
    pub time_limit: Option<u64>,

    /// Print results as JSON
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Root of f(x) on [low, high] by bisection
    #[command(allow_negative_numbers = true)]
    Bisect {
        formula: String,
        low: f64,
        high: f64,
    },

    /// Minimum or maximum of f(x) on [low, high] by golden section search
    #[command(allow_negative_numbers = true)]
    Golden {
        formula: String,
        low: f64,
        high: f64,
        #[arg(long, value_enum, default_value_t = GoalArg::Min)]
        goal: GoalArg,
    },

    /// Root of f(x) by Newton's method
    ///
    /// Without --derivative the derivative is taken symbolically.
    #[command(allow_negative_numbers = true)]
    Newton {
        formula: String,
        /// Starting point
        x0: f64,
        #[arg(long, value_name = "FORMULA")]
        derivative: Option<String>,
    },

    /// Minimum of f(x, y) by coordinate descent
    #[command(allow_negative_numbers = true)]
    Descent {
        formula: String,
        #[arg(default_value_t = 0.0)]
        x0: f64,
        #[arg(default_value_t = 0.0)]
        y0: f64,
        /// Line search window
        #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"])]
        window: Option<Vec<f64>>,
    },

    /// Definite integral of f(x) over [low, high]
    #[command(allow_negative_numbers = true)]
    Integrate {
        formula: String,
        low: f64,
        high: f64,
        #[arg(short = 'n', long, default_value_t = 100)]
        subintervals: usize,
        #[arg(long, value_enum, default_value_t = RuleArg::Simpson)]
        rule: RuleArg,
    },

    /// Evenly spaced samples of f(x) on [low, high]
    #[command(allow_negative_numbers = true)]
    Sample {
        formula: String,
        low: f64,
        high: f64,
        #[arg(short = 'n', long, default_value_t = 50)]
        count: usize,
    },

    /// Symbolic derivative
    Diff {
        formula: String,
        #[arg(long, default_value = "x")]
        var: String,
    },

    /// Value of f(x) at one point
    #[command(allow_negative_numbers = true)]
    Eval { formula: String, x: f64 },
}

impl Command {
    /// The subcommand name, for error context.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bisect { .. } => "bisect",
            Self::Golden { .. } => "golden",
            Self::Newton { .. } => "newton",
            Self::Descent { .. } => "descent",
            Self::Integrate { .. } => "integrate",
            Self::Sample { .. } => "sample",
            Self::Diff { .. } => "diff",
            Self::Eval { .. } => "eval",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum GoalArg {
    #[value(alias = "minimize")]
    Min,
    #[value(alias = "maximize")]
    Max,
}

impl From<GoalArg> for optima::Goal {
    fn from(goal: GoalArg) -> Self {
        match goal {
            GoalArg::Min => Self::Minimize,
            GoalArg::Max => Self::Maximize,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RuleArg {
    #[value(alias = "rectangle")]
    Midpoint,
    Trapezoid,
    Simpson,
}

impl From<RuleArg> for optima::Rule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Midpoint => Self::Midpoint,
            RuleArg::Trapezoid => Self::Trapezoid,
            RuleArg::Simpson => Self::Simpson,
        }
    }
}
